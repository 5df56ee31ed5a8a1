use std::collections::HashMap;

use crate::model::{InvoiceRow, ProcurementRow};

/// Cross-check SAP vendor names against the invoice register.
///
/// Validated rows get `vendor_name_inv` attached (absent when no invoice
/// matches; that is a data state, not an error). Where the invoice name
/// disagrees with the SAP name, the corresponding rows of the returned
/// invoice copy are corrected to the SAP name and flagged
/// `vendor_name_updated`. The input register is never written to.
pub fn reconcile_vendor_names(
    rows: Vec<ProcurementRow>,
    invoices: &[InvoiceRow],
    validated_type: &str,
) -> (Vec<ProcurementRow>, Vec<InvoiceRow>) {
    // invoice_number → vendor_name; repeated numbers resolve last-write-wins
    let mut inv_names: HashMap<&str, &str> = HashMap::new();
    for inv in invoices {
        inv_names.insert(inv.invoice_number.as_str(), inv.vendor_name.as_str());
    }

    let mut rows = rows;
    // invoice_number → correct SAP name, from the mismatching rows
    let mut fixes: HashMap<String, String> = HashMap::new();

    for row in rows.iter_mut() {
        if row.record_type != validated_type {
            continue;
        }
        row.vendor_name_inv = inv_names
            .get(row.invoice_number.as_str())
            .map(|n| (*n).to_string());

        if let (Some(inv_name), Some(sap_name)) = (&row.vendor_name_inv, &row.vendor_name_sap) {
            if inv_name != sap_name {
                fixes.insert(row.invoice_number.clone(), sap_name.clone());
            }
        }
    }

    let corrected = invoices
        .iter()
        .map(|inv| {
            let mut inv = inv.clone();
            match fixes.get(&inv.invoice_number) {
                Some(correct) => {
                    inv.vendor_name = correct.clone();
                    inv.vendor_name_updated = true;
                }
                None => inv.vendor_name_updated = false,
            }
            inv
        })
        .collect();

    (rows, corrected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn proc_row(
        row_id: &str,
        record_type: &str,
        invoice_number: &str,
        sap_name: Option<&str>,
    ) -> ProcurementRow {
        ProcurementRow {
            row_id: row_id.into(),
            record_type: record_type.into(),
            vendor_code: "V1".into(),
            bank_account: None,
            invoice_number: invoice_number.into(),
            raw_fields: HashMap::new(),
            vendor_name_sap: sap_name.map(|n| n.to_string()),
            bank_account_sap: None,
            vendor_name_inv: None,
            bank_account_mismatch: false,
        }
    }

    fn invoice(row_id: &str, invoice_number: &str, vendor_name: &str) -> InvoiceRow {
        InvoiceRow {
            row_id: row_id.into(),
            invoice_number: invoice_number.into(),
            vendor_name: vendor_name.into(),
            raw_fields: HashMap::new(),
            vendor_name_updated: false,
        }
    }

    #[test]
    fn mismatch_corrects_invoice_copy() {
        let rows = vec![proc_row("0", "H", "INV-1", Some("Acme GmbH"))];
        let invoices = vec![invoice("0", "INV-1", "Acme Gmbh.")];

        let (rows, corrected) = reconcile_vendor_names(rows, &invoices, "H");
        assert_eq!(rows[0].vendor_name_inv.as_deref(), Some("Acme Gmbh."));
        assert_eq!(corrected[0].vendor_name, "Acme GmbH");
        assert!(corrected[0].vendor_name_updated);
        // input register untouched
        assert_eq!(invoices[0].vendor_name, "Acme Gmbh.");
        assert!(!invoices[0].vendor_name_updated);
    }

    #[test]
    fn matching_names_leave_invoice_as_is() {
        let rows = vec![proc_row("0", "H", "INV-1", Some("Acme GmbH"))];
        let invoices = vec![invoice("0", "INV-1", "Acme GmbH")];

        let (rows, corrected) = reconcile_vendor_names(rows, &invoices, "H");
        assert_eq!(rows[0].vendor_name_inv.as_deref(), Some("Acme GmbH"));
        assert_eq!(corrected[0].vendor_name, "Acme GmbH");
        assert!(!corrected[0].vendor_name_updated);
    }

    #[test]
    fn unmatched_invoice_number_is_silently_skipped() {
        let rows = vec![proc_row("0", "H", "INV-404", Some("Acme GmbH"))];
        let invoices = vec![invoice("0", "INV-1", "Globex AG")];

        let (rows, corrected) = reconcile_vendor_names(rows, &invoices, "H");
        assert!(rows[0].vendor_name_inv.is_none());
        assert_eq!(corrected[0].vendor_name, "Globex AG");
        assert!(!corrected[0].vendor_name_updated);
    }

    #[test]
    fn non_validated_rows_get_no_invoice_name() {
        let rows = vec![proc_row("0", "T", "INV-1", None)];
        let invoices = vec![invoice("0", "INV-1", "Acme Gmbh.")];

        let (rows, corrected) = reconcile_vendor_names(rows, &invoices, "H");
        assert!(rows[0].vendor_name_inv.is_none());
        assert!(!corrected[0].vendor_name_updated);
    }

    #[test]
    fn all_invoice_rows_with_same_number_are_corrected() {
        let rows = vec![proc_row("0", "H", "INV-1", Some("Acme GmbH"))];
        let invoices = vec![
            invoice("0", "INV-1", "Acme Gmbh."),
            invoice("1", "INV-2", "Globex AG"),
            invoice("2", "INV-1", "Acme Inc"),
        ];

        let (_, corrected) = reconcile_vendor_names(rows, &invoices, "H");
        assert_eq!(corrected[0].vendor_name, "Acme GmbH");
        assert!(corrected[0].vendor_name_updated);
        assert!(!corrected[1].vendor_name_updated);
        assert_eq!(corrected[2].vendor_name, "Acme GmbH");
        assert!(corrected[2].vendor_name_updated);
    }

    #[test]
    fn invoice_copy_preserves_row_identity_and_order() {
        let rows = vec![proc_row("0", "H", "INV-2", Some("Globex AG"))];
        let invoices = vec![
            invoice("a", "INV-1", "Acme GmbH"),
            invoice("b", "INV-2", "Globex"),
            invoice("c", "INV-3", "Initech"),
        ];

        let (_, corrected) = reconcile_vendor_names(rows, &invoices, "H");
        let ids: Vec<&str> = corrected.iter().map(|i| i.row_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(corrected.len(), invoices.len());
    }

    #[test]
    fn repeated_invoice_numbers_compare_against_last_register_entry() {
        // the lookup is last-write-wins, so the comparison sees "Acme GmbH"
        // and finds no mismatch
        let rows = vec![proc_row("0", "H", "INV-1", Some("Acme GmbH"))];
        let invoices = vec![
            invoice("0", "INV-1", "Acme Gmbh."),
            invoice("1", "INV-1", "Acme GmbH"),
        ];

        let (rows, corrected) = reconcile_vendor_names(rows, &invoices, "H");
        assert_eq!(rows[0].vendor_name_inv.as_deref(), Some("Acme GmbH"));
        assert!(!corrected[0].vendor_name_updated);
        assert!(!corrected[1].vendor_name_updated);
    }
}
