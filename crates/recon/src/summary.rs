use crate::model::{InvoiceRow, ProcurementRow, ReconSummary};

/// Compute summary statistics over the final tables.
pub fn compute_summary(
    procurement: &[ProcurementRow],
    invoices: &[InvoiceRow],
    validated_type: &str,
) -> ReconSummary {
    let mut validated_rows = 0;
    let mut name_mismatches = 0;
    let mut bank_mismatches = 0;

    for row in procurement {
        if row.record_type != validated_type {
            continue;
        }
        validated_rows += 1;
        if let (Some(inv), Some(sap)) = (&row.vendor_name_inv, &row.vendor_name_sap) {
            if inv != sap {
                name_mismatches += 1;
            }
        }
        if row.bank_account_mismatch {
            bank_mismatches += 1;
        }
    }

    ReconSummary {
        procurement_rows: procurement.len(),
        validated_rows,
        name_mismatches,
        invoices_corrected: invoices.iter().filter(|i| i.vendor_name_updated).count(),
        bank_mismatches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn proc_row(
        record_type: &str,
        sap_name: Option<&str>,
        inv_name: Option<&str>,
        bank_mismatch: bool,
    ) -> ProcurementRow {
        ProcurementRow {
            row_id: "0".into(),
            record_type: record_type.into(),
            vendor_code: "V1".into(),
            bank_account: None,
            invoice_number: "INV-1".into(),
            raw_fields: HashMap::new(),
            vendor_name_sap: sap_name.map(|n| n.to_string()),
            bank_account_sap: None,
            vendor_name_inv: inv_name.map(|n| n.to_string()),
            bank_account_mismatch: bank_mismatch,
        }
    }

    fn invoice(updated: bool) -> InvoiceRow {
        InvoiceRow {
            row_id: "0".into(),
            invoice_number: "INV-1".into(),
            vendor_name: "Acme GmbH".into(),
            raw_fields: HashMap::new(),
            vendor_name_updated: updated,
        }
    }

    #[test]
    fn counts_cover_all_dimensions() {
        let procurement = vec![
            proc_row("H", Some("Acme GmbH"), Some("Acme Gmbh."), true),
            proc_row("H", Some("Globex AG"), Some("Globex AG"), false),
            proc_row("H", Some("Initech"), None, false),
            proc_row("T", None, None, false),
        ];
        let invoices = vec![invoice(true), invoice(false)];

        let summary = compute_summary(&procurement, &invoices, "H");
        assert_eq!(summary.procurement_rows, 4);
        assert_eq!(summary.validated_rows, 3);
        assert_eq!(summary.name_mismatches, 1);
        assert_eq!(summary.invoices_corrected, 1);
        assert_eq!(summary.bank_mismatches, 1);
    }

    #[test]
    fn empty_input_is_all_zero() {
        let summary = compute_summary(&[], &[], "H");
        assert_eq!(summary.procurement_rows, 0);
        assert_eq!(summary.validated_rows, 0);
        assert_eq!(summary.name_mismatches, 0);
        assert_eq!(summary.invoices_corrected, 0);
        assert_eq!(summary.bank_mismatches, 0);
    }
}
