use crate::model::ProcurementRow;

/// Flag validated rows whose own bank account disagrees with the SAP-sourced
/// one. The flag is re-initialized to false for every row, including rows
/// outside the validated type. Absent values never produce a mismatch: rows
/// missing either side keep the flag false.
pub fn flag_bank_mismatches(
    rows: Vec<ProcurementRow>,
    validated_type: &str,
) -> Vec<ProcurementRow> {
    let mut rows = rows;
    for row in rows.iter_mut() {
        row.bank_account_mismatch = false;
        if row.record_type != validated_type {
            continue;
        }
        if let (Some(own), Some(sap)) = (&row.bank_account, &row.bank_account_sap) {
            row.bank_account_mismatch = own != sap;
        }
    }
    rows
}
