use std::collections::HashMap;

use crate::error::ReconError;
use crate::model::{ProcurementRow, VendorMasterRow};

/// Enrich procurement rows with vendor-master name and bank data.
///
/// Only rows whose record type equals `validated_type` are touched; all
/// other rows keep their enrichment fields absent. Every validated row's
/// vendor code must resolve against the master: the scan covers all rows
/// before failing, so the error lists every missing code. The input is
/// consumed, so no partially enriched collection escapes on failure.
pub fn enrich_vendor_codes(
    rows: Vec<ProcurementRow>,
    vendor_master: &[VendorMasterRow],
    validated_type: &str,
) -> Result<Vec<ProcurementRow>, ReconError> {
    // vendor_code → (name, bank); duplicate codes resolve last-write-wins
    let mut lookup: HashMap<&str, (&str, Option<&str>)> = HashMap::new();
    for entry in vendor_master {
        lookup.insert(
            entry.vendor_code.as_str(),
            (entry.vendor_name.as_str(), entry.bank_account.as_deref()),
        );
    }

    let mut rows = rows;
    let mut missing: Vec<String> = Vec::new();

    for row in rows.iter_mut() {
        if row.record_type != validated_type {
            continue;
        }
        match lookup.get(row.vendor_code.as_str()) {
            Some((name, bank)) => {
                row.vendor_name_sap = Some((*name).to_string());
                row.bank_account_sap = bank.map(|b| b.to_string());
            }
            None => {
                if !missing.contains(&row.vendor_code) {
                    missing.push(row.vendor_code.clone());
                }
            }
        }
    }

    if !missing.is_empty() {
        return Err(ReconError::VendorNotFound { codes: missing });
    }

    Ok(rows)
}
