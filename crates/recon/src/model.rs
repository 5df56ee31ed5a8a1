use std::collections::HashMap;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A single procurement ledger row. Enrichment fields stay absent/false
/// until the pipeline stages fill them in.
#[derive(Debug, Clone, Serialize)]
pub struct ProcurementRow {
    pub row_id: String,
    pub record_type: String,
    pub vendor_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
    pub invoice_number: String,
    pub raw_fields: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name_sap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account_sap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name_inv: Option<String>,
    pub bank_account_mismatch: bool,
}

/// One vendor master entry. Read-only reference data; duplicate vendor
/// codes resolve last-write-wins in the lookup.
#[derive(Debug, Clone)]
pub struct VendorMasterRow {
    pub vendor_code: String,
    pub vendor_name: String,
    pub bank_account: Option<String>,
}

/// A single invoice register row. Only the name reconciler writes to an
/// invoice collection, and only to a copy.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceRow {
    pub row_id: String,
    pub invoice_number: String,
    pub vendor_name: String,
    pub raw_fields: HashMap<String, String>,
    pub vendor_name_updated: bool,
}

/// Pre-loaded records for one pipeline run.
pub struct ReconInput {
    pub procurement: Vec<ProcurementRow>,
    pub vendor_master: Vec<VendorMasterRow>,
    pub invoices: Vec<InvoiceRow>,
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ReconSummary {
    pub procurement_rows: usize,
    pub validated_rows: usize,
    pub name_mismatches: usize,
    pub invoices_corrected: usize,
    pub bank_mismatches: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconMeta {
    pub config_name: String,
    pub validated_type: String,
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconResult {
    pub meta: ReconMeta,
    pub summary: ReconSummary,
    pub procurement: Vec<ProcurementRow>,
    pub invoices: Vec<InvoiceRow>,
}
