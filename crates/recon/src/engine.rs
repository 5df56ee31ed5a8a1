use std::collections::HashMap;

use crate::bank::flag_bank_mismatches;
use crate::config::{InvoiceColumns, ProcurementColumns, ReconConfig, VendorMasterColumns};
use crate::enrich::enrich_vendor_codes;
use crate::error::ReconError;
use crate::instrument::{timed, try_timed};
use crate::model::{
    InvoiceRow, ProcurementRow, ReconInput, ReconMeta, ReconResult, VendorMasterRow,
};
use crate::names::reconcile_vendor_names;
use crate::summary::compute_summary;

/// Run the three-stage pipeline: vendor-code enrichment, vendor-name
/// reconciliation, bank-account validation. Fails only when a validated
/// row's vendor code has no master entry.
pub fn run(config: &ReconConfig, input: ReconInput) -> Result<ReconResult, ReconError> {
    let ReconInput {
        procurement,
        vendor_master,
        invoices,
    } = input;

    let rows = try_timed("vendor_code_enrichment", || {
        enrich_vendor_codes(procurement, &vendor_master, &config.validated_type)
    })?;

    let (rows, invoices) = timed("vendor_name_reconciliation", || {
        reconcile_vendor_names(rows, &invoices, &config.validated_type)
    });

    let rows = timed("bank_account_validation", || {
        flag_bank_mismatches(rows, &config.validated_type)
    });

    let summary = compute_summary(&rows, &invoices, &config.validated_type);

    Ok(ReconResult {
        meta: ReconMeta {
            config_name: config.name.clone(),
            validated_type: config.validated_type.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        procurement: rows,
        invoices,
    })
}

// ---------------------------------------------------------------------------
// CSV loaders
// ---------------------------------------------------------------------------

struct CsvTable {
    headers: Vec<String>,
    records: Vec<csv::StringRecord>,
}

fn read_csv(entity: &str, csv_data: &str) -> Result<CsvTable, ReconError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_data.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ReconError::Csv {
            entity: entity.into(),
            message: e.to_string(),
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records = Vec::new();
    for record in reader.records() {
        records.push(record.map_err(|e| ReconError::Csv {
            entity: entity.into(),
            message: e.to_string(),
        })?);
    }

    Ok(CsvTable { headers, records })
}

fn header_index(table: &CsvTable, entity: &str, column: &str) -> Result<usize, ReconError> {
    table
        .headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| ReconError::MissingColumn {
            entity: entity.into(),
            column: column.into(),
        })
}

/// Resolve the configured row-key column, falling back to the source row
/// position when none is configured.
fn row_id(record: &csv::StringRecord, row_key_idx: Option<usize>, pos: usize) -> String {
    match row_key_idx {
        Some(i) => record.get(i).unwrap_or("").to_string(),
        None => pos.to_string(),
    }
}

fn field(record: &csv::StringRecord, idx: usize) -> String {
    record.get(idx).unwrap_or("").to_string()
}

/// Blank cells count as absent, so they never participate in comparisons.
fn optional_field(record: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| record.get(i))
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}

fn raw_fields(table: &CsvTable, record: &csv::StringRecord) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    for (i, h) in table.headers.iter().enumerate() {
        if let Some(val) = record.get(i) {
            fields.insert(h.clone(), val.to_string());
        }
    }
    fields
}

/// Load procurement ledger rows from CSV text, applying the column mapping.
/// The bank column is tolerated as absent from the headers; every other
/// mapped column is required.
pub fn load_procurement_rows(
    csv_data: &str,
    columns: &ProcurementColumns,
) -> Result<Vec<ProcurementRow>, ReconError> {
    let table = read_csv("procurement", csv_data)?;

    let record_type_idx = header_index(&table, "procurement", &columns.record_type)?;
    let vendor_code_idx = header_index(&table, "procurement", &columns.vendor_code)?;
    let invoice_number_idx = header_index(&table, "procurement", &columns.invoice_number)?;
    let bank_account_idx = table.headers.iter().position(|h| h == &columns.bank_account);
    let row_key_idx = match &columns.row_key {
        Some(column) => Some(header_index(&table, "procurement", column)?),
        None => None,
    };

    let mut rows = Vec::new();
    for (pos, record) in table.records.iter().enumerate() {
        rows.push(ProcurementRow {
            row_id: row_id(record, row_key_idx, pos),
            record_type: field(record, record_type_idx),
            vendor_code: field(record, vendor_code_idx),
            bank_account: optional_field(record, bank_account_idx),
            invoice_number: field(record, invoice_number_idx),
            raw_fields: raw_fields(&table, record),
            vendor_name_sap: None,
            bank_account_sap: None,
            vendor_name_inv: None,
            bank_account_mismatch: false,
        });
    }
    Ok(rows)
}

/// Load vendor master entries from CSV text. A master without the bank
/// column loads with every bank account absent.
pub fn load_vendor_master_rows(
    csv_data: &str,
    columns: &VendorMasterColumns,
) -> Result<Vec<VendorMasterRow>, ReconError> {
    let table = read_csv("vendor_master", csv_data)?;

    let vendor_code_idx = header_index(&table, "vendor_master", &columns.vendor_code)?;
    let vendor_name_idx = header_index(&table, "vendor_master", &columns.vendor_name)?;
    let bank_account_idx = table.headers.iter().position(|h| h == &columns.bank_account);

    let mut rows = Vec::new();
    for record in &table.records {
        rows.push(VendorMasterRow {
            vendor_code: field(record, vendor_code_idx),
            vendor_name: field(record, vendor_name_idx),
            bank_account: optional_field(record, bank_account_idx),
        });
    }
    Ok(rows)
}

/// Load invoice register rows from CSV text.
pub fn load_invoice_rows(
    csv_data: &str,
    columns: &InvoiceColumns,
) -> Result<Vec<InvoiceRow>, ReconError> {
    let table = read_csv("invoices", csv_data)?;

    let invoice_number_idx = header_index(&table, "invoices", &columns.invoice_number)?;
    let vendor_name_idx = header_index(&table, "invoices", &columns.vendor_name)?;
    let row_key_idx = match &columns.row_key {
        Some(column) => Some(header_index(&table, "invoices", column)?),
        None => None,
    };

    let mut rows = Vec::new();
    for (pos, record) in table.records.iter().enumerate() {
        rows.push(InvoiceRow {
            row_id: row_id(record, row_key_idx, pos),
            invoice_number: field(record, invoice_number_idx),
            vendor_name: field(record, vendor_name_idx),
            raw_fields: raw_fields(&table, record),
            vendor_name_updated: false,
        });
    }
    Ok(rows)
}
