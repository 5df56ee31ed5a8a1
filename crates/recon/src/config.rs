use serde::Deserialize;

use crate::error::ReconError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Column mappings and run parameters. Every field has a fixed default, so
/// an empty TOML document (or `ReconConfig::default()`) is a valid config.
#[derive(Debug, Clone, Deserialize)]
pub struct ReconConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Record-type value selecting the rows the pipeline validates.
    #[serde(default = "default_validated_type")]
    pub validated_type: String,
    #[serde(default)]
    pub procurement: ProcurementColumns,
    #[serde(default)]
    pub vendor_master: VendorMasterColumns,
    #[serde(default)]
    pub invoices: InvoiceColumns,
}

impl Default for ReconConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            validated_type: default_validated_type(),
            procurement: ProcurementColumns::default(),
            vendor_master: VendorMasterColumns::default(),
            invoices: InvoiceColumns::default(),
        }
    }
}

fn default_name() -> String {
    "vendor-recon".into()
}

fn default_validated_type() -> String {
    "H".into()
}

// ---------------------------------------------------------------------------
// Column mappings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ProcurementColumns {
    /// Column providing the stable row key. Source row position is used
    /// when unset.
    #[serde(default)]
    pub row_key: Option<String>,
    #[serde(default = "default_record_type")]
    pub record_type: String,
    #[serde(default = "default_vendor_code")]
    pub vendor_code: String,
    #[serde(default = "default_bank_account")]
    pub bank_account: String,
    #[serde(default = "default_invoice_number")]
    pub invoice_number: String,
}

impl Default for ProcurementColumns {
    fn default() -> Self {
        Self {
            row_key: None,
            record_type: default_record_type(),
            vendor_code: default_vendor_code(),
            bank_account: default_bank_account(),
            invoice_number: default_invoice_number(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VendorMasterColumns {
    #[serde(default = "default_vendor_code")]
    pub vendor_code: String,
    #[serde(default = "default_vendor_name")]
    pub vendor_name: String,
    #[serde(default = "default_bank_account")]
    pub bank_account: String,
}

impl Default for VendorMasterColumns {
    fn default() -> Self {
        Self {
            vendor_code: default_vendor_code(),
            vendor_name: default_vendor_name(),
            bank_account: default_bank_account(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceColumns {
    /// Column providing the stable row key. Source row position is used
    /// when unset.
    #[serde(default)]
    pub row_key: Option<String>,
    #[serde(default = "default_invoice_number")]
    pub invoice_number: String,
    #[serde(default = "default_vendor_name")]
    pub vendor_name: String,
}

impl Default for InvoiceColumns {
    fn default() -> Self {
        Self {
            row_key: None,
            invoice_number: default_invoice_number(),
            vendor_name: default_vendor_name(),
        }
    }
}

fn default_record_type() -> String {
    "id_column".into()
}

fn default_vendor_code() -> String {
    "vendor_code".into()
}

fn default_vendor_name() -> String {
    "vendor_name".into()
}

fn default_bank_account() -> String {
    "bank_account".into()
}

fn default_invoice_number() -> String {
    "invoice_number".into()
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl ReconConfig {
    pub fn from_toml(input: &str) -> Result<Self, ReconError> {
        let config: ReconConfig =
            toml::from_str(input).map_err(|e| ReconError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReconError> {
        if self.validated_type.is_empty() {
            return Err(ReconError::ConfigValidation(
                "validated_type must not be empty".into(),
            ));
        }

        let p = &self.procurement;
        let mut proc_columns = vec![
            p.record_type.as_str(),
            p.vendor_code.as_str(),
            p.bank_account.as_str(),
            p.invoice_number.as_str(),
        ];
        if let Some(ref key) = p.row_key {
            proc_columns.push(key.as_str());
        }
        check_columns("procurement", &proc_columns)?;

        let m = &self.vendor_master;
        check_columns(
            "vendor_master",
            &[
                m.vendor_code.as_str(),
                m.vendor_name.as_str(),
                m.bank_account.as_str(),
            ],
        )?;

        let i = &self.invoices;
        let mut inv_columns = vec![i.invoice_number.as_str(), i.vendor_name.as_str()];
        if let Some(ref key) = i.row_key {
            inv_columns.push(key.as_str());
        }
        check_columns("invoices", &inv_columns)?;

        Ok(())
    }
}

fn check_columns(entity: &str, columns: &[&str]) -> Result<(), ReconError> {
    for (i, column) in columns.iter().enumerate() {
        if column.is_empty() {
            return Err(ReconError::ConfigValidation(format!(
                "entity '{entity}': empty column name"
            )));
        }
        if columns[..i].contains(column) {
            return Err(ReconError::ConfigValidation(format!(
                "entity '{entity}': column '{column}' mapped twice"
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
