use std::fmt;

#[derive(Debug)]
pub enum ReconError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (empty or colliding column names, etc.).
    ConfigValidation(String),
    /// Missing required column in input data.
    MissingColumn { entity: String, column: String },
    /// Malformed CSV input.
    Csv { entity: String, message: String },
    /// One or more validated rows carry a vendor code the master has no entry for.
    /// Codes are deduplicated, in first-occurrence order.
    VendorNotFound { codes: Vec<String> },
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::MissingColumn { entity, column } => {
                write!(f, "entity '{entity}': missing column '{column}'")
            }
            Self::Csv { entity, message } => write!(f, "entity '{entity}': {message}"),
            Self::VendorNotFound { codes } => {
                write!(
                    f,
                    "vendor code(s) not found in vendor master: {}",
                    codes.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for ReconError {}
