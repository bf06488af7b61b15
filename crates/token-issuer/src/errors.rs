use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IssuerError {
    #[error("Failed to read private key file {path}: {source}")]
    FileAccess {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid private key format: {0}")]
    KeyFormat(String),

    #[error("JWT signing operation failed: {0}")]
    Signing(String),

    #[error("Invalid issuer configuration: {0}")]
    Config(#[from] ConfigError),
}

impl IssuerError {
    /// Short name of the step that failed, used in diagnostics.
    pub fn step(&self) -> &'static str {
        match self {
            IssuerError::FileAccess { .. } => "read_key_file",
            IssuerError::KeyFormat(_) => "parse_key",
            IssuerError::Signing(_) => "sign_token",
            IssuerError::Config(_) => "validate_config",
        }
    }
}
