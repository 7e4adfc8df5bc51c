use std::path::Path;

use thiserror::Error;

/// Top-level error type for the odymenu crate.
#[derive(Error, Debug)]
pub enum OdyError {
    /// Configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML document could not be parsed.
    #[error("{0}")]
    TomlParse(String),

    /// A service reported a failure.
    #[error("Service error: {0}")]
    Service(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, OdyError>;

impl OdyError {
    /// Builds a TOML parse error, including the offending path when known.
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                OdyError::TomlParse(format!(
                    "Failed to parse TOML at {:?}: {}",
                    clean_path, error
                ))
            }
            None => OdyError::TomlParse(format!("Failed to parse TOML: {}", error)),
        }
    }
}
