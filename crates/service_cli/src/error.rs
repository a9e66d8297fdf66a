//! CLI error types

use pricer_analytic::ValidationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid contract: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid contract in row {row}: {source}")]
    InvalidRow {
        /// 1-based data row, header excluded
        row: usize,
        source: ValidationError,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_conversion() {
        let err: CliError = ValidationError::InvalidTerm { term: 0.0 }.into();
        assert!(matches!(err, CliError::Validation(_)));
        assert!(err.to_string().contains("term"));
    }

    #[test]
    fn test_invalid_row_display() {
        let err = CliError::InvalidRow {
            row: 3,
            source: ValidationError::InvalidSpot { spot: -1.0 },
        };
        let msg = err.to_string();
        assert!(msg.contains("row 3"));
        assert!(msg.contains("spot"));
    }

    #[test]
    fn test_config_error_transparent() {
        let err: CliError = ConfigError::InvalidFormat("xml".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Invalid output format: xml. Must be one of: table, json, csv"
        );
    }
}
