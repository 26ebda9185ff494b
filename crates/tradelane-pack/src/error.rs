//! Pack-specific error types.
//!
//! Structured errors for loading and validating regulation packs. Errors
//! carry the file path where one exists so a broken pack can be located
//! without re-running with extra logging.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a regulation pack.
#[derive(Debug, Error)]
pub enum PackError {
    /// YAML parsing failed for a file on disk.
    #[error("failed to parse YAML at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// A required file was not found.
    #[error("required file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Two entries share a country code.
    #[error("duplicate country code in regulation pack: {code}")]
    DuplicateCountry { code: String },

    /// An alias names a code the pack does not define.
    #[error("alias {alias:?} points at unknown country code {code}")]
    UnknownAliasTarget { alias: String, code: String },

    /// A rate or multiplier is outside its permitted range.
    #[error("{field} for {code} is {value}, expected a finite value in [{min}, {max}]")]
    RateOutOfRange {
        code: String,
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Aggregated validation failure.
    #[error("validation error: {0}")]
    Validation(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic serde_yaml error (not file-specific).
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for pack operations.
pub type PackResult<T> = Result<T, PackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let err = PackError::FileNotFound {
            path: PathBuf::from("/tmp/missing.yaml"),
        };
        assert!(format!("{err}").contains("/tmp/missing.yaml"));
    }

    #[test]
    fn duplicate_country_display() {
        let err = PackError::DuplicateCountry {
            code: "US".to_string(),
        };
        assert!(format!("{err}").contains("US"));
    }

    #[test]
    fn unknown_alias_target_display() {
        let err = PackError::UnknownAliasTarget {
            alias: "ATLANTIS".to_string(),
            code: "AT".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("ATLANTIS"));
        assert!(msg.contains("AT"));
    }

    #[test]
    fn rate_out_of_range_display() {
        let err = PackError::RateOutOfRange {
            code: "UK".to_string(),
            field: "tax_rates.import",
            value: 120.0,
            min: 0.0,
            max: 100.0,
        };
        let msg = format!("{err}");
        assert!(msg.contains("tax_rates.import"));
        assert!(msg.contains("120"));
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = PackError::from(io_err);
        assert!(format!("{err}").contains("access denied"));
    }
}
