//! Engine construction errors.
//!
//! Evaluation itself is infallible; these errors only arise while loading a
//! regulation pack or an engine configuration.

use thiserror::Error;

use tradelane_pack::PackError;

/// Errors raised while building a [`ComplianceEngine`](crate::ComplianceEngine).
#[derive(Debug, Error)]
pub enum ComplianceError {
    /// The regulation pack failed to load or validate.
    #[error("regulation pack error: {0}")]
    Pack(#[from] PackError),

    /// An engine configuration value is out of range.
    #[error("invalid engine config {field}: {reason}")]
    InvalidConfig {
        /// Offending field name.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Result alias for engine construction.
pub type ComplianceResult<T> = Result<T, ComplianceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_display() {
        let err = ComplianceError::InvalidConfig {
            field: "default_cfr_multiplier",
            reason: "must be within [0, 1], got 1.5".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("default_cfr_multiplier"));
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn pack_error_converts() {
        let err = ComplianceError::from(PackError::Validation("empty".to_string()));
        assert!(format!("{err}").contains("regulation pack error"));
    }
}
