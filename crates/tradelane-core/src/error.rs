//! # Error Types
//!
//! Errors raised while constructing core vocabulary values from untrusted
//! strings (regulation packs, CLI flags, caller payloads). The compliance
//! evaluator itself never returns these; they surface only at the edges
//! where text becomes a typed value.

use thiserror::Error;

/// Top-level error type for core vocabulary parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TradelaneError {
    /// A category tag is not part of the shared vocabulary.
    #[error("unknown {kind} category: {tag:?}")]
    UnknownCategory {
        /// Which vocabulary was searched ("prohibited" or "restricted").
        kind: &'static str,
        /// The offending tag.
        tag: String,
    },

    /// A country code is not 2–3 ASCII letters.
    #[error("invalid country code {input:?}: {reason}")]
    InvalidCountryCode {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A service-type hint could not be recognised.
    #[error("unknown service type: {0:?}")]
    UnknownServiceType(String),
}

/// Result alias for core parsing.
pub type TradelaneResult<T> = Result<T, TradelaneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_display() {
        let err = TradelaneError::UnknownCategory {
            kind: "prohibited",
            tag: "space_junk".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("prohibited"));
        assert!(msg.contains("space_junk"));
    }

    #[test]
    fn invalid_country_code_display() {
        let err = TradelaneError::InvalidCountryCode {
            input: "U5".to_string(),
            reason: "must contain only ASCII letters",
        };
        assert!(format!("{err}").contains("U5"));
    }

    #[test]
    fn unknown_service_type_display() {
        let err = TradelaneError::UnknownServiceType("teleport".to_string());
        assert!(format!("{err}").contains("teleport"));
    }
}
