//! # Engine Configuration
//!
//! Tunable thresholds and fallback multipliers for the compliance engine.
//! Every field has a default, so an empty YAML document is a valid config.
//!
//! ```yaml
//! high_value_threshold: 5000
//! heavy_weight_threshold_kg: 30
//! default_cfr_multiplier: 0.12
//! default_xwork_multiplier: 0.06
//! domestic_critical_categories: [drugs, weapons, explosives]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use tradelane_core::ProhibitedCategory;
use tradelane_pack::parser::load_yaml_typed;
use tradelane_pack::PackError;

use crate::error::{ComplianceError, ComplianceResult};

/// Engine-wide thresholds and defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Declared values strictly above this raise a high-value warning.
    pub high_value_threshold: f64,
    /// Weights (kg) strictly above this raise a heavy-shipment warning.
    pub heavy_weight_threshold_kg: f64,
    /// CFR multiplier used when the destination does not resolve.
    pub default_cfr_multiplier: f64,
    /// Ex-Works multiplier used when the destination does not resolve.
    pub default_xwork_multiplier: f64,
    /// Prohibited categories checked on the domestic fast path.
    pub domestic_critical_categories: Vec<ProhibitedCategory>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            high_value_threshold: 5000.0,
            heavy_weight_threshold_kg: 30.0,
            default_cfr_multiplier: 0.12,
            default_xwork_multiplier: 0.06,
            domestic_critical_categories: ProhibitedCategory::all()
                .iter()
                .copied()
                .filter(|c| c.is_domestic_critical())
                .collect(),
        }
    }
}

impl EngineConfig {
    /// Parse a config from YAML text and validate it.
    pub fn from_yaml_str(source: &str) -> ComplianceResult<Self> {
        let config: Self = serde_yaml::from_str(source).map_err(PackError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file and validate it.
    pub fn load(path: &Path) -> ComplianceResult<Self> {
        let config: Self = load_yaml_typed(path)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    /// Check thresholds are finite and non-negative, and multipliers are
    /// fractions in [0, 1].
    pub fn validate(&self) -> ComplianceResult<()> {
        check_threshold("high_value_threshold", self.high_value_threshold)?;
        check_threshold("heavy_weight_threshold_kg", self.heavy_weight_threshold_kg)?;
        check_fraction("default_cfr_multiplier", self.default_cfr_multiplier)?;
        check_fraction("default_xwork_multiplier", self.default_xwork_multiplier)?;
        Ok(())
    }
}

fn check_threshold(field: &'static str, value: f64) -> ComplianceResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ComplianceError::InvalidConfig {
            field,
            reason: format!("must be a finite non-negative number, got {value}"),
        });
    }
    Ok(())
}

fn check_fraction(field: &'static str, value: f64) -> ComplianceResult<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ComplianceError::InvalidConfig {
            field,
            reason: format!("must be within [0, 1], got {value}"),
        });
    }
    Ok(())
}
