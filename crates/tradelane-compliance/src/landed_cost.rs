//! # Landed-Cost Calculator
//!
//! Estimates the add-on costs of moving goods across a border, as plain
//! fractions of the declared value:
//!
//! ```text
//! export_tax  = value * origin.export / 100
//! import_tax  = value * dest.import   / 100
//! import_duty = value * dest.duty     / 100
//! cfr_cost    = value * dest.cfr_multiplier
//! xwork_cost  = value * dest.xwork_multiplier
//! total       = sum of the five
//! ```
//!
//! An unresolved origin contributes no export tax. An unresolved destination
//! contributes no import tax or duty, and its multipliers fall back to the
//! engine defaults so a freight estimate is always produced.
//!
//! ## Determinism
//!
//! Pure function of its inputs. Negative or non-finite values are clamped
//! to zero before any arithmetic.

use serde::{Deserialize, Serialize};

use tradelane_pack::CountryRegulation;

use crate::config::EngineConfig;

/// Rates applied and amounts produced by one cost estimate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// Origin export tax, percent.
    pub export_tax_rate: f64,
    /// Destination import tax, percent.
    pub import_tax_rate: f64,
    /// Destination import duty, percent.
    pub import_duty_rate: f64,
    /// CFR multiplier applied.
    pub cfr_multiplier: f64,
    /// Ex-Works multiplier applied.
    #[serde(rename = "xWorkMultiplier")]
    pub xwork_multiplier: f64,
    /// Export tax amount.
    pub export_tax: f64,
    /// Import tax amount.
    pub import_tax: f64,
    /// Import duty amount.
    pub import_duty: f64,
    /// Cost-and-freight add-on.
    pub cfr_cost: f64,
    /// Ex-Works add-on.
    #[serde(rename = "xWorkCost")]
    pub xwork_cost: f64,
    /// Sum of the five amounts.
    pub total: f64,
}

impl CostBreakdown {
    /// The all-zero breakdown used for domestic shipments.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Computes [`CostBreakdown`]s with engine-wide fallback multipliers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandedCostCalculator {
    default_cfr_multiplier: f64,
    default_xwork_multiplier: f64,
}

impl Default for LandedCostCalculator {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl LandedCostCalculator {
    /// Build a calculator from engine config defaults.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            default_cfr_multiplier: config.default_cfr_multiplier,
            default_xwork_multiplier: config.default_xwork_multiplier,
        }
    }

    /// Estimate landed costs for `value` between two optional profiles.
    pub fn compute(
        &self,
        value: f64,
        origin: Option<&CountryRegulation>,
        destination: Option<&CountryRegulation>,
    ) -> CostBreakdown {
        let value = sanitize_amount("declared_value", value);

        let export_tax_rate = origin.map_or(0.0, |o| o.tax_rates.export);
        let (import_tax_rate, import_duty_rate, cfr_multiplier, xwork_multiplier) =
            match destination {
                Some(d) => (
                    d.tax_rates.import,
                    d.tax_rates.duty,
                    d.cfr_multiplier,
                    d.xwork_multiplier,
                ),
                None => (
                    0.0,
                    0.0,
                    self.default_cfr_multiplier,
                    self.default_xwork_multiplier,
                ),
            };

        let export_tax = value * export_tax_rate / 100.0;
        let import_tax = value * import_tax_rate / 100.0;
        let import_duty = value * import_duty_rate / 100.0;
        let cfr_cost = value * cfr_multiplier;
        let xwork_cost = value * xwork_multiplier;

        CostBreakdown {
            export_tax_rate,
            import_tax_rate,
            import_duty_rate,
            cfr_multiplier,
            xwork_multiplier,
            export_tax,
            import_tax,
            import_duty,
            cfr_cost,
            xwork_cost,
            total: export_tax + import_tax + import_duty + cfr_cost + xwork_cost,
        }
    }
}

/// Clamp a caller-supplied amount to a finite non-negative number.
pub fn sanitize_amount(field: &'static str, value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        tracing::warn!(field, value, "clamping invalid amount to zero");
        0.0
    }
}
