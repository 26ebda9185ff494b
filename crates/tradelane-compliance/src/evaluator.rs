//! # Compliance Evaluator
//!
//! Orchestrates one compliance check as a single synchronous pass:
//!
//! ```text
//! ResolveCountries ──same code──▶ Domestic ──────┐
//!        │                                       ├──▶ ReportAssembled
//!        └──different / unresolved──▶ International
//! ```
//!
//! ## Domestic
//!
//! Only the critical prohibited categories (drugs, weapons, explosives by
//! default) are checked. Each hit is both a prohibited item and an error.
//! No costs, restrictions or documents are produced.
//!
//! ## International
//!
//! Every category is classified and combined with the origin's export
//! rules and the destination's import rules. Restriction keywords, category
//! prohibitions, permit documents, certificate schemes, landed costs and the
//! advisory thresholds all apply. An unresolved side contributes no rules
//! and falls back to the engine's default multipliers.
//!
//! Evaluation never fails and never panics; degraded inputs degrade the
//! report, not the call.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use tradelane_core::{ServiceType, ShipmentRoute};
use tradelane_pack::{CountryRegistry, CountryRegulation};

use crate::classifier::{matching_keywords, ItemClassifier};
use crate::config::EngineConfig;
use crate::error::ComplianceResult;
use crate::landed_cost::{sanitize_amount, LandedCostCalculator};
use crate::report::{ComplianceCheckResult, ReportBuilder};
use crate::resolver::CountryResolver;

/// Advisory raised when an international shipment between two known
/// countries carries no HS code.
pub const MISSING_HS_CODE_WARNING: &str =
    "HS code not provided; customs clearance may be delayed without a tariff classification";

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One shipment to check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceCheckInput {
    /// Free-text origin address.
    pub origin: String,
    /// Free-text destination address.
    pub destination: String,
    /// Free-text goods description.
    pub description: String,
    /// Harmonized System code, if the shipper supplied one.
    #[serde(default)]
    pub hs_code: Option<String>,
    /// Gross weight in kilograms.
    #[serde(default)]
    pub weight_kg: f64,
    /// Declared customs value.
    #[serde(default)]
    pub declared_value: f64,
    /// Booking flow the request came from.
    #[serde(default)]
    pub service_type: Option<ServiceType>,
}

impl ComplianceCheckInput {
    /// Create an input with zero weight and value and no HS code.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            description: description.into(),
            hs_code: None,
            weight_kg: 0.0,
            declared_value: 0.0,
            service_type: None,
        }
    }

    pub fn with_hs_code(mut self, hs_code: impl Into<String>) -> Self {
        self.hs_code = Some(hs_code.into());
        self
    }

    pub fn with_weight_kg(mut self, weight_kg: f64) -> Self {
        self.weight_kg = weight_kg;
        self
    }

    pub fn with_declared_value(mut self, declared_value: f64) -> Self {
        self.declared_value = declared_value;
        self
    }

    pub fn with_service_type(mut self, service_type: ServiceType) -> Self {
        self.service_type = Some(service_type);
        self
    }

    /// Whether a non-blank HS code was supplied.
    pub fn has_hs_code(&self) -> bool {
        self.hs_code.as_deref().is_some_and(|c| !c.trim().is_empty())
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// The compliance engine: a registry plus configuration.
///
/// Immutable after construction; share it behind an `Arc` and call
/// [`evaluate`](Self::evaluate) from any number of threads.
#[derive(Debug, Clone)]
pub struct ComplianceEngine {
    registry: Arc<CountryRegistry>,
    config: EngineConfig,
    classifier: ItemClassifier,
    calculator: LandedCostCalculator,
}

impl ComplianceEngine {
    /// Build an engine over a registry, validating the config.
    pub fn new(registry: Arc<CountryRegistry>, config: EngineConfig) -> ComplianceResult<Self> {
        config.validate()?;
        Ok(Self {
            registry,
            calculator: LandedCostCalculator::from_config(&config),
            classifier: ItemClassifier,
            config,
        })
    }

    /// Engine over the built-in regulation snapshot with default config.
    pub fn builtin() -> ComplianceResult<Self> {
        Self::new(Arc::new(CountryRegistry::builtin()?), EngineConfig::default())
    }

    pub fn registry(&self) -> &CountryRegistry {
        &self.registry
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// A resolver over this engine's registry.
    pub fn resolver(&self) -> CountryResolver<'_> {
        CountryResolver::new(&self.registry)
    }

    /// Run a full compliance check.
    pub fn evaluate(&self, input: &ComplianceCheckInput) -> ComplianceCheckResult {
        let resolver = self.resolver();
        let origin = resolver.resolve(&input.origin);
        let destination = resolver.resolve(&input.destination);
        let route = route_for(origin, destination);
        tracing::debug!(
            origin = origin.map(|c| c.code.as_str()),
            destination = destination.map(|c| c.code.as_str()),
            %route,
            "routed shipment"
        );

        let weight_kg = sanitize_amount("weight_kg", input.weight_kg);
        let declared_value = sanitize_amount("declared_value", input.declared_value);
        let mut report =
            ReportBuilder::new(input, origin, destination, route, weight_kg, declared_value);

        match route {
            ShipmentRoute::Domestic => self.check_domestic(input, &mut report),
            ShipmentRoute::International => self.check_international(
                input,
                origin,
                destination,
                weight_kg,
                declared_value,
                &mut report,
            ),
        }

        report.finish()
    }

    fn check_domestic(&self, input: &ComplianceCheckInput, report: &mut ReportBuilder) {
        let found = self.classifier.classify_prohibited(&input.description);
        for category in found
            .into_iter()
            .filter(|c| self.config.domestic_critical_categories.contains(c))
        {
            report.prohibited_item(category);
            report.error(format!("{category} cannot be shipped domestically"));
        }
    }

    fn check_international(
        &self,
        input: &ComplianceCheckInput,
        origin: Option<&CountryRegulation>,
        destination: Option<&CountryRegulation>,
        weight_kg: f64,
        declared_value: f64,
        report: &mut ReportBuilder,
    ) {
        if origin.is_none() {
            tracing::warn!(address = %input.origin, "origin did not resolve to a known country");
        }
        if destination.is_none() {
            tracing::warn!(
                address = %input.destination,
                "destination did not resolve to a known country"
            );
        }

        let classification = self.classifier.classify(&input.description);
        let lower = input.description.to_lowercase();

        if let Some(o) = origin {
            for keyword in matching_keywords(&lower, &o.export_restrictions) {
                report.export_restriction(keyword);
            }
        }
        if let Some(d) = destination {
            for keyword in matching_keywords(&lower, &d.import_restrictions) {
                report.import_restriction(keyword);
            }
        }

        for &category in &classification.prohibited {
            report.prohibited_item(category);
            if let Some(o) = origin.filter(|o| o.prohibits(category)) {
                report.error(format!("{category} is prohibited for export from {}", o.name));
            }
            if let Some(d) = destination.filter(|d| d.prohibits(category)) {
                report.error(format!("{category} is prohibited for import into {}", d.name));
            }
        }

        for &category in &classification.restricted {
            report.restricted_item(category);
            if let Some(d) = destination.filter(|d| d.restricts(category)) {
                report.warning(format!(
                    "{category} requires special documentation for import into {}",
                    d.name
                ));
                report.document(format!("{category} import permit"));
            }
        }

        if let Some(d) = destination {
            report.pre_inspection(d);
            if d.requires_pre_inspection {
                for scheme in &d.certificate_types {
                    report.document(format!("{scheme} Certificate"));
                }
            }
        }

        report.costs(self.calculator.compute(declared_value, origin, destination));

        if origin.is_some() && destination.is_some() && !input.has_hs_code() {
            report.warning(MISSING_HS_CODE_WARNING);
        }
        if declared_value > self.config.high_value_threshold {
            report.warning(format!(
                "High-value shipment: declared value {declared_value:.2} exceeds {:.2}; formal customs entry may be required",
                self.config.high_value_threshold
            ));
        }
        if weight_kg > self.config.heavy_weight_threshold_kg {
            report.warning(format!(
                "Heavy shipment: {weight_kg:.2} kg exceeds {:.2} kg; additional handling charges may apply",
                self.config.heavy_weight_threshold_kg
            ));
        }
    }
}

/// Domestic only when both sides resolve to the same country.
fn route_for(
    origin: Option<&CountryRegulation>,
    destination: Option<&CountryRegulation>,
) -> ShipmentRoute {
    match (origin, destination) {
        (Some(o), Some(d)) if o.code == d.code => ShipmentRoute::Domestic,
        _ => ShipmentRoute::International,
    }
}
