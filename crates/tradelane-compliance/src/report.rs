//! # Report Assembly
//!
//! Collects the findings of one evaluation and freezes them into a
//! [`ComplianceCheckResult`].
//!
//! Rule combination may hit the same finding more than once (a keyword
//! listed under two categories, a certificate scheme repeated in a pack).
//! [`ReportBuilder::finish`] removes repeats from every list while keeping
//! first-occurrence order, so callers can render lists directly.

use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use tradelane_core::{
    ProhibitedCategory, RestrictedCategory, ServiceType, ShipmentRoute, UNKNOWN_COUNTRY,
};
use tradelane_pack::CountryRegulation;

use crate::evaluator::ComplianceCheckInput;
use crate::landed_cost::CostBreakdown;

/// The outcome of a compliance check.
///
/// `errors` is the stop-booking signal; `warnings` are advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceCheckResult {
    /// Resolved origin code, or `"Unknown"`.
    pub origin_country: String,
    /// Resolved destination code, or `"Unknown"`.
    pub destination_country: String,
    /// Origin address as supplied.
    pub origin_address: String,
    /// Destination address as supplied.
    pub destination_address: String,
    /// Goods description as supplied.
    pub description: String,
    /// HS code as supplied.
    pub hs_code: Option<String>,
    /// Weight in kg after clamping.
    pub weight_kg: f64,
    /// Declared value after clamping.
    pub declared_value: f64,
    /// Service-type hint as supplied.
    pub service_type: Option<ServiceType>,
    /// Which branch evaluated the shipment.
    pub route: ShipmentRoute,
    /// Destination requires pre-shipment inspection.
    pub requires_pre_inspection: bool,
    /// A certificate scheme applies.
    pub requires_certificate: bool,
    /// First certificate scheme of the destination.
    pub certificate_type: Option<String>,
    pub prohibited_items: Vec<ProhibitedCategory>,
    pub restricted_items: Vec<RestrictedCategory>,
    pub export_restrictions: Vec<String>,
    pub import_restrictions: Vec<String>,
    pub required_documents: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub export_tax_rate: f64,
    pub import_tax_rate: f64,
    pub import_duty_rate: f64,
    pub cfr_cost: f64,
    #[serde(rename = "xWorkCost")]
    pub xwork_cost: f64,
    pub total_additional_costs: f64,
    /// Full cost detail, including the multipliers applied.
    pub cost_breakdown: CostBreakdown,
}

impl ComplianceCheckResult {
    /// Whether any regulatory violation blocks the booking.
    pub fn is_blocked(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether any advisory was raised.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Mutable accumulator for one evaluation.
#[derive(Debug)]
pub struct ReportBuilder {
    result: ComplianceCheckResult,
}

impl ReportBuilder {
    /// Start a report, echoing the input and the resolved countries.
    ///
    /// `weight_kg` and `declared_value` are the clamped amounts the
    /// evaluator actually used.
    pub fn new(
        input: &ComplianceCheckInput,
        origin: Option<&CountryRegulation>,
        destination: Option<&CountryRegulation>,
        route: ShipmentRoute,
        weight_kg: f64,
        declared_value: f64,
    ) -> Self {
        Self {
            result: ComplianceCheckResult {
                origin_country: country_label(origin),
                destination_country: country_label(destination),
                origin_address: input.origin.clone(),
                destination_address: input.destination.clone(),
                description: input.description.clone(),
                hs_code: input.hs_code.clone(),
                weight_kg,
                declared_value,
                service_type: input.service_type,
                route,
                requires_pre_inspection: false,
                requires_certificate: false,
                certificate_type: None,
                prohibited_items: Vec::new(),
                restricted_items: Vec::new(),
                export_restrictions: Vec::new(),
                import_restrictions: Vec::new(),
                required_documents: Vec::new(),
                warnings: Vec::new(),
                errors: Vec::new(),
                export_tax_rate: 0.0,
                import_tax_rate: 0.0,
                import_duty_rate: 0.0,
                cfr_cost: 0.0,
                xwork_cost: 0.0,
                total_additional_costs: 0.0,
                cost_breakdown: CostBreakdown::zero(),
            },
        }
    }

    pub fn prohibited_item(&mut self, category: ProhibitedCategory) {
        self.result.prohibited_items.push(category);
    }

    pub fn restricted_item(&mut self, category: RestrictedCategory) {
        self.result.restricted_items.push(category);
    }

    pub fn export_restriction(&mut self, keyword: impl Into<String>) {
        self.result.export_restrictions.push(keyword.into());
    }

    pub fn import_restriction(&mut self, keyword: impl Into<String>) {
        self.result.import_restrictions.push(keyword.into());
    }

    pub fn document(&mut self, document: impl Into<String>) {
        self.result.required_documents.push(document.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.result.warnings.push(message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.result.errors.push(message.into());
    }

    /// Record the destination's inspection and certificate requirements.
    pub fn pre_inspection(&mut self, destination: &CountryRegulation) {
        self.result.requires_pre_inspection = destination.requires_pre_inspection;
        self.result.requires_certificate = destination.requires_certificate();
        self.result.certificate_type = destination.primary_certificate().map(str::to_string);
    }

    /// Record a cost estimate.
    pub fn costs(&mut self, costs: CostBreakdown) {
        self.result.export_tax_rate = costs.export_tax_rate;
        self.result.import_tax_rate = costs.import_tax_rate;
        self.result.import_duty_rate = costs.import_duty_rate;
        self.result.cfr_cost = costs.cfr_cost;
        self.result.xwork_cost = costs.xwork_cost;
        self.result.total_additional_costs = costs.total;
        self.result.cost_breakdown = costs;
    }

    /// Deduplicate every list and return the finished result.
    pub fn finish(self) -> ComplianceCheckResult {
        let mut r = self.result;
        r.prohibited_items = dedup_preserving_order(r.prohibited_items);
        r.restricted_items = dedup_preserving_order(r.restricted_items);
        r.export_restrictions = dedup_preserving_order(r.export_restrictions);
        r.import_restrictions = dedup_preserving_order(r.import_restrictions);
        r.required_documents = dedup_preserving_order(r.required_documents);
        r.warnings = dedup_preserving_order(r.warnings);
        r.errors = dedup_preserving_order(r.errors);
        r
    }
}

fn country_label(country: Option<&CountryRegulation>) -> String {
    country.map_or_else(|| UNKNOWN_COUNTRY.to_string(), |c| c.code.to_string())
}

/// Drop repeated items, keeping the first occurrence of each.
pub fn dedup_preserving_order<T: Eq + Hash + Clone>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
