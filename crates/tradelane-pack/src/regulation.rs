//! # Regulation Schema
//!
//! The per-country regulatory profile and the pack document that carries a
//! set of them.
//!
//! ## Data Model
//!
//! - [`TaxRates`]: export, import and duty percentages (0–100).
//! - [`CountryRegulation`]: restriction keywords, prohibited/restricted
//!   category sets, pre-inspection requirement, certificate schemes, rates
//!   and CFR / Ex-Works multipliers.
//! - [`CountryAlias`]: an alternate upper-case name for a country code.
//! - [`RegulationPack`]: versioned document of countries plus aliases.
//!
//! Category fields deserialize straight into the core vocabulary enums, so
//! an unknown category tag is a parse error rather than a rule that silently
//! never fires.

use serde::{Deserialize, Serialize};

use tradelane_core::{CountryCode, ProhibitedCategory, RestrictedCategory};

/// Tax and duty percentages for one country.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TaxRates {
    /// Export tax levied by the origin country, percent of declared value.
    #[serde(default)]
    pub export: f64,
    /// Import tax (VAT/GST) levied by the destination, percent.
    #[serde(default)]
    pub import: f64,
    /// Import duty levied by the destination, percent.
    #[serde(default)]
    pub duty: f64,
}

/// The regulatory profile of a single country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRegulation {
    /// Pack key for the country (e.g. `US`, `UK`).
    pub code: CountryCode,
    /// Canonical English name, matched case-insensitively in addresses.
    pub name: String,
    /// Keywords that restrict export when present in a goods description.
    #[serde(default)]
    pub export_restrictions: Vec<String>,
    /// Keywords that restrict import when present in a goods description.
    #[serde(default)]
    pub import_restrictions: Vec<String>,
    /// Categories this country prohibits for both export and import.
    #[serde(default)]
    pub prohibited_item_categories: Vec<ProhibitedCategory>,
    /// Categories that need an import permit.
    #[serde(default)]
    pub restricted_item_categories: Vec<RestrictedCategory>,
    /// Whether goods must be certified before shipment.
    #[serde(default)]
    pub requires_pre_inspection: bool,
    /// Certificate schemes required when pre-inspection applies, in order.
    #[serde(default)]
    pub certificate_types: Vec<String>,
    /// Tax and duty percentages.
    #[serde(default)]
    pub tax_rates: TaxRates,
    /// Cost-and-freight markup as a fraction of declared value.
    pub cfr_multiplier: f64,
    /// Ex-Works markup as a fraction of declared value.
    pub xwork_multiplier: f64,
}

impl CountryRegulation {
    /// Whether this country prohibits the given category.
    pub fn prohibits(&self, category: ProhibitedCategory) -> bool {
        self.prohibited_item_categories.contains(&category)
    }

    /// Whether this country requires an import permit for the category.
    pub fn restricts(&self, category: RestrictedCategory) -> bool {
        self.restricted_item_categories.contains(&category)
    }

    /// The first configured certificate scheme.
    pub fn primary_certificate(&self) -> Option<&str> {
        self.certificate_types.first().map(String::as_str)
    }

    /// Whether a certificate must accompany goods imported here.
    pub fn requires_certificate(&self) -> bool {
        self.requires_pre_inspection && !self.certificate_types.is_empty()
    }
}

/// An alternate name for a country, e.g. `BRITAIN` for `UK`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryAlias {
    /// Alias text. Normalised to upper case when a registry is built.
    pub alias: String,
    /// The country code the alias resolves to.
    pub code: CountryCode,
}

/// A complete regulation pack document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegulationPack {
    /// Snapshot version label.
    pub version: String,
    /// Country profiles in resolution order.
    pub countries: Vec<CountryRegulation>,
    /// Alias table in resolution order.
    #[serde(default)]
    pub aliases: Vec<CountryAlias>,
}
