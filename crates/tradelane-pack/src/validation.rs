//! # Pack Validation Rules
//!
//! Validates a parsed [`RegulationPack`] before it becomes a registry.
//!
//! ## Validation Layers
//!
//! 1. **Structural**: YAML parses and category tags exist (enforced by the
//!    schema types, not here).
//! 2. **Identity**: country codes are unique, names are non-empty.
//! 3. **Numeric ranges**: tax rates are finite percentages in [0, 100];
//!    CFR and Ex-Works multipliers are finite fractions in [0, 1].
//! 4. **Cross-reference integrity**: every alias targets a defined country.
//!
//! Warnings never block loading: a pre-inspection country with no
//! certificate scheme, or a category/keyword listed twice for one country.

use std::collections::HashSet;

use crate::error::{PackError, PackResult};
use crate::regulation::{CountryRegulation, RegulationPack};

/// Result of validating a regulation pack.
#[derive(Debug, Default)]
pub struct PackValidationResult {
    /// Hard failures; any entry makes the pack unusable.
    pub errors: Vec<PackError>,
    /// Non-fatal findings.
    pub warnings: Vec<String>,
}

impl PackValidationResult {
    /// Whether the pack has no hard failures.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error. Marks result as invalid.
    pub fn add_error(&mut self, error: PackError) {
        self.errors.push(error);
    }

    /// Add a warning (does not affect validity).
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Collapse into a `Result`, keeping the warnings on success.
    ///
    /// A single failure is returned as-is so callers can match on it; several
    /// failures are joined into [`PackError::Validation`].
    pub fn into_result(mut self) -> PackResult<Vec<String>> {
        match self.errors.len() {
            0 => Ok(self.warnings),
            1 => Err(self.errors.remove(0)),
            _ => Err(PackError::Validation(
                self.errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("; "),
            )),
        }
    }
}

/// Validate every country and alias in a pack.
pub fn validate_pack(pack: &RegulationPack) -> PackValidationResult {
    let mut result = PackValidationResult::default();

    if pack.version.trim().is_empty() {
        result.add_warning("regulation pack has an empty version label".to_string());
    }

    let mut codes = HashSet::new();
    for country in &pack.countries {
        if !codes.insert(country.code.clone()) {
            result.add_error(PackError::DuplicateCountry {
                code: country.code.to_string(),
            });
        }
        validate_country(country, &mut result);
    }

    for alias in &pack.aliases {
        if alias.alias.trim().is_empty() {
            result.add_error(PackError::Validation(format!(
                "empty alias for country code {}",
                alias.code
            )));
        }
        if !codes.contains(&alias.code) {
            result.add_error(PackError::UnknownAliasTarget {
                alias: alias.alias.clone(),
                code: alias.code.to_string(),
            });
        }
    }

    result
}

fn validate_country(country: &CountryRegulation, result: &mut PackValidationResult) {
    let code = country.code.as_str();

    if country.name.trim().is_empty() {
        result.add_error(PackError::Validation(format!(
            "country {code} has an empty name"
        )));
    }

    let percentages = [
        ("tax_rates.export", country.tax_rates.export),
        ("tax_rates.import", country.tax_rates.import),
        ("tax_rates.duty", country.tax_rates.duty),
    ];
    for (field, value) in percentages {
        check_range(result, code, field, value, 0.0, 100.0);
    }
    check_range(result, code, "cfr_multiplier", country.cfr_multiplier, 0.0, 1.0);
    check_range(result, code, "xwork_multiplier", country.xwork_multiplier, 0.0, 1.0);

    if country.requires_pre_inspection && country.certificate_types.is_empty() {
        result.add_warning(format!(
            "{code} requires pre-inspection but lists no certificate scheme"
        ));
    }

    if has_duplicates(&country.prohibited_item_categories) {
        result.add_warning(format!("{code} lists a prohibited category twice"));
    }
    if has_duplicates(&country.restricted_item_categories) {
        result.add_warning(format!("{code} lists a restricted category twice"));
    }
    if has_duplicates(&country.export_restrictions) {
        result.add_warning(format!("{code} lists an export restriction twice"));
    }
    if has_duplicates(&country.import_restrictions) {
        result.add_warning(format!("{code} lists an import restriction twice"));
    }
}

fn check_range(
    result: &mut PackValidationResult,
    code: &str,
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !value.is_finite() || value < min || value > max {
        result.add_error(PackError::RateOutOfRange {
            code: code.to_string(),
            field,
            value,
            min,
            max,
        });
    }
}

fn has_duplicates<T: Eq + std::hash::Hash>(items: &[T]) -> bool {
    let mut seen = HashSet::new();
    items.iter().any(|item| !seen.insert(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regulation::{CountryAlias, TaxRates};
    use tradelane_core::{CountryCode, ProhibitedCategory};

    fn country(code: &str) -> CountryRegulation {
        CountryRegulation {
            code: CountryCode::new(code).unwrap(),
            name: format!("Country {code}"),
            export_restrictions: vec![],
            import_restrictions: vec![],
            prohibited_item_categories: vec![ProhibitedCategory::Drugs],
            restricted_item_categories: vec![],
            requires_pre_inspection: false,
            certificate_types: vec![],
            tax_rates: TaxRates {
                export: 0.0,
                import: 10.0,
                duty: 5.0,
            },
            cfr_multiplier: 0.12,
            xwork_multiplier: 0.06,
        }
    }

    fn pack(countries: Vec<CountryRegulation>) -> RegulationPack {
        RegulationPack {
            version: "test".to_string(),
            countries,
            aliases: vec![],
        }
    }

    #[test]
    fn clean_pack_is_valid() {
        let result = validate_pack(&pack(vec![country("US"), country("UK")]));
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn duplicate_code_is_error() {
        let result = validate_pack(&pack(vec![country("US"), country("us")]));
        assert!(!result.is_valid());
        assert!(matches!(
            result.into_result().unwrap_err(),
            PackError::DuplicateCountry { code } if code == "US"
        ));
    }

    #[test]
    fn rate_above_hundred_is_error() {
        let mut c = country("UK");
        c.tax_rates.import = 120.0;
        let err = validate_pack(&pack(vec![c])).into_result().unwrap_err();
        assert!(matches!(err, PackError::RateOutOfRange { field: "tax_rates.import", .. }));
    }

    #[test]
    fn negative_and_nan_multipliers_are_errors() {
        let mut a = country("AA");
        a.cfr_multiplier = -0.1;
        let mut b = country("BB");
        b.xwork_multiplier = f64::NAN;
        let result = validate_pack(&pack(vec![a, b]));
        assert_eq!(result.errors.len(), 2);
        assert!(matches!(result.into_result().unwrap_err(), PackError::Validation(_)));
    }

    #[test]
    fn multiplier_above_one_is_error() {
        let mut c = country("CN");
        c.cfr_multiplier = 1.5;
        assert!(!validate_pack(&pack(vec![c])).is_valid());
    }

    #[test]
    fn empty_name_is_error() {
        let mut c = country("SG");
        c.name = "  ".to_string();
        assert!(!validate_pack(&pack(vec![c])).is_valid());
    }

    #[test]
    fn alias_to_unknown_code_is_error() {
        let mut p = pack(vec![country("US")]);
        p.aliases.push(CountryAlias {
            alias: "BRITAIN".to_string(),
            code: CountryCode::new("UK").unwrap(),
        });
        let err = validate_pack(&p).into_result().unwrap_err();
        assert!(matches!(err, PackError::UnknownAliasTarget { .. }));
    }

    #[test]
    fn pre_inspection_without_certificate_warns() {
        let mut c = country("NG");
        c.requires_pre_inspection = true;
        let result = validate_pack(&pack(vec![c]));
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("NG"));
    }

    #[test]
    fn duplicate_category_warns() {
        let mut c = country("PK");
        c.prohibited_item_categories = vec![ProhibitedCategory::Pork, ProhibitedCategory::Pork];
        let warnings = validate_pack(&pack(vec![c])).into_result().unwrap();
        assert_eq!(warnings.len(), 1);
    }
}
