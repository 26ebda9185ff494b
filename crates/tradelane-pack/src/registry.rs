//! # Country Registry
//!
//! Immutable lookup table from country code to [`CountryRegulation`],
//! built once from a validated [`RegulationPack`].
//!
//! The registry preserves the pack's country order and alias order; the
//! country resolver depends on both as its tie-break. It holds no interior
//! mutability, so a single instance behind an `Arc` can serve any number of
//! concurrent evaluations.

use std::collections::HashMap;
use std::path::Path;

use tradelane_core::CountryCode;

use crate::error::PackResult;
use crate::parser;
use crate::regulation::{CountryAlias, CountryRegulation, RegulationPack};
use crate::validation::validate_pack;

/// The regulation snapshot compiled into this crate.
const BUILTIN_PACK: &str = include_str!("../data/regulations.yaml");

/// Read-only registry of country regulation profiles.
#[derive(Debug, Clone)]
pub struct CountryRegistry {
    version: String,
    digest: String,
    countries: Vec<CountryRegulation>,
    upper_names: Vec<String>,
    index: HashMap<CountryCode, usize>,
    aliases: Vec<CountryAlias>,
}

impl CountryRegistry {
    /// Load the built-in regulation snapshot.
    pub fn builtin() -> PackResult<Self> {
        Self::from_yaml_str(BUILTIN_PACK)
    }

    /// Parse and validate a pack from YAML text.
    pub fn from_yaml_str(source: &str) -> PackResult<Self> {
        let pack = parser::parse_pack_str(source)?;
        Self::from_pack(pack, parser::source_digest(source))
    }

    /// Load and validate a pack file.
    pub fn load(path: &Path) -> PackResult<Self> {
        let (pack, source) = parser::load_pack_file(path)?;
        tracing::debug!(path = %path.display(), "loaded regulation pack file");
        Self::from_pack(pack, parser::source_digest(&source))
    }

    /// Build a registry from an already-parsed pack.
    ///
    /// `digest` identifies the snapshot; loaders pass the SHA-256 of the
    /// source text.
    ///
    /// # Errors
    ///
    /// Returns the validation failure if the pack has duplicate codes,
    /// out-of-range rates or dangling aliases.
    pub fn from_pack(pack: RegulationPack, digest: String) -> PackResult<Self> {
        let warnings = validate_pack(&pack).into_result()?;
        for warning in &warnings {
            tracing::warn!(version = %pack.version, "{warning}");
        }

        let index = pack
            .countries
            .iter()
            .enumerate()
            .map(|(i, c)| (c.code.clone(), i))
            .collect();

        let upper_names = pack
            .countries
            .iter()
            .map(|c| c.name.trim().to_uppercase())
            .collect();

        let aliases = pack
            .aliases
            .into_iter()
            .map(|a| CountryAlias {
                alias: a.alias.trim().to_uppercase(),
                code: a.code,
            })
            .collect();

        tracing::info!(
            version = %pack.version,
            countries = pack.countries.len(),
            digest = %digest,
            "regulation pack loaded"
        );

        Ok(Self {
            version: pack.version,
            digest,
            countries: pack.countries,
            upper_names,
            index,
            aliases,
        })
    }

    /// Look up a country by code.
    pub fn get(&self, code: &CountryCode) -> Option<&CountryRegulation> {
        self.index.get(code).map(|&i| &self.countries[i])
    }

    /// Look up a country by code string (case-insensitive).
    ///
    /// Returns `None` for strings that are not valid codes.
    pub fn get_str(&self, code: &str) -> Option<&CountryRegulation> {
        CountryCode::new(code).ok().and_then(|c| self.get(&c))
    }

    /// Iterate countries in pack order.
    pub fn iter(&self) -> impl Iterator<Item = &CountryRegulation> {
        self.countries.iter()
    }

    /// Countries in pack order, each paired with its upper-cased name.
    pub fn iter_with_upper_names(&self) -> impl Iterator<Item = (&CountryRegulation, &str)> {
        self.countries
            .iter()
            .zip(self.upper_names.iter().map(String::as_str))
    }

    /// Alias table in pack order, alias text upper-cased.
    pub fn aliases(&self) -> &[CountryAlias] {
        &self.aliases
    }

    /// Number of countries.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Whether the registry has no countries.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Snapshot version label.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// SHA-256 hex digest of the pack source.
    pub fn digest(&self) -> &str {
        &self.digest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PackError;
    use tradelane_core::{ProhibitedCategory, RestrictedCategory};

    #[test]
    fn builtin_loads() {
        let registry = CountryRegistry::builtin().unwrap();
        assert!(registry.len() >= 19);
        assert!(!registry.is_empty());
        assert_eq!(registry.digest().len(), 64);
        assert!(!registry.version().is_empty());
    }

    #[test]
    fn builtin_order_starts_us_uk_cn() {
        let registry = CountryRegistry::builtin().unwrap();
        let codes: Vec<&str> = registry.iter().take(3).map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["US", "UK", "CN"]);
    }

    #[test]
    fn builtin_uk_rates() {
        let registry = CountryRegistry::builtin().unwrap();
        let uk = registry.get_str("uk").unwrap();
        assert_eq!(uk.name, "United Kingdom");
        assert_eq!(uk.tax_rates.import, 20.0);
        assert_eq!(uk.tax_rates.duty, 2.5);
        assert_eq!(uk.cfr_multiplier, 0.12);
        assert_eq!(uk.xwork_multiplier, 0.06);
    }

    #[test]
    fn builtin_us_has_no_export_tax() {
        let registry = CountryRegistry::builtin().unwrap();
        assert_eq!(registry.get_str("US").unwrap().tax_rates.export, 0.0);
    }

    #[test]
    fn builtin_china_requires_pre_inspection() {
        let registry = CountryRegistry::builtin().unwrap();
        let cn = registry.get_str("CN").unwrap();
        assert!(cn.requires_pre_inspection);
        assert!(!cn.certificate_types.is_empty());
        assert!(cn.restricts(RestrictedCategory::Electronics));
        assert!(cn.prohibits(ProhibitedCategory::Drugs));
    }

    #[test]
    fn builtin_aliases_are_uppercase_and_resolve() {
        let registry = CountryRegistry::builtin().unwrap();
        assert!(!registry.aliases().is_empty());
        for alias in registry.aliases() {
            assert_eq!(alias.alias, alias.alias.to_uppercase());
            assert!(registry.get(&alias.code).is_some());
        }
    }

    #[test]
    fn upper_names_follow_pack_order() {
        let registry = CountryRegistry::from_yaml_str(
            "version: t\ncountries:\n  - {code: SG, name: ' sInGaPoRe ', cfr_multiplier: 0.1, xwork_multiplier: 0.05}\n  - {code: KE, name: Kenya, cfr_multiplier: 0.1, xwork_multiplier: 0.05}\n",
        )
        .unwrap();
        let pairs: Vec<(&str, &str)> = registry
            .iter_with_upper_names()
            .map(|(c, name)| (c.code.as_str(), name))
            .collect();
        assert_eq!(pairs, vec![("SG", "SINGAPORE"), ("KE", "KENYA")]);
    }

    #[test]
    fn get_str_rejects_invalid_code() {
        let registry = CountryRegistry::builtin().unwrap();
        assert!(registry.get_str("").is_none());
        assert!(registry.get_str("ZZ").is_none());
    }

    #[test]
    fn invalid_pack_fails_to_build() {
        let yaml = r#"
version: "bad"
countries:
  - code: US
    name: United States
    cfr_multiplier: 2.0
    xwork_multiplier: 0.05
"#;
        let err = CountryRegistry::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, PackError::RateOutOfRange { .. }));
    }

    #[test]
    fn digest_changes_with_source() {
        let a = CountryRegistry::from_yaml_str(
            "version: a\ncountries:\n  - {code: SG, name: Singapore, cfr_multiplier: 0.1, xwork_multiplier: 0.05}\n",
        )
        .unwrap();
        let b = CountryRegistry::from_yaml_str(
            "version: b\ncountries:\n  - {code: SG, name: Singapore, cfr_multiplier: 0.1, xwork_multiplier: 0.05}\n",
        )
        .unwrap();
        assert_ne!(a.digest(), b.digest());
    }

    #[test]
    fn registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CountryRegistry>();
    }
}
