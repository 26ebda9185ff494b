//! # Country Resolver
//!
//! Maps a free-text address to a country in the registry.
//!
//! ## Matching
//!
//! The address is upper-cased once. Registry entries are tried in pack
//! order; an entry matches when its code or its canonical name appears
//! anywhere in the address. Only when no entry matches is the alias table
//! scanned, again in order, for an alias that appears in the address.
//!
//! Matching is plain substring containment, so a short code inside a word
//! counts (`ENGLAND` contains `NG`). Pack order decides which country wins;
//! reorder the pack rather than the algorithm to change an outcome.

use tradelane_core::CountryCode;
use tradelane_pack::{CountryRegistry, CountryRegulation};

/// Resolves address text against a [`CountryRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct CountryResolver<'a> {
    registry: &'a CountryRegistry,
}

impl<'a> CountryResolver<'a> {
    /// Create a resolver over a registry.
    pub fn new(registry: &'a CountryRegistry) -> Self {
        Self { registry }
    }

    /// Resolve an address to its country profile, if any entry matches.
    pub fn resolve(&self, address: &str) -> Option<&'a CountryRegulation> {
        let upper = address.trim().to_uppercase();
        if upper.is_empty() {
            return None;
        }
        let registry = self.registry;
        let direct = registry
            .iter_with_upper_names()
            .find(|(country, name)| {
                upper.contains(country.code.as_str()) || upper.contains(*name)
            })
            .map(|(country, _)| country);
        if let Some(country) = direct {
            tracing::debug!(address, code = %country.code, "resolved country by code or name");
            return Some(country);
        }

        let alias = registry
            .aliases()
            .iter()
            .find(|a| upper.contains(a.alias.as_str()))?;
        tracing::debug!(address, alias = %alias.alias, code = %alias.code, "resolved country by alias");
        registry.get(&alias.code)
    }

    /// Resolve an address to a country code.
    pub fn resolve_code(&self, address: &str) -> Option<CountryCode> {
        self.resolve(address).map(|c| c.code.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> CountryRegistry {
        CountryRegistry::builtin().unwrap()
    }

    fn code(registry: &CountryRegistry, address: &str) -> Option<String> {
        CountryResolver::new(registry)
            .resolve_code(address)
            .map(|c| c.to_string())
    }

    #[test]
    fn resolves_trailing_code() {
        let r = registry();
        assert_eq!(code(&r, "New York, US").as_deref(), Some("US"));
        assert_eq!(code(&r, "London, UK").as_deref(), Some("UK"));
    }

    #[test]
    fn resolves_canonical_name_case_insensitively() {
        let r = registry();
        assert_eq!(code(&r, "China").as_deref(), Some("CN"));
        assert_eq!(code(&r, "shenzhen, china").as_deref(), Some("CN"));
        assert_eq!(code(&r, "Lagos, Nigeria").as_deref(), Some("NG"));
    }

    #[test]
    fn resolves_aliases() {
        let r = registry();
        assert_eq!(code(&r, "Rotterdam, Holland").as_deref(), Some("NL"));
        assert_eq!(code(&r, "Riyadh, KSA").as_deref(), Some("SA"));
        assert_eq!(code(&r, "Chicago USA").as_deref(), Some("US"));
    }

    #[test]
    fn code_inside_word_matches() {
        let r = registry();
        // ENGLAND contains NG; direct matches are tried before any alias.
        assert_eq!(code(&r, "Manchester, England").as_deref(), Some("NG"));
        // SYDNEY contains no code, but the US entry precedes AU and
        // AUSTRALIA contains US.
        assert_eq!(code(&r, "Sydney, Australia").as_deref(), Some("US"));
        // BRITAIN contains BR and IN; IN comes first in the pack.
        assert_eq!(code(&r, "Great Britain").as_deref(), Some("IN"));
    }

    #[test]
    fn matches_a_literal_scan_of_the_pack() {
        let r = registry();
        let literal = |address: &str| -> Option<String> {
            let upper = address.to_uppercase();
            r.iter()
                .find(|c| upper.contains(c.code.as_str()) || upper.contains(&c.name.to_uppercase()))
                .map(|c| c.code.to_string())
                .or_else(|| {
                    r.aliases()
                        .iter()
                        .find(|a| upper.contains(a.alias.as_str()))
                        .map(|a| a.code.to_string())
                })
        };
        for address in [
            "Sydney, Australia",
            "Manchester, England",
            "Jurong, Singapore",
            "Dubai Marina",
            "Rotterdam, Holland",
            "Atlantis Harbour",
            "New York, US",
        ] {
            assert_eq!(code(&r, address), literal(address), "address {address}");
        }
    }

    #[test]
    fn mixed_case_pack_names_match() {
        let r = CountryRegistry::from_yaml_str(
            "version: t\ncountries:\n  - {code: QK, name: kEnYa, cfr_multiplier: 0.1, xwork_multiplier: 0.05}\n",
        )
        .unwrap();
        assert_eq!(code(&r, "Mombasa, Kenya").as_deref(), Some("QK"));
    }

    #[test]
    fn registry_order_breaks_ties() {
        let r = registry();
        // Both US and CA codes are present; US comes first in the pack.
        assert_eq!(code(&r, "Los Angeles, CA, US").as_deref(), Some("US"));
    }

    #[test]
    fn direct_match_beats_alias() {
        let r = registry();
        // AMERICA is an alias for US, but the UK code matches first.
        assert_eq!(code(&r, "American Embassy, London, UK").as_deref(), Some("UK"));
    }

    #[test]
    fn unresolved_address_is_none() {
        let r = registry();
        assert_eq!(code(&r, "Atlantis Harbour"), None);
        assert_eq!(code(&r, ""), None);
        assert_eq!(code(&r, "   "), None);
    }

    #[test]
    fn resolve_returns_profile() {
        let r = registry();
        let uk = CountryResolver::new(&r).resolve("Bristol, UK").unwrap();
        assert_eq!(uk.name, "United Kingdom");
    }
}
