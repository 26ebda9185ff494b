//! # Item Classifier
//!
//! Keyword classification of a goods description into prohibited and
//! restricted categories.
//!
//! The description is lower-cased once and every category in the core
//! vocabulary is tested independently: a category matches as soon as any of
//! its keywords is a substring. Categories are not mutually exclusive.
//! Results come back as ordered sets in canonical category order, so the
//! same description always yields the same report.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use tradelane_core::{ProhibitedCategory, RestrictedCategory};

/// Categories detected in one goods description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Prohibited categories whose keywords appear.
    pub prohibited: BTreeSet<ProhibitedCategory>,
    /// Restricted categories whose keywords appear.
    pub restricted: BTreeSet<RestrictedCategory>,
}

impl Classification {
    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.prohibited.is_empty() && self.restricted.is_empty()
    }
}

/// Stateless keyword classifier over the core category vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemClassifier;

impl ItemClassifier {
    /// Classify a description into both category sets.
    pub fn classify(&self, description: &str) -> Classification {
        let lower = description.to_lowercase();
        Classification {
            prohibited: Self::prohibited_in(&lower),
            restricted: Self::restricted_in(&lower),
        }
    }

    /// Prohibited categories only.
    pub fn classify_prohibited(&self, description: &str) -> BTreeSet<ProhibitedCategory> {
        Self::prohibited_in(&description.to_lowercase())
    }

    fn prohibited_in(lower: &str) -> BTreeSet<ProhibitedCategory> {
        ProhibitedCategory::all()
            .iter()
            .copied()
            .filter(|c| contains_any(lower, c.keywords()))
            .collect()
    }

    fn restricted_in(lower: &str) -> BTreeSet<RestrictedCategory> {
        RestrictedCategory::all()
            .iter()
            .copied()
            .filter(|c| contains_any(lower, c.keywords()))
            .collect()
    }
}

/// Keywords from `keywords` present in an already lower-cased text.
///
/// Keywords are compared lower-cased but returned as written, so callers
/// can report the configured restriction text verbatim.
pub fn matching_keywords<'k>(lower_text: &str, keywords: &'k [String]) -> Vec<&'k str> {
    keywords
        .iter()
        .filter(|k| {
            let k = k.trim();
            !k.is_empty() && lower_text.contains(&k.to_lowercase())
        })
        .map(String::as_str)
        .collect()
}

fn contains_any(lower_text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lower_text.contains(k))
}
