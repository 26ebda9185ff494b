//! # Goods Category Vocabulary: Single Source of Truth
//!
//! Defines the two closed category enums used to classify a free-text goods
//! description: [`ProhibitedCategory`] (goods that block a shipment when a
//! country prohibits them) and [`RestrictedCategory`] (goods that need extra
//! import documentation).
//!
//! Every category carries a fixed keyword list. Classification is a plain
//! lower-case substring test against these keywords; the lists are part of
//! the observable behavior (warning and error texts name the category), so
//! they change only together with the regulation data that references them.
//!
//! ## Invariant
//!
//! Regulation packs reference categories by their snake_case tag. Because the
//! pack schema deserializes straight into these enums, a pack cannot name a
//! category the classifier does not know.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TradelaneError;

/// Categories of goods that a country may prohibit outright.
///
/// | Tag | Typical goods |
/// |-----|---------------|
/// | `drugs` | narcotics, controlled substances |
/// | `weapons` | firearms, ammunition, blades |
/// | `explosives` | fireworks, detonators |
/// | `counterfeit` | replicas, pirated goods |
/// | `batteries` | lithium cells, power banks |
/// | `perfume` | fragrances (flammable) |
/// | `alcohol` | wine, beer, spirits |
/// | `tobacco` | cigarettes, vapes |
/// | `pork` | pork products |
/// | `medication` | prescription and pharmaceutical goods |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProhibitedCategory {
    /// Narcotics and controlled substances.
    Drugs,
    /// Firearms, ammunition and bladed weapons.
    Weapons,
    /// Explosives and pyrotechnics.
    Explosives,
    /// Counterfeit, replica or pirated goods.
    Counterfeit,
    /// Lithium and other batteries.
    Batteries,
    /// Perfume and fragrances.
    Perfume,
    /// Alcoholic beverages.
    Alcohol,
    /// Tobacco and nicotine products.
    Tobacco,
    /// Pork and pork-derived food.
    Pork,
    /// Medication and pharmaceuticals.
    Medication,
}

impl ProhibitedCategory {
    /// Returns every prohibited category in canonical order.
    pub fn all() -> &'static [ProhibitedCategory] {
        &[
            Self::Drugs,
            Self::Weapons,
            Self::Explosives,
            Self::Counterfeit,
            Self::Batteries,
            Self::Perfume,
            Self::Alcohol,
            Self::Tobacco,
            Self::Pork,
            Self::Medication,
        ]
    }

    /// Returns the snake_case tag for this category.
    ///
    /// Matches the serde representation and the text used in evaluator
    /// error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Drugs => "drugs",
            Self::Weapons => "weapons",
            Self::Explosives => "explosives",
            Self::Counterfeit => "counterfeit",
            Self::Batteries => "batteries",
            Self::Perfume => "perfume",
            Self::Alcohol => "alcohol",
            Self::Tobacco => "tobacco",
            Self::Pork => "pork",
            Self::Medication => "medication",
        }
    }

    /// Lower-case description keywords that place goods in this category.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Drugs => &[
                "drug",
                "narcotic",
                "cocaine",
                "heroin",
                "marijuana",
                "cannabis",
                "opium",
                "methamphetamine",
            ],
            Self::Weapons => &[
                "weapon",
                "firearm",
                "gun",
                "rifle",
                "pistol",
                "ammunition",
                "knife",
                "sword",
            ],
            Self::Explosives => &[
                "explosive",
                "dynamite",
                "grenade",
                "firework",
                "gunpowder",
                "detonator",
            ],
            Self::Counterfeit => &["counterfeit", "fake", "replica", "knockoff", "pirated"],
            Self::Batteries => &["battery", "batteries", "lithium", "power bank"],
            Self::Perfume => &["perfume", "cologne", "fragrance", "eau de"],
            Self::Alcohol => &[
                "alcohol", "wine", "beer", "vodka", "whisky", "whiskey", "liquor", "spirits",
            ],
            Self::Tobacco => &["tobacco", "cigarette", "cigar", "vape", "nicotine"],
            Self::Pork => &["pork", "bacon", "lard", "salami", "prosciutto", "pepperoni"],
            Self::Medication => &[
                "medication",
                "medicine",
                "pharmaceutical",
                "prescription",
                "pills",
                "antibiotic",
            ],
        }
    }

    /// Whether this category blocks a shipment even when it never leaves
    /// the country.
    pub fn is_domestic_critical(&self) -> bool {
        matches!(self, Self::Drugs | Self::Weapons | Self::Explosives)
    }
}

impl std::fmt::Display for ProhibitedCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProhibitedCategory {
    type Err = TradelaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| TradelaneError::UnknownCategory {
                kind: "prohibited",
                tag: s.to_string(),
            })
    }
}

/// Categories of goods that are allowed but need import documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictedCategory {
    /// Consumer and industrial electronics.
    Electronics,
    /// Cosmetics and personal care.
    Cosmetics,
    /// Food products.
    Food,
    /// Plants, seeds and soil.
    Plants,
    /// Animals and animal products.
    Animals,
    /// Liquids, oils and gels.
    Liquids,
    /// Chemicals and paints.
    Chemicals,
}

impl RestrictedCategory {
    /// Returns every restricted category in canonical order.
    pub fn all() -> &'static [RestrictedCategory] {
        &[
            Self::Electronics,
            Self::Cosmetics,
            Self::Food,
            Self::Plants,
            Self::Animals,
            Self::Liquids,
            Self::Chemicals,
        ]
    }

    /// Returns the snake_case tag for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Cosmetics => "cosmetics",
            Self::Food => "food",
            Self::Plants => "plants",
            Self::Animals => "animals",
            Self::Liquids => "liquids",
            Self::Chemicals => "chemicals",
        }
    }

    /// Lower-case description keywords that place goods in this category.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Electronics => &[
                "electronic",
                "laptop",
                "phone",
                "computer",
                "tablet",
                "camera",
                "television",
            ],
            Self::Cosmetics => &[
                "cosmetic",
                "makeup",
                "lipstick",
                "skincare",
                "shampoo",
                "nail polish",
            ],
            Self::Food => &[
                "food",
                "snack",
                "chocolate",
                "coffee",
                "spice",
                "candy",
                "dried fruit",
            ],
            Self::Plants => &["plant", "seed", "flower", "bulb", "soil"],
            Self::Animals => &[
                "animal",
                "livestock",
                "ivory",
                "feather",
                "taxidermy",
                "leather",
            ],
            Self::Liquids => &["liquid", "fluid", "oil", "gel", "lotion", "aerosol"],
            Self::Chemicals => &["chemical", "acid", "solvent", "pesticide", "paint", "bleach"],
        }
    }
}

impl std::fmt::Display for RestrictedCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RestrictedCategory {
    type Err = TradelaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| TradelaneError::UnknownCategory {
                kind: "restricted",
                tag: s.to_string(),
            })
    }
}
