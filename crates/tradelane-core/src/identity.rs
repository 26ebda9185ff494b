//! # Identity and Routing Types
//!
//! Newtypes and small enums shared by the regulation pack and the
//! compliance engine.
//!
//! - [`CountryCode`]: validated, upper-cased country code (2–3 letters).
//! - [`ServiceType`]: advisory booking-flow hint supplied by callers.
//! - [`ShipmentRoute`]: the evaluator's domestic/international decision.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TradelaneError;

/// Placeholder reported for a country the resolver could not identify.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// A country code as used by the regulation pack (e.g. `US`, `UK`, `CN`).
///
/// # Validation
///
/// Two or three ASCII letters. Input is upper-cased, so `"us"` and `"US"`
/// produce the same code. Codes are pack keys rather than strict ISO 3166
/// values, which is why `UK` is accepted alongside `GB`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a country code, validating and upper-casing the input.
    ///
    /// # Errors
    ///
    /// Returns [`TradelaneError::InvalidCountryCode`] if the trimmed input is
    /// not 2–3 ASCII letters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, TradelaneError> {
        let raw = value.as_ref().trim();
        if !(2..=3).contains(&raw.len()) {
            return Err(TradelaneError::InvalidCountryCode {
                input: raw.to_string(),
                reason: "must be 2 or 3 characters",
            });
        }
        if !raw.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(TradelaneError::InvalidCountryCode {
                input: raw.to_string(),
                reason: "must contain only ASCII letters",
            });
        }
        Ok(Self(raw.to_ascii_uppercase()))
    }

    /// Access the code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CountryCode {
    type Err = TradelaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = TradelaneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

/// The booking flow a quote request came from.
///
/// Advisory only: the evaluator echoes it in the result but applies the
/// same rules to every service type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    /// Small parcel / courier.
    Parcel,
    /// Less-than-container-load sea freight.
    Lcl,
    /// Air freight.
    AirFreight,
}

impl ServiceType {
    /// Return the snake_case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parcel => "parcel",
            Self::Lcl => "lcl",
            Self::AirFreight => "air_freight",
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = TradelaneError;

    /// Lenient parse: case-insensitive, and `-`/space are treated as `_`,
    /// so wizard labels like `"Air Freight"` or `"air-freight"` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();
        match normalized.as_str() {
            "parcel" | "courier" => Ok(Self::Parcel),
            "lcl" => Ok(Self::Lcl),
            "air_freight" | "air" => Ok(Self::AirFreight),
            _ => Err(TradelaneError::UnknownServiceType(s.to_string())),
        }
    }
}

/// Which evaluation branch a shipment took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentRoute {
    /// Origin and destination resolved to the same country.
    Domestic,
    /// Different countries, or at least one side unresolved.
    International,
}

impl ShipmentRoute {
    /// Return the snake_case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Domestic => "domestic",
            Self::International => "international",
        }
    }
}

impl std::fmt::Display for ShipmentRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn country_code_uppercases() {
        let code = CountryCode::new("us").unwrap();
        assert_eq!(code.as_str(), "US");
        assert_eq!(code, CountryCode::new(" US ").unwrap());
    }

    #[test]
    fn country_code_rejects_bad_input() {
        assert!(CountryCode::new("").is_err());
        assert!(CountryCode::new("U").is_err());
        assert!(CountryCode::new("USAX").is_err());
        assert!(CountryCode::new("U5").is_err());
        assert!(CountryCode::new("é1").is_err());
    }

    #[test]
    fn country_code_serde_is_bare_string() {
        let code = CountryCode::new("cn").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"CN\"");
        let parsed: CountryCode = serde_json::from_str("\"uk\"").unwrap();
        assert_eq!(parsed.as_str(), "UK");
    }

    #[test]
    fn country_code_deserialize_validates() {
        assert!(serde_json::from_str::<CountryCode>("\"U-S\"").is_err());
    }

    #[test]
    fn service_type_lenient_parse() {
        assert_eq!("LCL".parse::<ServiceType>().unwrap(), ServiceType::Lcl);
        assert_eq!(
            "Air Freight".parse::<ServiceType>().unwrap(),
            ServiceType::AirFreight
        );
        assert_eq!(
            "air-freight".parse::<ServiceType>().unwrap(),
            ServiceType::AirFreight
        );
        assert_eq!("parcel".parse::<ServiceType>().unwrap(), ServiceType::Parcel);
        assert!("teleport".parse::<ServiceType>().is_err());
    }

    #[test]
    fn route_display() {
        assert_eq!(ShipmentRoute::Domestic.to_string(), "domestic");
        assert_eq!(ShipmentRoute::International.to_string(), "international");
    }

    proptest! {
        #[test]
        fn country_code_accepts_any_two_or_three_letters(s in "[a-zA-Z]{2,3}") {
            let code = CountryCode::new(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.to_ascii_uppercase());
        }
    }
}
