//! # tradelane-core: Foundational Types for the Quote Engine
//!
//! The leaf crate of the Tradelane workspace. It defines the vocabulary the
//! regulation pack and the compliance engine share, so that a category tag
//! or a country code means exactly one thing everywhere.
//!
//! ## Key Design Principles
//!
//! 1. **One category vocabulary.** [`ProhibitedCategory`] and
//!    [`RestrictedCategory`] are closed enums with a fixed keyword list per
//!    variant. Regulation packs reference them by tag; an unknown tag fails
//!    at load time instead of silently never matching.
//!
//! 2. **Newtype wrappers for identifiers.** [`CountryCode`] is validated and
//!    upper-cased on construction. No bare strings for codes inside the engine.
//!
//! 3. **Hints stay hints.** [`ServiceType`] is parsed leniently and only
//!    echoed; it never changes evaluation.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tradelane-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod category;
pub mod error;
pub mod identity;

// Re-export primary types for ergonomic imports.
pub use category::{ProhibitedCategory, RestrictedCategory};
pub use error::{TradelaneError, TradelaneResult};
pub use identity::{CountryCode, ServiceType, ShipmentRoute, UNKNOWN_COUNTRY};
