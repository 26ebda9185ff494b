//! # tradelane-pack: Country Regulation Pack
//!
//! Encodes per-country regulatory profiles as versioned configuration data
//! rather than code:
//!
//! - **Schema** ([`regulation`]): [`CountryRegulation`], [`TaxRates`],
//!   [`CountryAlias`] and the [`RegulationPack`] document that holds them.
//!
//! - **Registry** ([`registry`]): [`CountryRegistry`], the immutable,
//!   order-preserving lookup table the compliance engine reads from.
//!
//! - **Validation** ([`validation`]): load-time checks on rates,
//!   multipliers, duplicate codes and alias targets.
//!
//! ## Data Format
//!
//! Packs are YAML documents. The built-in snapshot ships inside the crate
//! (`data/regulations.yaml`) and is identified by its version string plus
//! a SHA-256 digest of the source text, so callers can tell exactly which
//! regulation snapshot produced an estimate.
//!
//! ## Crate Policy
//!
//! - Depends only on `tradelane-core` internally.
//! - Registries are never mutated after construction.

pub mod error;
pub mod parser;
pub mod registry;
pub mod regulation;
pub mod validation;

// Re-export primary types.
pub use error::{PackError, PackResult};
pub use registry::CountryRegistry;
pub use regulation::{CountryAlias, CountryRegulation, RegulationPack, TaxRates};
