//! # tradelane-compliance: Compliance and Landed-Cost Engine
//!
//! Given an origin, a destination, a goods description and a declared
//! value, decides whether a shipment is domestic or international, flags
//! prohibited and restricted goods, lists the documents the destination
//! expects, and estimates the landed-cost add-ons.
//!
//! ## Architecture
//!
//! ```text
//! ComplianceCheckInput
//!   -> CountryResolver x2        (resolver.rs)
//!   -> route: Domestic | International
//!   -> ItemClassifier            (classifier.rs)
//!   -> rule combination          (evaluator.rs)
//!   -> LandedCostCalculator      (landed_cost.rs)
//!   -> ReportBuilder::finish     (report.rs)
//!   -> ComplianceCheckResult
//! ```
//!
//! Evaluation is synchronous, allocation-local and never fails: unknown
//! countries, empty descriptions and zero values degrade to conservative
//! defaults. Only engine construction (loading a pack, validating config)
//! returns errors.

pub mod classifier;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod landed_cost;
pub mod report;
pub mod resolver;

pub use classifier::{Classification, ItemClassifier};
pub use config::EngineConfig;
pub use error::{ComplianceError, ComplianceResult};
pub use evaluator::{ComplianceCheckInput, ComplianceEngine};
pub use landed_cost::{CostBreakdown, LandedCostCalculator};
pub use report::ComplianceCheckResult;
pub use resolver::CountryResolver;
