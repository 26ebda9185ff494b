//! # tradelane-cli: Developer CLI for the Compliance Engine
//!
//! Provides the `tradelane` command-line interface over the library entry
//! point. Booking flows call the library directly; the CLI exists for
//! operators checking a lane by hand and for CI validation of regulation
//! packs.
//!
//! ## Subcommands
//!
//! - `tradelane check` runs one compliance check.
//! - `tradelane countries` lists the regulation registry.
//! - `tradelane validate` validates an external regulation pack.
//!
//! ```bash
//! tradelane check --origin "New York, US" --destination "London, UK" \
//!     --description "cotton t-shirts" --value 1000 --weight 10
//! tradelane --regpack packs/2025.3.yaml countries --json
//! tradelane validate packs/2025.3.yaml
//! ```

pub mod check;
pub mod countries;
pub mod validate;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use tradelane_compliance::{ComplianceEngine, EngineConfig};
use tradelane_pack::CountryRegistry;

/// Load the registry, from `regpack` if given, otherwise the built-in one.
pub fn load_registry(regpack: Option<&Path>) -> Result<CountryRegistry> {
    match regpack {
        Some(path) => CountryRegistry::load(path)
            .with_context(|| format!("failed to load regulation pack {}", path.display())),
        None => CountryRegistry::builtin().context("failed to load built-in regulation pack"),
    }
}

/// Build an engine from optional pack and config overrides.
pub fn load_engine(regpack: Option<&Path>, config: Option<&Path>) -> Result<ComplianceEngine> {
    let registry = load_registry(regpack)?;
    let config = match config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load engine config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    ComplianceEngine::new(Arc::new(registry), config).context("invalid engine configuration")
}
