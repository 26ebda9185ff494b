//! # Countries Subcommand
//!
//! Lists the regulation registry in resolution order.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use tradelane_pack::{CountryRegistry, CountryRegulation};

/// Arguments for the `tradelane countries` subcommand.
#[derive(Args, Debug)]
pub struct CountriesArgs {
    /// Print the full profiles as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Listing<'a> {
    version: &'a str,
    digest: &'a str,
    countries: Vec<&'a CountryRegulation>,
}

/// Execute the countries subcommand.
pub fn run_countries(args: &CountriesArgs, registry: &CountryRegistry) -> Result<u8> {
    if args.json {
        let listing = Listing {
            version: registry.version(),
            digest: registry.digest(),
            countries: registry.iter().collect(),
        };
        let json =
            serde_json::to_string_pretty(&listing).context("failed to serialize registry")?;
        println!("{json}");
    } else {
        print!("{}", render_table(registry));
    }
    Ok(0)
}

/// One line per country: code, name, rates and inspection flag.
pub fn render_table(registry: &CountryRegistry) -> String {
    let mut out = format!(
        "Regulation pack {} ({} countries)\n",
        registry.version(),
        registry.len()
    );
    for c in registry.iter() {
        out.push_str(&format!(
            "{:<4}{:<24} import {:>5.1}%  duty {:>5.1}%  cfr {:.2}  xwork {:.2}{}\n",
            c.code.as_str(),
            c.name,
            c.tax_rates.import,
            c.tax_rates.duty,
            c.cfr_multiplier,
            c.xwork_multiplier,
            if c.requires_pre_inspection {
                "  pre-inspection"
            } else {
                ""
            }
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_country_in_order() {
        let registry = CountryRegistry::builtin().unwrap();
        let table = render_table(&registry);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), registry.len() + 1);
        assert!(lines[1].starts_with("US  United States"));
        assert!(lines[3].starts_with("CN  China"));
        assert!(lines[3].ends_with("pre-inspection"));
    }

    #[test]
    fn json_listing_succeeds() {
        let registry = CountryRegistry::builtin().unwrap();
        assert_eq!(run_countries(&CountriesArgs { json: true }, &registry).unwrap(), 0);
    }
}
