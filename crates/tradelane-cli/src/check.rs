//! # Check Subcommand
//!
//! Runs one compliance check and prints the result as pretty JSON or as a
//! short text summary.
//!
//! Exit codes: 0 when the shipment may be booked, 2 when the result carries
//! errors. Operational failures surface as `Err` and exit 1.

use anyhow::{Context, Result};
use clap::Args;

use tradelane_compliance::{ComplianceCheckInput, ComplianceCheckResult, ComplianceEngine};
use tradelane_core::{ServiceType, TradelaneError};

/// Arguments for the `tradelane check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Origin address, free text.
    #[arg(long)]
    pub origin: String,

    /// Destination address, free text.
    #[arg(long)]
    pub destination: String,

    /// Goods description, free text.
    #[arg(long)]
    pub description: String,

    /// Harmonized System code.
    #[arg(long)]
    pub hs_code: Option<String>,

    /// Gross weight in kilograms.
    #[arg(long, default_value_t = 0.0)]
    pub weight: f64,

    /// Declared customs value.
    #[arg(long, default_value_t = 0.0)]
    pub value: f64,

    /// Booking flow: parcel, lcl or air-freight.
    #[arg(long, value_parser = parse_service_type)]
    pub service_type: Option<ServiceType>,

    /// Print the full result as JSON.
    #[arg(long)]
    pub json: bool,
}

impl CheckArgs {
    fn to_input(&self) -> ComplianceCheckInput {
        let mut input = ComplianceCheckInput::new(&self.origin, &self.destination, &self.description)
            .with_weight_kg(self.weight)
            .with_declared_value(self.value);
        if let Some(hs_code) = &self.hs_code {
            input = input.with_hs_code(hs_code);
        }
        if let Some(service_type) = self.service_type {
            input = input.with_service_type(service_type);
        }
        input
    }
}

fn parse_service_type(s: &str) -> Result<ServiceType, TradelaneError> {
    s.parse()
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs, engine: &ComplianceEngine) -> Result<u8> {
    let result = engine.evaluate(&args.to_input());
    tracing::info!(
        origin = %result.origin_country,
        destination = %result.destination_country,
        route = %result.route,
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "compliance check complete"
    );

    if args.json {
        let json = serde_json::to_string_pretty(&result).context("failed to serialize result")?;
        println!("{json}");
    } else {
        print!("{}", render_summary(&result));
    }

    Ok(if result.is_blocked() { 2 } else { 0 })
}

/// Human-readable summary of a result.
pub fn render_summary(result: &ComplianceCheckResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} -> {} ({})\n",
        result.origin_country, result.destination_country, result.route
    ));
    out.push_str(&format!(
        "Status: {}\n",
        if result.is_blocked() { "BLOCKED" } else { "OK" }
    ));

    push_list(&mut out, "Errors", &result.errors);
    push_list(&mut out, "Warnings", &result.warnings);
    push_list(&mut out, "Required documents", &result.required_documents);
    push_list(&mut out, "Export restrictions", &result.export_restrictions);
    push_list(&mut out, "Import restrictions", &result.import_restrictions);

    let costs = &result.cost_breakdown;
    out.push_str(&format!(
        "Costs: export tax {:.2}, import tax {:.2}, duty {:.2}, CFR {:.2}, Ex-Works {:.2}, total {:.2}\n",
        costs.export_tax,
        costs.import_tax,
        costs.import_duty,
        costs.cfr_cost,
        costs.xwork_cost,
        costs.total
    ));
    out
}

fn push_list(out: &mut String, label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(label);
    out.push_str(":\n");
    for item in items {
        out.push_str("  - ");
        out.push_str(item);
        out.push('\n');
    }
}
