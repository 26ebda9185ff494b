//! # Validate Subcommand
//!
//! Loads an external regulation pack and reports validation findings
//! without building an engine. Intended for CI on pack updates.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use tradelane_pack::parser::{load_pack_file, source_digest};
use tradelane_pack::validation::validate_pack;

/// Arguments for the `tradelane validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Regulation pack YAML file.
    #[arg(value_name = "PACK")]
    pub path: PathBuf,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when the pack is valid (warnings allowed), 1 when
/// it has validation errors.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let (report, code) = validate_file(&args.path)?;
    print!("{report}");
    Ok(code)
}

/// Validate a pack file, returning the printable report and exit code.
pub fn validate_file(path: &Path) -> Result<(String, u8)> {
    let (pack, source) = load_pack_file(path)
        .with_context(|| format!("failed to load regulation pack {}", path.display()))?;
    let result = validate_pack(&pack);

    let mut out = format!(
        "{}: version {}, {} countries, {} aliases, sha256 {}\n",
        path.display(),
        pack.version,
        pack.countries.len(),
        pack.aliases.len(),
        source_digest(&source)
    );
    for warning in &result.warnings {
        out.push_str(&format!("  WARN: {warning}\n"));
    }
    for error in &result.errors {
        out.push_str(&format!("  FAIL: {error}\n"));
    }

    if result.is_valid() {
        out.push_str("OK\n");
        Ok((out, 0))
    } else {
        out.push_str(&format!("{} error(s)\n", result.errors.len()));
        Ok((out, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_pack(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("pack.yaml");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn valid_pack_passes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pack(
            &dir,
            "version: \"ci\"\ncountries:\n  - {code: SG, name: Singapore, cfr_multiplier: 0.1, xwork_multiplier: 0.05}\n",
        );
        let (report, code) = validate_file(&path).unwrap();
        assert_eq!(code, 0);
        assert!(report.contains("1 countries"));
        assert!(report.ends_with("OK\n"));
    }

    #[test]
    fn invalid_pack_fails_with_findings() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pack(
            &dir,
            "version: \"ci\"\ncountries:\n  - {code: SG, name: Singapore, cfr_multiplier: 1.1, xwork_multiplier: 0.05}\naliases:\n  - {alias: OZ, code: AU}\n",
        );
        let (report, code) = validate_file(&path).unwrap();
        assert_eq!(code, 1);
        assert!(report.contains("FAIL"));
        assert!(report.contains("2 error(s)"));
    }

    #[test]
    fn warnings_do_not_fail() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pack(
            &dir,
            "version: \"ci\"\ncountries:\n  - {code: NG, name: Nigeria, requires_pre_inspection: true, cfr_multiplier: 0.1, xwork_multiplier: 0.05}\n",
        );
        let (report, code) = validate_file(&path).unwrap();
        assert_eq!(code, 0);
        assert!(report.contains("WARN"));
    }

    #[test]
    fn missing_file_is_operational_error() {
        assert!(validate_file(Path::new("/nonexistent/pack.yaml")).is_err());
    }
}
