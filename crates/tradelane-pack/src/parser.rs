//! Shared YAML parsing for regulation packs.
//!
//! Wraps serde_yaml with file-path context and computes the content digest
//! that identifies a pack snapshot. Every loader in this crate goes through
//! these functions so error messages look the same whether a pack came from
//! disk or from the built-in snapshot.

use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{PackError, PackResult};
use crate::regulation::RegulationPack;

/// Read a file, mapping a missing file to [`PackError::FileNotFound`].
pub fn read_pack_source(path: &Path) -> PackResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PackError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PackError::Io(e)
        }
    })
}

/// Parse pack YAML that did not come from a file.
pub fn parse_pack_str(source: &str) -> PackResult<RegulationPack> {
    Ok(serde_yaml::from_str(source)?)
}

/// Load and parse a pack file.
pub fn load_pack_file(path: &Path) -> PackResult<(RegulationPack, String)> {
    let source = read_pack_source(path)?;
    let pack = serde_yaml::from_str(&source).map_err(|e| PackError::YamlParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok((pack, source))
}

/// Load any YAML document into a strongly-typed struct.
///
/// Used for configuration files that share the pack's error reporting.
pub fn load_yaml_typed<T: serde::de::DeserializeOwned>(path: &Path) -> PackResult<T> {
    let content = read_pack_source(path)?;
    serde_yaml::from_str(&content).map_err(|e| PackError::YamlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// SHA-256 of the pack source text, as 64 lowercase hex characters.
pub fn source_digest(source: &str) -> String {
    Sha256::digest(source.as_bytes())
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}
