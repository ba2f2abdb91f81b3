//! Shared JSON fixtures for mascot crates.
//!
//! Fixture files live under the workspace-root `fixtures/` directory and are
//! listed in `fixtures/manifest.json`. Loaders return raw JSON strings so
//! each consumer parses with its own types; this crate stays free of any
//! dependency on the avatar crates.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    configs: HashMap<String, String>,
    scripts: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = fixtures_root().join(rel);
    fs::read_to_string(&path).with_context(|| format!("failed to read fixture at {}", path.display()))
}

/// Raw JSON for a named avatar config fixture.
pub fn config(name: &str) -> Result<String> {
    let rel = MANIFEST
        .configs
        .get(name)
        .ok_or_else(|| anyhow!("unknown config fixture: {name}"))?;
    read_to_string(rel)
}

/// Raw JSON for a named input-event script fixture.
pub fn script(name: &str) -> Result<String> {
    let rel = MANIFEST
        .scripts
        .get(name)
        .ok_or_else(|| anyhow!("unknown script fixture: {name}"))?;
    read_to_string(rel)
}

/// Names of all config fixtures in the manifest.
pub fn config_names() -> Vec<String> {
    MANIFEST.configs.keys().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_entries_resolve() {
        for name in config_names() {
            config(&name).expect("config fixture readable");
        }
        script("sweep").expect("script fixture readable");
    }

    #[test]
    fn unknown_names_error() {
        assert!(config("nope").is_err());
        assert!(script("nope").is_err());
    }
}
