//! Shared test fixtures: page layouts and content JSON, resolved through
//! `fixtures/manifest.json` at the workspace root.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    layouts: HashMap<String, LayoutEntry>,
    content: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LayoutEntry {
    Path(String),
    Detailed { path: String },
}

impl LayoutEntry {
    fn as_path(&self) -> &str {
        match self {
            LayoutEntry::Path(path) => path,
            LayoutEntry::Detailed { path } => path,
        }
    }
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

/// Page layouts: viewport plus element geometry, data attributes and children.
pub mod layouts {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.layouts.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let entry = lookup(&MANIFEST.layouts, "layout", name)?;
        read_to_string(entry.as_path())
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let entry = lookup(&MANIFEST.layouts, "layout", name)?;
        super::load_json(entry.as_path())
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let entry = lookup(&MANIFEST.layouts, "layout", name)?;
        Ok(resolve_path(entry.as_path()))
    }
}

/// Static content documents (projects, services, skills).
pub mod content {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.content.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.content, "content", name)?;
        read_to_string(rel)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let rel = lookup(&MANIFEST.content, "content", name)?;
        super::load_json(rel)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let rel = lookup(&MANIFEST.content, "content", name)?;
        Ok(resolve_path(rel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_manifest_entry_exists() {
        for name in layouts::keys() {
            assert!(layouts::path(&name).unwrap().is_file(), "layout {name}");
        }
        for name in content::keys() {
            assert!(content::path(&name).unwrap().is_file(), "content {name}");
        }
    }

    #[test]
    fn unknown_names_are_errors() {
        assert!(layouts::json("nope").is_err());
        assert!(content::load::<serde_json::Value>("nope").is_err());
    }
}
