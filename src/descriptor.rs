//! Package descriptor (`package.json`) parsing.
//!
//! Every field is optional so the validator can report absences one by one
//! instead of failing the whole parse.
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// The descriptor fields the installer and validator care about.
#[derive(Debug, Default, Deserialize)]
pub struct PackageDescriptor {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    /// Entry-point mapping; kept opaque, only presence is checked.
    pub bin: Option<Value>,
    /// Publish inclusion list.
    pub files: Option<Vec<String>>,
    pub license: Option<String>,
}

impl PackageDescriptor {
    /// Load the descriptor from a `package.json` path.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let descriptor = serde_json::from_str(&content)
            .with_context(|| format!("parse {}", path.display()))?;
        Ok(descriptor)
    }

    /// Version string, required by the installer for the version marker.
    pub fn require_version(&self) -> Result<&str> {
        self.version
            .as_deref()
            .filter(|version| !version.is_empty())
            .ok_or_else(|| anyhow!("package descriptor has no version"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_complete_descriptor() {
        let descriptor: PackageDescriptor = serde_json::from_str(
            r#"{
                "name": "ui-design-cc",
                "version": "1.0.0",
                "description": "UI Design System for Claude Code",
                "bin": {"ui-design-cc": "bin/install.js"},
                "files": ["bin/", "commands/", "agents/", "ui-design/"],
                "license": "MIT"
            }"#,
        )
        .expect("parse descriptor");

        assert_eq!(descriptor.name.as_deref(), Some("ui-design-cc"));
        assert_eq!(descriptor.require_version().unwrap(), "1.0.0");
        assert!(descriptor.bin.is_some());
        assert_eq!(descriptor.files.as_ref().map(Vec::len), Some(4));
    }

    #[test]
    fn missing_fields_parse_as_none() {
        let descriptor: PackageDescriptor =
            serde_json::from_str("{}").expect("parse empty descriptor");
        assert!(descriptor.name.is_none());
        assert!(descriptor.require_version().is_err());
    }

    #[test]
    fn empty_version_is_rejected() {
        let descriptor: PackageDescriptor =
            serde_json::from_str(r#"{"version": ""}"#).expect("parse descriptor");
        assert!(descriptor.require_version().is_err());
    }
}
