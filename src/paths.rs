//! Typed paths into the package and install layouts.
//!
//! Centralizing path construction keeps the installer and validator in
//! agreement about which subtrees are managed.
use std::path::{Path, PathBuf};

/// Locates assets inside the distributed package.
#[derive(Debug, Clone)]
pub struct PackageLayout {
    root: PathBuf,
}

impl PackageLayout {
    /// Create a layout rooted at the package directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Return the package root used for path derivation.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Return the `package.json` descriptor path.
    pub fn descriptor_path(&self) -> PathBuf {
        self.root.join("package.json")
    }

    /// Return the `commands/ui/` source directory.
    pub fn commands_dir(&self) -> PathBuf {
        self.root.join("commands").join("ui")
    }

    /// Return the `agents/` source directory.
    pub fn agents_dir(&self) -> PathBuf {
        self.root.join("agents")
    }

    /// Return the `ui-design/` source directory.
    pub fn ui_design_dir(&self) -> PathBuf {
        self.root.join("ui-design")
    }

    /// Return the `ui-design/adapters/` source directory.
    pub fn adapters_dir(&self) -> PathBuf {
        self.ui_design_dir().join("adapters")
    }

    /// Return the `ui-design/templates/` source directory.
    pub fn templates_dir(&self) -> PathBuf {
        self.ui_design_dir().join("templates")
    }

    /// Return the `ui-design/references/` source directory.
    pub fn references_dir(&self) -> PathBuf {
        self.ui_design_dir().join("references")
    }
}

/// Locates managed subtrees inside an install root.
#[derive(Debug, Clone)]
pub struct InstallLayout {
    root: PathBuf,
}

impl InstallLayout {
    /// Create a layout rooted at the install directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Return the install root used for path derivation.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Return the `commands/ui/` destination directory.
    pub fn commands_dir(&self) -> PathBuf {
        self.root.join("commands").join("ui")
    }

    /// Return the `agents/` destination directory, shared with entries the
    /// tool does not own.
    pub fn agents_dir(&self) -> PathBuf {
        self.root.join("agents")
    }

    /// Return the `ui-design/` destination directory.
    pub fn ui_design_dir(&self) -> PathBuf {
        self.root.join("ui-design")
    }

    /// Return the `ui-design/adapters/` destination directory.
    pub fn adapters_dir(&self) -> PathBuf {
        self.ui_design_dir().join("adapters")
    }

    /// Return the `ui-design/templates/` destination directory.
    pub fn templates_dir(&self) -> PathBuf {
        self.ui_design_dir().join("templates")
    }

    /// Return the `ui-design/references/` destination directory.
    pub fn references_dir(&self) -> PathBuf {
        self.ui_design_dir().join("references")
    }

    /// Return the `ui-design/VERSION` marker path.
    pub fn version_marker_path(&self) -> PathBuf {
        self.ui_design_dir().join("VERSION")
    }
}
