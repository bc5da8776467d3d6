//! Pre-publish validation against the static release manifest.
//!
//! Checks accumulate into an explicit diagnostics collector and nothing
//! aborts early, so one run reports every problem at once. Warnings are
//! advisory only; the exit status reflects errors alone.
use crate::cli::ValidateArgs;
use crate::descriptor::PackageDescriptor;
use crate::paths::PackageLayout;
use crate::sync;
use anyhow::{Context, Result};
use regex::Regex;
use std::env;
use std::path::Path;

/// Files every release must carry at the package root.
const REQUIRED_ROOT_FILES: &[&str] = &["package.json", "README.md", "LICENSE"];

/// Publish inclusion-list entries the descriptor must name literally.
const REQUIRED_FILES_ENTRIES: &[&str] = &["bin/", "commands/", "agents/", "ui-design/"];

const REQUIRED_COMMANDS: &[&str] = &[
    "init.md",
    "setup-tokens.md",
    "design-screens.md",
    "define-components.md",
    "export.md",
    "import-tokens.md",
    "import-design.md",
    "realize.md",
    "sync.md",
    "status.md",
    "decisions.md",
    "patterns.md",
    "whats-new.md",
    "help.md",
];

const REQUIRED_AGENTS: &[&str] = &[
    "README.md",
    "ui-designer.md",
    "ui-researcher.md",
    "ui-specifier.md",
    "ui-prompter.md",
];

const REQUIRED_ADAPTERS: &[&str] = &["README.md", "stitch.md", "v0.md", "figma.md", "generic.md"];

const REQUIRED_TEMPLATES: &[&str] = &[
    "README.md",
    "ui-spec.md",
    "ui-context.md",
    "screen.md",
    "component.md",
    "ui-patterns.md",
    "ui-decisions.md",
    "ui-registry.md",
    "design-tokens.json",
];

/// Ordered error and warning lists accumulated across checks.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Diagnostics {
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// Run the full checklist and print the report. Returns whether the package
/// passed (no errors; warnings allowed).
pub fn run_validate(args: &ValidateArgs) -> Result<bool> {
    let root = match &args.package_dir {
        Some(path) => path
            .canonicalize()
            .with_context(|| format!("resolve package dir {}", path.display()))?,
        None => env::current_dir().context("resolve current directory")?,
    };
    let package = PackageLayout::new(root);
    let mut diagnostics = Diagnostics::default();

    println!();
    println!("Validating UI Design System for Claude Code...");
    println!();

    println!("Checking root files...");
    check_root_files(package.root(), &mut diagnostics);

    println!("Validating package.json...");
    let descriptor = check_descriptor(&package, &mut diagnostics);

    println!("Checking commands/ui/...");
    check_directory(
        package.root(),
        "commands/ui",
        REQUIRED_COMMANDS,
        "command",
        &mut diagnostics,
    );

    println!("Checking agents/...");
    check_directory(
        package.root(),
        "agents",
        REQUIRED_AGENTS,
        "agent",
        &mut diagnostics,
    );

    println!("Checking ui-design/adapters/...");
    check_directory(
        package.root(),
        "ui-design/adapters",
        REQUIRED_ADAPTERS,
        "adapter",
        &mut diagnostics,
    );

    println!("Checking ui-design/templates/...");
    check_directory(
        package.root(),
        "ui-design/templates",
        REQUIRED_TEMPLATES,
        "template",
        &mut diagnostics,
    );

    println!();
    println!("{}", "-".repeat(50));
    print_summary(&package, descriptor.as_ref(), &diagnostics)?;

    Ok(!diagnostics.has_errors())
}

fn check_root_files(root: &Path, diagnostics: &mut Diagnostics) {
    for file in REQUIRED_ROOT_FILES {
        if !root.join(file).exists() {
            diagnostics.error(format!("Missing root file: {file}"));
        }
    }
}

fn check_descriptor(
    package: &PackageLayout,
    diagnostics: &mut Diagnostics,
) -> Option<PackageDescriptor> {
    let path = package.descriptor_path();
    if !path.is_file() {
        // Already reported by the root-file check.
        return None;
    }
    let descriptor = match PackageDescriptor::load(&path) {
        Ok(descriptor) => descriptor,
        Err(err) => {
            diagnostics.error(format!("Unreadable package.json: {err:#}"));
            return None;
        }
    };
    check_descriptor_fields(&descriptor, diagnostics);
    check_version_format(&descriptor, diagnostics);
    check_files_entries(&descriptor, diagnostics);
    Some(descriptor)
}

fn check_descriptor_fields(descriptor: &PackageDescriptor, diagnostics: &mut Diagnostics) {
    let mut require_text = |value: Option<&str>, field: &str| {
        if !value.is_some_and(|text| !text.trim().is_empty()) {
            diagnostics.error(format!("package.json missing required field: {field}"));
        }
    };
    require_text(descriptor.name.as_deref(), "name");
    require_text(descriptor.version.as_deref(), "version");
    require_text(descriptor.description.as_deref(), "description");
    if descriptor.bin.is_none() {
        diagnostics.error("package.json missing required field: bin");
    }
    if !descriptor.files.as_ref().is_some_and(|files| !files.is_empty()) {
        diagnostics.error("package.json missing required field: files");
    }
    if !descriptor
        .license
        .as_deref()
        .is_some_and(|text| !text.trim().is_empty())
    {
        diagnostics.error("package.json missing required field: license");
    }
}

fn check_version_format(descriptor: &PackageDescriptor, diagnostics: &mut Diagnostics) {
    let Some(version) = descriptor.version.as_deref().filter(|v| !v.is_empty()) else {
        return;
    };
    let semver = Regex::new(r"^\d+\.\d+\.\d+$").expect("regex for semver versions");
    if !semver.is_match(version) {
        diagnostics.warning(format!(
            "Version \"{version}\" should follow semver format (x.y.z)"
        ));
    }
}

fn check_files_entries(descriptor: &PackageDescriptor, diagnostics: &mut Diagnostics) {
    for entry in REQUIRED_FILES_ENTRIES {
        let listed = descriptor
            .files
            .as_ref()
            .is_some_and(|files| files.iter().any(|item| item == entry));
        if !listed {
            diagnostics.error(format!("package.json \"files\" should include: {entry}"));
        }
    }
}

fn check_directory(
    root: &Path,
    rel_dir: &str,
    required: &[&str],
    label: &str,
    diagnostics: &mut Diagnostics,
) {
    let dir = root.join(rel_dir);
    if !dir.is_dir() {
        diagnostics.error(format!("Missing directory: {rel_dir}"));
        return;
    }
    for file in required {
        if !dir.join(file).exists() {
            diagnostics.error(format!("Missing {label}: {rel_dir}/{file}"));
        }
    }
}

fn print_summary(
    package: &PackageLayout,
    descriptor: Option<&PackageDescriptor>,
    diagnostics: &Diagnostics,
) -> Result<()> {
    println!();
    if let Some(descriptor) = descriptor {
        let name = descriptor.name.as_deref().unwrap_or("unknown");
        let version = descriptor.version.as_deref().unwrap_or("unknown");
        println!("Package: {name}@{version}");
    }
    // Informational only: actual counts, not checked against the manifest.
    println!("Commands: {} files", sync::count_files(&package.commands_dir())?);
    println!("Agents: {} files", sync::count_files(&package.agents_dir())?);
    println!("Adapters: {} files", sync::count_files(&package.adapters_dir())?);
    println!("Templates: {} files", sync::count_files(&package.templates_dir())?);

    if !diagnostics.warnings().is_empty() {
        println!();
        println!("Warnings ({}):", diagnostics.warnings().len());
        for warning in diagnostics.warnings() {
            println!("  ! {warning}");
        }
    }

    if diagnostics.has_errors() {
        println!();
        println!("Errors ({}):", diagnostics.errors().len());
        for error in diagnostics.errors() {
            println!("  x {error}");
        }
        println!();
        println!("Validation failed. Please fix errors before publishing.");
    } else {
        println!();
        println!("Validation passed! Ready to publish.");
    }
    println!();
    Ok(())
}
