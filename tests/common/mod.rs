//! Shared fixtures for integration tests.
//!
//! Builds a release-shaped package tree in a temp directory so tests can
//! drive the real binary against it.
#![allow(dead_code)]

use std::fs;
use std::path::Path;

pub const REQUIRED_COMMANDS: &[&str] = &[
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

pub const REQUIRED_AGENTS: &[&str] = &[
    "README.md",
    "ui-designer.md",
    "ui-researcher.md",
    "ui-specifier.md",
    "ui-prompter.md",
];

pub const REQUIRED_ADAPTERS: &[&str] =
    &["README.md", "stitch.md", "v0.md", "figma.md", "generic.md"];

pub const REQUIRED_TEMPLATES: &[&str] = &[
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

pub const REFERENCES: &[&str] = &["layout.md", "color.md"];

/// Total files a full fixture installs: 14 commands + 4 ui-* agents +
/// 5 adapters + 9 templates + 2 references.
pub const FULL_INSTALL_COUNT: usize = 34;

pub const PACKAGE_JSON: &str = r#"{
  "name": "ui-design-cc",
  "version": "1.0.0",
  "description": "UI Design System for Claude Code",
  "bin": { "ui-design-cc": "bin/install.js" },
  "files": ["bin/", "commands/", "agents/", "ui-design/"],
  "license": "MIT"
}
"#;

pub fn bin_path() -> &'static str {
    env!("CARGO_BIN_EXE_ui-design-cc")
}

pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, content).expect("write fixture");
}

/// Write a complete release-shaped package tree rooted at `root`.
pub fn write_full_package(root: &Path) {
    write_file(&root.join("package.json"), PACKAGE_JSON);
    write_file(&root.join("README.md"), "# UI Design System for Claude Code\n");
    write_file(&root.join("LICENSE"), "MIT\n");

    for name in REQUIRED_COMMANDS {
        write_file(
            &root.join("commands/ui").join(name),
            &format!("# {name}\n\nSee ~/.claude/ui-design for config.\n"),
        );
    }
    for name in REQUIRED_AGENTS {
        write_file(
            &root.join("agents").join(name),
            &format!("# {name}\n\nAssets live in ~/.claude/ui-design.\n"),
        );
    }
    for name in REQUIRED_ADAPTERS {
        write_file(&root.join("ui-design/adapters").join(name), &format!("# {name}\n"));
    }
    for name in REQUIRED_TEMPLATES {
        if name.ends_with(".json") {
            write_file(
                &root.join("ui-design/templates").join(name),
                "{\n  \"root\": \"~/.claude/ui-design\"\n}\n",
            );
        } else {
            write_file(&root.join("ui-design/templates").join(name), &format!("# {name}\n"));
        }
    }
    for name in REFERENCES {
        write_file(&root.join("ui-design/references").join(name), &format!("# {name}\n"));
    }
}
