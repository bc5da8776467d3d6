//! Install workflow: resolve the target root, sync each managed category in
//! order, and finish with the version marker.
//!
//! Categories touch disjoint destination subtrees except agents, which is
//! shared with user-owned entries and therefore synced under the filtered
//! policy keyed on the reserved prefix.
use crate::cli::InstallArgs;
use crate::descriptor::PackageDescriptor;
use crate::paths::{InstallLayout, PackageLayout};
use crate::prompt::LineReader;
use crate::sync::{self, Replacements};
use anyhow::{anyhow, Context, Result};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Entries in the shared agents directory that belong to this tool.
pub const RESERVED_AGENT_PREFIX: &str = "ui-";

/// Path token the packaged documentation uses for the install root.
pub const GLOBAL_PATH_TOKEN: &str = "~/.claude";

/// Display prefix substituted for project-local installs.
pub const LOCAL_PATH_PREFIX: &str = "./.claude";

/// Where the assets land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMode {
    Global,
    Local,
}

impl InstallMode {
    /// Absolute install root for this mode.
    pub fn root(self) -> Result<PathBuf> {
        match self {
            InstallMode::Global => {
                let home =
                    dirs::home_dir().ok_or_else(|| anyhow!("cannot determine home directory"))?;
                Ok(home.join(".claude"))
            }
            InstallMode::Local => {
                let cwd = env::current_dir().context("resolve current directory")?;
                Ok(cwd.join(".claude"))
            }
        }
    }

    /// Short prefix substituted into installed documentation.
    pub fn display_prefix(self) -> &'static str {
        match self {
            InstallMode::Global => GLOBAL_PATH_TOKEN,
            InstallMode::Local => LOCAL_PATH_PREFIX,
        }
    }

    fn label(self) -> &'static str {
        match self {
            InstallMode::Global => "global (~/.claude/)",
            InstallMode::Local => "local (./.claude/)",
        }
    }
}

/// Pick the install mode from flags, falling back to a one-keystroke prompt.
///
/// Empty, unrecognized, and closed-stream answers all select global.
pub fn resolve_mode(args: &InstallArgs, reader: &mut dyn LineReader) -> Result<InstallMode> {
    if args.local {
        return Ok(InstallMode::Local);
    }
    if args.global {
        return Ok(InstallMode::Global);
    }

    println!();
    println!("Where would you like to install the UI Design System?");
    println!();
    println!("  1. Global (~/.claude/) - Available for all projects");
    println!("  2. Local (./.claude/)  - Only for current project");
    println!();
    print!("Select [1/2] (default: 1): ");
    io::stdout().flush().context("flush prompt")?;

    let answer = reader.read_line().context("read prompt answer")?;
    match answer.as_deref() {
        Some("2") => Ok(InstallMode::Local),
        _ => Ok(InstallMode::Global),
    }
}

/// Replacement table applied to every documentation file this run copies.
pub fn path_replacements(mode: InstallMode) -> Replacements {
    let mut table = Replacements::new();
    table.insert(
        GLOBAL_PATH_TOKEN.to_string(),
        mode.display_prefix().to_string(),
    );
    table
}

/// Resolve the package root holding the distributable assets.
///
/// Order: explicit flag, then the executable's grandparent (the layout a
/// packaged `bin/` install produces), then the current directory.
pub fn resolve_package_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return path
            .canonicalize()
            .with_context(|| format!("resolve package dir {}", path.display()));
    }
    if let Some(root) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().and_then(Path::parent).map(Path::to_path_buf))
        .filter(|root| root.join("package.json").is_file())
    {
        return Ok(root);
    }
    env::current_dir().context("resolve current directory")
}

enum SyncPolicy {
    Clean,
    Filtered,
}

struct Category {
    label: &'static str,
    display_dest: &'static str,
    source: PathBuf,
    dest: PathBuf,
    policy: SyncPolicy,
}

fn categories(package: &PackageLayout, target: &InstallLayout) -> Vec<Category> {
    vec![
        Category {
            label: "Commands",
            display_dest: "commands/ui/",
            source: package.commands_dir(),
            dest: target.commands_dir(),
            policy: SyncPolicy::Clean,
        },
        Category {
            label: "Agents",
            display_dest: "agents/ui-*",
            source: package.agents_dir(),
            dest: target.agents_dir(),
            policy: SyncPolicy::Filtered,
        },
        Category {
            label: "Adapters",
            display_dest: "ui-design/adapters/",
            source: package.adapters_dir(),
            dest: target.adapters_dir(),
            policy: SyncPolicy::Clean,
        },
        Category {
            label: "Templates",
            display_dest: "ui-design/templates/",
            source: package.templates_dir(),
            dest: target.templates_dir(),
            policy: SyncPolicy::Clean,
        },
        Category {
            label: "References",
            display_dest: "ui-design/references/",
            source: package.references_dir(),
            dest: target.references_dir(),
            policy: SyncPolicy::Clean,
        },
    ]
}

fn is_reserved_agent(name: &str) -> bool {
    name.starts_with(RESERVED_AGENT_PREFIX)
}

/// Run the install end to end: banner, mode resolution, category syncs,
/// version marker, summary.
pub fn run_install(args: &InstallArgs, reader: &mut dyn LineReader) -> Result<()> {
    let package_root = resolve_package_root(args.package_dir.as_deref())?;
    let package = PackageLayout::new(package_root);
    let descriptor = PackageDescriptor::load(&package.descriptor_path())?;
    let version = descriptor.require_version()?;

    println!("UI Design System for Claude Code v{version}");

    let mode = resolve_mode(args, reader)?;
    let target = InstallLayout::new(mode.root()?);
    let replacements = path_replacements(mode);

    println!();
    if args.dry_run {
        println!("Dry run - previewing {} installation", mode.label());
    } else {
        println!("Installing to: {}", target.root().display());
    }
    println!();

    if !args.dry_run {
        fs::create_dir_all(target.root())
            .with_context(|| format!("create {}", target.root().display()))?;
    }

    let mut total = 0;
    for category in categories(&package, &target) {
        let planned = match category.policy {
            SyncPolicy::Clean => sync::count_files(&category.source)?,
            SyncPolicy::Filtered => sync::filtered_count(&category.source, is_reserved_agent)?,
        };
        println!("{} ({planned} files)", category.label);

        if !category.source.exists() {
            println!();
            continue;
        }

        if args.dry_run {
            total += planned;
            println!("  Would install to {}", category.display_dest);
        } else {
            let copied = match category.policy {
                SyncPolicy::Clean => {
                    sync::clean_sync(&category.source, &category.dest, &replacements)?
                }
                SyncPolicy::Filtered => sync::filtered_sync(
                    &category.source,
                    &category.dest,
                    is_reserved_agent,
                    &replacements,
                )?,
            };
            total += copied;
            println!("  Installed to {}", category.display_dest);
        }
        println!();
    }

    if !args.dry_run {
        let marker = target.version_marker_path();
        if let Some(parent) = marker.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        fs::write(&marker, version).with_context(|| format!("write {}", marker.display()))?;
        tracing::info!(version, path = %marker.display(), "wrote version marker");
        println!("Version file written ({version})");
    }

    println!("{}", "-".repeat(50));
    println!();
    if args.dry_run {
        println!("Dry run complete. Would install {total} files.");
        println!();
        println!("Run without --dry-run to install.");
    } else {
        println!("Installation complete! ({total} files)");
        println!();
        println!("Next steps:");
        println!("  1. Open Claude Code in your project");
        println!("  2. Run /ui:init to get started");
        println!("  3. Run /ui:help for all commands");
    }
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct ScriptedReader {
        lines: Vec<Option<String>>,
    }

    impl ScriptedReader {
        fn new(lines: Vec<Option<String>>) -> Self {
            Self { lines }
        }
    }

    impl LineReader for ScriptedReader {
        fn read_line(&mut self) -> io::Result<Option<String>> {
            if self.lines.is_empty() {
                return Ok(None);
            }
            Ok(self.lines.remove(0))
        }
    }

    fn plain_args() -> InstallArgs {
        InstallArgs {
            global: false,
            local: false,
            dry_run: false,
            package_dir: None,
        }
    }

    #[test]
    fn explicit_flags_skip_the_prompt() {
        let mut reader = ScriptedReader::new(vec![Some("2".to_string())]);
        let args = InstallArgs {
            global: true,
            ..plain_args()
        };
        assert_eq!(resolve_mode(&args, &mut reader).unwrap(), InstallMode::Global);

        let args = InstallArgs {
            local: true,
            ..plain_args()
        };
        assert_eq!(resolve_mode(&args, &mut reader).unwrap(), InstallMode::Local);
    }

    #[test]
    fn prompt_answer_two_selects_local() {
        let mut reader = ScriptedReader::new(vec![Some("2".to_string())]);
        assert_eq!(
            resolve_mode(&plain_args(), &mut reader).unwrap(),
            InstallMode::Local
        );
    }

    #[test]
    fn empty_and_unrecognized_answers_default_to_global() {
        for answer in ["", "1", "yes", "3"] {
            let mut reader = ScriptedReader::new(vec![Some(answer.to_string())]);
            assert_eq!(
                resolve_mode(&plain_args(), &mut reader).unwrap(),
                InstallMode::Global,
                "answer {answer:?}"
            );
        }
    }

    #[test]
    fn closed_input_stream_defaults_to_global() {
        let mut reader = ScriptedReader::new(Vec::new());
        assert_eq!(
            resolve_mode(&plain_args(), &mut reader).unwrap(),
            InstallMode::Global
        );
    }

    #[test]
    fn replacements_are_identity_for_global() {
        let table = path_replacements(InstallMode::Global);
        assert_eq!(table.get(GLOBAL_PATH_TOKEN).map(String::as_str), Some(GLOBAL_PATH_TOKEN));

        let table = path_replacements(InstallMode::Local);
        assert_eq!(table.get(GLOBAL_PATH_TOKEN).map(String::as_str), Some(LOCAL_PATH_PREFIX));
    }

    #[test]
    fn reserved_prefix_marks_managed_agents() {
        assert!(is_reserved_agent("ui-designer.md"));
        assert!(!is_reserved_agent("custom-agent.md"));
        assert!(!is_reserved_agent("README.md"));
    }

    #[test]
    fn explicit_package_dir_wins() {
        let dir = tempfile::tempdir().expect("tempdir");
        let resolved = resolve_package_root(Some(dir.path())).unwrap();
        assert_eq!(resolved, dir.path().canonicalize().unwrap());
    }
}
