//! CLI argument parsing for the install/validate workflow.
//!
//! The CLI is intentionally thin: command routing lives here while policy
//! stays in the install and validate modules, so both can be driven from
//! tests without a terminal.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint for the UI Design System tooling.
#[derive(Parser, Debug)]
#[command(
    name = "ui-design-cc",
    version,
    about = "UI Design System for Claude Code - installer and publish checks",
    after_help = "Commands:\n  install    Copy commands, agents, adapters, and templates into ~/.claude or ./.claude\n  validate   Check the package against the publish manifest\n\nExamples:\n  ui-design-cc install\n  ui-design-cc install --local\n  ui-design-cc install --dry-run\n  ui-design-cc validate --package-dir .",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Install(InstallArgs),
    Validate(ValidateArgs),
}

/// Install command inputs.
#[derive(Parser, Debug)]
#[command(about = "Install the packaged assets into an install root")]
pub struct InstallArgs {
    /// Install to ~/.claude (available in every project; the default)
    #[arg(long, conflicts_with = "local")]
    pub global: bool,

    /// Install to ./.claude (current project only)
    #[arg(long)]
    pub local: bool,

    /// Preview the installation without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Package root containing commands/, agents/, and ui-design/
    #[arg(long, value_name = "DIR")]
    pub package_dir: Option<PathBuf>,
}

/// Validate command inputs.
#[derive(Parser, Debug)]
#[command(about = "Check that the package contains every file the installer expects")]
pub struct ValidateArgs {
    /// Package root to validate (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub package_dir: Option<PathBuf>,
}
