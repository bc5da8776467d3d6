use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod descriptor;
mod install;
mod paths;
mod prompt;
mod sync;
mod validate;

use cli::{Command, RootArgs};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = RootArgs::parse();
    match args.command {
        Command::Install(args) => {
            let mut reader = prompt::StdinLineReader;
            if let Err(err) = install::run_install(&args, &mut reader) {
                eprintln!("Installation failed: {err:#}");
                std::process::exit(1);
            }
            Ok(())
        }
        Command::Validate(args) => {
            let passed = validate::run_validate(&args)?;
            if !passed {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
