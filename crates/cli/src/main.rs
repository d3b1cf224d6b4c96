// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use yalp_grok::cli::{Cli, Command, PatternArgs};
use yalp_grok::config::{self, defaults};
use yalp_grok::discovery;
use yalp_grok::error::ExitCode;
use yalp_grok::pattern::Registry;

mod cmd_match;
mod cmd_patterns;
mod cmd_resolve;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("yalp-grok: {e:#}");
            ExitCode::Error.into()
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    match &cli.command {
        Command::Match(args) => cmd_match::run(cli, args),
        Command::Resolve(args) => cmd_resolve::run(cli, args),
        Command::Patterns(args) => cmd_patterns::run(cli, args),
    }
}

/// Install the stderr subscriber. `RUST_LOG` overrides `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { defaults::log::VERBOSE } else { defaults::log::QUIET };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Build the registry for a command.
///
/// Built-ins, then the config file (explicit or discovered), then `--define`
/// bindings, then `--patterns` sources.
pub(crate) fn load_registry(
    config_path: Option<&Path>,
    args: &PatternArgs,
) -> anyhow::Result<Registry> {
    let cwd = std::env::current_dir().context("failed to read the working directory")?;
    let config_path = discovery::config_for(config_path, &cwd);

    let mut registry = match &config_path {
        Some(path) => {
            let config = config::load(path)?;
            config
                .build_registry()
                .with_context(|| format!("failed to load patterns from {}", path.display()))?
        }
        None => Registry::with_builtins(),
    };

    registry.extend(args.defines.iter().cloned())?;
    for source in &args.sources {
        registry.load_source(source)?;
    }
    Ok(registry)
}
