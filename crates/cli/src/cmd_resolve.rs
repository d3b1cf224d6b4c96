// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `yalp-grok resolve` command implementation.

use std::io::{self, Write};

use anyhow::Context;
use serde_json::json;

use yalp_grok::cli::{Cli, OutputFormat, ResolveArgs};
use yalp_grok::error::ExitCode;
use yalp_grok::pattern::{Matcher, Resolver};

/// Run the `yalp-grok resolve` command.
///
/// The expression is compiled before printing so a malformed body is
/// reported instead of printed.
pub fn run(cli: &Cli, args: &ResolveArgs) -> anyhow::Result<ExitCode> {
    let registry = crate::load_registry(cli.config.as_deref(), &args.patterns)?;
    let resolved = Resolver::new(&registry)
        .resolve(&args.pattern)
        .with_context(|| format!("invalid pattern {:?}", args.pattern))?;
    Matcher::compile(&resolved).with_context(|| format!("invalid pattern {:?}", args.pattern))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.output {
        OutputFormat::Text => {
            writeln!(out, "{}", resolved.expression())?;
            for alias in resolved.aliases() {
                writeln!(out, "alias: {alias}")?;
            }
        }
        OutputFormat::Json => {
            let value = json!({
                "expression": resolved.expression(),
                "aliases": resolved.aliases(),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
    }
    out.flush()?;

    Ok(ExitCode::Success)
}
