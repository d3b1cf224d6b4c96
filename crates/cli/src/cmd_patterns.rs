// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `yalp-grok patterns` command implementation.
//!
//! Prints `NAME BODY` per line, sorted by name. The output is itself a valid
//! pattern definition file.

use std::io::{self, Write};

use yalp_grok::cli::{Cli, PatternsArgs};
use yalp_grok::error::ExitCode;

/// Run the `yalp-grok patterns` command.
pub fn run(cli: &Cli, args: &PatternsArgs) -> anyhow::Result<ExitCode> {
    let registry = crate::load_registry(cli.config.as_deref(), &args.patterns)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (name, body) in registry.iter() {
        writeln!(out, "{name} {body}")?;
    }
    out.flush()?;

    Ok(ExitCode::Success)
}
