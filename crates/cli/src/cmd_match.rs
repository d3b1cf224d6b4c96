// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `yalp-grok match` command implementation.
//!
//! Compiles the pattern once and matches every input line against it. Lines
//! are matched in parallel; output keeps input order.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use rayon::prelude::*;

use yalp_grok::cli::{Cli, MatchArgs, OutputFormat};
use yalp_grok::error::ExitCode;
use yalp_grok::pattern::{Grok, MatchResult};

/// Placeholder printed for a line that did not match.
const NO_MATCH: &str = "<no match>";

/// Run the `yalp-grok match` command.
pub fn run(cli: &Cli, args: &MatchArgs) -> anyhow::Result<ExitCode> {
    let registry = crate::load_registry(cli.config.as_deref(), &args.patterns)?;
    let grok = Grok::with_registry(registry);
    let matcher = grok
        .compile(&args.pattern)
        .with_context(|| format!("invalid pattern {:?}", args.pattern))?;

    let lines = if args.texts.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("failed to read stdin")?
    } else {
        args.texts.clone()
    };

    let results: Vec<MatchResult> = lines.par_iter().map(|line| matcher.match_text(line)).collect();
    let misses = results.iter().filter(|r| !r.is_match()).count();
    tracing::debug!("{} line(s), {} without a match", results.len(), misses);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.output {
        OutputFormat::Text => write_text(&mut out, &results)?,
        OutputFormat::Json => write_json(&mut out, &results)?,
    }
    out.flush()?;

    Ok(if misses == 0 { ExitCode::Success } else { ExitCode::NoMatch })
}

/// `alias=value` lines per record, records separated by a blank line.
fn write_text(out: &mut impl Write, results: &[MatchResult]) -> anyhow::Result<()> {
    for (idx, result) in results.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        match result {
            MatchResult::NoMatch => writeln!(out, "{NO_MATCH}")?,
            MatchResult::Fields(fields) => {
                for (alias, value) in fields {
                    writeln!(out, "{alias}={value}")?;
                }
            }
        }
    }
    Ok(())
}

/// One JSON value per record: an object of fields, or `null` for no match.
fn write_json(out: &mut impl Write, results: &[MatchResult]) -> anyhow::Result<()> {
    for result in results {
        serde_json::to_writer(&mut *out, result)?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "cmd_match_tests.rs"]
mod tests;
