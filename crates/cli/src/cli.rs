// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::defaults::CONFIG_ENV;

/// Extract named fields from log lines with grok patterns
#[derive(Parser)]
#[command(name = "yalp-grok")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Match text against a pattern and print the extracted fields
    Match(MatchArgs),
    /// Print the regular expression a pattern resolves to
    Resolve(ResolveArgs),
    /// List every registered pattern
    Patterns(PatternsArgs),
}

/// Custom pattern flags shared by every command.
#[derive(clap::Args, Clone, Default)]
pub struct PatternArgs {
    /// Pattern definition file or directory (repeatable)
    #[arg(long = "patterns", value_name = "PATH")]
    pub sources: Vec<PathBuf>,

    /// Inline pattern definition (repeatable)
    #[arg(short = 'D', long = "define", value_name = "NAME=BODY", value_parser = parse_define)]
    pub defines: Vec<(String, String)>,
}

#[derive(clap::Args)]
pub struct MatchArgs {
    /// Grok pattern, e.g. '%{WORD:name} %{INT:age}'
    pub pattern: String,

    /// Text to match; reads lines from stdin when omitted
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    #[command(flatten)]
    pub patterns: PatternArgs,
}

#[derive(clap::Args)]
pub struct ResolveArgs {
    /// Grok pattern to resolve
    pub pattern: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    #[command(flatten)]
    pub patterns: PatternArgs,
}

#[derive(clap::Args)]
pub struct PatternsArgs {
    #[command(flatten)]
    pub patterns: PatternArgs,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parse a `NAME=BODY` definition.
pub fn parse_define(value: &str) -> Result<(String, String), String> {
    let Some((name, body)) = value.split_once('=') else {
        return Err(format!("expected NAME=BODY, got `{value}`"));
    };
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!("invalid pattern name `{name}`"));
    }
    if body.is_empty() {
        return Err(format!("pattern `{name}` has an empty body"));
    }
    Ok((name.to_string(), body.to_string()))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
