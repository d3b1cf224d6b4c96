// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a registry, resolving a pattern, or compiling it.
///
/// Every variant is fatal to the single resolve/match call that produced it.
/// A registry is never left half-updated by one of these.
#[derive(Debug, Error)]
pub enum GrokError {
    /// An alias is not usable as a capture group name.
    #[error("alias `{0}` must not start with a digit")]
    InvalidAlias(String),

    /// A placeholder names a pattern that is not registered.
    #[error("unknown pattern %{{{0}}}")]
    UnknownPattern(String),

    /// Two placeholders in one pattern declare the same alias.
    #[error("alias `{0}` is declared more than once")]
    DuplicateAlias(String),

    /// A pattern reached itself while it was still being expanded.
    #[error("pattern %{{{0}}} expands to itself")]
    CyclicPattern(String),

    /// Placeholder nesting exceeded the expansion depth limit.
    #[error("pattern nesting exceeds {max} levels")]
    RecursionTooDeep { max: usize },

    /// A definition was registered with an empty body.
    #[error("pattern `{0}` has an empty body")]
    EmptyBody(String),

    /// The fully resolved expression is not a valid regular expression.
    #[error("resolved expression does not compile")]
    InvalidExpression(#[source] regex::Error),

    /// A custom pattern source could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Errors raised while reading pattern definition files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: pattern `{name}` has no body", path.display())]
    MissingBody {
        path: PathBuf,
        line: usize,
        name: String,
    },
}

/// Errors raised while reading `yalp-grok.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{}: unsupported config version {version} (expected {expected})", path.display())]
    UnsupportedVersion {
        path: PathBuf,
        version: i64,
        expected: i64,
    },
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Every input matched.
    Success = 0,
    /// At least one input did not match.
    NoMatch = 1,
    /// Configuration, pattern, or I/O error.
    Error = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
