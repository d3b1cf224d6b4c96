// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Placeholder expansion.
//!
//! Turns a grok pattern such as `%{WORD:name} %{INT:age}` into a plain regular
//! expression. Each reference is expanded bottom-up: the referenced body is
//! fully resolved into its own buffer before it is wrapped and spliced into
//! the outer expression, so nothing inside a nested body can leak across the
//! group boundary.
//!
//! - `%{NAME:alias}` becomes `(?P<alias>...)`
//! - `%{NAME}` becomes `(?:...)`
//!
//! Aliases become capture group names, so one starting with a digit is
//! rejected here instead of surfacing as a regex compile failure.

use std::sync::LazyLock;

use regex::Regex;

use super::registry::Registry;
use crate::error::GrokError;

/// Maximum placeholder nesting depth.
pub const MAX_DEPTH: usize = 64;

/// `%{NAME}` or `%{NAME:alias}`.
#[allow(clippy::expect_used)]
static REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%\{([A-Za-z0-9_]+)(?::([A-Za-z0-9_]+))?\}").expect("valid regex pattern")
});

/// A piece of unresolved pattern text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Regular-expression text copied through unchanged.
    Literal(&'a str),
    /// A placeholder to expand.
    Reference {
        name: &'a str,
        alias: Option<&'a str>,
    },
}

/// Split pattern text into literal runs and placeholder references.
pub fn segments(pattern: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut last = 0;

    for caps in REFERENCE.captures_iter(pattern) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            out.push(Segment::Literal(&pattern[last..whole.start()]));
        }
        out.push(Segment::Reference {
            name: name.as_str(),
            alias: caps.get(2).map(|m| m.as_str()),
        });
        last = whole.end();
    }
    if last < pattern.len() {
        out.push(Segment::Literal(&pattern[last..]));
    }
    out
}

/// A pattern with every placeholder expanded.
///
/// Only produced by [`Resolver::resolve`], so its text is never expanded twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPattern {
    expression: String,
    aliases: Vec<String>,
}

impl ResolvedPattern {
    /// The plain regular expression.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Declared aliases in first-occurrence order.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }
}

/// Expands placeholders against a registry.
pub struct Resolver<'r> {
    registry: &'r Registry,
}

/// Bookkeeping for one `resolve` call.
#[derive(Default)]
struct Expansion<'a> {
    /// Names whose bodies are currently being expanded, outermost first.
    in_progress: Vec<&'a str>,
    aliases: Vec<String>,
}

impl Expansion<'_> {
    fn declare(&mut self, alias: &str) -> Result<(), GrokError> {
        if alias.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(GrokError::InvalidAlias(alias.to_string()));
        }
        if self.aliases.iter().any(|a| a == alias) {
            return Err(GrokError::DuplicateAlias(alias.to_string()));
        }
        self.aliases.push(alias.to_string());
        Ok(())
    }
}

impl<'r> Resolver<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Expand every placeholder in `pattern`.
    ///
    /// Text without placeholders passes through unchanged, so resolving an
    /// already resolved expression is a no-op.
    pub fn resolve(&self, pattern: &str) -> Result<ResolvedPattern, GrokError> {
        let mut expansion = Expansion::default();
        let mut expression = String::with_capacity(pattern.len() * 4);
        self.expand(pattern, &mut expansion, &mut expression)?;

        tracing::debug!("resolved {:?} with aliases {:?}", pattern, expansion.aliases);
        Ok(ResolvedPattern {
            expression,
            aliases: expansion.aliases,
        })
    }

    fn expand<'a>(
        &'a self,
        text: &'a str,
        expansion: &mut Expansion<'a>,
        out: &mut String,
    ) -> Result<(), GrokError> {
        for segment in segments(text) {
            match segment {
                Segment::Literal(literal) => out.push_str(literal),
                Segment::Reference { name, alias } => {
                    if expansion.in_progress.contains(&name) {
                        return Err(GrokError::CyclicPattern(name.to_string()));
                    }
                    if expansion.in_progress.len() >= MAX_DEPTH {
                        return Err(GrokError::RecursionTooDeep { max: MAX_DEPTH });
                    }
                    let body = self.registry.lookup(name)?;

                    // Declared before the body so aliases keep source order.
                    if let Some(alias) = alias {
                        expansion.declare(alias)?;
                    }

                    expansion.in_progress.push(name);
                    let mut fragment = String::with_capacity(body.len());
                    self.expand(body, expansion, &mut fragment)?;
                    expansion.in_progress.pop();

                    match alias {
                        Some(alias) => {
                            out.push_str("(?P<");
                            out.push_str(alias);
                            out.push('>');
                        }
                        None => out.push_str("(?:"),
                    }
                    out.push_str(&fragment);
                    out.push(')');
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
