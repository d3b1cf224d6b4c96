// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled matcher and match results.

use std::collections::BTreeMap;

use regex::Regex;
use serde::Serialize;

use super::resolver::ResolvedPattern;
use crate::error::GrokError;

/// Captured text keyed by alias.
pub type Fields = BTreeMap<String, String>;

/// Outcome of running a matcher against one input.
///
/// `Fields` with an empty map means the text matched but the pattern declared
/// no aliases; it is never collapsed into `NoMatch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MatchResult {
    /// The expression found no match anywhere in the text.
    NoMatch,
    /// The expression matched; one entry per declared alias.
    Fields(Fields),
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Fields(_))
    }

    pub fn fields(&self) -> Option<&Fields> {
        match self {
            Self::Fields(fields) => Some(fields),
            Self::NoMatch => None,
        }
    }

    pub fn into_fields(self) -> Option<Fields> {
        match self {
            Self::Fields(fields) => Some(fields),
            Self::NoMatch => None,
        }
    }

    /// Captured text for `alias`, if the text matched.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.fields()?.get(alias).map(String::as_str)
    }
}

impl From<MatchResult> for Option<Fields> {
    fn from(result: MatchResult) -> Self {
        result.into_fields()
    }
}

/// A resolved pattern compiled into a regular expression.
///
/// Immutable once built; share it across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
    aliases: Vec<String>,
}

impl Matcher {
    pub fn compile(resolved: &ResolvedPattern) -> Result<Self, GrokError> {
        let regex = Regex::new(resolved.expression()).map_err(GrokError::InvalidExpression)?;
        Ok(Self {
            regex,
            aliases: resolved.aliases().to_vec(),
        })
    }

    pub fn expression(&self) -> &str {
        self.regex.as_str()
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Search `text` for the first match.
    ///
    /// The search is unanchored: text before and after the matched span is
    /// ignored. Captures are raw substrings. An alias whose group did not take
    /// part in the match (it sat in an optional or untaken branch) maps to an
    /// empty string.
    pub fn match_text(&self, text: &str) -> MatchResult {
        if self.aliases.is_empty() {
            return if self.regex.is_match(text) {
                MatchResult::Fields(Fields::new())
            } else {
                MatchResult::NoMatch
            };
        }

        let Some(caps) = self.regex.captures(text) else {
            return MatchResult::NoMatch;
        };

        let fields = self
            .aliases
            .iter()
            .map(|alias| {
                let value = caps.name(alias).map_or("", |m| m.as_str());
                (alias.clone(), value.to_string())
            })
            .collect();
        MatchResult::Fields(fields)
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
