// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Extract named fields from semi-structured text with grok patterns.
//!
//! ```
//! use yalp_grok::grok_match;
//!
//! let result = grok_match(r#"gary 25 "never quit""#, "%{WORD:name} %{INT:age} %{QS:motto}")?;
//! assert_eq!(result.get("age"), Some("25"));
//! # Ok::<(), yalp_grok::GrokError>(())
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod loader;
pub mod pattern;

#[cfg(test)]
pub mod test_utils;

use std::collections::HashMap;
use std::path::Path;

pub use error::{GrokError, LoadError};
pub use pattern::{Fields, Grok, MatchResult, Registry};

/// Match `text` against `pattern` using only the built-in patterns.
pub fn grok_match(text: &str, pattern: &str) -> Result<MatchResult, GrokError> {
    grok_match_with(text, pattern, &HashMap::new(), None)
}

/// Match `text` against `pattern` with custom patterns.
///
/// `custom_patterns` are merged over the built-ins, then definitions from
/// `custom_patterns_source` (a file or a directory of files) are merged over
/// those. Later bindings win on name collisions.
pub fn grok_match_with(
    text: &str,
    pattern: &str,
    custom_patterns: &HashMap<String, String>,
    custom_patterns_source: Option<&Path>,
) -> Result<MatchResult, GrokError> {
    let mut registry = Registry::with_builtins();
    registry.extend(custom_patterns)?;
    if let Some(source) = custom_patterns_source {
        registry.load_source(source)?;
    }
    Grok::with_registry(registry).match_text(text, pattern)
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
