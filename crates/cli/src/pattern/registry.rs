// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named pattern registry.
//!
//! Holds `name -> body` bindings. Built-ins are seeded first, inline custom
//! patterns next, definition files last; each later registration shadows an
//! earlier one with the same name.

use std::collections::BTreeMap;
use std::path::Path;

use super::builtins::BUILTIN_PATTERNS;
use crate::error::GrokError;
use crate::loader::{self, Definition};

/// Set of known pattern bodies keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    patterns: BTreeMap<String, String>,
}

impl Registry {
    /// Registry with no patterns at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry seeded with the built-in library.
    pub fn with_builtins() -> Self {
        let patterns = BUILTIN_PATTERNS
            .iter()
            .map(|(name, body)| ((*name).to_string(), (*body).to_string()))
            .collect();
        Self { patterns }
    }

    /// Insert or overwrite a binding, returning the body it replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Option<String>, GrokError> {
        let name = name.into();
        let body = body.into();
        if body.is_empty() {
            return Err(GrokError::EmptyBody(name));
        }
        let previous = self.patterns.insert(name.clone(), body);
        if previous.is_some() {
            tracing::debug!("pattern {} overrides an earlier definition", name);
        }
        Ok(previous)
    }

    /// Register every binding in order.
    ///
    /// Bodies are validated up front so a rejected batch leaves the registry
    /// untouched.
    pub fn extend<I, K, V>(&mut self, patterns: I) -> Result<(), GrokError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let pending: Vec<(String, String)> =
            patterns.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        if let Some((name, _)) = pending.iter().find(|(_, body)| body.is_empty()) {
            return Err(GrokError::EmptyBody(name.clone()));
        }
        for (name, body) in pending {
            self.register(name, body)?;
        }
        Ok(())
    }

    /// Load a definition file or directory and register its bindings.
    ///
    /// Returns the number of definitions read.
    pub fn load_source(&mut self, path: &Path) -> Result<usize, GrokError> {
        let definitions = loader::load_source(path)?;
        let count = definitions.len();
        self.extend(definitions.into_iter().map(Definition::into_pair))?;
        tracing::debug!("loaded {} pattern(s) from {}", count, path.display());
        Ok(count)
    }

    /// Body registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<&str, GrokError> {
        self.get(name).ok_or_else(|| GrokError::UnknownPattern(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.patterns.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.patterns.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Bindings sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.patterns.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
