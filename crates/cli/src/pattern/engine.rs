// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Registry plus a cache of compiled matchers.

use std::sync::Arc;

use dashmap::DashMap;

use super::matcher::{MatchResult, Matcher};
use super::registry::Registry;
use super::resolver::{ResolvedPattern, Resolver};
use crate::error::GrokError;

/// Most matchers kept at once. A full cache is flushed before the next insert.
pub const CACHE_CAPACITY: usize = 256;

/// Grok engine.
///
/// Lookups and matching take `&self` and may run from many threads at once.
/// Registering a pattern takes `&mut self`, so writes can never interleave
/// with reads, and it drops every cached matcher since any of them may have
/// been built from the replaced definition.
///
/// The cache holds at most [`CACHE_CAPACITY`] matchers, so an engine fed an
/// unbounded stream of distinct patterns stays bounded in memory.
#[derive(Debug)]
pub struct Grok {
    registry: Registry,
    cache: DashMap<String, Arc<Matcher>>,
}

impl Grok {
    /// Engine seeded with the built-in library.
    pub fn new() -> Self {
        Self::with_registry(Registry::with_builtins())
    }

    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry,
            cache: DashMap::new(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Insert or overwrite a pattern.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Option<String>, GrokError> {
        let previous = self.registry.register(name, body)?;
        self.cache.clear();
        Ok(previous)
    }

    pub fn resolve(&self, pattern: &str) -> Result<ResolvedPattern, GrokError> {
        Resolver::new(&self.registry).resolve(pattern)
    }

    /// Compiled matcher for `pattern`, built on first use.
    pub fn compile(&self, pattern: &str) -> Result<Arc<Matcher>, GrokError> {
        if let Some(matcher) = self.cache.get(pattern) {
            tracing::trace!("matcher cache hit for {:?}", pattern);
            return Ok(Arc::clone(matcher.value()));
        }

        let resolved = self.resolve(pattern)?;
        let matcher = Arc::new(Matcher::compile(&resolved)?);
        if self.cache.len() >= CACHE_CAPACITY {
            tracing::debug!("matcher cache full ({} entries), flushing", CACHE_CAPACITY);
            self.cache.clear();
        }
        // Another thread may have compiled the same pattern meanwhile; keep the first.
        let entry = self.cache.entry(pattern.to_string()).or_insert(matcher);
        Ok(Arc::clone(entry.value()))
    }

    /// Match `text` against `pattern`.
    pub fn match_text(&self, text: &str, pattern: &str) -> Result<MatchResult, GrokError> {
        Ok(self.compile(pattern)?.match_text(text))
    }

    /// Number of cached matchers.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

impl Default for Grok {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
