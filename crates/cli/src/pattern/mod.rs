// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Grok pattern engine.
//!
//! - [`Registry`]: named pattern bodies, built-in and custom
//! - [`Resolver`]: expands `%{NAME}` / `%{NAME:alias}` into a plain regex
//! - [`Matcher`]: runs the compiled regex and collects aliased captures
//! - [`Grok`]: registry plus a shared cache of compiled matchers

pub mod builtins;
pub mod engine;
pub mod matcher;
pub mod registry;
pub mod resolver;

pub use builtins::BUILTIN_PATTERNS;
pub use engine::{CACHE_CAPACITY, Grok};
pub use matcher::{Fields, MatchResult, Matcher};
pub use registry::Registry;
pub use resolver::{MAX_DEPTH, ResolvedPattern, Resolver, Segment};
