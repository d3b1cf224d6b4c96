// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// Config file name looked up during discovery.
pub const CONFIG_FILE: &str = "yalp-grok.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "YALP_GROK_CONFIG";

/// The only supported config `version`.
pub const VERSION: i64 = 1;

/// Default `RUST_LOG` filter for the binary.
pub mod log {
    /// Filter used when `RUST_LOG` is unset.
    pub const QUIET: &str = "warn";

    /// Filter used with `--verbose`.
    pub const VERBOSE: &str = "yalp_grok=debug";
}
