// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for configuration.
//!
//! - `-C` / `YALP_GROK_CONFIG` select a config file
//! - yalp-grok.toml is discovered from the working directory
//! - CLI definitions override config definitions

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// Config is discovered in the working directory
#[test]
fn discovered_config_supplies_patterns() {
    grok_cmd()
        .current_dir(fixture("config-project"))
        .args(["match", "%{ID:id}", "Beijing-1104"])
        .assert()
        .success()
        .stdout("id=Beijing-1104\n");
}

/// `patterns_dir` entries override inline config patterns
#[test]
fn config_patterns_dir_overrides_inline() {
    grok_cmd()
        .current_dir(fixture("config-project"))
        .args(["match", "%{CITY:city}", "Paris"])
        .assert()
        .code(1);
}

/// `-C` selects a config file explicitly
#[test]
fn explicit_config_flag() {
    grok_cmd()
        .arg("-C")
        .arg(fixture("config-project").join("yalp-grok.toml"))
        .args(["match", "%{CITY:city} %{MOTTO:m}", r#"Shanghai "go""#])
        .assert()
        .success()
        .stdout("city=Shanghai\nm=\"go\"\n");
}

/// `YALP_GROK_CONFIG` selects a config file
#[test]
fn config_env_var() {
    grok_cmd()
        .env("YALP_GROK_CONFIG", fixture("config-project").join("yalp-grok.toml"))
        .args(["match", "%{ID:id}", "a-1"])
        .assert()
        .success()
        .stdout("id=a-1\n");
}

/// CLI definitions are merged after the config file
#[test]
fn define_overrides_config() {
    grok_cmd()
        .current_dir(fixture("config-project"))
        .args(["match", "%{CITY:city}", "Paris", "-D", "CITY=[A-Z][a-z]+"])
        .assert()
        .success()
        .stdout("city=Paris\n");
}

/// A missing explicit config is an error
#[test]
fn missing_config_exits_two() {
    grok_cmd()
        .args(["-C", "does-not-exist.toml", "patterns"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to read"));
}
