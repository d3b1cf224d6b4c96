// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the `yalp-grok resolve` command.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// Prints the expanded expression followed by declared aliases
#[test]
fn resolve_prints_expression_and_aliases() {
    grok_cmd()
        .args(["resolve", "%{ID:id} %{VERB}", "-D", "ID=[a-z]+", "-D", "VERB=GET|POST"])
        .assert()
        .success()
        .stdout("(?P<id>[a-z]+) (?:GET|POST)\nalias: id\n");
}

/// JSON output carries expression and aliases
#[test]
fn resolve_json_output() {
    let output = grok_cmd()
        .args(["resolve", "%{INT:n}", "--output", "json"])
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["expression"], "(?P<n>[+-]?[0-9]+)");
    assert_eq!(json["aliases"], serde_json::json!(["n"]));
}

/// A body that is not a valid regex fails at compile time
#[test]
fn resolve_reports_invalid_expression() {
    grok_cmd()
        .args(["resolve", "%{BAD}", "-D", "BAD=(unclosed"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("does not compile"));
}
