// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the `yalp-grok patterns` command.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// Lists built-ins as `NAME BODY` lines
#[test]
fn patterns_lists_builtins() {
    grok_cmd()
        .arg("patterns")
        .assert()
        .success()
        .stdout(predicates::str::contains("INT [+-]?[0-9]+\n"))
        .stdout(predicates::str::contains("QS %{QUOTEDSTRING}\n"));
}

/// Output is sorted by name
#[test]
fn patterns_output_is_sorted() {
    let output = grok_cmd().arg("patterns").output().expect("command should run");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let names: Vec<&str> = stdout.lines().filter_map(|l| l.split(' ').next()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

/// Custom definitions show their overriding body
#[test]
fn patterns_shows_overrides() {
    grok_cmd()
        .args(["patterns", "-D", "WORD=[a-z]+"])
        .assert()
        .success()
        .stdout(predicates::str::contains("WORD [a-z]+\n"));
}
