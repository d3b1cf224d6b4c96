// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the `yalp-grok match` command.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

const MOTTO_PATTERN: &str = "%{WORD:name} %{INT:age} %{QUOTEDSTRING:motto}";

// =============================================================================
// Text output
// =============================================================================

/// Matched fields print as sorted `alias=value` lines
#[test]
fn match_prints_fields() {
    grok_cmd()
        .args(["match", MOTTO_PATTERN, r#"gary 25 "never quit""#])
        .assert()
        .success()
        .stdout("age=25\nmotto=\"never quit\"\nname=gary\n");
}

/// A line that does not match prints a marker and exits 1
#[test]
fn no_match_exits_one() {
    grok_cmd()
        .args(["match", MOTTO_PATTERN, r#"gary male "never quit""#])
        .assert()
        .code(1)
        .stdout("<no match>\n");
}

/// A pattern without aliases matches with no fields, not a no-match
#[test]
fn match_without_aliases_succeeds_with_empty_record() {
    grok_cmd().args(["match", "%{WORD}", "github"]).assert().success().stdout("");
}

/// Lines are read from stdin when no TEXT is given, and output keeps input order
#[test]
fn match_reads_stdin_in_order() {
    grok_cmd()
        .args(["match", "%{INT:n}"])
        .write_stdin("1\nnone\n3\n")
        .assert()
        .code(1)
        .stdout("n=1\n\n<no match>\n\nn=3\n");
}

// =============================================================================
// JSON output
// =============================================================================

/// `--output json` prints one JSON value per input line
#[test]
fn match_json_output() {
    let output = grok_cmd()
        .args(["match", "%{WORD:name} %{INT:age}", "--output", "json"])
        .write_stdin("gary 25\nnobody\n")
        .output()
        .expect("command should run");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<serde_json::Value> =
        stdout.lines().map(|l| serde_json::from_str(l).expect("valid JSON")).collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["name"], "gary");
    assert_eq!(lines[0]["age"], "25");
    assert!(lines[1].is_null());
}

// =============================================================================
// Custom patterns
// =============================================================================

/// `--define` adds inline patterns
#[test]
fn match_with_define() {
    grok_cmd()
        .args([
            "match",
            "%{ID:user_id},%{WORD:name}",
            "Beijing-1104,gary",
            "--define",
            "ID=%{WORD}-%{INT}",
        ])
        .assert()
        .success()
        .stdout("name=gary\nuser_id=Beijing-1104\n");
}

/// `--patterns` loads a directory of definition files
#[test]
fn match_with_patterns_dir() {
    grok_cmd()
        .args(["match", "%{ID:user_id},%{WORD:name} %{INT:age} %{QUOTEDSTRING:motto}"])
        .arg(r#"Beijing-1104,gary 25 "never quit""#)
        .arg("--patterns")
        .arg(fixture("test_patterns"))
        .assert()
        .success()
        .stdout(predicates::str::contains("user_id=Beijing-1104"));
}

// =============================================================================
// Errors
// =============================================================================

/// Unknown patterns are reported and exit 2
#[test]
fn unknown_pattern_exits_two() {
    grok_cmd()
        .args(["match", "%{NOT_A_PATTERN:x}", "text"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown pattern %{NOT_A_PATTERN}"));
}

/// Duplicate aliases are reported before any matching
#[test]
fn duplicate_alias_exits_two() {
    grok_cmd()
        .args(["match", "%{WORD:x} %{WORD:x}", "a b"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("alias `x` is declared more than once"));
}

/// Cyclic definitions are reported
#[test]
fn cyclic_pattern_exits_two() {
    grok_cmd()
        .args(["match", "%{LOOP}", "x", "-D", "LOOP=a%{LOOP}"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("expands to itself"));
}

/// A malformed definition file is reported with its location
#[test]
fn malformed_patterns_file_exits_two() {
    grok_cmd()
        .args(["match", "%{GOOD:n}", "1", "--patterns"])
        .arg(fixture("bad-patterns"))
        .assert()
        .code(2)
        .stderr(predicates::str::contains("pattern `BROKEN` has no body"));
}
