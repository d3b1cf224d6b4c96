// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use assert_cmd::Command;

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;

/// Returns an `assert_cmd` Command configured to run the yalp-grok binary.
///
/// Runs from an isolated temp directory with a `.git` marker so config
/// discovery never escapes into the developer's tree.
pub fn grok_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("yalp-grok"));
    cmd.current_dir(isolated_dir());
    cmd.env_remove("YALP_GROK_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> std::path::PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    std::path::PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn isolated_dir() -> std::path::PathBuf {
    static DIR: std::sync::OnceLock<tempfile::TempDir> = std::sync::OnceLock::new();
    let dir = DIR.get_or_init(|| {
        let dir = tempfile::TempDir::new().expect("temp dir should be created");
        std::fs::create_dir(dir.path().join(".git")).expect(".git marker should be created");
        dir
    });
    dir.path().to_path_buf()
}
