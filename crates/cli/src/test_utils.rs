// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixtures for unit tests: temp projects and pattern definition files.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::{NamedTempFile, TempDir};

use crate::config::defaults::CONFIG_FILE;

/// Temp project whose config declares nothing but the version.
pub fn temp_project() -> TempDir {
    temp_project_with_config("version = 1\n")
}

/// Temp project with `config` written to its config file.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir.path().join(CONFIG_FILE), config);
    dir
}

/// Write `(relative path, content)` pairs under `root`.
///
/// ```ignore
/// create_tree(tmp.path(), &[
///     ("patterns/ids", "ID %{WORD}-%{INT}"),
///     ("patterns/web", "VERB GET|POST"),
/// ]);
/// ```
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        write_file(&root.join(relative), content);
    }
}

/// Standalone definition file, one entry of `lines` per line.
pub fn temp_file_with_lines(lines: &[&str]) -> NamedTempFile {
    let mut body = lines.join("\n");
    body.push('\n');

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
