// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern definition files.
//!
//! One definition per line: the name is the first whitespace-delimited token,
//! the body is the trimmed remainder. Blank lines and lines starting with `#`
//! are skipped.
//!
//! ```text
//! # custom patterns
//! ID %{WORD}-%{INT}
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LoadError;

/// A single `name body` binding read from a definition source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub name: String,
    pub body: String,
}

impl Definition {
    pub fn into_pair(self) -> (String, String) {
        (self.name, self.body)
    }
}

/// Parse definitions from file content. `path` is only used for error messages.
pub fn parse_definitions(content: &str, path: &Path) -> Result<Vec<Definition>, LoadError> {
    let mut definitions = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (name, body) = match trimmed.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (trimmed, ""),
        };
        if body.is_empty() {
            return Err(LoadError::MissingBody {
                path: path.to_path_buf(),
                line: idx + 1,
                name: name.to_string(),
            });
        }

        definitions.push(Definition {
            name: name.to_string(),
            body: body.to_string(),
        });
    }

    Ok(definitions)
}

/// Read definitions from a single file.
pub fn load_file(path: &Path) -> Result<Vec<Definition>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| io_error(path, source))?;
    parse_definitions(&content, path)
}

/// Read definitions from every regular file in `dir`, in file-name order.
///
/// Later files override earlier ones when merged into a registry.
pub fn load_dir(dir: &Path) -> Result<Vec<Definition>, LoadError> {
    let entries = fs::read_dir(dir).map_err(|source| io_error(dir, source))?;

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| io_error(dir, source))?;
        let file_type = entry.file_type().map_err(|source| io_error(&entry.path(), source))?;
        if file_type.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();

    let mut definitions = Vec::new();
    for file in &files {
        tracing::debug!("reading patterns from {}", file.display());
        definitions.extend(load_file(file)?);
    }
    Ok(definitions)
}

/// Read definitions from a file, or from every file in a directory.
pub fn load_source(path: &Path) -> Result<Vec<Definition>, LoadError> {
    if path.is_dir() {
        load_dir(path)
    } else {
        load_file(path)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> LoadError {
    LoadError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
