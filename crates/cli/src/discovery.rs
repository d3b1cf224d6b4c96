// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating `yalp-grok.toml`.
//!
//! An explicit path (`-C` or `YALP_GROK_CONFIG`) is used as given. Otherwise
//! the search starts in the working directory and climbs through its
//! ancestors, giving up once it has checked the repository root.

use std::path::{Path, PathBuf};

use crate::config::defaults::CONFIG_FILE;

/// Config file to use for a run, if any.
///
/// `explicit` wins and is not checked for existence here; reading it reports
/// a missing file.
pub fn config_for(explicit: Option<&Path>, start_dir: &Path) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config(start_dir),
    }
}

/// Nearest `yalp-grok.toml` at or above `start_dir`, bounded by the repo root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!("using config {}", candidate.display());
            return Some(candidate);
        }
        if is_repo_root(dir) {
            break;
        }
    }
    None
}

/// `.git` may be a directory or a worktree link file.
fn is_repo_root(dir: &Path) -> bool {
    dir.join(".git").exists()
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
