// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Definition source discovery.
//!
//! Walks a source tree and returns the content of every file with a given
//! extension, along with the module path its location implies. Hidden
//! files and directories are skipped. A missing root is an empty project,
//! not an error.

use actc_core::{ModuleRef, NameError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Errors that can occur while scanning
#[derive(Debug, Error)]
pub enum ScanError {
    /// IO error walking or reading a file
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A file whose location cannot be named as a Rust module
    #[error("{path} does not map to a Rust module: {reason}")]
    InvalidModule {
        path: String,
        #[source]
        reason: NameError,
    },
}

/// One discovered source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionSource {
    /// Absolute (or root-joined) path
    pub path: PathBuf,
    /// Path relative to the scanned root
    pub relative: PathBuf,
    pub content: String,
}

impl DefinitionSource {
    /// Module path implied by the file location.
    ///
    /// `billing/nightly.rs` is `billing::nightly`; `billing/mod.rs` is
    /// `billing`. A `mod.rs` directly under the root is the root module.
    pub fn module(&self) -> ModuleRef {
        let mut segments: Vec<String> = self
            .relative
            .parent()
            .into_iter()
            .flat_map(|p| p.components())
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        if let Some(stem) = self.relative.file_stem().and_then(|s| s.to_str()) {
            if stem != "mod" {
                segments.push(stem.to_string());
            }
        }
        ModuleRef::new(segments)
    }
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

/// Collect every file under `root` with the given extension, sorted by path.
pub fn scan_sources(root: &Path, extension: &str) -> Result<Vec<DefinitionSource>, ScanError> {
    if !root.is_dir() {
        tracing::debug!(root = %root.display(), "source root missing, nothing to scan");
        return Ok(Vec::new());
    }

    let mut sources = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    for entry in walker {
        let entry = entry.map_err(|e| ScanError::Io {
            path: e
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| root.display().to_string()),
            source: e.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }

        let path = entry.into_path();
        let content = std::fs::read_to_string(&path).map_err(|e| ScanError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        sources.push(DefinitionSource {
            path,
            relative,
            content,
        });
    }

    tracing::debug!(root = %root.display(), count = sources.len(), "scanned sources");
    Ok(sources)
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
