// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source formatting adapters

mod command;
mod noop;

pub use command::RustfmtAdapter;
pub use noop::NoOpFormatAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeFormatAdapter, FormatCall};

use std::path::Path;
use thiserror::Error;

/// Errors from formatting
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{command} exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },
    #[error("file to format does not exist: {0}")]
    MissingFile(String),
}

/// Adapter that rewrites a generated source file in place
pub trait FormatAdapter: Send + Sync {
    /// Format the file at `path`
    fn format(&self, path: &Path) -> Result<(), FormatError>;

    /// Short description for logs
    fn describe(&self) -> String;
}

impl<F: FormatAdapter + ?Sized> FormatAdapter for Box<F> {
    fn format(&self, path: &Path) -> Result<(), FormatError> {
        (**self).format(path)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
