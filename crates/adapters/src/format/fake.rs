// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake format adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{FormatAdapter, FormatError};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Recorded format call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatCall {
    pub path: PathBuf,
    /// File content at the time of the call
    pub content: Option<String>,
}

/// Fake format adapter for testing
#[derive(Clone, Default)]
pub struct FakeFormatAdapter {
    calls: Arc<Mutex<Vec<FormatCall>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl FakeFormatAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following call fail with `reason`
    pub fn fail_with(&self, reason: impl Into<String>) {
        *self.failure.lock().unwrap_or_else(|e| e.into_inner()) = Some(reason.into());
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<FormatCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl FormatAdapter for FakeFormatAdapter {
    fn format(&self, path: &Path) -> Result<(), FormatError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(FormatCall {
                path: path.to_path_buf(),
                content: std::fs::read_to_string(path).ok(),
            });

        match self.failure.lock().unwrap_or_else(|e| e.into_inner()).clone() {
            Some(stderr) => Err(FormatError::Failed {
                command: "fake".to_string(),
                status: "exit status: 1".to_string(),
                stderr,
            }),
            None => Ok(()),
        }
    }

    fn describe(&self) -> String {
        "fake".to_string()
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
