// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::format::{FormatAdapter, FormatError};
use std::path::Path;

/// Wrapper that adds tracing to any FormatAdapter
#[derive(Clone)]
pub struct TracedFormatAdapter<F> {
    inner: F,
}

impl<F> TracedFormatAdapter<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: FormatAdapter> FormatAdapter for TracedFormatAdapter<F> {
    fn format(&self, path: &Path) -> Result<(), FormatError> {
        let span = tracing::info_span!("format", path = %path.display());
        let _guard = span.enter();

        let command = self.inner.describe();
        tracing::info!(command, "formatting");

        // Precondition: the artifact must have been written
        if !path.is_file() {
            tracing::error!("file to format does not exist");
            return Err(FormatError::MissingFile(path.display().to_string()));
        }

        let start = std::time::Instant::now();
        let result = self.inner.format(path);
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "formatted"),
            Err(e) => tracing::warn!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "format failed"
            ),
        }

        result
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
