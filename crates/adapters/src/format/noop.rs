// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op format adapter for runs that never write an artifact.

use super::{FormatAdapter, FormatError};
use std::path::Path;

/// Format adapter that leaves files untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpFormatAdapter;

impl NoOpFormatAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl FormatAdapter for NoOpFormatAdapter {
    fn format(&self, _path: &Path) -> Result<(), FormatError> {
        Ok(())
    }

    fn describe(&self) -> String {
        "no-op".to_string()
    }
}
