// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! External formatter process adapter

use super::{FormatAdapter, FormatError};
use actc_core::FormatConfig;
use std::path::Path;
use std::process::Command;

/// Runs an external formatter (`rustfmt` by default) on the file
#[derive(Clone, Debug)]
pub struct RustfmtAdapter {
    command: String,
    args: Vec<String>,
}

impl RustfmtAdapter {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    pub fn from_config(config: &FormatConfig) -> Self {
        Self::new(config.command.clone(), config.args.clone())
    }
}

impl Default for RustfmtAdapter {
    fn default() -> Self {
        Self::from_config(&FormatConfig::default())
    }
}

impl FormatAdapter for RustfmtAdapter {
    fn format(&self, path: &Path) -> Result<(), FormatError> {
        let output = Command::new(&self.command)
            .args(&self.args)
            .arg(path)
            .output()
            .map_err(|source| FormatError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(FormatError::Failed {
                command: self.command.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }

    fn describe(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
