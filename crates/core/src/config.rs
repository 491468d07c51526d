// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration (`actc.toml`).
//!
//! Every field has a default, so a project without a config file uses the
//! conventional layout:
//!
//! ```toml
//! [layout]
//! actions = "actions"
//! extension = "chain"
//! processors = "src/processor"
//! jobs = "src/jobs"
//! artifact = "src/register.rs"
//!
//! [codegen]
//! runtime = "play"
//! processor_module = "crate::processor"
//! jobs_module = "crate::jobs"
//!
//! [format]
//! enabled = true
//! command = "rustfmt"
//! args = ["--edition", "2021"]
//! ```

use crate::name::validate_segment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the project configuration
pub const CONFIG_FILE: &str = "actc.toml";

/// Errors loading or checking the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Complete project configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub layout: LayoutConfig,
    pub codegen: CodegenConfig,
    pub format: FormatConfig,
}

/// Where inputs and the artifact live, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Chain definitions
    pub actions: PathBuf,
    /// Extension of chain definition files (without the dot)
    pub extension: String,
    /// Processor implementation tree
    pub processors: PathBuf,
    /// Scheduled job sources
    pub jobs: PathBuf,
    /// Generated registration file
    pub artifact: PathBuf,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            actions: PathBuf::from("actions"),
            extension: "chain".to_string(),
            processors: PathBuf::from("src/processor"),
            jobs: PathBuf::from("src/jobs"),
            artifact: PathBuf::from("src/register.rs"),
        }
    }
}

/// Rust paths used by the generated code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    /// Runtime crate providing `register_action`, `ProcessorWrap`, ...
    pub runtime: String,
    /// Module path of the processor tree
    pub processor_module: String,
    /// Module path of the jobs tree
    pub jobs_module: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            runtime: "play".to_string(),
            processor_module: "crate::processor".to_string(),
            jobs_module: "crate::jobs".to_string(),
        }
    }
}

/// External formatter invoked on the artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    pub enabled: bool,
    pub command: String,
    pub args: Vec<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: "rustfmt".to_string(),
            args: vec!["--edition".to_string(), "2021".to_string()],
        }
    }
}

impl ProjectConfig {
    /// Parse configuration from TOML content.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: ProjectConfig = toml::from_str(content).map_err(|e| ConfigError::Toml {
            path: origin.display().to_string(),
            source: e,
        })?;
        config.check()?;
        Ok(config)
    }

    /// Load `actc.toml` from a project root; a missing file yields defaults.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path)
    }

    fn check(&self) -> Result<(), ConfigError> {
        check_rust_path("codegen.runtime", &self.codegen.runtime)?;
        check_rust_path("codegen.processor_module", &self.codegen.processor_module)?;
        check_rust_path("codegen.jobs_module", &self.codegen.jobs_module)?;

        if self.layout.extension.is_empty() || self.layout.extension.starts_with('.') {
            return Err(ConfigError::Invalid {
                field: "layout.extension",
                reason: format!(
                    "'{}' must be a bare extension such as \"chain\"",
                    self.layout.extension
                ),
            });
        }
        if self.format.enabled && self.format.command.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "format.command",
                reason: "formatter command is empty".to_string(),
            });
        }
        Ok(())
    }
}

/// A `::`-separated path whose segments are identifiers; `crate` and
/// `super` are allowed as the leading segment.
fn check_rust_path(field: &'static str, path: &str) -> Result<(), ConfigError> {
    for (i, segment) in path.split("::").enumerate() {
        if i == 0 && matches!(segment, "crate" | "super" | "self") {
            continue;
        }
        validate_segment(segment).map_err(|e| ConfigError::Invalid {
            field,
            reason: format!("'{}': {}", path, e),
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
