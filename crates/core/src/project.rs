// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project root discovery and resolved layout paths

use crate::config::{ConfigError, ProjectConfig, CONFIG_FILE};
use std::path::{Path, PathBuf};

/// Environment variable overriding project root discovery
pub const PROJECT_ROOT_ENV: &str = "ACTC_PROJECT_ROOT";

/// A project root together with its configuration
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    config: ProjectConfig,
}

impl Project {
    /// Load the project at `root`, reading `actc.toml` if present.
    pub fn load(root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let root = root.into();
        let config = ProjectConfig::load(&root)?;
        Ok(Self::with_config(root, config))
    }

    /// Resolve the project root and load it.
    ///
    /// An explicit path wins, then `ACTC_PROJECT_ROOT`, then the nearest
    /// ancestor of the working directory holding `actc.toml`, then the
    /// working directory itself.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().map_err(|source| ConfigError::Io {
            path: "current directory".to_string(),
            source,
        })?;
        let from_env = std::env::var_os(PROJECT_ROOT_ENV).map(PathBuf::from);
        Self::load(resolve_root(explicit, from_env.as_deref(), &cwd))
    }

    pub fn with_config(root: impl Into<PathBuf>, config: ProjectConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn actions_dir(&self) -> PathBuf {
        self.root.join(&self.config.layout.actions)
    }

    pub fn processors_dir(&self) -> PathBuf {
        self.root.join(&self.config.layout.processors)
    }

    pub fn jobs_dir(&self) -> PathBuf {
        self.root.join(&self.config.layout.jobs)
    }

    pub fn artifact_path(&self) -> PathBuf {
        self.root.join(&self.config.layout.artifact)
    }

    /// Path relative to the project root, for messages.
    pub fn display_path<'a>(&self, path: &'a Path) -> std::path::Display<'a> {
        path.strip_prefix(&self.root).unwrap_or(path).display()
    }
}

/// Pick the project root from the available hints.
pub fn resolve_root(explicit: Option<&Path>, from_env: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(root) = explicit.or(from_env) {
        return if root.is_absolute() {
            root.to_path_buf()
        } else {
            cwd.join(root)
        };
    }
    find_project_root(cwd).unwrap_or_else(|| cwd.to_path_buf())
}

/// Find the nearest ancestor of `start` (inclusive) holding `actc.toml`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(CONFIG_FILE).is_file())
        .map(Path::to_path_buf)
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
