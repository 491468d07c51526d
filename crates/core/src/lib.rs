// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! actc-core: shared model for the actc action compiler
//!
//! This crate provides:
//! - Actions and their processor branch trees
//! - Qualified processor names and module paths
//! - Scheduled job declarations
//! - Project configuration (`actc.toml`) and layout resolution

pub mod action;
pub mod config;
pub mod job;
pub mod name;
pub mod project;

pub use action::{Action, ProcessorNode};
pub use config::{
    CodegenConfig, ConfigError, FormatConfig, LayoutConfig, ProjectConfig, CONFIG_FILE,
};
pub use job::CronJobDefinition;
pub use name::{validate_segment, ModuleRef, NameError, QualifiedName};
pub use project::{find_project_root, resolve_root, Project, PROJECT_ROOT_ENV};
