// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! actc-codegen: from validated definitions to the registry artifact
//!
//! This crate provides:
//! - Processor reference validation against the implementation tree
//! - Registration code generation and import collection
//! - Artifact rendering, writing and formatting
//! - The compile driver tying the pipeline together
//! - Processor stub scaffolding

pub mod compile;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod imports;
pub mod scaffold;
pub mod validator;

pub use compile::{CompileReport, Compiler, LoadedAction};
pub use emitter::{emit, Artifact, ArtifactParts, FormatOutcome};
pub use error::CompileError;
pub use generator::Generator;
pub use imports::{ImportSet, ModuleKind};
pub use scaffold::{scaffold_processor, snake_case, ScaffoldError, ScaffoldReport};
pub use validator::{ReferenceValidator, UnresolvedReference};
