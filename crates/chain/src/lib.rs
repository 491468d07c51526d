// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! actc-chain: reading action and job definitions
//!
//! This crate provides:
//! - Source discovery over the actions and jobs trees
//! - A parser for the chain notation
//! - Scheduled job extraction from job source files

mod jobs;
mod parser;
mod scanner;

pub use jobs::{jobs_in_source, scan_jobs, JOB_EXTENSION};
pub use parser::{parse_action, parse_chain, ParseError};
pub use scanner::{scan_sources, DefinitionSource, ScanError};
