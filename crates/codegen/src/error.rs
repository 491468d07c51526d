// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors that abort a compile run

use crate::validator::UnresolvedReference;
use actc_chain::{ParseError, ScanError};
use thiserror::Error;

/// A fatal compile failure. Nothing is written when one occurs before
/// emission.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("{path}: {source}")]
    Definition {
        path: String,
        #[source]
        source: ParseError,
    },

    #[error("action '{name}' is defined twice: {first} and {second}")]
    DuplicateAction {
        name: String,
        first: String,
        second: String,
    },

    #[error("cron job '{name}' is declared twice: {first} and {second}")]
    DuplicateJob {
        name: String,
        first: String,
        second: String,
    },

    #[error(transparent)]
    Unresolved(#[from] UnresolvedReference),

    #[error("failed to write artifact {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
