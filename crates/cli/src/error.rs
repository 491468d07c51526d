// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Every fatal error is rendered as:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use actc_chain::{ParseError, ScanError};
use actc_codegen::{CompileError, ScaffoldError, UnresolvedReference};
use actc_core::{ConfigError, NameError, CONFIG_FILE};
use std::fmt;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct Diagnostic {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Render any error, with tailored advice for the ones we know.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        if let Some(e) = err.downcast_ref::<CompileError>() {
            return Self::compile(e);
        }
        if let Some(e) = err.downcast_ref::<ConfigError>() {
            return Self::config(e);
        }
        if let Some(e) = err.downcast_ref::<ScaffoldError>() {
            return Self::scaffold(e);
        }
        if let Some(e) = err.downcast_ref::<NameError>() {
            return Self::new(e.to_string())
                .with_suggestion("Processor names look like module.Type, e.g. order.Validate");
        }

        err.chain()
            .skip(1)
            .fold(Self::new(err.to_string()), |d, cause| d.with_context(cause.to_string()))
    }

    fn compile(err: &CompileError) -> Self {
        match err {
            CompileError::Definition { path, source } => Self::parse(path, source),
            CompileError::Unresolved(e) => Self::unresolved(e),
            CompileError::DuplicateAction { first, second, .. } => Self::new(err.to_string())
                .with_context("Action names must be unique across all definition files")
                .with_suggestion(format!("Rename the action in {} or {}", first, second)),
            CompileError::DuplicateJob { name, .. } => Self::new(err.to_string())
                .with_context(format!(
                    "Jobs register as <module>.<Type>, so '{}' is ambiguous",
                    name
                ))
                .with_suggestion("Rename one of the job types or move it to a module with another name"),
            CompileError::Write { source, .. } => Self::new(err.to_string())
                .with_context(source.to_string())
                .with_suggestion("Check that the artifact directory is writable")
                .with_suggestion(format!(
                    "Change the artifact location with [layout] artifact in {}",
                    CONFIG_FILE
                )),
            CompileError::Scan(ScanError::InvalidModule { .. }) => Self::new(err.to_string())
                .with_context("Job files are registered under their module path")
                .with_suggestion("Rename the file or directory to a Rust identifier that is not a keyword"),
            CompileError::Scan(_) => Self::new(err.to_string())
                .with_suggestion("Check the [layout] directories and their permissions"),
        }
    }

    fn parse(path: &str, err: &ParseError) -> Self {
        let diagnostic = Self::new(format!("failed to parse {}", path));
        match err {
            ParseError::Syntax {
                action,
                line,
                message,
            } => {
                let header = match action {
                    Some(action) => format!("syntax error at line {} in action '{}'", line, action),
                    None => format!("syntax error at line {}", line),
                };
                message
                    .lines()
                    .filter(|l| !l.trim().is_empty())
                    .fold(diagnostic.with_context(header), |d, l| d.with_context(l))
                    .with_suggestion("Check for unbalanced braces and a `=>` after every result code")
            }
            ParseError::DuplicateResultCode { .. } => diagnostic
                .with_context(err.to_string())
                .with_suggestion("Each result code may appear once per processor"),
            ParseError::InvalidProcessorName { .. } => diagnostic
                .with_context(err.to_string())
                .with_suggestion("Processor names look like module.Type, e.g. order.Validate"),
            ParseError::ExpectedSingleAction { .. } => diagnostic.with_context(err.to_string()),
        }
    }

    fn unresolved(err: &UnresolvedReference) -> Self {
        Self::new(format!(
            "action '{}' references unknown processor '{}'",
            err.action, err.name
        ))
        .with_context(err.reason.clone())
        .with_context("No artifact was written")
        .with_suggestion(format!("Create a stub with: actc new {}", err.name))
        .with_suggestion("Check the processor name in the action definition")
    }

    fn config(err: &ConfigError) -> Self {
        Self::new(err.to_string())
            .with_suggestion(format!("Fix or remove {} at the project root", CONFIG_FILE))
    }

    fn scaffold(err: &ScaffoldError) -> Self {
        let diagnostic = Self::new(err.to_string());
        match err {
            ScaffoldError::Exists(_) => {
                diagnostic.with_suggestion("Pick another type name or edit the existing file")
            }
            ScaffoldError::InvalidFileName { .. } => diagnostic
                .with_context("The stub file is named after the type in snake_case")
                .with_suggestion("Pick a type name whose snake_case form is not a Rust keyword"),
            ScaffoldError::Template(_) | ScaffoldError::Io { .. } => diagnostic,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
