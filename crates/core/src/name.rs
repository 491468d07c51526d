// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Qualified processor names and the module paths derived from them.
//!
//! A qualified name such as `order.sub.Validate` addresses a type
//! (`Validate`) inside a module (`order::sub`) relative to a module root.
//! The same segments map onto the filesystem (`order/sub`) for validation
//! and onto a Rust path (`crate::processor::order::sub`) for code generation.

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Words that cannot be used as a path segment in generated code.
const RESERVED: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Why a name was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("name is empty")]
    Empty,
    #[error("'{0}' must be module-qualified (e.g. module.Type)")]
    Unqualified(String),
    #[error("'{segment}' is not a valid identifier")]
    InvalidSegment { segment: String },
    #[error("'{segment}' is a reserved word")]
    Reserved { segment: String },
}

/// Check that a single segment is a usable identifier.
pub fn validate_segment(segment: &str) -> Result<(), NameError> {
    let mut chars = segment.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if !valid || segment == "_" {
        return Err(NameError::InvalidSegment {
            segment: segment.to_string(),
        });
    }
    if RESERVED.contains(&segment) {
        return Err(NameError::Reserved {
            segment: segment.to_string(),
        });
    }
    Ok(())
}

/// A dot-separated name identifying a processor type, e.g. `order.Validate`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    segments: Vec<String>,
}

impl QualifiedName {
    /// Parse a dotted name. At least two segments are required.
    pub fn parse(name: &str) -> Result<Self, NameError> {
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        let segments: Vec<String> = name.split('.').map(String::from).collect();
        if segments.len() < 2 {
            return Err(NameError::Unqualified(name.to_string()));
        }
        for segment in &segments {
            validate_segment(segment)?;
        }
        Ok(Self { segments })
    }

    /// The type segment (last)
    pub fn type_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// The module that declares the type (every segment but the last)
    pub fn module(&self) -> ModuleRef {
        ModuleRef::new(self.segments[..self.segments.len() - 1].to_vec())
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl std::str::FromStr for QualifiedName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for QualifiedName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A module path relative to a module root (processor tree or jobs tree).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ModuleRef {
    segments: Vec<String>,
}

impl ModuleRef {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Last segment, used as the local name of an import
    pub fn leaf(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Filesystem location of the module under `root`.
    pub fn to_path(&self, root: &Path) -> PathBuf {
        self.segments
            .iter()
            .fold(root.to_path_buf(), |path, segment| path.join(segment))
    }

    /// Rust path of the module below `base` (e.g. `crate::processor`).
    pub fn rust_path(&self, base: &str) -> String {
        std::iter::once(base)
            .chain(self.segments.iter().map(String::as_str))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("::")
    }
}

impl fmt::Display for ModuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("::"))
    }
}

impl Serialize for ModuleRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
#[path = "name_tests.rs"]
mod tests;
