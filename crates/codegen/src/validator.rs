// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Processor reference validation
//!
//! A reference `order.sub.Validate` resolves when the module `order/sub`
//! exists under the processor root, as a directory or as `order/sub.rs`,
//! and one of its files declares `pub struct Validate` or
//! `pub enum Validate`. Only the direct `.rs` files of a module directory
//! are searched. The scan is textual; nothing is compiled.

use actc_core::{ModuleRef, ProcessorNode};
use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static DECL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^pub(?:\(crate\))?[ \t]+(?:struct|enum)[ \t]+([A-Za-z_][A-Za-z0-9_]*)",
    )
    .expect("constant regex pattern is valid")
});

/// A processor reference with no implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("action '{action}': unresolved processor '{name}': {reason}")]
pub struct UnresolvedReference {
    pub action: String,
    pub name: String,
    pub reason: String,
}

/// What scanning a module found
#[derive(Debug, Clone)]
enum ModuleTypes {
    Missing { expected: PathBuf },
    Declared {
        searched: PathBuf,
        types: BTreeSet<String>,
    },
}

/// Checks processor references against the implementation tree.
///
/// Declared types are cached per module, so a module is read once per run.
#[derive(Debug)]
pub struct ReferenceValidator {
    root: PathBuf,
    cache: HashMap<ModuleRef, ModuleTypes>,
}

impl ReferenceValidator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: HashMap::new(),
        }
    }

    /// Check that `node`'s processor has an implementation.
    pub fn validate(&mut self, action: &str, node: &ProcessorNode) -> Result<(), UnresolvedReference> {
        let unresolved = |reason: String| UnresolvedReference {
            action: action.to_string(),
            name: node.name.to_string(),
            reason,
        };

        let module = node.name.module();
        let type_name = node.name.type_name();
        let found = self.module_types(&module).map_err(unresolved)?;

        match found {
            ModuleTypes::Missing { expected } => Err(unresolved(format!(
                "module not found at {}",
                expected.display()
            ))),
            ModuleTypes::Declared { searched, types } if !types.contains(type_name) => {
                Err(unresolved(format!(
                    "no file under {} declares `pub struct {}` or `pub enum {}`",
                    searched.display(),
                    type_name,
                    type_name
                )))
            }
            ModuleTypes::Declared { .. } => {
                tracing::debug!(action, processor = %node.name, "resolved");
                Ok(())
            }
        }
    }

    fn module_types(&mut self, module: &ModuleRef) -> Result<&ModuleTypes, String> {
        if !self.cache.contains_key(module) {
            let scanned = scan_module(&self.root, module)?;
            self.cache.insert(module.clone(), scanned);
        }
        self.cache
            .get(module)
            .ok_or_else(|| format!("module {} vanished from cache", module))
    }
}

/// Types declared by one module's files
fn scan_module(root: &Path, module: &ModuleRef) -> Result<ModuleTypes, String> {
    let dir = module.to_path(root);
    let file = dir.with_extension("rs");

    let mut files = Vec::new();
    if file.is_file() {
        files.push(file.clone());
    }
    if dir.is_dir() {
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| format!("failed to read {}: {}", dir.display(), e))?;
        for entry in entries {
            let path = entry
                .map_err(|e| format!("failed to read {}: {}", dir.display(), e))?
                .path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "rs") {
                files.push(path);
            }
        }
    } else if files.is_empty() {
        return Ok(ModuleTypes::Missing { expected: dir });
    }
    files.sort();

    let mut types = BTreeSet::new();
    for path in &files {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        types.extend(
            DECL_PATTERN
                .captures_iter(&content)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str().to_string()),
        );
    }

    tracing::debug!(module = %module, files = files.len(), types = types.len(), "scanned module");
    let searched = if dir.is_dir() { dir } else { file };
    Ok(ModuleTypes::Declared { searched, types })
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
