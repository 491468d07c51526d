// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Processor stub scaffolding
//!
//! `order.sub.ValidateOrder` becomes
//! `<processors>/order/sub/validate_order.rs`, wired into the module tree:
//!
//! - `order/sub/mod.rs` gains `mod validate_order;` and
//!   `pub use validate_order::ValidateOrder;`
//! - `order/mod.rs` gains `pub mod sub;`
//! - `<processors>/mod.rs` gains `pub mod order;`
//!
//! A module written as `order.rs` next to an `order/` directory is updated
//! in place of `order/mod.rs`. Existing lines are never duplicated.

use actc_core::{validate_segment, NameError, Project, QualifiedName};
use minijinja::{context, Environment};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const PROCESSOR_TEMPLATE: &str = r#"use {{ runtime }}::{Context, Error, Processor};

/// {{ name }} processor.
#[derive(Debug, Default)]
pub struct {{ type_name }};

impl Processor for {{ type_name }} {
    fn execute(&mut self, _ctx: &mut Context) -> Result<String, Error> {
        Ok("RC_NORMAL".to_string())
    }
}
"#;

/// Errors that can occur while scaffolding
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("processor stub already exists: {0}")]
    Exists(String),

    #[error("type '{type_name}' has no usable file name: {source}")]
    InvalidFileName {
        type_name: String,
        #[source]
        source: NameError,
    },

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("IO error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Files touched by a scaffold run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub stub: PathBuf,
    /// Module files that gained a line, innermost first
    pub updated: Vec<PathBuf>,
}

/// Create a processor stub for `name` and register it in the module tree.
pub fn scaffold_processor(
    project: &Project,
    name: &QualifiedName,
) -> Result<ScaffoldReport, ScaffoldError> {
    let type_name = name.type_name();
    let file_stem = snake_case(type_name);
    validate_segment(&file_stem).map_err(|source| ScaffoldError::InvalidFileName {
        type_name: type_name.to_string(),
        source,
    })?;

    let root = project.processors_dir();
    let module = name.module();
    let module_dir = module.to_path(&root);
    let stub = module_dir.join(format!("{}.rs", file_stem));
    if stub.exists() {
        return Err(ScaffoldError::Exists(
            project.display_path(&stub).to_string(),
        ));
    }

    let content = render_stub(&project.config().codegen.runtime, name)?;

    // Module tree first; the stub is written last
    let mut updated = Vec::new();
    let leaf_file = module_file(&module_dir);
    let lines = [
        format!("mod {};", file_stem),
        format!("pub use {}::{};", file_stem, type_name),
    ];
    if ensure_lines(&leaf_file, &lines)? {
        updated.push(leaf_file);
    }

    // Each ancestor declares its child, up to the processor root
    let segments = module.segments();
    for depth in (0..segments.len()).rev() {
        let parent = segments[..depth]
            .iter()
            .fold(root.clone(), |path, segment| path.join(segment));
        let parent_file = module_file(&parent);
        if ensure_lines(&parent_file, &[format!("pub mod {};", segments[depth])])? {
            updated.push(parent_file);
        }
    }

    std::fs::create_dir_all(&module_dir).map_err(|e| io_error(&module_dir, e))?;
    std::fs::write(&stub, content).map_err(|e| io_error(&stub, e))?;
    tracing::info!(processor = %name, path = %stub.display(), "scaffolded processor");

    Ok(ScaffoldReport { stub, updated })
}

fn render_stub(runtime: &str, name: &QualifiedName) -> Result<String, ScaffoldError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template("processor.rs", PROCESSOR_TEMPLATE)?;
    let rendered = env.get_template("processor.rs")?.render(context! {
        runtime => runtime,
        name => name.to_string(),
        type_name => name.type_name(),
    })?;
    Ok(rendered)
}

/// File holding a module's items: `dir.rs` when present, else `dir/mod.rs`
fn module_file(dir: &Path) -> PathBuf {
    let sibling = dir.with_extension("rs");
    if sibling.is_file() {
        sibling
    } else {
        dir.join("mod.rs")
    }
}

/// Append each line not already present. Returns whether the file changed.
fn ensure_lines(path: &Path, lines: &[String]) -> Result<bool, ScaffoldError> {
    let mut content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(io_error(path, e)),
    };

    let missing: Vec<&String> = lines
        .iter()
        .filter(|line| !content.lines().any(|existing| existing.trim() == line.as_str()))
        .collect();
    if missing.is_empty() {
        return Ok(false);
    }

    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    for line in missing {
        content.push_str(line);
        content.push('\n');
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }
    std::fs::write(path, content).map_err(|e| io_error(path, e))?;
    Ok(true)
}

fn io_error(path: &Path, source: std::io::Error) -> ScaffoldError {
    ScaffoldError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// `ValidateOrder` → `validate_order`, `HTTPCall` → `http_call`
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let prev = i.checked_sub(1).and_then(|p| chars.get(p));
            let next = chars.get(i + 1);
            let boundary = match prev {
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_ascii_uppercase() => next.is_some_and(|n| n.is_ascii_lowercase()),
                _ => false,
            };
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
#[path = "scaffold_tests.rs"]
mod tests;
