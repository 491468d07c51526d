// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Artifact assembly and writing

use crate::error::CompileError;
use crate::imports::{ImportSet, ModuleKind};
use actc_adapters::FormatAdapter;
use actc_core::CodegenConfig;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use serde::Serialize;
use std::path::{Path, PathBuf};

const HEADER: &str = "\
// @generated by actc. Do not edit by hand.
// Regenerate with `actc build`.
";

/// Result of running the formatter on a written artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum FormatOutcome {
    Formatted,
    /// Formatting disabled, or nothing was written
    Skipped,
    /// The artifact was written but left unformatted
    Failed(String),
}

/// Everything that goes into the artifact
pub struct ArtifactParts<'a> {
    pub codegen: &'a CodegenConfig,
    pub imports: &'a ImportSet,
    /// Job registrations, in registration order
    pub jobs: Vec<TokenStream>,
    /// Action registrations, in registration order
    pub actions: Vec<TokenStream>,
}

/// A rendered artifact and where it goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    /// One `use` item per entry
    pub imports: Vec<String>,
    /// The `init` function
    pub body: String,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, parts: &ArtifactParts<'_>) -> Self {
        Self {
            path: path.into(),
            imports: render_imports(parts),
            body: render_body(parts),
        }
    }

    /// Complete file content
    pub fn text(&self) -> String {
        compose(&self.imports, &self.body)
    }
}

fn compose(imports: &[String], body: &str) -> String {
    let mut text = String::from(HEADER);
    text.push('\n');
    for import in imports {
        text.push_str(import);
        text.push('\n');
    }
    text.push('\n');
    text.push_str(body);
    text.push('\n');
    text
}

/// `a::b::c` as tokens
fn path_tokens(path: &str) -> TokenStream {
    let segments = path
        .split("::")
        .filter(|s| !s.is_empty())
        .map(|s| format_ident!("{}", s));
    quote! { #(#segments)::* }
}

fn render_imports(parts: &ArtifactParts<'_>) -> Vec<String> {
    let runtime = path_tokens(&parts.codegen.runtime);
    let mut imports = vec![quote! {
        #[allow(unused_imports)]
        use #runtime::{register_action, register_cron_job};
    }];

    let module_uses = |kind: ModuleKind, base: &str| {
        parts
            .imports
            .modules(kind)
            .map(|(module, local)| {
                let path = path_tokens(&module.rust_path(base));
                if module.leaf() == Some(local) {
                    quote! { use #path; }
                } else {
                    let alias = format_ident!("{}", local);
                    quote! { use #path as #alias; }
                }
            })
            .collect::<Vec<_>>()
    };
    imports.extend(module_uses(ModuleKind::Job, &parts.codegen.jobs_module));
    imports.extend(module_uses(ModuleKind::Processor, &parts.codegen.processor_module));

    if parts.imports.has_processors() {
        imports.push(quote! { use #runtime::ProcessorWrap; });
        imports.push(quote! {
            #[allow(unused_imports)]
            use std::collections::HashMap;
        });
    }

    imports.iter().map(ToString::to_string).collect()
}

fn render_body(parts: &ArtifactParts<'_>) -> String {
    let jobs = &parts.jobs;
    let actions = &parts.actions;
    quote! {
        /// Register every action and cron job with the runtime.
        pub fn init() {
            #(#jobs)*
            #(#actions)*
        }
    }
    .to_string()
}

/// Write the artifact, then format it when a formatter is given.
///
/// A write failure is fatal. A formatter failure leaves the valid but
/// unformatted text in place and is reported as [`FormatOutcome::Failed`].
pub fn emit<F: FormatAdapter>(
    artifact: &Artifact,
    formatter: Option<&F>,
) -> Result<FormatOutcome, CompileError> {
    write_artifact(&artifact.path, &artifact.text())?;
    tracing::info!(path = %artifact.path.display(), "artifact written");

    let Some(formatter) = formatter else {
        return Ok(FormatOutcome::Skipped);
    };
    match formatter.format(&artifact.path) {
        Ok(()) => Ok(FormatOutcome::Formatted),
        Err(e) => {
            tracing::warn!(error = %e, "artifact left unformatted");
            Ok(FormatOutcome::Failed(e.to_string()))
        }
    }
}

fn write_artifact(path: &Path, text: &str) -> Result<(), CompileError> {
    let write_error = |source| CompileError::Write {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(path, text).map_err(write_error)
}

#[cfg(test)]
#[path = "emitter_tests.rs"]
mod tests;
