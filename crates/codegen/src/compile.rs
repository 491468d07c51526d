// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compile driver: scan, parse, validate, generate, emit

use crate::emitter::{emit, Artifact, ArtifactParts, FormatOutcome};
use crate::error::CompileError;
use crate::generator::Generator;
use crate::imports::ImportSet;
use crate::validator::ReferenceValidator;
use actc_adapters::FormatAdapter;
use actc_chain::{parse_chain, scan_jobs, scan_sources};
use actc_core::{Action, CronJobDefinition, ModuleRef, Project};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

/// An action together with the file that defines it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedAction {
    #[serde(flatten)]
    pub action: Action,
    pub source: PathBuf,
}

/// What a run compiled
#[derive(Debug, Clone, Serialize)]
pub struct CompileReport {
    /// Sorted by name
    pub actions: Vec<Action>,
    /// Sorted by qualified name
    pub jobs: Vec<CronJobDefinition>,
    /// Processor modules the artifact imports
    pub modules: BTreeSet<ModuleRef>,
    pub artifact_path: PathBuf,
    /// Rendered artifact text, before formatting
    #[serde(skip)]
    pub artifact: String,
    pub format: FormatOutcome,
}

/// Runs the pipeline for one project
pub struct Compiler<F> {
    project: Project,
    formatter: F,
}

impl<F: FormatAdapter> Compiler<F> {
    pub fn new(project: Project, formatter: F) -> Self {
        Self { project, formatter }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Compile and write the artifact.
    pub fn build(&self) -> Result<CompileReport, CompileError> {
        let (artifact, mut report) = self.compile()?;
        let formatter = self
            .project
            .config()
            .format
            .enabled
            .then_some(&self.formatter);
        report.format = emit(&artifact, formatter)?;
        Ok(report)
    }

    /// Compile without writing anything.
    pub fn check(&self) -> Result<CompileReport, CompileError> {
        let (_, report) = self.compile()?;
        Ok(report)
    }

    /// Scan and parse every definition, sorted by action name.
    ///
    /// Action names must be unique across all files.
    pub fn load_actions(&self) -> Result<Vec<LoadedAction>, CompileError> {
        let layout = &self.project.config().layout;
        let sources = scan_sources(&self.project.actions_dir(), &layout.extension)?;

        let mut seen: HashMap<String, PathBuf> = HashMap::new();
        let mut loaded = Vec::new();
        for source in sources {
            let actions = parse_chain(&source.content).map_err(|e| CompileError::Definition {
                path: self.project.display_path(&source.path).to_string(),
                source: e,
            })?;
            for action in actions {
                if let Some(first) = seen.get(&action.name) {
                    return Err(CompileError::DuplicateAction {
                        name: action.name,
                        first: self.project.display_path(first).to_string(),
                        second: self.project.display_path(&source.path).to_string(),
                    });
                }
                seen.insert(action.name.clone(), source.path.clone());
                loaded.push(LoadedAction {
                    action,
                    source: source.path.clone(),
                });
            }
        }

        loaded.sort_by(|a, b| a.action.name.cmp(&b.action.name));
        tracing::info!(actions = loaded.len(), "scanned definitions");
        Ok(loaded)
    }

    /// Scan every cron job, sorted by qualified name.
    pub fn load_jobs(&self) -> Result<Vec<CronJobDefinition>, CompileError> {
        let mut jobs = scan_jobs(&self.project.jobs_dir())?;
        jobs.sort_by_key(CronJobDefinition::qualified_name);

        for pair in jobs.windows(2) {
            if let [first, second] = pair {
                if first.qualified_name() == second.qualified_name() {
                    return Err(CompileError::DuplicateJob {
                        name: first.qualified_name(),
                        first: self.project.display_path(&first.source).to_string(),
                        second: self.project.display_path(&second.source).to_string(),
                    });
                }
            }
        }
        Ok(jobs)
    }

    fn compile(&self) -> Result<(Artifact, CompileReport), CompileError> {
        let actions: Vec<Action> = self
            .load_actions()?
            .into_iter()
            .map(|loaded| loaded.action)
            .collect();
        let jobs = self.load_jobs()?;

        let codegen = &self.project.config().codegen;
        let mut imports = ImportSet::new(&codegen.runtime);
        let mut generator =
            Generator::new(ReferenceValidator::new(self.project.processors_dir()));

        let job_tokens = jobs
            .iter()
            .map(|job| {
                tracing::info!(job = %job.qualified_name(), "registered cron job");
                generator.generate_job(job, &mut imports)
            })
            .collect();
        let mut action_tokens = Vec::with_capacity(actions.len());
        for action in &actions {
            action_tokens.push(generator.generate_action(action, &mut imports)?);
        }

        let parts = ArtifactParts {
            codegen,
            imports: &imports,
            jobs: job_tokens,
            actions: action_tokens,
        };
        let artifact = Artifact::new(self.project.artifact_path(), &parts);
        let report = CompileReport {
            actions,
            jobs,
            modules: imports.processor_modules(),
            artifact_path: artifact.path.clone(),
            artifact: artifact.text(),
            format: FormatOutcome::Skipped,
        };
        Ok((artifact, report))
    }
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;
