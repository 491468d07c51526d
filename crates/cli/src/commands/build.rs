// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `actc build`

use actc_adapters::{RustfmtAdapter, TracedFormatAdapter};
use actc_codegen::{Compiler, FormatOutcome};
use actc_core::Project;

pub fn build(project: Project) -> anyhow::Result<()> {
    let formatter = TracedFormatAdapter::new(RustfmtAdapter::from_config(&project.config().format));
    let compiler = Compiler::new(project, formatter);
    let report = compiler.build()?;

    for job in &report.jobs {
        println!("registered cron job {}", job.qualified_name());
    }
    println!(
        "compiled {} action(s), {} cron job(s) -> {}",
        report.actions.len(),
        report.jobs.len(),
        compiler.project().display_path(&report.artifact_path)
    );
    if let FormatOutcome::Failed(reason) = &report.format {
        println!("warning: artifact left unformatted: {}", reason);
    }
    Ok(())
}
