// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `actc check`

use actc_adapters::NoOpFormatAdapter;
use actc_codegen::Compiler;
use actc_core::Project;

pub fn check(project: Project) -> anyhow::Result<()> {
    let compiler = Compiler::new(project, NoOpFormatAdapter::new());
    let report = compiler.check()?;

    let nodes: usize = report.actions.iter().map(|a| a.node_count()).sum();
    println!(
        "ok: {} action(s), {} processor node(s) in {} module(s), {} cron job(s)",
        report.actions.len(),
        nodes,
        report.modules.len(),
        report.jobs.len()
    );
    Ok(())
}
