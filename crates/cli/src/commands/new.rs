// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `actc new`

use actc_codegen::scaffold_processor;
use actc_core::{Project, QualifiedName};
use clap::Args;

#[derive(Args)]
pub struct NewArgs {
    /// Processor to create, e.g. order.Validate
    pub name: String,
}

pub fn new(project: Project, args: NewArgs) -> anyhow::Result<()> {
    let name = QualifiedName::parse(&args.name)?;
    let report = scaffold_processor(&project, &name)?;

    println!("created {}", project.display_path(&report.stub));
    for path in &report.updated {
        println!("updated {}", project.display_path(path));
    }
    Ok(())
}
