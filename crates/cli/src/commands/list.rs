// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `actc list`

use crate::output::{render_list, OutputFormat};
use actc_adapters::NoOpFormatAdapter;
use actc_codegen::Compiler;
use actc_core::{Project, ProcessorNode};
use clap::Args;
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct ListArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(Serialize)]
struct ActionInfo {
    name: String,
    source: String,
    nodes: usize,
    root: Option<ProcessorNode>,
    #[serde(skip)]
    tree: String,
}

impl fmt::Display for ActionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = self.tree.lines();
        if let Some(first) = lines.next() {
            writeln!(f, "{}  ({})", first, self.source)?;
        }
        for line in lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

pub fn list(project: Project, args: ListArgs) -> anyhow::Result<()> {
    let compiler = Compiler::new(project, NoOpFormatAdapter::new());
    let actions = compiler.load_actions()?;

    if actions.is_empty() && matches!(args.output, OutputFormat::Text) {
        println!("No actions found.");
        return Ok(());
    }

    let infos: Vec<ActionInfo> = actions
        .into_iter()
        .map(|loaded| ActionInfo {
            name: loaded.action.name.clone(),
            source: compiler.project().display_path(&loaded.source).to_string(),
            nodes: loaded.action.node_count(),
            tree: loaded.action.render_tree(),
            root: loaded.action.root,
        })
        .collect();
    print!("{}", render_list(&infos, args.output)?);
    Ok(())
}
