// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `actc completions <shell>`
//!
//! Runs before project discovery, so it works outside any project.

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io::Write;

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Write the completion script for `C` to `out`.
pub fn completions<C: CommandFactory>(args: &CompletionsArgs, out: &mut dyn Write) {
    let mut cmd = C::command();
    let bin = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, bin, out);
}
