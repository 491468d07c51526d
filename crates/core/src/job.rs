// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduled job declarations discovered in the jobs tree

use crate::name::ModuleRef;
use serde::Serialize;
use std::path::PathBuf;

/// A job type found by scanning a jobs source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CronJobDefinition {
    /// Module that declares the job, relative to the jobs root
    pub module: ModuleRef,
    /// Local name of the module (its last segment)
    pub package_name: String,
    pub type_name: String,
    /// File the declaration was found in
    pub source: PathBuf,
}

impl CronJobDefinition {
    /// Name the job is registered under: `package.Type`
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.package_name, self.type_name)
    }
}
