// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduled job discovery
//!
//! Every public struct declared in a file under the jobs root is a job.
//! Its module comes from the file location, so `jobs/billing/nightly.rs`
//! declaring `pub struct Invoice` yields `nightly.Invoice`. Only
//! declarations starting at column 0 count, so types inside nested `mod`
//! blocks are not jobs. A file whose path is not a valid module path
//! (`nightly-report.rs`, `2024/`, `type.rs`) is an error.

use crate::scanner::{scan_sources, ScanError};
use actc_core::{validate_segment, CronJobDefinition, ModuleRef};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static STRUCT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^pub(?:\(crate\))?[ \t]+struct[ \t]+([A-Za-z_][A-Za-z0-9_]*)")
        .expect("constant regex pattern is valid")
});

/// Source extension for job files
pub const JOB_EXTENSION: &str = "rs";

/// Find every job declared under `root`, in path order.
pub fn scan_jobs(root: &Path) -> Result<Vec<CronJobDefinition>, ScanError> {
    let mut jobs = Vec::new();
    for source in scan_sources(root, JOB_EXTENSION)? {
        let module = source.module();
        if module.is_root() {
            tracing::warn!(
                path = %source.path.display(),
                "jobs root module has no name to register under, skipping"
            );
            continue;
        }
        // Module segments become identifiers in the artifact
        module
            .segments()
            .iter()
            .try_for_each(|segment| validate_segment(segment))
            .map_err(|reason| ScanError::InvalidModule {
                path: source.path.display().to_string(),
                reason,
            })?;
        jobs.extend(jobs_in_source(&module, &source.path, &source.content));
    }
    Ok(jobs)
}

/// Extract job declarations from one file's content.
pub fn jobs_in_source(module: &ModuleRef, path: &Path, content: &str) -> Vec<CronJobDefinition> {
    let Some(package_name) = module.leaf() else {
        return Vec::new();
    };

    STRUCT_PATTERN
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| {
            let job = CronJobDefinition {
                module: module.clone(),
                package_name: package_name.to_string(),
                type_name: m.as_str().to_string(),
                source: path.to_path_buf(),
            };
            tracing::info!(job = %job.qualified_name(), "found cron job");
            job
        })
        .collect()
}

#[cfg(test)]
#[path = "jobs_tests.rs"]
mod tests;
