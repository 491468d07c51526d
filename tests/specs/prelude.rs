//! Shared helpers for CLI specs.
//!
//! A `Project` is a throwaway directory with an `actc.toml`; `actc()` runs
//! the binary inside it and returns a builder whose `passes()`/`fails()`
//! assert the exit status.

use std::path::Path;
use tempfile::TempDir;

/// Formatting off, so specs don't depend on an installed rustfmt
pub const CONFIG_NO_FORMAT: &str = "[format]\nenabled = false\n";

pub const ORDER_CHAIN: &str = r#"# Order handling
action "order.create" {
    order.Validate {
        RC_NORMAL => order.Persist
        RC_FAIL => end
    }
}

action health.ping {}
"#;

pub const ORDER_PROCESSORS: &str = r#"mod validate;
pub use validate::Validate;

#[derive(Default)]
pub struct Persist;
"#;

pub const VALIDATE_PROCESSOR: &str = "#[derive(Default)]\npub struct Validate;\n";

pub const NIGHTLY_JOB: &str = "#[derive(Default)]\npub struct Invoice;\n";

pub struct Project {
    dir: TempDir,
}

impl Project {
    /// An empty project with formatting disabled
    pub fn empty() -> Self {
        let project = Self {
            dir: tempfile::tempdir().unwrap(),
        };
        project.file("actc.toml", CONFIG_NO_FORMAT);
        project
    }

    /// Two actions, one processor module and one cron job
    pub fn shop() -> Self {
        let project = Self::empty();
        project.file("actions/order.chain", ORDER_CHAIN);
        project.file("src/processor/mod.rs", "pub mod order;\n");
        project.file("src/processor/order/mod.rs", ORDER_PROCESSORS);
        project.file("src/processor/order/validate.rs", VALIDATE_PROCESSOR);
        project.file("src/jobs/mod.rs", "pub mod billing;\n");
        project.file("src/jobs/billing/mod.rs", "pub mod nightly;\n");
        project.file("src/jobs/billing/nightly.rs", NIGHTLY_JOB);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root
    pub fn file(&self, rel: &str, content: &str) {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path().join(rel)).unwrap()
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path().join(rel).exists()
    }

    /// `actc` running in the project root
    pub fn actc(&self) -> CliBuilder {
        self.actc_in(".")
    }

    /// `actc` running in a directory below the project root
    pub fn actc_in(&self, rel: &str) -> CliBuilder {
        let mut cmd = assert_cmd::Command::cargo_bin("actc").unwrap();
        cmd.current_dir(self.path().join(rel))
            .env_remove("ACTC_PROJECT_ROOT")
            .env("RUST_LOG", "off");
        CliBuilder { cmd }
    }
}

pub struct CliBuilder {
    cmd: assert_cmd::Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run and assert success
    pub fn passes(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert { output };
        if !run.output.status.success() {
            panic!(
                "expected success, got {}\nstdout:\n{}\nstderr:\n{}",
                run.output.status,
                run.stdout(),
                run.stderr()
            );
        }
        run
    }

    /// Run and assert exit status 1
    pub fn fails(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert { output };
        if run.output.status.code() != Some(1) {
            panic!(
                "expected exit status 1, got {}\nstdout:\n{}\nstderr:\n{}",
                run.output.status,
                run.stdout(),
                run.stderr()
            );
        }
        run
    }
}

pub struct RunAssert {
    output: std::process::Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout().as_str(), expected);
        self
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain {:?}\nstdout:\n{}",
            expected,
            stdout
        );
        self
    }

    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !stdout.contains(unexpected),
            "stdout unexpectedly contains {:?}\nstdout:\n{}",
            unexpected,
            stdout
        );
        self
    }
}

/// Text with all whitespace removed, for comparing unformatted artifacts
pub fn squash(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
