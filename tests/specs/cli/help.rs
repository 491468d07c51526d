//! Help and completion output.

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    let temp = Project::empty();
    temp.actc()
        .args(&["--help"])
        .passes()
        .stdout_has("build")
        .stdout_has("check")
        .stdout_has("list")
        .stdout_has("new")
        .stdout_has("completions");
}

#[test]
fn completions_need_no_project() {
    let dir = tempfile::tempdir().unwrap();
    assert_cmd::Command::cargo_bin("actc")
        .unwrap()
        .current_dir(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_actc"));
}
