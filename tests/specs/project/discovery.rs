//! Locating the project root and reading actc.toml.

use crate::prelude::*;

#[test]
fn runs_from_a_subdirectory() {
    let temp = Project::shop();
    temp.actc_in("src/processor/order")
        .args(&["build"])
        .passes()
        .stdout_has("-> src/register.rs");
    assert!(temp.exists("src/register.rs"));
}

#[test]
fn project_flag_selects_root() {
    let temp = Project::shop();
    let elsewhere = tempfile::tempdir().unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("actc").unwrap();
    let output = cmd
        .current_dir(elsewhere.path())
        .env_remove("ACTC_PROJECT_ROOT")
        .env("RUST_LOG", "off")
        .arg("--project")
        .arg(temp.path())
        .arg("check")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("ok: 2 action(s)"));
}

#[test]
fn env_var_selects_root() {
    let temp = Project::shop();
    let other = Project::empty();
    other
        .actc()
        .env("ACTC_PROJECT_ROOT", temp.path())
        .args(&["check"])
        .passes()
        .stdout_has("ok: 2 action(s)");
}

#[test]
fn custom_layout_is_honored() {
    let temp = Project::empty();
    temp.file(
        "actc.toml",
        r#"[layout]
actions = "chains"
processors = "src/steps"
jobs = "src/cron"
artifact = "src/generated/registry.rs"

[format]
enabled = false
"#,
    );
    temp.file("chains/ping.chain", "action ping.it { health.Pong }\n");
    temp.file("src/steps/health.rs", "#[derive(Default)]\npub struct Pong;\n");

    temp.actc()
        .args(&["build"])
        .passes()
        .stdout_eq("compiled 1 action(s), 0 cron job(s) -> src/generated/registry.rs\n");
    assert!(temp.read("src/generated/registry.rs").contains("\"ping.it\""));
}

#[test]
fn malformed_config_is_reported() {
    let temp = Project::empty();
    temp.file("actc.toml", "[layout\nactions = 1\n");

    temp.actc()
        .args(&["check"])
        .fails()
        .stdout_has("TOML parse error")
        .stdout_has("actc.toml");
}
