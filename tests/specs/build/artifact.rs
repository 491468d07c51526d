//! `actc build` writes the registration artifact.

use crate::prelude::*;

#[test]
fn build_reports_jobs_and_counts() {
    let temp = Project::shop();
    temp.actc().args(&["build"]).passes().stdout_eq(
        "registered cron job nightly.Invoice\n\
         compiled 2 action(s), 1 cron job(s) -> src/register.rs\n",
    );
}

#[test]
fn artifact_registers_jobs_then_actions() {
    let temp = Project::shop();
    temp.actc().args(&["build"]).passes();

    let text = temp.read("src/register.rs");
    assert!(text.starts_with("// @generated by actc."));
    syn::parse_file(&text).unwrap();

    let flat = squash(&text);
    assert!(flat.contains("useplay::{register_action,register_cron_job};"));
    assert!(flat.contains("usecrate::jobs::billing::nightly;"));
    assert!(flat.contains("usecrate::processor::order;"));
    assert!(flat.contains("useplay::ProcessorWrap;"));
    assert!(flat.contains("usestd::collections::HashMap;"));

    let job = flat
        .find("register_cron_job(\"nightly.Invoice\",||Box::new(nightly::Invoice::default()));")
        .unwrap();
    let ping = flat.find("register_action(\"health.ping\",||None);").unwrap();
    let create = flat.find("register_action(\"order.create\",").unwrap();
    assert!(job < ping && ping < create);

    assert!(flat.contains(
        "ProcessorWrap::new(Box::new(order::Validate::default()),\
         Some(HashMap::from([(\"RC_FAIL\",None),\
         (\"RC_NORMAL\",Some(ProcessorWrap::new(Box::new(order::Persist::default()),None)))])))"
    ));
}

#[test]
fn each_module_is_imported_once() {
    let temp = Project::shop();
    temp.file(
        "actions/refund.chain",
        "action order.refund {\n  order.Validate {\n    RC_NORMAL => order.Persist\n  }\n}\n",
    );
    temp.actc().args(&["build"]).passes();

    let flat = squash(&temp.read("src/register.rs"));
    assert_eq!(flat.matches("usecrate::processor::order;").count(), 1);
}

#[test]
fn leaf_name_clash_gets_an_alias() {
    let temp = Project::shop();
    temp.file("src/processor/legacy/order.rs", "#[derive(Default)]\npub struct Archive;\n");
    temp.file(
        "actions/archive.chain",
        "action order.archive {\n  order.Validate {\n    RC_NORMAL => legacy.order.Archive\n  }\n}\n",
    );
    temp.actc().args(&["build"]).passes();

    let text = temp.read("src/register.rs");
    syn::parse_file(&text).unwrap();
    let flat = squash(&text);
    assert!(flat.contains("usecrate::processor::order;"));
    assert!(flat.contains("usecrate::processor::legacy::orderasprocessor_legacy_order;"));
    assert!(flat.contains("processor_legacy_order::Archive::default()"));
}

#[test]
fn rebuild_is_byte_identical() {
    let temp = Project::shop();
    temp.actc().args(&["build"]).passes();
    let first = temp.read("src/register.rs");
    temp.actc().args(&["build"]).passes();
    assert_eq!(temp.read("src/register.rs"), first);
}

#[test]
fn empty_project_still_writes_init() {
    let temp = Project::empty();
    temp.actc()
        .args(&["build"])
        .passes()
        .stdout_eq("compiled 0 action(s), 0 cron job(s) -> src/register.rs\n");

    let text = temp.read("src/register.rs");
    syn::parse_file(&text).unwrap();
    let flat = squash(&text);
    assert!(flat.contains("pubfninit(){}"));
    assert!(!flat.contains("ProcessorWrap"));
}

#[cfg(unix)]
#[test]
fn formatter_failure_is_a_warning() {
    let temp = Project::shop();
    temp.file(
        "actc.toml",
        "[format]\ncommand = \"actc-formatter-that-does-not-exist\"\nargs = []\n",
    );

    temp.actc()
        .args(&["build"])
        .passes()
        .stdout_has("compiled 2 action(s), 1 cron job(s) -> src/register.rs")
        .stdout_has("warning: artifact left unformatted");
    syn::parse_file(&temp.read("src/register.rs")).unwrap();
}

#[cfg(unix)]
#[test]
fn successful_formatter_is_silent() {
    let temp = Project::shop();
    temp.file("actc.toml", "[format]\ncommand = \"true\"\nargs = []\n");

    temp.actc()
        .args(&["build"])
        .passes()
        .stdout_lacks("warning:");
}
