//! Fatal diagnostics: printed to stdout, exit status 1.

use crate::prelude::*;

#[test]
fn unresolved_processor_fails_without_writing() {
    let temp = Project::shop();
    temp.file(
        "actions/invoice.chain",
        "action invoice.pay {\n    billing.Charge\n}\n",
    );

    temp.actc()
        .args(&["build"])
        .fails()
        .stdout_has("error: action 'invoice.pay' references unknown processor 'billing.Charge'")
        .stdout_has("No artifact was written")
        .stdout_has("Create a stub with: actc new billing.Charge");

    assert!(!temp.exists("src/register.rs"));
}

#[test]
fn failed_build_keeps_previous_artifact() {
    let temp = Project::shop();
    temp.actc().args(&["build"]).passes();
    let before = temp.read("src/register.rs");

    temp.file("actions/invoice.chain", "action invoice.pay { billing.Charge }\n");
    temp.actc().args(&["build"]).fails();

    assert_eq!(temp.read("src/register.rs"), before);
}

#[test]
fn syntax_error_names_file_and_line() {
    let temp = Project::shop();
    temp.file(
        "actions/broken.chain",
        "action broken.one {\n  order.Validate {\n    RC_OK order.Persist\n  }\n}\n",
    );

    temp.actc()
        .args(&["build"])
        .fails()
        .stdout_has("error: failed to parse actions/broken.chain")
        .stdout_has("syntax error at line 3 in action 'broken.one'")
        .stdout_has("'=>' after result code");
    assert!(!temp.exists("src/register.rs"));
}

#[test]
fn duplicate_result_code_is_fatal() {
    let temp = Project::shop();
    temp.file(
        "actions/dup.chain",
        "action dup.codes {\n  order.Validate {\n    RC_OK => end\n    RC_OK => order.Persist\n  }\n}\n",
    );

    temp.actc()
        .args(&["check"])
        .fails()
        .stdout_has("duplicate result code 'RC_OK' under processor 'order.Validate' at line 4");
}

#[test]
fn duplicate_action_across_files_is_fatal() {
    let temp = Project::shop();
    temp.file("actions/again.chain", "action health.ping {}\n");

    temp.actc()
        .args(&["build"])
        .fails()
        .stdout_has("health.ping")
        .stdout_has("actions/again.chain")
        .stdout_has("actions/order.chain");
}

#[test]
fn invalid_processor_name_gets_naming_hint() {
    let temp = Project::empty();
    temp.file("actions/bad.chain", "action bad.name { Validate }\n");

    temp.actc()
        .args(&["check"])
        .fails()
        .stdout_has("invalid processor name 'Validate'")
        .stdout_has("module.Type");
}

#[test]
fn job_file_without_module_name_is_reported() {
    let temp = Project::shop();
    temp.file("src/jobs/nightly-report.rs", "#[derive(Default)]\npub struct Report;\n");

    temp.actc()
        .args(&["build"])
        .fails()
        .stdout_has("nightly-report.rs does not map to a Rust module")
        .stdout_has("Rename the file or directory");
    assert!(!temp.exists("src/register.rs"));
}
