//! `actc check` validates without writing.

use crate::prelude::*;

#[test]
fn check_summarizes_without_writing() {
    let temp = Project::shop();
    temp.actc()
        .args(&["check"])
        .passes()
        .stdout_eq("ok: 2 action(s), 2 processor node(s) in 1 module(s), 1 cron job(s)\n");
    assert!(!temp.exists("src/register.rs"));
}

#[test]
fn check_reports_unresolved_processor() {
    let temp = Project::shop();
    temp.file(
        "actions/order.chain",
        "action order.create { order.Validate { RC_NORMAL => order.Missing } }\n",
    );

    temp.actc()
        .args(&["check"])
        .fails()
        .stdout_has("references unknown processor 'order.Missing'");
}
