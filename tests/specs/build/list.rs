//! `actc list` shows each action's chain.

use crate::prelude::*;

#[test]
fn list_prints_trees_sorted_by_name() {
    let temp = Project::shop();
    temp.actc().args(&["list"]).passes().stdout_eq(
        "health.ping  (actions/order.chain)\n\
         \x20 (no steps)\n\
         \n\
         order.create  (actions/order.chain)\n\
         \x20 order.Validate\n\
         \x20   RC_FAIL => end\n\
         \x20   RC_NORMAL =>\n\
         \x20     order.Persist\n",
    );
}

#[test]
fn list_empty_project() {
    let temp = Project::empty();
    temp.actc()
        .args(&["list"])
        .passes()
        .stdout_eq("No actions found.\n");
}

#[test]
fn list_json_carries_structure() {
    let temp = Project::shop();
    let run = temp.actc().args(&["list", "--output", "json"]).passes();

    let value: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    let actions = value.as_array().unwrap();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0]["name"], "health.ping");
    assert!(actions[0]["root"].is_null());
    assert_eq!(actions[1]["name"], "order.create");
    assert_eq!(actions[1]["nodes"], 2);
    assert_eq!(actions[1]["source"], "actions/order.chain");
}

#[test]
fn list_does_not_need_processors() {
    let temp = Project::empty();
    temp.file("actions/x.chain", "action x.y { nowhere.Missing }\n");
    temp.actc().args(&["list"]).passes().stdout_has("nowhere.Missing");
}
