//! `actc new` scaffolds processor stubs.

use crate::prelude::*;

#[test]
fn new_creates_stub_and_module_lines() {
    let temp = Project::empty();
    temp.actc().args(&["new", "order.ValidateOrder"]).passes().stdout_eq(
        "created src/processor/order/validate_order.rs\n\
         updated src/processor/order/mod.rs\n\
         updated src/processor/mod.rs\n",
    );

    let stub = temp.read("src/processor/order/validate_order.rs");
    assert!(stub.contains("pub struct ValidateOrder;"));
    assert!(stub.contains("use play::{Context, Error, Processor};"));

    let module = temp.read("src/processor/order/mod.rs");
    assert!(module.contains("mod validate_order;"));
    assert!(module.contains("pub use validate_order::ValidateOrder;"));
    assert_eq!(temp.read("src/processor/mod.rs"), "pub mod order;\n");
}

#[test]
fn scaffolded_processor_resolves() {
    let temp = Project::empty();
    temp.file("actions/signup.chain", "action user.signup { user.CreateAccount }\n");
    temp.actc().args(&["check"]).fails();

    temp.actc().args(&["new", "user.CreateAccount"]).passes();
    temp.actc()
        .args(&["check"])
        .passes()
        .stdout_eq("ok: 1 action(s), 1 processor node(s) in 1 module(s), 0 cron job(s)\n");
}

#[test]
fn new_refuses_existing_stub() {
    let temp = Project::empty();
    temp.actc().args(&["new", "order.Validate"]).passes();
    temp.actc()
        .args(&["new", "order.Validate"])
        .fails()
        .stdout_has("processor stub already exists: src/processor/order/validate.rs");
}

#[test]
fn new_rejects_unqualified_name() {
    let temp = Project::empty();
    temp.actc()
        .args(&["new", "Validate"])
        .fails()
        .stdout_has("module.Type");
    assert!(!temp.exists("src/processor"));
}
