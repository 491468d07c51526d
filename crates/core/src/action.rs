// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Actions and their processor branch trees.
//!
//! An action owns a tree of processors. Each edge is labelled with the
//! result code that makes the parent select the child:
//!
//! ```text
//! order.create
//!   order.Validate
//!     RC_FAIL => end
//!     RC_NORMAL =>
//!       order.Persist
//! ```

use crate::name::{ModuleRef, QualifiedName};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

/// One step in a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessorNode {
    /// Processor type this step instantiates
    pub name: QualifiedName,
    /// Result code under which the parent selects this node (empty for the root)
    pub incoming_code: String,
    /// Next step per result code; `None` terminates the chain on that code
    pub children: BTreeMap<String, Option<ProcessorNode>>,
}

impl ProcessorNode {
    pub fn new(name: QualifiedName, incoming_code: impl Into<String>) -> Self {
        Self {
            name,
            incoming_code: incoming_code.into(),
            children: BTreeMap::new(),
        }
    }

    /// A node with no branches ends the chain whatever it returns
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Next node for a result code.
    ///
    /// `None` when the code has no branch or branches to `end`.
    pub fn next(&self, code: &str) -> Option<&ProcessorNode> {
        self.children.get(code).and_then(Option::as_ref)
    }

    /// Visit this node and every descendant, depth first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a ProcessorNode)) {
        visit(self);
        for child in self.children.values().flatten() {
            child.walk(visit);
        }
    }
}

/// An externally invokable operation compiled into one registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub name: String,
    /// First step; `None` is a no-op action
    pub root: Option<ProcessorNode>,
}

impl Action {
    pub fn new(name: impl Into<String>, root: Option<ProcessorNode>) -> Self {
        Self {
            name: name.into(),
            root,
        }
    }

    /// Number of processor nodes in the tree
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        if let Some(root) = &self.root {
            root.walk(&mut |_| count += 1);
        }
        count
    }

    /// Every module referenced by the tree, deduplicated and sorted
    pub fn modules(&self) -> BTreeSet<ModuleRef> {
        let mut modules = BTreeSet::new();
        if let Some(root) = &self.root {
            root.walk(&mut |node| {
                modules.insert(node.name.module());
            });
        }
        modules
    }

    /// Render the tree as indented text for `actc list`.
    pub fn render_tree(&self) -> String {
        let mut out = format!("{}\n", self.name);
        match &self.root {
            None => out.push_str("  (no steps)\n"),
            Some(root) => render_node(&mut out, root, 1),
        }
        out
    }
}

fn render_node(out: &mut String, node: &ProcessorNode, depth: usize) {
    let indent = "  ".repeat(depth);
    let _ = writeln!(out, "{}{}", indent, node.name);
    for (code, child) in &node.children {
        match child {
            Some(child) => {
                let _ = writeln!(out, "{}  {} =>", indent, code);
                render_node(out, child, depth + 2);
            }
            None => {
                let _ = writeln!(out, "{}  {} => end", indent, code);
            }
        }
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
