// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Module imports collected during generation

use actc_core::ModuleRef;
use std::collections::{BTreeMap, BTreeSet};

/// Names the artifact defines or imports itself
const ARTIFACT_NAMES: &[&str] = &[
    "init",
    "register_action",
    "register_cron_job",
    "ProcessorWrap",
    "HashMap",
    "std",
    "core",
];

/// Which tree a module lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModuleKind {
    Job,
    Processor,
}

impl ModuleKind {
    fn alias_prefix(self) -> &'static str {
        match self {
            ModuleKind::Job => "job",
            ModuleKind::Processor => "processor",
        }
    }
}

/// Every module the artifact imports, each bound to a unique local name.
///
/// A module keeps its leaf as local name unless another module already
/// took it, in which case it gets an alias built from its full path.
/// Iteration is sorted by kind, then module path.
#[derive(Debug, Clone)]
pub struct ImportSet {
    bindings: BTreeMap<(ModuleKind, ModuleRef), String>,
    taken: BTreeSet<String>,
}

impl ImportSet {
    /// An empty set. `runtime` is the runtime crate the artifact uses.
    pub fn new(runtime: &str) -> Self {
        let taken = ARTIFACT_NAMES
            .iter()
            .copied()
            .chain(runtime.split("::").next())
            .map(String::from)
            .collect();
        Self {
            bindings: BTreeMap::new(),
            taken,
        }
    }

    /// Record a module and return its local name.
    ///
    /// Binding the same module twice returns the same name.
    pub fn bind(&mut self, kind: ModuleKind, module: &ModuleRef) -> String {
        let key = (kind, module.clone());
        if let Some(local) = self.bindings.get(&key) {
            return local.clone();
        }

        let local = self.free_name(kind, module);
        self.taken.insert(local.clone());
        self.bindings.insert(key, local.clone());
        local
    }

    fn free_name(&self, kind: ModuleKind, module: &ModuleRef) -> String {
        if let Some(leaf) = module.leaf() {
            if !self.taken.contains(leaf) {
                return leaf.to_string();
            }
        }

        let alias = std::iter::once(kind.alias_prefix())
            .chain(module.segments().iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("_");
        if !self.taken.contains(&alias) {
            return alias;
        }
        (2..)
            .map(|n| format!("{}_{}", alias, n))
            .find(|candidate| !self.taken.contains(candidate))
            .unwrap_or(alias)
    }

    /// Modules of one kind with their local names, sorted by path
    pub fn modules(&self, kind: ModuleKind) -> impl Iterator<Item = (&ModuleRef, &str)> {
        self.bindings
            .iter()
            .filter(move |((k, _), _)| *k == kind)
            .map(|((_, module), local)| (module, local.as_str()))
    }

    /// Referenced processor modules
    pub fn processor_modules(&self) -> BTreeSet<ModuleRef> {
        self.modules(ModuleKind::Processor)
            .map(|(module, _)| module.clone())
            .collect()
    }

    /// Whether any processor is referenced (the artifact then needs the
    /// runtime's node type)
    pub fn has_processors(&self) -> bool {
        self.modules(ModuleKind::Processor).next().is_some()
    }
}

#[cfg(test)]
#[path = "imports_tests.rs"]
mod tests;
