// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registration code generation
//!
//! Each action becomes one `register_action` call whose closure builds the
//! processor tree:
//!
//! ```text
//! register_action("order.create", || {
//!     Some(ProcessorWrap::new(
//!         Box::new(order::Validate::default()),
//!         Some(HashMap::from([
//!             ("RC_FAIL", None),
//!             ("RC_NORMAL", Some(ProcessorWrap::new(Box::new(order::Persist::default()), None))),
//!         ])),
//!     ))
//! });
//! ```
//!
//! Every node is validated right before its code is produced, and its
//! module is bound in the caller's [`ImportSet`].

use crate::imports::{ImportSet, ModuleKind};
use crate::validator::{ReferenceValidator, UnresolvedReference};
use actc_core::{Action, CronJobDefinition, ProcessorNode};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Turns validated definitions into registration statements
#[derive(Debug)]
pub struct Generator {
    validator: ReferenceValidator,
}

impl Generator {
    pub fn new(validator: ReferenceValidator) -> Self {
        Self { validator }
    }

    /// `register_action("<name>", || <root>);`
    pub fn generate_action(
        &mut self,
        action: &Action,
        imports: &mut ImportSet,
    ) -> Result<TokenStream, UnresolvedReference> {
        let name = &action.name;
        let root = self.generate_next(&action.name, action.root.as_ref(), imports)?;
        Ok(quote! {
            register_action(#name, || #root);
        })
    }

    /// `register_cron_job("<pkg.Type>", || Box::new(<pkg>::<Type>::default()));`
    pub fn generate_job(&mut self, job: &CronJobDefinition, imports: &mut ImportSet) -> TokenStream {
        let name = job.qualified_name();
        let local = format_ident!("{}", imports.bind(ModuleKind::Job, &job.module));
        let ty = format_ident!("{}", job.type_name);
        quote! {
            register_cron_job(#name, || Box::new(#local::#ty::default()));
        }
    }

    /// `None`, or `Some(<node>)`
    fn generate_next(
        &mut self,
        action: &str,
        node: Option<&ProcessorNode>,
        imports: &mut ImportSet,
    ) -> Result<TokenStream, UnresolvedReference> {
        match node {
            None => Ok(quote! { None }),
            Some(node) => {
                let wrap = self.generate_node(action, node, imports)?;
                Ok(quote! { Some(#wrap) })
            }
        }
    }

    fn generate_node(
        &mut self,
        action: &str,
        node: &ProcessorNode,
        imports: &mut ImportSet,
    ) -> Result<TokenStream, UnresolvedReference> {
        self.validator.validate(action, node)?;

        let local = format_ident!("{}", imports.bind(ModuleKind::Processor, &node.name.module()));
        let ty = format_ident!("{}", node.name.type_name());

        let next = if node.is_leaf() {
            quote! { None }
        } else {
            let mut entries = Vec::with_capacity(node.children.len());
            for (code, child) in &node.children {
                let child = self.generate_next(action, child.as_ref(), imports)?;
                entries.push(quote! { (#code, #child) });
            }
            quote! { Some(HashMap::from([#(#entries),*])) }
        };

        Ok(quote! {
            ProcessorWrap::new(Box::new(#local::#ty::default()), #next)
        })
    }
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
