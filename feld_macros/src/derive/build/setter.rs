//! Mutator generation.
//!
//! One `set_*` method per non-suppressed field, assigning the single
//! `value` parameter. `on_method` metas land on the method, `on_param`
//! metas on the parameter; rustc itself polices which attributes are
//! legal in parameter position.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::{attr_tokens, field_ident};
use crate::derive::parse::{
    Access, DeriveTarget, MutatorAttrs, StructAttrs, mutator_field_attrs,
};

/// Builds the mutator for every field of `target`, skipping fields whose
/// effective visibility is `none`.
pub(crate) fn build_setters(
    target: &DeriveTarget,
    struct_attrs: &StructAttrs<MutatorAttrs>,
) -> syn::Result<Vec<TokenStream>> {
    let mut methods = Vec::new();
    for field in &target.fields {
        let attrs = mutator_field_attrs(field)?.unwrap_or_else(|| struct_attrs.defaults.clone());
        if let Some(tokens) = build_setter(field, &attrs)? {
            methods.push(tokens);
        }
    }
    Ok(methods)
}

fn build_setter(field: &syn::Field, attrs: &MutatorAttrs) -> syn::Result<Option<TokenStream>> {
    let vis = attrs.vis.unwrap_or_default();
    if vis == Access::None {
        return Ok(None);
    }
    let ident = field_ident(field)?;
    let name = attrs
        .rename
        .clone()
        .unwrap_or_else(|| format_ident!("set_{}", ident));
    let qualifier = vis.qualifier();
    let method_attrs = attr_tokens(&attrs.on_method);
    let param_attrs = attr_tokens(&attrs.on_param);
    let ty = &field.ty;

    Ok(Some(quote! {
        #method_attrs
        #qualifier fn #name(&mut self, #param_attrs value: #ty) {
            self.#ident = value;
        }
    }))
}
