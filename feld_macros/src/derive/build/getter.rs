//! Accessor generation.
//!
//! One method per non-suppressed field. Plain accessors borrow the field;
//! `copy` returns it by value; `lazy` delegates to `feld::Lazy` so the
//! initialiser runs at most once. Generated accessors carry `#[must_use]`
//! unless the user supplies `on_method` metas of their own, in which case
//! the user's list is emitted verbatim to avoid conflicting attributes.

use proc_macro2::TokenStream;
use quote::quote;

use super::{attr_tokens, field_ident};
use crate::derive::crate_path;
use crate::derive::parse::{
    Access, AccessorAttrs, DeriveTarget, StructAttrs, accessor_field_attrs, lazy_inner,
};

/// Builds the accessor for every field of `target`, skipping fields whose
/// effective visibility is `none`.
pub(crate) fn build_getters(
    target: &DeriveTarget,
    struct_attrs: &StructAttrs<AccessorAttrs>,
) -> syn::Result<Vec<TokenStream>> {
    let feld = crate_path::resolve(struct_attrs.crate_path.as_ref());
    let mut methods = Vec::new();
    for field in &target.fields {
        let attrs = accessor_field_attrs(field)?.unwrap_or_else(|| struct_attrs.defaults.clone());
        if let Some(tokens) = build_getter(field, &attrs, &feld)? {
            methods.push(tokens);
        }
    }
    Ok(methods)
}

fn build_getter(
    field: &syn::Field,
    attrs: &AccessorAttrs,
    feld: &TokenStream,
) -> syn::Result<Option<TokenStream>> {
    let vis = attrs.vis.unwrap_or_default();
    if vis == Access::None {
        return Ok(None);
    }
    let ident = field_ident(field)?;
    validate(ident, attrs)?;

    let name = attrs.rename.clone().unwrap_or_else(|| ident.clone());
    let qualifier = vis.qualifier();
    let method_attrs = attr_tokens(&attrs.on_method);
    let must_use = if attrs.on_method.is_empty() {
        quote! { #[must_use] }
    } else {
        TokenStream::new()
    };
    let ty = &field.ty;

    if attrs.lazy {
        let Some(inner) = lazy_inner(ty) else {
            return Err(syn::Error::new_spanned(
                ty,
                "lazy accessors require the field to be declared as `feld::Lazy<T>`",
            ));
        };
        let init = attrs.init.as_ref().ok_or_else(|| {
            syn::Error::new_spanned(ident, "lazy accessors require an `init = <expr>` option")
        })?;
        return Ok(Some(quote! {
            #method_attrs
            #must_use
            #qualifier fn #name(&self) -> &#inner {
                #feld::Lazy::get_or_init(&self.#ident, || #init)
            }
        }));
    }

    let tokens = if attrs.copy {
        quote! {
            #method_attrs
            #must_use
            #qualifier fn #name(&self) -> #ty {
                self.#ident
            }
        }
    } else {
        quote! {
            #method_attrs
            #must_use
            #qualifier fn #name(&self) -> &#ty {
                &self.#ident
            }
        }
    };
    Ok(Some(tokens))
}

/// Rejects inconsistent option pairings on the effective configuration.
fn validate(ident: &syn::Ident, attrs: &AccessorAttrs) -> syn::Result<()> {
    if attrs.init.is_some() && !attrs.lazy {
        return Err(syn::Error::new_spanned(
            ident,
            "`init` is only meaningful together with `lazy`",
        ));
    }
    if attrs.lazy && attrs.copy {
        return Err(syn::Error::new_spanned(
            ident,
            "`lazy` and `copy` cannot be combined",
        ));
    }
    Ok(())
}
