//! Token emission for the `Holen` and `Setzer` derives.
//!
//! Each submodule builds one method family; the shared helper here renders
//! `on_method`/`on_param` metas back into outer attributes in the order
//! the user listed them.

mod getter;
mod setter;

pub(crate) use getter::build_getters;
pub(crate) use setter::build_setters;

use proc_macro2::TokenStream;
use quote::quote;
use syn::Meta;

/// Renders a meta list as outer attributes.
fn attr_tokens(metas: &[Meta]) -> TokenStream {
    quote! { #( #[#metas] )* }
}

/// Resolves the ident of a named field, erroring rather than panicking on
/// the (unreachable after `parse_input`) unnamed case.
fn field_ident(field: &syn::Field) -> syn::Result<&syn::Ident> {
    field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))
}
