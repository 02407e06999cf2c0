//! Expansion entry points for the `Holen` and `Setzer` derives.
//!
//! Expansion runs in two phases mirroring the module layout: `parse`
//! gathers the struct shape and directive attributes, failing fast with
//! useful errors, and `build` emits the accessor or mutator methods. The
//! entry points here only stitch the phases together and wrap the emitted
//! methods in a single inherent `impl` block.

mod build;
mod crate_path;
mod parse;

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use build::{build_getters, build_setters};
use parse::{DeriveTarget, accessor_struct_attrs, mutator_struct_attrs, parse_input};

/// Expands `#[derive(Holen)]` into an impl block of read accessors.
pub(crate) fn expand_holen(input: &DeriveInput) -> syn::Result<TokenStream> {
    let target = parse_input(input, "Holen")?;
    let struct_attrs = accessor_struct_attrs(&input.attrs)?;
    let methods = build_getters(&target, &struct_attrs)?;
    Ok(wrap_impl(&target, &methods))
}

/// Expands `#[derive(Setzer)]` into an impl block of write accessors.
pub(crate) fn expand_setzer(input: &DeriveInput) -> syn::Result<TokenStream> {
    let target = parse_input(input, "Setzer")?;
    let struct_attrs = mutator_struct_attrs(&input.attrs)?;
    let methods = build_setters(&target, &struct_attrs)?;
    Ok(wrap_impl(&target, &methods))
}

/// Wraps generated methods in an inherent impl honouring the generics of
/// the deriving struct. An empty method list still yields the impl block
/// so that deriving on an empty struct stays valid.
fn wrap_impl(target: &DeriveTarget, methods: &[TokenStream]) -> TokenStream {
    let ident = &target.ident;
    let (impl_generics, ty_generics, where_clause) = target.generics.split_for_impl();
    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #( #methods )*
        }
    }
}
