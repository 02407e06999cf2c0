//! Input parsing for the `Holen` and `Setzer` derives.
//!
//! This module gathers the struct identifier, generics, and named fields in
//! one pass so macro expansion can fail fast with useful errors.

use syn::{Data, DeriveInput, Fields};

/// The struct a directive derive was applied to.
pub(crate) struct DeriveTarget {
    pub ident: syn::Ident,
    pub generics: syn::Generics,
    pub fields: Vec<syn::Field>,
}

/// Gathers information from the user-provided struct.
///
/// Rejects enums, unions, and structs without named fields; `derive_name`
/// keeps the diagnostics attributable to the derive the user wrote.
pub(crate) fn parse_input(input: &DeriveInput, derive_name: &str) -> syn::Result<DeriveTarget> {
    let ident = input.ident.clone();
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().cloned().collect::<Vec<_>>(),
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    format!("{derive_name} requires named fields"),
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &ident,
                format!("{derive_name} can only be derived for structs"),
            ));
        }
    };

    Ok(DeriveTarget {
        ident,
        generics: input.generics.clone(),
        fields,
    })
}
