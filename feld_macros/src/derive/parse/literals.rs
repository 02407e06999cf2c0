//! Literal parsing helpers for directive attributes.

use syn::LitStr;
use syn::meta::ParseNestedMeta;

/// Parses a string literal from a `key = "..."` option.
pub(crate) fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    let lit: syn::Lit = meta.value()?.parse()?;
    match lit {
        syn::Lit::Str(s) => Ok(s),
        other => Err(syn::Error::new(
            other.span(),
            format!("{key} must be a string"),
        )),
    }
}
