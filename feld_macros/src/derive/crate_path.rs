//! Crate path resolution for dependency aliasing support.
//!
//! Lazy accessor bodies call `feld::Lazy::get_or_init`, which breaks when
//! the consumer renames the `feld` dependency. The `crate = "..."` struct
//! option supplies the replacement path; this helper turns it into the
//! tokens spliced in front of `Lazy`.

use proc_macro2::TokenStream;
use quote::quote;

/// Tokens for the runtime crate in generated accessor bodies.
///
/// Without an override this is the plain `feld` name; with
/// `#[holen(crate = "...")]` it is whatever path the user supplied, which
/// may span several segments when the runtime is re-exported through an
/// intermediate module.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { feld }, |path| quote! { #path })
}
