//! Type introspection helpers.
//!
//! Lazy accessors require their host field to be declared as
//! `feld::Lazy<T>`; the helper here recognises that wrapper and surfaces
//! the memoised type `T` for the generated signature.

use syn::{GenericArgument, PathArguments, Type};

/// Returns the memoised type `T` if `ty` is `Lazy<T>`.
///
/// The check is shallow: it inspects only the final path segment, so
/// qualified forms such as `feld::Lazy<T>` and aliased crate paths match
/// equally. It is not recursive; `Lazy<Vec<T>>` yields `Vec<T>`.
pub(crate) fn lazy_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(p) = ty else {
        return None;
    };
    let last = p.path.segments.last()?;
    if last.ident != "Lazy" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &last.arguments else {
        return None;
    };
    let first = args.args.first()?;
    let GenericArgument::Type(inner) = first else {
        return None;
    };
    Some(inner)
}
