//! Access levels recognised by the `vis` option.

use proc_macro2::{Span, TokenStream};
use quote::quote;

/// Visibility of a generated method.
///
/// `Private` yields a plain inherent method; `None` suppresses generation
/// for the field altogether, which is how a struct-level derive expresses
/// field-granular opt-out (and, with a struct-level `vis = "none"`,
/// per-field opt-in).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Access {
    /// `pub` — the default when `vis` is omitted everywhere.
    #[default]
    Public,
    /// `pub(super)`.
    Super,
    /// `pub(crate)`.
    Crate,
    /// No qualifier.
    Private,
    /// No method at all.
    None,
}

impl Access {
    pub(crate) fn parse(s: &str, span: Span) -> syn::Result<Self> {
        match s {
            "public" => Ok(Self::Public),
            "super" => Ok(Self::Super),
            "crate" => Ok(Self::Crate),
            "private" => Ok(Self::Private),
            "none" => Ok(Self::None),
            _ => Err(syn::Error::new(
                span,
                format!(
                    "unknown vis '{s}'; expected one of \"public\", \"super\", \"crate\", \"private\", or \"none\""
                ),
            )),
        }
    }

    /// Tokens for the visibility qualifier; empty for private methods.
    pub(crate) fn qualifier(self) -> TokenStream {
        match self {
            Self::Public => quote! { pub },
            Self::Super => quote! { pub(super) },
            Self::Crate => quote! { pub(crate) },
            Self::Private | Self::None => TokenStream::new(),
        }
    }
}
