//! Procedural macros for `feld`.
//!
//! [`Holen`] generates a read accessor for every named field of a struct;
//! [`Setzer`] generates the matching write accessor. Both derives read
//! their configuration from `#[holen(...)]` / `#[setzer(...)]` attributes,
//! which may appear on the struct (setting the default for every field) or
//! on an individual field (replacing the struct-level configuration for
//! that field entirely).

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro generating a read accessor for every named field.
///
/// By default each field `foo: T` gains `pub fn foo(&self) -> &T`.
/// Recognised options, at struct or field level:
///
/// - `vis = "public" | "super" | "crate" | "private" | "none"` — visibility
///   of the generated accessor; `"none"` suppresses it.
/// - `on_method(...)` — attributes copied onto the generated accessor.
/// - `copy` — return the field by value rather than by reference.
/// - `lazy, init = <expr>` — memoise `<expr>` on first access; the field
///   must be declared as `feld::Lazy<T>`.
/// - `rename = "name"` — override the generated method name (field level
///   only).
/// - `skip` — shorthand for `vis = "none"`.
///
/// The struct-level attribute additionally accepts `crate = "path"` to
/// redirect references to the `feld` crate when it is renamed in the
/// consumer's `Cargo.toml`.
#[proc_macro_derive(Holen, attributes(holen))]
pub fn derive_holen(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand_holen(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive macro generating a write accessor for every named field.
///
/// By default each field `foo: T` gains `pub fn set_foo(&mut self, value: T)`.
/// Recognised options, at struct or field level:
///
/// - `vis = "public" | "super" | "crate" | "private" | "none"` — visibility
///   of the generated mutator; `"none"` suppresses it.
/// - `on_method(...)` — attributes copied onto the generated mutator.
/// - `on_param(...)` — attributes copied onto the mutator's parameter.
/// - `rename = "name"` — override the generated method name (field level
///   only).
/// - `skip` — shorthand for `vis = "none"`.
#[proc_macro_derive(Setzer, attributes(setzer))]
pub fn derive_setzer(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand_setzer(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
