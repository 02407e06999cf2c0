//! Attribute parsing for the `Holen` and `Setzer` derives.
//!
//! Directive attributes are walked with [`syn::Attribute::parse_nested_meta`]
//! and collected into plain option structs. Unknown keys are rejected rather
//! than discarded: for an accessor generator a silently ignored typo such as
//! `lasy` would change the generated surface, so strictness is the safer
//! default here.

use syn::meta::ParseNestedMeta;
use syn::parse::Parse;
use syn::parenthesized;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, Meta, Token};

mod access;
mod input;
mod literals;
#[cfg(test)]
mod tests;
mod type_utils;

pub(crate) use access::Access;
pub(crate) use input::{DeriveTarget, parse_input};
use literals::lit_str;
pub(crate) use type_utils::lazy_inner;

/// Options recognised by `#[holen(...)]` at struct or field level.
///
/// - `vis` selects the visibility of the generated accessor.
/// - `on_method` lists attribute metas copied onto the generated method.
/// - `lazy`/`init` switch the accessor to a memoising body.
/// - `copy` returns the field by value instead of by reference.
/// - `rename` overrides the generated method name.
#[derive(Default, Clone)]
pub(crate) struct AccessorAttrs {
    pub vis: Option<Access>,
    pub on_method: Vec<Meta>,
    pub lazy: bool,
    pub copy: bool,
    pub init: Option<Expr>,
    pub rename: Option<syn::Ident>,
}

/// Options recognised by `#[setzer(...)]` at struct or field level.
#[derive(Default, Clone)]
pub(crate) struct MutatorAttrs {
    pub vis: Option<Access>,
    pub on_method: Vec<Meta>,
    pub on_param: Vec<Meta>,
    pub rename: Option<syn::Ident>,
}

/// Struct-level attributes: the per-field defaults plus options that make
/// no sense on an individual field.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs<T> {
    pub defaults: T,
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[holen(crate = "my_alias")]`, generated code
    /// references runtime support through `my_alias::` instead of `feld::`.
    pub crate_path: Option<syn::Path>,
}

/// Iterate all directive attributes named `name` once and apply a callback.
/// Returns whether any such attribute was present.
fn parse_directive<F>(attrs: &[Attribute], name: &str, mut f: F) -> syn::Result<bool>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    let mut seen = false;
    for attr in attrs.iter().filter(|a| a.path().is_ident(name)) {
        seen = true;
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(seen)
}

/// Error for a key no directive recognises, naming the directive so the
/// message points at the right attribute.
fn unknown_option(meta: &ParseNestedMeta, directive: &str) -> syn::Error {
    let name = meta
        .path
        .get_ident()
        .map_or_else(|| "<path>".to_owned(), ToString::to_string);
    syn::Error::new_spanned(&meta.path, format!("unrecognised `{directive}` option `{name}`"))
}

/// Parses a bare flag or an explicit `= <bool>` form.
fn flag_value(meta: &ParseNestedMeta) -> syn::Result<bool> {
    if meta.input.peek(Token![=]) {
        Ok(meta.value()?.parse::<syn::LitBool>()?.value)
    } else {
        Ok(true)
    }
}

/// Parses a parenthesised, comma-separated list of attribute metas,
/// preserving order.
fn meta_list(meta: &ParseNestedMeta) -> syn::Result<Vec<Meta>> {
    let content;
    parenthesized!(content in meta.input);
    let parsed: Punctuated<Meta, Token![,]> = content.parse_terminated(Meta::parse, Token![,])?;
    Ok(parsed.into_iter().collect())
}

fn parse_vis(meta: &ParseNestedMeta) -> syn::Result<Access> {
    let lit = lit_str(meta, "vis")?;
    Access::parse(&lit.value(), lit.span())
}

fn parse_rename(meta: &ParseNestedMeta) -> syn::Result<syn::Ident> {
    let lit = lit_str(meta, "rename")?;
    syn::parse_str::<syn::Ident>(&lit.value())
        .map_err(|_| syn::Error::new(lit.span(), "rename must be a valid identifier"))
}

fn parse_crate_path(meta: &ParseNestedMeta) -> syn::Result<syn::Path> {
    let lit = lit_str(meta, "crate")?;
    syn::parse_str(&lit.value()).map_err(|e| syn::Error::new(lit.span(), e))
}

impl AccessorAttrs {
    /// Applies one nested meta, returning whether the key was recognised.
    fn apply(&mut self, meta: &ParseNestedMeta) -> syn::Result<bool> {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("vis") => {
                self.vis = Some(parse_vis(meta)?);
            }
            Some("skip") => {
                if flag_value(meta)? {
                    self.vis = Some(Access::None);
                }
            }
            Some("on_method") => {
                self.on_method.extend(meta_list(meta)?);
            }
            Some("lazy") => {
                self.lazy = flag_value(meta)?;
            }
            Some("copy") => {
                self.copy = flag_value(meta)?;
            }
            Some("init") => {
                self.init = Some(meta.value()?.parse::<Expr>()?);
            }
            Some("rename") => {
                self.rename = Some(parse_rename(meta)?);
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl MutatorAttrs {
    /// Applies one nested meta, returning whether the key was recognised.
    fn apply(&mut self, meta: &ParseNestedMeta) -> syn::Result<bool> {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("vis") => {
                self.vis = Some(parse_vis(meta)?);
            }
            Some("skip") => {
                if flag_value(meta)? {
                    self.vis = Some(Access::None);
                }
            }
            Some("on_method") => {
                self.on_method.extend(meta_list(meta)?);
            }
            Some("on_param") => {
                self.on_param.extend(meta_list(meta)?);
            }
            Some("rename") => {
                self.rename = Some(parse_rename(meta)?);
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Error for `rename` in struct-level position, where one name would be
/// emitted for every field and rustc would report a confusing duplicate
/// definition instead.
fn struct_level_rename(meta: &ParseNestedMeta) -> syn::Error {
    syn::Error::new_spanned(
        &meta.path,
        "`rename` applies to a single field and cannot be set at struct level",
    )
}

/// Extracts `#[holen(...)]` metadata applied to the struct itself.
pub(crate) fn accessor_struct_attrs(
    attrs: &[Attribute],
) -> syn::Result<StructAttrs<AccessorAttrs>> {
    let mut out = StructAttrs::<AccessorAttrs>::default();
    parse_directive(attrs, "holen", |meta| {
        if meta.path.is_ident("rename") {
            return Err(struct_level_rename(meta));
        }
        if out.defaults.apply(meta)? {
            return Ok(());
        }
        if meta.path.is_ident("crate") {
            out.crate_path = Some(parse_crate_path(meta)?);
            return Ok(());
        }
        Err(unknown_option(meta, "holen"))
    })?;
    Ok(out)
}

/// Extracts `#[setzer(...)]` metadata applied to the struct itself.
///
/// `crate = "..."` is rejected here: generated mutators never reference
/// the runtime crate, so accepting the option would leave it silently
/// inert.
pub(crate) fn mutator_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs<MutatorAttrs>> {
    let mut out = StructAttrs::<MutatorAttrs>::default();
    parse_directive(attrs, "setzer", |meta| {
        if meta.path.is_ident("rename") {
            return Err(struct_level_rename(meta));
        }
        if meta.path.is_ident("crate") {
            return Err(syn::Error::new_spanned(
                &meta.path,
                "`crate` is only supported on `#[holen(...)]`; \
                 generated mutators do not reference the `feld` crate",
            ));
        }
        if out.defaults.apply(meta)? {
            return Ok(());
        }
        Err(unknown_option(meta, "setzer"))
    })?;
    Ok(out)
}

/// Extracts `#[holen(...)]` metadata from a single field.
///
/// Returns `None` when the field carries no directive at all, in which
/// case the struct-level defaults apply. A field-level directive replaces
/// the struct-level configuration entirely, so unset options fall back to
/// the schema defaults rather than to the struct attribute.
pub(crate) fn accessor_field_attrs(field: &syn::Field) -> syn::Result<Option<AccessorAttrs>> {
    let mut out = AccessorAttrs::default();
    let seen = parse_directive(&field.attrs, "holen", |meta| {
        if out.apply(meta)? {
            Ok(())
        } else {
            Err(unknown_option(meta, "holen"))
        }
    })?;
    Ok(seen.then_some(out))
}

/// Extracts `#[setzer(...)]` metadata from a single field.
///
/// Same override semantics as [`accessor_field_attrs`].
pub(crate) fn mutator_field_attrs(field: &syn::Field) -> syn::Result<Option<MutatorAttrs>> {
    let mut out = MutatorAttrs::default();
    let seen = parse_directive(&field.attrs, "setzer", |meta| {
        if out.apply(meta)? {
            Ok(())
        } else {
            Err(unknown_option(meta, "setzer"))
        }
    })?;
    Ok(seen.then_some(out))
}
