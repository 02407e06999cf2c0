//! Tests for `#[setzer(...)]` parsing behaviour.

use super::super::*;
use anyhow::{Result, anyhow, ensure};
use syn::{DeriveInput, parse_quote};

fn first_field(input: &DeriveInput) -> Result<&syn::Field> {
    match &input.data {
        syn::Data::Struct(data) => data
            .fields
            .iter()
            .next()
            .ok_or_else(|| anyhow!("struct has no fields")),
        _ => Err(anyhow!("expected a struct")),
    }
}

#[test]
fn parses_method_and_param_metas() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Demo {
            #[setzer(vis = "super", on_method(inline), on_param(allow(unused)))]
            value: String,
        }
    };
    let attrs = mutator_field_attrs(first_field(&input)?)
        .map_err(|err| anyhow!(err))?
        .ok_or_else(|| anyhow!("missing field directive"))?;
    ensure!(attrs.vis == Some(Access::Super), "expected super vis");
    ensure!(attrs.on_method.len() == 1, "expected one method meta");
    ensure!(attrs.on_param.len() == 1, "expected one param meta");
    Ok(())
}

#[test]
fn struct_level_defaults_apply() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[setzer(vis = "none")]
        struct Demo {
            value: String,
        }
    };
    let struct_attrs = mutator_struct_attrs(&input.attrs).map_err(|err| anyhow!(err))?;
    ensure!(
        struct_attrs.defaults.vis == Some(Access::None),
        "struct-level vis should opt every field out"
    );
    let field_attrs = mutator_field_attrs(first_field(&input)?).map_err(|err| anyhow!(err))?;
    ensure!(field_attrs.is_none(), "field carries no directive");
    Ok(())
}

#[test]
fn crate_override_is_rejected() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[setzer(crate = "my_feld")]
        struct Demo {
            value: String,
        }
    };
    // Mutators never reference the runtime crate, so accepting the
    // option would leave it silently inert.
    ensure!(
        mutator_struct_attrs(&input.attrs).is_err(),
        "`crate` must error on `setzer`"
    );
    Ok(())
}

#[test]
fn struct_level_rename_is_rejected() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[setzer(rename = "store")]
        struct Demo {
            value: String,
        }
    };
    ensure!(
        mutator_struct_attrs(&input.attrs).is_err(),
        "a struct-level rename would duplicate one method name per field"
    );
    Ok(())
}

#[test]
fn rename_must_be_an_identifier() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Demo {
            #[setzer(rename = "not an ident")]
            value: String,
        }
    };
    ensure!(
        mutator_field_attrs(first_field(&input)?).is_err(),
        "a rename that is not an identifier must be rejected"
    );
    Ok(())
}
