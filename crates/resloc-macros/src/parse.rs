//! Attribute parsing for the derive macros.
//!
//! Turns a `syn::DeriveInput` into the structures in [`crate::input`].
//! Only shape errors are reported here (wrong item kind, unknown attribute);
//! key rules are checked in [`crate::validate`].

use resloc_keys::unraw;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Data, DeriveInput, Error, Fields, FieldsNamed, LitStr};

use crate::input::{
    ConstantInput, EnumInput, FieldInput, FieldKind, PlaceholderField, PlaceholdersInput,
    ResourceInput, Spanned, VariantInput, VariantShape,
};
use crate::validate::unknown_attribute;

const RESOURCE_ATTRIBUTES: &[&str] = &["key_prefix", "constant"];
const CONSTANT_ATTRIBUTES: &[&str] = &["name", "default"];
const FIELD_ATTRIBUTES: &[&str] = &["rename", "default", "nested", "collection", "hidden"];
const VARIANT_ATTRIBUTES: &[&str] = &["rename", "default"];
const PLACEHOLDER_ATTRIBUTES: &[&str] = &["rename", "skip"];

/// Parse the input of `#[derive(LocalizedResource)]`.
pub fn parse_resource(input: &DeriveInput) -> syn::Result<ResourceInput> {
    reject_generics(input, "LocalizedResource")?;
    let named = named_fields(input, "LocalizedResource")?;

    let mut key_prefix = None;
    let mut constants = Vec::new();
    for attr in resource_attributes(&input.attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("key_prefix") {
                key_prefix = Some(string_value(&meta)?);
                Ok(())
            } else if meta.path.is_ident("constant") {
                constants.push(parse_constant(&meta)?);
                Ok(())
            } else {
                Err(unknown_attribute(&meta.path, RESOURCE_ATTRIBUTES))
            }
        })?;
    }

    let fields = named
        .named
        .iter()
        .map(|field| {
            let ident = field
                .ident
                .clone()
                .ok_or_else(|| Error::new_spanned(field, "expected a named field"))?;
            let mut parsed = FieldInput {
                segment: Spanned::new(unraw(&ident.to_string()), ident.span()),
                ident,
                ty: field.ty.clone(),
                kind: FieldKind::Scalar,
                hidden: false,
                default: None,
            };
            for attr in resource_attributes(&field.attrs) {
                attr.parse_nested_meta(|meta| parse_field_attribute(&meta, &mut parsed))?;
            }
            Ok(parsed)
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(ResourceInput {
        ident: input.ident.clone(),
        key_prefix,
        fields,
        constants,
    })
}

fn parse_field_attribute(meta: &ParseNestedMeta<'_>, field: &mut FieldInput) -> syn::Result<()> {
    if meta.path.is_ident("rename") {
        field.segment = string_value(meta)?;
    } else if meta.path.is_ident("default") {
        field.default = Some(string_value(meta)?);
    } else if meta.path.is_ident("nested") {
        set_kind(meta, field, FieldKind::Nested)?;
    } else if meta.path.is_ident("collection") {
        set_kind(meta, field, FieldKind::Collection)?;
    } else if meta.path.is_ident("hidden") {
        field.hidden = true;
    } else {
        return Err(unknown_attribute(&meta.path, FIELD_ATTRIBUTES));
    }
    Ok(())
}

fn set_kind(meta: &ParseNestedMeta<'_>, field: &mut FieldInput, kind: FieldKind) -> syn::Result<()> {
    if field.kind != FieldKind::Scalar && field.kind != kind {
        return Err(meta.error("a field cannot be both `nested` and `collection`"));
    }
    field.kind = kind;
    Ok(())
}

fn parse_constant(meta: &ParseNestedMeta<'_>) -> syn::Result<ConstantInput> {
    let mut name = None;
    let mut default = None;
    meta.parse_nested_meta(|inner| {
        if inner.path.is_ident("name") {
            name = Some(string_value(&inner)?);
            Ok(())
        } else if inner.path.is_ident("default") {
            default = Some(string_value(&inner)?);
            Ok(())
        } else {
            Err(unknown_attribute(&inner.path, CONSTANT_ATTRIBUTES))
        }
    })?;

    let segment = name.ok_or_else(|| meta.error("`constant` requires `name = \"...\"`"))?;
    Ok(ConstantInput { segment, default })
}

/// Parse the input of `#[derive(LocalizedEnum)]`.
pub fn parse_enum(input: &DeriveInput) -> syn::Result<EnumInput> {
    reject_generics(input, "LocalizedEnum")?;
    let Data::Enum(data) = &input.data else {
        return Err(Error::new_spanned(
            &input.ident,
            "LocalizedEnum can only be derived for enums",
        ));
    };
    if data.variants.is_empty() {
        return Err(Error::new_spanned(
            &input.ident,
            "LocalizedEnum requires at least one variant",
        ));
    }

    let mut key_prefix = None;
    for attr in resource_attributes(&input.attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("key_prefix") {
                key_prefix = Some(string_value(&meta)?);
                Ok(())
            } else {
                Err(unknown_attribute(&meta.path, &["key_prefix"]))
            }
        })?;
    }

    let variants = data
        .variants
        .iter()
        .map(|variant| {
            let shape = match variant.fields {
                Fields::Unit => VariantShape::Unit,
                Fields::Unnamed(_) => VariantShape::Tuple,
                Fields::Named(_) => VariantShape::Struct,
            };
            let mut segment = Spanned::new(
                unraw(&variant.ident.to_string()),
                variant.ident.span(),
            );
            let mut default = None;
            for attr in resource_attributes(&variant.attrs) {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("rename") {
                        segment = string_value(&meta)?;
                        Ok(())
                    } else if meta.path.is_ident("default") {
                        default = Some(string_value(&meta)?);
                        Ok(())
                    } else {
                        Err(unknown_attribute(&meta.path, VARIANT_ATTRIBUTES))
                    }
                })?;
            }
            Ok(VariantInput {
                ident: variant.ident.clone(),
                shape,
                segment,
                default,
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(EnumInput {
        ident: input.ident.clone(),
        key_prefix,
        variants,
    })
}

/// Parse the input of `#[derive(Placeholders)]`.
pub fn parse_placeholders(input: &DeriveInput) -> syn::Result<PlaceholdersInput> {
    reject_generics(input, "Placeholders")?;
    let named = named_fields(input, "Placeholders")?;

    let mut fields = Vec::new();
    for field in &named.named {
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        let mut name = Some(Spanned::new(unraw(&ident.to_string()), ident.span()));
        for attr in field.attrs.iter().filter(|a| a.path().is_ident("placeholder")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    name = Some(string_value(&meta)?);
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    name = None;
                    Ok(())
                } else {
                    Err(unknown_attribute(&meta.path, PLACEHOLDER_ATTRIBUTES))
                }
            })?;
        }
        if let Some(name) = name {
            fields.push(PlaceholderField { ident, name });
        }
    }

    Ok(PlaceholdersInput {
        ident: input.ident.clone(),
        fields,
    })
}

// =============================================================================
// Helpers
// =============================================================================

fn resource_attributes(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|a| a.path().is_ident("resource"))
}

fn string_value(meta: &ParseNestedMeta<'_>) -> syn::Result<Spanned> {
    let lit: LitStr = meta.value()?.parse()?;
    Ok(Spanned::new(lit.value(), lit.span()))
}

fn reject_generics(input: &DeriveInput, derive: &str) -> syn::Result<()> {
    if input.generics.params.is_empty() {
        Ok(())
    } else {
        Err(Error::new_spanned(
            &input.generics,
            format!("{derive} cannot be derived for generic types"),
        ))
    }
}

fn named_fields<'a>(input: &'a DeriveInput, derive: &str) -> syn::Result<&'a FieldsNamed> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => Ok(named),
            Fields::Unnamed(_) | Fields::Unit => Err(Error::new_spanned(
                &input.ident,
                format!("{derive} requires a struct with named fields"),
            )),
        },
        Data::Enum(_) | Data::Union(_) => Err(Error::new_spanned(
            &input.ident,
            format!("{derive} can only be derived for structs"),
        )),
    }
}
