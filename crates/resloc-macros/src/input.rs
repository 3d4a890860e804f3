//! Internal representation of the derive inputs.
//!
//! Mirrors the runtime descriptor tables but keeps spans for error messages.

use proc_macro2::Span;
use syn::{Ident, Type};

/// A string value that remembers where it was written.
#[derive(Clone)]
pub struct Spanned {
    pub value: String,
    pub span: Span,
}

impl Spanned {
    pub fn new(value: impl Into<String>, span: Span) -> Self {
        Self {
            value: value.into(),
            span,
        }
    }
}

/// `#[derive(LocalizedResource)]` on a struct with named fields.
pub struct ResourceInput {
    pub ident: Ident,
    pub key_prefix: Option<Spanned>,
    pub fields: Vec<FieldInput>,
    pub constants: Vec<ConstantInput>,
}

/// How a field takes part in the resource graph.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar,
    Nested,
    Collection,
}

pub struct FieldInput {
    pub ident: Ident,
    pub ty: Type,
    /// Key segment: the unraw'd field name, or the `rename` value.
    pub segment: Spanned,
    pub kind: FieldKind,
    pub hidden: bool,
    pub default: Option<Spanned>,
}

/// `#[resource(constant(name = "...", default = "..."))]`
pub struct ConstantInput {
    pub segment: Spanned,
    pub default: Option<Spanned>,
}

/// `#[derive(LocalizedEnum)]` on an enum.
pub struct EnumInput {
    pub ident: Ident,
    pub key_prefix: Option<Spanned>,
    pub variants: Vec<VariantInput>,
}

pub struct VariantInput {
    pub ident: Ident,
    pub shape: VariantShape,
    pub segment: Spanned,
    pub default: Option<Spanned>,
}

#[derive(Clone, Copy)]
pub enum VariantShape {
    Unit,
    Tuple,
    Struct,
}

/// `#[derive(Placeholders)]` on a struct with named fields.
pub struct PlaceholdersInput {
    pub ident: Ident,
    pub fields: Vec<PlaceholderField>,
}

pub struct PlaceholderField {
    pub ident: Ident,
    /// The `{Name}` this field fills.
    pub name: Spanned,
}
