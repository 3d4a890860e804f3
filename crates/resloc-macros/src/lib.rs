use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod codegen;
mod input;
mod parse;
mod validate;

/// Derives `resloc::LocalizedResource` for a struct with named fields.
///
/// Generates a static descriptor table and an `accept` implementation that
/// hands every localizable field to a visitor. Text fields must be `String`.
///
/// # Attributes
///
/// On the struct:
/// - `#[resource(key_prefix = "Pages.Home")]` replaces the module path and
///   type name in every key
/// - `#[resource(constant(name = "Version", default = "1.0"))]` declares a
///   static member that has a key but no field
///
/// On fields:
/// - `rename = "Title"`: key segment instead of the field name
/// - `default = "Welcome"`: untranslated default text
/// - `nested`: the field is itself a localized resource
/// - `collection`: the field holds localized resources (`Vec`, arrays, ...)
/// - `hidden`: the field is not localized
///
/// # Example
///
/// ```ignore
/// #[derive(Default, LocalizedResource)]
/// #[resource(key_prefix = "Pages.Home")]
/// struct HomePage {
///     #[resource(default = "Welcome")]
///     title: String,
///     #[resource(nested)]
///     header: Header,
///     #[resource(collection)]
///     tiles: Vec<Tile>,
/// }
/// ```
#[proc_macro_derive(LocalizedResource, attributes(resource))]
pub fn derive_localized_resource(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let parsed = match parse::parse_resource(&input) {
        Ok(parsed) => parsed,
        Err(e) => return e.to_compile_error().into(),
    };

    if let Err(e) = validate::validate_resource(&parsed) {
        return e.to_compile_error().into();
    }

    codegen::resource(&parsed).into()
}

/// Derives `resloc::LocalizedEnum`: one key per variant.
///
/// Supports `#[resource(key_prefix = "...")]` on the enum and
/// `#[resource(rename = "...", default = "...")]` on variants.
#[proc_macro_derive(LocalizedEnum, attributes(resource))]
pub fn derive_localized_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let parsed = match parse::parse_enum(&input) {
        Ok(parsed) => parsed,
        Err(e) => return e.to_compile_error().into(),
    };

    if let Err(e) = validate::validate_enum(&parsed) {
        return e.to_compile_error().into();
    }

    codegen::localized_enum(&parsed).into()
}

/// Derives `resloc::Placeholders`, exposing fields as `{Name}` placeholders.
///
/// Fields must implement `Display`. Use `#[placeholder(rename = "Count")]`
/// to change the placeholder name and `#[placeholder(skip)]` to hide a field.
#[proc_macro_derive(Placeholders, attributes(placeholder))]
pub fn derive_placeholders(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let parsed = match parse::parse_placeholders(&input) {
        Ok(parsed) => parsed,
        Err(e) => return e.to_compile_error().into(),
    };

    if let Err(e) = validate::validate_placeholders(&parsed) {
        return e.to_compile_error().into();
    }

    codegen::placeholders(&parsed).into()
}
