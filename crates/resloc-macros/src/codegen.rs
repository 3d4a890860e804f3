//! Code generation for the derive macros.
//!
//! Each resource type gets one `static` descriptor table, built inside
//! `descriptor()` so it can use `module_path!()` of the deriving crate.
//! `accept` indexes into that same table, so the member a visitor sees is
//! always the entry the key builder resolves.

use proc_macro2::TokenStream;
use quote::quote;

use crate::input::{
    EnumInput, FieldInput, FieldKind, PlaceholdersInput, ResourceInput, Spanned, VariantShape,
};

/// Generate `impl ::resloc::LocalizedResource`.
pub fn resource(input: &ResourceInput) -> TokenStream {
    let ident = &input.ident;
    let type_name = ident.to_string();
    let key_prefix = optional_str(input.key_prefix.as_ref());

    let members = input.fields.iter().map(member_descriptor);
    let constants = input.constants.iter().map(|constant| {
        let segment = &constant.segment.value;
        let default_text = optional_str(constant.default.as_ref());
        quote! {
            ::resloc::StaticMember {
                segment: #segment,
                default_text: #default_text,
            }
        }
    });

    let visits: Vec<TokenStream> = input
        .fields
        .iter()
        .enumerate()
        .filter(|(_, field)| !field.hidden)
        .map(|(index, field)| member_visit(index, field))
        .collect();

    // Nothing to visit: keep the generated body free of unused bindings.
    let accept = if visits.is_empty() {
        quote! {
            fn accept(&mut self, _visitor: &mut dyn ::resloc::MemberVisitor) {}
        }
    } else {
        quote! {
            fn accept(&mut self, visitor: &mut dyn ::resloc::MemberVisitor) {
                let members = <Self as ::resloc::LocalizedResource>::descriptor().members;
                #(#visits)*
            }
        }
    };

    quote! {
        impl ::resloc::LocalizedResource for #ident {
            fn descriptor() -> &'static ::resloc::ResourceDescriptor {
                static DESCRIPTOR: ::resloc::ResourceDescriptor = ::resloc::ResourceDescriptor {
                    type_name: #type_name,
                    module_path: ::core::module_path!(),
                    key_prefix: #key_prefix,
                    members: &[#(#members),*],
                    static_members: &[#(#constants),*],
                };
                &DESCRIPTOR
            }

            #accept
        }
    }
}

fn member_descriptor(field: &FieldInput) -> TokenStream {
    let name = field.ident.to_string();
    let name = resloc_keys::unraw(&name);
    let segment = &field.segment.value;
    let hidden = field.hidden;
    let default_text = optional_str(field.default.as_ref());
    let ty = &field.ty;

    let kind = match field.kind {
        FieldKind::Scalar => quote! { ::resloc::MemberKind::Scalar },
        FieldKind::Nested => quote! {
            ::resloc::MemberKind::Nested(<#ty as ::resloc::LocalizedResource>::descriptor)
        },
        FieldKind::Collection => quote! {
            ::resloc::MemberKind::Collection(
                <<#ty as ::resloc::ResourceCollection>::Element as ::resloc::LocalizedResource>::descriptor
            )
        },
    };

    quote! {
        ::resloc::MemberDescriptor {
            name: #name,
            segment: #segment,
            kind: #kind,
            hidden: #hidden,
            default_text: #default_text,
        }
    }
}

fn member_visit(index: usize, field: &FieldInput) -> TokenStream {
    let ident = &field.ident;
    match field.kind {
        FieldKind::Scalar => quote! {
            visitor.scalar(&members[#index], &mut self.#ident);
        },
        FieldKind::Nested => quote! {
            visitor.nested(&members[#index], &mut self.#ident);
        },
        FieldKind::Collection => quote! {
            ::resloc::ResourceCollection::for_each_element(&mut self.#ident, &mut |element| {
                visitor.nested(&members[#index], element);
            });
        },
    }
}

/// Generate `impl ::resloc::LocalizedEnum`.
pub fn localized_enum(input: &EnumInput) -> TokenStream {
    let ident = &input.ident;
    let type_name = ident.to_string();
    let key_prefix = optional_str(input.key_prefix.as_ref());

    let variants = input.variants.iter().map(|variant| {
        let name = variant.ident.to_string();
        let name = resloc_keys::unraw(&name);
        let segment = &variant.segment.value;
        let default_text = optional_str(variant.default.as_ref());
        quote! {
            ::resloc::EnumVariant {
                name: #name,
                segment: #segment,
                default_text: #default_text,
            }
        }
    });

    let arms = input.variants.iter().enumerate().map(|(index, variant)| {
        let variant_ident = &variant.ident;
        let pattern = match variant.shape {
            VariantShape::Unit => quote! { Self::#variant_ident },
            VariantShape::Tuple => quote! { Self::#variant_ident(..) },
            VariantShape::Struct => quote! { Self::#variant_ident { .. } },
        };
        quote! { #pattern => &variants[#index], }
    });

    quote! {
        impl ::resloc::LocalizedEnum for #ident {
            fn descriptor() -> &'static ::resloc::EnumDescriptor {
                static DESCRIPTOR: ::resloc::EnumDescriptor = ::resloc::EnumDescriptor {
                    type_name: #type_name,
                    module_path: ::core::module_path!(),
                    key_prefix: #key_prefix,
                    variants: &[#(#variants),*],
                };
                &DESCRIPTOR
            }

            fn variant(&self) -> &'static ::resloc::EnumVariant {
                let variants = <Self as ::resloc::LocalizedEnum>::descriptor().variants;
                match self {
                    #(#arms)*
                }
            }
        }
    }
}

/// Generate `impl ::resloc::Placeholders`.
pub fn placeholders(input: &PlaceholdersInput) -> TokenStream {
    let ident = &input.ident;
    let arms = input.fields.iter().map(|field| {
        let field_ident = &field.ident;
        let name = &field.name.value;
        quote! {
            #name => ::core::option::Option::Some(::std::string::ToString::to_string(&self.#field_ident)),
        }
    });

    quote! {
        impl ::resloc::Placeholders for #ident {
            fn placeholder(&self, name: &str) -> ::core::option::Option<::std::string::String> {
                match name {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}

fn optional_str(value: Option<&Spanned>) -> TokenStream {
    match value {
        Some(spanned) => {
            let text = &spanned.value;
            quote! { ::core::option::Option::Some(#text) }
        }
        None => quote! { ::core::option::Option::None },
    }
}
