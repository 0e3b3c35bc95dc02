//! Implementation of the `#[derive(Prisms)]` macro.
//!
//! Every variant `V` of an enum `E` gets an associated function
//! `E::v_prism() -> Prism<E, Focus>`, where `Focus` is `()` for unit
//! variants, the field type for single-field tuple variants, and a tuple of
//! the field types otherwise. Matching moves the fields out of the source, so
//! `modify` never clones; only `get_option` clones.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Variant, parse_macro_input};

/// Main implementation of the Prisms derive macro.
pub fn derive_prisms_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Enum(data_enum) => generate_enum_prisms(name, generics, data_enum.variants.iter()),
        Data::Struct(_) => syn::Error::new_spanned(
            name,
            "Prisms can only be derived for enums, not structs. Use #[derive(Lenses)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(name, "Prisms cannot be derived for unions.").to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn generate_enum_prisms<'a>(
    name: &Ident,
    generics: &Generics,
    variants: impl Iterator<Item = &'a Variant>,
) -> TokenStream2 {
    let prism_functions: Vec<TokenStream2> = variants.map(generate_variant_prism).collect();

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#prism_functions)*
        }
    }
}

/// The pieces that differ between variant shapes.
struct VariantShape {
    /// The focus type.
    focus: TokenStream2,
    /// Pattern binding every field.
    pattern: TokenStream2,
    /// Focus built from the bindings, moving them.
    focus_value: TokenStream2,
    /// Focus built from borrowed bindings, cloning them.
    cloned_focus: TokenStream2,
    /// Pattern destructuring a focus.
    focus_pattern: TokenStream2,
    /// Variant built from the destructured focus.
    construct: TokenStream2,
}

fn variant_shape(variant: &Variant) -> VariantShape {
    let variant_name = &variant.ident;
    match &variant.fields {
        Fields::Unit => VariantShape {
            focus: quote! { () },
            pattern: quote! { Self::#variant_name },
            focus_value: quote! { () },
            cloned_focus: quote! { () },
            focus_pattern: quote! { () },
            construct: quote! { Self::#variant_name },
        },
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            let field_type = &fields.unnamed[0].ty;
            VariantShape {
                focus: quote! { #field_type },
                pattern: quote! { Self::#variant_name(value) },
                focus_value: quote! { value },
                cloned_focus: quote! { ::core::clone::Clone::clone(value) },
                focus_pattern: quote! { value },
                construct: quote! { Self::#variant_name(value) },
            }
        }
        Fields::Unnamed(fields) => {
            let field_types: Vec<_> = fields.unnamed.iter().map(|field| &field.ty).collect();
            let bindings: Vec<Ident> = (0..field_types.len())
                .map(|index| format_ident!("v{}", index))
                .collect();
            VariantShape {
                focus: quote! { (#(#field_types),*) },
                pattern: quote! { Self::#variant_name(#(#bindings),*) },
                focus_value: quote! { (#(#bindings),*) },
                cloned_focus: quote! { (#(::core::clone::Clone::clone(#bindings)),*) },
                focus_pattern: quote! { (#(#bindings),*) },
                construct: quote! { Self::#variant_name(#(#bindings),*) },
            }
        }
        Fields::Named(fields) => {
            let field_names: Vec<&Ident> =
                fields.named.iter().filter_map(|field| field.ident.as_ref()).collect();
            let field_types: Vec<_> = fields.named.iter().map(|field| &field.ty).collect();
            VariantShape {
                focus: quote! { (#(#field_types),*) },
                pattern: quote! { Self::#variant_name { #(#field_names),* } },
                focus_value: quote! { (#(#field_names),*) },
                cloned_focus: quote! { (#(::core::clone::Clone::clone(#field_names)),*) },
                focus_pattern: quote! { (#(#field_names),*) },
                construct: quote! { Self::#variant_name { #(#field_names),* } },
            }
        }
    }
}

fn generate_variant_prism(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let function_name = format_ident!("{}_prism", to_snake_case(&variant_name.to_string()));
    let doc = format!("Returns a prism focusing on the `{variant_name}` variant.");
    let VariantShape {
        focus,
        pattern,
        focus_value,
        cloned_focus,
        focus_pattern,
        construct,
    } = variant_shape(variant);

    quote! {
        #[doc = #doc]
        #[must_use]
        #[allow(unused_variables, clippy::unused_unit)]
        pub fn #function_name() -> ::opticus::optics::Prism<Self, #focus>
        where
            Self: 'static,
            #focus: ::core::clone::Clone + 'static,
        {
            ::opticus::optics::Prism::from_parts(
                |source: Self| match source {
                    #pattern => ::opticus::control::Either::Right(#focus_value),
                    #[allow(unreachable_patterns)]
                    other => ::opticus::control::Either::Left(other),
                },
                |source: &Self| match source {
                    #pattern => ::core::option::Option::Some(#cloned_focus),
                    #[allow(unreachable_patterns)]
                    _ => ::core::option::Option::None,
                },
                |focus: #focus| {
                    let #focus_pattern = focus;
                    #construct
                },
            )
        }
    }
}

/// Converts a `CamelCase` or `PascalCase` string to `snake_case`.
fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let chars: Vec<char> = input.chars().collect();

    for (index, &character) in chars.iter().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                let previous = chars[index - 1];
                let next_is_lowercase = chars.get(index + 1).is_some_and(|c| c.is_lowercase());
                // "keyPress" -> "key_press", "XMLParser" -> "xml_parser"
                if previous.is_lowercase() || (previous.is_uppercase() && next_is_lowercase) {
                    result.push('_');
                }
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Circle", "circle")]
    #[case("KeyPress", "key_press")]
    #[case("none", "none")]
    #[case("HTTPRequest", "http_request")]
    #[case("XMLParser", "xml_parser")]
    #[case("X", "x")]
    fn converts_variant_names(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_snake_case(input), expected);
    }

    #[rstest]
    fn struct_variant_focus_is_a_tuple_of_fields() {
        let variant: Variant = syn::parse_quote! { Click { x: i32, y: i32 } };
        let shape = variant_shape(&variant);
        assert_eq!(shape.focus.to_string(), quote! { (i32, i32) }.to_string());
        assert_eq!(
            shape.pattern.to_string(),
            quote! { Self::Click { x, y } }.to_string()
        );
    }

    #[rstest]
    fn single_field_variant_focus_is_the_field() {
        let variant: Variant = syn::parse_quote! { Circle(f64) };
        assert_eq!(variant_shape(&variant).focus.to_string(), "f64");
    }
}
