//! Implementation of the `#[derive(Lenses)]` macro.
//!
//! Every named field `f: T` of a struct `S` gets an associated function
//! `S::f_lens() -> Lens<S, T>`. Reading clones the field; writing moves the
//! source and replaces the field in place.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, FieldsNamed, Generics, Ident, parse_macro_input};

/// Main implementation of the Lenses derive macro.
pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields) => generate_struct_lenses(name, generics, fields),
            Fields::Unnamed(_) => syn::Error::new_spanned(
                name,
                "Lenses can only be derived for structs with named fields, not tuple structs.",
            )
            .to_compile_error(),
            Fields::Unit => syn::Error::new_spanned(
                name,
                "Lenses cannot be derived for unit structs (structs with no fields).",
            )
            .to_compile_error(),
        },
        Data::Enum(_) => syn::Error::new_spanned(
            name,
            "Lenses can only be derived for structs, not enums. Use #[derive(Prisms)] for enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(name, "Lenses cannot be derived for unions.").to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Generates one lens function per named field.
fn generate_struct_lenses(name: &Ident, generics: &Generics, fields: &FieldsNamed) -> TokenStream2 {
    let lens_functions = fields.named.iter().filter_map(|field| {
        let field_name = field.ident.as_ref()?;
        let field_type = &field.ty;
        let function_name = format_ident!("{}_lens", field_name.to_string().trim_start_matches("r#"));
        let doc = format!("Returns a lens focusing on the `{field_name}` field.");

        Some(quote! {
            #[doc = #doc]
            #[must_use]
            pub fn #function_name() -> ::opticus::optics::Lens<Self, #field_type>
            where
                Self: 'static,
                #field_type: ::core::clone::Clone + 'static,
            {
                ::opticus::optics::Lens::new(
                    |source: &Self| ::core::clone::Clone::clone(&source.#field_name),
                    |mut source: Self, value: #field_type| {
                        source.#field_name = value;
                        source
                    },
                )
            }
        })
    });

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#lens_functions)*
        }
    }
}
