// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Derive macros for WELT2000 record types.
//!
//! A WELT2000 record is a single line of 64 characters whose fields overlap: the
//! same columns are read as a description, a shortform or a glidersite marker
//! depending on the rest of the line. Therefore each field is addressed by its
//! absolute, zero-based column instead of following the previous one.
//!
//! # Example
//!
//! ```ignore
//! #[derive(Record)]
//! pub struct Line<'a> {
//!     #[welt2000(column = 0)]
//!     pub shortform: Alphanumeric<'a, 6>,
//!     #[welt2000(column = 7)]   // overlaps with the description below
//!     pub zander: Alphanumeric<'a, 12>,
//!     #[welt2000(column = 7)]
//!     pub text: Alphanumeric<'a, 34>,
//!     #[welt2000(raw)]          // the whole record
//!     pub bytes: &'a [u8],
//! }
//! ```

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitInt};

enum FieldAttribute {
    Column(usize),
    Raw,
}

fn parse_field_attribute(field: &syn::Field) -> syn::Result<FieldAttribute> {
    let mut attribute = None;

    for attr in field.attrs.iter().filter(|a| a.path().is_ident("welt2000")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("column") {
                let column: LitInt = meta.value()?.parse()?;
                attribute = Some(FieldAttribute::Column(column.base10_parse()?));
                Ok(())
            } else if meta.path.is_ident("raw") {
                attribute = Some(FieldAttribute::Raw);
                Ok(())
            } else {
                Err(meta.error("expected `column = <n>` or `raw`"))
            }
        })?;
    }

    attribute.ok_or_else(|| {
        syn::Error::new_spanned(
            field,
            "WELT2000 fields need either #[welt2000(column = <n>)] or #[welt2000(raw)]",
        )
    })
}

fn expand(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let lifetime = generics.lifetimes().next().ok_or_else(|| {
        syn::Error::new_spanned(
            generics,
            "Record types must have a lifetime parameter (e.g., 'a)",
        )
    })?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Record derive only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Record derive only supports structs",
            ))
        }
    };

    let mut field_parsers = Vec::with_capacity(fields.len());

    for field in fields {
        let field_name = &field.ident;

        let parse_expr = match parse_field_attribute(field)? {
            FieldAttribute::Column(column) => quote! {
                #field_name: fields.at(#column)?
            },
            FieldAttribute::Raw => quote! {
                #field_name: fields.raw()
            },
        };

        field_parsers.push(parse_expr);
    }

    Ok(quote! {
        impl #impl_generics crate::record::Record<#lifetime> for #name #ty_generics #where_clause {
            fn parse(fields: crate::record::Fields<#lifetime>) -> Result<Self, crate::Error> {
                Ok(Self {
                    #(#field_parsers),*
                })
            }
        }

        impl #impl_generics ::core::convert::TryFrom<&#lifetime [u8]> for #name #ty_generics #where_clause {
            type Error = crate::Error;

            fn try_from(bytes: &#lifetime [u8]) -> Result<Self, crate::Error> {
                <Self as crate::record::Record>::from_bytes(bytes)
            }
        }
    })
}

/// Derive macro for implementing the `Record` trait.
///
/// Generates the `Record` trait implementation together with `TryFrom<&[u8]>`
/// for the bytes of an encoded line.
#[proc_macro_derive(Record, attributes(welt2000))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
