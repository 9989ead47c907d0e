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

//! Derive macro for AR2005 element types.
//!
//! `#[derive(Element)]` generates the accessor methods of a complex element
//! from its fields. The kind of accessor is chosen from the field's type:
//!
//! - `Option<T>` becomes a scalar with getter, setter, presence check and
//!   lexical (`xget_*`/`xset_*`) access,
//! - `Option<Nillable<T>>` becomes a scalar that may also be `xsi:nil`,
//! - `Option<T>` marked `#[element(child)]` becomes a nested element,
//! - `ElementList<T>` becomes a repeated element with indexed access.
//!
//! The XML element name used in error messages is taken from
//! `#[serde(rename = "...")]` or derived from the field name in camel case,
//! the same way `#[serde(rename_all = "camelCase")]` does.
//!
//! # Example
//!
//! ```ignore
//! #[derive(Element)]
//! pub struct PregnancyHistory {
//!     #[serde(rename = "LMP")]
//!     lmp: Option<Nillable<Date>>,
//!     #[serde(rename = "LMPCertain")]
//!     #[element(child)]
//!     lmp_certain: Option<YesNoNullType>,
//!     gravida: Option<i32>,
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse_macro_input, Data, DeriveInput, Fields, GenericArgument, Ident, LitStr, Meta,
    PathArguments, Type, TypePath,
};

enum FieldAttribute {
    Child,
    Skip,
}

enum Kind<'a> {
    Scalar(&'a Type),
    Nillable(&'a Type),
    Child(&'a Type),
    List(&'a Type),
}

fn parse_field_attribute(field: &syn::Field) -> Option<FieldAttribute> {
    for attr in &field.attrs {
        if !attr.path().is_ident("element") {
            continue;
        }

        if let Ok(Meta::Path(path)) = attr.parse_args::<Meta>() {
            if path.is_ident("child") {
                return Some(FieldAttribute::Child);
            }
            if path.is_ident("skip") {
                return Some(FieldAttribute::Skip);
            }
        }
    }
    None
}

/// Returns the name the field deserializes from.
fn element_name(field: &syn::Field, ident: &Ident) -> String {
    let mut name = None;

    for attr in &field.attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }

        // Other serde options are irrelevant here, so a failed parse of the
        // remainder is ignored once the rename was seen.
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                if meta.input.peek(syn::Token![=]) {
                    let lit: LitStr = meta.value()?.parse()?;
                    name = Some(lit.value());
                } else {
                    meta.parse_nested_meta(|inner| {
                        let lit: LitStr = inner.value()?.parse()?;
                        if inner.path.is_ident("deserialize") {
                            name = Some(lit.value());
                        }
                        Ok(())
                    })?;
                }
            } else if meta.input.peek(syn::Token![=]) {
                let _: syn::Expr = meta.value()?.parse()?;
            }
            Ok(())
        });
    }

    name.unwrap_or_else(|| camel_case(&ident.to_string()))
}

/// Converts a snake case identifier to camel case like serde's `camelCase`.
fn camel_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len());
    let mut capitalize = false;

    for c in ident.chars() {
        if c == '_' {
            capitalize = true;
        } else if capitalize {
            out.extend(c.to_uppercase());
            capitalize = false;
        } else {
            out.push(c);
        }
    }

    out
}

/// Returns `T` if `ty` is `wrapper<T>`.
fn generic_inner<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(TypePath { qself: None, path }) = ty else {
        return None;
    };
    let segment = path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

fn is_string(ty: &Type) -> bool {
    matches!(ty, Type::Path(TypePath { qself: None, path })
        if path.is_ident("String"))
}

fn field_kind(field: &syn::Field, child: bool) -> Result<Kind<'_>, syn::Error> {
    let ty = &field.ty;

    if let Some(inner) = generic_inner(ty, "ElementList") {
        return Ok(Kind::List(inner));
    }

    let inner = generic_inner(ty, "Option").ok_or_else(|| {
        syn::Error::new_spanned(ty, "element fields must be `Option<T>` or `ElementList<T>`")
    })?;

    if child {
        Ok(Kind::Child(inner))
    } else if let Some(value) = generic_inner(inner, "Nillable") {
        Ok(Kind::Nillable(value))
    } else {
        Ok(Kind::Scalar(inner))
    }
}

fn scalar_accessors(f: &Ident, name: &str, ty: &Type) -> TokenStream2 {
    let set = format_ident!("set_{}", f);
    let is_set = format_ident!("is_set_{}", f);
    let unset = format_ident!("unset_{}", f);
    let xget = format_ident!("xget_{}", f);
    let xset = format_ident!("xset_{}", f);

    let get_doc = format!("Returns the `{name}` value or `None` if it isn't set.");
    let set_doc = format!("Sets `{name}`, adding the element if it's missing.");
    let xget_doc = format!("Returns `{name}` in its lexical XML form.");
    let xset_doc = format!(
        "Sets `{name}` from its lexical XML form.\n\n\
         # Errors\n\n\
         Returns [`Error::InvalidValue`](crate::Error::InvalidValue) if the text \
         isn't a valid value."
    );

    let getter = if is_string(ty) {
        quote! {
            #[doc = #get_doc]
            pub fn #f(&self) -> Option<&str> {
                self.#f.as_deref()
            }
        }
    } else {
        quote! {
            #[doc = #get_doc]
            pub fn #f(&self) -> Option<#ty> {
                self.#f.clone()
            }
        }
    };

    quote! {
        #getter

        #[doc = #set_doc]
        pub fn #set(&mut self, value: impl Into<#ty>) {
            self.#f = Some(value.into());
        }

        pub fn #is_set(&self) -> bool {
            self.#f.is_some()
        }

        pub fn #unset(&mut self) {
            self.#f = None;
        }

        #[doc = #xget_doc]
        pub fn #xget(&self) -> Option<String> {
            self.#f.as_ref().map(crate::XmlValue::to_xml)
        }

        #[doc = #xset_doc]
        pub fn #xset(&mut self, lexical: &str) -> Result<(), crate::Error> {
            let value = <#ty as crate::XmlValue>::from_xml(lexical)
                .map_err(|e| e.in_field(#name))?;
            self.#f = Some(value);
            Ok(())
        }
    }
}

fn nillable_accessors(f: &Ident, name: &str, ty: &Type) -> TokenStream2 {
    let set = format_ident!("set_{}", f);
    let is_set = format_ident!("is_set_{}", f);
    let unset = format_ident!("unset_{}", f);
    let is_nil = format_ident!("is_nil_{}", f);
    let set_nil = format_ident!("set_nil_{}", f);
    let xget = format_ident!("xget_{}", f);
    let xset = format_ident!("xset_{}", f);

    let get_doc = format!("Returns the `{name}` value or `None` if it isn't set or is nil.");
    let is_nil_doc = format!("Returns `true` if `{name}` is present with `xsi:nil=\"true\"`.");
    let set_nil_doc = format!("Marks `{name}` as nil, dropping any value.");

    quote! {
        #[doc = #get_doc]
        pub fn #f(&self) -> Option<#ty> {
            self.#f.as_ref().and_then(crate::Nillable::value).cloned()
        }

        pub fn #set(&mut self, value: impl Into<#ty>) {
            self.#f = Some(crate::Nillable::new(value.into()));
        }

        pub fn #is_set(&self) -> bool {
            self.#f.is_some()
        }

        pub fn #unset(&mut self) {
            self.#f = None;
        }

        #[doc = #is_nil_doc]
        pub fn #is_nil(&self) -> bool {
            self.#f.as_ref().is_some_and(crate::Nillable::is_nil)
        }

        #[doc = #set_nil_doc]
        pub fn #set_nil(&mut self) {
            self.#f = Some(crate::Nillable::nil());
        }

        pub fn #xget(&self) -> Option<String> {
            self.#f
                .as_ref()
                .and_then(crate::Nillable::value)
                .map(crate::XmlValue::to_xml)
        }

        pub fn #xset(&mut self, lexical: &str) -> Result<(), crate::Error> {
            let value = <#ty as crate::XmlValue>::from_xml(lexical)
                .map_err(|e| e.in_field(#name))?;
            self.#f = Some(crate::Nillable::new(value));
            Ok(())
        }
    }
}

fn child_accessors(f: &Ident, name: &str, ty: &Type) -> TokenStream2 {
    let get_mut = format_ident!("{}_mut", f);
    let set = format_ident!("set_{}", f);
    let add_new = format_ident!("add_new_{}", f);
    let is_set = format_ident!("is_set_{}", f);
    let unset = format_ident!("unset_{}", f);

    let get_doc = format!("Returns the `{name}` element or `None` if it's missing.");
    let set_doc = format!("Replaces the `{name}` element, adding it if it's missing.");
    let add_new_doc = format!(
        "Adds an empty `{name}` element, replacing any existing one, and returns it \
         for population."
    );

    quote! {
        #[doc = #get_doc]
        pub fn #f(&self) -> Option<&#ty> {
            self.#f.as_ref()
        }

        pub fn #get_mut(&mut self) -> Option<&mut #ty> {
            self.#f.as_mut()
        }

        #[doc = #set_doc]
        pub fn #set(&mut self, value: #ty) {
            self.#f = Some(value);
        }

        #[doc = #add_new_doc]
        pub fn #add_new(&mut self) -> &mut #ty {
            self.#f.insert(<#ty as Default>::default())
        }

        pub fn #is_set(&self) -> bool {
            self.#f.is_some()
        }

        pub fn #unset(&mut self) {
            self.#f = None;
        }
    }
}

fn list_accessors(f: &Ident, name: &str, ty: &Type) -> TokenStream2 {
    let array = format_ident!("{}_array", f);
    let at = format_ident!("{}_at", f);
    let at_mut = format_ident!("{}_at_mut", f);
    let size_of = format_ident!("size_of_{}", f);
    let set_array = format_ident!("set_{}_array", f);
    let set_at = format_ident!("set_{}_at", f);
    let insert_new = format_ident!("insert_new_{}", f);
    let add_new = format_ident!("add_new_{}", f);
    let remove = format_ident!("remove_{}", f);

    let array_doc = format!("Returns all `{name}` elements in document order.");
    let at_doc = format!(
        "Returns the `{name}` element at `index`.\n\n\
         # Errors\n\n\
         Returns [`Error::IndexOutOfBounds`](crate::Error::IndexOutOfBounds) if \
         there is no element at `index`."
    );
    let insert_doc = format!(
        "Inserts an empty `{name}` element at `index`, shifting all elements after \
         it to the right, and returns it for population.\n\n\
         # Errors\n\n\
         Returns [`Error::IndexOutOfBounds`](crate::Error::IndexOutOfBounds) if \
         `index` is greater than the number of elements."
    );
    let add_new_doc = format!("Appends an empty `{name}` element and returns it for population.");
    let remove_doc = format!(
        "Removes and returns the `{name}` element at `index`, shifting all elements \
         after it to the left."
    );

    quote! {
        #[doc = #array_doc]
        pub fn #array(&self) -> &[#ty] {
            self.#f.as_slice()
        }

        #[doc = #at_doc]
        pub fn #at(&self, index: usize) -> Result<&#ty, crate::Error> {
            self.#f.get(index).ok_or_else(|| crate::Error::IndexOutOfBounds {
                element: #name,
                index,
                len: self.#f.len(),
            })
        }

        pub fn #at_mut(&mut self, index: usize) -> Result<&mut #ty, crate::Error> {
            let len = self.#f.len();
            self.#f.get_mut(index).ok_or(crate::Error::IndexOutOfBounds {
                element: #name,
                index,
                len,
            })
        }

        pub fn #size_of(&self) -> usize {
            self.#f.len()
        }

        pub fn #set_array(&mut self, items: impl IntoIterator<Item = #ty>) {
            self.#f = items.into_iter().collect();
        }

        pub fn #set_at(&mut self, index: usize, value: #ty) -> Result<(), crate::Error> {
            let len = self.#f.len();
            self.#f
                .replace(index, value)
                .map(|_| ())
                .ok_or(crate::Error::IndexOutOfBounds {
                    element: #name,
                    index,
                    len,
                })
        }

        #[doc = #insert_doc]
        pub fn #insert_new(&mut self, index: usize) -> Result<&mut #ty, crate::Error> {
            let len = self.#f.len();
            self.#f
                .insert(index, <#ty as Default>::default())
                .ok_or(crate::Error::IndexOutOfBounds {
                    element: #name,
                    index,
                    len,
                })
        }

        #[doc = #add_new_doc]
        pub fn #add_new(&mut self) -> &mut #ty {
            self.#f.push(<#ty as Default>::default())
        }

        #[doc = #remove_doc]
        pub fn #remove(&mut self, index: usize) -> Result<#ty, crate::Error> {
            let len = self.#f.len();
            self.#f.remove(index).ok_or(crate::Error::IndexOutOfBounds {
                element: #name,
                index,
                len,
            })
        }
    }
}

/// Derive macro generating the accessors of an AR2005 element.
///
/// See the [crate documentation](crate) for the supported field types.
#[proc_macro_derive(Element, attributes(element))]
pub fn derive_element(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(name, "Element derive only supports named fields")
                    .to_compile_error()
                    .into()
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "Element derive only supports structs")
                .to_compile_error()
                .into()
        }
    };

    let mut accessors = Vec::new();

    for field in fields {
        let attribute = parse_field_attribute(field);
        if matches!(attribute, Some(FieldAttribute::Skip)) {
            continue;
        }

        let Some(f) = field.ident.as_ref() else {
            continue;
        };
        let element = element_name(field, f);

        let kind = match field_kind(field, matches!(attribute, Some(FieldAttribute::Child))) {
            Ok(kind) => kind,
            Err(e) => return e.to_compile_error().into(),
        };

        accessors.push(match kind {
            Kind::Scalar(ty) => scalar_accessors(f, &element, ty),
            Kind::Nillable(ty) => nillable_accessors(f, &element, ty),
            Kind::Child(ty) => child_accessors(f, &element, ty),
            Kind::List(ty) => list_accessors(f, &element, ty),
        });
    }

    let expanded = quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            #(#accessors)*
        }
    };

    TokenStream::from(expanded)
}
