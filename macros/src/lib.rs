//! Derive macros for reducer-sauce
//!
//! This crate provides procedural macros that give typed action enums the same
//! type tags the runtime factories derive from names.
//!
//! # Available Macros
//!
//! - `#[derive(ActionType)]` - Implements `reducer_sauce_core::ActionType`
//!
//! # Example
//!
//! ```ignore
//! use reducer_sauce_core::ActionType;
//! use reducer_sauce_macros::ActionType;
//!
//! #[derive(ActionType, Clone, Debug)]
//! enum TodoAction {
//!     AddTodo { text: String },
//!     ToggleTodo(u32),
//!     #[action(tag = "TODOS/CLEAR")]
//!     ClearTodos,
//! }
//!
//! assert_eq!(TodoAction::AddTodo { text: "milk".into() }.type_tag(), "ADD_TODO");
//! assert_eq!(TodoAction::ClearTodos.type_tag(), "TODOS/CLEAR");
//! assert_eq!(TodoAction::type_tags(), &["ADD_TODO", "TOGGLE_TODO", "TODOS/CLEAR"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use reducer_sauce_core::naming::to_tag;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, parse_macro_input};

/// Derive macro for typed action enums
///
/// Implements `reducer_sauce_core::ActionType`:
/// - `type_tag()` - The tag for this variant
/// - `type_tags()` - Every tag, in declaration order
///
/// Each tag is the variant name run through `to_tag`, so `AddTodo` becomes
/// `ADD_TODO`, matching what `create_actions` derives for `addTodo`.
///
/// # Attributes
///
/// - `#[action(tag = "...")]` - Use an explicit tag for a variant
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - An `#[action(...)]` attribute is malformed
/// - Two variants end up with the same tag
#[proc_macro_derive(ActionType, attributes(action))]
pub fn derive_action_type(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(&input, "#[derive(ActionType)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut tags = Vec::with_capacity(data_enum.variants.len());
    let mut arms = Vec::with_capacity(data_enum.variants.len());

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;

        let tag = match tag_override(&variant.attrs) {
            Ok(Some(tag)) => tag,
            Ok(None) => to_tag(&variant_name.to_string()),
            Err(err) => return err.to_compile_error().into(),
        };

        if tags.contains(&tag) {
            return syn::Error::new_spanned(
                variant,
                format!("Duplicate action type tag `{tag}`"),
            )
            .to_compile_error()
            .into();
        }

        arms.push(match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } => #tag, },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) => #tag, },
            Fields::Unit => quote! { Self::#variant_name => #tag, },
        });
        tags.push(tag);
    }

    // Empty enums have no values, so `type_tag` can never be called.
    let body = if arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! { match self { #(#arms)* } }
    };

    let expanded = quote! {
        impl #impl_generics ::reducer_sauce_core::ActionType for #name #ty_generics #where_clause {
            fn type_tag(&self) -> &'static str {
                #body
            }

            fn type_tags() -> &'static [&'static str] {
                &[#(#tags),*]
            }
        }
    };

    TokenStream::from(expanded)
}

/// Read `#[action(tag = "...")]` from a variant's attributes
fn tag_override(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut tag = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("action")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("tag") {
                let value: LitStr = meta.value()?.parse()?;
                if value.value().trim().is_empty() {
                    return Err(meta.error("action tag must not be empty"));
                }
                tag = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported action attribute, expected `tag = \"...\"`"))
            }
        })?;
    }

    Ok(tag)
}
