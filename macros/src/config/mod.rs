//! Config derive macro - generates the ConfigFields impl and FIELDS.

mod attr;
mod field;
mod types;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use attr::get_section;
use field::FieldInfo;
use types::strip_option;

/// Generate Config implementation (descriptor table + FIELDS).
pub fn derive(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let fields_struct_name = syn::Ident::new(&format!("{}Fields", name), name.span());

    let section = get_section(&input.attrs).unwrap_or_default();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return quote! { compile_error!("Config only works on structs with named fields"); }
            }
        },
        _ => return quote! { compile_error!("Config only works on structs"); },
    };

    // Collect field info
    let field_infos: Vec<FieldInfo> = fields.iter().filter_map(FieldInfo::from_field).collect();

    // A required marker on a key-less field could never be checked,
    // so reject the declaration instead of ignoring it.
    if let Some(bad) = field_infos.iter().find(|f| f.skip && f.required) {
        let msg = format!(
            "field `{}` is #[config(required)] but has no config key (#[config(skip)])",
            bad.name
        );
        return quote! { compile_error!(#msg); };
    }

    // Generate FIELDS struct (skip fields with #[config(skip)])
    let fields_for_path: Vec<_> = field_infos.iter().filter(|f| !f.skip).collect();

    let field_defs = fields_for_path.iter().map(|f| {
        let name = &f.name;
        quote! { pub #name: ::confit::FieldPath, }
    });

    let field_inits = fields_for_path.iter().map(|f| {
        let name = &f.name;
        let full_path = if section.is_empty() {
            f.config_key.clone()
        } else {
            format!("{}.{}", section, f.config_key)
        };
        quote! { #name: ::confit::FieldPath::new(#full_path), }
    });

    // Generate the descriptor table walked by the required-field validator.
    // Skipped fields keep a key-less entry so the table mirrors the struct
    // declaration order.
    let spec_entries = field_infos.iter().map(|f| {
        if f.skip {
            return quote! {
                ::confit::FieldSpec {
                    key: None,
                    required: false,
                    kind: ::confit::FieldKind::Scalar,
                },
            };
        }
        let key = &f.config_key;
        let required = f.required;
        let kind = if f.sub {
            let inner = strip_option(&f.ty);
            quote! { ::confit::FieldKind::Table(<#inner as ::confit::ConfigFields>::field_specs) }
        } else {
            quote! { ::confit::FieldKind::Scalar }
        };
        quote! {
            ::confit::FieldSpec {
                key: Some(#key),
                required: #required,
                kind: #kind,
            },
        }
    });

    quote! {
        /// Generated field path accessors.
        #[allow(non_camel_case_types)]
        pub struct #fields_struct_name {
            #(#field_defs)*
        }

        impl #name {
            /// Field paths for diagnostic messages.
            pub const FIELDS: #fields_struct_name = #fields_struct_name {
                #(#field_inits)*
            };
        }

        impl ::confit::ConfigFields for #name {
            fn field_specs() -> &'static [::confit::FieldSpec] {
                const SPECS: &[::confit::FieldSpec] = &[
                    #(#spec_entries)*
                ];
                SPECS
            }
        }
    }
}
