//! Field information structures and parsing.

use syn::Type;

use crate::config::attr::{get_custom_name, has_attr};

/// Parsed field information.
pub struct FieldInfo {
    pub name: syn::Ident,
    pub config_key: String,
    pub required: bool,
    pub skip: bool,
    pub sub: bool,
    pub ty: Type,
}

impl FieldInfo {
    /// Parse field info from a syn::Field.
    pub fn from_field(field: &syn::Field) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        let attrs = &field.attrs;

        Some(Self {
            name: ident.clone(),
            config_key: get_custom_name(attrs).unwrap_or_else(|| ident.to_string()),
            required: has_attr(attrs, "required"),
            skip: has_attr(attrs, "skip"),
            sub: has_attr(attrs, "sub"),
            ty: field.ty.clone(),
        })
    }
}
