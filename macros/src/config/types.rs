//! Type helper functions for Config derive macro.

use syn::Type;

/// Peel `Option<T>` down to `T` so nested tables can be declared optional.
pub fn strip_option(ty: &Type) -> &Type {
    if let Type::Path(type_path) = ty
        && let Some(segment) = type_path.path.segments.last()
        && segment.ident == "Option"
        && let syn::PathArguments::AngleBracketed(args) = &segment.arguments
        && let Some(syn::GenericArgument::Type(inner)) = args.args.first()
    {
        return inner;
    }
    ty
}
