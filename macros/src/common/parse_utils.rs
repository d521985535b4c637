//! Common parsing utilities
//!
//! Shared parsing helpers for attribute arguments.

use syn::{
    parse::ParseStream,
    Ident, Token, Type, GenericArgument, PathArguments,
};

// =============================================================================
// Keyword Detection
// =============================================================================

/// Check if the next identifier is a specific keyword
pub fn peek_keyword(input: ParseStream, keyword: &str) -> bool {
    if input.peek(Ident) {
        let fork = input.fork();
        if let Ok(ident) = fork.parse::<Ident>() {
            return ident == keyword;
        }
    }
    false
}

/// Consume `keyword =` if present
pub fn try_parse_assignment(input: ParseStream, keyword: &str) -> syn::Result<bool> {
    if peek_keyword(input, keyword) && input.peek2(Token![=]) {
        let _: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        Ok(true)
    } else {
        Ok(false)
    }
}

// =============================================================================
// Type Inspection
// =============================================================================

/// `Result<T, ..>` / `path::Result<T>` -> `Some(T)`; anything else -> `None`.
///
/// Purely syntactic: a type alias that hides a `Result` is not recognized.
pub fn result_ok_type(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else { return None };
    let last = path.path.segments.last()?;
    if last.ident != "Result" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &last.arguments else { return None };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    })
}
