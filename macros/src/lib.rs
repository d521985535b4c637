//! Procedural macros for the arbitrait runtime trait registry
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[methods]` | inherent impl | Build an `Overrides` table from `&self` methods |
//!
//! ## Example
//!
//! ```ignore
//! #[methods(name = write_impl)]
//! impl Logger {
//!     fn write(&self, s: String) {
//!         self.lines.borrow_mut().push(s);
//!     }
//! }
//!
//! write_trait.implement_for::<Logger>(Logger::write_impl())?;
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User Macros (user/)
// =============================================================================

/// Export the `&self` methods of an inherent impl block as trait overrides.
///
/// Keeps the impl block and adds an associated function (default name
/// `overrides`) returning an `Overrides` table with one entry per `&self`
/// method, keyed by the method's name. Each entry downcasts the bound value to
/// `Self` and forwards the arguments; the arity is the method's parameter
/// count, receiver excluded.
///
/// Methods returning `Result<T, E>` keep their error (converted with `Into`);
/// any other return type is wrapped in `Ok`. Functions without a `&self`
/// receiver are left out of the table.
///
/// # Arguments
///
/// - `name = ident`: name of the generated function.
/// - `crate = path`: path to the arbitrait crate (default `::arbitrait`).
#[proc_macro_attribute]
pub fn methods(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as user::MethodsArgs);
    let item = parse_macro_input!(item as syn::ItemImpl);
    user::expand_methods(args, item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
