//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[methods]` | on inherent impl | Export `&self` methods as an override table |

pub mod methods;

pub use methods::{expand_methods, MethodsArgs};
