//! # Layer 0: Primitives
//!
//! Identity building blocks for the registry:
//! - `type_key.rs`: nominal type identity (`TypeKey`) and borrowed erased values (`Value`).
//! - `marker.rs`: per-trait identity tags (`Marker`, `Tagged`).

pub mod marker;
pub mod type_key;

// Re-export key types at this level
pub use marker::{Marker, Tagged};
pub use type_key::{TypeKey, Value};
