//! # arbitrait
//!
//! Runtime traits: attach named method sets to types you do not own and
//! resolve them by the exact type of a value at call time.
//!
//! **External, non-intrusive trait implementations for Rust values.**
//!
//! ## Architecture
//!
//! A trait is a [`TraitDefinition`] (method names, each with a default body or
//! an abstract arity) plus a registry of per-type [`Overrides`].
//!
//! ### 1. Identity
//! Types are keyed by [`TypeKey`]: a `TypeId` for identity and a type name
//! for diagnostics. The registry buckets entries by short name and tells
//! same-named types apart by `TypeId`.
//!
//! ```text
//! TypeKey::of::<app::Logger>() -> bucket "Logger" -> [ (TypeId, overrides) ]
//! ```
//!
//! ### 2. Registration
//! `implement` validates an override table against the definition:
//!
//! ```text
//! duplicate type? -> unknown name? -> missing abstract? -> arity mismatch? -> insert
//! ```
//!
//! ### 3. Dispatch
//! `dispatch(&value)` finds the entry for the value's type, overlays its
//! overrides on the defaults and binds the result to the value:
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - TypeKey, Value, Marker                                         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Methods & Definitions                                   |
//! |  - Method (arity + erased Fn), Overrides, TraitDefinition         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Registry & Dispatch                                     |
//! |  - Trait (implement / implemented_for / dispatch / is), Interface |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Sugar                                                   |
//! |  - define_trait!, type_keys!, #[methods], format (trait_format!)  |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use arbitrait::prelude::*;
//!
//! struct Logger { lines: RefCell<Vec<String>> }
//!
//! let write = Trait::new(
//!     TraitDefinition::new("Write")
//!         .required("write", 1)
//!         .provided("writeln", |this: &Interface<'_>, s: String| -> Result<()> {
//!             this.call("write", (s + "\n",))
//!         }),
//! );
//!
//! write.implement_for::<Logger>(Overrides::new().with(
//!     "write",
//!     |this: &Interface<'_>, s: String| -> Result<()> {
//!         this.receiver::<Logger>()?.lines.borrow_mut().push(s);
//!         Ok(())
//!     },
//! ))?;
//!
//! write.dispatch(&logger)?.call::<()>("writeln", ("hi".to_string(),))?;
//! ```
//!
//! Everything is single-threaded: handles hold `Rc`/`RefCell` and are `!Send`.

// Allow `::arbitrait` paths (emitted by `#[methods]`) inside the crate itself
extern crate self as arbitrait;

// Re-exports used by the declarative macros
pub use paste;
#[doc(hidden)]
pub use tracing;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Methods & Definitions
// =============================================================================
pub mod error;
pub mod method;
pub mod definition;

// =============================================================================
// Layer 2: Registry & Dispatch
// =============================================================================
pub mod registry;
pub mod handle;
pub mod interface;

// =============================================================================
// Layer 3: Sugar
// =============================================================================
pub mod syntax_macros;

#[cfg(feature = "format")]
pub mod format;

#[cfg(feature = "subscriber")]
pub mod logging;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use definition::{MethodSpec, TraitDefinition};
pub use error::{Result, TraitError};
pub use handle::{ImplSource, Targets, Trait, create_trait};
pub use interface::Interface;
pub use method::{Args, IntoArgs, IntoMethod, Method, Overrides};
pub use primitives::{Marker, Tagged, TypeKey, Value};
pub use registry::ImplEntry;

#[cfg(feature = "subscriber")]
pub use logging::init_tracing;

// Re-export proc-macros
#[cfg(feature = "macros")]
pub use macros::methods;

/// Common items for defining, implementing and dispatching traits.
pub mod prelude {
    pub use crate::{
        Interface, Overrides, Result, Tagged, Trait, TraitDefinition, TraitError, TypeKey, Value,
    };
    pub use crate::{define_trait, type_keys};
    #[cfg(feature = "macros")]
    pub use macros::methods;
}
