//! Type identity primitives.
//!
//! A [`TypeKey`] is the nominal identity of a type: its [`TypeId`] decides
//! equality, its [`type_name`] is only carried along for diagnostics and for
//! the registry's name buckets.
//!
//! ```text
//! TypeKey::of::<a::S>()  ->  { id: TypeId(0x..), name: "my_crate::a::S" }
//!                                                     |
//!                                          short name "S" (bucket)
//! ```
//!
//! Two unrelated types can share a short name (`a::S` / `b::S`); they land in
//! the same bucket and are told apart by `TypeId`.

use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Nominal identity of a type.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Identity of `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Full path of the type as reported by `std::any::type_name`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Last path segment without generic arguments (`alloc::vec::Vec<u8>` -> `Vec`).
    pub fn short_name(&self) -> &'static str {
        short_name(self.name)
    }

    /// True if `T` is the type this key identifies.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

// Identity only: the name is informational.
impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

fn short_name(full: &'static str) -> &'static str {
    let base = match full.find('<') {
        Some(generics) => &full[..generics],
        None => full,
    };
    match base.rfind("::") {
        Some(sep) => &base[sep + 2..],
        None => base,
    }
}

// =============================================================================
// Value: a borrowed, type-erased value with its identity
// =============================================================================

/// A borrowed value together with the [`TypeKey`] of its concrete type.
///
/// `&dyn Any` alone knows its `TypeId` but not its name, so dispatch carries
/// both. Build one with [`Value::of`]; the key is the static type of the
/// referent, so `Value::of(&boxed)` for a `Box<dyn Any>` keys on the box,
/// not on its contents.
#[derive(Clone, Copy)]
pub struct Value<'v> {
    any: &'v dyn Any,
    key: TypeKey,
}

impl<'v> Value<'v> {
    pub fn of<T: Any>(value: &'v T) -> Self {
        Self {
            any: value,
            key: TypeKey::of::<T>(),
        }
    }

    pub fn key(&self) -> TypeKey {
        self.key
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&'v T> {
        self.any.downcast_ref::<T>()
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({})", self.key.name)
    }
}
