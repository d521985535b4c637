//! # Bound interfaces
//!
//! The result of dispatching a value through a trait: the trait's defaults
//! merged with the value's overrides, all bound to that one value.
//!
//! ```text
//! defaults   { write: <abstract>, writeln: default }
//! overrides  { write: Logger::write }
//!            ---------------------------------------
//! merged     { write: Logger::write, writeln: default }  + bound value
//! ```
//!
//! Interfaces are transient; callers usually invoke one method and drop them.

use std::any::{Any, type_name};
use std::fmt;

use crate::error::{Result, TraitError};
use crate::handle::Trait;
use crate::method::{Args, IntoArgs, Method};
use crate::primitives::{Marker, Tagged, TypeKey, Value};

/// A value bound to the merged method table of one trait.
pub struct Interface<'v> {
    value: Value<'v>,
    trait_name: &'static str,
    methods: Vec<(&'static str, Method)>,
    marker: Marker,
}

impl<'v> Interface<'v> {
    pub(crate) fn new(
        value: Value<'v>,
        trait_name: &'static str,
        methods: Vec<(&'static str, Method)>,
        marker: Marker,
    ) -> Self {
        Self {
            value,
            trait_name,
            methods,
            marker,
        }
    }

    /// The bound value.
    pub fn value(&self) -> Value<'v> {
        self.value
    }

    pub fn type_key(&self) -> TypeKey {
        self.value.key()
    }

    pub fn trait_name(&self) -> &'static str {
        self.trait_name
    }

    /// The bound value as a `T`; fails if the value is of another type.
    pub fn receiver<T: Any>(&self) -> Result<&'v T> {
        self.value.downcast_ref::<T>().ok_or(TraitError::ReceiverType {
            expected: type_name::<T>(),
            found: self.value.key().name(),
        })
    }

    /// Invoke `method` and downcast its result.
    ///
    /// ```ignore
    /// let padded: String = left_pad.dispatch(&"ab")?.call("pad", (5usize,))?;
    /// ```
    pub fn call<R: Any>(&self, method: &str, args: impl IntoArgs) -> Result<R> {
        let (name, m) = self.lookup(method)?;
        let out = m.invoke(self, name, args.into_args())?;
        out.downcast::<R>()
            .map(|boxed| *boxed)
            .map_err(|_| TraitError::ReturnType {
                method: name,
                expected: type_name::<R>(),
            })
    }

    /// Type-erased form of [`Interface::call`].
    pub fn call_dyn(&self, method: &str, args: Args) -> Result<Box<dyn Any>> {
        let (name, m) = self.lookup(method)?;
        m.invoke(self, name, args)
    }

    /// Dispatch the same value through another trait.
    pub fn rebind(&self, other: &Trait) -> Result<Interface<'v>> {
        other.dispatch_value(self.value)
    }

    pub fn has_method(&self, method: &str) -> bool {
        self.lookup(method).is_ok()
    }

    /// Arity of `method` in the merged table.
    pub fn arity(&self, method: &str) -> Option<usize> {
        self.lookup(method).ok().map(|(_, m)| m.arity())
    }

    pub fn method_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.methods.iter().map(|(n, _)| *n)
    }

    /// The merged method behind `method`.
    pub fn method(&self, method: &str) -> Option<&Method> {
        self.lookup(method).ok().map(|(_, m)| m)
    }

    fn lookup(&self, method: &str) -> Result<(&'static str, &Method)> {
        self.methods
            .iter()
            .find(|(n, _)| *n == method)
            .map(|(n, m)| (*n, m))
            .ok_or_else(|| TraitError::NoSuchMethod {
                trait_name: self.trait_name,
                method: method.into(),
            })
    }
}

impl Tagged for Interface<'_> {
    fn marker(&self) -> Option<&Marker> {
        Some(&self.marker)
    }
}

impl fmt::Debug for Interface<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interface")
            .field("trait", &self.trait_name)
            .field("type", &self.value.key().name())
            .field("methods", &self.methods.iter().map(|(n, _)| *n).collect::<Vec<_>>())
            .finish()
    }
}
