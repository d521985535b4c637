//! # Trait handles
//!
//! [`Trait`] is the user-facing side of a runtime trait: it owns the
//! definition, the registry of implementations and the trait's marker.
//!
//! ```text
//!   Trait::new(definition)
//!        |
//!        +-- implement(targets, overrides | source)   validate + register
//!        +-- implemented_for(key)                      lookup
//!        +-- dispatch(&value)                          lookup + merge + bind
//!        +-- is(&tagged)                               marker identity
//! ```
//!
//! Handles are cheap to clone; clones share one registry.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::definition::TraitDefinition;
use crate::error::{Result, TraitError};
use crate::interface::Interface;
use crate::method::{Method, Overrides};
use crate::primitives::{Marker, Tagged, TypeKey, Value};
use crate::registry::{self, ImplEntry, Registry};

// =============================================================================
// Registration arguments
// =============================================================================

/// The type(s) an implementation is registered for.
///
/// Built from a single [`TypeKey`] or any sequence of keys.
#[derive(Clone, Debug)]
pub struct Targets(Vec<TypeKey>);

impl From<TypeKey> for Targets {
    fn from(key: TypeKey) -> Self {
        Self(vec![key])
    }
}

impl From<Vec<TypeKey>> for Targets {
    fn from(keys: Vec<TypeKey>) -> Self {
        Self(keys)
    }
}

impl From<&[TypeKey]> for Targets {
    fn from(keys: &[TypeKey]) -> Self {
        Self(keys.to_vec())
    }
}

impl<const N: usize> From<[TypeKey; N]> for Targets {
    fn from(keys: [TypeKey; N]) -> Self {
        Self(keys.to_vec())
    }
}

/// What gets registered: a literal override table, or the implementation
/// already registered for another type.
#[derive(Clone, Debug)]
pub enum ImplSource {
    Overrides(Rc<Overrides>),
    CopyFrom(TypeKey),
}

impl Default for ImplSource {
    fn default() -> Self {
        ImplSource::Overrides(Rc::new(Overrides::new()))
    }
}

impl From<Overrides> for ImplSource {
    fn from(overrides: Overrides) -> Self {
        ImplSource::Overrides(Rc::new(overrides))
    }
}

impl From<Rc<Overrides>> for ImplSource {
    fn from(overrides: Rc<Overrides>) -> Self {
        ImplSource::Overrides(overrides)
    }
}

impl From<TypeKey> for ImplSource {
    fn from(source: TypeKey) -> Self {
        ImplSource::CopyFrom(source)
    }
}

// =============================================================================
// Trait
// =============================================================================

struct TraitInner {
    definition: TraitDefinition,
    registry: RefCell<Registry>,
    marker: Marker,
}

/// A runtime trait: definition, registry and dispatcher.
#[derive(Clone)]
pub struct Trait {
    inner: Rc<TraitInner>,
}

/// Same as [`Trait::new`].
pub fn create_trait(definition: TraitDefinition) -> Trait {
    Trait::new(definition)
}

impl Trait {
    /// New trait with an empty registry and a fresh marker.
    pub fn new(definition: TraitDefinition) -> Self {
        let marker = Marker::new(definition.name());
        Self {
            inner: Rc::new(TraitInner {
                definition,
                registry: RefCell::new(Registry::default()),
                marker,
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.inner.definition.name()
    }

    pub fn definition(&self) -> &TraitDefinition {
        &self.inner.definition
    }

    /// Register an implementation for one or more types.
    ///
    /// `source` is either an [`Overrides`] table, validated against the
    /// definition, or a [`TypeKey`] whose existing implementation is shared
    /// with the new type(s).
    ///
    /// Targets are registered in order and the first failure is returned.
    /// Targets registered before the failure stay registered.
    #[tracing::instrument(level = "trace", skip_all, fields(trait_name = self.name()))]
    pub fn implement(&self, targets: impl Into<Targets>, source: impl Into<ImplSource>) -> Result<()> {
        let targets: Targets = targets.into();
        let source: ImplSource = source.into();
        for key in targets.0 {
            if let Err(error) = self.implement_one(key, &source) {
                tracing::debug!(trait_name = self.name(), type_name = key.name(), %error, "registration rejected");
                return Err(error);
            }
        }
        Ok(())
    }

    /// [`Trait::implement`] for a single type named by a type parameter.
    pub fn implement_for<T: ?Sized + 'static>(&self, source: impl Into<ImplSource>) -> Result<()> {
        self.implement(TypeKey::of::<T>(), source)
    }

    fn implement_one(&self, key: TypeKey, source: &ImplSource) -> Result<()> {
        let trait_name = self.name();
        if self.implemented_for(key) {
            return Err(TraitError::AlreadyImplemented {
                trait_name,
                type_name: key.name(),
            });
        }

        let (overrides, copied_from) = match source {
            ImplSource::CopyFrom(from) => {
                let overrides = self
                    .inner
                    .registry
                    .borrow()
                    .find(*from)
                    .map(|entry| Rc::clone(entry.overrides()))
                    .ok_or(TraitError::NotImplemented {
                        trait_name,
                        type_name: from.name(),
                    })?;
                (overrides, Some(from.name()))
            }
            ImplSource::Overrides(overrides) => {
                registry::validate(&self.inner.definition, key, overrides)?;
                (Rc::clone(overrides), None)
            }
        };

        self.inner.registry.borrow_mut().insert(ImplEntry::new(key, overrides));
        tracing::debug!(trait_name, type_name = key.name(), copied_from, "registered implementation");
        Ok(())
    }

    pub fn implemented_for(&self, key: TypeKey) -> bool {
        self.inner.registry.borrow().contains(key)
    }

    pub fn is_implemented_for<T: ?Sized + 'static>(&self) -> bool {
        self.implemented_for(TypeKey::of::<T>())
    }

    /// Resolve `value` by its exact type and bind the merged methods to it.
    ///
    /// Types without a registration fail with `NotImplemented`, even when
    /// every method has a default.
    pub fn dispatch<'v, T: Any>(&self, value: &'v T) -> Result<Interface<'v>> {
        self.dispatch_value(Value::of(value))
    }

    /// Type-erased form of [`Trait::dispatch`].
    pub fn dispatch_value<'v>(&self, value: Value<'v>) -> Result<Interface<'v>> {
        let key = value.key();
        let overrides = self
            .inner
            .registry
            .borrow()
            .find(key)
            .map(|entry| Rc::clone(entry.overrides()))
            .ok_or(TraitError::NotImplemented {
                trait_name: self.name(),
                type_name: key.name(),
            })?;
        tracing::trace!(trait_name = self.name(), type_name = key.name(), "dispatch");

        Ok(Interface::new(
            value,
            self.name(),
            self.merge(&overrides),
            self.inner.marker.clone(),
        ))
    }

    // Defaults in declaration order, overridden by name.
    fn merge(&self, overrides: &Overrides) -> Vec<(&'static str, Method)> {
        self.inner
            .definition
            .iter()
            .filter_map(|(name, spec)| {
                overrides
                    .get(name)
                    .or_else(|| spec.default_method())
                    .map(|method| (name, method.clone()))
            })
            .collect()
    }

    /// True if `value` carries this trait's marker.
    pub fn is<V: Tagged + ?Sized>(&self, value: &V) -> bool {
        value.marker().is_some_and(|m| m.same(&self.inner.marker))
    }

    /// Types with a registered implementation.
    pub fn implementors(&self) -> Vec<TypeKey> {
        self.inner.registry.borrow().keys().collect()
    }

    /// The implementation registered for `key`, if any.
    pub fn implementation(&self, key: TypeKey) -> Option<ImplEntry> {
        self.inner.registry.borrow().find(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.registry.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Tagged for Trait {
    fn marker(&self) -> Option<&Marker> {
        Some(&self.inner.marker)
    }
}

impl fmt::Debug for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trait")
            .field("name", &self.name())
            .field("methods", &self.inner.definition.method_names().collect::<Vec<_>>())
            .field("implementations", &self.len())
            .finish()
    }
}
