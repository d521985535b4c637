//! # Implementation registry
//!
//! Per-trait table of validated implementations.
//!
//! ```text
//! buckets: short name -> [ImplEntry, ...]
//!
//!   "S"      -> [ (a::S, overrides#1), (b::S, overrides#2) ]
//!   "Logger" -> [ (app::Logger, overrides#3) ]
//! ```
//!
//! Entries are bucketed by short type name and told apart by `TypeId`, so two
//! types that print the same never share an implementation.

use std::collections::HashMap;
use std::rc::Rc;

use crate::definition::TraitDefinition;
use crate::error::{Result, TraitError};
use crate::method::Overrides;
use crate::primitives::TypeKey;

/// One registered implementation.
#[derive(Clone, Debug)]
pub struct ImplEntry {
    key: TypeKey,
    overrides: Rc<Overrides>,
}

impl ImplEntry {
    pub(crate) fn new(key: TypeKey, overrides: Rc<Overrides>) -> Self {
        Self { key, overrides }
    }

    pub fn key(&self) -> TypeKey {
        self.key
    }

    pub fn overrides(&self) -> &Rc<Overrides> {
        &self.overrides
    }
}

#[derive(Debug, Default)]
pub(crate) struct Registry {
    buckets: HashMap<&'static str, Vec<ImplEntry>>,
    len: usize,
}

impl Registry {
    pub(crate) fn find(&self, key: TypeKey) -> Option<&ImplEntry> {
        self.buckets
            .get(key.short_name())?
            .iter()
            .find(|entry| entry.key == key)
    }

    pub(crate) fn contains(&self, key: TypeKey) -> bool {
        self.find(key).is_some()
    }

    /// Appends without checks; callers validate first.
    pub(crate) fn insert(&mut self, entry: ImplEntry) {
        self.buckets.entry(entry.key.short_name()).or_default().push(entry);
        self.len += 1;
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = TypeKey> + '_ {
        self.buckets.values().flatten().map(ImplEntry::key)
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Checks a literal override table against the trait's definition.
///
/// Order is fixed: unknown names, then missing abstract methods, then
/// arities. The duplicate-type check runs before this, in `Trait::implement`.
pub(crate) fn validate(
    definition: &TraitDefinition,
    key: TypeKey,
    overrides: &Overrides,
) -> Result<()> {
    let trait_name = definition.name();

    if let Some(method) = overrides.names().find(|n| !definition.contains(n)) {
        return Err(TraitError::UnknownMethod { trait_name, method });
    }

    if let Some(method) = definition
        .iter()
        .find(|(n, spec)| spec.is_abstract() && !overrides.contains(n))
        .map(|(n, _)| n)
    {
        return Err(TraitError::MissingImplementation {
            trait_name,
            type_name: key.name(),
            method,
        });
    }

    for (method, spec) in definition.iter() {
        let Some(supplied) = overrides.get(method) else {
            continue;
        };
        let expected = spec.arity();
        if supplied.arity() != expected {
            return Err(TraitError::SignatureMismatch {
                trait_name,
                method,
                expected,
                found: supplied.arity(),
            });
        }
    }

    Ok(())
}
