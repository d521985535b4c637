//! Per-type method tables.


use super::{IntoMethod, Method};

/// Ordered mapping `method name -> Method` supplied when implementing a trait
/// for one type.
///
/// Insertion order is kept so validation reports the first offending name
/// deterministically. Inserting a name twice replaces the earlier method in
/// place.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    methods: Vec<(&'static str, Method)>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Overrides::insert`].
    pub fn with<M, F: IntoMethod<M>>(mut self, name: &'static str, f: F) -> Self {
        self.insert(name, f.into_method());
        self
    }

    pub fn insert(&mut self, name: &'static str, method: Method) {
        match self.methods.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = method,
            None => self.methods.push((name, method)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|(n, _)| *n == name).map(|(_, m)| m)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.methods.iter().map(|(n, _)| *n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Method)> {
        self.methods.iter().map(|(n, m)| (*n, m))
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
