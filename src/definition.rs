//! # Trait definitions
//!
//! A [`TraitDefinition`] lists a trait's methods in declaration order. Each
//! method either carries a default body or is abstract with a declared arity:
//!
//! ```ignore
//! let write = TraitDefinition::new("Write")
//!     .required("write", 1)
//!     .provided("writeln", |this: &Interface<'_>, s: String| -> Result<()> {
//!         this.call("write", (s + "\n",))
//!     });
//! ```
//!
//! The expected arity of a method is the default's own arity when it has one,
//! else the declared abstract arity. Implementations are checked against it.


use crate::method::{IntoMethod, Method};

/// One method slot of a trait.
#[derive(Clone, Debug)]
pub enum MethodSpec {
    /// Default body; implementations may override it.
    Provided(Method),
    /// No body; every implementation must supply one taking `arity` arguments.
    Required { arity: usize },
}

impl MethodSpec {
    pub fn arity(&self) -> usize {
        match self {
            MethodSpec::Provided(method) => method.arity(),
            MethodSpec::Required { arity } => *arity,
        }
    }

    pub fn is_abstract(&self) -> bool {
        matches!(self, MethodSpec::Required { .. })
    }

    pub fn default_method(&self) -> Option<&Method> {
        match self {
            MethodSpec::Provided(method) => Some(method),
            MethodSpec::Required { .. } => None,
        }
    }
}

/// Method names of a trait with their default/abstract status.
#[derive(Clone, Debug)]
pub struct TraitDefinition {
    name: &'static str,
    methods: Vec<(&'static str, MethodSpec)>,
}

impl TraitDefinition {
    /// Empty definition; `name` only shows up in diagnostics.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            methods: Vec::new(),
        }
    }

    /// Declare an abstract method taking `arity` arguments.
    pub fn required(mut self, method: &'static str, arity: usize) -> Self {
        self.set(method, MethodSpec::Required { arity });
        self
    }

    /// Declare a method with a default body.
    pub fn provided<M, F: IntoMethod<M>>(mut self, method: &'static str, f: F) -> Self {
        self.set(method, MethodSpec::Provided(f.into_method()));
        self
    }

    fn set(&mut self, method: &'static str, spec: MethodSpec) {
        match self.methods.iter_mut().find(|(n, _)| *n == method) {
            Some(slot) => slot.1 = spec,
            None => self.methods.push((method, spec)),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, method: &str) -> Option<&MethodSpec> {
        self.methods.iter().find(|(n, _)| *n == method).map(|(_, s)| s)
    }

    pub fn contains(&self, method: &str) -> bool {
        self.get(method).is_some()
    }

    /// Expected arity of `method`, if the trait defines it.
    pub fn arity(&self, method: &str) -> Option<usize> {
        self.get(method).map(MethodSpec::arity)
    }

    pub fn is_abstract(&self, method: &str) -> bool {
        self.get(method).is_some_and(MethodSpec::is_abstract)
    }

    pub fn method_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.methods.iter().map(|(n, _)| *n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &MethodSpec)> {
        self.methods.iter().map(|(n, s)| (*n, s))
    }

    /// Default bodies in declaration order.
    pub fn defaults(&self) -> impl Iterator<Item = (&'static str, &Method)> {
        self.iter().filter_map(|(n, s)| s.default_method().map(|m| (n, m)))
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
