//! Per-trait identity markers.
//!
//! Every trait owns exactly one [`Marker`]. Markers compare by allocation,
//! never by content: two traits built from identical definitions still carry
//! different markers.

use std::rc::Rc;
use std::fmt;

struct MarkerInner {
    trait_name: &'static str,
}

/// Opaque identity tag of one trait instance.
#[derive(Clone)]
pub struct Marker(Rc<MarkerInner>);

impl Marker {
    pub(crate) fn new(trait_name: &'static str) -> Self {
        Self(Rc::new(MarkerInner { trait_name }))
    }

    /// Name of the trait this marker was minted for.
    pub fn trait_name(&self) -> &'static str {
        self.0.trait_name
    }

    /// Identity comparison.
    pub fn same(&self, other: &Marker) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Marker {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for Marker {}

impl fmt::Debug for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Marker({} @ {:p})", self.0.trait_name, Rc::as_ptr(&self.0))
    }
}

/// Anything that may carry a trait marker.
///
/// Implemented by trait handles, dispatch results and markers themselves, so
/// `Trait::is` works on all three.
pub trait Tagged {
    fn marker(&self) -> Option<&Marker>;
}

impl Tagged for Marker {
    fn marker(&self) -> Option<&Marker> {
        Some(self)
    }
}

impl<T: Tagged> Tagged for Option<T> {
    fn marker(&self) -> Option<&Marker> {
        self.as_ref().and_then(Tagged::marker)
    }
}
