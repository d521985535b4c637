//! Type-erased argument lists.

use std::any::{Any, type_name};

use crate::error::{Result, TraitError};

/// Positional arguments of one method call.
#[derive(Default)]
pub struct Args(Vec<Box<dyn Any>>);

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one argument.
    pub fn push<T: Any>(mut self, value: T) -> Self {
        self.0.push(Box::new(value));
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn into_values(self) -> std::vec::IntoIter<Box<dyn Any>> {
        self.0.into_iter()
    }
}

impl std::fmt::Debug for Args {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Args({})", self.0.len())
    }
}

/// Pops the next argument and downcasts it to `T`.
///
/// `index` is 1-based and only used for error reporting.
pub(crate) fn take_arg<T: Any>(
    args: &mut impl Iterator<Item = Box<dyn Any>>,
    method: &'static str,
    index: usize,
    arity: usize,
) -> Result<T> {
    let boxed = args.next().ok_or(TraitError::ArgumentCount {
        method,
        expected: arity,
        found: index - 1,
    })?;
    boxed
        .downcast::<T>()
        .map(|value| *value)
        .map_err(|_| TraitError::ArgumentType {
            method,
            index,
            expected: type_name::<T>(),
        })
}

/// Conversion into [`Args`]; implemented for tuples of up to eight values.
///
/// ```ignore
/// iface.call::<()>("write", ("hello".to_string(),))?;
/// ```
pub trait IntoArgs {
    fn into_args(self) -> Args;
}

impl IntoArgs for Args {
    fn into_args(self) -> Args {
        self
    }
}

impl IntoArgs for () {
    fn into_args(self) -> Args {
        Args::new()
    }
}

macro_rules! impl_into_args {
    ($($arg:ident),+) => {
        impl<$($arg: Any),+> IntoArgs for ($($arg,)+) {
            #[allow(non_snake_case)]
            fn into_args(self) -> Args {
                let ($($arg,)+) = self;
                Args::new()$(.push($arg))+
            }
        }
    };
}

impl_into_args!(A1);
impl_into_args!(A1, A2);
impl_into_args!(A1, A2, A3);
impl_into_args!(A1, A2, A3, A4);
impl_into_args!(A1, A2, A3, A4, A5);
impl_into_args!(A1, A2, A3, A4, A5, A6);
impl_into_args!(A1, A2, A3, A4, A5, A6, A7);
impl_into_args!(A1, A2, A3, A4, A5, A6, A7, A8);
