//! # Methods
//!
//! A [`Method`] is a type-erased callable with a known arity. Closures become
//! methods through [`IntoMethod`]; the arity is read off the closure's
//! parameter list, so a method's "signature" is fixed when it is written:
//!
//! ```text
//! |this: &Interface<'_>|                      -> arity 0
//! |this: &Interface<'_>, s: String|           -> arity 1
//! |this: &Interface<'_>, a: usize, b: char|   -> arity 2
//! ```
//!
//! The receiver (`this`) is not counted. It is the interface the method was
//! dispatched through: `this.receiver::<T>()` gives the bound value, and
//! `this.call(..)` reaches sibling methods of the same trait.

pub mod args;
pub mod overrides;

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::error::{Result, TraitError};
use crate::interface::Interface;

pub use args::{Args, IntoArgs};
pub use overrides::Overrides;

type ErasedFn = dyn Fn(&Interface<'_>, &'static str, Args) -> Result<Box<dyn Any>>;

/// A type-erased trait method.
///
/// Cloning shares the underlying function.
#[derive(Clone)]
pub struct Method {
    arity: usize,
    func: Rc<ErasedFn>,
}

impl Method {
    /// Wrap a closure; see [`IntoMethod`] for the accepted shapes.
    pub fn new<M, F: IntoMethod<M>>(f: F) -> Self {
        f.into_method()
    }

    fn from_erased<G>(arity: usize, func: G) -> Self
    where
        G: Fn(&Interface<'_>, &'static str, Args) -> Result<Box<dyn Any>> + 'static,
    {
        Self {
            arity,
            func: Rc::new(func),
        }
    }

    /// Number of parameters, receiver excluded.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// True if both handles share one function.
    pub fn same(&self, other: &Method) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }

    pub(crate) fn invoke(
        &self,
        this: &Interface<'_>,
        name: &'static str,
        args: Args,
    ) -> Result<Box<dyn Any>> {
        if args.len() != self.arity {
            return Err(TraitError::ArgumentCount {
                method: name,
                expected: self.arity,
                found: args.len(),
            });
        }
        (self.func)(this, name, args)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method").field("arity", &self.arity).finish_non_exhaustive()
    }
}

// =============================================================================
// IntoMethod: closure -> Method
// =============================================================================

/// Conversion of closures into [`Method`]s.
///
/// Implemented for every `Fn(&Interface<'_>, A1, .., An) -> Result<R>` with
/// `n <= 8` and `'static` argument and return types. `Marker` only keeps the
/// impls apart; callers never name it.
///
/// Closure parameters must be annotated, since the closure is not passed
/// where an `Fn` bound is directly visible:
///
/// ```ignore
/// Method::new(|this: &Interface<'_>, width: usize| -> Result<String> { .. });
/// ```
pub trait IntoMethod<Marker> {
    fn into_method(self) -> Method;
}

impl IntoMethod<Method> for Method {
    fn into_method(self) -> Method {
        self
    }
}

macro_rules! count_idents {
    () => { 0usize };
    ($head:ident $($tail:ident)*) => { 1usize + count_idents!($($tail)*) };
}

macro_rules! impl_into_method {
    ($($arg:ident),*) => {
        impl<F, R, $($arg,)*> IntoMethod<fn($($arg,)*) -> R> for F
        where
            F: Fn(&Interface<'_>, $($arg),*) -> Result<R> + 'static,
            R: Any,
            $($arg: Any,)*
        {
            #[allow(non_snake_case, unused_mut, unused_variables, unused_assignments)]
            fn into_method(self) -> Method {
                const ARITY: usize = count_idents!($($arg)*);
                let f = self;
                Method::from_erased(ARITY, move |this, name, args| {
                    let mut args = args.into_values();
                    let mut index = 0;
                    $(
                        index += 1;
                        let $arg: $arg = args::take_arg(&mut args, name, index, ARITY)?;
                    )*
                    let out = f(this, $($arg),*)?;
                    Ok(Box::new(out) as Box<dyn Any>)
                })
            }
        }
    };
}

impl_into_method!();
impl_into_method!(A1);
impl_into_method!(A1, A2);
impl_into_method!(A1, A2, A3);
impl_into_method!(A1, A2, A3, A4);
impl_into_method!(A1, A2, A3, A4, A5);
impl_into_method!(A1, A2, A3, A4, A5, A6);
impl_into_method!(A1, A2, A3, A4, A5, A6, A7);
impl_into_method!(A1, A2, A3, A4, A5, A6, A7, A8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_follows_closure() {
        let zero = Method::new(|_: &Interface<'_>| -> Result<()> { Ok(()) });
        let one = Method::new(|_: &Interface<'_>, _s: String| -> Result<()> { Ok(()) });
        let three =
            Method::new(|_: &Interface<'_>, _a: u8, _b: u8, _c: u8| -> Result<u8> { Ok(0) });
        assert_eq!(zero.arity(), 0);
        assert_eq!(one.arity(), 1);
        assert_eq!(three.arity(), 3);
    }

    #[test]
    fn test_clone_shares_function() {
        let m = Method::new(|_: &Interface<'_>| -> Result<i32> { Ok(1) });
        let n = Method::new(|_: &Interface<'_>| -> Result<i32> { Ok(1) });
        assert!(m.same(&m.clone()));
        assert!(!m.same(&n));
    }
}
