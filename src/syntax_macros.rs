//! Declarative sugar over the registry.
//!
//! - `define_trait!`: per-thread global trait handles with an accessor fn.
//! - `type_keys!`: arrays of `TypeKey` for batch registration.
//! - `trait_format!`: `format::format` with inline arguments.

// =============================================================================
// define_trait! - Named, globally reachable trait handles
// =============================================================================

/// Declare trait handles reachable from anywhere on the current thread.
///
/// Each entry expands to a `thread_local!` slot and an accessor function of
/// the same name returning a clone of the handle. The optional `with` block
/// runs once, when the slot is first touched, and is the place to register
/// built-in implementations. An error returned from it is logged and the
/// handle is kept.
///
/// # Example
///
/// ```ignore
/// define_trait! {
///     /// Text sinks.
///     pub write = TraitDefinition::new("Write")
///         .required("write", 1),
///         with |t| {
///             t.implement_for::<Vec<String>>(Overrides::new().with("write", push_line))
///         };
/// }
///
/// write().dispatch(&sink)?.call::<()>("write", ("hi".to_string(),))?;
/// ```
///
/// `Trait` is `!Send`, so every thread gets its own registry.
#[macro_export]
macro_rules! define_trait {
    ($(
        $(#[$meta:meta])*
        $vis:vis $name:ident = $definition:expr $(, with |$t:ident| $init:block)?;
    )*) => {
        $crate::paste::paste! {
            $(
                ::std::thread_local! {
                    static [<__ $name:upper _TRAIT>]: $crate::Trait = {
                        let handle = $crate::Trait::new($definition);
                        $(
                            let init = |$t: &$crate::Trait| -> $crate::Result<()> { $init };
                            if let Err(error) = init(&handle) {
                                $crate::tracing::error!(
                                    trait_name = handle.name(),
                                    %error,
                                    "built-in implementation rejected"
                                );
                            }
                        )?
                        handle
                    };
                }

                $(#[$meta])*
                $vis fn $name() -> $crate::Trait {
                    [<__ $name:upper _TRAIT>].with(::core::clone::Clone::clone)
                }
            )*
        }
    };
}

// =============================================================================
// type_keys! - Batch targets
// =============================================================================

/// Build a `[TypeKey; N]` from a list of types.
///
/// ```ignore
/// get_prop.implement(type_keys![Vec<String>, Logger], overrides)?;
/// ```
#[macro_export]
macro_rules! type_keys {
    ($($ty:ty),* $(,)?) => {
        [$($crate::TypeKey::of::<$ty>()),*]
    };
}

// =============================================================================
// trait_format! - Inline formatting arguments
// =============================================================================

/// `format::format` with arguments written inline.
///
/// ```ignore
/// let s = trait_format!("{:x} {?} {:4}", 255u32, logger, 7u8)?;
/// ```
#[cfg(feature = "format")]
#[macro_export]
macro_rules! trait_format {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::format::format($template, &[$($crate::Value::of(&$arg)),*])
    };
}

#[cfg(test)]
mod tests {
    use crate::{Interface, Overrides, Result, TraitDefinition, TypeKey};

    struct Counter(std::cell::Cell<u32>);

    crate::define_trait! {
        /// Bumps a counter.
        bump = TraitDefinition::new("Bump")
            .required("bump", 0),
            with |t| {
                t.implement_for::<Counter>(Overrides::new().with(
                    "bump",
                    |this: &Interface<'_>| -> Result<u32> {
                        let c = this.receiver::<Counter>()?;
                        c.0.set(c.0.get() + 1);
                        Ok(c.0.get())
                    },
                ))
            };

        empty = TraitDefinition::new("Empty");
    }

    #[test]
    fn test_define_trait_shares_handle_per_thread() {
        let c = Counter(std::cell::Cell::new(0));
        assert!(bump().is_implemented_for::<Counter>());
        assert_eq!(bump().dispatch(&c).unwrap().call::<u32>("bump", ()), Ok(1));
        // Same handle, same marker.
        assert!(bump().is(&bump()));
        assert!(!bump().is(&empty()));
    }

    #[test]
    fn test_type_keys() {
        let keys = type_keys![u8, String];
        assert_eq!(keys, [TypeKey::of::<u8>(), TypeKey::of::<String>()]);
    }
}
