//! Error type shared by registration, dispatch and invocation.

use thiserror::Error;

pub type Result<T, E = TraitError> = std::result::Result<T, E>;

/// Every failure the registry can report.
///
/// Registration errors leave the registry untouched; the batch form of
/// `Trait::implement` keeps whatever succeeded before the failing target.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TraitError {
    /// Dispatch or copy-registration found no entry for the type.
    #[error("trait `{trait_name}` not implemented for `{type_name}`")]
    NotImplemented {
        trait_name: &'static str,
        type_name: &'static str,
    },

    #[error("trait `{trait_name}` already implemented for `{type_name}`")]
    AlreadyImplemented {
        trait_name: &'static str,
        type_name: &'static str,
    },

    /// An override names a method the trait does not define.
    #[error("`{method}` does not exist in trait `{trait_name}`")]
    UnknownMethod {
        trait_name: &'static str,
        method: &'static str,
    },

    /// An abstract method has no override.
    #[error("trait `{trait_name}` implementation for `{type_name}` missing `{method}`")]
    MissingImplementation {
        trait_name: &'static str,
        type_name: &'static str,
        method: &'static str,
    },

    #[error("`{method}` implementation should take {expected} arguments, found {found}")]
    SignatureMismatch {
        trait_name: &'static str,
        method: &'static str,
        expected: usize,
        found: usize,
    },

    // -------------------------------------------------------------------------
    // Invocation
    // -------------------------------------------------------------------------
    #[error("no method `{method}` in trait `{trait_name}`")]
    NoSuchMethod {
        trait_name: &'static str,
        method: String,
    },

    #[error("`{method}` takes {expected} arguments but {found} were supplied")]
    ArgumentCount {
        method: &'static str,
        expected: usize,
        found: usize,
    },

    /// Arguments are numbered from 1.
    #[error("argument #{index} of `{method}` is not a `{expected}`")]
    ArgumentType {
        method: &'static str,
        index: usize,
        expected: &'static str,
    },

    #[error("`{method}` did not return a `{expected}`")]
    ReturnType {
        method: &'static str,
        expected: &'static str,
    },

    #[error("receiver is a `{found}`, not a `{expected}`")]
    ReceiverType {
        expected: &'static str,
        found: &'static str,
    },

    // -------------------------------------------------------------------------
    // Formatting helper
    // -------------------------------------------------------------------------
    #[error("invalid modifier `{{{0}}}`")]
    InvalidModifier(String),

    #[error("missing insertion #{0}")]
    MissingInsertion(usize),
}
