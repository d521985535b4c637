//! # Trait-based formatting
//!
//! A small template formatter whose placeholders dispatch through runtime
//! traits, so any type can be made printable without touching it:
//!
//! ```ignore
//! debug().implement_for::<Logger>(Overrides::new().with(
//!     "fmt",
//!     |_: &Interface<'_>| -> Result<String> { Ok("OK".into()) },
//! ))?;
//! assert_eq!(trait_format!("logger is {?}", logger)?, "logger is OK");
//! ```
//!
//! ## Placeholders
//!
//! | Body        | Output                              |
//! |-------------|-------------------------------------|
//! | `{}`        | plain string form                   |
//! | `{?}`       | `debug().fmt()`                     |
//! | `{:N}`      | `left_pad().pad(N)`, any width      |
//! | `{:x}` `{:X}` | `lower_hex()` / `upper_hex()` `.convert()` |
//! | `{.N}`      | `to_fixed().fixed(N)`, one digit    |
//!
//! A placeholder runs from a `{` to the next `}`. There is no escaping.
//!
//! Numbers are zero-padded after their sign, so `-5` under `{:4}` is `-005`
//! rather than `00-5`. Text is padded with spaces.

pub mod traits;


use crate::error::{Result, TraitError};
use crate::primitives::Value;

pub use traits::{debug, left_pad, lower_hex, plain_string, to_fixed, upper_hex};

/// A parsed placeholder body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Plain,
    Debug,
    Pad(usize),
    LowerHex,
    UpperHex,
    Fixed(usize),
}

impl Modifier {
    pub fn parse(body: &str) -> Result<Self> {
        let invalid = || TraitError::InvalidModifier(body.into());
        match body {
            "" => return Ok(Modifier::Plain),
            "?" => return Ok(Modifier::Debug),
            ":x" => return Ok(Modifier::LowerHex),
            ":X" => return Ok(Modifier::UpperHex),
            _ => {}
        }
        if let Some(width) = body.strip_prefix(':') {
            if !width.is_empty() && width.bytes().all(|b| b.is_ascii_digit()) {
                return width.parse().map(Modifier::Pad).map_err(|_| invalid());
            }
        }
        if let Some(digits) = body.strip_prefix('.') {
            if let [d] = digits.as_bytes() {
                if d.is_ascii_digit() {
                    return Ok(Modifier::Fixed(usize::from(d - b'0')));
                }
            }
        }
        Err(invalid())
    }

    fn render(self, value: Value<'_>) -> Result<String> {
        match self {
            Modifier::Plain => Ok(plain_string(value)),
            Modifier::Debug => debug().dispatch_value(value)?.call("fmt", ()),
            Modifier::Pad(width) => left_pad().dispatch_value(value)?.call("pad", (width,)),
            Modifier::LowerHex => lower_hex().dispatch_value(value)?.call("convert", ()),
            Modifier::UpperHex => upper_hex().dispatch_value(value)?.call("convert", ()),
            Modifier::Fixed(digits) => to_fixed().dispatch_value(value)?.call("fixed", (digits,)),
        }
    }
}

/// Substitute each placeholder in `template` with the next insertion.
///
/// Fails with `MissingInsertion` when placeholders outnumber insertions
/// (checked before the placeholder body), with `InvalidModifier` for an
/// unrecognized body, and with any dispatch error of the trait involved.
/// Surplus insertions are ignored.
pub fn format(template: &str, insertions: &[Value<'_>]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut next = 0;

    while let Some(open) = rest.find('{') {
        let Some(len) = rest[open + 1..].find('}') else {
            break;
        };
        out.push_str(&rest[..open]);
        let body = &rest[open + 1..open + 1 + len];

        let value = *insertions
            .get(next)
            .ok_or(TraitError::MissingInsertion(next + 1))?;
        next += 1;

        out.push_str(&Modifier::parse(body)?.render(value)?);
        rest = &rest[open + len + 2..];
    }
    out.push_str(rest);

    tracing::trace!(template, used = next, "formatted");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_modifiers() {
        assert_eq!(Modifier::parse(""), Ok(Modifier::Plain));
        assert_eq!(Modifier::parse("?"), Ok(Modifier::Debug));
        assert_eq!(Modifier::parse(":12"), Ok(Modifier::Pad(12)));
        assert_eq!(Modifier::parse(":x"), Ok(Modifier::LowerHex));
        assert_eq!(Modifier::parse(":X"), Ok(Modifier::UpperHex));
        assert_eq!(Modifier::parse(".3"), Ok(Modifier::Fixed(3)));
    }

    #[test]
    fn test_parse_rejects() {
        for body in [".12", ":", ":y", "??", "x", ".a", ":99999999999999999999999999"] {
            assert_eq!(
                Modifier::parse(body),
                Err(TraitError::InvalidModifier(body.into())),
                "body {body:?}"
            );
        }
    }

    #[test]
    fn test_format_mixed() {
        let s = format(
            "{} | {:x} | {:X} | {:4} | {.2} | {?}",
            &[
                Value::of(&"a"),
                Value::of(&255u32),
                Value::of(&255u32),
                Value::of(&7u16),
                Value::of(&1.0f64),
                Value::of(&42i32),
            ],
        )
        .unwrap();
        assert_eq!(s, "a | ff | FF | 0007 | 1.00 | 42");
    }

    #[test]
    fn test_missing_insertion_checked_first() {
        // Second placeholder is invalid, but the missing insertion wins.
        let err = format("{} {!}", &[Value::of(&1u8)]).unwrap_err();
        assert_eq!(err, TraitError::MissingInsertion(2));
    }

    #[test]
    fn test_unclosed_brace_is_literal() {
        assert_eq!(format("a { b", &[]).unwrap(), "a { b");
        assert_eq!(format("no placeholders", &[Value::of(&1u8)]).unwrap(), "no placeholders");
    }

    #[test]
    fn test_wide_pad_does_not_panic() {
        let s = format("{:70000}", &[Value::of(&1u8)]).unwrap();
        assert_eq!(s.len(), 70_000);
        let s = format("{:65536}|", &[Value::of(&"ab")]).unwrap();
        assert_eq!(s.len(), 65_537);
        assert!(s.ends_with("ab|"));
    }

    #[test]
    fn test_unregistered_type_fails() {
        struct Opaque;
        let err = format("{?}", &[Value::of(&Opaque)]).unwrap_err();
        assert!(matches!(err, TraitError::NotImplemented { trait_name: "Debug", .. }));
    }
}
