//! The traits behind the placeholders, with their built-in implementations.
//!
//! | Trait      | Method          | Built-in for                      |
//! |------------|-----------------|-----------------------------------|
//! | `LowerHex` | `convert()`     | numbers                           |
//! | `UpperHex` | `convert()`     | numbers                           |
//! | `Debug`    | `fmt()` default | numbers (override), text, bool, char |
//! | `LeftPad`  | `pad(width)`    | numbers (zeros), text (spaces)    |
//! | `ToFixed`  | `fixed(digits)` | numbers, numeric text             |
//!
//! Floats print in hexadecimal with a fractional part (`1.5` -> `1.8`).
//! Text given to `ToFixed` is parsed as a number first; text that does not
//! parse prints as `NaN`, blank text as zero.
//!
//! Register more types on the accessor's handle, e.g.
//! `debug().implement_for::<Logger>(..)`.

use crate::{Interface, Overrides, Result, TraitDefinition, Value};

crate::define_trait! {
    /// `{:x}`: lowercase hexadecimal.
    pub lower_hex = TraitDefinition::new("LowerHex").required("convert", 0),
        with |t| { register_hex(t, false) };

    /// `{:X}`: uppercase hexadecimal.
    pub upper_hex = TraitDefinition::new("UpperHex").required("convert", 0),
        with |t| { register_hex(t, true) };

    /// `{?}`: debug string. The default body returns the plain string form.
    pub debug = TraitDefinition::new("Debug")
        .provided("fmt", |this: &Interface<'_>| -> Result<String> {
            Ok(plain_string(this.value()))
        }),
        with |t| { register_debug(t) };

    /// `{:N}`: pad to a minimum width.
    pub left_pad = TraitDefinition::new("LeftPad").required("pad", 1),
        with |t| { register_pad(t) };

    /// `{.N}`: fixed-point with N fractional digits.
    pub to_fixed = TraitDefinition::new("ToFixed").required("fixed", 1),
        with |t| { register_fixed(t) };
}

/// String form used by `{}` and by the default `Debug::fmt`.
///
/// Text, numbers, `bool` and `char` print as themselves; anything else prints
/// as its bracketed short type name, e.g. `[Logger]`.
pub fn plain_string(value: Value<'_>) -> String {
    macro_rules! try_display {
        ($($ty:ty),*) => {
            $(
                if let Some(v) = value.downcast_ref::<$ty>() {
                    return v.to_string();
                }
            )*
        };
    }
    try_display!(
        String, &'static str, bool, char,
        u8, u16, u32, u64, u128, usize,
        i8, i16, i32, i64, i128, isize,
        f32, f64
    );
    format!("[{}]", value.key().short_name())
}

// =============================================================================
// Built-in registrations
// =============================================================================

fn register_hex(t: &crate::Trait, upper: bool) -> Result<()> {
    macro_rules! unsigned {
        ($($ty:ty),*) => {$(
            t.implement_for::<$ty>(Overrides::new().with(
                "convert",
                move |this: &Interface<'_>| -> Result<String> {
                    let v = *this.receiver::<$ty>()?;
                    Ok(if upper { format!("{v:X}") } else { format!("{v:x}") })
                },
            ))?;
        )*};
    }
    // Negative values keep their sign: -255 -> "-ff".
    macro_rules! signed {
        ($($ty:ty),*) => {$(
            t.implement_for::<$ty>(Overrides::new().with(
                "convert",
                move |this: &Interface<'_>| -> Result<String> {
                    let v = *this.receiver::<$ty>()?;
                    let sign = if v < 0 { "-" } else { "" };
                    let abs = v.unsigned_abs();
                    Ok(if upper { format!("{sign}{abs:X}") } else { format!("{sign}{abs:x}") })
                },
            ))?;
        )*};
    }
    macro_rules! float {
        ($($ty:ty),*) => {$(
            t.implement_for::<$ty>(Overrides::new().with(
                "convert",
                move |this: &Interface<'_>| -> Result<String> {
                    Ok(float_hex(f64::from(*this.receiver::<$ty>()?), upper))
                },
            ))?;
        )*};
    }
    unsigned!(u8, u16, u32, u64, u128, usize);
    signed!(i8, i16, i32, i64, i128, isize);
    float!(f32, f64);
    Ok(())
}

/// Hexadecimal digits of a float, with a `.` and fractional digits when the
/// value is not integral. Non-finite values print as themselves.
fn float_hex(v: f64, upper: bool) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let mut out = String::from(if v < 0.0 { "-" } else { "" });

    // Halving by 16 and taking remainders is exact for integral floats.
    let mut int = v.abs().trunc();
    let mut frac = v.abs() - int;
    let mut digits = Vec::new();
    loop {
        digits.push((int % 16.0) as u32);
        int = (int / 16.0).trunc();
        if int < 1.0 {
            break;
        }
    }
    out.extend(digits.iter().rev().filter_map(|&d| char::from_digit(d, 16)));

    // Terminates: every step drops four bits of the mantissa.
    if frac > 0.0 {
        out.push('.');
        while frac > 0.0 {
            frac *= 16.0;
            let d = frac.trunc();
            out.extend(char::from_digit(d as u32, 16));
            frac -= d;
        }
    }

    if upper { out.to_uppercase() } else { out }
}

fn register_debug(t: &crate::Trait) -> Result<()> {
    t.implement(crate::type_keys![String, &'static str, bool, char], Overrides::new())?;

    macro_rules! numbers {
        ($($ty:ty),*) => {$(
            t.implement_for::<$ty>(Overrides::new().with(
                "fmt",
                |this: &Interface<'_>| -> Result<String> { Ok(this.receiver::<$ty>()?.to_string()) },
            ))?;
        )*};
    }
    numbers!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
    Ok(())
}

// Widths are not bounded, so padding is built by hand; `{:width$}` would
// panic past `u16::MAX`.
fn pad_start(s: &str, width: usize, fill: char) -> String {
    let missing = width.saturating_sub(s.chars().count());
    let mut out = String::with_capacity(s.len() + missing);
    out.extend(std::iter::repeat_n(fill, missing));
    out.push_str(s);
    out
}

// Zeros go after the sign: -5 padded to 4 is "-005".
fn zero_pad(s: &str, width: usize) -> String {
    match s.strip_prefix('-') {
        Some(digits) => format!("-{}", pad_start(digits, width.saturating_sub(1), '0')),
        None => pad_start(s, width, '0'),
    }
}

fn register_pad(t: &crate::Trait) -> Result<()> {
    let text = Overrides::new().with("pad", |this: &Interface<'_>, width: usize| -> Result<String> {
        Ok(pad_start(&plain_string(this.value()), width, ' '))
    });
    t.implement(crate::type_keys![String, &'static str], text)?;

    macro_rules! numbers {
        ($($ty:ty),*) => {$(
            t.implement_for::<$ty>(Overrides::new().with(
                "pad",
                |this: &Interface<'_>, width: usize| -> Result<String> {
                    Ok(zero_pad(&this.receiver::<$ty>()?.to_string(), width))
                },
            ))?;
        )*};
    }
    numbers!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
    Ok(())
}

fn register_fixed(t: &crate::Trait) -> Result<()> {
    macro_rules! numbers {
        ($($ty:ty),*) => {$(
            t.implement_for::<$ty>(Overrides::new().with(
                "fixed",
                |this: &Interface<'_>, digits: usize| -> Result<String> {
                    let v = *this.receiver::<$ty>()? as f64;
                    Ok(format!("{v:.digits$}"))
                },
            ))?;
        )*};
    }
    numbers!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

    let text = Overrides::new().with("fixed", |this: &Interface<'_>, digits: usize| -> Result<String> {
        let v = parse_number(&plain_string(this.value()));
        Ok(format!("{v:.digits$}"))
    });
    t.implement(crate::type_keys![String, &'static str], text)?;
    Ok(())
}

fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    s.parse().unwrap_or(f64::NAN)
}
