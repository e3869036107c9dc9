//! Typed conversion from stored entry values
//!
//! [`ConversionKind`] distinguishes format errors (not a number), overflow
//! (a number that does not fit the target width), and unsupported targets,
//! without any runtime type inspection.

use std::num::IntErrorKind;

use crate::error::ConversionKind;

/// Conversion from a stored INI string value.
///
/// Implemented for the primitive set (integers, floats, `bool`, `char`,
/// `String`). User types can implement it to become retrievable through
/// [`Section::get_value_as`](crate::Section::get_value_as); an impl that
/// cannot meaningfully parse from a string should return
/// [`ConversionKind::Unsupported`].
pub trait FromIniValue: Sized {
    fn from_ini_value(value: &str) -> Result<Self, ConversionKind>;
}

impl FromIniValue for String {
    fn from_ini_value(value: &str) -> Result<Self, ConversionKind> {
        Ok(value.to_string())
    }
}

impl FromIniValue for bool {
    // Accepts "true" and "false" in any ASCII case, surrounding whitespace
    // ignored.
    fn from_ini_value(value: &str) -> Result<Self, ConversionKind> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if trimmed.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(ConversionKind::InvalidFormat)
        }
    }
}

impl FromIniValue for char {
    fn from_ini_value(value: &str) -> Result<Self, ConversionKind> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(ConversionKind::InvalidFormat),
        }
    }
}

macro_rules! impl_from_ini_value_int {
    ($($ty:ty),+ $(,)?) => {$(
        impl FromIniValue for $ty {
            fn from_ini_value(value: &str) -> Result<Self, ConversionKind> {
                value.trim().parse::<$ty>().map_err(|err| match err.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        ConversionKind::Overflow
                    }
                    _ => ConversionKind::InvalidFormat,
                })
            }
        }
    )+};
}

impl_from_ini_value_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_from_ini_value_float {
    ($($ty:ty),+ $(,)?) => {$(
        impl FromIniValue for $ty {
            fn from_ini_value(value: &str) -> Result<Self, ConversionKind> {
                value
                    .trim()
                    .parse::<$ty>()
                    .map_err(|_| ConversionKind::InvalidFormat)
            }
        }
    )+};
}

impl_from_ini_value_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_overflow_is_distinguished_from_bad_format() {
        assert_eq!(
            i32::from_ini_value("99999999999"),
            Err(ConversionKind::Overflow)
        );
        assert_eq!(
            i32::from_ini_value("not a number"),
            Err(ConversionKind::InvalidFormat)
        );
        assert_eq!(u8::from_ini_value("-1"), Err(ConversionKind::InvalidFormat));
        assert_eq!(u8::from_ini_value("256"), Err(ConversionKind::Overflow));
    }

    #[test]
    fn bool_accepts_mixed_case_and_whitespace() {
        assert_eq!(bool::from_ini_value("True"), Ok(true));
        assert_eq!(bool::from_ini_value(" FALSE "), Ok(false));
        assert_eq!(bool::from_ini_value("1"), Err(ConversionKind::InvalidFormat));
    }

    #[test]
    fn numeric_values_tolerate_surrounding_whitespace() {
        assert_eq!(i64::from_ini_value(" 42 "), Ok(42));
        assert_eq!(f64::from_ini_value(" 1.5 "), Ok(1.5));
    }

    #[test]
    fn char_requires_exactly_one_character() {
        assert_eq!(char::from_ini_value("x"), Ok('x'));
        assert_eq!(char::from_ini_value("xy"), Err(ConversionKind::InvalidFormat));
        assert_eq!(char::from_ini_value(""), Err(ConversionKind::InvalidFormat));
    }
}
