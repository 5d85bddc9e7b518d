//! Parsing text into an `i64` without going through [`str::parse`].
//!
//! Three notations are understood, each optionally preceded by `-`:
//!
//! - hexadecimal with a `0x` or `0X` prefix, e.g. `0x4e` or `-0XABCDEF`
//! - octal with a leading `0`, e.g. `022`, as long as every digit after it is octal
//! - decimal otherwise, e.g. `-33` or `09`
//!
//! Whitespace around the number is ignored but nothing may come between the sign, the prefix and
//! the digits.
//!
//! # Examples
//!
//! ```
//! use trinary::parse::{parse_i64, ParseError};
//!
//! assert_eq!(parse_i64(" -0x4e "), Ok(-0x4e));
//! assert_eq!(parse_i64("022"), Ok(0o22));
//! assert_eq!(parse_i64("09"), Ok(9));
//! assert_eq!(parse_i64("- 33"), Err(ParseError::Format("- 33".to_owned())));
//! assert_eq!(parse_i64("9223372036854775808"), Err(ParseError::Overflow));
//! ```

use std::fmt;

use thiserror::Error;

/// Errors that can occur while parsing a number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// There was nothing but whitespace to parse.
    #[error("cannot parse an empty string")]
    Empty,

    /// The input doesn't have the shape of any supported notation.
    #[error("input does not match a supported numeric format: {0:?}")]
    Format(String),

    /// A letter or digit that isn't valid in the notation being parsed.
    #[error("{digit:?} is not a digit in {radix}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// The notation the prefix selected.
        radix: Radix,
    },

    /// The number doesn't fit in an `i64`.
    #[error("number is too large to fit in an i64")]
    Overflow,
}

/// The notation a number is written in, picked from its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    /// Base 8, written with a leading `0`.
    Octal,
    /// Base 10, the default.
    Decimal,
    /// Base 16, written with a leading `0x` or `0X`.
    Hexadecimal,
}

impl Radix {
    /// The numeric base.
    pub fn base(self) -> u32 {
        match self {
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// Splits an unsigned number into its notation and the digits after the prefix.
    ///
    /// A leading `0` only selects octal when every digit after it is octal. Anything else, a lone
    /// `0` or something like `09` included, is read as decimal.
    pub fn split(number: &str) -> (Self, &str) {
        if let Some(digits) = number
            .strip_prefix("0x")
            .or_else(|| number.strip_prefix("0X"))
        {
            return (Radix::Hexadecimal, digits);
        }

        match number.strip_prefix('0') {
            Some(digits) if !digits.is_empty() && digits.chars().all(|c| c.is_digit(8)) => {
                (Radix::Octal, digits)
            }
            _ => (Radix::Decimal, number),
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
            Radix::Hexadecimal => "hexadecimal",
        };
        f.write_str(name)
    }
}

/// ASCII whitespace plus the vertical tab, which `char::is_ascii_whitespace` leaves out.
fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// Parses `input` into an `i64`. See the [module docs][self] for the accepted notations.
///
/// ## Errors
///
/// - [`ParseError::Empty`] if `input` is empty or only whitespace.
/// - [`ParseError::Format`] if there are no digits after the sign and prefix, or something other
///   than a letter or digit shows up among them.
/// - [`ParseError::InvalidDigit`] if a letter or digit falls outside the notation, like the `g`
///   in `0x4g` or the `s` in `2s`.
/// - [`ParseError::Overflow`] if the number is outside `i64::MIN..=i64::MAX`.
pub fn parse_i64(input: &str) -> Result<i64, ParseError> {
    let trimmed = input.trim_matches(is_space);
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let (negative, number) = match trimmed.strip_prefix('-') {
        Some(number) => (true, number),
        None => (false, trimmed),
    };
    let (radix, digits) = Radix::split(number);
    if digits.is_empty() {
        return Err(ParseError::Format(input.to_owned()));
    }

    // Accumulate below zero: i64::MIN has no positive counterpart.
    let base = i64::from(radix.base());
    let mut accumulator: i64 = 0;
    for c in digits.chars() {
        let digit = match c.to_digit(radix.base()) {
            Some(digit) => i64::from(digit),
            None if c.is_ascii_alphanumeric() => {
                return Err(ParseError::InvalidDigit { digit: c, radix })
            }
            None => return Err(ParseError::Format(input.to_owned())),
        };
        accumulator = accumulator
            .checked_mul(base)
            .and_then(|shifted| shifted.checked_sub(digit))
            .ok_or(ParseError::Overflow)?;
    }

    if negative {
        Ok(accumulator)
    } else {
        accumulator.checked_neg().ok_or(ParseError::Overflow)
    }
}
