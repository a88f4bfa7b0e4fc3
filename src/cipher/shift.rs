//! Caesar shifts
//!
//! Letters rotate within their own case; everything else passes through.

use crate::core::{LetterError, Result};
use std::fmt;
use std::str::FromStr;

/// How far to shift: a signed count, or a letter standing for its index
///
/// A letter offset of `'c'` means `a` goes to `c`, the same as a shift of 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offset {
    Numeric(i32),
    Letter(char),
}

impl Offset {
    /// The offset as a shift in `0..26`
    ///
    /// A letter resolves case-insensitively to its alphabet index.
    #[must_use]
    pub fn resolve(self) -> i32 {
        match self {
            Self::Numeric(n) => n.rem_euclid(26),
            Self::Letter(c) => (c.to_ascii_lowercase() as i32 - 'a' as i32).rem_euclid(26),
        }
    }
}

impl From<i32> for Offset {
    fn from(n: i32) -> Self {
        Self::Numeric(n)
    }
}

impl From<char> for Offset {
    fn from(c: char) -> Self {
        Self::Letter(c)
    }
}

/// Parses a signed integer or a single ASCII letter
impl FromStr for Offset {
    type Err = LetterError;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(n) = s.parse::<i32>() {
            return Ok(Self::Numeric(n));
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(Self::Letter(c)),
            _ => Err(LetterError::invalid(
                s,
                "an offset must be an integer or a single letter",
            )),
        }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Letter(c) => write!(f, "{c}"),
        }
    }
}

/// Shift one character by `offset` positions, keeping its case
///
/// Non-ASCII-letters are returned unchanged.
///
/// # Examples
/// ```
/// use letterset::cipher::shift_letter;
///
/// assert_eq!(shift_letter('a', 3), 'd');
/// assert_eq!(shift_letter('Z', 1), 'A');
/// assert_eq!(shift_letter('b', -3), 'y');
/// assert_eq!(shift_letter('!', 5), '!');
/// ```
#[must_use]
pub fn shift_letter(c: char, offset: i32) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };
    let index = i32::from(c as u8 - base);
    // Both terms are in 0..26, so the sum cannot overflow and fits in a u8
    let shifted = (index + offset.rem_euclid(26)).rem_euclid(26) as u8;
    char::from(base + shifted)
}

/// Caesar-shift `text` forwards by `offset`
///
/// # Examples
/// ```
/// use letterset::cipher::caesar_shift;
///
/// assert_eq!(caesar_shift("caesar", 13), "pnrfne");
/// assert_eq!(caesar_shift("CAESAR", 'C'), "ECGUCT");
/// ```
#[must_use]
pub fn caesar_shift(text: &str, offset: impl Into<Offset>) -> String {
    let offset = offset.into().resolve();
    text.chars().map(|c| shift_letter(c, offset)).collect()
}

/// Caesar-shift `text` backwards by `offset`
///
/// # Examples
/// ```
/// use letterset::cipher::caesar_unshift;
///
/// assert_eq!(caesar_unshift("DBFTBS TIJGU", 1), "CAESAR SHIFT");
/// ```
#[must_use]
pub fn caesar_unshift(text: &str, offset: impl Into<Offset>) -> String {
    let offset = offset.into().resolve();
    caesar_shift(text, -offset)
}

/// Every Caesar shift of `text`, indexed by shift amount `0..26`
#[must_use]
pub fn all_caesar_shifts(text: &str) -> Vec<String> {
    (0..26).map(|offset| caesar_shift(text, offset)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rot13_example() {
        assert_eq!(caesar_shift("caesar", 13), "pnrfne");
    }

    #[test]
    fn unshift_example() {
        assert_eq!(caesar_unshift("DBFTBS TIJGU", 1), "CAESAR SHIFT");
    }

    #[test]
    fn letter_offsets() {
        assert_eq!(caesar_shift("CAESAR", 'C'), "ECGUCT");
        assert_eq!(caesar_shift("caesar", 'a'), "caesar");
        assert_eq!(caesar_unshift("ECGUCT", 'c'), "CAESAR");
    }

    #[test]
    fn negative_and_large_offsets_wrap() {
        assert_eq!(caesar_shift("abc", -1), "zab");
        assert_eq!(caesar_shift("abc", 27), "bcd");
        assert_eq!(caesar_shift("abc", -53), "zab");
    }

    #[test]
    fn extreme_offsets_wrap() {
        // i32::MAX is 23 mod 26, i32::MIN is 2 mod 26
        assert_eq!(shift_letter('z', i32::MAX), 'w');
        assert_eq!(shift_letter('a', i32::MIN), 'c');
        assert_eq!(shift_letter('Z', i32::MIN), 'B');
        assert_eq!(caesar_shift("abc", i32::MAX), "xyz");
        assert_eq!(caesar_unshift("xyz", i32::MAX), "abc");
    }

    #[test]
    fn non_letters_pass_through() {
        assert_eq!(caesar_shift("a-b c!9é", 1), "b-c d!9é");
    }

    #[test]
    fn offset_resolution() {
        assert_eq!(Offset::Numeric(-1).resolve(), 25);
        assert_eq!(Offset::Letter('A').resolve(), 0);
        assert_eq!(Offset::Letter('z').resolve(), 25);
    }

    #[test]
    fn offset_parsing() {
        assert_eq!("13".parse::<Offset>().unwrap(), Offset::Numeric(13));
        assert_eq!("-2".parse::<Offset>().unwrap(), Offset::Numeric(-2));
        assert_eq!("C".parse::<Offset>().unwrap(), Offset::Letter('C'));
        assert!("cc".parse::<Offset>().is_err());
        assert!("?".parse::<Offset>().is_err());
        assert!("".parse::<Offset>().is_err());
    }

    #[test]
    fn all_shifts_covers_alphabet() {
        let shifts = all_caesar_shifts("az");
        assert_eq!(shifts.len(), 26);
        assert_eq!(shifts[0], "az");
        assert_eq!(shifts[1], "ba");
        assert_eq!(shifts[25], "zy");
    }
}
