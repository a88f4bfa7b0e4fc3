//! Phone keypad spelling

use crate::core::{LetterError, Result, Slug};

/// Keypad digit of each letter, `a` through `z`
const KEYPAD: &[u8; 26] = b"22233344455566677778889999";

/// Convert the letters of `text` to the digits 2-9 of a phone keypad
///
/// The text is reduced to a slug first, so anything but letters is dropped.
///
/// # Examples
/// ```
/// use letterset::cipher::phonespell;
///
/// assert_eq!(phonespell("1-800-FLOWERS"), "3569377");
/// ```
#[must_use]
pub fn phonespell(text: &str) -> String {
    Slug::from_text(text)
        .bytes()
        .map(|b| char::from(KEYPAD[usize::from(b - b'a')]))
        .collect()
}

/// Turn keypad digits into a regex matching the letters they could spell
///
/// # Errors
/// Returns `LetterError::InvalidInput` for anything but the digits 2-9.
///
/// # Examples
/// ```
/// use letterset::cipher::un_phonespell;
///
/// assert_eq!(un_phonespell("227").unwrap(), "[abc][abc][pqrs]");
/// assert!(un_phonespell("21").is_err());
/// ```
pub fn un_phonespell(digits: &str) -> Result<String> {
    digits
        .chars()
        .map(|digit| {
            letters_for(digit).ok_or_else(|| {
                LetterError::invalid(digits, "only the keypad digits 2-9 spell letters")
            })
        })
        .collect()
}

const fn letters_for(digit: char) -> Option<&'static str> {
    Some(match digit {
        '2' => "[abc]",
        '3' => "[def]",
        '4' => "[ghi]",
        '5' => "[jkl]",
        '6' => "[mno]",
        '7' => "[pqrs]",
        '8' => "[tuv]",
        '9' => "[wxyz]",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phonespell_every_key() {
        assert_eq!(phonespell("adgjmptw"), "23456789");
        assert_eq!(phonespell("cfilosvz"), "23456789");
    }

    #[test]
    fn phonespell_drops_non_letters() {
        assert_eq!(phonespell("Hello, World!"), "4355696753");
        assert_eq!(phonespell("42"), "");
    }

    #[test]
    fn un_phonespell_builds_classes() {
        assert_eq!(un_phonespell("79").unwrap(), "[pqrs][wxyz]");
        assert_eq!(un_phonespell("").unwrap(), "");
    }

    #[test]
    fn un_phonespell_rejects_other_digits() {
        assert!(matches!(
            un_phonespell("0"),
            Err(LetterError::InvalidInput { .. })
        ));
        assert!(un_phonespell("2a").is_err());
    }

    #[test]
    fn spelled_digits_match_their_class() {
        let digits = phonespell("cromulent");
        let pattern = un_phonespell(&digits).unwrap();
        assert_eq!(pattern.matches('[').count(), "cromulent".len());
    }
}
