//! Vigenère cipher
//!
//! The key's letters are applied cyclically as per-letter Caesar shifts.
//! Only the ASCII letters of the text take part: spaces, digits and
//! punctuation are dropped from the output rather than kept in place.
//!
//! Plain Vigenère has A + A = A. Puzzle hunts often use A + A = B instead,
//! which is what the `one_based` flag selects.

use super::shift::{caesar_shift, shift_letter};
use crate::core::{LetterError, Result};

/// A validated Vigenère key: one or more ASCII letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereKey {
    text: String,
    shifts: Vec<i32>,
}

impl VigenereKey {
    /// Validate a key, ignoring letter case
    ///
    /// # Errors
    /// Returns `LetterError::InvalidInput` if the key is empty or contains
    /// anything other than ASCII letters.
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(LetterError::invalid(key, "a Vigenère key cannot be empty"));
        }
        if !key.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(LetterError::invalid(
                key,
                "a Vigenère key may only contain letters",
            ));
        }

        let shifts = key
            .bytes()
            .map(|b| i32::from(b.to_ascii_lowercase() - b'a'))
            .collect();
        Ok(Self {
            text: key.to_string(),
            shifts,
        })
    }

    /// The key as given
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl TryFrom<&str> for VigenereKey {
    type Error = LetterError;

    fn try_from(key: &str) -> Result<Self> {
        Self::new(key)
    }
}

/// Encode `text` with `key`
///
/// # Examples
/// ```
/// use letterset::cipher::{VigenereKey, vigenere_encode};
///
/// let key = VigenereKey::new("abc").unwrap();
/// assert_eq!(vigenere_encode("ABRACADABRA", &key, false), "ACTADCDBDRB");
/// assert_eq!(vigenere_encode("ABRACADABRA", &key, true), "BDUBEDECESC");
/// ```
#[must_use]
pub fn vigenere_encode(text: &str, key: &VigenereKey, one_based: bool) -> String {
    let result = apply(text, key, 1);
    if one_based {
        caesar_shift(&result, 1)
    } else {
        result
    }
}

/// Decode `text` that was encoded with `key`
///
/// With `one_based` set, B - B = Z rather than A.
///
/// # Examples
/// ```
/// use letterset::cipher::{VigenereKey, vigenere_decode};
///
/// let key = VigenereKey::new("abc").unwrap();
/// assert_eq!(vigenere_decode("ACTADCDBDRB", &key, false), "ABRACADABRA");
/// ```
#[must_use]
pub fn vigenere_decode(text: &str, key: &VigenereKey, one_based: bool) -> String {
    let result = apply(text, key, -1);
    if one_based {
        caesar_shift(&result, -1)
    } else {
        result
    }
}

fn apply(text: &str, key: &VigenereKey, direction: i32) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .zip(key.shifts.iter().cycle())
        .map(|(c, &shift)| shift_letter(c, direction * shift))
        .collect()
}
