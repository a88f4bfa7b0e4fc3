//! Deterministic letter ciphers
//!
//! Caesar and Vigenère shifts plus phone-keypad spelling. Frequency-analysis
//! solving lives elsewhere; these are the fixed transforms only.

mod phone;
mod shift;
mod vigenere;

pub use phone::{phonespell, un_phonespell};
pub use shift::{Offset, all_caesar_shifts, caesar_shift, caesar_unshift, shift_letter};
pub use vigenere::{VigenereKey, vigenere_decode, vigenere_encode};
