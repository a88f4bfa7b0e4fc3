//! Property tests for the letter-multiset laws

use letterset::cipher::{VigenereKey, caesar_shift, caesar_unshift, vigenere_decode, vigenere_encode};
use letterset::core::{LetterError, Slug};
use letterset::letters::{
    alphabytes, alphabytes_to_alphagram, alphagram, anagram_diff, diff_both, diff_exact,
    letters_to_vec,
};
use proptest::prelude::*;

fn slug_strategy() -> impl Strategy<Value = Slug> {
    "[a-z]{0,40}".prop_map(|text| Slug::new(text).unwrap())
}

/// Slugs where no letter appears more than six times
fn bounded_slug_strategy() -> impl Strategy<Value = Slug> {
    slug_strategy().prop_filter("letter repeated more than six times", |slug| {
        letters_to_vec(slug).iter().all(|&count| count <= 6)
    })
}

proptest! {
    #[test]
    fn alphagram_is_sorted_permutation(slug in slug_strategy()) {
        let alpha = alphagram(&slug);
        prop_assert!(alpha.as_bytes().is_sorted());
        prop_assert_eq!(letters_to_vec(&alpha), letters_to_vec(&slug));
    }

    #[test]
    fn alphagram_is_idempotent(slug in slug_strategy()) {
        let once = alphagram(&slug);
        prop_assert_eq!(alphagram(&once), once);
    }

    #[test]
    fn counts_sum_to_length(slug in slug_strategy()) {
        let total: u32 = letters_to_vec(&slug).iter().sum();
        prop_assert_eq!(total as usize, slug.len());
    }

    #[test]
    fn alphabytes_round_trip(slug in bounded_slug_strategy()) {
        let alpha = alphagram(&slug);
        let bytes = alphabytes(&alpha);
        prop_assert_eq!(bytes.len(), alpha.len());
        prop_assert_eq!(alphabytes_to_alphagram(bytes.as_bytes()).unwrap(), alpha);
    }

    #[test]
    fn alphabytes_recover_multiset_for_any_slug(slug in slug_strategy()) {
        let decoded = alphabytes_to_alphagram(alphabytes(&slug).as_bytes()).unwrap();
        prop_assert_eq!(decoded, alphagram(&slug));
    }

    #[test]
    fn diff_exact_rebuilds_full(full in slug_strategy(), part in slug_strategy()) {
        let (_, leftover) = diff_both(&full, &part);
        match diff_exact(&full, &part) {
            Ok(rest) => {
                prop_assert!(leftover.is_empty());
                let rejoined = Slug::new(format!("{rest}{part}")).unwrap();
                prop_assert_eq!(alphagram(&rejoined), alphagram(&full));
            }
            Err(LetterError::UnmatchedLetters(left)) => {
                prop_assert!(!left.is_empty());
                prop_assert_eq!(left, leftover.as_str());
            }
            Err(other) => prop_assert!(false, "unexpected error {other}"),
        }
    }

    #[test]
    fn diff_exact_accepts_every_prefix(full in slug_strategy(), cut in 0usize..40) {
        let cut = cut.min(full.len());
        let part = Slug::new(&full[..cut]).unwrap();
        let rest = diff_exact(&full, &part).unwrap();
        prop_assert_eq!(rest.len(), full.len() - cut);
    }

    #[test]
    fn anagram_diff_wildcards_match_deficit(a in slug_strategy(), b in slug_strategy()) {
        let diff = anagram_diff(&a, &b);
        let (surplus, deficit) = diff_both(&a, &b);
        prop_assert_eq!(diff.remainder, surplus);
        prop_assert_eq!(diff.wildcards_used as usize, deficit.len());
    }

    #[test]
    fn caesar_round_trip(text in "[ -~]{0,60}", k in -100i32..100) {
        prop_assert_eq!(caesar_unshift(&caesar_shift(&text, k), k), text);
    }

    #[test]
    fn vigenere_round_trip(text in "[ -~]{0,60}", key in "[a-zA-Z]{1,8}", one_based in any::<bool>()) {
        let key = VigenereKey::new(&key).unwrap();
        let letters: String = text.chars().filter(char::is_ascii_alphabetic).collect();
        let encoded = vigenere_encode(&text, &key, one_based);
        prop_assert_eq!(vigenere_decode(&encoded, &key, one_based), letters);
    }
}
