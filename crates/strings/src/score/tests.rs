use proptest::prelude::*;

use super::{CodeUnit, score_by, score_of_bytes, score_of_string};

#[test]
fn scores_hello() {
    // h=104, e=101, l=108, o=111
    assert_eq!(score_of_string("hello"), 3 + 7 + 0 + 3);
}

#[test]
fn scores_zaz() {
    // z=122, a=97
    assert_eq!(score_of_string("zaz"), 25 + 25);
}

#[test]
fn short_strings_score_zero() {
    assert_eq!(score_of_string(""), 0);
    assert_eq!(score_of_string("x"), 0);
    assert_eq!(score_of_bytes(&[]), 0);
    assert_eq!(score_of_bytes(&[255]), 0);
}

#[test]
fn repeated_character_scores_zero() {
    assert_eq!(score_of_string("aaaaaaaa"), 0);
}

#[test]
fn byte_extremes() {
    assert_eq!(score_of_bytes(&[0, 255, 0]), 510);
}

#[test]
fn multibyte_chars_are_split_into_bytes() {
    // 'é' is encoded as [0xC3, 0xA9].
    assert_eq!(score_of_string("é"), 0xC3 - 0xA9);
    assert_eq!(score_by("é", CodeUnit::Byte), 0xC3 - 0xA9);
    assert_eq!(score_by("é", CodeUnit::Char), 0);
}

#[test]
fn char_unit_uses_code_points() {
    // 'a' = 0x61, '€' = 0x20AC
    assert_eq!(score_by("a€", CodeUnit::Char), 0x20AC - 0x61);
    assert_eq!(score_by("€a€", CodeUnit::Char), 2 * (0x20AC - 0x61));
}

#[test]
fn byte_is_the_default_unit() {
    assert_eq!(CodeUnit::default(), CodeUnit::Byte);
    assert_eq!(score_by("hello", CodeUnit::default()), 13);
}

proptest! {
    #[test]
    fn empty_or_single_scores_zero(c in any::<char>()) {
        prop_assert_eq!(score_by(&c.to_string(), CodeUnit::Char), 0);
    }

    #[test]
    fn reversal_preserves_score(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        let reversed: Vec<u8> = bytes.iter().rev().copied().collect();
        prop_assert_eq!(score_of_bytes(&bytes), score_of_bytes(&reversed));
    }

    #[test]
    fn bounded_by_max_step(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        let pairs = bytes.len().saturating_sub(1) as u64;
        prop_assert!(score_of_bytes(&bytes) <= 255 * pairs);
    }

    #[test]
    fn units_agree_on_ascii(s in "[ -~]{0,64}") {
        prop_assert_eq!(score_by(&s, CodeUnit::Char), score_of_string(&s));
    }

    #[test]
    fn string_matches_byte_form(s in ".{0,32}") {
        prop_assert_eq!(score_of_string(&s), score_of_bytes(s.as_bytes()));
    }
}
