use k4mirror::consts::{K4_CIPHER, REFERENCE_CIPHER, REFERENCE_KEYWORD, REFERENCE_START};
use k4mirror::error::K4Error;
use k4mirror::tabula::{KeywordPlacement, TabulaRecta};
use rstest::rstest;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[rstest]
#[case(KeywordPlacement::Prefix, "MQZTQPXULEQVU")]
#[case(KeywordPlacement::Suffix, "FJSMJIQNEXJON")]
fn test_reference_fragment_transform(#[case] placement: KeywordPlacement, #[case] expected: &str) {
    let table = TabulaRecta::build_with(REFERENCE_KEYWORD, placement);
    let out = table.apply(REFERENCE_CIPHER, REFERENCE_START).unwrap();
    assert_eq!(out, expected);
}

#[test]
fn test_rows_are_rotations() {
    let table = TabulaRecta::build(REFERENCE_KEYWORD);
    assert_eq!(table.rows.len(), 26);
    for (i, row) in table.rows.iter().enumerate() {
        assert_eq!(row[0], table.keyed_alphabet[i]);
        assert_eq!(row[25], table.keyed_alphabet[(i + 25) % 26]);
    }
}

#[test]
fn test_start_letter_selects_row_and_wraps() {
    let table = TabulaRecta::build("");
    // Unkeyed: row i is the alphabet shifted by i, so the letter
    // heading column j of row s is ALPHABET[j] where row[j] = c.
    assert_eq!(table.apply("A", "A").unwrap(), "A");
    assert_eq!(table.apply("B", "B").unwrap(), "A");
    assert_eq!(table.apply("AA", "Z").unwrap(), "BA");
}

#[test]
fn test_non_letters_pass_through() {
    let table = TabulaRecta::build(REFERENCE_KEYWORD);
    let out = table.apply("FL?RV", "A").unwrap();
    assert_eq!(out.chars().nth(2), Some('?'));
    assert_eq!(out.len(), 5);
}

#[test]
fn test_full_k4_keeps_length() {
    let table = TabulaRecta::build(REFERENCE_KEYWORD);
    let out = table.apply(K4_CIPHER, "K").unwrap();
    assert_eq!(out.len(), K4_CIPHER.len());
    assert!(out.chars().all(|c| c.is_ascii_uppercase()));
}

#[rstest]
#[case("")]
#[case("a")]
#[case("AB")]
#[case("1")]
#[case("É")]
fn test_invalid_start_letter(#[case] start: &str) {
    let table = TabulaRecta::build(REFERENCE_KEYWORD);
    match table.apply("ABC", start) {
        Err(K4Error::InvalidStartLetter(s)) => assert_eq!(s, start),
        other => panic!("Expected InvalidStartLetter, got {:?}", other),
    }
}

#[test]
fn test_placement_round_trips_through_strings() {
    for p in KeywordPlacement::iter() {
        assert_eq!(KeywordPlacement::from_str(&p.to_string()).unwrap(), p);
    }
    assert_eq!(KeywordPlacement::from_str("suffix").unwrap(), KeywordPlacement::Suffix);
}
