use k4mirror::distance::{compute_alphabet_distances, Direction, LetterDistance};
use k4mirror::error::K4Error;
use rstest::rstest;

#[rstest]
#[case("ABC", "BBA", "1F 0B 2B")]
#[case("AZ", "ZA", "25F 25B")]
#[case("", "", "")]
fn test_distance_rendering(#[case] reference: &str, #[case] comparison: &str, #[case] expected: &str) {
    let distances = compute_alphabet_distances(reference, comparison).unwrap();
    let rendered: Vec<String> = distances.iter().map(|d| d.to_string()).collect();
    assert_eq!(rendered.join(" "), expected);
}

#[test]
fn test_equal_letters_count_as_backward() {
    let d = compute_alphabet_distances("K", "K").unwrap();
    assert_eq!(
        d,
        vec![LetterDistance {
            distance: 0,
            direction: Direction::Backward
        }]
    );
}

#[test]
fn test_length_mismatch_is_reported() {
    match compute_alphabet_distances("BETWEEN", "EMUF") {
        Err(K4Error::LengthMismatch { left, right }) => {
            assert_eq!(left, 7);
            assert_eq!(right, 4);
        }
        other => panic!("Expected LengthMismatch, got {:?}", other),
    }
}
