use crate::consts::{letter_index, ALPHABET};
use crate::error::{K4Error, K4Result};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::warn;

/// Where the deduplicated keyword sits in the keyed alphabet.
#[derive(Debug, Clone, Copy, Default, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KeywordPlacement {
    /// `KRYPTOSABCDEF...`, the classic keyed tabula recta.
    #[default]
    Prefix,
    /// `ABCDEF...XZKRYPTOS`
    Suffix,
}

/// A keyed Vigenère table: 26 cyclic rotations of a keyed alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabulaRecta {
    pub keyed_alphabet: [u8; 26],
    pub rows: Vec<[u8; 26]>,
}

impl TabulaRecta {
    pub fn build(keyword: &str) -> Self {
        Self::build_with(keyword, KeywordPlacement::Prefix)
    }

    pub fn build_with(keyword: &str, placement: KeywordPlacement) -> Self {
        let keyed_alphabet = keyed_alphabet(keyword, placement);

        let rows = (0..ALPHABET.len())
            .map(|shift| {
                let mut row = keyed_alphabet;
                row.rotate_left(shift);
                row
            })
            .collect();

        Self {
            keyed_alphabet,
            rows,
        }
    }

    /// Transposes `text` starting on the row selected by `start_letter`.
    /// Position i reads row `(start + i) mod 26`; a letter found in that row
    /// becomes the standard-alphabet letter heading its column.
    pub fn apply(&self, text: &str, start_letter: &str) -> K4Result<String> {
        let start = parse_start_letter(start_letter)?;
        let n = self.rows.len();

        let out = text
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let row = &self.rows[(start + i) % n];
                match row.iter().position(|&b| b as char == c) {
                    Some(col) => ALPHABET[col] as char,
                    None => c,
                }
            })
            .collect();

        Ok(out)
    }
}

pub fn parse_start_letter(start_letter: &str) -> K4Result<usize> {
    let mut chars = start_letter.chars();
    match (chars.next().and_then(letter_index), chars.next()) {
        (Some(idx), None) => Ok(idx),
        _ => Err(K4Error::InvalidStartLetter(start_letter.to_string())),
    }
}

fn keyed_alphabet(keyword: &str, placement: KeywordPlacement) -> [u8; 26] {
    let mut seen = [false; 26];
    let mut key = Vec::with_capacity(26);

    for c in keyword.chars().map(|c| c.to_ascii_uppercase()) {
        match letter_index(c) {
            Some(idx) if !seen[idx] => {
                seen[idx] = true;
                key.push(ALPHABET[idx]);
            }
            Some(_) => {}
            None => warn!("Skipping non-letter '{}' in keyword", c),
        }
    }

    let rest = ALPHABET.iter().copied().filter(|&b| !seen[(b - b'A') as usize]);

    let ordered: Vec<u8> = match placement {
        KeywordPlacement::Prefix => key.iter().copied().chain(rest).collect(),
        KeywordPlacement::Suffix => rest.chain(key.iter().copied()).collect(),
    };

    let mut out = [0u8; 26];
    out.copy_from_slice(&ordered);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_letters_lead_the_alphabet() {
        let table = TabulaRecta::build("KRYPTOS");
        assert_eq!(&table.keyed_alphabet, b"KRYPTOSABCDEFGHIJLMNQUVWXZ");
        assert_eq!(&table.rows[1][..3], b"RYP");
        assert_eq!(table.rows[25][0], b'Z');
    }

    #[test]
    fn suffix_placement_matches_legacy_ordering() {
        let table = TabulaRecta::build_with("KRYPTOS", KeywordPlacement::Suffix);
        assert_eq!(&table.keyed_alphabet, b"ABCDEFGHIJLMNQUVWXZKRYPTOS");
    }

    #[test]
    fn duplicate_and_lowercase_keyword_letters_collapse() {
        let table = TabulaRecta::build("kryptoskk");
        assert_eq!(&table.keyed_alphabet[..7], b"KRYPTOS");
    }
}
