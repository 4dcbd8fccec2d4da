use super::{Grid, GridPair, Token};
use crate::consts::{ALPHABET, GRID_CELLS};
use fastrand::Rng;

/// Draws two distinct letters for the merged cell, shuffles the remaining
/// 24 letters together with it, and lays them out row-major.
pub fn generate_pair(rng: &mut Rng) -> GridPair {
    let first = rng.usize(0..ALPHABET.len());
    let mut second = rng.usize(0..ALPHABET.len() - 1);
    if second >= first {
        second += 1;
    }
    let merged = (ALPHABET[first], ALPHABET[second]);

    let mut tokens: Vec<Token> = ALPHABET
        .iter()
        .filter(|&&b| b != merged.0 && b != merged.1)
        .map(|&b| Token::Letter(b))
        .collect();
    tokens.push(Token::Merged(merged.0, merged.1));
    rng.shuffle(&mut tokens);

    let mut cells = [Token::Letter(b'A'); GRID_CELLS];
    cells.copy_from_slice(&tokens);

    GridPair::from_source(Grid::from_tokens(&cells), merged)
}

/// Seedable source of random grid pairs.
pub struct GridFactory {
    rng: Rng,
}

impl GridFactory {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(s) = seed {
            Rng::with_seed(s)
        } else {
            Rng::new()
        };
        Self { rng }
    }

    pub fn generate(&mut self) -> GridPair {
        generate_pair(&mut self.rng)
    }
}

impl Iterator for GridFactory {
    type Item = GridPair;

    fn next(&mut self) -> Option<GridPair> {
        Some(self.generate())
    }
}
