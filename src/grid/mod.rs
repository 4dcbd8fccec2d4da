pub mod factory;
pub mod translate;

use crate::consts::{letter_index, GRID_CELLS, GRID_SIDE, SEPARATOR};
use serde::Serialize;
use std::fmt;

/// Contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Token {
    Letter(u8),
    /// Two letters sharing one cell, rendered `X/Y`.
    Merged(u8, u8),
}

impl Token {
    pub fn is_merged(&self) -> bool {
        matches!(self, Token::Merged(..))
    }

    pub fn push_to(&self, out: &mut String) {
        match *self {
            Token::Letter(l) => out.push(l as char),
            Token::Merged(a, b) => {
                out.push(a as char);
                out.push(SEPARATOR);
                out.push(b as char);
            }
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::with_capacity(3);
        self.push_to(&mut s);
        f.write_str(&s)
    }
}

impl From<Token> for String {
    fn from(t: Token) -> Self {
        t.to_string()
    }
}

/// A 5x5 substitution grid with a letter -> (row, col) index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    cells: [[Token; GRID_SIDE]; GRID_SIDE],
    #[serde(skip)]
    index: [Option<(u8, u8)>; 26],
}

impl Grid {
    pub fn new(cells: [[Token; GRID_SIDE]; GRID_SIDE]) -> Self {
        let index = build_index(&cells);
        Self { cells, index }
    }

    /// Partitions 25 tokens row-major.
    pub fn from_tokens(tokens: &[Token; GRID_CELLS]) -> Self {
        let mut cells = [[Token::Letter(b'A'); GRID_SIDE]; GRID_SIDE];
        for (i, &t) in tokens.iter().enumerate() {
            cells[i / GRID_SIDE][i % GRID_SIDE] = t;
        }
        Self::new(cells)
    }

    pub fn cells(&self) -> &[[Token; GRID_SIDE]; GRID_SIDE] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Token {
        self.cells[row][col]
    }

    pub fn tokens(&self) -> impl Iterator<Item = Token> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Cell holding `c`. Single-letter cells win over merged containment.
    #[inline(always)]
    pub fn locate(&self, c: char) -> Option<(usize, usize)> {
        let idx = letter_index(c)?;
        self.index[idx].map(|(r, col)| (r as usize, col as usize))
    }

    pub fn position_of(&self, token: Token) -> Option<(usize, usize)> {
        self.cells.iter().enumerate().find_map(|(r, row)| {
            row.iter().position(|&t| t == token).map(|c| (r, c))
        })
    }

    /// Each row reversed.
    pub fn mirrored(&self) -> Self {
        let mut cells = self.cells;
        for row in cells.iter_mut() {
            row.reverse();
        }
        Self::new(cells)
    }
}

fn build_index(cells: &[[Token; GRID_SIDE]; GRID_SIDE]) -> [Option<(u8, u8)>; 26] {
    let mut index = [None; 26];

    for (r, row) in cells.iter().enumerate() {
        for (c, token) in row.iter().enumerate() {
            if let Token::Letter(l) = *token {
                if let Some(i) = letter_index(l as char) {
                    index[i].get_or_insert((r as u8, c as u8));
                }
            }
        }
    }

    for (r, row) in cells.iter().enumerate() {
        for (c, token) in row.iter().enumerate() {
            if let Token::Merged(a, b) = *token {
                for l in [a, b] {
                    if let Some(i) = letter_index(l as char) {
                        index[i].get_or_insert((r as u8, c as u8));
                    }
                }
            }
        }
    }

    index
}

/// Source grid, its mirror, and the letters sharing the merged cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridPair {
    pub source: Grid,
    pub target: Grid,
    #[serde(skip)]
    pub merged: (u8, u8),
}

impl GridPair {
    /// Derives the target by reversing every row, then pins the merged token
    /// at `(row, 4 - col)` of its source cell.
    pub fn from_source(source: Grid, merged: (u8, u8)) -> Self {
        let mut cells = *source.mirrored().cells();
        let token = Token::Merged(merged.0, merged.1);
        if let Some((row, col)) = source.position_of(token) {
            cells[row][GRID_SIDE - 1 - col] = token;
        }

        Self {
            source,
            target: Grid::new(cells),
            merged,
        }
    }

    pub fn merged_token(&self) -> Token {
        Token::Merged(self.merged.0, self.merged.1)
    }
}
