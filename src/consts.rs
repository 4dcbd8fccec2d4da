/// The fixed 26-letter universe every table and grid is drawn from.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Grids are square; 5x5 holds 24 letters plus one merged cell.
pub const GRID_SIDE: usize = 5;
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

/// Joins the two halves of a merged cell when rendered ("A/B").
pub const SEPARATOR: char = '/';

// K4 reference crib, used by tests and benches.
pub const REFERENCE_KEYWORD: &str = "KRYPTOS";
pub const REFERENCE_START: &str = "A";
pub const REFERENCE_CIPHER: &str = "FLRVQQPRNGKSS";
pub const REFERENCE_PLAIN: &str = "EASTNORTHEAST";
pub const REFERENCE_TOLERANCE: usize = 2;

pub const K4_CIPHER: &str =
    "OBKRUOXOGHULBSOLIFBBWFLRVQQPRNGKSSOTWTQSJQSSEKZZWATJKLUDIAWINFBNYPVTTMZFPKWGDKZXTJCDIGKUHUAUEKCAR";

/// Position of an uppercase ASCII letter in `ALPHABET`.
#[inline(always)]
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_uppercase() {
        Some((c as u8 - b'A') as usize)
    } else {
        None
    }
}
