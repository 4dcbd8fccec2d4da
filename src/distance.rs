use crate::error::{K4Error, K4Result};
use std::fmt;
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Direction {
    #[strum(serialize = "F")]
    Forward,
    #[strum(serialize = "B")]
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterDistance {
    pub distance: u32,
    pub direction: Direction,
}

impl fmt::Display for LetterDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.distance, self.direction)
    }
}

/// Code-point distance from each reference char to its counterpart.
/// Equal chars count as `0B`.
pub fn compute_alphabet_distances(
    reference: &str,
    comparison: &str,
) -> K4Result<Vec<LetterDistance>> {
    let left = reference.chars().count();
    let right = comparison.chars().count();
    if left != right {
        return Err(K4Error::LengthMismatch { left, right });
    }

    Ok(reference
        .chars()
        .zip(comparison.chars())
        .map(|(a, b)| LetterDistance {
            distance: (b as u32).abs_diff(a as u32),
            direction: if b > a {
                Direction::Forward
            } else {
                Direction::Backward
            },
        })
        .collect())
}
