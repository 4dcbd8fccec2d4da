use super::{Grid, GridPair};

/// Replaces each char found in `from` with the token at the same cell of
/// `to`. Chars absent from the grid pass through unchanged.
pub fn translate_through(text: &str, from: &Grid, to: &Grid) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        match from.locate(c) {
            Some((row, col)) => to.get(row, col).push_to(&mut out),
            None => out.push(c),
        }
    }
    out
}

/// Source -> target.
pub fn translate(text: &str, pair: &GridPair) -> String {
    translate_through(text, &pair.source, &pair.target)
}

impl GridPair {
    pub fn translate(&self, text: &str) -> String {
        translate_through(text, &self.source, &self.target)
    }

    /// Target -> source.
    pub fn translate_back(&self, text: &str) -> String {
        translate_through(text, &self.target, &self.source)
    }
}
