use crate::consts::SEPARATOR;
use std::collections::{BTreeSet, HashSet};

/// Resolves every merged-cell marker (`X/Y`) to either of its letters and
/// returns all fully resolved strings.
///
/// Each step splits on the first separator only:
/// - keep-right drops the char before the separator along with it,
/// - keep-left drops the separator and the char after it.
///
/// A candidate that would need a char outside the string is omitted, so
/// separators at the edges yield fewer variants and a lone `/` yields none.
pub fn expand(text: &str) -> BTreeSet<String> {
    let mut variants = BTreeSet::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut stack = vec![text.to_string()];

    while let Some(current) = stack.pop() {
        let Some(sep) = current.find(SEPARATOR) else {
            variants.insert(current);
            continue;
        };

        if !visited.insert(current.clone()) {
            continue;
        }

        let head = &current[..sep];
        let tail = &current[sep + SEPARATOR.len_utf8()..];

        if let Some(left) = head.chars().next_back() {
            let mut keep_right = String::with_capacity(current.len());
            keep_right.push_str(&head[..head.len() - left.len_utf8()]);
            keep_right.push_str(tail);
            stack.push(keep_right);
        }

        if let Some(right) = tail.chars().next() {
            let mut keep_left = String::with_capacity(current.len());
            keep_left.push_str(head);
            keep_left.push_str(&tail[right.len_utf8()..]);
            stack.push(keep_left);
        }
    }

    variants
}

/// Number of merged-cell markers in `text`.
pub fn marker_count(text: &str) -> usize {
    text.matches(SEPARATOR).count()
}

/// One position of a resolved variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Fixed(char),
    Either(char, char),
}

/// Splits well-formed text into per-position slots, one per char of every
/// variant. Returns `None` when a separator sits at an edge or next to
/// another separator; such text only resolves through [`expand`].
pub fn slots(text: &str) -> Option<Vec<Slot>> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == SEPARATOR {
            return None;
        }
        if chars.get(i + 1) == Some(&SEPARATOR) {
            match chars.get(i + 2) {
                Some(&right) if right != SEPARATOR => {
                    out.push(Slot::Either(c, right));
                    i += 3;
                }
                _ => return None,
            }
        } else {
            out.push(Slot::Fixed(c));
            i += 1;
        }
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn plain_text_is_its_own_variant() {
        assert_eq!(expand("EAST"), set(&["EAST"]));
        assert_eq!(expand(""), set(&[""]));
    }

    #[test]
    fn single_marker_bifurcates() {
        assert_eq!(expand("A/B"), set(&["A", "B"]));
        assert_eq!(expand("XA/BY"), set(&["XAY", "XBY"]));
    }

    #[test]
    fn markers_resolve_independently() {
        assert_eq!(expand("A/BC/D"), set(&["AC", "AD", "BC", "BD"]));
    }

    #[test]
    fn edge_separators_omit_out_of_range_candidates() {
        assert_eq!(expand("/AB"), set(&["B"]));
        assert_eq!(expand("AB/"), set(&["A"]));
        assert!(expand("/").is_empty());
    }

    #[test]
    fn slots_follow_markers() {
        assert_eq!(
            slots("XA/BY"),
            Some(vec![Slot::Fixed('X'), Slot::Either('A', 'B'), Slot::Fixed('Y')])
        );
        assert_eq!(slots(""), Some(vec![]));
    }

    #[test]
    fn slots_reject_malformed_separators() {
        assert_eq!(slots("/AB"), None);
        assert_eq!(slots("AB/"), None);
        assert_eq!(slots("A/B/C"), None);
        assert_eq!(slots("A//B"), None);
    }
}
