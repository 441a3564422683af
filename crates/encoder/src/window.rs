//! Fixed-size lookups around a position.
//!
//! All of these read through [`NameBuffer::at`], so windows may hang off
//! either end of the name; the missing letters read as [`EDGE`](crate::normalize::EDGE).

use crate::normalize::{NameBuffer, Pos};

const VOWELS: &str = "AEIOUY";

/// Whether `c` is one of the characters in `set`.
pub(crate) fn char_in(c: char, set: &str) -> bool {
    set.contains(c)
}

pub(crate) fn is_vowel(c: char) -> bool {
    char_in(c, VOWELS)
}

impl NameBuffer {
    /// Whether the letters starting at `pos` spell `candidate`.
    pub(crate) fn window_is(&self, pos: Pos, candidate: &str) -> bool {
        candidate
            .chars()
            .zip(pos..)
            .all(|(expected, at)| self.at(at) == expected)
    }

    /// Whether the `len` letters starting at `pos` equal any candidate.
    ///
    /// Every candidate must be exactly `len` characters long.
    pub(crate) fn window_in(&self, pos: Pos, len: usize, candidates: &[&str]) -> bool {
        candidates.iter().any(|candidate| {
            debug_assert_eq!(
                candidate.chars().count(),
                len,
                "candidate {candidate:?} does not fit a window of {len}"
            );
            self.window_is(pos, candidate)
        })
    }

    /// Whether the letter at `pos` is one of `set`.
    pub(crate) fn char_in(&self, pos: Pos, set: &str) -> bool {
        char_in(self.at(pos), set)
    }

    pub(crate) fn is_vowel(&self, pos: Pos) -> bool {
        is_vowel(self.at(pos))
    }
}
