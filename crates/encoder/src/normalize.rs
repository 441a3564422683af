//! Input normalization.
//!
//! Turns raw text into the uppercase letter sequence the encoder walks.
//! Only `A-Z`, space, `Ç` and `Ñ` survive; lowercase forms are folded to
//! uppercase and everything else is dropped.

/// Position of a letter inside a [`NameBuffer`].
///
/// Signed so rules can look behind the first letter without underflow.
pub(crate) type Pos = isize;

/// Value returned for any position outside the name.
///
/// Never equal to a supported letter, so lookups past either edge fail
/// every letter and vowel test unless a rule asks for the edge explicitly.
pub(crate) const EDGE: char = '_';

/// Uppercase C cedilla.
pub(crate) const C_CEDILLA: char = 'Ç';

/// Uppercase N tilde.
pub(crate) const N_TILDE: char = 'Ñ';

/// A normalized name, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct NameBuffer {
    letters: Vec<char>,
}

impl NameBuffer {
    /// Normalize a sequence of characters, dropping unsupported ones.
    pub(crate) fn from_chars<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self {
            letters: chars.into_iter().filter_map(normalize_char).collect(),
        }
    }

    /// Normalize Rust text.
    pub(crate) fn from_text(text: &str) -> Self {
        Self::from_chars(text.chars())
    }

    /// Normalize single-byte text (ASCII or ISO-8859-1).
    ///
    /// Every byte maps to the code point of the same value, so `0xE7` is
    /// `ç` and `0xF1` is `ñ`.
    pub(crate) fn from_latin1(bytes: &[u8]) -> Self {
        Self::from_chars(bytes.iter().copied().map(char::from))
    }

    /// Normalize wide text given as UTF-16 code units.
    ///
    /// Anything outside the supported alphabet, unpaired surrogates
    /// included, is discarded first; the remaining characters all fit in
    /// one byte and go through [`NameBuffer::from_latin1`].
    pub(crate) fn from_wide(units: &[u16]) -> Self {
        let narrow: Vec<u8> = char::decode_utf16(units.iter().copied())
            .filter_map(Result::ok)
            .filter(|&c| is_supported(c))
            .filter_map(|c| u8::try_from(u32::from(c)).ok())
            .collect();

        Self::from_latin1(&narrow)
    }

    /// Letter at `pos`, or [`EDGE`] outside the name.
    pub(crate) fn at(&self, pos: Pos) -> char {
        usize::try_from(pos)
            .ok()
            .and_then(|i| self.letters.get(i))
            .copied()
            .unwrap_or(EDGE)
    }

    /// Position of the first letter.
    pub(crate) fn first(&self) -> Pos {
        0
    }

    /// Position of the last letter; `-1` for an empty name.
    pub(crate) fn last(&self) -> Pos {
        self.letters.len() as Pos - 1
    }

    /// Whether `needle` occurs anywhere in the name.
    pub(crate) fn contains(&self, needle: &str) -> bool {
        let needle: Vec<char> = needle.chars().collect();
        !needle.is_empty() && self.letters.windows(needle.len()).any(|w| w == needle.as_slice())
    }

    /// The normalized letters as a string.
    pub(crate) fn as_string(&self) -> String {
        self.letters.iter().collect()
    }
}

/// Whether `c` belongs to the accepted input alphabet, in either case.
pub(crate) fn is_supported(c: char) -> bool {
    matches!(c, 'A'..='Z' | 'a'..='z' | ' ' | 'Ç' | 'ç' | 'Ñ' | 'ñ')
}

/// Fold one input character into the working alphabet.
pub(crate) fn normalize_char(c: char) -> Option<char> {
    match c {
        'A'..='Z' | ' ' | C_CEDILLA | N_TILDE => Some(c),
        'a'..='z' => Some(c.to_ascii_uppercase()),
        'ç' => Some(C_CEDILLA),
        'ñ' => Some(N_TILDE),
        _ => None,
    }
}
