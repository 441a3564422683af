//! Language-of-origin guesses consulted by the letter rules.

use crate::normalize::{NameBuffer, Pos};

/// Name looks Slavic or Germanic: it has a `W` or `K`, or contains
/// `CZ` or `WITZ`.
pub(crate) fn is_slavo_germanic(name: &NameBuffer) -> bool {
    name.contains("W") || name.contains("K") || name.contains("CZ") || name.contains("WITZ")
}

/// Name opens with a Germanic prefix: `VAN `, `VON ` or `SCH`.
pub(crate) fn starts_germanic(name: &NameBuffer) -> bool {
    let first = name.first();
    name.window_in(first, 4, &["VAN ", "VON "]) || name.window_is(first, "SCH")
}

/// Germanic `ACH` around the `C` at `at`, as in "bacher" or "macher".
pub(crate) fn is_germanic_c(name: &NameBuffer, at: Pos) -> bool {
    (at > name.first() + 1
        && !name.is_vowel(at - 2)
        && name.window_is(at - 1, "ACH")
        && !name.char_in(at + 2, "IE"))
        || name.window_in(at - 2, 6, &["BACHER", "MACHER"])
}

/// Spanish double `L` at `at` that reads as a single sound, as in
/// "cabrillo" or "gallegos".
pub(crate) fn is_spanish_ll(name: &NameBuffer, at: Pos) -> bool {
    let last = name.last();

    if at == last - 2 && name.window_in(at - 1, 4, &["ILLO", "ILLA", "ALLE"]) {
        return true;
    }

    (name.window_in(last - 1, 2, &["AS", "OS"]) || name.char_in(last, "AO"))
        && name.window_is(at - 1, "ALLE")
}
