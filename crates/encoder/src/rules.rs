//! Per-letter encoding rules.
//!
//! Each rule looks at the letter under `at` and its neighbours, writes zero
//! or more fragments to the accumulator and returns the position of the next
//! letter to encode. Every rule consumes at least one letter.
//!
//! Code alphabet: `0` stands for the "th" sound, `X` for "sh"/"ch", `J` for
//! the soft "g"/"j", everything else reads as the English consonant.

use crate::accumulator::CodeAccumulator;
use crate::heuristics::{is_germanic_c, is_slavo_germanic, is_spanish_ll, starts_germanic};
use crate::normalize::{NameBuffer, Pos, C_CEDILLA, N_TILDE};

/// Initial pairs whose first letter is silent: "gnome", "knight", "psalm".
const SILENT_STARTS: [&str; 5] = ["GN", "KN", "PN", "WR", "PS"];

/// Where encoding begins for `name`.
pub(crate) fn start(name: &NameBuffer) -> Pos {
    let first = name.first();
    if name.window_in(first, 2, &SILENT_STARTS) {
        first + 1
    } else {
        first
    }
}

/// Encode the letter at `at`, returning the next position.
pub(crate) fn apply(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    let next = match name.at(at) {
        'A' | 'E' | 'I' | 'O' | 'U' | 'Y' => vowel(name, at, out),
        'B' => letter_b(name, at, out),
        C_CEDILLA => letter_c_cedilla(at, out),
        'C' => letter_c(name, at, out),
        'D' => letter_d(name, at, out),
        'F' => letter_f(name, at, out),
        'G' => letter_g(name, at, out),
        'H' => letter_h(name, at, out),
        'J' => letter_j(name, at, out),
        'K' => letter_k(name, at, out),
        'L' => letter_l(name, at, out),
        'M' => letter_m(name, at, out),
        'N' => letter_n(name, at, out),
        N_TILDE => letter_n_tilde(at, out),
        'P' => letter_p(name, at, out),
        'Q' => letter_q(name, at, out),
        'R' => letter_r(name, at, out),
        'S' => letter_s(name, at, out),
        'T' => letter_t(name, at, out),
        'V' => letter_v(name, at, out),
        'W' => letter_w(name, at, out),
        'X' => letter_x(name, at, out),
        'Z' => letter_z(name, at, out),
        _ => at + 1,
    };

    debug_assert!(next > at, "rule at {at} did not advance");
    next
}

/// Skip one letter, or two when the next one is `twin`.
fn skip_double(name: &NameBuffer, at: Pos, twin: char) -> Pos {
    if name.at(at + 1) == twin {
        at + 2
    } else {
        at + 1
    }
}

fn vowel(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    if at == name.first() {
        out.emit("A");
    }
    at + 1
}

fn letter_b(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    // "-mb" as in "dumb" is consumed by M
    out.emit("P");
    skip_double(name, at, 'B')
}

fn letter_c_cedilla(at: Pos, out: &mut CodeAccumulator) -> Pos {
    out.emit_split("", "S");
    at + 1
}

fn letter_c(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    if is_germanic_c(name, at) {
        out.emit("K");
        return at + 2;
    }

    if at == name.first() && name.window_is(at, "CAESAR") {
        out.emit("S");
        return at + 2;
    }

    if name.window_is(at, "CHIA") {
        // "chianti"
        out.emit("K");
        return at + 2;
    }

    if name.window_is(at, "CH") {
        return combo_ch(name, at, out);
    }

    if name.window_is(at, "CZ") && !name.window_is(at - 2, "WICZ") {
        // "czar"
        out.emit_split("S", "X");
        return at + 2;
    }

    if name.window_is(at + 1, "CIA") {
        // Italian "focaccia"
        out.emit("X");
        return at + 3;
    }

    if name.window_is(at, "CC") && !name.window_is(at - 1, "MCC") {
        // not "McClelland"
        return combo_cc(name, at, out);
    }

    if name.window_in(at, 2, &["CK", "CG", "CQ"]) {
        out.emit("K");
        return at + 2;
    }

    if name.window_in(at, 2, &["CI", "CE", "CY"]) {
        if name.window_in(at, 3, &["CIO", "CIE", "CIA"]) {
            // Italian vs English
            out.emit_split("S", "X");
        } else {
            out.emit("S");
        }
        return at + 2;
    }

    out.emit("K");
    if name.window_in(at + 1, 2, &[" C", " Q", " G"]) {
        // "Mac Caffrey", "Mac Gregor"
        at + 3
    } else if name.char_in(at + 1, "CKQ") && !name.window_in(at + 1, 2, &["CE", "CI"]) {
        at + 2
    } else {
        at + 1
    }
}

fn combo_ch(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    let first = name.first();

    if at > first && name.window_is(at, "CHAE") {
        // "michael"
        out.emit_split("K", "X");
    } else if at == first
        && !name.window_is(at, "CHORE")
        && (name.window_in(at + 1, 5, &["HARAC", "HARIS"])
            || name.window_in(at + 1, 3, &["HOR", "HYM", "HIA", "HEM"]))
    {
        // Greek roots: "chemistry", "chorus"
        out.emit("K");
    } else if starts_germanic(name)
        || name.window_in(at - 2, 6, &["ORCHES", "ARCHIT", "ORCHID"])
        || name.char_in(at + 2, "TS")
        || (name.char_in(at - 1, "AOUE_") && name.char_in(at + 2, "LRNMBHFVW _"))
    {
        // "ch" read as "kh"
        out.emit("K");
    } else if at > first {
        if name.window_is(first, "MC") {
            // "mchugh"
            out.emit("K");
        } else {
            out.emit_split("X", "K");
        }
    } else {
        out.emit("X");
    }

    at + 2
}

fn combo_cc(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    // "bellocchio" but not "bacchus"
    if name.char_in(at + 2, "IEH") && !name.window_is(at + 2, "HU") {
        if (at == name.first() + 1 && name.at(at - 1) == 'A')
            || name.window_in(at - 1, 5, &["UCCEE", "UCCES"])
        {
            // "accident", "accede", "succeed"
            out.emit("KS");
        } else {
            // "bacci", "bertucci"
            out.emit("X");
        }
        return at + 3;
    }

    out.emit("K");
    at + 2
}

fn letter_d(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    if name.window_is(at, "DG") {
        if name.char_in(at + 2, "IEY") {
            // "edge"
            out.emit("J");
            return at + 3;
        }
        // "edgar"
        out.emit("TK");
        return at + 2;
    }

    out.emit("T");
    if name.window_in(at, 2, &["DT", "DD"]) {
        at + 2
    } else {
        at + 1
    }
}

fn letter_f(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    out.emit("F");
    skip_double(name, at, 'F')
}

fn letter_g(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    let first = name.first();
    let next = name.at(at + 1);

    if next == 'H' {
        return combo_gh(name, at, out);
    }

    if next == 'N' {
        if at == first + 1 && name.is_vowel(first) && !is_slavo_germanic(name) {
            out.emit_split("KN", "N");
        } else if !name.window_is(at + 2, "EY") && !is_slavo_germanic(name) {
            // not "cagney"
            out.emit_split("N", "KN");
        } else {
            out.emit("KN");
        }
        return at + 2;
    }

    if name.window_is(at + 1, "LI") && !is_slavo_germanic(name) {
        // "tagliaro"
        out.emit_split("KL", "L");
        return at + 2;
    }

    if at == first
        && (next == 'Y'
            || name.window_in(
                at + 1,
                2,
                &["ES", "EP", "EB", "EL", "EY", "IB", "IL", "IN", "IE", "EI", "ER"],
            ))
    {
        // initial "ges", "gep", "gel", "gie"
        out.emit_split("K", "J");
        return at + 2;
    }

    if (name.window_is(at + 1, "ER") || next == 'Y')
        && !name.window_in(first, 6, &["DANGER", "RANGER", "MANGER"])
        && !name.char_in(at - 1, "EI")
        && !name.window_in(at - 1, 3, &["RGY", "OGY"])
    {
        // "-ger-", "-gy-"
        out.emit_split("K", "J");
        return at + 2;
    }

    if name.char_in(at + 1, "EIY") || name.window_in(at - 1, 4, &["AGGI", "OGGI"]) {
        if starts_germanic(name) || name.window_is(at + 1, "ET") {
            out.emit("K");
        } else if name.window_is(at + 1, "IER_") {
            // French ending is always soft
            out.emit("J");
        } else {
            // Italian "biaggi"
            out.emit_split("J", "K");
        }
        return at + 2;
    }

    out.emit("K");
    skip_double(name, at, 'G')
}

fn combo_gh(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    let first = name.first();

    if at > first && !name.is_vowel(at - 1) {
        out.emit("K");
    } else if at == first {
        if name.at(at + 2) == 'I' {
            out.emit("J");
        } else {
            out.emit("K");
        }
    } else if name.char_in(at - 2, "BHD")
        || name.char_in(at - 3, "BHD")
        || name.char_in(at - 4, "BH")
    {
        // Parker's rule: "hugh"
    } else if at > first + 2 && name.at(at - 1) == 'U' && name.char_in(at - 3, "CGLRT") {
        // "laugh", "McLaughlin", "cough", "rough", "tough"
        out.emit("F");
    } else if name.at(at - 1) != 'I' {
        out.emit("K");
    }

    at + 2
}

fn letter_h(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    // only between vowels or before a vowel at the start
    if (at == name.first() || name.is_vowel(at - 1)) && name.is_vowel(at + 1) {
        out.emit("H");
        at + 2
    } else {
        at + 1
    }
}

fn letter_j(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    let first = name.first();
    let last = name.last();
    let mut at = at;

    if name.window_is(at, "JOSE") || name.window_is(first, "SAN ") {
        // obviously Spanish: "jose", "san jacinto"
        if (at == first && name.at(at + 4) == ' ')
            || last - first == 3
            || name.window_is(first, "SAN ")
        {
            out.emit("H");
        } else {
            out.emit_split("J", "H");
        }
        at += 1;
    } else if at == first {
        out.emit_split("J", "A");
    } else if name.is_vowel(at - 1) && !is_slavo_germanic(name) && name.char_in(at + 1, "AO") {
        // Spanish "bajador"
        out.emit_split("J", "H");
    } else if at == last {
        out.emit_split("J", "");
    } else if !name.char_in(at + 1, "LTKSNMBZ") && !name.char_in(at - 1, "SKL") {
        out.emit("J");
    }

    skip_double(name, at, 'J')
}

fn letter_k(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    out.emit("K");
    skip_double(name, at, 'K')
}

fn letter_l(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    if name.at(at + 1) == 'L' {
        if is_spanish_ll(name, at) {
            out.emit_split("L", "");
        } else {
            out.emit("L");
        }
        return at + 2;
    }

    out.emit("L");
    at + 1
}

fn letter_m(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    out.emit("M");

    // "dumb", "thumb", "dumber", "dummy" but not "thumbelina"
    let silent_b = name.window_is(at - 1, "UMB")
        && (at + 1 == name.last() || name.window_is(at + 2, "ER"));

    if silent_b || name.at(at + 1) == 'M' {
        at + 2
    } else {
        at + 1
    }
}

fn letter_n(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    out.emit("N");
    skip_double(name, at, 'N')
}

fn letter_n_tilde(at: Pos, out: &mut CodeAccumulator) -> Pos {
    out.emit("N");
    at + 1
}

fn letter_p(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    if name.at(at + 1) == 'H' {
        // "phyllis"
        out.emit("F");
        return at + 2;
    }

    out.emit("P");
    // "campbell", "steppenwolf"
    if name.char_in(at + 1, "PB") {
        at + 2
    } else {
        at + 1
    }
}

fn letter_q(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    out.emit("K");
    skip_double(name, at, 'Q')
}

fn letter_r(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    if at == name.last()
        && !is_slavo_germanic(name)
        && name.window_is(at - 2, "IE")
        && !name.window_in(at - 4, 2, &["ME", "MA"])
    {
        // French "rogier" but not "hochmeier"
        out.emit_split("", "R");
    } else {
        out.emit("R");
    }

    skip_double(name, at, 'R')
}

fn letter_s(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    let first = name.first();

    if name.window_in(at - 1, 3, &["ISL", "YSL"]) {
        // "island", "isle", "carlisle", "carlysle"
        return at + 1;
    }

    if at == first && name.window_is(at, "SUGAR") {
        out.emit_split("X", "S");
        return at + 1;
    }

    if name.window_is(at, "SH") {
        if name.window_in(at + 1, 4, &["HEIM", "HOEK", "HOLM", "HOLZ"]) {
            // "rudesheim"
            out.emit("S");
        } else {
            out.emit("X");
        }
        return at + 2;
    }

    if name.window_in(at, 3, &["SIO", "SIA"]) {
        // Italian and Armenian
        if is_slavo_germanic(name) {
            out.emit("S");
        } else {
            out.emit_split("S", "X");
        }
        return at + 3;
    }

    if (at == first && name.char_in(at + 1, "MNLW")) || name.at(at + 1) == 'Z' {
        // "smith" vs "schmidt", "snider" vs "schneider"; Slavic "sz"
        out.emit_split("S", "X");
        return skip_double(name, at, 'Z');
    }

    if name.window_is(at, "SC") {
        return combo_sc(name, at, out);
    }

    if at == name.last() && name.window_in(at - 2, 2, &["AI", "OI"]) {
        // French "resnais", "artois"
        out.emit_split("", "S");
        return at + 1;
    }

    out.emit("S");
    if name.char_in(at + 1, "SZ") {
        at + 2
    } else {
        at + 1
    }
}

fn combo_sc(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    if name.at(at + 2) == 'H' {
        // Schlesinger's rule
        if name.window_in(at + 3, 2, &["OO", "ER", "EN", "UY", "ED", "EM"]) {
            // Dutch "school", "schooner"
            if name.window_in(at + 3, 2, &["ER", "EN"]) {
                // "schermerhorn", "schenker"
                out.emit_split("X", "SK");
            } else {
                out.emit("SK");
            }
        } else if at == name.first() && !name.is_vowel(at + 3) && name.at(at + 3) != 'W' {
            out.emit_split("X", "S");
        } else {
            out.emit("X");
        }
    } else if name.char_in(at + 2, "IEY") {
        out.emit("S");
    } else {
        out.emit("SK");
    }

    at + 3
}

fn letter_t(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    if name.window_is(at, "TION") || name.window_in(at, 3, &["TIA", "TCH"]) {
        out.emit("X");
        return at + 3;
    }

    if name.window_is(at, "TH") || name.window_is(at, "TTH") {
        if name.window_in(at + 2, 2, &["OM", "AM"]) || starts_germanic(name) {
            // "thomas", "thames", or Germanic
            out.emit("T");
        } else {
            out.emit_split("0", "T");
        }
        return at + 2;
    }

    out.emit("T");
    if name.char_in(at + 1, "TD") {
        at + 2
    } else {
        at + 1
    }
}

fn letter_v(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    out.emit("F");
    skip_double(name, at, 'V')
}

fn letter_w(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    // also in the middle of a word
    if name.window_is(at, "WR") {
        out.emit("R");
        return at + 2;
    }

    if at == name.first() {
        if name.is_vowel(at + 1) {
            // "wasserman" should match "vasserman"
            out.emit_split("A", "F");
        } else if name.window_is(at, "WH") {
            // "uomo" should match "womo"
            out.emit("A");
        }
    }

    // "arnow" should match "arnoff"
    if (at == name.last() && name.is_vowel(at - 1))
        || name.window_in(at - 1, 5, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
        || name.window_is(name.first(), "SCH")
    {
        out.emit_split("", "F");
        return at + 1;
    }

    if name.window_in(at, 4, &["WICZ", "WITZ"]) {
        // Polish "filipowicz"
        out.emit_split("TS", "FX");
        return at + 4;
    }

    at + 1
}

fn letter_x(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    if at == name.first() {
        // initial X sounds like Z
        out.emit("S");
    } else if at != name.last()
        || !(name.window_in(at - 3, 3, &["IAU", "EAU"]) || name.window_in(at - 2, 2, &["AU", "OU"]))
    {
        // not French trailing x: "breaux"
        out.emit("KS");
    }

    if name.char_in(at + 1, "CX") {
        at + 2
    } else {
        at + 1
    }
}

fn letter_z(name: &NameBuffer, at: Pos, out: &mut CodeAccumulator) -> Pos {
    if name.at(at + 1) == 'H' {
        // pinyin "zhao"
        out.emit("J");
        return at + 2;
    }

    if name.window_in(at + 1, 2, &["ZO", "ZI", "ZA"])
        || (is_slavo_germanic(name) && at > name.first() && name.at(at - 1) != 'T')
    {
        out.emit_split("S", "TS");
    } else {
        out.emit("S");
    }

    skip_double(name, at, 'Z')
}
