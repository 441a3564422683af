//! Double Metaphone encoding for personal and place names.
//!
//! A name is reduced to one or two short codes describing how it is
//! pronounced, so spellings that sound the same can be matched:
//! - `primary`: the most likely pronunciation
//! - `alternate`: a second reading for names of ambiguous origin
//!   (Germanic, Slavic, Italian, Spanish, French, Greek, Chinese pinyin)
//!
//! Two names sound alike when any primary or alternate code of one equals
//! a primary or alternate code of the other.
//!
//! ```
//! use soundmatch_encoder::{sounds_like, EncoderConfig, Sound};
//!
//! let smith = Sound::new("Smith");
//! assert_eq!(smith.primary(), "SM0");
//! assert_eq!(smith.alternate(), "XMT");
//!
//! assert!(smith.sounds_like(&Sound::new("Schmidt")));
//! assert!(sounds_like("bacher", "packer", EncoderConfig::default()));
//! ```

mod accumulator;
mod heuristics;
mod normalize;
mod rules;
mod sound;
mod window;

pub use sound::{sounds_like, EncoderConfig, MatchKind, Sound, STOP_LENGTH};

#[cfg(test)]
mod tests {
    use super::*;

    fn wide(text: &str) -> Vec<u16> {
        text.encode_utf16().collect()
    }

    fn wide_sounds_like(lhs: &str, rhs: &str) -> bool {
        let config = EncoderConfig::default();
        Sound::from_wide(&wide(lhs), config).sounds_like(&Sound::from_wide(&wide(rhs), config))
    }

    #[test]
    fn test_bacher_packer() {
        assert!(Sound::new("bacher").sounds_like(&Sound::new("packer")));
    }

    #[test]
    fn test_ivan() {
        let ivan = Sound::new("ivan");
        assert!(!ivan.sounds_like(&Sound::new("bacher")));
        assert!(ivan.sounds_like(&Sound::new("evan")));
        assert!(sounds_like("evan", "ivan", EncoderConfig::default()));
    }

    #[test]
    fn test_before_after() {
        assert!(!Sound::new("before").sounds_like(&Sound::new("after")));
    }

    #[test]
    fn test_monday_tuesday() {
        assert!(!sounds_like("monday", "tuesday", EncoderConfig::default()));
        assert!(!wide_sounds_like("monday", "tuesday"));
    }

    #[test]
    fn test_wide_plated_blotted() {
        assert!(wide_sounds_like("plated", "blotted"));
        assert_eq!(Sound::from_wide(&wide("plated"), EncoderConfig::default()).primary(), "PLTT");
    }

    #[test]
    fn test_long_words() {
        let config = EncoderConfig::default();
        let long = Sound::from_wide(&wide("antidisestablishmentarianism"), config);
        assert!(!long.sounds_like_text("supercalifragilisticexpialidocious"));
        assert_eq!(long.primary(), "ANTT");
        assert_eq!(Sound::new("supercalifragilisticexpialidocious").primary(), "SPRK");
    }

    #[test]
    fn test_wide_input_is_encoded() {
        let config = EncoderConfig::default();
        for text in ["monday", "Smith", "Peña", "Çelik", "Filipowicz"] {
            let from_wide = Sound::from_wide(&wide(text), config);
            assert!(!from_wide.primary().is_empty(), "{text}");
            assert_eq!(from_wide, Sound::with_config(text, config));
        }
    }

    #[test]
    fn test_limited_codes_never_exceed_stop_length() {
        let names = [
            "antidisestablishmentarianism",
            "supercalifragilisticexpialidocious",
            "Schwarzenegger",
            "Wojciechowski",
            "Tchaikovsky",
            "Mac Caffrey",
            "van Beethoven",
            "Bartholomew",
            "Villalobos",
            "Zhangjiakou",
        ];

        for name in names {
            let sound = Sound::new(name);
            assert!(sound.primary().len() <= STOP_LENGTH, "{name}: {sound}");
            assert!(sound.alternate().len() <= STOP_LENGTH, "{name}: {sound}");
            if !sound.has_alternate() {
                assert_eq!(sound.alternate(), "", "{name}");
            }
            assert!(sound.sounds_like(&sound), "{name}");
        }
    }
}
