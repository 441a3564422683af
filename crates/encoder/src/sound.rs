//! Encoded names and the sounds-alike relation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::accumulator::CodeAccumulator;
use crate::normalize::NameBuffer;
use crate::rules;

/// Maximum code length when codes are length limited.
pub const STOP_LENGTH: usize = 4;

/// Encoder settings, fixed for the lifetime of a [`Sound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Cap both codes at [`STOP_LENGTH`] characters
    pub limit_length: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self { limit_length: true }
    }
}

impl EncoderConfig {
    /// Codes of any length.
    pub fn unlimited() -> Self {
        Self { limit_length: false }
    }

    fn stop_length(&self) -> Option<usize> {
        self.limit_length.then_some(STOP_LENGTH)
    }
}

/// The phonetic encoding of one name.
///
/// Built once by one of the constructors and read-only afterwards. `==`
/// compares the encodings structurally; use [`Sound::sounds_like`] to ask
/// whether two names are pronounced alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sound {
    primary: String,
    alternate: String,
    has_alternate: bool,
    config: EncoderConfig,
}

impl Sound {
    /// Encode `text` with length-limited codes.
    pub fn new(text: &str) -> Self {
        Self::with_config(text, EncoderConfig::default())
    }

    pub fn with_config(text: &str, config: EncoderConfig) -> Self {
        Self::from_name(&NameBuffer::from_text(text), config)
    }

    /// Encode single-byte text: ASCII, or ISO-8859-1 for `ç`/`ñ`.
    pub fn from_latin1(bytes: &[u8], config: EncoderConfig) -> Self {
        Self::from_name(&NameBuffer::from_latin1(bytes), config)
    }

    /// Encode wide text given as UTF-16 code units.
    ///
    /// Characters outside `[A-Za-zÇçÑñ ]` are skipped.
    pub fn from_wide(units: &[u16], config: EncoderConfig) -> Self {
        Self::from_name(&NameBuffer::from_wide(units), config)
    }

    fn from_name(name: &NameBuffer, config: EncoderConfig) -> Self {
        let mut out = CodeAccumulator::default();
        let mut at = rules::start(name);

        while at <= name.last() && !(config.limit_length && out.is_saturated(STOP_LENGTH)) {
            at = rules::apply(name, at, &mut out);
        }

        let (primary, alternate, has_alternate) = out.finish(config.stop_length());

        tracing::trace!(
            name = %name.as_string(),
            primary = %primary,
            alternate = %alternate,
            "encoded name"
        );

        Self {
            primary,
            alternate,
            has_alternate,
            config,
        }
    }

    /// Most likely pronunciation.
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Second pronunciation; empty when [`Sound::has_alternate`] is false.
    pub fn alternate(&self) -> &str {
        &self.alternate
    }

    pub fn has_alternate(&self) -> bool {
        self.has_alternate
    }

    pub fn config(&self) -> EncoderConfig {
        self.config
    }

    /// The primary code, followed by the alternate if there is one.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes = vec![self.primary.as_str()];
        if self.has_alternate {
            codes.push(self.alternate.as_str());
        }
        codes
    }

    /// Which pair of codes makes `self` and `other` sound alike, if any.
    ///
    /// Checks run in a fixed order and the first hit is reported.
    pub fn match_kind(&self, other: &Sound) -> Option<MatchKind> {
        MatchKind::ALL.into_iter().find(|kind| kind.holds(self, other))
    }

    pub fn sounds_like(&self, other: &Sound) -> bool {
        self.match_kind(other).is_some()
    }

    /// Encode `text` with this sound's settings and compare.
    pub fn sounds_like_text(&self, text: &str) -> bool {
        self.sounds_like(&Sound::with_config(text, self.config))
    }
}

impl From<&str> for Sound {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_alternate {
            write!(f, "{}/{}", self.primary, self.alternate)
        } else {
            f.write_str(&self.primary)
        }
    }
}

/// Encode both texts with the same settings and compare.
pub fn sounds_like(lhs: &str, rhs: &str, config: EncoderConfig) -> bool {
    Sound::with_config(lhs, config).sounds_like(&Sound::with_config(rhs, config))
}

/// The code pair that made two sounds match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Both primaries
    Primary,
    /// Left primary, right alternate
    PrimaryAlternate,
    /// Both alternates
    Alternate,
    /// Left alternate, right primary
    AlternatePrimary,
}

impl MatchKind {
    /// Every kind, in the order [`Sound::match_kind`] checks them.
    pub const ALL: [MatchKind; 4] = [
        Self::Primary,
        Self::PrimaryAlternate,
        Self::Alternate,
        Self::AlternatePrimary,
    ];

    /// Whether this pair of codes is equal for `lhs` and `rhs`.
    ///
    /// Alternates take part only when the sound has one.
    pub fn holds(&self, lhs: &Sound, rhs: &Sound) -> bool {
        match self {
            Self::Primary => lhs.primary == rhs.primary,
            Self::PrimaryAlternate => rhs.has_alternate && lhs.primary == rhs.alternate,
            Self::Alternate => lhs.has_alternate && rhs.has_alternate && lhs.alternate == rhs.alternate,
            Self::AlternatePrimary => lhs.has_alternate && lhs.alternate == rhs.primary,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::PrimaryAlternate => "primary/alternate",
            Self::Alternate => "alternate",
            Self::AlternatePrimary => "alternate/primary",
        }
    }

    /// The code shared by both sides, read from the left-hand sound.
    pub fn code<'a>(&self, lhs: &'a Sound) -> &'a str {
        match self {
            Self::Primary | Self::PrimaryAlternate => lhs.primary(),
            Self::Alternate | Self::AlternatePrimary => lhs.alternate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn codes(text: &str) -> (String, String) {
        let sound = Sound::new(text);
        (sound.primary().to_string(), sound.alternate().to_string())
    }

    fn pair(primary: &str, alternate: &str) -> (String, String) {
        (primary.to_string(), alternate.to_string())
    }

    #[test]
    fn test_whole_names() {
        assert_eq!(codes("Smith"), pair("SM0", "XMT"));
        assert_eq!(codes("Schmidt"), pair("XMT", "SMT"));
        assert_eq!(codes("Thomas"), pair("TMS", ""));
        assert_eq!(codes("Jose"), pair("HS", ""));
        assert_eq!(codes("Xavier"), pair("SF", "SFR"));
        assert_eq!(codes("Breaux"), pair("PR", ""));
        assert_eq!(codes("Gnome"), pair("NM", ""));
        assert_eq!(codes("Knight"), pair("NT", ""));
        assert_eq!(codes("Hugh"), pair("H", ""));
        assert_eq!(codes("Laugh"), pair("LF", ""));
        assert_eq!(codes("Edgar"), pair("ATKR", ""));
        assert_eq!(codes("Cabrillo"), pair("KPRL", "KPR"));
        assert_eq!(codes("Michael"), pair("MKL", "MXL"));
        assert_eq!(codes("Czar"), pair("SR", "XR"));
        assert_eq!(codes("Focaccia"), pair("FKX", ""));
        assert_eq!(codes("Accident"), pair("AKST", ""));
        assert_eq!(codes("McHugh"), pair("MK", ""));
        assert_eq!(codes("Tagliaro"), pair("TKLR", "TLR"));
        assert_eq!(codes("Wasserman"), pair("ASRM", "FSRM"));
        assert_eq!(codes("Arnow"), pair("ARN", "ARNF"));
        assert_eq!(codes("Schenker"), pair("XNKR", "SKNK"));
        assert_eq!(codes("Resnais"), pair("RSN", "RSNS"));
        assert_eq!(codes("Zhao"), pair("J", ""));
        assert_eq!(codes("Pizza"), pair("PS", "PTS"));
    }

    #[test]
    fn test_length_limit() {
        let limited = Sound::new("Filipowicz");
        assert_eq!(limited.primary(), "FLPT");
        assert_eq!(limited.alternate(), "FLPF");

        let full = Sound::with_config("Filipowicz", EncoderConfig::unlimited());
        assert_eq!(full.primary(), "FLPTS");
        assert_eq!(full.alternate(), "FLPFX");
    }

    #[test]
    fn test_unlimited_keeps_going() {
        let sound = Sound::with_config("antidisestablishmentarianism", EncoderConfig::unlimited());
        assert!(sound.primary().starts_with("ANTT"));
        assert!(sound.primary().len() > STOP_LENGTH);
        assert!(!sound.has_alternate());
        assert_eq!(sound.alternate(), "");
    }

    #[test]
    fn test_accented_forms() {
        let sound = Sound::new("Çelik");
        assert_eq!(sound.primary(), "LK");
        assert_eq!(sound.alternate(), "SLK");
        assert_eq!(codes("Peña"), pair("PN", ""));
    }

    #[test]
    fn test_empty_input() {
        for text in ["", "   ", "1234", "!?"] {
            let sound = Sound::new(text);
            assert_eq!(sound.primary(), "");
            assert_eq!(sound.alternate(), "");
            assert!(!sound.has_alternate());
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(Sound::new("SMITH"), Sound::new("smith"));
        assert_eq!(Sound::new("McHugh"), Sound::new("MCHUGH"));
    }

    #[test]
    fn test_narrow_and_wide_paths_agree() {
        let wide: Vec<u16> = "Peña Ximénez".encode_utf16().collect();
        let latin1 = [b'P', b'e', 0xF1, b'a', b' ', b'X', b'i', b'm', 0xE9, b'n', b'e', b'z'];
        let config = EncoderConfig::default();

        let text = Sound::new("Peña Ximénez");
        assert_eq!(Sound::from_wide(&wide, config), text);
        assert_eq!(Sound::from_latin1(&latin1, config), text);
        assert!(!text.primary().is_empty());
    }

    #[test]
    fn test_match_kinds() {
        let smith = Sound::new("Smith");
        let schmidt = Sound::new("Schmidt");
        assert_eq!(smith.match_kind(&schmidt), Some(MatchKind::AlternatePrimary));
        assert_eq!(schmidt.match_kind(&smith), Some(MatchKind::PrimaryAlternate));
        assert_eq!(smith.match_kind(&smith), Some(MatchKind::Primary));

        let arnow = Sound::new("Arnow");
        let arnoff = Sound::new("Arnoff");
        assert_eq!(arnow.match_kind(&arnoff), Some(MatchKind::AlternatePrimary));
        assert_eq!(MatchKind::AlternatePrimary.code(&arnow), "ARNF");

        let cabrillo = Sound::new("Cabrillo");
        let cabrio = Sound::new("Cabrio");
        assert_eq!(cabrillo.match_kind(&cabrio), Some(MatchKind::AlternatePrimary));

        // FLPT/FLPF against FLPS/FLPF: only the alternates agree
        let filipowicz = Sound::new("Filipowicz");
        let filipowski = Sound::new("Filipowski");
        assert_eq!(filipowski.primary(), "FLPS");
        assert_eq!(filipowski.alternate(), "FLPF");
        assert_eq!(filipowicz.match_kind(&filipowski), Some(MatchKind::Alternate));
        assert_eq!(filipowski.match_kind(&filipowicz), Some(MatchKind::Alternate));
        assert_eq!(MatchKind::Alternate.code(&filipowicz), "FLPF");
    }

    #[test]
    fn test_each_kind_holds_on_its_own_codes() {
        let filipowicz = Sound::new("Filipowicz");
        let filipowski = Sound::new("Filipowski");
        let holding: Vec<MatchKind> = MatchKind::ALL
            .into_iter()
            .filter(|kind| kind.holds(&filipowicz, &filipowski))
            .collect();
        assert_eq!(holding, vec![MatchKind::Alternate]);

        let smith = Sound::new("Smith");
        let schmidt = Sound::new("Schmidt");
        assert!(MatchKind::AlternatePrimary.holds(&smith, &schmidt));
        assert!(!MatchKind::PrimaryAlternate.holds(&smith, &schmidt));
        assert!(MatchKind::PrimaryAlternate.holds(&schmidt, &smith));
    }

    #[test]
    fn test_alternates_only_compared_when_present() {
        // Both have empty alternates; they must not match through them.
        let a = Sound::new("Thomas");
        let b = Sound::new("Jose");
        assert_eq!(a.match_kind(&b), None);
    }

    #[test]
    fn test_match_is_symmetric() {
        let names = [
            "Smith", "Schmidt", "Arnow", "Arnoff", "Cabrillo", "Cabrio", "Michael", "Mikel",
            "Wasserman", "Vasserman", "Czar", "Xar", "Thomas", "", "Pizza", "Pitsa",
            "Filipowicz", "Filipowski",
        ];
        let sounds: Vec<Sound> = names.iter().map(|n| Sound::new(n)).collect();

        for a in &sounds {
            assert!(a.sounds_like(a), "{a} should sound like itself");
            for b in &sounds {
                assert_eq!(a.sounds_like(b), b.sounds_like(a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_sounds_like_text_uses_own_config() {
        let limited = Sound::new("Filipowicz");
        assert!(limited.sounds_like_text("Filipowitz"));

        let full = Sound::with_config("antidisestablishment", EncoderConfig::unlimited());
        assert!(!full.sounds_like_text("antidisestablishmentarianism"));
        assert!(Sound::new("antidisestablishment").sounds_like_text("antidisestablishmentarianism"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Sound::new("Smith").to_string(), "SM0/XMT");
        assert_eq!(Sound::new("Thomas").to_string(), "TMS");
    }

    #[test]
    fn test_codes() {
        assert_eq!(Sound::new("Smith").codes(), vec!["SM0", "XMT"]);
        assert_eq!(Sound::new("Thomas").codes(), vec!["TMS"]);
    }

    #[test]
    fn test_serialization() {
        let sound = Sound::new("Smith");
        let json = serde_json::to_string(&sound).unwrap();
        let parsed: Sound = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sound);
        assert!(json.contains("\"primary\":\"SM0\""));
    }
}
