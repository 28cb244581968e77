//! Built-in romanization schemes.
//!
//! ## Supported Schemes
//!
//! 1. **IAST** - International Alphabet of Sanskrit Transliteration (default)
//! 2. **ISO 15919** - Distinguishes short e/o and marks vocalic r/l with ring below
//! 3. **Harvard-Kyoto** - ASCII only, case-sensitive (`A` is ā, `z` is ś)
//!
//! Keys may be written precomposed here; the core decomposes them when the
//! converter is built.

use std::fmt;
use std::str::FromStr;

use libaksara_core::{Config, ConfigError, Converter, SchemeTables};
use once_cell::sync::Lazy;

/// Romanization schemes shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scheme {
    #[default]
    Iast,
    Iso15919,
    /// ASCII scheme; capitals are distinct letters.
    HarvardKyoto,
}

impl Scheme {
    /// Every built-in scheme.
    pub fn all() -> &'static [Scheme] {
        &[Scheme::Iast, Scheme::Iso15919, Scheme::HarvardKyoto]
    }

    /// Look up a scheme by name or alias, ignoring case.
    ///
    /// ```
    /// use libsanskrit::Scheme;
    ///
    /// assert_eq!(Scheme::from_name("HK"), Some(Scheme::HarvardKyoto));
    /// assert_eq!(Scheme::from_name("iso-15919"), Some(Scheme::Iso15919));
    /// assert_eq!(Scheme::from_name("velthuis"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Scheme> {
        match name.trim().to_ascii_lowercase().as_str() {
            "iast" => Some(Scheme::Iast),
            "iso" | "iso15919" | "iso-15919" | "iso_15919" => Some(Scheme::Iso15919),
            "hk" | "harvard-kyoto" | "harvard_kyoto" | "harvardkyoto" | "kyoto-harvard" => {
                Some(Scheme::HarvardKyoto)
            }
            _ => None,
        }
    }

    /// Canonical lowercase name, accepted by `from_name`.
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Iast => "iast",
            Scheme::Iso15919 => "iso15919",
            Scheme::HarvardKyoto => "hk",
        }
    }

    pub fn tables(&self) -> &'static SchemeTables {
        match self {
            Scheme::Iast => &IAST,
            Scheme::Iso15919 => &ISO_15919,
            Scheme::HarvardKyoto => &HARVARD_KYOTO,
        }
    }

    /// Whether token lookup should respect case by default.
    pub fn case_sensitive(&self) -> bool {
        matches!(self, Scheme::HarvardKyoto)
    }

    /// Core configuration for this scheme with default options.
    pub fn config(&self) -> Config {
        let mut config = Config::new(self.tables().clone());
        config.case_sensitive = self.case_sensitive();
        config
    }

    pub fn converter(&self) -> Result<Converter, ConfigError> {
        Converter::new(self.config())
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scheme::from_name(s).ok_or_else(|| format!("unknown scheme {:?}", s))
    }
}

const VIRAMA: &str = "्";

// IAST and ISO 15919 agree on consonants.
const IAST_CONSONANTS: &[(&str, &str)] = &[
    ("k", "क"),
    ("kh", "ख"),
    ("g", "ग"),
    ("gh", "घ"),
    ("ṅ", "ङ"),
    ("c", "च"),
    ("ch", "छ"),
    ("j", "ज"),
    ("jh", "झ"),
    ("ñ", "ञ"),
    ("ṭ", "ट"),
    ("ṭh", "ठ"),
    ("ḍ", "ड"),
    ("ḍh", "ढ"),
    ("ṇ", "ण"),
    ("t", "त"),
    ("th", "थ"),
    ("d", "द"),
    ("dh", "ध"),
    ("n", "न"),
    ("p", "प"),
    ("ph", "फ"),
    ("b", "ब"),
    ("bh", "भ"),
    ("m", "म"),
    ("y", "य"),
    ("r", "र"),
    ("l", "ल"),
    ("v", "व"),
    ("ś", "श"),
    ("ṣ", "ष"),
    ("s", "स"),
    ("h", "ह"),
];

static IAST: Lazy<SchemeTables> = Lazy::new(|| {
    SchemeTables::from_pairs(
        IAST_CONSONANTS,
        &[
            ("a", "अ"),
            ("ā", "आ"),
            ("i", "इ"),
            ("ī", "ई"),
            ("u", "उ"),
            ("ū", "ऊ"),
            ("ṛ", "ऋ"),
            ("ṝ", "ॠ"),
            ("ḷ", "ऌ"),
            ("ḹ", "ॡ"),
            ("e", "ए"),
            ("ai", "ऐ"),
            ("o", "ओ"),
            ("au", "औ"),
        ],
        &[
            ("a", ""),
            ("ā", "ा"),
            ("i", "ि"),
            ("ī", "ी"),
            ("u", "ु"),
            ("ū", "ू"),
            ("ṛ", "ृ"),
            ("ṝ", "ॄ"),
            ("ḷ", "ॢ"),
            ("ḹ", "ॣ"),
            ("e", "े"),
            ("ai", "ै"),
            ("o", "ो"),
            ("au", "ौ"),
        ],
        &[("ṃ", "ं"), ("ḥ", "ः"), ("m\u{310}", "ँ")],
        "a",
        VIRAMA,
    )
});

// Short e/o get their own letters; vocalic r/l use ring below.
static ISO_15919: Lazy<SchemeTables> = Lazy::new(|| {
    SchemeTables::from_pairs(
        IAST_CONSONANTS,
        &[
            ("a", "अ"),
            ("ā", "आ"),
            ("i", "इ"),
            ("ī", "ई"),
            ("u", "उ"),
            ("ū", "ऊ"),
            ("r\u{325}", "ऋ"),
            ("r\u{325}\u{304}", "ॠ"),
            ("l\u{325}", "ऌ"),
            ("l\u{325}\u{304}", "ॡ"),
            ("e", "ऎ"),
            ("ē", "ए"),
            ("ai", "ऐ"),
            ("o", "ऒ"),
            ("ō", "ओ"),
            ("au", "औ"),
        ],
        &[
            ("a", ""),
            ("ā", "ा"),
            ("i", "ि"),
            ("ī", "ी"),
            ("u", "ु"),
            ("ū", "ू"),
            ("r\u{325}", "ृ"),
            ("r\u{325}\u{304}", "ॄ"),
            ("l\u{325}", "ॢ"),
            ("l\u{325}\u{304}", "ॣ"),
            ("e", "ॆ"),
            ("ē", "े"),
            ("ai", "ै"),
            ("o", "ॊ"),
            ("ō", "ो"),
            ("au", "ौ"),
        ],
        &[("ṁ", "ं"), ("ḥ", "ः"), ("m\u{310}", "ँ")],
        "a",
        VIRAMA,
    )
});

static HARVARD_KYOTO: Lazy<SchemeTables> = Lazy::new(|| {
    SchemeTables::from_pairs(
        &[
            ("k", "क"),
            ("kh", "ख"),
            ("g", "ग"),
            ("gh", "घ"),
            ("G", "ङ"),
            ("c", "च"),
            ("ch", "छ"),
            ("j", "ज"),
            ("jh", "झ"),
            ("J", "ञ"),
            ("T", "ट"),
            ("Th", "ठ"),
            ("D", "ड"),
            ("Dh", "ढ"),
            ("N", "ण"),
            ("t", "त"),
            ("th", "थ"),
            ("d", "द"),
            ("dh", "ध"),
            ("n", "न"),
            ("p", "प"),
            ("ph", "फ"),
            ("b", "ब"),
            ("bh", "भ"),
            ("m", "म"),
            ("y", "य"),
            ("r", "र"),
            ("l", "ल"),
            ("v", "व"),
            ("z", "श"),
            ("S", "ष"),
            ("s", "स"),
            ("h", "ह"),
        ],
        &[
            ("a", "अ"),
            ("A", "आ"),
            ("i", "इ"),
            ("I", "ई"),
            ("u", "उ"),
            ("U", "ऊ"),
            ("R", "ऋ"),
            ("RR", "ॠ"),
            ("lR", "ऌ"),
            ("lRR", "ॡ"),
            ("e", "ए"),
            ("ai", "ऐ"),
            ("o", "ओ"),
            ("au", "औ"),
        ],
        &[
            ("a", ""),
            ("A", "ा"),
            ("i", "ि"),
            ("I", "ी"),
            ("u", "ु"),
            ("U", "ू"),
            ("R", "ृ"),
            ("RR", "ॄ"),
            ("lR", "ॢ"),
            ("lRR", "ॣ"),
            ("e", "े"),
            ("ai", "ै"),
            ("o", "ो"),
            ("au", "ौ"),
        ],
        &[("M", "ं"), ("H", "ः"), ("~", "ँ")],
        "a",
        VIRAMA,
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scheme_compiles() {
        for scheme in Scheme::all() {
            let conv = scheme.converter();
            assert!(conv.is_ok(), "{}: {:?}", scheme, conv.err());
        }
    }

    #[test]
    fn names_round_trip() {
        for scheme in Scheme::all() {
            assert_eq!(Scheme::from_name(scheme.name()), Some(*scheme));
            assert_eq!(scheme.to_string().parse::<Scheme>(), Ok(*scheme));
        }
        assert_eq!(Scheme::from_name(" IAST "), Some(Scheme::Iast));
        assert!("nonsense".parse::<Scheme>().is_err());
    }

    #[test]
    fn only_harvard_kyoto_is_case_sensitive() {
        assert!(!Scheme::Iast.case_sensitive());
        assert!(!Scheme::Iso15919.case_sensitive());
        assert!(Scheme::HarvardKyoto.case_sensitive());
        assert!(Scheme::HarvardKyoto.config().case_sensitive);
    }

    #[test]
    fn vowels_and_diacritics_line_up() {
        for scheme in Scheme::all() {
            let t = scheme.tables();
            assert_eq!(
                t.vowels.keys().collect::<Vec<_>>(),
                t.diacritics.keys().collect::<Vec<_>>(),
                "{}",
                scheme
            );
        }
    }
}
