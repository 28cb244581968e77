//! libsanskrit crate root
//!
//! Sanskrit romanization schemes on top of `libaksara-core`: the built-in
//! scheme tables, name-based scheme selection and Latin-to-Latin
//! transliteration through Devanagari.
//!
//! Public API exported here:
//! - `Scheme` from `schemes`
//! - `SanskritConfig` from `config`
//! - `Transliterator` and `transliterate`

pub mod config;
pub mod schemes;

pub use config::SanskritConfig;
pub use schemes::Scheme;

// Convenience re-exports for common types used by callers.
pub use libaksara_core::{
    Aksara, ConfigError, Converter, Shape, Unit, Warning, WarningHandler,
};

/// Converts between two Latin schemes.
///
/// The source text is rendered to Devanagari with the source converter and
/// read back with the target converter, so both schemes only need to agree
/// on the script. Case is folded on the way through.
#[derive(Debug)]
pub struct Transliterator {
    from: Converter,
    to: Converter,
}

impl Transliterator {
    pub fn new(from: Scheme, to: Scheme) -> Result<Self, ConfigError> {
        Ok(Self::from_converters(from.converter()?, to.converter()?))
    }

    /// Use prepared converters. Warnings for unknown input come from `from`;
    /// `to` only sees text `from` produced.
    pub fn from_converters(from: Converter, to: Converter) -> Self {
        Self { from, to }
    }

    pub fn convert(&self, text: &str) -> String {
        let devanagari = self.from.to_devanagari(text);
        self.to.to_latin(&devanagari)
    }
}

/// One-shot scheme conversion. Build a `Transliterator` to convert many strings.
///
/// ```
/// use libsanskrit::{transliterate, Scheme};
///
/// let hk = transliterate("kṛṣṇa", Scheme::Iast, Scheme::HarvardKyoto).unwrap();
/// assert_eq!(hk, "kRSNa");
/// ```
pub fn transliterate(text: &str, from: Scheme, to: Scheme) -> Result<String, ConfigError> {
    Ok(Transliterator::new(from, to)?.convert(text))
}
