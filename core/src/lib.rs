//! libaksara-core
//!
//! Scheme-agnostic transliteration core shared by romanization crates
//! (libsanskrit). Text is segmented into aksaras (syllable units) and
//! rendered back out in Latin or Devanagari.
//!
//! Public API:
//! - `Converter` - Tokenize, aksarize and render for one scheme
//! - `SchemeTables` / `ReverseTables` - Latin ⇄ Devanagari mapping data
//! - `Aksara`, `AksaraBuilder`, `Unit` - The intermediate representation
//! - `Config` - Converter options, loadable from TOML
//! - `Warning` - Advisory strict-mode notifications
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub mod aksara;
pub use aksara::{Aksara, AksaraBuilder, Shape, Unit};

pub mod converter;
pub use converter::Converter;

pub mod error;
pub use error::ConfigError;

pub mod scheme;
pub use scheme::{Category, CompiledTables, Glyph, ReverseTables, SchemeTables};

pub mod trie;
pub use trie::TokenTrie;

pub mod warning;
pub use warning::{default_handler, log_warning, Warning, WarningHandler};

pub mod render;
pub mod tokenizer;

mod devanagari;
mod latin;

/// Everything a `Converter` is built from.
///
/// Tables are supplied by a language crate (or a TOML file); the remaining
/// fields are options and default to off/empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Report unrecognized input through the warning handler.
    #[serde(default)]
    pub strict: bool,

    /// Match Latin tokens without folding case.
    #[serde(default)]
    pub case_sensitive: bool,

    /// Units exempt from strict-mode warnings.
    #[serde(default)]
    pub allow: BTreeSet<String>,

    /// Forward tables, Latin → Devanagari.
    pub tables: SchemeTables,

    /// Pre-reversed tables. Derived from `tables` when absent; when present
    /// they must be the exact inverse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<ReverseTables>,
}

impl Config {
    /// Default options around `tables`.
    pub fn new(tables: SchemeTables) -> Self {
        Self {
            tables,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    // ========== Allow List ==========

    /// Exempt a unit from strict-mode warnings.
    pub fn allow(&mut self, unit: &str) {
        self.allow.insert(unit.to_string());
    }

    /// True if `unit` matches an allow-list entry in any canonical form.
    pub fn is_allowed(&self, unit: &str) -> bool {
        let unit = utils::nfd(unit);
        self.allow.iter().any(|a| utils::nfd(a) == unit)
    }
}

/// Utility helpers.
pub mod utils {
    use unicode_normalization::UnicodeNormalization;

    /// Canonical decomposition (NFD). Latin input and table keys use this form.
    pub fn nfd(s: &str) -> String {
        s.nfd().collect()
    }

    /// Canonical composition (NFC). Rendered output uses this form.
    pub fn nfc(s: &str) -> String {
        s.nfc().collect()
    }
}
