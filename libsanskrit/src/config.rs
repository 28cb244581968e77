//! Scheme selection and options for Sanskrit converters.

use std::collections::BTreeSet;
use std::path::Path;

use libaksara_core::{default_handler, Config, ConfigError, Converter, Warning, WarningHandler};
use serde::{Deserialize, Serialize};

use crate::schemes::Scheme;

/// Sanskrit-level configuration that resolves into the core `Config`.
///
/// The scheme is chosen by name so it can come from a TOML file or a
/// command line. An unrecognized name is not an error: the default scheme is
/// used and one `Warning::UnknownScheme` is sent to the handler.
///
/// # Example
///
/// ```rust
/// use libsanskrit::SanskritConfig;
///
/// let config = SanskritConfig::from_toml_str("scheme = \"hk\"\nstrict = true").unwrap();
/// let conv = config.converter().unwrap();
/// assert_eq!(conv.to_devanagari("kRSNa"), "कृष्ण");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SanskritConfig {
    /// Scheme name or alias, e.g. "iast", "iso15919", "hk".
    pub scheme: String,

    /// Report unrecognized input.
    pub strict: bool,

    /// Units exempt from strict-mode warnings (punctuation, dandas, ...).
    pub allow: BTreeSet<String>,

    /// Overrides the scheme's own case sensitivity when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
}

impl Default for SanskritConfig {
    fn default() -> Self {
        Self {
            scheme: Scheme::default().name().to_string(),
            strict: false,
            allow: BTreeSet::new(),
            case_sensitive: None,
        }
    }
}

impl SanskritConfig {
    pub fn for_scheme(scheme: Scheme) -> Self {
        Self {
            scheme: scheme.name().to_string(),
            ..Self::default()
        }
    }

    /// The named scheme, if it is one we ship.
    pub fn resolve_scheme(&self) -> Option<Scheme> {
        Scheme::from_name(&self.scheme)
    }

    /// Resolve into the core `Config`.
    ///
    /// Falls back to the default scheme when the name is unknown, reporting
    /// the fallback once through `handler`.
    pub fn into_base(self, handler: &WarningHandler) -> Config {
        let scheme = match self.resolve_scheme() {
            Some(scheme) => scheme,
            None => {
                let fallback = Scheme::default();
                handler(&Warning::UnknownScheme {
                    requested: self.scheme.clone(),
                    fallback: fallback.name().to_string(),
                });
                fallback
            }
        };
        tracing::debug!(scheme = scheme.name(), strict = self.strict, "resolved scheme");

        let mut base = scheme.config();
        base.strict = self.strict;
        base.allow = self.allow;
        if let Some(case_sensitive) = self.case_sensitive {
            base.case_sensitive = case_sensitive;
        }
        base
    }

    /// Build a converter that logs warnings through `tracing`.
    pub fn converter(self) -> Result<Converter, ConfigError> {
        self.converter_with_handler(default_handler())
    }

    /// Build a converter whose warnings, including a scheme fallback, go to `handler`.
    pub fn converter_with_handler(self, handler: WarningHandler) -> Result<Converter, ConfigError> {
        let base = self.into_base(&handler);
        Ok(Converter::new(base)?.with_warning_handler(handler))
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
