//! Advisory warnings raised during conversion.
//!
//! Warnings never stop a conversion. They are delivered to a handler, which
//! by default forwards them to `tracing`.
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::utils;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A Latin token that is not part of the scheme, or a multi-character
    /// Devanagari unit (letter plus nukta) the scheme does not know.
    InvalidToken(String),
    /// A character in Devanagari input the scheme does not know.
    InvalidCharacter(char),
    /// A scheme name nobody recognized; `fallback` was used instead.
    UnknownScheme { requested: String, fallback: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::InvalidToken(token) => write!(f, "invalid token {:?}", token),
            Warning::InvalidCharacter(ch) => {
                write!(f, "invalid character {:?} (U+{:04X})", ch, *ch as u32)
            }
            Warning::UnknownScheme {
                requested,
                fallback,
            } => write!(f, "unknown scheme {:?}, using {:?}", requested, fallback),
        }
    }
}

/// Receiver for warnings. Shared between threads, so it must be `Send + Sync`.
pub type WarningHandler = Arc<dyn Fn(&Warning) + Send + Sync>;

/// Default handler: log at WARN level.
pub fn log_warning(warning: &Warning) {
    tracing::warn!(%warning, "transliteration warning");
}

pub fn default_handler() -> WarningHandler {
    Arc::new(log_warning)
}

/// Strict-mode filter in front of a handler.
///
/// Whitespace and allow-listed units are never reported; nothing is
/// reported unless strict mode is on. `allow` holds NFD forms and units are
/// decomposed before the lookup, so either spelling of an entry matches.
pub(crate) struct Reporter<'a> {
    pub strict: bool,
    pub allow: &'a BTreeSet<String>,
    pub handler: &'a WarningHandler,
}

impl Reporter<'_> {
    fn allowed(&self, unit: &str) -> bool {
        self.allow.contains(&utils::nfd(unit))
    }

    pub fn token(&self, token: &str) {
        if self.strict && !token.chars().all(char::is_whitespace) && !self.allowed(token) {
            (self.handler)(&Warning::InvalidToken(token.to_string()));
        }
    }

    pub fn character(&self, ch: char) {
        let mut buf = [0; 4];
        if self.strict && !ch.is_whitespace() && !self.allowed(ch.encode_utf8(&mut buf)) {
            (self.handler)(&Warning::InvalidCharacter(ch));
        }
    }
}
