//! Construction-time errors.
//!
//! Conversion itself never fails: unknown input is passed through. The only
//! hard failure is a scheme that would make maximal-munch tokenization or
//! the reverse lookup silently wrong, and that is rejected when the
//! `Converter` is built.
use std::path::PathBuf;

use thiserror::Error;

use crate::scheme::Category;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("empty key in {0} table")]
    EmptyKey(Category),

    #[error("{category} entry {token:?} has an empty glyph")]
    EmptyGlyph { category: Category, token: String },

    #[error("{category} entry {token:?} maps to {glyph:?}, expected a single character")]
    MultiCharGlyph {
        category: Category,
        token: String,
        glyph: String,
    },

    #[error("virama must be a single character, got {0:?}")]
    InvalidVirama(String),

    #[error("inherent vowel {0:?} is not in the vowel table")]
    UnknownInherent(String),

    #[error("diacritic {0:?} has no matching vowel")]
    OrphanDiacritic(String),

    #[error("vowel {0:?} has no diacritic form")]
    MissingDiacritic(String),

    #[error("only the inherent vowel may have an empty diacritic, got {0:?}")]
    UnexpectedEmptyDiacritic(String),

    #[error("{category} glyph {glyph:?} is claimed by both {first:?} and {second:?}")]
    DuplicateGlyph {
        category: Category,
        glyph: String,
        first: String,
        second: String,
    },

    #[error("{category} keys {first:?} and {second:?} collide after normalization")]
    KeyCollision {
        category: Category,
        first: String,
        second: String,
    },

    #[error("token {token:?} has prefix {prefix:?} which is not a token")]
    PrefixNotToken { token: String, prefix: String },

    #[error("supplied reverse {0} table is not the inverse of the forward table")]
    ReverseMismatch(Category),

    #[error("read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
