// core/src/converter.rs
//
// Converter facade: holds the compiled scheme and options, exposes the
// tokenize / aksarize / render operations.

use std::collections::BTreeSet;
use std::fmt;

use crate::aksara::{Aksara, Shape, Unit};
use crate::devanagari::DevanagariAksarizer;
use crate::error::Result;
use crate::latin::LatinAksarizer;
use crate::render;
use crate::scheme::{Category, CompiledTables, Glyph};
use crate::tokenizer;
use crate::trie::TokenTrie;
use crate::utils;
use crate::warning::{default_handler, Reporter, WarningHandler};
use crate::Config;

/// Bidirectional Latin ⇄ Devanagari converter for one scheme.
///
/// Immutable after construction; conversions take `&self` and can run on
/// several threads at once.
///
/// # Example
/// ```
/// use libaksara_core::{Config, Converter, SchemeTables};
///
/// let tables = SchemeTables::from_pairs(
///     &[("k", "क"), ("m", "म")],
///     &[("a", "अ"), ("a\u{304}", "आ")],
///     &[("a", ""), ("a\u{304}", "ा")],
///     &[],
///     "a",
///     "्",
/// );
/// let conv = Converter::new(Config::new(tables)).unwrap();
/// assert_eq!(conv.to_devanagari("kāma"), "काम");
/// assert_eq!(conv.to_latin("काम"), "kāma");
/// ```
pub struct Converter {
    tables: CompiledTables,
    config: Config,
    allow: BTreeSet<String>,
    // Multi-character allow entries each side would otherwise split into
    // unknown pieces. Matched in NFD and passed through whole.
    latin_runs: TokenTrie,
    devanagari_runs: TokenTrie,
    handler: WarningHandler,
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("tables", &self.tables)
            .field("strict", &self.config.strict)
            .field("case_sensitive", &self.config.case_sensitive)
            .field("allow", &self.allow)
            .finish_non_exhaustive()
    }
}

impl Converter {
    /// Validate the configured scheme and build a converter.
    ///
    /// Fails with a `ConfigError` if the tables break an invariant the
    /// tokenizer or the reverse lookup depends on.
    pub fn new(config: Config) -> Result<Self> {
        let tables =
            CompiledTables::compile(&config.tables, config.reverse.as_ref(), config.case_sensitive)?;
        let allow: BTreeSet<String> = config.allow.iter().map(|s| utils::nfd(s)).collect();
        let mut latin_runs = TokenTrie::new();
        let mut devanagari_runs = TokenTrie::new();
        for entry in allow.iter().filter(|e| e.chars().nth(1).is_some()) {
            let split = tokenizer::tokenize(&tables, entry)
                .iter()
                .any(|t| !tables.trie().contains(&tables.fold(t)));
            if split {
                latin_runs.insert(entry);
            }
            if entry.chars().any(|c| tables.classify(c) == Glyph::Other) {
                devanagari_runs.insert(entry);
            }
        }

        tracing::debug!(
            consonants = tables.len(Category::Consonant),
            vowels = tables.len(Category::Vowel),
            finals = tables.len(Category::Final),
            strict = config.strict,
            case_sensitive = config.case_sensitive,
            "converter ready"
        );

        Ok(Self {
            tables,
            config,
            allow,
            latin_runs,
            devanagari_runs,
            handler: default_handler(),
        })
    }

    /// Replace the warning handler (default: `tracing::warn!`).
    pub fn with_warning_handler(mut self, handler: WarningHandler) -> Self {
        self.handler = handler;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tables(&self) -> &CompiledTables {
        &self.tables
    }

    pub fn warning_handler(&self) -> &WarningHandler {
        &self.handler
    }

    fn reporter(&self) -> Reporter<'_> {
        Reporter {
            strict: self.config.strict,
            allow: &self.allow,
            handler: &self.handler,
        }
    }

    /// Split Latin text into scheme tokens (NFD), unknown characters kept
    /// singly. Allow-listed runs come out as one token.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        tokenizer::tokenize_with(&self.tables, &self.latin_runs, &utils::nfd(text))
    }

    /// Aksarize Latin text.
    pub fn latin_to_aksara(&self, text: &str) -> Vec<Unit> {
        self.latin_tokens_to_aksara(self.tokenize(text))
    }

    /// Aksarize an already tokenized Latin stream.
    ///
    /// Tokens are matched as given, so they should already be in NFD.
    pub fn latin_tokens_to_aksara<I, S>(&self, tokens: I) -> Vec<Unit>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let reporter = self.reporter();
        LatinAksarizer::new(&self.tables, &reporter).run(tokens)
    }

    /// Aksarize Devanagari text. The input is read as given, without
    /// normalization.
    pub fn devanagari_to_aksara(&self, text: &str) -> Vec<Unit> {
        let reporter = self.reporter();
        DevanagariAksarizer::new(&self.tables, &reporter, &self.devanagari_runs).run(text)
    }

    /// Latin text to Devanagari.
    pub fn to_devanagari(&self, text: &str) -> String {
        self.render_devanagari(&self.latin_to_aksara(text))
    }

    pub fn render_devanagari(&self, units: &[Unit]) -> String {
        render::render_devanagari(&self.tables, units)
    }

    /// Devanagari text to Latin.
    pub fn to_latin(&self, text: &str) -> String {
        self.render_latin(&self.devanagari_to_aksara(text))
    }

    pub fn render_latin(&self, units: &[Unit]) -> String {
        render::render_latin(units)
    }

    /// True if `aksara` has a valid shape and every token is in the scheme.
    pub fn is_well_formed(&self, aksara: &Aksara) -> bool {
        if aksara.shape() == Shape::Invalid {
            return false;
        }
        aksara.onset().iter().all(|c| self.tables.is_consonant(c))
            && aksara.vowel().map_or(true, |v| self.tables.is_vowel(v))
            && aksara.final_mark().map_or(true, |f| self.tables.is_final(f))
    }
}
