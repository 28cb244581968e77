//! Scheme tables: the Latin ⇄ Devanagari mappings a converter is built from.
//!
//! `SchemeTables` is the plain, serializable form supplied by a language crate
//! or a TOML file. `CompiledTables` is the validated form the converter runs
//! on: keys normalized, reverse maps derived, the token trie built.
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::trie::TokenTrie;
use crate::utils;

/// The four mapping categories of a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Consonant,
    Vowel,
    Diacritic,
    Final,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Consonant,
        Category::Vowel,
        Category::Diacritic,
        Category::Final,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Consonant => "consonant",
            Category::Vowel => "vowel",
            Category::Diacritic => "diacritic",
            Category::Final => "final",
        };
        f.write_str(name)
    }
}

/// Forward tables, Latin token → Devanagari glyph.
///
/// Keys may be written composed or decomposed; they are brought to NFD when
/// compiled. Diacritic keys are vowel tokens; the inherent vowel's diacritic
/// is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeTables {
    /// Vowel realized by a bare consonant.
    pub inherent: String,
    /// Glyph that suppresses the inherent vowel.
    pub virama: String,
    pub consonants: BTreeMap<String, String>,
    pub vowels: BTreeMap<String, String>,
    pub diacritics: BTreeMap<String, String>,
    pub finals: BTreeMap<String, String>,
}

impl SchemeTables {
    /// Build tables from static pair lists.
    pub fn from_pairs(
        consonants: &[(&str, &str)],
        vowels: &[(&str, &str)],
        diacritics: &[(&str, &str)],
        finals: &[(&str, &str)],
        inherent: &str,
        virama: &str,
    ) -> Self {
        fn collect(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        }
        Self {
            consonants: collect(consonants),
            vowels: collect(vowels),
            diacritics: collect(diacritics),
            finals: collect(finals),
            inherent: inherent.to_string(),
            virama: virama.to_string(),
        }
    }

    pub fn table(&self, category: Category) -> &BTreeMap<String, String> {
        match category {
            Category::Consonant => &self.consonants,
            Category::Vowel => &self.vowels,
            Category::Diacritic => &self.diacritics,
            Category::Final => &self.finals,
        }
    }

    /// Naive inverse of every table. Empty glyphs are skipped.
    pub fn reversed(&self) -> ReverseTables {
        fn invert(table: &BTreeMap<String, String>) -> BTreeMap<String, String> {
            table
                .iter()
                .filter(|(_, glyph)| !glyph.is_empty())
                .map(|(token, glyph)| (glyph.clone(), token.clone()))
                .collect()
        }
        ReverseTables {
            consonants: invert(&self.consonants),
            vowels: invert(&self.vowels),
            diacritics: invert(&self.diacritics),
            finals: invert(&self.finals),
        }
    }
}

/// Reverse tables, Devanagari glyph → Latin token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReverseTables {
    pub consonants: BTreeMap<String, String>,
    pub vowels: BTreeMap<String, String>,
    pub diacritics: BTreeMap<String, String>,
    pub finals: BTreeMap<String, String>,
}

impl ReverseTables {
    pub fn table(&self, category: Category) -> &BTreeMap<String, String> {
        match category {
            Category::Consonant => &self.consonants,
            Category::Vowel => &self.vowels,
            Category::Diacritic => &self.diacritics,
            Category::Final => &self.finals,
        }
    }
}

/// What a single Devanagari character is, according to the active scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph<'a> {
    Consonant(&'a str),
    Vowel(&'a str),
    Diacritic(&'a str),
    Final(&'a str),
    Virama,
    Other,
}

#[derive(Debug, Clone, Default)]
struct Lookup {
    forward: HashMap<String, String>,
    reverse: HashMap<char, String>,
}

/// Validated, normalized scheme ready for conversion.
#[derive(Debug, Clone)]
pub struct CompiledTables {
    consonants: Lookup,
    vowels: Lookup,
    diacritics: Lookup,
    finals: Lookup,
    inherent: String,
    virama: char,
    trie: TokenTrie,
    case_sensitive: bool,
}

impl CompiledTables {
    /// Normalize and validate `tables`.
    ///
    /// When `reverse` is supplied it must equal the derived inverse.
    pub fn compile(
        tables: &SchemeTables,
        reverse: Option<&ReverseTables>,
        case_sensitive: bool,
    ) -> Result<Self> {
        let virama = single_char(&utils::nfc(&tables.virama))
            .ok_or_else(|| ConfigError::InvalidVirama(tables.virama.clone()))?;
        let inherent = normalize_key(&tables.inherent, case_sensitive);

        let consonants = build_lookup(Category::Consonant, &tables.consonants, None, case_sensitive)?;
        let vowels = build_lookup(Category::Vowel, &tables.vowels, None, case_sensitive)?;
        let diacritics = build_lookup(
            Category::Diacritic,
            &tables.diacritics,
            Some(&inherent),
            case_sensitive,
        )?;
        let finals = build_lookup(Category::Final, &tables.finals, None, case_sensitive)?;

        if !vowels.forward.contains_key(&inherent) {
            return Err(ConfigError::UnknownInherent(tables.inherent.clone()));
        }
        if let Some(orphan) = diacritics
            .forward
            .keys()
            .find(|k| !vowels.forward.contains_key(*k))
        {
            return Err(ConfigError::OrphanDiacritic(orphan.clone()));
        }
        if let Some(bare) = vowels
            .forward
            .keys()
            .find(|k| !diacritics.forward.contains_key(*k))
        {
            return Err(ConfigError::MissingDiacritic(bare.clone()));
        }

        let mut trie = TokenTrie::new();
        for lookup in [&consonants, &vowels, &finals] {
            for key in lookup.forward.keys() {
                trie.insert(key);
            }
        }
        for lookup in [&consonants, &vowels, &finals] {
            for key in lookup.forward.keys() {
                if let Some(prefix) = trie.missing_prefix(key) {
                    return Err(ConfigError::PrefixNotToken {
                        token: key.clone(),
                        prefix,
                    });
                }
            }
        }

        let compiled = Self {
            consonants,
            vowels,
            diacritics,
            finals,
            inherent,
            virama,
            trie,
            case_sensitive,
        };

        if let Some(reverse) = reverse {
            for category in Category::ALL {
                compiled.check_reverse(category, reverse.table(category))?;
            }
        }

        Ok(compiled)
    }

    fn lookup(&self, category: Category) -> &Lookup {
        match category {
            Category::Consonant => &self.consonants,
            Category::Vowel => &self.vowels,
            Category::Diacritic => &self.diacritics,
            Category::Final => &self.finals,
        }
    }

    fn check_reverse(&self, category: Category, given: &BTreeMap<String, String>) -> Result<()> {
        let derived = &self.lookup(category).reverse;
        if given.len() != derived.len() {
            return Err(ConfigError::ReverseMismatch(category));
        }
        for (glyph, token) in given {
            let matches = single_char(&utils::nfc(glyph))
                .and_then(|ch| derived.get(&ch))
                .is_some_and(|t| *t == normalize_key(token, self.case_sensitive));
            if !matches {
                return Err(ConfigError::ReverseMismatch(category));
            }
        }
        Ok(())
    }

    /// Fold `token` the way table keys were folded.
    pub fn fold<'a>(&self, token: &'a str) -> Cow<'a, str> {
        if self.case_sensitive {
            Cow::Borrowed(token)
        } else {
            Cow::Owned(token.to_lowercase())
        }
    }

    pub fn is_consonant(&self, token: &str) -> bool {
        self.consonants.forward.contains_key(self.fold(token).as_ref())
    }

    pub fn is_vowel(&self, token: &str) -> bool {
        self.vowels.forward.contains_key(self.fold(token).as_ref())
    }

    pub fn is_final(&self, token: &str) -> bool {
        self.finals.forward.contains_key(self.fold(token).as_ref())
    }

    /// Devanagari glyph for a Latin token in `category`.
    pub fn glyph(&self, category: Category, token: &str) -> Option<&str> {
        self.lookup(category)
            .forward
            .get(self.fold(token).as_ref())
            .map(String::as_str)
    }

    /// Classify one Devanagari character and give its Latin token.
    pub fn classify(&self, ch: char) -> Glyph<'_> {
        if ch == self.virama {
            return Glyph::Virama;
        }
        if let Some(t) = self.consonants.reverse.get(&ch) {
            return Glyph::Consonant(t);
        }
        if let Some(t) = self.vowels.reverse.get(&ch) {
            return Glyph::Vowel(t);
        }
        if let Some(t) = self.diacritics.reverse.get(&ch) {
            return Glyph::Diacritic(t);
        }
        if let Some(t) = self.finals.reverse.get(&ch) {
            return Glyph::Final(t);
        }
        Glyph::Other
    }

    pub fn inherent(&self) -> &str {
        &self.inherent
    }

    pub fn virama(&self) -> char {
        self.virama
    }

    pub fn trie(&self) -> &TokenTrie {
        &self.trie
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Number of entries per category, for diagnostics.
    pub fn len(&self, category: Category) -> usize {
        self.lookup(category).forward.len()
    }
}

fn normalize_key(key: &str, case_sensitive: bool) -> String {
    let key = utils::nfd(key);
    if case_sensitive {
        key
    } else {
        key.to_lowercase()
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn build_lookup(
    category: Category,
    table: &BTreeMap<String, String>,
    empty_allowed_for: Option<&str>,
    case_sensitive: bool,
) -> Result<Lookup> {
    let mut lookup = Lookup::default();
    let mut originals: HashMap<String, &str> = HashMap::new();

    for (raw_key, raw_glyph) in table {
        let key = normalize_key(raw_key, case_sensitive);
        if key.is_empty() {
            return Err(ConfigError::EmptyKey(category));
        }
        if let Some(first) = originals.insert(key.clone(), raw_key) {
            return Err(ConfigError::KeyCollision {
                category,
                first: first.to_string(),
                second: raw_key.clone(),
            });
        }

        let glyph = utils::nfc(raw_glyph);
        if glyph.is_empty() {
            match empty_allowed_for {
                Some(inherent) if inherent == key => {
                    lookup.forward.insert(key, glyph);
                    continue;
                }
                Some(_) => return Err(ConfigError::UnexpectedEmptyDiacritic(raw_key.clone())),
                None => {
                    return Err(ConfigError::EmptyGlyph {
                        category,
                        token: raw_key.clone(),
                    })
                }
            }
        }

        let ch = single_char(&glyph).ok_or_else(|| ConfigError::MultiCharGlyph {
            category,
            token: raw_key.clone(),
            glyph: glyph.clone(),
        })?;
        if let Some(first) = lookup.reverse.insert(ch, key.clone()) {
            return Err(ConfigError::DuplicateGlyph {
                category,
                glyph,
                first,
                second: key,
            });
        }
        lookup.forward.insert(key, glyph);
    }

    Ok(lookup)
}
