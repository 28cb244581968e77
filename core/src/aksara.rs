//! The aksara (syllable unit) value type.
//!
//! An aksara is an optional consonant onset, an optional vowel and an
//! optional final. The aksarizers grow one with `AksaraBuilder` while input
//! is consumed and freeze it into an `Aksara` when it is pushed to output.
use std::fmt;

/// Structural shape of an aksara, following `C+(VF?)?` or `VF?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Consonants only; the cluster ends with a virama in Devanagari.
    Cluster,
    ClusterVowel,
    ClusterVowelFinal,
    Vowel,
    VowelFinal,
    /// Empty, or a final without a vowel.
    Invalid,
}

/// A finished syllable unit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Aksara {
    onset: Vec<String>,
    vowel: Option<String>,
    final_mark: Option<String>,
}

impl Aksara {
    pub fn builder() -> AksaraBuilder {
        AksaraBuilder::default()
    }

    /// Onset consonants in order. Empty when the aksara is vowel-initial.
    pub fn onset(&self) -> &[String] {
        &self.onset
    }

    pub fn vowel(&self) -> Option<&str> {
        self.vowel.as_deref()
    }

    pub fn final_mark(&self) -> Option<&str> {
        self.final_mark.as_deref()
    }

    pub fn shape(&self) -> Shape {
        match (
            self.onset.is_empty(),
            self.vowel.is_some(),
            self.final_mark.is_some(),
        ) {
            (false, false, false) => Shape::Cluster,
            (false, true, false) => Shape::ClusterVowel,
            (false, true, true) => Shape::ClusterVowelFinal,
            (true, true, false) => Shape::Vowel,
            (true, true, true) => Shape::VowelFinal,
            (_, false, true) | (true, false, false) => Shape::Invalid,
        }
    }

    /// Every token of the aksara, onset first.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.onset
            .iter()
            .map(String::as_str)
            .chain(self.vowel.as_deref())
            .chain(self.final_mark.as_deref())
    }
}

/// Latin rendering: the tokens concatenated as stored.
impl fmt::Display for Aksara {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.tokens() {
            f.write_str(token)?;
        }
        Ok(())
    }
}

/// In-progress aksara.
#[derive(Debug, Clone, Default)]
pub struct AksaraBuilder {
    onset: Vec<String>,
    vowel: Option<String>,
    final_mark: Option<String>,
}

impl AksaraBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn consonant(mut self, token: impl Into<String>) -> Self {
        self.push_consonant(token);
        self
    }

    pub fn vowel(mut self, token: impl Into<String>) -> Self {
        self.set_vowel(token);
        self
    }

    pub fn final_mark(mut self, token: impl Into<String>) -> Self {
        self.set_final(token);
        self
    }

    pub fn push_consonant(&mut self, token: impl Into<String>) {
        self.onset.push(token.into());
    }

    pub fn set_vowel(&mut self, token: impl Into<String>) {
        self.vowel = Some(token.into());
    }

    pub fn set_final(&mut self, token: impl Into<String>) {
        self.final_mark = Some(token.into());
    }

    pub fn build(self) -> Aksara {
        Aksara {
            onset: self.onset,
            vowel: self.vowel,
            final_mark: self.final_mark,
        }
    }
}

/// One element of an aksarized sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unit {
    Aksara(Aksara),
    /// Input the scheme did not recognize, kept verbatim.
    Raw(String),
}

impl Unit {
    pub fn as_aksara(&self) -> Option<&Aksara> {
        match self {
            Unit::Aksara(a) => Some(a),
            Unit::Raw(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Unit::Raw(s) => Some(s),
            Unit::Aksara(_) => None,
        }
    }
}

impl From<Aksara> for Unit {
    fn from(a: Aksara) -> Self {
        Unit::Aksara(a)
    }
}
