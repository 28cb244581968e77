// Latin aksarizer: scheme tokens -> aksaras.
//
// Three states:
//   Idle    nothing under construction
//   Onset   consonants collected, no vowel yet
//   Rhyme   vowel set (with or without onset), a final may still follow
//
// A Latin consonant never carries an implicit vowel, so an onset that ends
// the input stays vowelless.

use crate::aksara::{AksaraBuilder, Shape, Unit};
use crate::scheme::CompiledTables;
use crate::warning::Reporter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Onset,
    Rhyme,
}

pub(crate) struct LatinAksarizer<'a> {
    tables: &'a CompiledTables,
    reporter: &'a Reporter<'a>,
    out: Vec<Unit>,
    current: Option<AksaraBuilder>,
    state: State,
}

impl<'a> LatinAksarizer<'a> {
    pub fn new(tables: &'a CompiledTables, reporter: &'a Reporter<'a>) -> Self {
        Self {
            tables,
            reporter,
            out: Vec::new(),
            current: None,
            state: State::Idle,
        }
    }

    pub fn run<I, S>(mut self, tokens: I) -> Vec<Unit>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.feed(token.as_ref());
        }
        if self.state != State::Idle {
            self.finish();
        }
        self.out
    }

    fn feed(&mut self, token: &str) {
        let is_consonant = self.tables.is_consonant(token);
        let is_vowel = !is_consonant && self.tables.is_vowel(token);

        match self.state {
            State::Idle => {
                if is_consonant {
                    self.start_onset(token);
                } else if is_vowel {
                    self.start_vowel(token);
                } else {
                    self.pass_through(token);
                }
            }
            State::Onset => {
                if is_consonant {
                    if let Some(b) = self.current.as_mut() {
                        b.push_consonant(token);
                    }
                } else if is_vowel {
                    if let Some(b) = self.current.as_mut() {
                        b.set_vowel(token);
                    }
                    self.state = State::Rhyme;
                } else {
                    self.finish();
                    self.pass_through(token);
                }
            }
            State::Rhyme => {
                if is_consonant {
                    self.finish();
                    self.start_onset(token);
                } else if is_vowel {
                    self.finish();
                    self.start_vowel(token);
                } else if self.tables.is_final(token) {
                    if let Some(b) = self.current.as_mut() {
                        b.set_final(token);
                    }
                    self.finish();
                } else {
                    self.finish();
                    self.pass_through(token);
                }
            }
        }
    }

    fn start_onset(&mut self, token: &str) {
        self.current = Some(AksaraBuilder::new().consonant(token));
        self.state = State::Onset;
    }

    fn start_vowel(&mut self, token: &str) {
        self.current = Some(AksaraBuilder::new().vowel(token));
        self.state = State::Rhyme;
    }

    fn finish(&mut self) {
        if let Some(builder) = self.current.take() {
            let aksara = builder.build();
            debug_assert_ne!(aksara.shape(), Shape::Invalid, "{:?}", aksara);
            self.out.push(Unit::Aksara(aksara));
        }
        self.state = State::Idle;
    }

    fn pass_through(&mut self, token: &str) {
        self.reporter.token(token);
        self.out.push(Unit::Raw(token.to_string()));
        self.state = State::Idle;
    }
}
