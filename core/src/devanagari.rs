// Devanagari aksarizer: characters -> aksaras.
//
// Four states:
//   Idle     nothing under construction
//   Pending  consonant read, its inherent vowel not yet confirmed or replaced
//   Virama   inherent vowel suppressed, cluster may continue
//   Rhyme    vowel settled, a final may still follow
//
// A bare consonant carries the inherent vowel, so leaving Pending for
// anything but a virama or a vowel sign sets the inherent vowel first.
//
// Input is read as given. A consonant followed by a nukta the scheme does
// not know is one unknown unit, passed through whole.

use crate::aksara::{AksaraBuilder, Shape, Unit};
use crate::scheme::{CompiledTables, Glyph};
use crate::trie::TokenTrie;
use crate::warning::Reporter;

const NUKTA: char = '\u{93c}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Pending,
    Virama,
    Rhyme,
}

pub(crate) struct DevanagariAksarizer<'a> {
    tables: &'a CompiledTables,
    reporter: &'a Reporter<'a>,
    keep: &'a TokenTrie,
    out: Vec<Unit>,
    current: Option<AksaraBuilder>,
    state: State,
}

impl<'a> DevanagariAksarizer<'a> {
    /// Runs found in `keep` are passed through whole without a warning.
    pub fn new(
        tables: &'a CompiledTables,
        reporter: &'a Reporter<'a>,
        keep: &'a TokenTrie,
    ) -> Self {
        Self {
            tables,
            reporter,
            keep,
            out: Vec::new(),
            current: None,
            state: State::Idle,
        }
    }

    pub fn run(mut self, text: &str) -> Vec<Unit> {
        let mut rest = text;
        while let Some(ch) = rest.chars().next() {
            if let Some(len) = self.keep.longest_prefix(rest) {
                self.close();
                self.out.push(Unit::Raw(rest[..len].to_string()));
                rest = &rest[len..];
                continue;
            }
            let len = ch.len_utf8();
            if self.is_unknown_nukta(ch, &rest[len..]) {
                let len = len + NUKTA.len_utf8();
                self.close();
                self.reporter.token(&rest[..len]);
                self.out.push(Unit::Raw(rest[..len].to_string()));
                rest = &rest[len..];
                continue;
            }
            self.feed(ch);
            rest = &rest[len..];
        }
        self.close();
        self.out
    }

    fn is_unknown_nukta(&self, ch: char, after: &str) -> bool {
        after.starts_with(NUKTA)
            && self.tables.classify(NUKTA) == Glyph::Other
            && matches!(self.tables.classify(ch), Glyph::Consonant(_))
    }

    fn feed(&mut self, ch: char) {
        let tables = self.tables;
        let glyph = tables.classify(ch);

        match self.state {
            State::Idle => match glyph {
                Glyph::Consonant(t) => self.start_onset(t),
                Glyph::Vowel(t) => self.start_vowel(t),
                _ => self.pass_through(ch),
            },
            State::Pending => match glyph {
                Glyph::Virama => self.state = State::Virama,
                Glyph::Diacritic(t) => {
                    if let Some(b) = self.current.as_mut() {
                        b.set_vowel(t);
                    }
                    self.state = State::Rhyme;
                }
                Glyph::Vowel(t) => {
                    self.set_inherent();
                    self.finish();
                    self.start_vowel(t);
                }
                Glyph::Consonant(t) => {
                    self.set_inherent();
                    self.finish();
                    self.start_onset(t);
                }
                Glyph::Final(t) => {
                    self.set_inherent();
                    if let Some(b) = self.current.as_mut() {
                        b.set_final(t);
                    }
                    self.finish();
                }
                Glyph::Other => {
                    self.close();
                    self.pass_through(ch);
                }
            },
            State::Virama => match glyph {
                Glyph::Consonant(t) => {
                    if let Some(b) = self.current.as_mut() {
                        b.push_consonant(t);
                    }
                    self.state = State::Pending;
                }
                // The cluster closes vowelless before a vowel-initial aksara.
                Glyph::Vowel(t) => {
                    self.finish();
                    self.start_vowel(t);
                }
                _ => {
                    self.finish();
                    self.pass_through(ch);
                }
            },
            State::Rhyme => match glyph {
                Glyph::Final(t) => {
                    if let Some(b) = self.current.as_mut() {
                        b.set_final(t);
                    }
                    self.finish();
                }
                Glyph::Consonant(t) => {
                    self.finish();
                    self.start_onset(t);
                }
                Glyph::Vowel(t) => {
                    self.finish();
                    self.start_vowel(t);
                }
                _ => {
                    self.finish();
                    self.pass_through(ch);
                }
            },
        }
    }

    fn set_inherent(&mut self) {
        let tables = self.tables;
        let inherent = tables.inherent();
        if let Some(b) = self.current.as_mut() {
            b.set_vowel(inherent);
        }
    }

    fn start_onset(&mut self, token: &str) {
        self.current = Some(AksaraBuilder::new().consonant(token));
        self.state = State::Pending;
    }

    fn start_vowel(&mut self, token: &str) {
        self.current = Some(AksaraBuilder::new().vowel(token));
        self.state = State::Rhyme;
    }

    /// Finish whatever is under construction; a pending consonant keeps
    /// its inherent vowel.
    fn close(&mut self) {
        if self.state == State::Pending {
            self.set_inherent();
        }
        self.finish();
    }

    fn finish(&mut self) {
        if let Some(builder) = self.current.take() {
            let aksara = builder.build();
            debug_assert_ne!(aksara.shape(), Shape::Invalid, "{:?}", aksara);
            self.out.push(Unit::Aksara(aksara));
        }
        self.state = State::Idle;
    }

    fn pass_through(&mut self, ch: char) {
        self.reporter.character(ch);
        self.out.push(Unit::Raw(ch.to_string()));
        self.state = State::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aksara::Aksara;
    use crate::scheme::SchemeTables;
    use crate::warning::{Warning, WarningHandler};
    use std::collections::BTreeSet;
    use std::sync::{Arc, Mutex};

    fn tables() -> CompiledTables {
        let t = SchemeTables::from_pairs(
            &[
                ("k", "क"),
                ("t", "त"),
                ("r", "र"),
                ("n", "न"),
                ("m", "म"),
                ("h", "ह"),
            ],
            &[("a", "अ"), ("a\u{304}", "आ"), ("i", "इ")],
            &[("a", ""), ("a\u{304}", "ा"), ("i", "ि")],
            &[("m\u{323}", "ं"), ("h\u{323}", "ः")],
            "a",
            "्",
        );
        CompiledTables::compile(&t, None, false).unwrap()
    }

    fn run(text: &str, strict: bool) -> (Vec<Unit>, Vec<Warning>) {
        run_keeping(text, strict, &TokenTrie::new())
    }

    fn run_keeping(text: &str, strict: bool, keep: &TokenTrie) -> (Vec<Unit>, Vec<Warning>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let handler: WarningHandler = Arc::new(move |w: &Warning| sink.lock().unwrap().push(w.clone()));
        let allow = BTreeSet::new();
        let reporter = Reporter {
            strict,
            allow: &allow,
            handler: &handler,
        };
        let t = tables();
        let units = DevanagariAksarizer::new(&t, &reporter, keep).run(text);
        let warnings = seen.lock().unwrap().clone();
        (units, warnings)
    }

    fn aksara(onset: &[&str], vowel: Option<&str>, fin: Option<&str>) -> Unit {
        let mut b = Aksara::builder();
        for c in onset {
            b.push_consonant(*c);
        }
        if let Some(v) = vowel {
            b.set_vowel(v);
        }
        if let Some(f) = fin {
            b.set_final(f);
        }
        Unit::Aksara(b.build())
    }

    #[test]
    fn bare_consonants_take_the_inherent_vowel() {
        let (units, _) = run("कम", false);
        assert_eq!(
            units,
            vec![aksara(&["k"], Some("a"), None), aksara(&["m"], Some("a"), None)]
        );
    }

    #[test]
    fn virama_builds_clusters() {
        let (units, _) = run("त्रि", false);
        assert_eq!(units, vec![aksara(&["t", "r"], Some("i"), None)]);
    }

    #[test]
    fn trailing_virama_leaves_a_vowelless_cluster() {
        let (units, _) = run("तन्", false);
        assert_eq!(
            units,
            vec![aksara(&["t"], Some("a"), None), aksara(&["n"], None, None)]
        );
    }

    #[test]
    fn finals_attach_after_inherent_or_sign() {
        let (units, _) = run("कंहः", false);
        assert_eq!(
            units,
            vec![
                aksara(&["k"], Some("a"), Some("m\u{323}")),
                aksara(&["h"], Some("a"), Some("h\u{323}")),
            ]
        );
        let (units, _) = run("काः", false);
        assert_eq!(
            units,
            vec![aksara(&["k"], Some("a\u{304}"), Some("h\u{323}"))]
        );
    }

    #[test]
    fn cluster_before_independent_vowel_closes_without_vowel() {
        let (units, _) = run("त्इ", false);
        assert_eq!(
            units,
            vec![aksara(&["t"], None, None), aksara(&[], Some("i"), None)]
        );
    }

    #[test]
    fn independent_vowels_chain() {
        let (units, _) = run("आइ", false);
        assert_eq!(
            units,
            vec![
                aksara(&[], Some("a\u{304}"), None),
                aksara(&[], Some("i"), None),
            ]
        );
        let (units, _) = run("कइ", false);
        assert_eq!(
            units,
            vec![aksara(&["k"], Some("a"), None), aksara(&[], Some("i"), None)]
        );
    }

    #[test]
    fn unknown_characters_pass_through() {
        let (units, warnings) = run("क। ्x", true);
        assert_eq!(
            units,
            vec![
                aksara(&["k"], Some("a"), None),
                Unit::Raw("।".into()),
                Unit::Raw(" ".into()),
                Unit::Raw("्".into()),
                Unit::Raw("x".into()),
            ]
        );
        assert_eq!(
            warnings,
            vec![
                Warning::InvalidCharacter('।'),
                Warning::InvalidCharacter('्'),
                Warning::InvalidCharacter('x'),
            ]
        );
    }

    #[test]
    fn stray_sign_after_cluster_is_raw() {
        let (units, warnings) = run("क्ा", false);
        assert_eq!(
            units,
            vec![aksara(&["k"], None, None), Unit::Raw("ा".into())]
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn letter_with_unknown_nukta_is_one_unit() {
        let (units, warnings) = run("क\u{93c}म", true);
        assert_eq!(
            units,
            vec![Unit::Raw("क\u{93c}".into()), aksara(&["m"], Some("a"), None)]
        );
        assert_eq!(warnings, vec![Warning::InvalidToken("क\u{93c}".into())]);

        // After a virama the cluster closes first.
        let (units, _) = run("त्क\u{93c}", false);
        assert_eq!(
            units,
            vec![aksara(&["t"], None, None), Unit::Raw("क\u{93c}".into())]
        );
    }

    #[test]
    fn precomposed_nukta_letters_are_not_decomposed() {
        let (units, warnings) = run("\u{958}ा", true);
        assert_eq!(
            units,
            vec![Unit::Raw("\u{958}".into()), Unit::Raw("ा".into())]
        );
        assert_eq!(
            warnings,
            vec![
                Warning::InvalidCharacter('\u{958}'),
                Warning::InvalidCharacter('ा'),
            ]
        );
    }

    #[test]
    fn kept_runs_pass_through_silently() {
        let mut keep = TokenTrie::new();
        keep.insert("e\u{301}");
        let (units, warnings) = run_keeping("कe\u{301}e", true, &keep);
        assert_eq!(
            units,
            vec![
                aksara(&["k"], Some("a"), None),
                Unit::Raw("e\u{301}".into()),
                Unit::Raw("e".into()),
            ]
        );
        assert_eq!(warnings, vec![Warning::InvalidCharacter('e')]);
    }
}
