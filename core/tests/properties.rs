//! Property-based tests for the aksarizers and renderers.
//!
//! Inputs are drawn from a small scheme plus characters it does not know,
//! and the structural guarantees are checked on whatever comes out.

use std::sync::{Arc, Mutex};

use proptest::prelude::*;

use libaksara_core::utils::nfc;
use libaksara_core::{Config, Converter, SchemeTables, Shape, Unit, Warning, WarningHandler};

const CONSONANTS: &[(&str, &str)] = &[
    ("k", "क"),
    ("kh", "ख"),
    ("t", "त"),
    ("r", "र"),
    ("s", "स"),
    ("h", "ह"),
    ("m", "म"),
];
const VOWELS: &[(&str, &str)] = &[
    ("a", "अ"),
    ("a\u{304}", "आ"),
    ("i", "इ"),
    ("ai", "ऐ"),
    ("r\u{323}", "ऋ"),
];
const DIACRITICS: &[(&str, &str)] = &[
    ("a", ""),
    ("a\u{304}", "ा"),
    ("i", "ि"),
    ("ai", "ै"),
    ("r\u{323}", "ृ"),
];
const FINALS: &[(&str, &str)] = &[("m\u{323}", "ं"), ("h\u{323}", "ः")];

// Characters no table mentions, on either side.
const FOREIGN: &[char] = &['x', 'q', '-', ',', ' ', '\n', '7', '।', 'ॐ'];

fn converter(strict: bool) -> (Converter, Arc<Mutex<Vec<Warning>>>) {
    let mut config = Config::new(SchemeTables::from_pairs(
        CONSONANTS, VOWELS, DIACRITICS, FINALS, "a", "्",
    ));
    config.strict = strict;
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let handler: WarningHandler = Arc::new(move |w: &Warning| sink.lock().unwrap().push(w.clone()));
    let conv = Converter::new(config).unwrap().with_warning_handler(handler);
    (conv, seen)
}

fn keys(table: &'static [(&'static str, &'static str)]) -> Vec<&'static str> {
    table.iter().map(|(k, _)| *k).collect()
}

fn glyphs() -> Vec<char> {
    let mut out: Vec<char> = [CONSONANTS, VOWELS, DIACRITICS, FINALS]
        .iter()
        .flat_map(|t| t.iter().flat_map(|(_, g)| g.chars()))
        .collect();
    out.push('्');
    out
}

/// Any mix of scheme tokens and foreign characters.
fn arb_latin() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        3 => prop::sample::select(keys(CONSONANTS)).prop_map(str::to_string),
        3 => prop::sample::select(keys(VOWELS)).prop_map(str::to_string),
        1 => prop::sample::select(keys(FINALS)).prop_map(str::to_string),
        1 => prop::sample::select(FOREIGN.to_vec()).prop_map(String::from),
    ];
    prop::collection::vec(piece, 0..40).prop_map(|v| v.concat())
}

/// Any sequence of known glyphs, virama and foreign characters.
fn arb_devanagari() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        4 => prop::sample::select(glyphs()),
        1 => prop::sample::select(FOREIGN.to_vec()),
    ];
    prop::collection::vec(piece, 0..40).prop_map(|v| v.into_iter().collect())
}

/// Lowercase text built only from well-formed aksaras.
fn arb_valid_latin() -> impl Strategy<Value = String> {
    let aksara = (
        prop::collection::vec(prop::sample::select(keys(CONSONANTS)), 0..3),
        prop::option::of(prop::sample::select(keys(VOWELS))),
        prop::option::of(prop::sample::select(keys(FINALS))),
    )
        .prop_map(|(onset, vowel, fin)| {
            let mut s = onset.concat();
            match vowel {
                Some(v) => {
                    s.push_str(v);
                    if let Some(f) = fin {
                        s.push_str(f);
                    }
                }
                None if s.is_empty() => s.push('a'),
                None => {}
            }
            s
        });
    prop::collection::vec(aksara, 0..12).prop_map(|v| v.concat())
}

fn assert_shapes(units: &[Unit]) {
    for aksara in units.iter().filter_map(Unit::as_aksara) {
        assert_ne!(aksara.shape(), Shape::Invalid, "{:?}", aksara);
    }
}

fn raw_warnable(units: &[Unit]) -> usize {
    units
        .iter()
        .filter_map(Unit::as_raw)
        .filter(|r| !r.chars().all(char::is_whitespace))
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn latin_aksaras_have_valid_shape(text in arb_latin()) {
        let (conv, _) = converter(false);
        assert_shapes(&conv.latin_to_aksara(&text));
    }

    #[test]
    fn devanagari_aksaras_have_valid_shape(text in arb_devanagari()) {
        let (conv, _) = converter(false);
        assert_shapes(&conv.devanagari_to_aksara(&text));
    }

    #[test]
    fn foreign_characters_survive_in_order(text in arb_latin()) {
        let (conv, _) = converter(false);
        let foreign = |s: &str| s.chars().filter(|c| FOREIGN.contains(c)).collect::<String>();
        prop_assert_eq!(foreign(&conv.to_devanagari(&text)), foreign(&text));
        let deva = conv.to_devanagari(&text);
        prop_assert_eq!(foreign(&conv.to_latin(&deva)), foreign(&text));
    }

    #[test]
    fn valid_text_round_trips(text in arb_valid_latin()) {
        let (conv, _) = converter(true);
        let deva = conv.to_devanagari(&text);
        prop_assert_eq!(conv.to_latin(&deva), nfc(&text));
    }

    #[test]
    fn strict_warnings_match_raw_units(latin in arb_latin(), deva in arb_devanagari()) {
        let (conv, seen) = converter(true);

        let units = conv.latin_to_aksara(&latin);
        prop_assert_eq!(seen.lock().unwrap().len(), raw_warnable(&units));

        seen.lock().unwrap().clear();
        let units = conv.devanagari_to_aksara(&deva);
        prop_assert_eq!(seen.lock().unwrap().len(), raw_warnable(&units));
    }
}
