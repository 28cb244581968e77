// Renderers: aksara sequences back to flat strings.
//
// Both renderers assume well-formed aksaras. A token the tables do not know
// is written out as-is rather than dropped. Each aksara is NFC-composed on
// its own; raw units are copied verbatim.

use crate::aksara::{Aksara, Unit};
use crate::scheme::{Category, CompiledTables};
use crate::utils;

/// Render to Devanagari.
pub fn render_devanagari(tables: &CompiledTables, units: &[Unit]) -> String {
    let mut out = String::new();
    for unit in units {
        match unit {
            Unit::Raw(text) => out.push_str(text),
            Unit::Aksara(aksara) => {
                let mut text = String::new();
                push_devanagari(tables, aksara, &mut text);
                out.push_str(&utils::nfc(&text));
            }
        }
    }
    out
}

fn push_devanagari(tables: &CompiledTables, aksara: &Aksara, out: &mut String) {
    let glyph = |category: Category, token: &str, out: &mut String| {
        out.push_str(tables.glyph(category, token).unwrap_or(token));
    };

    if !aksara.onset().is_empty() {
        for (i, consonant) in aksara.onset().iter().enumerate() {
            if i > 0 {
                out.push(tables.virama());
            }
            glyph(Category::Consonant, consonant, out);
        }
        match aksara.vowel() {
            Some(vowel) => glyph(Category::Diacritic, vowel, out),
            None => out.push(tables.virama()),
        }
    } else if let Some(vowel) = aksara.vowel() {
        glyph(Category::Vowel, vowel, out);
    }

    if let Some(fin) = aksara.final_mark() {
        glyph(Category::Final, fin, out);
    }
}

/// Render to Latin. Tokens are written as stored, then composed.
pub fn render_latin(units: &[Unit]) -> String {
    let mut out = String::new();
    for unit in units {
        match unit {
            Unit::Raw(text) => out.push_str(text),
            Unit::Aksara(aksara) => {
                let text: String = aksara.tokens().collect();
                out.push_str(&utils::nfc(&text));
            }
        }
    }
    out
}
