// Greedy maximal-munch tokenizer for Latin input.
//
// The input is expected in NFD. Each character either extends the current
// token (when the longer candidate is still a scheme token) or closes it.
// Characters outside the scheme come out as single-character tokens.
//
// Case folding only affects the trie walk. Emitted tokens keep the input's
// original spelling, so "Bh" stays "Bh".

use crate::scheme::CompiledTables;
use crate::trie::TokenTrie;

/// Split `text` into scheme tokens and single unknown characters.
///
/// Returns an empty vector for empty input.
pub fn tokenize(tables: &CompiledTables, text: &str) -> Vec<String> {
    tokenize_with(tables, &TokenTrie::new(), text)
}

/// Like `tokenize`, but any run found in `keep` is emitted as one token,
/// taking priority over scheme tokens at the same position.
pub fn tokenize_with(tables: &CompiledTables, keep: &TokenTrie, text: &str) -> Vec<String> {
    let root = tables.trie();
    let mut tokens = Vec::new();
    let mut buffer = String::new();
    // Trie node reached by the folded buffer; None when the buffer is not a token.
    let mut node: Option<&TokenTrie> = None;
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        if let Some(len) = keep.longest_prefix(rest) {
            if !buffer.is_empty() {
                tokens.push(std::mem::take(&mut buffer));
            }
            tokens.push(rest[..len].to_string());
            node = None;
            rest = &rest[len..];
            continue;
        }
        rest = &rest[ch.len_utf8()..];

        let next = node.and_then(|n| step(tables, n, ch));
        match next {
            Some(n) => {
                buffer.push(ch);
                node = Some(n);
            }
            None => {
                if !buffer.is_empty() {
                    tokens.push(std::mem::take(&mut buffer));
                }
                buffer.push(ch);
                node = step(tables, root, ch);
            }
        }
    }

    if !buffer.is_empty() {
        tokens.push(buffer);
    }
    tokens
}

/// Follow `ch` (folded as the tables require) and accept only complete tokens.
fn step<'t>(tables: &CompiledTables, node: &'t TokenTrie, ch: char) -> Option<&'t TokenTrie> {
    let mut folded = String::new();
    folded.push(ch);
    let folded = tables.fold(&folded);
    let mut cur = node;
    for c in folded.chars() {
        cur = cur.child(c)?;
    }
    cur.is_token().then_some(cur)
}
