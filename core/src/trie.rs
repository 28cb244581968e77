/// Prefix trie over the combined Latin token set.
use std::collections::HashMap;

/// A character trie holding every consonant, vowel and final key of a scheme.
///
/// The tokenizer walks it one character at a time, and construction uses it
/// to verify that every proper prefix of a multi-character token is itself a
/// token (maximal munch silently splits tokens otherwise).
///
/// # Example
/// ```
/// use libaksara_core::trie::TokenTrie;
///
/// let mut trie = TokenTrie::new();
/// trie.insert("k");
/// trie.insert("kh");
///
/// assert!(trie.contains("kh"));
/// assert!(!trie.contains("khh"));
/// let k = trie.child('k').unwrap();
/// assert!(k.is_token());
/// assert!(k.child('h').unwrap().is_token());
/// ```
#[derive(Debug, Default, Clone)]
pub struct TokenTrie {
    children: HashMap<char, Box<TokenTrie>>,
    is_token: bool,
}

impl TokenTrie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: &str) {
        let mut node = self;
        for ch in token.chars() {
            node = node.children.entry(ch).or_default();
        }
        node.is_token = true;
    }

    /// The node reached by following `ch`, if any token continues with it.
    pub fn child(&self, ch: char) -> Option<&TokenTrie> {
        self.children.get(&ch).map(|b| b.as_ref())
    }

    /// True if the path leading here spells a complete token.
    pub fn is_token(&self) -> bool {
        self.is_token
    }

    pub fn contains(&self, token: &str) -> bool {
        let mut node = self;
        for ch in token.chars() {
            match node.child(ch) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.is_token
    }

    /// Byte length of the longest token `text` starts with.
    pub fn longest_prefix(&self, text: &str) -> Option<usize> {
        let mut node = self;
        let mut best = None;
        for (i, ch) in text.char_indices() {
            match node.child(ch) {
                Some(next) => node = next,
                None => break,
            }
            if node.is_token {
                best = Some(i + ch.len_utf8());
            }
        }
        best
    }

    /// Shortest proper prefix of `token` that is not itself a token.
    ///
    /// Returns `None` when every proper prefix is a token, which is what the
    /// greedy tokenizer needs to reach `token` at all.
    pub fn missing_prefix(&self, token: &str) -> Option<String> {
        let mut node = self;
        let mut prefix = String::new();
        let count = token.chars().count();
        for (i, ch) in token.chars().enumerate() {
            node = node.child(ch)?;
            prefix.push(ch);
            if i + 1 < count && !node.is_token {
                return Some(prefix);
            }
        }
        None
    }
}
