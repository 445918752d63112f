//! Alphabet state: the letters, symbols, and digraphs a word list must
//! exercise. Level mode clones and extends one snapshot per level, so the
//! cumulative state only ever grows and each level's selection can be
//! reproduced in isolation.

use std::collections::BTreeSet;

use crate::feature::Feature;

/// Default letter set of the Catalan master alphabet.
pub const CATALAN_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzàáèéíïòóúüç";
/// Default symbol set of the Catalan master alphabet.
pub const CATALAN_SYMBOLS: &str = "'’-·";
/// Digraphs and letter groups a Catalan dictionary should cover.
pub const CATALAN_DIGRAPHS: &[&str] = &[
    "ny", "ll", "rr", "qu", "qü", "gu", "gü", "ig", "ix", "tx", "tg", "tj", "ss", "l·l",
];

/// Allowed characters and required digraphs for one selection pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    pub letters: BTreeSet<char>,
    pub symbols: BTreeSet<char>,
    /// Kept in insertion order; duplicates are tolerated.
    pub digraphs: Vec<String>,
}

impl Alphabet {
    pub fn new(letters: &str, symbols: &str, digraphs: &[&str]) -> Self {
        Self {
            letters: letters.chars().collect(),
            symbols: symbols.chars().collect(),
            digraphs: digraphs.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// The master alphabet the original Catalan dictionary was built with.
    pub fn catalan() -> Self {
        Self::new(CATALAN_LETTERS, CATALAN_SYMBOLS, CATALAN_DIGRAPHS)
    }

    /// Fold one level's additions into this snapshot. Letters and symbols
    /// are set unions; digraphs are appended as given.
    pub fn extend(&mut self, add_chars: &str, add_symbols: &str, add_digraphs: &[String]) {
        self.letters.extend(add_chars.chars());
        self.symbols.extend(add_symbols.chars());
        self.digraphs.extend(add_digraphs.iter().cloned());
    }

    pub fn is_letter(&self, c: char) -> bool {
        self.letters.contains(&c)
    }

    pub fn is_symbol(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    /// True if every character of `word` lies in letters ∪ symbols.
    pub fn spells(&self, word: &str) -> bool {
        word.chars().all(|c| self.is_letter(c) || self.is_symbol(c))
    }

    /// Corpus-noise filter: a word must be non-empty, fully spellable,
    /// and contain at least one letter. Symbol-only strings are rejected.
    pub fn is_valid_word(&self, word: &str) -> bool {
        !word.is_empty() && self.spells(word) && word.chars().any(|c| self.is_letter(c))
    }

    /// Every feature tag a word list built against this alphabet must
    /// exhibit at least once.
    pub fn target_features(&self) -> BTreeSet<Feature> {
        let mut target: BTreeSet<Feature> =
            self.letters.iter().map(|&c| Feature::Letter(c)).collect();
        target.extend(self.symbols.iter().map(|&c| Feature::Symbol(c)));
        target.extend(self.digraphs.iter().map(|d| Feature::Digraph(d.clone())));
        target
    }
}
