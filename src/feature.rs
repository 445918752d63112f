//! Feature tags: the atomic units of coverage. Two words cover the same
//! feature iff they produce an equal tag, so the tag space is a closed
//! enum rather than the string namespace an ad-hoc scheme would use.

use std::collections::BTreeSet;
use std::fmt;

use crate::alphabet::Alphabet;

/// A specific letter, symbol, or digraph a word list must exhibit.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    Letter(char),
    Symbol(char),
    Digraph(String),
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feature::Letter(c) => write!(f, "letter:{c}"),
            Feature::Symbol(c) => write!(f, "symbol:{c}"),
            Feature::Digraph(d) => write!(f, "digraph:{d}"),
        }
    }
}

/// Extract the feature set of `word` under `alphabet`.
///
/// Each in-alphabet character contributes its `Letter` or `Symbol` tag;
/// each digraph occurring as a contiguous substring contributes its tag
/// exactly once, however many times it occurs. Pure and deterministic.
pub fn features(word: &str, alphabet: &Alphabet) -> BTreeSet<Feature> {
    let mut set = BTreeSet::new();
    for c in word.chars() {
        if alphabet.is_letter(c) {
            set.insert(Feature::Letter(c));
        } else if alphabet.is_symbol(c) {
            set.insert(Feature::Symbol(c));
        }
    }
    for d in &alphabet.digraphs {
        if word.contains(d.as_str()) {
            set.insert(Feature::Digraph(d.clone()));
        }
    }
    set
}
