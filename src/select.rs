//! Coverage Selector: builds one bounded word list from a
//! frequency-ordered candidate pool in four phases — mandatory includes,
//! frequency seeds, greedy coverage of missing features, frequency
//! padding. Coverage shortfalls are returned as data, never raised.

use std::collections::{BTreeSet, HashSet};

use crate::alphabet::Alphabet;
use crate::corpus::WordEntry;
use crate::error::LexibuildError;
use crate::feature::{features, Feature};

/// Size knobs for one selection pass.
#[derive(Debug, Clone, Copy)]
pub struct SelectOptions {
    /// List size to aim for; never exceeded.
    pub target_size: usize,
    /// Most frequent words added unconditionally before any coverage
    /// reasoning. Must not exceed `target_size`.
    pub seed_size: usize,
    /// Cap on how much of the frequency-ordered pool is scanned.
    /// 0 means the entire pool.
    pub candidate_limit: usize,
}

/// Result of one selection pass.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Unique words in selection order: include, seed, greedy, pad.
    pub words: Vec<String>,
    /// Target features no selected word covers.
    pub missing: BTreeSet<Feature>,
}

/// Select up to `opts.target_size` words from `candidates`, which must be
/// ordered by descending frequency; the pool is never re-sorted.
///
/// Greedy ties are broken by scan order, so the most frequent of equally
/// useful candidates wins. A greedy pass where no candidate covers any
/// missing feature stops early and reports the leftovers in
/// [`Selection::missing`].
///
/// Sharp edge, kept for parity with previously published lists: when the
/// include phase alone fills the list, coverage is not checked and the
/// missing set comes back empty even if the includes cover nothing.
pub fn select_words(
    candidates: &[WordEntry],
    opts: SelectOptions,
    alphabet: &Alphabet,
    include_words: &[String],
) -> Result<Selection, LexibuildError> {
    if opts.seed_size > opts.target_size {
        return Err(LexibuildError::Config(format!(
            "seed size {} cannot be larger than target size {}",
            opts.seed_size, opts.target_size
        )));
    }

    let window = if opts.candidate_limit == 0 || opts.candidate_limit >= candidates.len() {
        candidates
    } else {
        &candidates[..opts.candidate_limit]
    };

    let mut selected: Vec<String> = Vec::new();
    let mut chosen: HashSet<&str> = HashSet::new();

    // Include phase. The bound is checked before each append as well,
    // so a zero target never admits an include word.
    for word in include_words {
        if selected.len() >= opts.target_size {
            return Ok(Selection {
                words: selected,
                missing: BTreeSet::new(),
            });
        }
        if chosen.contains(word.as_str()) {
            continue;
        }
        chosen.insert(word.as_str());
        selected.push(word.clone());
        if selected.len() >= opts.target_size {
            return Ok(Selection {
                words: selected,
                missing: BTreeSet::new(),
            });
        }
    }

    // Seed phase.
    for entry in window {
        if selected.len() >= opts.seed_size {
            break;
        }
        if chosen.contains(entry.text.as_str()) {
            continue;
        }
        chosen.insert(entry.text.as_str());
        selected.push(entry.text.clone());
    }

    let mut missing = alphabet.target_features();
    for word in &selected {
        for f in features(word, alphabet) {
            missing.remove(&f);
        }
    }

    // Greedy phase: repeatedly take the candidate covering the most
    // still-missing features. Strict `>` keeps the earliest scanned
    // (most frequent) word on ties.
    while !missing.is_empty() && selected.len() < opts.target_size {
        let mut best: Option<&WordEntry> = None;
        let mut best_gain = 0usize;
        for entry in window {
            if chosen.contains(entry.text.as_str()) {
                continue;
            }
            let gain = features(&entry.text, alphabet)
                .intersection(&missing)
                .count();
            if gain > best_gain {
                best_gain = gain;
                best = Some(entry);
            }
        }
        let Some(entry) = best else {
            break;
        };
        chosen.insert(entry.text.as_str());
        selected.push(entry.text.clone());
        for f in features(&entry.text, alphabet) {
            missing.remove(&f);
        }
    }

    // Pad phase.
    for entry in window {
        if selected.len() >= opts.target_size {
            break;
        }
        if chosen.contains(entry.text.as_str()) {
            continue;
        }
        chosen.insert(entry.text.as_str());
        selected.push(entry.text.clone());
    }

    Ok(Selection {
        words: selected,
        missing,
    })
}
