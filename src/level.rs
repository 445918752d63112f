//! Level orchestration: each curriculum level extends the alphabet of the
//! previous ones, so later levels only ever teach words fully expressible
//! with characters introduced so far. Levels are processed strictly in
//! order; the cumulative alphabet only grows.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::alphabet::Alphabet;
use crate::corpus::WordEntry;
use crate::error::LexibuildError;
use crate::feature::Feature;
use crate::select::{select_words, SelectOptions};

/// One curriculum level as it appears in the JSON level document.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelSpec {
    /// Destination key; level mode writes `<name>.txt`.
    pub name: String,
    pub target_size: usize,
    pub seed_size: usize,
    /// Letters introduced at this level.
    #[serde(default)]
    pub add_chars: String,
    #[serde(default)]
    pub add_symbols: String,
    #[serde(default)]
    pub add_digraphs: Vec<String>,
    /// Words forced into this level's list ahead of selection.
    #[serde(default)]
    pub include_words: Vec<String>,
}

/// Root of the level document: `{"levels": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelConfig {
    pub levels: Vec<LevelSpec>,
}

impl LevelConfig {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LexibuildError> {
        serde_json::from_reader(reader)
            .map_err(|e| LexibuildError::Config(format!("level document: {e}")))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LexibuildError> {
        Self::from_reader(File::open(path)?)
    }

    /// Union of every level's additions: the alphabet corpus words are
    /// validity-screened against before any per-level filtering.
    pub fn master_alphabet(&self) -> Alphabet {
        let mut alphabet = Alphabet::default();
        for spec in &self.levels {
            alphabet.extend(&spec.add_chars, &spec.add_symbols, &spec.add_digraphs);
        }
        alphabet
    }
}

/// Outcome of one level. An empty `words` list is the sentinel for "no
/// viable candidates, skip the output file".
#[derive(Debug, Clone)]
pub struct LevelResult {
    pub name: String,
    pub words: Vec<String>,
    pub missing: BTreeSet<Feature>,
    /// Include words removed because the cumulative alphabet cannot spell
    /// them yet. Diagnostic, never an error.
    pub dropped_includes: Vec<String>,
}

/// Run the selector once per level, threading a cumulative alphabet
/// snapshot through the sequence. `candidate_limit` caps the scanned
/// window of every level's filtered pool; 0 means unlimited.
///
/// `master_words` must be ordered by descending frequency. An empty level
/// list is a hard error.
pub fn build_levels(
    master_words: &[WordEntry],
    level_specs: &[LevelSpec],
    candidate_limit: usize,
) -> Result<Vec<LevelResult>, LexibuildError> {
    if level_specs.is_empty() {
        return Err(LexibuildError::Config("level list is empty".into()));
    }

    let mut cumulative = Alphabet::default();
    let mut results = Vec::with_capacity(level_specs.len());

    for spec in level_specs {
        cumulative.extend(&spec.add_chars, &spec.add_symbols, &spec.add_digraphs);
        let alphabet = cumulative.clone();

        let pool: Vec<WordEntry> = master_words
            .iter()
            .filter(|e| alphabet.spells(&e.text))
            .cloned()
            .collect();

        let mut includes = Vec::new();
        let mut dropped = Vec::new();
        for word in &spec.include_words {
            let word = word.to_lowercase();
            if alphabet.spells(&word) {
                includes.push(word);
            } else {
                dropped.push(word);
            }
        }

        if pool.is_empty() {
            results.push(LevelResult {
                name: spec.name.clone(),
                words: Vec::new(),
                missing: BTreeSet::new(),
                dropped_includes: dropped,
            });
            continue;
        }

        let target_size = spec.target_size.min(pool.len());
        let opts = SelectOptions {
            target_size,
            seed_size: spec.seed_size.min(target_size),
            candidate_limit,
        };
        let selection = select_words(&pool, opts, &alphabet, &includes)?;
        results.push(LevelResult {
            name: spec.name.clone(),
            words: selection.words,
            missing: selection.missing,
            dropped_includes: dropped,
        });
    }

    Ok(results)
}
