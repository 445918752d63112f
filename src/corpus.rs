//! Corpus ingestion: Leipzig-style `*-words.txt` frequency files, one
//! `rank<TAB>word<TAB>frequency` record per line, already sorted by
//! descending frequency. Malformed lines are skipped, not fatal.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::alphabet::Alphabet;
use crate::error::LexibuildError;

/// One candidate word with its corpus frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub text: String,
    pub frequency: u64,
}

impl WordEntry {
    pub fn new(text: &str, frequency: u64) -> Self {
        Self {
            text: text.to_string(),
            frequency,
        }
    }
}

/// Parse a corpus word table, keeping file order (descending frequency).
///
/// Words are trimmed and lowercased; records with fewer than three fields
/// or a non-integer frequency are dropped, as are words the master
/// `alphabet` rejects.
pub fn parse_corpus<R: Read>(
    reader: R,
    alphabet: &Alphabet,
) -> Result<Vec<WordEntry>, LexibuildError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut entries = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| LexibuildError::Corpus(e.to_string()))?;
        if record.len() < 3 {
            continue;
        }
        let word = record[1].trim().to_lowercase();
        let Ok(frequency) = record[2].trim().parse::<u64>() else {
            continue;
        };
        if !alphabet.is_valid_word(&word) {
            continue;
        }
        entries.push(WordEntry {
            text: word,
            frequency,
        });
    }
    Ok(entries)
}

/// Open and parse a corpus file from disk.
pub fn load_corpus<P: AsRef<Path>>(
    path: P,
    alphabet: &Alphabet,
) -> Result<Vec<WordEntry>, LexibuildError> {
    let file = File::open(path)?;
    parse_corpus(file, alphabet)
}
