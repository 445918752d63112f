//! Core logic for the lexibuild dictionary curation system.
//!
//! Given a frequency-ordered word corpus and a target set of letters,
//! symbols, and digraphs, the crate selects a bounded word list that
//! exercises every target feature while staying short and common. Lists
//! can be built as one global dictionary or as a sequence of curriculum
//! levels whose alphabets grow monotonically.

pub mod alphabet;
pub mod corpus;
pub mod error;
pub mod feature;
pub mod level;
pub mod output;
pub mod select;

pub use alphabet::Alphabet;
pub use corpus::{load_corpus, parse_corpus, WordEntry};
pub use error::LexibuildError;
pub use feature::{features, Feature};
pub use level::{build_levels, LevelConfig, LevelResult, LevelSpec};
pub use select::{select_words, SelectOptions, Selection};
