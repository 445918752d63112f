use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexibuildError {
    /// Structural misconfiguration: empty level list, seed size larger
    /// than target size, malformed level document.
    #[error("config error: {0}")]
    Config(String),

    /// Corpus file could not be read or parsed at all. Individual bad
    /// lines are skipped, never fatal.
    #[error("corpus error: {0}")]
    Corpus(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
