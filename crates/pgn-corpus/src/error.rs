//! Corpus error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing header: {0}")]
    MissingHeader(&'static str),
}
