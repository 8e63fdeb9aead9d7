//! Build pipeline error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Configuration error: {0}")]
    Config(&'static str),

    #[error("Corpus error: {0}")]
    Corpus(#[from] pgn_corpus::CorpusError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record {record}: cannot replay move {san:?} at ply {ply}")]
    IllegalMove { record: u64, ply: u32, san: String },
}
