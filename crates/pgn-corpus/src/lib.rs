//! Streaming access to large PGN game archives.
//!
//! A corpus file is a flat sequence of records, each a tag-pair header block
//! and a movetext block separated by blank lines. [`RecordStream`] splits the
//! raw bytes into whole records without loading the file; [`record`] turns a
//! record's text into metadata and SAN move tokens.

pub mod error;
pub mod record;
pub mod stream;

pub use error::CorpusError;
pub use record::{movetext_tokens, parse_metadata, split_record, GameMetadata};
pub use stream::RecordStream;
