//! Builds chess eval sets from a PGN corpus.
//!
//! A run streams game records out of one large PGN file, keeps a small
//! seeded-random sample of them, replays each kept game to snapshot the
//! position at fixed move checkpoints, classifies each snapshot by game
//! phase, and writes one JSONL eval file per phase into an eval registry
//! directory.

use std::fs::File;
use std::path::Path;

use pgn_corpus::RecordStream;
use tracing::info;

pub mod config;
pub mod emitter;
pub mod error;
pub mod sampler;
pub mod walker;

pub use config::Config;
pub use error::BuildError;

use emitter::write_eval_files;
use sampler::SampleCollector;

/// Run the full pipeline: stream, sample, replay, classify, write.
pub fn run(config: &Config, corpus_path: &Path) -> Result<(), BuildError> {
    info!(
        corpus = %corpus_path.display(),
        seed = config.seed,
        probability = config.probability,
        max_games = config.max_games,
        "starting eval build"
    );

    // RecordStream reads in large chunks itself, so the file handle is
    // passed in unbuffered.
    let file = File::open(corpus_path)?;
    let records = RecordStream::new(file);

    let mut collector = SampleCollector::new(config.seed, config.probability, config.max_games);
    let buckets = collector.collect(records)?;

    write_eval_files(&config.registry_path, &buckets)
}
