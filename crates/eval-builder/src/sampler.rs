//! Reproducible record sampling and per-phase accumulation.

use game_phase::Phase;
use pgn_corpus::CorpusError;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::{debug, error, info};

use crate::error::BuildError;
use crate::walker::{walk_record, PositionSample};

/// Snapshots collected over a run, grouped by phase.
#[derive(Debug, Default)]
pub struct PhaseBuckets {
    pub opening: Vec<PositionSample>,
    pub middlegame: Vec<PositionSample>,
    pub endgame: Vec<PositionSample>,
}

impl PhaseBuckets {
    fn push(&mut self, sample: PositionSample) {
        match sample.phase {
            Phase::Opening => self.opening.push(sample),
            Phase::Middlegame => self.middlegame.push(sample),
            Phase::Endgame => self.endgame.push(sample),
        }
    }

    pub fn for_phase(&self, phase: Phase) -> &[PositionSample] {
        match phase {
            Phase::Opening => &self.opening,
            Phase::Middlegame => &self.middlegame,
            Phase::Endgame => &self.endgame,
        }
    }

    pub fn total(&self) -> usize {
        self.opening.len() + self.middlegame.len() + self.endgame.len()
    }
}

/// Draws one uniform value per record and keeps the records whose draw
/// falls under the inclusion probability, up to a cap on included games.
///
/// The generator is owned here and advances exactly once per record in
/// stream order, so a fixed seed over the same corpus reproduces the same
/// included set and the same snapshots.
pub struct SampleCollector {
    rng: Xoshiro256PlusPlus,
    probability: f64,
    max_games: u64,
}

impl SampleCollector {
    pub fn new(seed: u64, probability: f64, max_games: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            probability,
            max_games,
        }
    }

    /// Consume records until the cap is reached or the stream ends.
    ///
    /// Stream I/O failures abort the run. Record-scoped failures (missing
    /// headers, unreplayable moves) are logged with the record index and
    /// the record is skipped; it still takes up one slot under the cap.
    pub fn collect<I>(&mut self, records: I) -> Result<PhaseBuckets, BuildError>
    where
        I: IntoIterator<Item = Result<String, CorpusError>>,
    {
        let mut buckets = PhaseBuckets::default();
        let mut included = 0u64;

        for (index, record) in records.into_iter().enumerate() {
            // Checked on entry so a cap of zero admits nothing at all.
            if included >= self.max_games {
                break;
            }
            let record = record?;
            if self.rng.random::<f64>() >= self.probability {
                continue;
            }
            let index = index as u64;
            included += 1;
            debug!(record = index, included, "record sampled");

            match walk_record(&record, index) {
                Ok(samples) => {
                    for sample in samples {
                        buckets.push(sample);
                    }
                }
                Err(e) => {
                    error!(record = index, error = %e, "skipping record");
                }
            }
        }

        info!(
            included,
            opening = buckets.opening.len(),
            middlegame = buckets.middlegame.len(),
            endgame = buckets.endgame.len(),
            "sampling complete"
        );
        Ok(buckets)
    }
}
