//! Chat-format rendering and JSONL output.
//!
//! Each snapshot becomes one JSON object per line: a three-message chat
//! prompt plus the list of acceptable answers. Files are grouped by phase
//! under `data/chess/` in the registry directory.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use shakmaty::Color;
use tracing::info;

use crate::error::BuildError;
use crate::sampler::PhaseBuckets;
use crate::walker::PositionSample;
use game_phase::Phase;

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct EvalRecord {
    pub input: Vec<ChatMessage>,
    pub ideal: Vec<String>,
}

/// Render played moves as numbered pairs, e.g. `1. e4 e5 2. Nf3`.
pub fn pgn_style_move_string(moves: &[String]) -> String {
    moves
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| format!("{}. {}", i + 1, pair.join(" ")))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the chat prompt for one snapshot. Every legal move is accepted
/// as an ideal answer.
pub fn create_chat_record(sample: &PositionSample) -> EvalRecord {
    let side = match sample.side_to_move {
        Color::White => "white",
        Color::Black => "black",
    };

    EvalRecord {
        input: vec![
            ChatMessage {
                role: "system",
                content: format!("Next chess move as {side}"),
            },
            ChatMessage {
                role: "user",
                content: pgn_style_move_string(&sample.moves_played),
            },
            ChatMessage {
                role: "system",
                content: "Respond only with the move.".to_string(),
            },
        ],
        ideal: sample.legal_moves.clone(),
    }
}

/// Write one `lichess-<phase>.jsonl` file per phase under
/// `<registry>/data/chess/`, creating the directories as needed.
pub fn write_eval_files(registry_path: &Path, buckets: &PhaseBuckets) -> Result<(), BuildError> {
    let out_dir = registry_path.join("data").join("chess");
    fs::create_dir_all(&out_dir)?;

    for phase in Phase::ALL {
        let path = out_dir.join(format!("lichess-{}.jsonl", phase.name()));
        write_phase_file(&path, buckets.for_phase(phase))?;
    }
    Ok(())
}

fn write_phase_file(path: &Path, samples: &[PositionSample]) -> Result<(), BuildError> {
    // Written to a sibling temp file first so a failed run cannot leave a
    // half-written eval behind.
    let tmp_path = path.with_extension("jsonl.tmp");
    let mut writer = BufWriter::new(File::create(&tmp_path)?);

    for sample in samples {
        let record = create_chat_record(sample);
        serde_json::to_writer(&mut writer, &record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    fs::rename(&tmp_path, path)?;

    info!(path = %path.display(), count = samples.len(), "eval file written");
    Ok(())
}
