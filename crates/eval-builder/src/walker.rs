//! Replays one game record and captures board snapshots at fixed
//! full-move checkpoints.

use game_phase::Phase;
use pgn_corpus::{movetext_tokens, parse_metadata, split_record, GameMetadata};
use shakmaty::san::SanPlus;
use shakmaty::{Chess, Color, Position};

use crate::error::BuildError;

/// Full-move numbers at which a snapshot is captured.
pub const CHECKPOINTS: [u32; 6] = [5, 10, 20, 30, 40, 50];

/// A board snapshot captured during replay.
///
/// Built once per checkpoint ply and never mutated; the move history is
/// copied out because replay keeps extending it.
#[derive(Debug, Clone)]
pub struct PositionSample {
    /// Full-move number, always a member of [`CHECKPOINTS`].
    pub move_number: u32,
    pub side_to_move: Color,
    /// Move actually played from this position, when the record has one.
    pub human_move: Option<String>,
    /// Half-moves applied so far, counting from 1.
    pub ply: u32,
    /// Side to move is in check here.
    pub is_check: bool,
    pub phase: Phase,
    /// Every legal move in SAN, in generation order.
    pub legal_moves: Vec<String>,
    /// SAN history from the start of the game through this ply.
    pub moves_played: Vec<String>,
    pub metadata: GameMetadata,
}

/// Replay a raw record and collect a snapshot at every checkpoint reached.
///
/// Replay stops the moment a move delivers checkmate, so a mated position
/// never reaches the checkpoint test and later tokens are never touched.
/// `record_index` identifies the record in errors.
pub fn walk_record(raw: &str, record_index: u64) -> Result<Vec<PositionSample>, BuildError> {
    let (headers, movetext) = split_record(raw);
    let metadata = parse_metadata(headers)?;
    let tokens = movetext_tokens(movetext);

    let mut samples = Vec::new();
    let mut pos = Chess::default();
    let mut moves_played: Vec<String> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let ply = i as u32 + 1;
        let mv = token
            .parse::<SanPlus>()
            .ok()
            .and_then(|san| san.san.to_move(&pos).ok())
            .ok_or_else(|| BuildError::IllegalMove {
                record: record_index,
                ply,
                san: token.clone(),
            })?;

        moves_played.push(SanPlus::from_move(pos.clone(), mv).to_string());
        pos.play_unchecked(mv);

        if pos.is_checkmate() {
            break;
        }

        let move_number = ply / 2 + 1;
        if CHECKPOINTS.contains(&move_number) {
            let human_move = tokens.get(i + 1).and_then(|next| {
                next.parse::<SanPlus>()
                    .ok()
                    .and_then(|san| san.san.to_move(&pos).ok())
                    .map(|next_mv| SanPlus::from_move(pos.clone(), next_mv).to_string())
            });
            let legal_moves = pos
                .legal_moves()
                .iter()
                .map(|m| SanPlus::from_move(pos.clone(), *m).to_string())
                .collect();

            samples.push(PositionSample {
                move_number,
                side_to_move: pos.turn(),
                human_move,
                ply,
                is_check: pos.is_check(),
                phase: game_phase::classify(pos.board()),
                legal_moves,
                moves_played: moves_played.clone(),
                metadata: metadata.clone(),
            });
        }
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(movetext: &str) -> String {
        format!(
            r#"[WhiteElo "1500"]
[BlackElo "1600"]
[Opening "Test Opening"]
[TimeControl "300+3"]

{movetext}"#
        )
    }

    // Twelve quiet moves of an Italian Game; 24 plies, no checks.
    const ITALIAN: &str = "1. e4 e5 2. Nf3 Nc6 3. Bc4 Bc5 4. c3 Nf6 5. d3 d6 \
        6. O-O O-O 7. Re1 a6 8. a4 Ba7 9. h3 h6 10. Nbd2 Be6 11. Bxe6 fxe6 \
        12. Qb3 Qd7 1/2-1/2";

    // Legal's mate pattern; White mates at full-move 7 (ply 13).
    const LEGAL_MATE: &str =
        "1. e4 e5 2. Bc4 d6 3. Nf3 Bg4 4. Nc3 g6 5. Nxe5 Bxd1 6. Bxf7+ Ke7 7. Nd5# 1-0";

    #[test]
    fn test_snapshots_only_at_checkpoints() {
        let samples = walk_record(&record(ITALIAN), 0).unwrap();
        let seen: Vec<(u32, Color, u32)> = samples
            .iter()
            .map(|s| (s.move_number, s.side_to_move, s.ply))
            .collect();
        assert_eq!(
            seen,
            vec![
                (5, Color::White, 8),
                (5, Color::Black, 9),
                (10, Color::White, 18),
                (10, Color::Black, 19),
            ]
        );
    }

    #[test]
    fn test_snapshot_contents() {
        let samples = walk_record(&record(ITALIAN), 0).unwrap();
        let first = &samples[0];

        assert_eq!(
            first.moves_played,
            vec!["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5", "c3", "Nf6"]
        );
        assert_eq!(first.human_move.as_deref(), Some("d3"));
        assert!(!first.is_check);
        assert_eq!(first.metadata.opening, "Test Opening");
        // The position allows both the pawn push and kingside castling.
        assert!(first.legal_moves.iter().any(|m| m == "d4"));
        assert!(first.legal_moves.iter().any(|m| m == "O-O"));

        let last = &samples[3];
        assert_eq!(last.moves_played.len(), 19);
        assert_eq!(last.human_move.as_deref(), Some("Be6"));
    }

    #[test]
    fn test_halts_at_checkmate() {
        // Mate lands at full-move 7; nothing from checkpoint 10 onward may
        // appear, and the trailing junk after the mate is never replayed.
        let movetext = format!("{LEGAL_MATE} Ke8 Qh5");
        let samples = walk_record(&record(&movetext), 0).unwrap();

        assert_eq!(samples.len(), 2);
        assert!(samples.iter().all(|s| s.move_number == 5));
        assert_eq!(samples[0].ply, 8);
        assert_eq!(samples[1].ply, 9);
        assert_eq!(samples[1].human_move.as_deref(), Some("Bxd1"));
    }

    #[test]
    fn test_no_snapshot_before_first_checkpoint() {
        let samples = walk_record(&record("1. e4 e5 2. Nf3 Nc6 3. Bb5 a6 4. Ba4 *"), 0).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn test_human_move_absent_when_record_ends_at_checkpoint() {
        let samples =
            walk_record(&record("1. e4 e5 2. Nf3 Nc6 3. Bb5 a6 4. Ba4 Nf6 *"), 0).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].ply, 8);
        assert_eq!(samples[0].human_move, None);
    }

    #[test]
    fn test_missing_header_propagates() {
        let raw = "[WhiteElo \"1500\"]\n\n1. e4 e5 *";
        let err = walk_record(raw, 3).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Corpus(pgn_corpus::CorpusError::MissingHeader(_))
        ));
    }

    #[test]
    fn test_unreplayable_move_reports_record_and_ply() {
        let err = walk_record(&record("1. e4 e4 *"), 7).unwrap_err();
        match err {
            BuildError::IllegalMove { record, ply, san } => {
                assert_eq!(record, 7);
                assert_eq!(ply, 2);
                assert_eq!(san, "e4");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_movetext_yields_nothing() {
        let samples = walk_record(&record(""), 0).unwrap();
        assert!(samples.is_empty());
    }
}
