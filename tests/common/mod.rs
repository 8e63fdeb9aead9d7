//! Shared helpers for building small PGN corpora in tests.

/// Build one game record: a header block, a blank line, then movetext.
pub fn game_record(
    white_elo: &str,
    black_elo: &str,
    opening: &str,
    time_control: &str,
    movetext: &str,
) -> String {
    format!(
        "[WhiteElo \"{white_elo}\"]\n[BlackElo \"{black_elo}\"]\n[Opening \"{opening}\"]\n[TimeControl \"{time_control}\"]\n\n{movetext}"
    )
}

/// Join records into a corpus. Every record is terminated by a blank line,
/// including the last one, as in a well-formed export.
pub fn corpus(records: &[String]) -> String {
    records.iter().map(|r| format!("{r}\n\n")).collect()
}

/// Twelve quiet moves of an Italian; replays past the move-10 checkpoints
/// with all thirty-two pieces still on the board.
pub const ITALIAN: &str = "1. e4 e5 2. Nf3 Nc6 3. Bc4 Bc5 4. c3 Nf6 5. d3 d6 \
                           6. O-O O-O 7. Re1 a6 8. a4 Ba7 9. h3 h6 10. Nbd2 Be6 \
                           11. Bxe6 fxe6 12. Qb3 Qd7 1/2-1/2";

/// Eight plies of a Ruy Lopez; exactly one checkpoint snapshot.
pub const RUY: &str = "1. e4 e5 2. Nf3 Nc6 3. Bb5 a6 4. Ba4 Nf6 *";
