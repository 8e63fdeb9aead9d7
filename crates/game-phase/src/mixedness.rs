//! Board mixedness score.
//!
//! Measures how interleaved the two sides' pieces are by sliding a 2x2
//! window over the board and scoring each window's white/black occupancy
//! against a fixed table. Ported from the game phase divider used by
//! lichess; the table is empirically tuned, not derived.

use shakmaty::{Board, Color, File, Rank, Square};

/// Score one 2x2 window. `row` is the window's lower rank, 1-based from
/// White's side of the board. Rows the table leaves unlisted, and listed
/// rows whose guard fails, score zero.
fn score_segment(white: i32, black: i32, row: i32) -> i32 {
    match (white, black) {
        (0, 0) => 0,
        (1, 0) => 1 + (8 - row),
        (2, 0) if row > 2 => 2 + (row - 2),
        (3, 0) if row > 1 => 3 + (row - 1),
        (4, 0) if row > 1 => 3 + (row - 1),
        (0, 1) => 1 + row,
        (1, 1) => 5 + (3 - row).abs(),
        (2, 1) => 4 + row,
        (3, 1) => 5 + row,
        (0, 2) if row < 6 => 2 + (6 - row),
        (1, 2) => 4 + (6 - row),
        (2, 2) => 7,
        (0, 3) if row < 7 => 3 + (7 - row),
        (1, 3) => 5 + (6 - row),
        (0, 4) if row < 7 => 3 + (7 - row),
        _ => 0,
    }
}

/// Sum of segment scores over the 49 overlapping 2x2 windows whose
/// lower-left corners span files a-g and ranks 1-7.
pub fn mixedness(board: &Board) -> i32 {
    let mut total = 0;
    for rank in 0..7u32 {
        for file in 0..7u32 {
            let mut white = 0;
            let mut black = 0;
            for dr in 0..2 {
                for df in 0..2 {
                    let sq = Square::from_coords(File::new(file + df), Rank::new(rank + dr));
                    if let Some(piece) = board.piece_at(sq) {
                        match piece.color {
                            Color::White => white += 1,
                            Color::Black => black += 1,
                        }
                    }
                }
            }
            total += score_segment(white, black, rank as i32 + 1);
        }
    }
    total
}
