//! Game phase classification by piece census, back-rank density and
//! board mixedness.

pub mod mixedness;

use serde::{Deserialize, Serialize};
use shakmaty::{Board, Color, Rank, Role};

pub use mixedness::mixedness;

/// Mixedness score above which a position stops counting as an opening.
const MIXEDNESS_THRESHOLD: i32 = 150;

/// Phase of a chess game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Opening,
    Middlegame,
    Endgame,
}

impl Phase {
    /// All phases, in output order.
    pub const ALL: [Phase; 3] = [Phase::Opening, Phase::Middlegame, Phase::Endgame];

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Opening => "opening",
            Phase::Middlegame => "middlegame",
            Phase::Endgame => "endgame",
        }
    }
}

/// Classify a board into its game phase.
///
/// Pure function of the board state: recomputing on the same board always
/// yields the same label.
pub fn classify(board: &Board) -> Phase {
    let (majors, minors) = major_minor_counts(board);
    if majors + minors <= 6 {
        Phase::Endgame
    } else if majors + minors <= 10
        || backrank_is_sparse(board)
        || mixedness(board) > MIXEDNESS_THRESHOLD
    {
        Phase::Middlegame
    } else {
        Phase::Opening
    }
}

/// Combined-color major and minor piece counts.
///
/// Kings count among the majors here. The thresholds in [`classify`] were
/// tuned against that census, so it must not be corrected in isolation.
fn major_minor_counts(board: &Board) -> (u32, u32) {
    let majors = board.by_role(Role::Rook) | board.by_role(Role::Queen) | board.by_role(Role::King);
    let minors = board.by_role(Role::Bishop) | board.by_role(Role::Knight);
    (majors.count() as u32, minors.count() as u32)
}

/// True when either side keeps fewer than four of its own pieces on its
/// home rank.
fn backrank_is_sparse(board: &Board) -> bool {
    let white_home = board
        .by_color(Color::White)
        .into_iter()
        .filter(|sq| sq.rank() == Rank::First)
        .count();
    let black_home = board
        .by_color(Color::Black)
        .into_iter()
        .filter(|sq| sq.rank() == Rank::Eighth)
        .count();
    white_home < 4 || black_home < 4
}
