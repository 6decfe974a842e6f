//! Exhaustive game-tree scoring for positions no rule covers

use crate::{
    board::{Board, Player},
    lines::{self, Outcome},
};

/// Score a position by exhaustive search: +1 when the engine can force a
/// win, -1 when the opponent can, 0 for a tie.
///
/// Terminal boards score the same regardless of whose turn it is. Interior
/// nodes try every empty cell on a private copy of the board and back the
/// results up, maximizing on the engine's turns and minimizing on the
/// opponent's. The tree left once the rule set has passed is small enough
/// that neither pruning nor a transposition table pays for itself.
pub fn score(board: &Board, to_move: Player) -> i8 {
    match lines::detect(board) {
        Outcome::Win { player, .. } => {
            if player == Player::ENGINE {
                1
            } else {
                -1
            }
        }
        Outcome::Tie => 0,
        Outcome::InProgress => {
            let maximizing = to_move == Player::ENGINE;
            let mut best = if maximizing { i8::MIN } else { i8::MAX };
            for pos in board.empty_positions() {
                let mut child = *board;
                child.cells[pos] = to_move.to_cell();
                let value = score(&child, to_move.opponent());
                best = if maximizing {
                    best.max(value)
                } else {
                    best.min(value)
                };
            }
            best
        }
    }
}
