//! Pattern-matched rules tried before any search
//!
//! Rules apply in a fixed priority order; the first that matches supplies
//! the candidate set and later rules are never consulted. Every rule
//! returns the full set of equally acceptable cells so callers can either
//! sample one or enumerate them all.

use crate::{
    board::{Board, Player},
    lines,
};

/// Index of the center cell
pub const CENTER: usize = 4;

/// Corner cell indices
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Edge cell indices
pub const EDGES: [usize; 4] = [1, 3, 5, 7];

/// Corner pairs facing each other across the center
const OPPOSITE_CORNERS: [(usize, usize); 2] = [(0, 8), (2, 6)];

/// Edge pairs mapped to the corner completing an L between them
const EDGE_PAIR_CORNERS: [([usize; 2], usize); 4] =
    [([5, 7], 8), ([1, 3], 0), ([1, 5], 2), ([3, 7], 6)];

/// For each corner, the two corners sharing a board edge with it
const LATERAL_CORNERS: [(usize, [usize; 2]); 4] =
    [(0, [2, 6]), (2, [0, 8]), (6, [0, 8]), (8, [2, 6])];

/// Candidate moves from the first rule that matches, or `None` when no rule
/// applies and the position needs search.
pub fn plan(board: &Board) -> Option<Vec<usize>> {
    open_center(board)
        .or_else(|| corner_reply(board))
        .or_else(|| win_now(board))
        .or_else(|| block(board))
        .or_else(|| corner_fork_block(board))
        .or_else(|| third_ply_saves(board))
}

/// Take the center on the engine's first move whenever it is still free
fn open_center(board: &Board) -> Option<Vec<usize>> {
    (board.occupied_count() <= 1 && board.is_empty(CENTER)).then(|| vec![CENTER])
}

/// Answer a center opening with a corner
fn corner_reply(board: &Board) -> Option<Vec<usize>> {
    if board.occupied_count() != 1 {
        return None;
    }
    let corners: Vec<usize> = CORNERS
        .iter()
        .copied()
        .filter(|&c| board.is_empty(c))
        .collect();
    (!corners.is_empty()).then_some(corners)
}

/// Complete one of our own lines and win outright
fn win_now(board: &Board) -> Option<Vec<usize>> {
    let moves = lines::winning_moves(board, Player::ENGINE);
    (!moves.is_empty()).then_some(moves)
}

/// Deny the opponent a completed line
fn block(board: &Board) -> Option<Vec<usize>> {
    let moves = lines::winning_moves(board, Player::ENGINE.opponent());
    (!moves.is_empty()).then_some(moves)
}

/// Claim the corner of an L the opponent is building from two edges
fn corner_fork_block(board: &Board) -> Option<Vec<usize>> {
    let opponent = Player::ENGINE.opponent().to_cell();
    let corners: Vec<usize> = EDGE_PAIR_CORNERS
        .iter()
        .filter(|([a, b], corner)| {
            board.get(*a) == opponent && board.get(*b) == opponent && board.is_empty(*corner)
        })
        .map(|&(_, corner)| corner)
        .collect();
    (!corners.is_empty()).then_some(corners)
}

/// Two rescue patterns that only arise three plies in
fn third_ply_saves(board: &Board) -> Option<Vec<usize>> {
    if board.occupied_count() != 3 {
        return None;
    }

    let engine = Player::ENGINE.to_cell();
    let opponent = Player::ENGINE.opponent().to_cell();

    if board.get(CENTER) == engine {
        // Opponent pinces our center from two opposite corners: an edge
        // holds the draw, another corner does not.
        let pincered = OPPOSITE_CORNERS
            .iter()
            .any(|&(a, b)| board.get(a) == opponent && board.get(b) == opponent);
        if pincered {
            let edges: Vec<usize> = EDGES
                .iter()
                .copied()
                .filter(|&e| board.is_empty(e))
                .collect();
            return (!edges.is_empty()).then_some(edges);
        }
        return None;
    }

    if board.get(CENTER) == opponent {
        // Opponent holds center plus a corner: stepping to a lateral corner
        // keeps the far corner from becoming a double threat.
        for &(corner, laterals) in &LATERAL_CORNERS {
            if board.get(corner) == opponent {
                let open: Vec<usize> = laterals
                    .iter()
                    .copied()
                    .filter(|&c| board.is_empty(c))
                    .collect();
                return (!open.is_empty()).then_some(open);
            }
        }
    }

    None
}
