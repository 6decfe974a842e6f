//! Move selection: rule set first, exhaustive search as fallback

use rand::{Rng, seq::IndexedRandom};

use crate::{
    board::{Board, Player},
    error::{Error, Result},
    heuristics, lines, minimax,
};

/// Every cell the engine considers equally good in this position.
///
/// The heuristic rules answer first. When none match, every empty cell is
/// scored by [`minimax::score`] with the engine's move applied and the
/// opponent to reply, and the argmax set is returned.
///
/// # Errors
///
/// Returns [`Error::GameOver`] when the board is already decided or tied,
/// [`Error::NoValidMoves`] when no cell is empty, and
/// [`Error::EmptyCandidateSet`] if the scoring pass somehow yields nothing
/// (an internal invariant violation).
pub fn candidate_moves(board: &Board) -> Result<Vec<usize>> {
    if lines::detect(board).is_terminal() {
        return Err(Error::GameOver);
    }
    if board.empty_positions().is_empty() {
        return Err(Error::NoValidMoves);
    }

    if let Some(candidates) = heuristics::plan(board) {
        return Ok(candidates);
    }

    let mut best = i8::MIN;
    let mut best_moves: Vec<usize> = Vec::new();
    for pos in board.empty_positions() {
        let mut child = *board;
        child.cells[pos] = Player::ENGINE.to_cell();
        let value = minimax::score(&child, Player::ENGINE.opponent());
        if value > best {
            best = value;
            best_moves.clear();
            best_moves.push(pos);
        } else if value == best {
            best_moves.push(pos);
        }
    }

    if best_moves.is_empty() {
        return Err(Error::EmptyCandidateSet {
            state: board.encode(),
        });
    }
    Ok(best_moves)
}

/// Pick the engine's move: one cell chosen uniformly from the candidate
/// set, so equally good positions stay unpredictable.
pub fn select_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<usize> {
    let candidates = candidate_moves(board)?;
    candidates
        .choose(rng)
        .copied()
        .ok_or_else(|| Error::EmptyCandidateSet {
            state: board.encode(),
        })
}
