//! Turn-level engine surface consumed by a transport layer

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Player},
    error::Result,
    lines::{self, Outcome},
    policy,
};

/// The engine's answer to a submitted board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Board after the engine's reply, or the input unchanged when the game
    /// was already over
    pub board: Board,
    /// Outcome of `board`
    pub outcome: Outcome,
    /// Cell the engine claimed, when it moved
    pub reply: Option<usize>,
}

/// Answer the remote player's latest move.
///
/// A board that is already terminal comes back unchanged with its outcome
/// and no reply. Otherwise the engine claims a cell on a copy of the board
/// and the returned outcome reflects the updated position.
///
/// # Errors
///
/// Propagates the move-selection errors from [`policy::select_move`]; the
/// input board is never modified.
pub fn respond<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Turn> {
    let outcome = lines::detect(board);
    if outcome.is_terminal() {
        return Ok(Turn {
            board: *board,
            outcome,
            reply: None,
        });
    }

    let position = policy::select_move(board, rng)?;
    let replied = board.with_move(position, Player::ENGINE)?;
    Ok(Turn {
        board: replied,
        outcome: lines::detect(&replied),
        reply: Some(position),
    })
}

/// [`respond`] with the thread-local generator, for callers that hold no
/// RNG of their own.
pub fn respond_default(board: &Board) -> Result<Turn> {
    respond(board, &mut rand::rng())
}
