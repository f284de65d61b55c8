//! First-class action types for grid tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::types::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move: a player claiming the cell at a position.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new, derive_more::Display,
)]
#[display("{player} -> {position}")]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell being claimed.
    pub position: Position,
}

/// Reasons a turn request is declined.
///
/// A rejected turn never mutates the game; callers may treat it as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The cell is already owned by a player.
    #[display("Cell {} is already claimed", _0)]
    CellClaimed(#[error(not(source))] Position),

    /// The coordinate lies outside the board.
    #[display("Cell {} is outside the board", _0)]
    OutOfBounds(#[error(not(source))] Position),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(#[error(not(source))] Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mov = Move::new(Player::One, Position::new(2, 1));
        assert_eq!(mov.to_string(), "Player 1 -> (2, 1)");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::CellClaimed(Position::new(0, 0)).to_string(),
            "Cell (0, 0) is already claimed"
        );
        assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
    }
}
