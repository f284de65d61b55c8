//! Monotonic board invariant: cells never change once claimed.

use super::super::{Board, GameEngine};
use super::Invariant;

/// Invariant: Claimed cells are monotonic (never overwritten).
///
/// Replaying the move history onto a fresh board must succeed for every
/// move and reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(game: &GameEngine) -> bool {
        let mut reconstructed = Board::new(game.board().size());

        for mov in game.history() {
            if reconstructed.claim(mov.position, mov.player).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Claimed cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::xo::{Move, Player, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameEngine::new(3)));
    }

    #[test]
    fn test_moves_hold() {
        let mut game = GameEngine::new(4);
        for (row, col) in [(0, 0), (3, 3), (2, 1), (1, 2)] {
            game.turn(Position::new(row, col)).unwrap();
        }
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwrite_in_history_violates() {
        let mut game = GameEngine::new(3);
        game.turn(Position::new(1, 1)).unwrap();

        // A second claim of the same cell can only come from an overwrite.
        game.history.push(Move::new(Player::Two, Position::new(1, 1)));

        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
