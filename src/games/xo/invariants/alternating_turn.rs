//! Alternating turn invariant: Player 1, Player 2, Player 1, ...

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: Players alternate turns, starting with Player 1.
///
/// While the game is in progress the player to move is the one after the
/// last mover. Once the game has ended the current player stays on the
/// last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.player != Player::One
        {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        let expected = match history.last() {
            None => Player::One,
            Some(last) if game.phase().is_terminal() => last.player,
            Some(last) => last.player.opponent(),
        };

        game.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (Player 1, Player 2, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::xo::{Move, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameEngine::new(3)));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut game = GameEngine::new(3);
        game.turn(Position::new(0, 0)).unwrap();
        game.turn(Position::new(1, 1)).unwrap();
        game.turn(Position::new(2, 2)).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_win() {
        let mut game = GameEngine::new(3);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.turn(Position::new(row, col)).unwrap();
        }
        assert!(game.phase().is_terminal());
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_repeated_player_violates() {
        let mut game = GameEngine::new(3);
        game.turn(Position::new(0, 0)).unwrap();
        game.history.push(Move::new(Player::One, Position::new(2, 2)));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
