//! Lifecycle phases and terminal outcomes.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Lifecycle stage of a game.
///
/// `Won` and `Drawn` are terminal for a game instance; only a fresh
/// start returns to `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are being accepted.
    InProgress,
    /// A player completed a winning run.
    Won(Player),
    /// The board filled with no winner.
    Drawn,
}

impl Phase {
    /// Checks if the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::InProgress)
    }

    /// Terminal outcome of this phase, if it is terminal.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            Phase::InProgress => None,
            Phase::Won(player) => Some(GameOutcome::Won { player: *player }),
            Phase::Drawn => Some(GameOutcome::Drawn),
        }
    }
}

/// Event reported once when a game reaches a terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum GameOutcome {
    /// The player won.
    Won {
        /// The winner.
        player: Player,
    },
    /// Game ended in a draw.
    Drawn,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Won { player } => Some(*player),
            GameOutcome::Drawn => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameOutcome::Drawn)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Won { player } => write!(f, "Game is finished. {} won!", player),
            GameOutcome::Drawn => write!(f, "Game is finished. Draw!"),
        }
    }
}
