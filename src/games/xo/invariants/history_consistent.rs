//! History consistency invariant: history length matches claimed cells.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: History length equals number of claimed cells.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(game: &GameEngine) -> bool {
        game.history().len() == game.board().claimed_count()
    }

    fn description() -> &'static str {
        "History length matches number of claimed cells"
    }
}
