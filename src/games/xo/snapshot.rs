//! Read-only views handed to the presentation layer.

use super::game::GameEngine;
use super::phases::Phase;
use super::rules::WinningRun;
use super::types::{Owner, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One cell as seen by a presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Where the cell sits.
    pub position: Position,
    /// Who owns it.
    pub owner: Owner,
}

/// Snapshot of a game after a mutating call.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Side length of the board.
    size: usize,
    /// Run length needed to win.
    win_length: usize,
    /// Player on turn (or the winner).
    current_player: Player,
    /// Lifecycle phase.
    phase: Phase,
    /// Every cell, row-major.
    cells: Vec<CellView>,
    /// The winning run, once there is one.
    winning_run: Option<WinningRun>,
}

impl From<&GameEngine> for BoardSnapshot {
    fn from(game: &GameEngine) -> Self {
        Self {
            size: game.size(),
            win_length: game.win_length(),
            current_player: game.current_player(),
            phase: game.phase(),
            cells: game
                .board()
                .cells()
                .map(|(position, owner)| CellView { position, owner })
                .collect(),
            winning_run: game.winning_run().cloned(),
        }
    }
}

/// Symbols used to draw cells as text.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct Marks {
    /// Symbol for Player 1.
    #[new(into)]
    pub player_one: String,
    /// Symbol for Player 2.
    #[new(into)]
    pub player_two: String,
    /// Symbol for an unclaimed cell.
    #[new(into)]
    pub empty: String,
}

impl Default for Marks {
    fn default() -> Self {
        Self::new("X", "O", ".")
    }
}

impl Marks {
    /// Symbol for a cell owner.
    pub fn symbol(&self, owner: Owner) -> &str {
        match owner {
            Owner::Unclaimed => &self.empty,
            Owner::Claimed(Player::One) => &self.player_one,
            Owner::Claimed(Player::Two) => &self.player_two,
        }
    }
}

impl BoardSnapshot {
    /// Owner of the cell at `pos`, if it is on the board.
    pub fn owner(&self, pos: Position) -> Option<Owner> {
        if pos.row >= self.size || pos.col >= self.size {
            return None;
        }
        pos.row
            .checked_mul(self.size)
            .and_then(|idx| idx.checked_add(pos.col))
            .and_then(|idx| self.cells.get(idx))
            .map(|cell| cell.owner)
    }

    /// Formats the grid as text with column and row indices.
    pub fn render(&self, marks: &Marks) -> String {
        let width = marks
            .player_one
            .chars()
            .count()
            .max(marks.player_two.chars().count())
            .max(marks.empty.chars().count())
            .max((self.size.saturating_sub(1)).to_string().len());

        let row_label = self.size.saturating_sub(1).to_string().len();
        let mut result = format!("{:row_label$} ", "");
        for col in 0..self.size {
            result.push_str(&format!(" {:>width$}", col));
        }
        result.push('\n');

        // A deserialized snapshot may carry a zero size.
        for row in self.cells.chunks(self.size.max(1)) {
            if let Some(first) = row.first() {
                result.push_str(&format!("{:>row_label$} ", first.position.row));
            }
            for cell in row {
                result.push_str(&format!(" {:>width$}", marks.symbol(cell.owner)));
            }
            result.push('\n');
        }
        result
    }
}
