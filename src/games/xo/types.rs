//! Core domain types for grid tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// First player (always moves first).
    #[strum(to_string = "Player 1")]
    One,
    /// Second player.
    #[strum(to_string = "Player 2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the 1-based player number.
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// Ownership state of a single cell.
///
/// A cell only ever moves from `Unclaimed` to `Claimed`, never back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    /// Nobody has claimed the cell yet.
    #[default]
    Unclaimed,
    /// The cell belongs to a player.
    Claimed(Player),
}

impl Owner {
    /// Returns the owning player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Owner::Claimed(player) => Some(player),
            Owner::Unclaimed => None,
        }
    }

    /// Checks if the cell is still unclaimed.
    pub fn is_unclaimed(self) -> bool {
        matches!(self, Owner::Unclaimed)
    }
}

impl From<Player> for Owner {
    fn from(player: Player) -> Self {
        Owner::Claimed(player)
    }
}

/// A cell coordinate, zero-based, row-major.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_new::new,
)]
#[display("({row}, {col})")]
pub struct Position {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Position {
    /// Parses a coordinate typed as `row,col` or `row col`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());
        let row = parts.next()?.parse().ok()?;
        let col = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { row, col })
    }
}
