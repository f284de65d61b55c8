//! Strictly XO library - type-safe N×N tic-tac-toe
//!
//! Players alternately claim cells on an N×N grid; the first to own a
//! run of K cells along a row, column, or diagonal wins. K is 3 on the
//! minimum 3×3 board and 4 on anything larger.
//!
//! # Architecture
//!
//! - **Board**: cell ownership and line extraction
//! - **GameEngine**: turn order, win/draw detection, lifecycle
//! - **Session**: boundary to a presentation layer
//!
//! # Example
//!
//! ```
//! use strictly_xo::{GameEngine, Phase, Player, Position};
//!
//! let mut game = GameEngine::new(3);
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     game.turn(Position::new(row, col)).unwrap();
//! }
//! assert_eq!(game.phase(), Phase::Won(Player::One));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Presentation boundary
pub use session::{Presenter, Session};

// Crate-level exports - Game types
pub use games::xo::{
    Board, BoardSnapshot, CellView, Direction, GameEngine, GameOutcome, Line, MAX_SIZE, MIN_SIZE, Marks,
    Move, MoveError, Owner, Phase, Player, Position, Run, WinningRun, win_length,
};

// Crate-level exports - Rules, contracts, invariants
pub use games::xo::{CellIsUnclaimed, Contract, GameInProgress, LegalTurn, PlayersTurn, TurnContract};
pub use games::xo::{invariants, rules};
