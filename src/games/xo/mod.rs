//! Grid tic-tac-toe: N×N board, K-in-a-row wins.

mod action;
mod board;
mod contracts;
mod game;
pub mod invariants;
mod phases;
pub mod rules;
mod snapshot;
mod types;

pub use action::{Move, MoveError};
pub use board::{Board, Direction, Line, MAX_SIZE, MIN_SIZE};
pub use contracts::{CellIsUnclaimed, Contract, GameInProgress, LegalTurn, PlayersTurn, TurnContract};
pub use game::GameEngine;
pub use phases::{GameOutcome, Phase};
pub use rules::{Run, WinningRun, win_length};
pub use snapshot::{BoardSnapshot, CellView, Marks};
pub use types::{Owner, Player, Position};
