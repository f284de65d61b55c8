//! Game rules for grid tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to the rules. Rules are separated from board
//! storage to enable composition into contract systems.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Run, WinningRun, check_winner, find_winning_run, find_winning_run_through, scan_line, win_length};
