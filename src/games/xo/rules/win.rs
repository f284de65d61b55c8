//! Win detection: runs of K identical owners along any line.

use super::super::board::{Board, Direction, MIN_SIZE};
use super::super::types::{Owner, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Run length needed to win on a board of the given side length.
///
/// Three on the minimum board, four on anything larger.
pub fn win_length(size: usize) -> usize {
    if size > MIN_SIZE { 4 } else { 3 }
}

/// A maximal run of one player's cells within a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Owner of every cell in the run.
    pub player: Player,
    /// Index of the first cell of the run within the line.
    pub start: usize,
    /// Number of cells in the run.
    pub len: usize,
}

/// A winning run located on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningRun {
    /// The winner.
    pub player: Player,
    /// Orientation of the line the run lies on.
    pub direction: Direction,
    /// Cells of the run in scan order.
    pub cells: Vec<Position>,
}

/// Scans a line and returns the first maximal run of at least `win_length`.
///
/// The run counter resets on every change of owner and on every unclaimed
/// cell. Lines shorter than `win_length` are rejected without scanning.
pub fn scan_line(owners: &[Owner], win_length: usize) -> Option<Run> {
    let win_length = win_length.max(1);
    if owners.len() < win_length {
        return None;
    }

    let mut current: Option<Run> = None;
    for (idx, owner) in owners.iter().enumerate() {
        let next = owner.player();
        match current {
            Some(ref mut run) if Some(run.player) == next => run.len += 1,
            _ => {
                if let Some(run) = current.filter(|run| run.len >= win_length) {
                    return Some(run);
                }
                current = next.map(|player| Run {
                    player,
                    start: idx,
                    len: 1,
                });
            }
        }
    }

    current.filter(|run| run.len >= win_length)
}

/// Searches every row, column, and diagonal for a winning run.
#[instrument(skip(board), fields(size = board.size()))]
pub fn find_winning_run(board: &Board, win_length: usize) -> Option<WinningRun> {
    board
        .all_lines()
        .filter(|line| line.len() >= win_length)
        .find_map(|line| {
            let run = scan_line(&board.owners(&line), win_length)?;
            debug!(player = %run.player, direction = %line.direction(), len = run.len, "Winning run found");
            Some(WinningRun {
                player: run.player,
                direction: line.direction(),
                cells: line.cells()[run.start..run.start + run.len].to_vec(),
            })
        })
}

/// Searches only the four lines through `pos` for a winning run.
///
/// Equivalent to [`find_winning_run`] when the board held no winning run
/// before `pos` was claimed, which is the case after every legal turn.
#[instrument(skip(board), fields(size = board.size()))]
pub fn find_winning_run_through(
    board: &Board,
    pos: Position,
    win_length: usize,
) -> Option<WinningRun> {
    board
        .lines_through(pos)
        .into_iter()
        .filter(|line| line.len() >= win_length)
        .find_map(|line| {
            let run = scan_line(&board.owners(&line), win_length)?;
            Some(WinningRun {
                player: run.player,
                direction: line.direction(),
                cells: line.cells()[run.start..run.start + run.len].to_vec(),
            })
        })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has a run of `win_length` on any
/// line, `None` otherwise.
pub fn check_winner(board: &Board, win_length: usize) -> Option<Player> {
    find_winning_run(board, win_length).map(|run| run.player)
}
