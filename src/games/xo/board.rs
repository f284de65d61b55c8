//! Square grid of cells with line extraction.

use super::action::MoveError;
use super::types::{Owner, Player, Position};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// Smallest board side length. Smaller requests are clamped up to this.
pub const MIN_SIZE: usize = 3;

/// Largest board side length. Larger requests are clamped down to this.
pub const MAX_SIZE: usize = 1024;

/// Orientation of a line through the grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Direction {
    /// A row, left to right.
    Horizontal,
    /// A column, top to bottom.
    Vertical,
    /// Top-left to bottom-right (↘).
    Diagonal,
    /// Bottom-left to top-right (↗).
    AntiDiagonal,
}

impl Direction {
    /// Row and column delta of one step along the line.
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (-1, 1),
        }
    }
}

/// An ordered run of cell positions considered together for win detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    direction: Direction,
    cells: Vec<Position>,
}

impl Line {
    /// Orientation of the line.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Positions along the line in scan order.
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Number of cells on the line.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Checks if the line has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// N×N grid of cells.
///
/// The side length is fixed for the lifetime of the board; a new game
/// builds a new board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Owners in row-major order.
    cells: Vec<Owner>,
}

impl Board {
    /// Creates an empty board, clamping `size` into [`MIN_SIZE`]..=[`MAX_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Self {
        let size = if size < MIN_SIZE {
            warn!(requested = size, clamped = MIN_SIZE, "Board size below minimum, clamping");
            MIN_SIZE
        } else if size > MAX_SIZE {
            warn!(requested = size, clamped = MAX_SIZE, "Board size above maximum, clamping");
            MAX_SIZE
        } else {
            size
        };
        Self {
            size,
            cells: vec![Owner::Unclaimed; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Checks if the position lies on the board.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.size + pos.col)
    }

    /// Gets the owner of the cell at `pos`, or `None` when off the board.
    pub fn get(&self, pos: Position) -> Option<Owner> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Checks if the cell at `pos` exists and is unclaimed.
    pub fn is_unclaimed(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Owner::Unclaimed))
    }

    /// Claims the cell at `pos` for `player`.
    ///
    /// # Errors
    ///
    /// Rejects off-board positions and cells that are already claimed.
    /// The board is left untouched on error.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn claim(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        let idx = self.index(pos).ok_or(MoveError::OutOfBounds(pos))?;
        if !self.cells[idx].is_unclaimed() {
            return Err(MoveError::CellClaimed(pos));
        }
        self.cells[idx] = Owner::Claimed(player);
        debug!(%pos, %player, "Cell claimed");
        Ok(())
    }

    /// Iterates all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Owner)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, owner)| (Position::new(idx / self.size, idx % self.size), *owner))
    }

    /// Number of claimed cells.
    pub fn claimed_count(&self) -> usize {
        self.cells.iter().filter(|owner| !owner.is_unclaimed()).count()
    }

    /// Every line of the given orientation.
    ///
    /// Rows and columns yield N lines of N cells. Each diagonal orientation
    /// yields the 2N−1 maximal diagonals, corners included.
    pub fn lines(&self, direction: Direction) -> Vec<Line> {
        let n = self.size;
        let starts: Vec<Position> = match direction {
            Direction::Horizontal => (0..n).map(|row| Position::new(row, 0)).collect(),
            Direction::Vertical => (0..n).map(|col| Position::new(0, col)).collect(),
            Direction::Diagonal => (0..n)
                .rev()
                .map(|row| Position::new(row, 0))
                .chain((1..n).map(|col| Position::new(0, col)))
                .collect(),
            Direction::AntiDiagonal => (0..n)
                .map(|row| Position::new(row, 0))
                .chain((1..n).map(|col| Position::new(n - 1, col)))
                .collect(),
        };

        starts
            .into_iter()
            .map(|start| Line {
                direction,
                cells: self.walk(start, direction),
            })
            .collect()
    }

    /// The maximal line of each orientation passing through `pos`.
    ///
    /// Returns no lines when `pos` is off the board.
    pub fn lines_through(&self, pos: Position) -> Vec<Line> {
        if !self.contains(pos) {
            return Vec::new();
        }
        Direction::iter()
            .map(|direction| Line {
                direction,
                cells: self.walk(self.line_start(pos, direction), direction),
            })
            .collect()
    }

    /// Every row, column, and diagonal on the board.
    pub fn all_lines(&self) -> impl Iterator<Item = Line> + '_ {
        Direction::iter().flat_map(|direction| self.lines(direction))
    }

    /// Owners along a line, in scan order.
    pub fn owners(&self, line: &Line) -> Vec<Owner> {
        line.cells.iter().filter_map(|pos| self.get(*pos)).collect()
    }

    /// Rows top to bottom, each left to right.
    pub fn rows(&self) -> Vec<Vec<Owner>> {
        self.owner_lines(Direction::Horizontal)
    }

    /// Columns left to right, each top to bottom.
    pub fn columns(&self) -> Vec<Vec<Owner>> {
        self.owner_lines(Direction::Vertical)
    }

    /// All ↘ diagonals followed by all ↗ diagonals.
    pub fn diagonals(&self) -> Vec<Vec<Owner>> {
        let mut diagonals = self.owner_lines(Direction::Diagonal);
        diagonals.extend(self.owner_lines(Direction::AntiDiagonal));
        diagonals
    }

    fn owner_lines(&self, direction: Direction) -> Vec<Vec<Owner>> {
        self.lines(direction)
            .iter()
            .map(|line| self.owners(line))
            .collect()
    }

    /// Steps backwards from `pos` to the first cell of its line.
    fn line_start(&self, pos: Position, direction: Direction) -> Position {
        let (d_row, d_col) = direction.step();
        let mut start = pos;
        while let Some(prev) = start
            .row
            .checked_add_signed(-d_row)
            .zip(start.col.checked_add_signed(-d_col))
            .map(|(row, col)| Position::new(row, col))
            .filter(|prev| self.contains(*prev))
        {
            start = prev;
        }
        start
    }

    fn walk(&self, start: Position, direction: Direction) -> Vec<Position> {
        let (d_row, d_col) = direction.step();
        let mut cells = Vec::with_capacity(self.size);
        let mut current = Some(start);
        while let Some(pos) = current.filter(|pos| self.contains(*pos)) {
            cells.push(pos);
            current = pos
                .row
                .checked_add_signed(d_row)
                .zip(pos.col.checked_add_signed(d_col))
                .map(|(row, col)| Position::new(row, col));
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_board_is_unclaimed() {
        let board = Board::new(4);
        assert_eq!(board.size(), 4);
        assert_eq!(board.cells().count(), 16);
        assert!(board.cells().all(|(_, owner)| owner == Owner::Unclaimed));
    }

    #[test]
    fn test_small_size_is_clamped() {
        assert_eq!(Board::new(0).size(), MIN_SIZE);
        assert_eq!(Board::new(2).size(), MIN_SIZE);
    }

    #[test]
    fn test_huge_size_is_clamped() {
        assert_eq!(Board::new(MAX_SIZE).size(), MAX_SIZE);
        assert_eq!(Board::new(MAX_SIZE + 1).size(), MAX_SIZE);
        assert_eq!(Board::new(1usize << 33).size(), MAX_SIZE);
        assert_eq!(Board::new(usize::MAX).size(), MAX_SIZE);
    }

    #[test]
    fn test_claim_rejects_taken_cell() {
        let mut board = Board::new(3);
        let pos = Position::new(1, 1);
        board.claim(pos, Player::One).unwrap();

        assert_eq!(board.claim(pos, Player::Two), Err(MoveError::CellClaimed(pos)));
        assert_eq!(board.get(pos), Some(Owner::Claimed(Player::One)));
        assert_eq!(board.claimed_count(), 1);
    }

    #[test]
    fn test_claim_rejects_off_board() {
        let mut board = Board::new(3);
        let pos = Position::new(3, 0);
        assert_eq!(board.claim(pos, Player::One), Err(MoveError::OutOfBounds(pos)));
        assert_eq!(board.claimed_count(), 0);
    }

    #[test]
    fn test_rows_and_columns_are_canonical() {
        let mut board = Board::new(3);
        board.claim(Position::new(0, 2), Player::One).unwrap();

        let rows = board.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][2], Owner::Claimed(Player::One));

        let columns = board.columns();
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[2][0], Owner::Claimed(Player::One));
    }

    #[test]
    fn test_diagonal_count_and_lengths() {
        for n in 3..=7 {
            let board = Board::new(n);
            let diagonals = board.diagonals();
            assert_eq!(diagonals.len(), 4 * n - 2);

            let mut lengths: Vec<usize> = diagonals.iter().map(Vec::len).collect();
            lengths.sort_unstable();
            assert_eq!(lengths.iter().filter(|len| **len == 1).count(), 4);
            assert_eq!(lengths.iter().filter(|len| **len == n).count(), 2);
        }
    }

    #[test]
    fn test_diagonals_cover_every_cell_in_both_directions() {
        let board = Board::new(5);
        for direction in [Direction::Diagonal, Direction::AntiDiagonal] {
            let covered: HashSet<Position> = board
                .lines(direction)
                .iter()
                .flat_map(|line| line.cells().to_vec())
                .collect();
            assert_eq!(covered.len(), 25);
        }
    }

    #[test]
    fn test_lines_through_match_full_lines() {
        let board = Board::new(5);
        for (pos, _) in board.cells() {
            let through = board.lines_through(pos);
            assert_eq!(through.len(), 4);
            for line in through {
                assert!(line.cells().contains(&pos));
                assert!(board.lines(line.direction()).contains(&line), "{} at {}", line.direction(), pos);
            }
        }
        assert!(board.lines_through(Position::new(5, 0)).is_empty());
    }

    #[test]
    fn test_anti_diagonal_runs_up_and_right() {
        let board = Board::new(3);
        let main = board
            .lines(Direction::AntiDiagonal)
            .into_iter()
            .find(|line| line.len() == 3)
            .unwrap();
        assert_eq!(
            main.cells(),
            &[Position::new(2, 0), Position::new(1, 1), Position::new(0, 2)]
        );
    }
}
