//! Draw detection logic.

use super::super::board::Board;
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (every cell claimed).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|(_, owner)| !owner.is_unclaimed())
}

/// Checks for a draw: a full board where nobody has a winning run.
///
/// A full board that also holds a winning run is a win, never a draw.
pub fn is_draw(board: &Board, win_length: usize) -> bool {
    is_full(board) && check_winner(board, win_length).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::types::{Player, Position};
    use super::*;

    fn fill(board: &mut Board, layout: &[&str]) {
        for (row, line) in layout.iter().enumerate() {
            for (col, mark) in line.chars().enumerate() {
                let player = match mark {
                    'X' => Player::One,
                    'O' => Player::Two,
                    _ => continue,
                };
                board.claim(Position::new(row, col), player).unwrap();
            }
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(3)));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(3);
        board.claim(Position::new(1, 1), Player::One).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new(3);
        fill(&mut board, &["XOX", "OXX", "OXO"]);
        assert!(is_full(&board));
        assert!(is_draw(&board, 3));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        let mut board = Board::new(3);
        fill(&mut board, &["XXX", "OOX", "XOO"]);
        assert!(is_full(&board));
        assert!(!is_draw(&board, 3));
    }

    #[test]
    fn test_draw_on_larger_board() {
        let mut board = Board::new(4);
        fill(&mut board, &["XXOO", "OOXX", "XXOO", "OOXX"]);
        assert!(is_draw(&board, 4));
    }
}
