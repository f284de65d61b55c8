//! Turn orchestration and game lifecycle.

use super::action::{Move, MoveError};
use super::board::Board;
use super::contracts::{Contract, TurnContract};
use super::phases::{GameOutcome, Phase};
use super::rules::{self, WinningRun};
use super::snapshot::BoardSnapshot;
use super::types::{Player, Position};
use tracing::{debug, info, instrument, warn};

/// Grid tic-tac-toe game engine.
///
/// Owns the board, the player on turn, and the lifecycle phase. Every
/// rejected request leaves the engine exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(super) board: Board,
    current_player: Player,
    win_length: usize,
    phase: Phase,
    pub(super) history: Vec<Move>,
    winning_run: Option<WinningRun>,
}

impl GameEngine {
    /// Creates a game in progress on a fresh board of side `size`.
    ///
    /// Sizes below the minimum are clamped up to it.
    #[instrument]
    pub fn new(size: usize) -> Self {
        let board = Board::new(size);
        let win_length = rules::win_length(board.size());
        info!(size = board.size(), win_length, "New game");
        Self {
            board,
            current_player: Player::One,
            win_length,
            phase: Phase::InProgress,
            history: Vec::new(),
            winning_run: None,
        }
    }

    /// Starts a new game at `size`, discarding the current one.
    ///
    /// Legal from any phase.
    #[instrument(skip(self))]
    pub fn start(&mut self, size: usize) {
        *self = Self::new(size);
    }

    /// Starts a new game at the last-used size.
    pub fn restart(&mut self) {
        self.start(self.size());
    }

    /// Claims `pos` for the player on turn.
    ///
    /// Returns the phase after the turn.
    ///
    /// # Errors
    ///
    /// Rejects the turn without touching any state when the game is over,
    /// the cell is off the board, or the cell is already claimed.
    pub fn turn(&mut self, pos: Position) -> Result<Phase, MoveError> {
        self.play(Move::new(self.current_player, pos))
    }

    /// Applies a fully specified move.
    ///
    /// Like [`GameEngine::turn`], but also rejects a move by the player
    /// who is not on turn.
    #[instrument(skip(self))]
    pub fn play(&mut self, mov: Move) -> Result<Phase, MoveError> {
        if let Err(e) = TurnContract::pre(self, &mov) {
            warn!(error = %e, "Turn rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.claim(mov.position, mov.player)?;
        self.history.push(mov);
        self.update_phase(mov.position);

        #[cfg(debug_assertions)]
        if let Err(e) = TurnContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        Ok(self.phase)
    }

    /// Evaluates win, then draw, then hands the turn over.
    ///
    /// Only lines through the cell just claimed can hold a new run.
    fn update_phase(&mut self, claimed: Position) {
        if let Some(run) = rules::find_winning_run_through(&self.board, claimed, self.win_length) {
            info!(winner = %run.player, direction = %run.direction, "Game won");
            self.phase = Phase::Won(run.player);
            self.winning_run = Some(run);
        } else if rules::is_full(&self.board) {
            info!("Game drawn");
            self.phase = Phase::Drawn;
        } else {
            self.current_player = self.current_player.opponent();
            debug!(next = %self.current_player, "Turn passes");
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side length of the current board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Returns the player on turn (the winner once the game is won).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Run length needed to win this game.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Terminal outcome, once the game has ended.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.phase.outcome()
    }

    /// Moves played in the current game.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Cells of the winning run, once the game is won.
    pub fn winning_run(&self) -> Option<&WinningRun> {
        self.winning_run.as_ref()
    }

    /// Read-only view of the game for presentation.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from(self)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(super::board::MIN_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::xo::{MAX_SIZE, Owner};

    fn play_all(game: &mut GameEngine, cells: &[(usize, usize)]) -> Phase {
        let mut phase = game.phase();
        for (row, col) in cells {
            phase = game.turn(Position::new(*row, *col)).unwrap();
        }
        phase
    }

    #[test]
    fn test_initial_state() {
        let game = GameEngine::new(3);
        assert_eq!(game.phase(), Phase::InProgress);
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.win_length(), 3);
        assert!(game.history().is_empty());
        assert!(game.winning_run().is_none());
    }

    #[test]
    fn test_turn_toggles_player() {
        let mut game = GameEngine::new(3);
        assert_eq!(game.turn(Position::new(0, 0)), Ok(Phase::InProgress));
        assert_eq!(game.current_player(), Player::Two);
        assert_eq!(
            game.board().get(Position::new(0, 0)),
            Some(Owner::Claimed(Player::One))
        );
    }

    #[test]
    fn test_rejected_turn_changes_nothing() {
        let mut game = GameEngine::new(3);
        game.turn(Position::new(1, 1)).unwrap();
        let before = game.clone();

        assert_eq!(
            game.turn(Position::new(1, 1)),
            Err(MoveError::CellClaimed(Position::new(1, 1)))
        );
        assert_eq!(
            game.turn(Position::new(9, 9)),
            Err(MoveError::OutOfBounds(Position::new(9, 9)))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_play_rejects_wrong_player() {
        let mut game = GameEngine::new(3);
        let mov = Move::new(Player::Two, Position::new(0, 0));
        assert_eq!(game.play(mov), Err(MoveError::WrongPlayer(Player::Two)));
        assert_eq!(game.board().claimed_count(), 0);
    }

    #[test]
    fn test_win_keeps_winner_on_turn() {
        let mut game = GameEngine::new(3);
        let phase = play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(phase, Phase::Won(Player::One));
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.outcome(), Some(GameOutcome::Won { player: Player::One }));

        let run = game.winning_run().unwrap();
        assert_eq!(
            run.cells,
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]
        );
    }

    #[test]
    fn test_winning_last_cell_is_not_draw() {
        // Final move (2, 0) fills the board and completes column 0.
        let mut game = GameEngine::new(3);
        let phase = play_all(
            &mut game,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 2), (2, 0)],
        );
        assert!(rules::is_full(game.board()));
        assert_eq!(phase, Phase::Won(Player::One));
    }

    #[test]
    fn test_start_resets_everything() {
        let mut game = GameEngine::new(3);
        play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        game.start(6);
        assert_eq!(game.size(), 6);
        assert_eq!(game.win_length(), 4);
        assert_eq!(game.phase(), Phase::InProgress);
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.board().claimed_count(), 0);
        assert!(game.history().is_empty());
        assert!(game.winning_run().is_none());
    }

    #[test]
    fn test_huge_size_is_clamped_to_maximum() {
        let mut game = GameEngine::new(1usize << 33);
        assert_eq!(game.size(), MAX_SIZE);
        assert_eq!(game.win_length(), 4);

        game.start(usize::MAX / 2);
        assert_eq!(game.size(), MAX_SIZE);
        assert_eq!(game.turn(Position::new(MAX_SIZE - 1, 0)), Ok(Phase::InProgress));
    }

    #[test]
    fn test_restart_keeps_size() {
        let mut game = GameEngine::new(5);
        game.turn(Position::new(2, 2)).unwrap();
        game.restart();
        assert_eq!(game.size(), 5);
        assert_eq!(game.board().claimed_count(), 0);
    }
}
