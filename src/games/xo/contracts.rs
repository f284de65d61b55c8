//! Contract-based validation for turns.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::game::GameEngine;
use super::invariants::{EngineInvariants, InvariantSet};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Turn Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must still be in progress.
pub struct GameInProgress;

impl GameInProgress {
    /// Rejects any move once the game is won or drawn.
    pub fn check(game: &GameEngine) -> Result<(), MoveError> {
        if game.phase().is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The target cell must exist and be unclaimed.
pub struct CellIsUnclaimed;

impl CellIsUnclaimed {
    /// Rejects off-board and already claimed cells.
    pub fn check(mov: &Move, game: &GameEngine) -> Result<(), MoveError> {
        match game.board().get(mov.position) {
            None => Err(MoveError::OutOfBounds(mov.position)),
            Some(owner) if !owner.is_unclaimed() => Err(MoveError::CellClaimed(mov.position)),
            Some(_) => Ok(()),
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the player who is not on turn.
    pub fn check(mov: &Move, game: &GameEngine) -> Result<(), MoveError> {
        if mov.player != game.current_player() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for a legal turn.
pub struct LegalTurn;

impl LegalTurn {
    /// Validates all preconditions for a move, phase first.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameEngine) -> Result<(), MoveError> {
        GameInProgress::check(game)?;
        CellIsUnclaimed::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Turn Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for turns.
///
/// Preconditions:
/// - Game in progress
/// - Cell on the board and unclaimed
/// - Player on turn
///
/// Postconditions:
/// - Board remains monotonic
/// - Players still alternate
/// - History remains consistent with board
pub struct TurnContract;

impl Contract<GameEngine, Move> for TurnContract {
    fn pre(game: &GameEngine, action: &Move) -> Result<(), MoveError> {
        LegalTurn::check(action, game)
    }

    fn post(_before: &GameEngine, after: &GameEngine) -> Result<(), MoveError> {
        EngineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Turn postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
