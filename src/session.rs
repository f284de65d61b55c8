//! Boundary between the game engine and a presentation layer.
//!
//! A presenter receives a snapshot after every mutating call and exactly
//! one [`GameOutcome`] per finished game. Input flows the other way as
//! cell-selection and start requests.

use crate::games::xo::{BoardSnapshot, GameEngine, GameOutcome, MoveError, Position};
use tracing::{info, instrument};

/// Rendering surface driven by a [`Session`].
pub trait Presenter {
    /// Draws the current state of the game.
    fn render(&mut self, snapshot: &BoardSnapshot);

    /// Reports a finished game.
    fn announce(&mut self, outcome: GameOutcome);
}

/// A single live game wired to a presenter.
#[derive(Debug)]
pub struct Session<P> {
    engine: GameEngine,
    presenter: P,
    auto_restart: bool,
}

impl<P: Presenter> Session<P> {
    /// Starts a game at `size` and renders it.
    #[instrument(skip(presenter))]
    pub fn new(size: usize, presenter: P) -> Self {
        let mut session = Self {
            engine: GameEngine::new(size),
            presenter,
            auto_restart: true,
        };
        session.refresh();
        session
    }

    /// Sets whether a finished game is replaced by a fresh one of the same size.
    pub fn with_auto_restart(mut self, auto_restart: bool) -> Self {
        self.auto_restart = auto_restart;
        self
    }

    /// Handles a start request; always legal.
    #[instrument(skip(self))]
    pub fn on_start_requested(&mut self, size: usize) {
        self.engine.start(size);
        self.refresh();
    }

    /// Handles a click on the cell at (`row`, `col`).
    ///
    /// Returns the outcome when this turn finished the game.
    ///
    /// # Errors
    ///
    /// Returns the engine's rejection unchanged; nothing is rendered or
    /// mutated in that case.
    #[instrument(skip(self))]
    pub fn on_cell_selected(
        &mut self,
        row: usize,
        col: usize,
    ) -> Result<Option<GameOutcome>, MoveError> {
        let phase = self.engine.turn(Position::new(row, col))?;
        self.refresh();

        let outcome = phase.outcome();
        if let Some(outcome) = outcome {
            info!(%outcome, "Game over");
            self.presenter.announce(outcome);
            if self.auto_restart {
                self.engine.restart();
                self.refresh();
            }
        }
        Ok(outcome)
    }

    /// The live engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Consumes the session, returning the presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    fn refresh(&mut self) {
        let snapshot = self.engine.snapshot();
        self.presenter.render(&snapshot);
    }
}
