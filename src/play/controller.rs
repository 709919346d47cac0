//! Turn alternation as a two-state machine.
//!
//! ```text
//! InProgress { current } --legal move, not over--> InProgress { current.other() }
//! InProgress { current } --legal move, over------> Terminal { winner: current }
//! InProgress { current } --illegal move----------> InProgress { current }
//! ```
//!
//! `Terminal` is absorbing. The mover who produces the terminal layout wins
//! (normal play).

use tracing::{debug, info};

use super::io::{BoardRenderer, MoveInput, ResultAnnouncer};
use crate::core::{GameError, GameState, Move, MoveError, PlayerId};

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// Waiting for `current` to make a legal move.
    InProgress { current: PlayerId },
    /// `winner` made the final move.
    Terminal { winner: PlayerId },
}

impl TurnPhase {
    /// The winner, if the game has ended.
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            TurnPhase::Terminal { winner } => Some(winner),
            TurnPhase::InProgress { .. } => None,
        }
    }
}

/// Drives a game from its first move to a winner.
///
/// Owns the `GameState` exclusively; the output collaborator only ever
/// sees a borrowed view of the positions.
pub struct TurnController<O> {
    state: GameState,
    phase: TurnPhase,
    output: O,
}

impl<O: BoardRenderer + ResultAnnouncer> TurnController<O> {
    /// Start a game on `state` with player 1 to move.
    pub fn new(state: GameState, output: O) -> Self {
        Self {
            state,
            phase: TurnPhase::InProgress {
                current: PlayerId::FIRST,
            },
            output,
        }
    }

    /// The current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// The output collaborator.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Consume the controller, returning the final state and the output.
    pub fn into_parts(self) -> (GameState, O) {
        (self.state, self.output)
    }

    /// Apply one move for the player whose turn it is.
    ///
    /// On error the phase and state are untouched and the same player is
    /// still to move. On success the new board is rendered and the phase
    /// advances.
    pub fn play_turn(&mut self, mv: Move) -> Result<TurnPhase, MoveError> {
        let TurnPhase::InProgress { current } = self.phase else {
            return Err(MoveError::GameOver);
        };

        self.state.apply(mv)?;
        self.output
            .render(self.state.positions(), self.state.board_length());

        self.phase = if self.state.is_over() {
            TurnPhase::Terminal { winner: current }
        } else {
            TurnPhase::InProgress {
                current: current.other(),
            }
        };

        Ok(self.phase)
    }

    /// Play until a winner emerges.
    ///
    /// Renders the starting board, then asks `input` for moves until one
    /// produces the terminal layout. Illegal moves are reported and the
    /// same player is asked again.
    ///
    /// A game that has already ended is not replayed: `run` returns
    /// [`MoveError::GameOver`] without rendering or announcing again.
    pub fn run(&mut self, mut input: impl MoveInput) -> Result<PlayerId, GameError> {
        if let TurnPhase::Terminal { .. } = self.phase {
            return Err(MoveError::GameOver.into());
        }

        self.output
            .render(self.state.positions(), self.state.board_length());

        loop {
            let current = match self.phase {
                TurnPhase::InProgress { current } => current,
                TurnPhase::Terminal { winner } => {
                    info!(%winner, "game over");
                    self.output.announce_winner(winner);
                    return Ok(winner);
                }
            };

            let mv = input.next_move(current).ok_or(GameError::InputClosed)?;
            debug!(player = %current, %mv, "move requested");

            if let Err(err) = self.play_turn(mv) {
                self.output.report_illegal_move(current, &err);
            }
        }
    }
}
