//! # silver-dollar
//!
//! Game-state engine for the Silver Dollar coin-strip game.
//!
//! Coins sit on a strip of integer positions. On each turn a player slides
//! one coin toward the origin, but never onto or past the coin behind it.
//! The player whose move packs the coins onto `1, 2, ..., n` wins.
//!
//! ## Modules
//!
//! - `core`: moves, players, state, RNG, configuration, errors
//! - `rules`: board generation, move validation, terminal detection
//! - `play`: the turn state machine and its collaborator traits
//! - `console`: stdin/stdout collaborators used by the binary
//!
//! ## Example
//!
//! ```
//! use silver_dollar::{GameState, Move};
//!
//! let mut state = GameState::from_positions(vec![3, 5]).unwrap();
//!
//! assert!(state.apply(Move::new(1, 2)).is_err());
//! state.apply(Move::new(0, 2)).unwrap();
//! state.apply(Move::new(1, 3)).unwrap();
//!
//! assert_eq!(state.positions(), &[1, 2]);
//! assert!(state.is_over());
//! ```

pub mod console;
pub mod core;
pub mod play;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameError, GameRng, GameState, Move, MoveError, PlayerId,
    RandomSource, DEFAULT_MAX_GAP,
};

pub use crate::rules::{check_move, generate_board, is_legal, is_terminal};

pub use crate::play::{BoardRenderer, MoveInput, ResultAnnouncer, TurnController, TurnPhase};
