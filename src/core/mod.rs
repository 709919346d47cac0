//! Core engine types: players, moves, state, RNG, configuration, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::Move;
pub use config::{GameConfig, DEFAULT_COIN_COUNT, DEFAULT_MAX_GAP};
pub use error::{ConfigError, GameError, MoveError};
pub use player::PlayerId;
pub use rng::{GameRng, RandomSource};
pub use state::GameState;
