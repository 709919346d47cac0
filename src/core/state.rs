//! Game state: the coin strip and the game-over flag.
//!
//! ## Invariants
//!
//! Hold after construction and after every successful `apply`:
//! - Positions are strictly increasing
//! - The first coin is at position 1 or above (the origin is never occupied)
//! - The board length is the last coin's position
//!
//! ## Game-over flag
//!
//! Starts `false` and is re-evaluated only after a committed move, so the
//! player who produces the terminal layout is always the one who moved.
//! Once set it is never cleared.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::action::Move;
use super::config::GameConfig;
use super::error::{ConfigError, MoveError};
use super::rng::RandomSource;
use crate::rules::{board, terminal, validator};

/// The coin strip and whether the game has ended.
///
/// Deserialization goes through the same checks as
/// [`GameState::from_positions`], and a snapshot may only be marked over
/// when its layout is terminal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateSnapshot")]
pub struct GameState {
    positions: Vec<i64>,
    over: bool,
}

/// Unchecked wire form of a `GameState`.
#[derive(Deserialize)]
struct StateSnapshot {
    positions: Vec<i64>,
    over: bool,
}

impl TryFrom<StateSnapshot> for GameState {
    type Error = ConfigError;

    fn try_from(snapshot: StateSnapshot) -> Result<Self, Self::Error> {
        let mut state = Self::from_positions(snapshot.positions)?;
        if snapshot.over && !terminal::is_terminal(&state.positions) {
            return Err(ConfigError::OverOnLiveLayout);
        }
        state.over = snapshot.over;
        Ok(state)
    }
}

impl GameState {
    /// Create a state from an explicit layout.
    ///
    /// Fails if the strip is empty, starts at or below the origin, or is
    /// not strictly increasing.
    pub fn from_positions(positions: Vec<i64>) -> Result<Self, ConfigError> {
        if positions.is_empty() {
            return Err(ConfigError::EmptyStrip);
        }

        let mut minimum = 0;
        for (index, &position) in positions.iter().enumerate() {
            if position <= minimum {
                return Err(ConfigError::InvalidLayout {
                    index,
                    position,
                    minimum,
                });
            }
            minimum = position;
        }

        Ok(Self {
            positions,
            over: false,
        })
    }

    /// Create a state with a randomly generated layout.
    pub fn generate(config: &GameConfig, rng: &mut impl RandomSource) -> Result<Self, ConfigError> {
        config.validate()?;
        let positions = board::generate_board(config.coin_count, config.max_gap, rng)?;

        Ok(Self {
            positions,
            over: false,
        })
    }

    /// Current coin positions, nearest the origin first.
    #[must_use]
    pub fn positions(&self) -> &[i64] {
        &self.positions
    }

    /// Number of coins on the strip.
    #[must_use]
    pub fn coin_count(&self) -> usize {
        self.positions.len()
    }

    /// Length of the strip, i.e. the last coin's position.
    #[must_use]
    pub fn board_length(&self) -> i64 {
        self.positions.last().copied().unwrap_or(0)
    }

    /// Whether a move has produced the terminal layout.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Every legal move from the current layout.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        validator::legal_moves(&self.positions)
    }

    /// Validate and commit a move.
    ///
    /// On error nothing changes. On success the coin is moved and the
    /// game-over flag re-evaluated.
    pub fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        let destination = match validator::check_move(&self.positions, mv) {
            Ok(destination) => destination,
            Err(err) => {
                debug!(%mv, %err, "rejected move");
                return Err(err);
            }
        };

        // check_move has already bounded the index.
        self.positions[mv.coin as usize] = destination;

        if !self.over && terminal::is_terminal(&self.positions) {
            self.over = true;
            info!(positions = ?self.positions, "terminal layout reached");
        }

        debug!(%mv, destination, over = self.over, "applied move");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::GameRng;

    fn strip(positions: &[i64]) -> GameState {
        GameState::from_positions(positions.to_vec()).unwrap()
    }

    #[test]
    fn test_from_positions_accepts_valid_layout() {
        let state = strip(&[3, 5, 9]);
        assert_eq!(state.positions(), &[3, 5, 9]);
        assert_eq!(state.coin_count(), 3);
        assert_eq!(state.board_length(), 9);
        assert!(!state.is_over());
    }

    #[test]
    fn test_from_positions_rejects_bad_layouts() {
        assert_eq!(
            GameState::from_positions(vec![]),
            Err(ConfigError::EmptyStrip)
        );
        assert_eq!(
            GameState::from_positions(vec![0, 2]),
            Err(ConfigError::InvalidLayout {
                index: 0,
                position: 0,
                minimum: 0,
            })
        );
        assert_eq!(
            GameState::from_positions(vec![2, 2]),
            Err(ConfigError::InvalidLayout {
                index: 1,
                position: 2,
                minimum: 2,
            })
        );
    }

    #[test]
    fn test_generate_uses_config() {
        let config = GameConfig::new(6).with_max_gap(3);
        let state = GameState::generate(&config, &mut GameRng::new(42)).unwrap();

        assert_eq!(state.coin_count(), 6);
        assert!(!state.is_over());
        assert!(state.positions().windows(2).all(|w| (1..=4).contains(&(w[1] - w[0]))));
    }

    #[test]
    fn test_generate_rejects_zero_coins() {
        let result = GameState::generate(&GameConfig::new(0), &mut GameRng::new(1));
        assert_eq!(result, Err(ConfigError::InvalidCoinCount(0)));
    }

    #[test]
    fn test_packed_start_is_not_over() {
        let state = GameState::generate(&GameConfig::new(3).with_max_gap(0), &mut GameRng::new(1))
            .unwrap();
        assert_eq!(state.positions(), &[1, 2, 3]);
        assert!(!state.is_over());
    }

    #[test]
    fn test_illegal_move_leaves_state_unchanged() {
        let mut state = strip(&[3, 5]);
        let before = state.clone();

        let err = state.apply(Move::new(1, 2)).unwrap_err();
        assert!(matches!(err, MoveError::IllegalDestination { .. }));
        assert_eq!(state, before);
    }

    #[test]
    fn test_scenario_to_terminal() {
        let mut state = strip(&[3, 5]);

        state.apply(Move::new(0, 2)).unwrap();
        assert_eq!(state.positions(), &[1, 5]);
        assert!(!state.is_over());

        state.apply(Move::new(1, 3)).unwrap();
        assert_eq!(state.positions(), &[1, 2]);
        assert!(state.is_over());
        assert_eq!(state.board_length(), 2);
    }

    #[test]
    fn test_board_length_tracks_last_coin() {
        let mut state = strip(&[2, 4, 10]);
        state.apply(Move::new(2, 5)).unwrap();
        assert_eq!(state.board_length(), 5);
    }

    #[test]
    fn test_zero_move_is_noop() {
        let mut state = strip(&[2, 6]);
        state.apply(Move::new(1, 0)).unwrap();
        assert_eq!(state.positions(), &[2, 6]);
        assert!(!state.is_over());
    }

    #[test]
    fn test_pass_on_packed_start_ends_game() {
        let mut state = strip(&[1, 2, 3]);
        state.apply(Move::new(0, 0)).unwrap();
        assert!(state.is_over());
    }

    #[test]
    fn test_single_coin_never_over() {
        let mut state = strip(&[3]);
        state.apply(Move::new(0, 2)).unwrap();
        assert_eq!(state.positions(), &[1]);
        assert!(!state.is_over());
    }

    #[test]
    fn test_state_serialization() {
        let mut state = strip(&[1, 4]);
        state.apply(Move::new(1, 2)).unwrap();

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
        assert!(deserialized.is_over());
    }

    #[test]
    fn test_deserialization_rejects_bad_layouts() {
        let decreasing = serde_json::from_str::<GameState>(r#"{"positions":[5,3],"over":false}"#);
        assert!(decreasing.is_err());

        let below_origin = serde_json::from_str::<GameState>(r#"{"positions":[-4],"over":true}"#);
        assert!(below_origin.is_err());

        let empty = serde_json::from_str::<GameState>(r#"{"positions":[],"over":false}"#);
        assert!(empty.is_err());
    }

    #[test]
    fn test_deserialization_rejects_over_on_live_layout() {
        let err = serde_json::from_str::<GameState>(r#"{"positions":[1,3],"over":true}"#)
            .unwrap_err();
        assert!(err.to_string().contains("not terminal"));

        // A packed layout that nobody has moved into yet is still live.
        let state: GameState =
            serde_json::from_str(r#"{"positions":[1,2],"over":false}"#).unwrap();
        assert!(!state.is_over());
    }

    #[test]
    fn test_deserialized_state_allows_zero_moves() {
        let mut state: GameState =
            serde_json::from_str(r#"{"positions":[3,5],"over":false}"#).unwrap();
        for coin in 0..2 {
            state.apply(Move::new(coin, 0)).unwrap();
        }
        assert_eq!(state.positions(), &[3, 5]);
    }
}
