//! Game configuration.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Largest extra gap drawn between neighbouring coins at setup.
pub const DEFAULT_MAX_GAP: u32 = 6;

/// Coin count used when none is given.
pub const DEFAULT_COIN_COUNT: usize = 5;

/// Parameters fixed for the lifetime of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of coins on the strip (must be >= 1).
    pub coin_count: usize,

    /// Largest extra gap drawn before each coin (must be below `u32::MAX`).
    /// Coins start between 1 and `max_gap + 1` spaces apart.
    pub max_gap: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            coin_count: DEFAULT_COIN_COUNT,
            max_gap: DEFAULT_MAX_GAP,
        }
    }
}

impl GameConfig {
    /// Create a config with the given coin count and the default gap.
    #[must_use]
    pub fn new(coin_count: usize) -> Self {
        Self {
            coin_count,
            ..Self::default()
        }
    }

    /// Set a custom maximum gap.
    #[must_use]
    pub fn with_max_gap(mut self, max_gap: u32) -> Self {
        self.max_gap = max_gap;
        self
    }

    /// Check the config describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.coin_count < 1 {
            return Err(ConfigError::InvalidCoinCount(self.coin_count));
        }
        if self.max_gap == u32::MAX {
            return Err(ConfigError::MaxGapTooLarge(self.max_gap));
        }
        Ok(())
    }
}
