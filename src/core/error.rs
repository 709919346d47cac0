//! Error types.
//!
//! Move errors are recoverable: the turn controller reports them and asks
//! the same player again. Configuration errors stop a game from being
//! created and never occur once one is running.

/// Errors raised while building a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("coin count must be at least 1, got {0}")]
    InvalidCoinCount(usize),

    #[error("a strip needs at least one coin")]
    EmptyStrip,

    #[error("coin {index} at position {position} must be greater than {minimum}")]
    InvalidLayout {
        index: usize,
        position: i64,
        minimum: i64,
    },

    #[error("snapshot is marked over but its layout is not terminal")]
    OverOnLiveLayout,

    #[error("max gap {0} is too large: it must be below {max}", max = u32::MAX)]
    MaxGapTooLarge(u32),
}

/// Reasons a move is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no coin {coin}: coins are numbered 0 to {}", .coin_count.saturating_sub(1))]
    InvalidCoinIndex { coin: i64, coin_count: usize },

    #[error("cannot move a coin {spaces} spaces: coins only move toward the origin")]
    NegativeSpaces { spaces: i64 },

    #[error("coin {coin} cannot land on {destination}: it must stay above {lower_bound}")]
    IllegalDestination {
        coin: usize,
        destination: i64,
        lower_bound: i64,
    },

    #[error("the game is already over")]
    GameOver,
}

/// Crate-level error.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("illegal move: {0}")]
    Move(#[from] MoveError),

    #[error("move input closed before the game ended")]
    InputClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::InvalidCoinCount(0).to_string(),
            "coin count must be at least 1, got 0"
        );
        let err = ConfigError::InvalidLayout {
            index: 1,
            position: 3,
            minimum: 3,
        };
        assert_eq!(
            err.to_string(),
            "coin 1 at position 3 must be greater than 3"
        );
    }

    #[test]
    fn test_move_error_display() {
        let err = MoveError::InvalidCoinIndex {
            coin: 5,
            coin_count: 3,
        };
        assert_eq!(err.to_string(), "no coin 5: coins are numbered 0 to 2");

        let err = MoveError::IllegalDestination {
            coin: 1,
            destination: 3,
            lower_bound: 3,
        };
        assert_eq!(
            err.to_string(),
            "coin 1 cannot land on 3: it must stay above 3"
        );
    }

    #[test]
    fn test_game_error_from() {
        let err: GameError = MoveError::NegativeSpaces { spaces: -2 }.into();
        assert!(matches!(err, GameError::Move(MoveError::NegativeSpaces { spaces: -2 })));

        let err: GameError = ConfigError::EmptyStrip.into();
        assert_eq!(
            err.to_string(),
            "configuration error: a strip needs at least one coin"
        );
    }
}
