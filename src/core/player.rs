//! Player identification.
//!
//! Silver Dollar is strictly two-player. Players are numbered 1 and 2 and
//! player 1 moves first.

use serde::{Deserialize, Serialize};

/// Number of players in a game.
pub const PLAYER_COUNT: u8 = 2;

/// Player identifier, either 1 or 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who opens the game.
    pub const FIRST: PlayerId = PlayerId(1);
    /// The player who moves second.
    pub const SECOND: PlayerId = PlayerId(2);

    /// Create a player ID from its 1-based number.
    ///
    /// Returns `None` for anything other than 1 or 2.
    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number <= PLAYER_COUNT {
            Some(Self(number))
        } else {
            None
        }
    }

    /// The 1-based player number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// The player who moves after this one.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(PLAYER_COUNT + 1 - self.0)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::FIRST.number(), 1);
        assert_eq!(PlayerId::SECOND.number(), 2);
        assert_eq!(format!("{}", PlayerId::FIRST), "Player 1");
    }

    #[test]
    fn test_player_id_new() {
        assert_eq!(PlayerId::new(1), Some(PlayerId::FIRST));
        assert_eq!(PlayerId::new(2), Some(PlayerId::SECOND));
        assert_eq!(PlayerId::new(0), None);
        assert_eq!(PlayerId::new(3), None);
    }

    #[test]
    fn test_other_alternates() {
        assert_eq!(PlayerId::FIRST.other(), PlayerId::SECOND);
        assert_eq!(PlayerId::SECOND.other(), PlayerId::FIRST);
        assert_eq!(PlayerId::FIRST.other().other(), PlayerId::FIRST);
    }

    #[test]
    fn test_player_id_serialization() {
        let json = serde_json::to_string(&PlayerId::SECOND).unwrap();
        let deserialized: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, PlayerId::SECOND);
    }
}
