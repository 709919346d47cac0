//! Move requests.
//!
//! A move names a coin by its index along the strip and how many spaces to
//! slide it toward the origin. Both fields are signed: values arrive
//! straight from the input collaborator, and out-of-range or negative values
//! are rejected by the validator rather than by the type.

use serde::{Deserialize, Serialize};

/// A single move request.
///
/// ## Example
///
/// ```
/// use silver_dollar::core::Move;
///
/// // Slide coin 1 two spaces toward the origin
/// let mv = Move::new(1, 2);
/// assert_eq!(mv.coin, 1);
/// assert_eq!(mv.spaces, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Index of the coin to move (0 is nearest the origin).
    pub coin: i64,

    /// Spaces to move toward the origin.
    pub spaces: i64,
}

impl Move {
    /// Create a move request.
    #[must_use]
    pub const fn new(coin: i64, spaces: i64) -> Self {
        Self { coin, spaces }
    }

    /// Whether this move leaves its coin where it is.
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        self.spaces == 0
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "coin {} by {}", self.coin, self.spaces)
    }
}
