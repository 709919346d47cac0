//! Move legality.
//!
//! Rules are checked in order, and the first one that fails decides the
//! error:
//!
//! 1. The coin index must name a coin on the strip.
//! 2. Coins only move toward the origin, so `spaces` must be non-negative.
//! 3. The destination must lie strictly above the coin behind (or the
//!    origin, for coin 0).
//!
//! A zero-space move always passes rule 3, because the strip is already
//! strictly increasing. It is accepted as a no-op.

use crate::core::action::Move;
use crate::core::error::MoveError;

/// Where a coin would land after moving `spaces` toward the origin.
///
/// `coin` must be a valid index into `positions`. Distances that would
/// overflow saturate at the `i64` limits.
#[must_use]
pub fn destination(positions: &[i64], coin: usize, spaces: i64) -> i64 {
    positions[coin].saturating_sub(spaces)
}

/// The position a coin must stay strictly above.
#[must_use]
pub fn lower_bound(positions: &[i64], coin: usize) -> i64 {
    if coin == 0 {
        0
    } else {
        positions[coin - 1]
    }
}

/// Check a move and return its destination.
pub fn check_move(positions: &[i64], mv: Move) -> Result<i64, MoveError> {
    let coin = usize::try_from(mv.coin)
        .ok()
        .filter(|&coin| coin < positions.len())
        .ok_or(MoveError::InvalidCoinIndex {
            coin: mv.coin,
            coin_count: positions.len(),
        })?;

    if mv.spaces < 0 {
        return Err(MoveError::NegativeSpaces { spaces: mv.spaces });
    }

    let destination = destination(positions, coin, mv.spaces);
    let lower_bound = lower_bound(positions, coin);
    if destination <= lower_bound {
        return Err(MoveError::IllegalDestination {
            coin,
            destination,
            lower_bound,
        });
    }

    Ok(destination)
}

/// Whether moving `coin` by `spaces` is legal.
#[must_use]
pub fn is_legal(positions: &[i64], coin: i64, spaces: i64) -> bool {
    check_move(positions, Move::new(coin, spaces)).is_ok()
}

/// Every legal move, ordered by coin and then by distance.
///
/// Zero-space moves are included, so the list is never empty for a
/// non-empty strip.
#[must_use]
pub fn legal_moves(positions: &[i64]) -> Vec<Move> {
    let mut moves = Vec::new();

    for (coin, &position) in positions.iter().enumerate() {
        let max_spaces = position - lower_bound(positions, coin) - 1;
        moves.extend((0..=max_spaces).map(|spaces| Move::new(coin as i64, spaces)));
    }

    moves
}
