//! Initial layout generation.

use tracing::info;

use crate::core::error::ConfigError;
use crate::core::rng::RandomSource;

/// Generate a starting layout of `coin_count` coins.
///
/// Each coin sits `gap + 1` spaces past the previous one (or past the
/// origin, for coin 0), where `gap` is drawn uniformly from `[0, max_gap]`.
/// The result is strictly increasing and starts at 1 or above by
/// construction. One draw is made per coin, in coin order, so a seeded
/// source always yields the same layout.
///
/// Fails for an empty strip or a `max_gap` of `u32::MAX`, whose draw range
/// does not fit the source.
///
/// ```
/// use silver_dollar::core::GameRng;
/// use silver_dollar::rules::generate_board;
///
/// let board = generate_board(4, 6, &mut GameRng::new(42)).unwrap();
/// assert_eq!(board.len(), 4);
/// assert!(board.windows(2).all(|w| w[0] < w[1]));
/// ```
pub fn generate_board(
    coin_count: usize,
    max_gap: u32,
    rng: &mut impl RandomSource,
) -> Result<Vec<i64>, ConfigError> {
    if coin_count < 1 {
        return Err(ConfigError::InvalidCoinCount(coin_count));
    }

    let draw_bound = max_gap
        .checked_add(1)
        .ok_or(ConfigError::MaxGapTooLarge(max_gap))?;
    let mut positions = Vec::with_capacity(coin_count);
    let mut previous = 0i64;

    for _ in 0..coin_count {
        let gap = i64::from(rng.next(draw_bound));
        previous += gap + 1;
        positions.push(previous);
    }

    info!(coin_count, max_gap, ?positions, "generated board");
    Ok(positions)
}
