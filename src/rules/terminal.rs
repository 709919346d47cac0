//! Terminal layout detection.

/// Whether the strip is in its terminal layout `1, 2, ..., n`.
///
/// The packed check needs at least one adjacent pair to confirm: a
/// single-coin strip is never reported terminal, even when the coin sits on
/// position 1.
#[must_use]
pub fn is_terminal(positions: &[i64]) -> bool {
    let Some(&first) = positions.first() else {
        return false;
    };

    let mut packed = false;
    for pair in positions.windows(2) {
        if pair[1] - pair[0] == 1 {
            packed = true;
        } else {
            packed = false;
            break;
        }
    }

    first == 1 && packed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_strip_is_terminal() {
        assert!(is_terminal(&[1, 2]));
        assert!(is_terminal(&[1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_gap_is_not_terminal() {
        assert!(!is_terminal(&[1, 5]));
        assert!(!is_terminal(&[1, 2, 4]));
        assert!(!is_terminal(&[1, 3, 4]));
    }

    #[test]
    fn test_offset_packing_is_not_terminal() {
        assert!(!is_terminal(&[2, 3, 4]));
    }

    #[test]
    fn test_single_coin_never_terminal() {
        assert!(!is_terminal(&[1]));
        assert!(!is_terminal(&[4]));
    }

    #[test]
    fn test_empty_strip_not_terminal() {
        assert!(!is_terminal(&[]));
    }
}
