//! Vector capacity growth policy.
//!
//! Capacity grows by a factor of 1.5, rounded down, with a minimum step of
//! one slot. Starting from zero this gives `1, 2, 3, 4, 6, 9, 13, 19, ...`.
//! Integer truncation makes the factor a no-op at capacity 1, where the
//! forced increment keeps the sequence strictly increasing.

/// Growth factor numerator (factor = 3/2).
pub const GROWTH_NUMERATOR: i64 = 3;

/// Growth factor denominator.
pub const GROWTH_DENOMINATOR: i64 = 2;

/// Capacity after one growth event from `old`.
///
/// Returns `None` if the next capacity would not fit in an `i32`. Negative
/// inputs are treated as zero.
pub fn next_capacity(old: i32) -> Option<i32> {
    if old <= 0 {
        return Some(1);
    }
    let old = i64::from(old);
    let mut grown = old * GROWTH_NUMERATOR / GROWTH_DENOMINATOR;
    if grown == old {
        grown = old + 1;
    }
    i32::try_from(grown).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_from_zero() {
        let mut cap = 0;
        let mut seen = vec![cap];
        for _ in 0..8 {
            cap = next_capacity(cap).unwrap();
            seen.push(cap);
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 6, 9, 13, 19]);
    }

    #[test]
    fn truncation_is_bumped() {
        // floor(1 * 1.5) == 1
        assert_eq!(next_capacity(1), Some(2));
        // floor(3 * 1.5) == 4, no bump needed
        assert_eq!(next_capacity(3), Some(4));
    }

    #[test]
    fn overflow_reported() {
        assert_eq!(next_capacity(i32::MAX), None);
        assert_eq!(next_capacity(i32::MAX / 3 * 2), Some(i32::MAX / 3 * 3));
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn strictly_increasing(old in 0i32..1_000_000) {
                let next = next_capacity(old).unwrap();
                prop_assert!(next > old);
                prop_assert!(i64::from(next) <= (i64::from(old) * 3 / 2).max(i64::from(old) + 1));
            }
        }
    }
}
