//! Flag ledger arithmetic.
//!
//! A flag ledger is a ledger whose index is a multiple of [`FLAG_LEDGER_INTERVAL`]. The
//! UNLReport published at a flag ledger governs the [`ReportRange`] of ledgers that follow it.
//! Everything here is pure integer arithmetic over ledger indexes.

mod range;

pub use range::ReportRange;

/// Number of ledgers between two consecutive flag ledgers.
pub const FLAG_LEDGER_INTERVAL: u64 = 256;

/// Returns true if `ledger_index` is a flag ledger.
pub fn is_flag(ledger_index: u64) -> bool {
    ledger_index % FLAG_LEDGER_INTERVAL == 0
}

/// Returns the flag ledger at or before `ledger_index`.
pub fn prev_or_current(ledger_index: u64) -> u64 {
    ledger_index - ledger_index % FLAG_LEDGER_INTERVAL
}

/// Returns the flag ledger strictly before `ledger_index`.
///
/// There is no flag ledger before 0, so `prev(0)` (and nothing else) yields `None`.
pub fn prev(ledger_index: u64) -> Option<u64> {
    if is_flag(ledger_index) {
        ledger_index.checked_sub(FLAG_LEDGER_INTERVAL)
    } else {
        Some(prev_or_current(ledger_index))
    }
}

/// Returns the flag ledger strictly after `ledger_index`, if it fits in a `u64`.
pub fn next(ledger_index: u64) -> Option<u64> {
    prev_or_current(ledger_index).checked_add(FLAG_LEDGER_INTERVAL)
}

/// Returns the flag ledger at or after `ledger_index`, if it fits in a `u64`.
pub fn next_or_current(ledger_index: u64) -> Option<u64> {
    if is_flag(ledger_index) {
        Some(ledger_index)
    } else {
        next(ledger_index)
    }
}

/// Number of flag ledgers from `from_flag` to `to_flag`, both inclusive.
///
/// Inputs are expected to be ordered (`from_flag <= to_flag`); an inverted pair counts as a
/// single interval. Non-flag inputs are counted by whole intervals between them, rounding down.
pub fn intervals_between(from_flag: u64, to_flag: u64) -> u64 {
    to_flag.saturating_sub(from_flag) / FLAG_LEDGER_INTERVAL + 1
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const FLAG: u64 = 6_873_344;

    #[test]
    fn test_is_flag() {
        assert!(is_flag(0));
        assert!(is_flag(256));
        assert!(is_flag(FLAG));
        assert!(!is_flag(FLAG + 1));
        assert!(!is_flag(FLAG - 1));
    }

    #[test]
    fn test_prev() {
        assert_eq!(prev(FLAG), Some(FLAG - 256));
        assert_eq!(prev(FLAG + 1), Some(FLAG));
        assert_eq!(prev(FLAG - 1), Some(FLAG - 256));
        assert_eq!(prev(1), Some(0));
        assert_eq!(prev(256), Some(0));
        assert_eq!(prev(0), None);
    }

    #[test]
    fn test_next() {
        assert_eq!(next(FLAG), Some(FLAG + 256));
        assert_eq!(next(FLAG - 1), Some(FLAG));
        assert_eq!(next(FLAG + 255), Some(FLAG + 256));
        assert_eq!(next(u64::MAX), None);
    }

    #[test]
    fn test_current_variants() {
        assert_eq!(prev_or_current(FLAG), FLAG);
        assert_eq!(prev_or_current(FLAG + 100), FLAG);
        assert_eq!(next_or_current(FLAG), Some(FLAG));
        assert_eq!(next_or_current(FLAG - 100), Some(FLAG));
    }

    #[test]
    fn test_beyond_u32() {
        let flag = (u32::MAX as u64 + 1) * 256;
        assert!(is_flag(flag));
        assert_eq!(prev(flag + 7), Some(flag));
        assert_eq!(next(flag), Some(flag + 256));
    }

    #[test]
    fn test_intervals_between() {
        assert_eq!(intervals_between(FLAG, FLAG), 1);
        assert_eq!(intervals_between(FLAG, FLAG + 256), 2);
        assert_eq!(intervals_between(FLAG - 256 * 3, FLAG), 4);
        assert_eq!(intervals_between(FLAG + 256, FLAG), 1);
    }

    proptest! {
        #[test]
        fn prev_is_strictly_before(height in 1u64..u64::MAX) {
            let flag = prev(height).expect("non-zero height has a previous flag");
            prop_assert!(is_flag(flag));
            prop_assert!(flag < height);
            prop_assert!(height - flag <= FLAG_LEDGER_INTERVAL);
        }

        #[test]
        fn next_is_strictly_after(height in 0u64..(u64::MAX - FLAG_LEDGER_INTERVAL)) {
            let flag = next(height).expect("no overflow in range");
            prop_assert!(is_flag(flag));
            prop_assert!(flag > height);
            prop_assert!(flag - height <= FLAG_LEDGER_INTERVAL);
        }

        #[test]
        fn prev_and_next_are_inverse_on_flags(n in 1u64..(u64::MAX / FLAG_LEDGER_INTERVAL - 1)) {
            let flag = n * FLAG_LEDGER_INTERVAL;
            prop_assert_eq!(prev(next(flag).unwrap()), Some(flag));
            prop_assert_eq!(next(prev(flag).unwrap()), Some(flag));
        }
    }
}
