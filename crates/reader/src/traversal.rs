use std::iter;

use unl_report_flag_ledger as flag_ledger;

/// Order in which flag ledgers are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    /// Towards newer ledgers.
    Forward,
    /// Towards older ledgers.
    Backward,
}

/// Flag ledger whose report covers `ledger_index`.
///
/// Reports published at flag ledger `F` govern `F + 1 ..= F + 256`, so a ledger is covered by the
/// flag ledger strictly before it. A scan starts there in both directions. Ledger 0 has no
/// covering flag ledger.
pub fn covering_flag(ledger_index: u64) -> Option<u64> {
    flag_ledger::prev(ledger_index)
}

/// Flag ledger following `flag` in `direction`, or `None` at the edge of the `u64` domain.
pub fn step(flag: u64, direction: ScanDirection) -> Option<u64> {
    match direction {
        ScanDirection::Forward => flag_ledger::next(flag),
        ScanDirection::Backward => flag_ledger::prev(flag),
    }
}

/// Lazily yields the flag ledgers visited when scanning from `ledger_index` in `direction`.
///
/// The sequence is unbounded except at the edges of the `u64` domain. Callers take as many as
/// they need.
pub fn flag_sequence(
    ledger_index: u64,
    direction: ScanDirection,
) -> impl Iterator<Item = u64> {
    iter::successors(covering_flag(ledger_index), move |&flag| step(flag, direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_start() {
        assert_eq!(covering_flag(6_873_344), Some(6_873_088));
        assert_eq!(covering_flag(6_873_345), Some(6_873_344));
        assert_eq!(covering_flag(6_873_444), Some(6_873_344));
    }

    #[test]
    fn test_backward_start() {
        assert_eq!(covering_flag(6_873_343), Some(6_873_088));
        assert_eq!(covering_flag(6_873_244), Some(6_873_088));
        assert_eq!(covering_flag(6_873_345), Some(6_873_344));
        assert_eq!(covering_flag(6_873_344), Some(6_873_088));
    }

    #[test]
    fn test_no_covering_flag_for_genesis() {
        assert_eq!(covering_flag(0), None);
        assert_eq!(covering_flag(1), Some(0));
        assert_eq!(covering_flag(256), Some(0));
    }

    #[test]
    fn test_step() {
        assert_eq!(step(6_873_344, ScanDirection::Forward), Some(6_873_600));
        assert_eq!(step(6_873_344, ScanDirection::Backward), Some(6_873_088));
        assert_eq!(step(0, ScanDirection::Backward), None);
    }

    #[test]
    fn test_forward_sequence() {
        let flags: Vec<_> = flag_sequence(6_873_345, ScanDirection::Forward)
            .take(3)
            .collect();
        assert_eq!(flags, vec![6_873_344, 6_873_600, 6_873_856]);
    }

    #[test]
    fn test_backward_sequence() {
        let flags: Vec<_> = flag_sequence(6_873_345, ScanDirection::Backward)
            .take(3)
            .collect();
        assert_eq!(flags, vec![6_873_344, 6_873_088, 6_872_832]);
    }

    #[test]
    fn test_backward_sequence_stops_at_genesis() {
        let flags: Vec<_> = flag_sequence(600, ScanDirection::Backward)
            .take(10)
            .collect();
        assert_eq!(flags, vec![512, 256, 0]);
    }

    #[test]
    fn test_forward_sequence_stops_at_u64_max() {
        let last_flag = u64::MAX - u64::MAX % 256;
        let flags: Vec<_> = flag_sequence(u64::MAX, ScanDirection::Forward)
            .take(10)
            .collect();
        assert_eq!(flags, vec![last_flag]);

        let flags: Vec<_> = flag_sequence(last_flag, ScanDirection::Forward)
            .take(10)
            .collect();
        assert_eq!(flags, vec![last_flag - 256, last_flag]);
    }

    #[test]
    fn test_genesis_sequence_is_empty() {
        assert_eq!(flag_sequence(0, ScanDirection::Forward).next(), None);
        assert_eq!(flag_sequence(0, ScanDirection::Backward).next(), None);
    }

    #[test]
    fn test_beyond_u32() {
        let start = u64::from(u32::MAX) + 1_000;
        let flags: Vec<_> = flag_sequence(start, ScanDirection::Forward)
            .take(2)
            .collect();
        assert_eq!(flags[0] % 256, 0);
        assert!(flags[0] < start && start <= flags[0] + 256);
        assert_eq!(flags[1], flags[0] + 256);
    }
}
