use std::fmt;

use serde::{Deserialize, Serialize};

use crate::FLAG_LEDGER_INTERVAL;

/// The ledgers governed by the UNLReport published at a flag ledger.
///
/// For a flag ledger `F` this is `F + 1 ..= F + 256`. Serializes as `[first, last]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u64, u64)", into = "(u64, u64)")]
pub struct ReportRange {
    first: u64,
    last: u64,
}

impl ReportRange {
    /// Range governed by the report published at `flag_ledger`.
    ///
    /// Saturates at `u64::MAX` for the topmost flag ledger.
    pub fn for_flag(flag_ledger: u64) -> Self {
        Self {
            first: flag_ledger.saturating_add(1),
            last: flag_ledger.saturating_add(FLAG_LEDGER_INTERVAL),
        }
    }

    pub fn first(&self) -> u64 {
        self.first
    }

    pub fn last(&self) -> u64 {
        self.last
    }

    pub fn contains(&self, ledger_index: u64) -> bool {
        (self.first..=self.last).contains(&ledger_index)
    }
}

impl From<(u64, u64)> for ReportRange {
    fn from((first, last): (u64, u64)) -> Self {
        Self { first, last }
    }
}

impl From<ReportRange> for (u64, u64) {
    fn from(range: ReportRange) -> Self {
        (range.first, range.last)
    }
}

impl fmt::Display for ReportRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.first, self.last)
    }
}
