use serde::{Deserialize, Serialize};
use unl_report_flag_ledger::ReportRange;

use crate::ValidatorEntry;

/// The UNLReport published at one flag ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnlReport {
    #[serde(rename = "flag_ledger_index")]
    flag_ledger: u64,

    report_range: ReportRange,

    #[serde(rename = "import_vlkey")]
    import_vl_key: Option<String>,

    active_validators: Vec<ValidatorEntry>,
}

impl UnlReport {
    pub fn new(
        flag_ledger: u64,
        import_vl_key: Option<String>,
        active_validators: Vec<ValidatorEntry>,
    ) -> Self {
        Self {
            flag_ledger,
            report_range: ReportRange::for_flag(flag_ledger),
            import_vl_key,
            active_validators,
        }
    }

    pub fn flag_ledger(&self) -> u64 {
        self.flag_ledger
    }

    /// Ledgers this report applies to.
    pub fn report_range(&self) -> ReportRange {
        self.report_range
    }

    pub fn import_vl_key(&self) -> Option<&str> {
        self.import_vl_key.as_deref()
    }

    pub fn active_validators(&self) -> &[ValidatorEntry] {
        &self.active_validators
    }
}
