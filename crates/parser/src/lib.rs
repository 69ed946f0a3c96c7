//! Recovers UNLReport data from the transactions of a flag ledger.
//!
//! Both extractors walk the ledger's transactions newest first and stop at the first
//! `UNLReport` transaction that qualifies. The protocol guarantees that at most one report
//! transaction per flag ledger carries the consolidated validator set in its metadata; this is
//! taken as a precondition and not re-checked here.
//!
//! Neither extractor fails. A ledger without report data yields an empty validator list and no
//! imported key.

use tracing::trace;
use unl_report_types::{LedgerPayload, UnlReport, ValidatorEntry, UNL_REPORT_ENTRY_TYPE};

/// Builds the [`UnlReport`] for `flag_ledger` out of its fetched ledger.
pub fn parse_unl_report(flag_ledger: u64, ledger: &LedgerPayload) -> UnlReport {
    let import_vl_key = extract_import_vl_key(ledger);
    let active_validators = extract_active_validators(ledger);
    trace!(
        %flag_ledger,
        validators = active_validators.len(),
        has_import_key = import_vl_key.is_some(),
        "parsed unl report"
    );
    UnlReport::new(flag_ledger, import_vl_key, active_validators)
}

/// Public key imported by the newest report transaction that carries an `ImportVLKey`.
pub fn extract_import_vl_key(ledger: &LedgerPayload) -> Option<String> {
    ledger
        .transactions
        .iter()
        .rev()
        .filter(|tx| tx.is_unl_report())
        .find_map(|tx| tx.import_vl_key.as_ref())
        .and_then(|key| key.public_key.clone())
}

/// Active validators from the metadata of the newest report transaction marked with
/// `ActiveValidator`.
///
/// Every modified (final fields) or created (new fields) `UNLReport` entry in that
/// transaction's metadata contributes its validators, in metadata order. Entries are
/// concatenated as-is without deduplication.
pub fn extract_active_validators(ledger: &LedgerPayload) -> Vec<ValidatorEntry> {
    let Some(tx) = ledger
        .transactions
        .iter()
        .rev()
        .find(|tx| tx.is_unl_report() && tx.has_active_validator())
    else {
        return Vec::new();
    };

    tx.affected_nodes()
        .iter()
        .filter_map(|node| node.mutation())
        .filter(|mutation| mutation.ledger_entry_type() == UNL_REPORT_ENTRY_TYPE)
        .filter_map(|mutation| mutation.fields())
        .filter_map(|fields| fields.active_validators.as_ref())
        .flatten()
        .filter_map(|item| item.active_validator.clone())
        .collect()
}
