use futures::future::join_all;
use tracing::{debug, info, trace};
use unl_report_client::LedgerClient;
use unl_report_config::ReaderConfig;
use unl_report_flag_ledger::intervals_between;
use unl_report_parser::parse_unl_report;
use unl_report_types::{LedgerPayload, UnlReport};

use crate::{
    traversal::{covering_flag, flag_sequence},
    ReaderError, ScanDirection,
};

/// Fetches UNLReports through a [`LedgerClient`], at most `async_batch_limit` requests at a
/// time.
#[derive(Debug)]
pub struct UnlReportReader<C> {
    client: C,
    async_batch_limit: usize,
}

/// Ledgers fetched for one batch, in flag order, up to the first missing one.
#[derive(Debug)]
struct BatchOutcome {
    ledgers: Vec<(u64, LedgerPayload)>,
    first_missing: Option<u64>,
}

impl<C: LedgerClient> UnlReportReader<C> {
    pub fn try_new(client: C, config: &ReaderConfig) -> Result<Self, ReaderError> {
        if config.async_batch_limit == 0 {
            return Err(ReaderError::invalid_argument(
                "async_batch_limit must be at least 1",
            ));
        }

        Ok(Self {
            client,
            async_batch_limit: config.async_batch_limit,
        })
    }

    pub fn async_batch_limit(&self) -> usize {
        self.async_batch_limit
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Report covering `ledger_index`, or `None` if its flag ledger is not available.
    pub async fn fetch_single(&self, ledger_index: u64) -> Result<Option<UnlReport>, ReaderError> {
        let reports = self
            .fetch_multi(ledger_index, ScanDirection::Backward, 1)
            .await?;
        Ok(reports.into_iter().next())
    }

    /// Reports covering every ledger in `from ..= to`, oldest first.
    ///
    /// The result stops short if the node does not have the later flag ledgers yet.
    pub async fn fetch_range(&self, from: u64, to: u64) -> Result<Vec<UnlReport>, ReaderError> {
        if to < from {
            return Err(ReaderError::invalid_argument(format!(
                "range end {to} is before range start {from}"
            )));
        }

        // No report covers ledger 0.
        let from = from.max(1);
        let (Some(from_flag), Some(to_flag)) = (covering_flag(from), covering_flag(to)) else {
            return Ok(Vec::new());
        };

        let count = usize::try_from(intervals_between(from_flag, to_flag)).unwrap_or(usize::MAX);
        debug!(%from, %to, %from_flag, %to_flag, %count, "fetching report range");
        self.fetch_multi(from, ScanDirection::Forward, count).await
    }

    /// Reports for up to `count` consecutive flag ledgers, starting at the one covering
    /// `ledger_index` and moving in `direction`.
    ///
    /// Flag ledgers are requested in batches of `async_batch_limit`, each batch completing
    /// before the next is issued. The first flag ledger the node reports as not found ends the
    /// scan; the reports before it are returned. Any other fetch failure fails the whole call.
    pub async fn fetch_multi(
        &self,
        ledger_index: u64,
        direction: ScanDirection,
        count: usize,
    ) -> Result<Vec<UnlReport>, ReaderError> {
        if count == 0 {
            return Err(ReaderError::invalid_argument("count must be at least 1"));
        }

        let mut flags = flag_sequence(ledger_index, direction).take(count);
        let mut reports = Vec::new();

        loop {
            let batch: Vec<u64> = flags.by_ref().take(self.async_batch_limit).collect();
            if batch.is_empty() {
                break;
            }

            let outcome = self.fetch_batch(&batch).await?;
            reports.extend(
                outcome
                    .ledgers
                    .iter()
                    .map(|(flag, ledger)| parse_unl_report(*flag, ledger)),
            );

            if let Some(flag_ledger) = outcome.first_missing {
                info!(%flag_ledger, fetched = reports.len(), "flag ledger not available, stopping");
                break;
            }
        }

        debug!(%ledger_index, ?direction, %count, fetched = reports.len(), "fetched reports");
        Ok(reports)
    }

    async fn fetch_batch(&self, batch: &[u64]) -> Result<BatchOutcome, ReaderError> {
        trace!(first = ?batch.first(), len = batch.len(), "issuing batch");
        let results = join_all(batch.iter().map(|&flag| self.client.get_ledger(flag))).await;

        let mut outcome = BatchOutcome {
            ledgers: Vec::with_capacity(batch.len()),
            first_missing: None,
        };

        for (&flag_ledger, result) in batch.iter().zip(results) {
            match result {
                Ok(ledger) => {
                    if outcome.first_missing.is_none() {
                        outcome.ledgers.push((flag_ledger, ledger));
                    }
                }
                Err(err) if err.is_not_found() => {
                    if outcome.first_missing.is_none() {
                        outcome.first_missing = Some(flag_ledger);
                    }
                }
                Err(source) => return Err(ReaderError::Fetch { flag_ledger, source }),
            }
        }

        Ok(outcome)
    }
}
