//! Subcommand execution.

use std::io::{self, Write};

use anyhow::Context;
use serde_json::Value;
use tracing::info;
use unl_report_client::LedgerClient;
use unl_report_reader::UnlReportReader;

use crate::args::Subcommand;

/// Runs `subc` against `reader`, returning the JSON document to print.
pub(crate) async fn exec_subc<C: LedgerClient>(
    subc: &Subcommand,
    reader: &UnlReportReader<C>,
) -> anyhow::Result<Value> {
    let output = match subc {
        Subcommand::Single(subc) => {
            let report = reader.fetch_single(subc.ledger_index).await?;
            if report.is_none() {
                info!(ledger_index = %subc.ledger_index, "no report available");
            }
            serde_json::to_value(report)?
        }
        Subcommand::Multi(subc) => {
            let reports = reader
                .fetch_multi(subc.ledger_index, subc.direction(), subc.count)
                .await?;
            serde_json::to_value(reports)?
        }
        Subcommand::Range(subc) => {
            let reports = reader.fetch_range(subc.from, subc.to).await?;
            serde_json::to_value(reports)?
        }
    };

    Ok(output)
}

pub(crate) fn print_json(output: &Value) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, output).context("writing output")?;
    writeln!(stdout).context("writing output")?;
    Ok(())
}
