//! UNL report reader
//!
//! Fetches the UNLReports published at flag ledgers from a Xahau node and prints them as JSON.

mod args;
mod cmd;
mod config;

use std::process::ExitCode;

use anyhow::Context;
use args::Args;
use cmd::{exec_subc, print_json};
use config::resolve_config;
use tokio::runtime;
use tracing::debug;
use unl_report_client::RpcLedgerClient;
use unl_report_common::logging::{self, LoggingInitConfig};
use unl_report_config::Config;
use unl_report_reader::UnlReportReader;

const SERVICE_NAME: &str = "unl-report";

fn main() -> ExitCode {
    let args: Args = argh::from_env();
    if let Err(e) = main_inner(args) {
        eprintln!("FATAL ERROR: {e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn main_inner(args: Args) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;

    // Init the logging before we do anything else.
    let _log_guard = init_logging(&config);

    let runtime = runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("unl-report-rt")
        .build()
        .context("init: build rt")?;

    let client = {
        let _g = runtime.enter();
        RpcLedgerClient::try_new(&config.client)?
    };
    let reader = UnlReportReader::try_new(client, &config.reader)?;
    debug!(
        rpc_url = %config.client.rpc_url,
        async_batch_limit = reader.async_batch_limit(),
        "reader ready"
    );

    let output = runtime.block_on(exec_subc(&args.subc, &reader))?;
    print_json(&output)
}

fn init_logging(config: &Config) -> logging::LogGuard {
    logging::init_logging_from_config(LoggingInitConfig {
        service_base_name: SERVICE_NAME,
        service_label: config.logging.service_label.as_deref(),
        service_version: Some(env!("CARGO_PKG_VERSION")),
        log_dir: config.logging.log_dir.as_deref(),
        log_file_prefix: config.logging.log_file_prefix.as_deref(),
        json_format: config.logging.json_format,
        default_log_prefix: SERVICE_NAME,
    })
}
