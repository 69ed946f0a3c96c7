//! Resolves the effective configuration from the config file and command line overrides.

use anyhow::{bail, Context};
use unl_report_config::Config;

use crate::args::Args;

pub(crate) fn resolve_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match (&args.config, &args.rpc_url) {
        (Some(path), _) => Config::load_from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        (None, Some(rpc_url)) => Config::with_rpc_url(rpc_url.clone()),
        (None, None) => bail!("no ledger node configured, pass --rpc-url or --config"),
    };

    if let Some(rpc_url) = &args.rpc_url {
        config.client.rpc_url = rpc_url.clone();
    }
    if let Some(batch_limit) = args.batch_limit {
        config.reader.async_batch_limit = batch_limit;
    }
    if args.json_logs {
        config.logging.json_format = Some(true);
    }

    Ok(config)
}
