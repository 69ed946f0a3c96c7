//! Command line arguments for the `unl-report` binary.

use std::path::PathBuf;

use argh::FromArgs;
use unl_report_reader::ScanDirection;

/// Default number of flag ledgers visited by `multi`.
const DEFAULT_MULTI_COUNT: usize = 10;

#[derive(Debug, FromArgs)]
#[argh(description = "Reads UNLReports published at flag ledgers from a Xahau node")]
pub(crate) struct Args {
    #[argh(option, short = 'c', description = "path to TOML config file")]
    pub(crate) config: Option<PathBuf>,

    #[argh(
        option,
        short = 'r',
        description = "ledger node JSON-RPC URL (overrides config)"
    )]
    pub(crate) rpc_url: Option<String>,

    #[argh(
        option,
        short = 'b',
        description = "maximum concurrent ledger requests (overrides config)"
    )]
    pub(crate) batch_limit: Option<usize>,

    #[argh(switch, description = "log in JSON format")]
    pub(crate) json_logs: bool,

    #[argh(subcommand)]
    pub(crate) subc: Subcommand,
}

#[derive(Debug, PartialEq, Eq, FromArgs)]
#[argh(subcommand)]
pub(crate) enum Subcommand {
    Single(SubcSingle),
    Multi(SubcMulti),
    Range(SubcRange),
}

#[derive(Debug, PartialEq, Eq, FromArgs)]
#[argh(
    subcommand,
    name = "single",
    description = "prints the report covering a ledger"
)]
pub(crate) struct SubcSingle {
    #[argh(positional, description = "ledger index")]
    pub(crate) ledger_index: u64,
}

#[derive(Debug, PartialEq, Eq, FromArgs)]
#[argh(
    subcommand,
    name = "multi",
    description = "prints reports of consecutive flag ledgers starting from a ledger"
)]
pub(crate) struct SubcMulti {
    #[argh(positional, description = "ledger index")]
    pub(crate) ledger_index: u64,

    #[argh(switch, description = "walk towards older ledgers")]
    pub(crate) backward: bool,

    #[argh(
        option,
        short = 'n',
        default = "DEFAULT_MULTI_COUNT",
        description = "number of flag ledgers to visit (default 10)"
    )]
    pub(crate) count: usize,
}

impl SubcMulti {
    pub(crate) fn direction(&self) -> ScanDirection {
        if self.backward {
            ScanDirection::Backward
        } else {
            ScanDirection::Forward
        }
    }
}

#[derive(Debug, PartialEq, Eq, FromArgs)]
#[argh(
    subcommand,
    name = "range",
    description = "prints the reports covering a range of ledgers"
)]
pub(crate) struct SubcRange {
    #[argh(positional, description = "first ledger index")]
    pub(crate) from: u64,

    #[argh(positional, description = "last ledger index")]
    pub(crate) to: u64,
}
