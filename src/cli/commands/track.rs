//! Interactive tracking session command
//!
//! The default command: collects holdings on the console, shows the
//! valuation report and offers to save it.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::portfolio::report::DEFAULT_REPORT_FILENAME;
use crate::prices::PriceTable;
use crate::session::Session;

#[derive(Args, Clone)]
pub struct TrackArgs {
    /// File the report is written to when the save prompt is accepted
    #[arg(long, default_value = DEFAULT_REPORT_FILENAME)]
    pub output: PathBuf,

    /// JSON file with ticker prices to use instead of the built-in table
    #[arg(long)]
    pub prices: Option<PathBuf>,
}

impl Default for TrackArgs {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_REPORT_FILENAME),
            prices: None,
        }
    }
}

pub struct TrackCommand {
    args: TrackArgs,
}

impl TrackCommand {
    pub fn new(args: TrackArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self) -> Result<()> {
        let table = PriceTable::load_or_builtin(self.args.prices.as_deref())
            .context("Failed to load price table")?;
        debug!(entries = table.len(), "Price table ready");

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = Session::new(stdin.lock(), stdout.lock());
        session.run(&table, &self.args.output)
    }
}
