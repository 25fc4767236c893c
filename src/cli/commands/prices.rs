//! Price table listing command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use owo_colors::OwoColorize;

use crate::portfolio::report::fixed2;
use crate::prices::PriceTable;

#[derive(Args, Clone)]
pub struct PricesArgs {
    /// JSON file with ticker prices to show instead of the built-in table
    #[arg(long)]
    pub prices: Option<PathBuf>,
}

pub struct PricesCommand {
    args: PricesArgs,
}

impl PricesCommand {
    pub fn new(args: PricesArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self) -> Result<()> {
        let table = PriceTable::load_or_builtin(self.args.prices.as_deref())
            .context("Failed to load price table")?;

        println!("\n{}", "AVAILABLE STOCKS".bright_yellow());

        let mut display = Table::new();
        display
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Ticker", "Price (USD)"]);

        for entry in table.entries() {
            display.add_row(vec![
                entry.ticker.clone(),
                format!("${}", fixed2(entry.price)),
            ]);
        }

        println!("{}", display);
        println!(
            "{} tickers available",
            table.len().to_string().bright_green()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_with_builtin_table() {
        let command = PricesCommand::new(PricesArgs { prices: None });
        command.execute().unwrap();
    }

    #[test]
    fn test_execute_fails_on_missing_price_file() {
        let command = PricesCommand::new(PricesArgs {
            prices: Some(PathBuf::from("/nonexistent/prices.json")),
        });

        assert!(command.execute().is_err());
    }
}
