//! Interactive collection of stock holdings
//!
//! Prompts over a generic reader/writer pair so the whole loop can run
//! against scripted input in tests. Invalid entries re-prompt with a
//! message specific to what was wrong; only stream failures are errors.

use std::io::{BufRead, Write};

use owo_colors::OwoColorize;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::portfolio::report::{fixed2, format_usd};
use crate::portfolio::types::{Holding, Portfolio};
use crate::prices::PriceTable;

/// Entry stops when the user types this, compared case-insensitively.
pub const SENTINEL: &str = "DONE";

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input stream closed before entry was complete")]
    StreamClosed,

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of one ticker prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickerInput {
    /// A ticker present in the price table, normalized to uppercase.
    Valid { ticker: String, price: Decimal },
    /// Normalized input that is not in the price table.
    Unknown(String),
    /// The user typed the sentinel.
    Sentinel,
}

/// Outcome of one quantity prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityInput {
    Valid(u64),
    Empty,
    NotANumber,
    NotPositive,
}

/// Classify raw ticker input against the price table.
pub fn parse_ticker_input(raw: &str, table: &PriceTable) -> TickerInput {
    let ticker = raw.trim().to_uppercase();
    if ticker == SENTINEL {
        return TickerInput::Sentinel;
    }
    match table.lookup(&ticker) {
        Some(price) => TickerInput::Valid { ticker, price },
        None => TickerInput::Unknown(ticker),
    }
}

/// Classify raw quantity input.
///
/// Parsing goes through `i64` so that a negative entry reports as
/// non-positive rather than non-numeric.
pub fn parse_quantity_input(raw: &str) -> QuantityInput {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return QuantityInput::Empty;
    }
    match trimmed.parse::<i64>() {
        Err(_) => QuantityInput::NotANumber,
        Ok(n) if n <= 0 => QuantityInput::NotPositive,
        Ok(n) => QuantityInput::Valid(n as u64),
    }
}

/// Write a prompt without a trailing newline and read one reply line.
pub(crate) fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<String, InputError> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::StreamClosed);
    }
    Ok(line.trim().to_string())
}

/// Run the entry loop until the sentinel and return the collected
/// portfolio, which may be empty.
pub fn collect<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    table: &PriceTable,
) -> Result<Portfolio, InputError> {
    let mut portfolio = Portfolio::new();

    writeln!(output, "\n--- Enter Your Stock Holdings ---")?;
    writeln!(output, "Available stocks: {}", table.available())?;
    writeln!(output, "Type 'done' when you have finished entering your stocks.")?;

    loop {
        let raw = prompt_line(input, output, "Enter stock ticker (e.g., NVDA): ")?;
        let (ticker, price) = match parse_ticker_input(&raw, table) {
            TickerInput::Sentinel => break,
            TickerInput::Unknown(ticker) => {
                writeln!(
                    output,
                    "{} Stock '{}' not found in the price list. Please try one of the available options.",
                    "Error:".red(),
                    ticker
                )?;
                continue;
            }
            TickerInput::Valid { ticker, price } => (ticker, price),
        };

        let quantity = prompt_quantity(input, output, &ticker)?;

        let holding = Holding::new(ticker, quantity, price);
        writeln!(
            output,
            "-> Added {} shares of {} at ${} each. Current value: {}",
            holding.quantity,
            holding.ticker,
            fixed2(holding.price),
            format_usd(holding.value)
        )?;
        debug!(
            ticker = %holding.ticker,
            quantity = holding.quantity,
            value = %holding.value,
            "Holding added"
        );
        portfolio.push(holding);
    }

    debug!(holdings = portfolio.len(), "Entry finished");
    Ok(portfolio)
}

/// Re-prompt until the quantity for `ticker` is a positive whole number.
fn prompt_quantity<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    ticker: &str,
) -> Result<u64, InputError> {
    loop {
        let raw = prompt_line(input, output, &format!("Enter quantity for {}: ", ticker))?;
        match parse_quantity_input(&raw) {
            QuantityInput::Valid(quantity) => return Ok(quantity),
            QuantityInput::Empty => {
                writeln!(output, "Quantity cannot be empty.")?;
            }
            QuantityInput::NotANumber => {
                writeln!(output, "Invalid input. Please enter a whole number for quantity.")?;
            }
            QuantityInput::NotPositive => {
                writeln!(output, "Quantity must be a positive whole number.")?;
            }
        }
    }
}
