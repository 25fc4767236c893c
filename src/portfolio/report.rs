//! Fixed-width report rendering
//!
//! The console report and the saved file share one table layout; the two
//! variants differ only in their title and total label. No colors or other
//! terminal escapes here, the same bytes must be valid file content.

use std::io;
use std::path::Path;

use rust_decimal::Decimal;

use crate::portfolio::types::WeightedHolding;

/// Default filename for the saved report.
pub const DEFAULT_REPORT_FILENAME: &str = "portfolio_summary.txt";

/// Width of the rules above and below the table.
const RULE_WIDTH: usize = 65;

const CONSOLE_TITLE: &str = "     FINAL PORTFOLIO REPORT    ";
const FILE_TITLE: &str = "     STOCK PORTFOLIO SUMMARY";
const CONSOLE_TOTAL_LABEL: &str = "Total Portfolio Value";
const FILE_TOTAL_LABEL: &str = "Total Investment Value";

/// Render a decimal with exactly two decimal places.
pub fn fixed2(value: Decimal) -> String {
    let mut rounded = value.round_dp(2);
    rounded.rescale(2);
    rounded.to_string()
}

/// Render a USD amount with a dollar sign and thousands separators.
pub fn format_usd(value: Decimal) -> String {
    let fixed = fixed2(value);
    let (number, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{}", sign, grouped, fraction)
}

/// Format weighted holdings and the portfolio total for display
pub struct ReportFormatter<'a> {
    pub rows: &'a [WeightedHolding],
    pub total_value: Decimal,
}

impl<'a> ReportFormatter<'a> {
    pub fn new(rows: &'a [WeightedHolding], total_value: Decimal) -> Self {
        Self { rows, total_value }
    }

    /// The on-screen variant.
    pub fn format_console(&self) -> String {
        self.format_with(CONSOLE_TITLE, CONSOLE_TOTAL_LABEL)
    }

    /// The variant written to the report file.
    pub fn format_file(&self) -> String {
        self.format_with(FILE_TITLE, FILE_TOTAL_LABEL)
    }

    fn format_with(&self, title: &str, total_label: &str) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let divider = "-".repeat(RULE_WIDTH);

        let mut output = String::new();

        output.push_str(&rule);
        output.push('\n');
        output.push_str(title);
        output.push('\n');
        output.push_str(&rule);
        output.push('\n');
        output.push_str(&format!(
            "{:<10}{:<10}{:<10}{:<15}{:<15}\n",
            "Ticker", "Quantity", "Price", "Value (USD)", "Weight (%)"
        ));
        output.push_str(&divider);
        output.push('\n');

        for row in self.rows {
            output.push_str(&format!(
                "{:<10}{:<10}{:<10}{:<15}{:<15}\n",
                row.holding.ticker,
                row.holding.quantity,
                fixed2(row.holding.price),
                fixed2(row.holding.value),
                fixed2(row.weight),
            ));
        }

        output.push_str(&divider);
        output.push('\n');
        output.push_str(&format!(
            "{}: {}\n",
            total_label,
            format_usd(self.total_value)
        ));
        output.push_str(&rule);
        output.push('\n');

        output
    }
}

/// Write the report to `path`, replacing any previous contents.
pub fn save_report(path: &Path, report: &str) -> io::Result<()> {
    std::fs::write(path, report)
}
