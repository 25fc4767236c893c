//! One interactive session from welcome banner to save decision

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use tracing::{debug, warn};

use crate::portfolio::collector;
use crate::portfolio::report::{save_report, ReportFormatter};
use crate::prices::PriceTable;

/// Drives the collect, value, weigh, report and save steps over a
/// reader/writer pair.
///
/// Production wires this to locked stdin/stdout; tests feed it scripted
/// input and capture the output buffer.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run a full session. The save target is only written when the user
    /// answers the save prompt with `y`.
    pub fn run(&mut self, table: &PriceTable, save_path: &Path) -> Result<()> {
        writeln!(
            self.output,
            "{}",
            "<<< Welcome to the Simple Stock Portfolio Tracker >>>".bold()
        )?;

        let portfolio = collector::collect(&mut self.input, &mut self.output, table)?;

        if portfolio.is_empty() {
            writeln!(self.output, "\nNo stocks were entered. Application closing.")?;
            return Ok(());
        }

        let total_value = portfolio.total_value();
        let weighted = portfolio.weighted(total_value);
        debug!(
            holdings = portfolio.len(),
            total_value = %total_value,
            "Portfolio valued"
        );

        let formatter = ReportFormatter::new(&weighted, total_value);
        writeln!(self.output)?;
        write!(self.output, "{}", formatter.format_console())?;

        self.offer_save(&formatter, save_path)?;

        Ok(())
    }

    /// Ask whether to save and write the file variant on a `y` answer.
    ///
    /// A failed write is reported on the console but does not fail the
    /// session; the report was already shown.
    fn offer_save(&mut self, formatter: &ReportFormatter<'_>, save_path: &Path) -> Result<()> {
        let answer = collector::prompt_line(
            &mut self.input,
            &mut self.output,
            &format!(
                "\nDo you want to save this report to a file ({})? (y/n): ",
                save_path.display()
            ),
        )?;

        if answer.eq_ignore_ascii_case("y") {
            match save_report(save_path, &formatter.format_file()) {
                Ok(()) => {
                    debug!(path = %save_path.display(), "Report saved");
                    writeln!(
                        self.output,
                        "\n{} Report successfully saved to {}",
                        "[SUCCESS]".green(),
                        save_path.display()
                    )?;
                }
                Err(e) => {
                    warn!(path = %save_path.display(), error = %e, "Failed to save report");
                    writeln!(
                        self.output,
                        "\n{} An error occurred while saving the file: {}",
                        "[ERROR]".red(),
                        e
                    )?;
                }
            }
        } else {
            writeln!(self.output, "File saving skipped.")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn run_session(script: &str, save_path: &Path) -> (Result<()>, String) {
        let table = PriceTable::builtin();
        let mut session = Session::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let result = session.run(&table, save_path);
        let output = String::from_utf8(session.output).unwrap();
        (result, output)
    }

    #[test]
    fn test_full_session_with_save() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("portfolio_summary.txt");

        let (result, output) = run_session("nvda\n2\nV\n10\ndone\ny\n", &path);
        result.unwrap();

        assert!(output.contains("Welcome to the Simple Stock Portfolio Tracker"));
        assert!(output.contains("FINAL PORTFOLIO REPORT"));
        assert!(output.contains("Total Portfolio Value: $4,452.50"));
        assert!(output.contains("Do you want to save this report to a file"));
        assert!(output.contains("Report successfully saved to"));

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("     STOCK PORTFOLIO SUMMARY"));
        assert!(contents.contains("NVDA      2         875.50    1751.00        39.33"));
        assert!(contents.contains("Total Investment Value: $4,452.50"));
        assert!(!contents.contains("FINAL PORTFOLIO REPORT"));
    }

    #[test]
    fn test_empty_session_exits_cleanly() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("portfolio_summary.txt");

        let (result, output) = run_session("done\n", &path);
        result.unwrap();

        assert!(output.contains("No stocks were entered. Application closing."));
        assert!(!output.contains("FINAL PORTFOLIO REPORT"));
        assert!(!output.contains("Do you want to save"));
        assert!(!path.exists());
    }

    #[test]
    fn test_declined_save_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("portfolio_summary.txt");

        let (result, output) = run_session("COST\n5\ndone\nn\n", &path);
        result.unwrap();

        assert!(output.contains("File saving skipped."));
        assert!(!path.exists());
    }

    #[test]
    fn test_save_accepts_only_exact_y() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("portfolio_summary.txt");

        let (result, output) = run_session("COST\n5\ndone\nyes\n", &path);
        result.unwrap();

        assert!(output.contains("File saving skipped."));
        assert!(!path.exists());

        let (result, _) = run_session("COST\n5\ndone\nY\n", &path);
        result.unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_overwrites_previous_report() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("portfolio_summary.txt");

        let (first, _) = run_session("nvda\n2\nV\n10\ndone\ny\n", &path);
        first.unwrap();
        let (second, _) = run_session("RY\n1\ndone\ny\n", &path);
        second.unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("STOCK PORTFOLIO SUMMARY").count(), 1);
        assert!(contents.contains("RY        1         105.45"));
        assert!(!contents.contains("NVDA"));
    }

    #[test]
    fn test_save_failure_reports_but_session_succeeds() {
        let bad_path = PathBuf::from("/nonexistent-dir/portfolio_summary.txt");

        let (result, output) = run_session("RY\n1\ndone\ny\n", &bad_path);
        result.unwrap();

        assert!(output.contains("An error occurred while saving the file:"));
        assert!(!output.contains("Report successfully saved"));
    }

    #[test]
    fn test_eof_during_entry_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("portfolio_summary.txt");

        let (result, _) = run_session("NVDA\n2\n", &path);
        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_weight_column_in_console_output() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("portfolio_summary.txt");

        let (result, output) = run_session("nvda\n2\nV\n10\ndone\nn\n", &path);
        result.unwrap();

        assert!(output.contains("NVDA      2         875.50    1751.00        39.33"));
        assert!(output.contains("V         10        270.15    2701.50        60.67"));
    }
}
