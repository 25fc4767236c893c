//! Price table for supported tickers
//!
//! Prices are fixed for the lifetime of the process: either the built-in
//! table or a JSON file loaded once at startup. Nothing refreshes them
//! mid-session.

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PriceTableError {
    #[error("Failed to read price file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse price file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("Price table contains no entries")]
    Empty,

    #[error("Duplicate ticker in price table: {0}")]
    DuplicateTicker(String),

    #[error("Price for {ticker} must be positive, got {price}")]
    NonPositivePrice { ticker: String, price: Decimal },

    #[error("Price entry with an empty ticker")]
    EmptyTicker,
}

/// One ticker with its unit price in USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub ticker: String,
    pub price: Decimal,
}

/// Immutable ticker-to-price mapping.
///
/// Entries keep their authoring order so listings match the order shown in
/// the "Available stocks" banner. Lookup is exact over uppercase tickers;
/// callers normalize raw input before calling [`PriceTable::lookup`].
#[derive(Debug, Clone)]
pub struct PriceTable {
    entries: Vec<PriceEntry>,
}

impl PriceTable {
    /// The built-in table used when no price file is supplied.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                entry("NVDA", dec!(875.50)), // NVIDIA Corporation
                entry("JNJ", dec!(158.30)),  // Johnson & Johnson
                entry("V", dec!(270.15)),    // Visa Inc.
                entry("COST", dec!(780.00)), // Costco Wholesale
                entry("ASML", dec!(995.88)), // ASML Holding
                entry("RY", dec!(105.45)),   // Royal Bank of Canada
            ],
        }
    }

    /// Build a table from explicit entries.
    ///
    /// Tickers are trimmed and uppercased. Rejects empty tables, blank or
    /// duplicate tickers, and prices that are not strictly positive.
    pub fn from_entries(entries: Vec<PriceEntry>) -> Result<Self, PriceTableError> {
        if entries.is_empty() {
            return Err(PriceTableError::Empty);
        }

        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(entries.len());
        for e in entries {
            let ticker = e.ticker.trim().to_uppercase();
            if ticker.is_empty() {
                return Err(PriceTableError::EmptyTicker);
            }
            if e.price <= Decimal::ZERO {
                return Err(PriceTableError::NonPositivePrice {
                    ticker,
                    price: e.price,
                });
            }
            if !seen.insert(ticker.clone()) {
                return Err(PriceTableError::DuplicateTicker(ticker));
            }
            normalized.push(PriceEntry {
                ticker,
                price: e.price,
            });
        }

        Ok(Self {
            entries: normalized,
        })
    }

    /// Load a table from a JSON file holding an array of ticker/price objects.
    pub fn load(path: &Path) -> Result<Self, PriceTableError> {
        let raw = std::fs::read_to_string(path).map_err(|source| PriceTableError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let entries: Vec<PriceEntry> =
            serde_json::from_str(&raw).map_err(|source| PriceTableError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_entries(entries)
    }

    /// Load from `path` when given, otherwise fall back to the built-in table.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, PriceTableError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Unit price for an exact (already normalized) ticker.
    pub fn lookup(&self, ticker: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|e| e.ticker == ticker)
            .map(|e| e.price)
    }

    /// Comma-separated ticker list in table order, for the entry banner.
    pub fn available(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.ticker.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn entries(&self) -> &[PriceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn entry(ticker: &str, price: Decimal) -> PriceEntry {
    PriceEntry {
        ticker: ticker.to_string(),
        price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_table() {
        let table = PriceTable::builtin();

        assert_eq!(table.len(), 6);
        assert_eq!(table.lookup("NVDA"), Some(dec!(875.50)));
        assert_eq!(table.lookup("RY"), Some(dec!(105.45)));
        assert_eq!(table.available(), "NVDA, JNJ, V, COST, ASML, RY");
    }

    #[test]
    fn test_lookup_is_exact() {
        let table = PriceTable::builtin();

        assert_eq!(table.lookup("V"), Some(dec!(270.15)));
        assert_eq!(table.lookup("nvda"), None);
        assert_eq!(table.lookup("FAKE"), None);
    }

    #[test]
    fn test_from_entries_normalizes_tickers() {
        let table = PriceTable::from_entries(vec![PriceEntry {
            ticker: "  msft ".to_string(),
            price: dec!(415.10),
        }])
        .unwrap();

        assert_eq!(table.lookup("MSFT"), Some(dec!(415.10)));
        assert_eq!(table.available(), "MSFT");
    }

    #[test]
    fn test_from_entries_rejects_empty_table() {
        let result = PriceTable::from_entries(vec![]);
        assert!(matches!(result, Err(PriceTableError::Empty)));
    }

    #[test]
    fn test_from_entries_rejects_blank_ticker() {
        let result = PriceTable::from_entries(vec![PriceEntry {
            ticker: "   ".to_string(),
            price: dec!(10.00),
        }]);
        assert!(matches!(result, Err(PriceTableError::EmptyTicker)));
    }

    #[test]
    fn test_from_entries_rejects_non_positive_price() {
        let result = PriceTable::from_entries(vec![PriceEntry {
            ticker: "ZERO".to_string(),
            price: Decimal::ZERO,
        }]);
        assert!(matches!(
            result,
            Err(PriceTableError::NonPositivePrice { .. })
        ));
    }

    #[test]
    fn test_from_entries_rejects_duplicates_after_normalization() {
        let result = PriceTable::from_entries(vec![
            PriceEntry {
                ticker: "NVDA".to_string(),
                price: dec!(875.50),
            },
            PriceEntry {
                ticker: "nvda".to_string(),
                price: dec!(900.00),
            },
        ]);
        assert!(matches!(result, Err(PriceTableError::DuplicateTicker(t)) if t == "NVDA"));
    }

    #[test]
    fn test_load_from_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prices.json");
        fs::write(
            &path,
            r#"[{"ticker": "AAPL", "price": 227.5}, {"ticker": "MSFT", "price": 415.25}]"#,
        )
        .unwrap();

        let table = PriceTable::load(&path).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("AAPL"), Some(dec!(227.5)));
        assert_eq!(table.lookup("MSFT"), Some(dec!(415.25)));
        assert_eq!(table.available(), "AAPL, MSFT");
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.json");

        let result = PriceTable::load(&path);
        assert!(matches!(result, Err(PriceTableError::Read { .. })));
    }

    #[test]
    fn test_load_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prices.json");
        fs::write(&path, "{ not json").unwrap();

        let result = PriceTable::load(&path);
        assert!(matches!(result, Err(PriceTableError::Parse { .. })));
    }

    #[test]
    fn test_load_or_builtin_defaults() {
        let table = PriceTable::load_or_builtin(None).unwrap();
        assert_eq!(table.available(), "NVDA, JNJ, V, COST, ASML, RY");
    }
}
