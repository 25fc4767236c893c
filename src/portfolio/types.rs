//! Portfolio type definitions with strong typing

use rust_decimal::Decimal;

/// One entered position with its derived market value.
///
/// The unit price is copied out of the price table when the holding is
/// created, so a holding stays consistent with the prices the user was
/// shown even if a different table is loaded later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holding {
    pub ticker: String,
    pub quantity: u64,
    pub price: Decimal,
    pub value: Decimal,
}

impl Holding {
    /// Create a holding; the value is always quantity times unit price.
    pub fn new(ticker: impl Into<String>, quantity: u64, price: Decimal) -> Self {
        let value = price * Decimal::from(quantity);
        Self {
            ticker: ticker.into(),
            quantity,
            price,
            value,
        }
    }
}

/// A holding together with its share of the total portfolio value,
/// produced by [`Portfolio::weighted`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedHolding {
    pub holding: Holding,
    /// Percentage of total portfolio value (0 when the total is zero).
    pub weight: Decimal,
}

/// Ordered collection of holdings for one session.
///
/// Holdings keep their entry order, and entering the same ticker twice
/// produces two separate line items.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    pub holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, holding: Holding) {
        self.holdings.push(holding);
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    /// Total market value across all holdings; zero when empty.
    pub fn total_value(&self) -> Decimal {
        self.holdings.iter().map(|h| h.value).sum()
    }

    /// Derive per-holding weights as percentages of `total_value`.
    ///
    /// A zero total reports every weight as zero instead of dividing.
    /// Validated input cannot produce a zero total for a non-empty
    /// portfolio, but the guard keeps the math total-safe either way.
    pub fn weighted(&self, total_value: Decimal) -> Vec<WeightedHolding> {
        self.holdings
            .iter()
            .map(|holding| {
                let weight = if total_value.is_zero() {
                    Decimal::ZERO
                } else {
                    (holding.value / total_value) * Decimal::from(100)
                };
                WeightedHolding {
                    holding: holding.clone(),
                    weight,
                }
            })
            .collect()
    }
}
