//! Portfolio collection, valuation and reporting
//!
//! This module provides the interactive holding collector, the valuation
//! and weighting passes over collected holdings, and the fixed-width
//! report renderer shared by the console and the saved file.

pub mod collector;
pub mod report;
pub mod types;

pub use collector::{collect, InputError, QuantityInput, TickerInput};
pub use report::ReportFormatter;
pub use types::{Holding, Portfolio, WeightedHolding};
