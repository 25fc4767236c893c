//! CLI Commands module
//!
//! This module contains all command implementations for the stockfolio CLI.
//! Each command follows a consistent pattern with dedicated Args and Command structs.

// Command modules
pub mod prices;
pub mod track;
pub mod version;
