//! CLI module for stockfolio
//!
//! Uses clap for argument parsing and a structured command pattern: each
//! subcommand has a dedicated Args struct and a Command struct with an
//! `execute` method. Running with no subcommand starts the interactive
//! tracking session.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::logging;

pub mod commands;

// Import all command args and commands
use commands::prices::{PricesArgs, PricesCommand};
use commands::track::{TrackArgs, TrackCommand};
use commands::version::{VersionArgs, VersionCommand};

#[derive(Parser)]
#[command(name = "stockfolio")]
#[command(version)]
#[command(about = "Interactive stock portfolio valuation for the console", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose logging (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enter holdings interactively and report their values and weights
    Track(TrackArgs),

    /// Show the price table and exit
    Prices(PricesArgs),

    /// Show version information
    Version(VersionArgs),
}

impl Cli {
    /// Execute the CLI command; no subcommand means `track`.
    pub fn execute(self) -> Result<()> {
        logging::init_logging(self.verbose)?;

        match self.command {
            Some(Commands::Track(args)) => TrackCommand::new(args).execute(),
            Some(Commands::Prices(args)) => PricesCommand::new(args).execute(),
            Some(Commands::Version(args)) => VersionCommand::new(args).execute(),
            None => TrackCommand::new(TrackArgs::default()).execute(),
        }
    }
}
