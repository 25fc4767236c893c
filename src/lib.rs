pub mod cli;
pub mod logging;
pub mod portfolio;
pub mod prices;
pub mod session;

// Re-export the session driver at the root level
pub use session::Session;
