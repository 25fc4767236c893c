use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Map the repeatable `-v` flag to a default filter directive.
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging for the CLI.
///
/// Diagnostics always go to stderr so that stdout stays reserved for the
/// interactive prompts and the rendered report. `RUST_LOG` takes precedence
/// over the verbosity flag when set.
pub fn init_logging(verbosity: u8) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact()
        .init();

    // Log session start
    tracing::debug!(verbosity, "Logging initialized");

    Ok(())
}

/// Log session end
pub fn log_session_end() {
    tracing::debug!("Session ended");
}
