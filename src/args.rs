pub mod types;
pub mod validation;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use types::*;

pub const DEFAULT_LOG_FILTER: &str = "rusty_matchplay=info";

/// Parse the command line, exiting with a usage message when it is invalid.
#[must_use]
pub fn args_checks() -> CleanArgs {
    let args = Args::parse();
    match args.validate() {
        Ok(clean) => clean,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    }
}

/// Log filter from `RUST_LOG`-style directives. Unset, empty or unparsable
/// directives fall back to [`DEFAULT_LOG_FILTER`].
#[must_use]
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
