//! Unitconv - interactive unit converter
//!
//! Menu on stdout, logs on stderr. Log filtering follows `RUST_LOG`
//! (default: warn).
//!
//! Menu:
//! - 1-5: convert within a category (length, weight, temperature, volume, speed)
//! - 6: custom conversion between any two typed unit names
//! - 7: exit

mod menu;

use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use unitconv_units::{Converter, UNITS};

use crate::menu::Session;

const APP_NAME: &str = "unitconv";
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the stderr subscriber so log lines never mix with the menu
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    tracing::info!("{} v{} started", APP_NAME, APP_VERSION);
    tracing::info!(
        units = UNITS.len(),
        categories = UNITS.categories().len(),
        "unit table loaded"
    );
    tracing::debug!("stdin is_terminal: {}", io::stdin().is_terminal());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(Converter::standard(), stdin.lock(), stdout.lock());

    match session.run() {
        Ok(()) => {
            tracing::info!("{} shutting down", APP_NAME);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("session ended: {}", e);
            ExitCode::FAILURE
        }
    }
}
