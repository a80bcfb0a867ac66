//! Look up a chat room by identifier.
//!
//! Prints the room as JSON when it exists. The exit code tells found (0),
//! not found (1), invalid arguments (2), store failure (3) and output
//! failure (4) apart.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin heya-lookup -- --store rooms.json abc123
//! ```

use std::process::ExitCode;

use clap::Parser;
use heya_rooms::ui::{Args, Config, EXIT_INVALID_ARGS};
use heya_shared::setup_logger;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid arguments: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let mut stdout = std::io::stdout();
    match heya_rooms::run(config, &mut stdout).await {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            tracing::error!("Lookup failed: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
