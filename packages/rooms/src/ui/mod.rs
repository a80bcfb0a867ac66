//! Command line caller of the room lookup.

pub mod config;
mod runner;

pub use config::{Args, Config, ConfigError, StoreConfig};
pub use runner::{
    EXIT_FOUND, EXIT_INVALID_ARGS, EXIT_NOT_FOUND, EXIT_OUTPUT_FAILURE, EXIT_STORE_FAILURE,
    LookupOutcome, RunError, run,
};
