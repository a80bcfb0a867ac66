//! Shared utilities for Heya.
//!
//! Logging setup and time helpers used by every binary in the workspace.

pub mod logger;
pub mod time;

pub use logger::setup_logger;
