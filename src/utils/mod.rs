//! Utility functions shared by the library and the CLI.
//!
//! - [`app_data`] - Application data directory and `config.json` handling
//! - [`logging`] - `tracing` subscriber setup for the binary

pub mod app_data;
pub mod logging;

pub use app_data::*;
