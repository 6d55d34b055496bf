//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, timeouts, file names)
//! - The library `Config` and logging enums
//! - CLI option types and parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{Cli, Command, GlobalArgs, ResultActions, SettingsCommand, SettingsUpdate, WifiCommand};
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
