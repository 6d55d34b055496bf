//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, lookups and settings
//! - Translation of HTTP transport failures into user-facing reasons
//!
//! Every upstream failure is converted into a [`LookupError`] at its call
//! site. Nothing is retried; the user re-triggers the action.

mod categorization;
mod types;

// Re-export public API
pub use categorization::describe_reqwest_error;
pub use types::{InitializationError, LookupError, SettingsError};
