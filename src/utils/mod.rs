//! Utility functions shared by the file writers.

mod fs;

pub use fs::write_atomically;
