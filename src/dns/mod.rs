//! Target classification and DNS resolution.
//!
//! Domain targets are resolved with `hickory-resolver` behind the
//! [`HostResolver`] trait so the lookup pipeline can be driven by a fake in
//! tests.

mod resolution;

// Re-export public API
pub use resolution::{classify_target, resolve_target, HostResolver, Target};
