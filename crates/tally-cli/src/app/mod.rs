//! Application-level utilities for the Tally CLI.
//!
//! This module provides:
//! - Path resolution for config and ledger files
//! - Currency selection
//! - The per-invocation `AppContext`

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
