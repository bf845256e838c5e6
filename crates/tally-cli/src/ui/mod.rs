//! UI primitives for the Tally CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges and color styles
//! - **Render**: Tables, headers, receipts, hints
//! - **Format**: String utilities (truncate, dates)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use format::{format_datetime, single_line, truncate};
pub use render::{badge, blank_line, header, hint, kv, print, receipt, simple_table, Column};
