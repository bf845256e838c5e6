//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Interactive prompting for missing fields (`input`)
//! - Datetime, kind, amount, ID and format parsing (`parsing`)

mod input;
mod parsing;

// Re-export public API
pub use input::{confirm, interactive, prompt_until_valid};
pub use parsing::{
    parse_amount, parse_datetime, parse_id, parse_kind, parse_name, parse_output_format,
    parse_store_amount, OutputFormat,
};
