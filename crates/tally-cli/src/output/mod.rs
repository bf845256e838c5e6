//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying transactions
//! in various formats (JSON, table, plain text).

mod json;
mod text;

// Re-export public API
pub use json::{balance_json, transaction_json, transactions_json};
pub use text::{print_balance, print_transaction, print_transaction_list};
