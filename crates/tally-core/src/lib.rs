//! # Tally Core
//!
//! Core library for Tally - a personal ledger of withdrawals and deposits
//! kept in a single JSON file.
//!
//! This crate provides the domain model, the query layer and the storage
//! abstraction, independent of the CLI interface. It never logs and never
//! exits the process; every failure is returned as a [`LedgerError`].
//!
//! ## Architecture
//!
//! - **money**: `Value` (integer minor units) and `Currency` rendering/parsing
//! - **transaction**: immutable `Transaction` records and `TransactionKind`
//! - **ledger**: the ordered `Ledger` with positional CRUD
//! - **query**: filtering, latest entries and running balance
//! - **storage**: `StorageEngine` trait and the JSON file backend
//! - **fs**: atomic replacement and lock files

pub mod error;
pub mod fs;
pub mod ledger;
pub mod money;
pub mod query;
pub mod storage;
pub mod transaction;

pub use error::{LedgerError, Result};
pub use ledger::Ledger;
pub use money::{Currency, Value};
pub use query::{filter, latest, running_balance, TransactionFilter};
pub use storage::{JsonFileStorage, StorageEngine};
pub use transaction::{Transaction, TransactionKind};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
