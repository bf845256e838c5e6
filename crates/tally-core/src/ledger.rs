//! The ledger: a named, ordered collection of transactions.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{LedgerError, Result};
use crate::money::Value;
use crate::query::running_balance;
use crate::transaction::Transaction;

/// A named, ordered sequence of transactions.
///
/// Transactions are addressed by their zero-based position. These IDs are
/// **not stable**: deleting ID `i` moves every later transaction down by one,
/// so a listing must be refreshed before deleting by a displayed ID again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    name: String,
    #[serde(
        rename = "transaction",
        default,
        deserialize_with = "null_as_empty"
    )]
    transactions: Vec<Transaction>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Transaction>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Transaction>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transactions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of transactions.
    pub fn size(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Append a transaction, returning its ID (the previous size).
    pub fn store(&mut self, transaction: Transaction) -> usize {
        self.transactions.push(transaction);
        self.transactions.len() - 1
    }

    /// Get the transaction at `id`.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NotFound` unless `id < size()`.
    pub fn read(&self, id: usize) -> Result<&Transaction> {
        self.transactions.get(id).ok_or(LedgerError::NotFound {
            id,
            size: self.size(),
        })
    }

    /// Remove and return the transaction at `id`; later IDs shift down by one.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NotFound` unless `id < size()`, leaving the
    /// ledger untouched.
    pub fn delete(&mut self, id: usize) -> Result<Transaction> {
        if id >= self.size() {
            return Err(LedgerError::NotFound {
                id,
                size: self.size(),
            });
        }
        Ok(self.transactions.remove(id))
    }

    /// Transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// `(id, transaction)` pairs in insertion order.
    pub fn iter(
        &self,
    ) -> impl DoubleEndedIterator<Item = (usize, &Transaction)> + ExactSizeIterator {
        self.transactions.iter().enumerate()
    }

    /// Running balance over the whole ledger.
    ///
    /// # Errors
    ///
    /// `Overflow` when the balance does not fit a `Value`.
    pub fn balance(&self) -> Result<Value> {
        running_balance(&self.transactions)
    }
}
