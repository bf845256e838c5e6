//! Storage engine trait definition.
//!
//! The `StorageEngine` trait is the seam between the in-memory [`Ledger`]
//! and its persisted form. Every command is a full round trip through it:
//! open, optionally mutate, write back.

use crate::error::Result;
use crate::ledger::Ledger;
use crate::transaction::Transaction;

/// Persistence interface for a single ledger.
///
/// Implementations must ensure:
/// - `write` replaces the stored ledger wholesale and atomically
/// - `open` never silently substitutes an empty ledger for unreadable content
/// - `lock` excludes other writers for as long as the guard lives
pub trait StorageEngine {
    /// Guard returned by [`StorageEngine::lock`]; the lock is released on drop.
    type Lock;

    /// Check whether a ledger is present.
    fn exists(&self) -> bool;

    /// Read and deserialize the stored ledger.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Io` if the ledger cannot be read and
    /// `LedgerError::Corrupt` if its content is not a valid ledger.
    fn open(&self) -> Result<Ledger>;

    /// Serialize `ledger` and replace the stored one.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Io` if the ledger cannot be written. The
    /// previously stored ledger is left intact in that case.
    fn write(&self, ledger: &Ledger) -> Result<()>;

    /// Store a brand-new ledger.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::AlreadyExists` if a ledger is present and
    /// `overwrite` is false.
    fn create(&self, ledger: &Ledger, overwrite: bool) -> Result<()>;

    /// Take the exclusive writer lock.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Locked` if another writer keeps the lock.
    fn lock(&self) -> Result<Self::Lock>;

    /// Open, apply `mutate`, and write back while holding the lock.
    ///
    /// Nothing is written if `mutate` fails.
    fn update<T, F>(&self, mutate: F) -> Result<T>
    where
        Self: Sized,
        F: FnOnce(&mut Ledger) -> Result<T>,
    {
        let _guard = self.lock()?;
        let mut ledger = self.open()?;
        let value = mutate(&mut ledger)?;
        self.write(&ledger)?;
        Ok(value)
    }

    /// Append a transaction to the stored ledger, returning its ID.
    fn store_transaction(&self, transaction: Transaction) -> Result<usize>
    where
        Self: Sized,
    {
        self.update(|ledger| Ok(ledger.store(transaction)))
    }

    /// Delete the transaction at `id` from the stored ledger.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NotFound` for an out-of-range ID; the stored
    /// ledger is not rewritten in that case.
    fn delete_transaction(&self, id: usize) -> Result<Transaction>
    where
        Self: Sized,
    {
        self.update(|ledger| ledger.delete(id))
    }

    /// Read a single transaction from the stored ledger.
    fn get_transaction(&self, id: usize) -> Result<Transaction> {
        self.open()?.read(id).cloned()
    }
}
