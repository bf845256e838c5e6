//! JSON file storage backend.
//!
//! The whole ledger lives in one JSON document. Writes go through a temp
//! file and a rename, and mutations hold a sibling `.lock` file for the full
//! open-mutate-write span so concurrent `tally` processes cannot lose each
//! other's updates.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{LedgerError, Result};
use crate::fs::{lock_path, write_atomic, LockFile};
use crate::ledger::Ledger;
use crate::storage::traits::StorageEngine;

/// How long a writer waits for another writer's lock before giving up.
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(2);

/// A ledger stored as a single JSON file at an explicit path.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
    lock_timeout: Duration,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
        }
    }

    pub fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_unlocked(&self, ledger: &Ledger) -> Result<()> {
        let json = serde_json::to_vec_pretty(ledger)?;
        write_atomic(&self.path, &json).map_err(|e| LedgerError::io(&self.path, e))
    }
}

impl StorageEngine for JsonFileStorage {
    type Lock = LockFile;

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn open(&self) -> Result<Ledger> {
        let bytes = fs::read(&self.path).map_err(|e| LedgerError::io(&self.path, e))?;
        serde_json::from_slice(&bytes).map_err(|source| LedgerError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, ledger: &Ledger) -> Result<()> {
        self.write_unlocked(ledger)
    }

    fn create(&self, ledger: &Ledger, overwrite: bool) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| LedgerError::io(parent, e))?;
        }

        let _guard = self.lock()?;
        if self.exists() && !overwrite {
            return Err(LedgerError::AlreadyExists {
                path: self.path.clone(),
            });
        }
        self.write_unlocked(ledger)
    }

    fn lock(&self) -> Result<LockFile> {
        let path = lock_path(&self.path);
        LockFile::acquire(&path, self.lock_timeout)
            .map_err(|e| LedgerError::io(&path, e))?
            .ok_or(LedgerError::Locked { path })
    }
}
