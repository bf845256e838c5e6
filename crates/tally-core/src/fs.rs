//! Filesystem utilities for atomic replacement and lock files.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread::sleep;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Replace `destination` with `data` without ever exposing a partial file.
///
/// The bytes go to a uniquely named sibling temp file, are synced, and the
/// temp file is renamed over the destination. On failure the destination
/// keeps its previous content and the temp file is removed.
pub fn write_atomic(destination: &Path, data: &[u8]) -> io::Result<()> {
    let temp_path = sibling_path(destination, "tmp")?;

    let result = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .and_then(|mut file| {
            file.write_all(data)?;
            file.sync_all()
        });
    if let Err(err) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    rename_with_fallback(&temp_path, destination)
}

/// Rename `temp_path` over `destination`.
///
/// Some platforms (notably Windows) refuse to rename onto an existing file;
/// in that case the destination is removed and the rename retried. The temp
/// file is cleaned up if the rename ultimately fails.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    let Err(initial_err) = fs::rename(temp_path, destination) else {
        return Ok(());
    };

    let _ = fs::remove_file(destination);
    fs::rename(temp_path, destination).map_err(|retry_err| {
        let _ = fs::remove_file(temp_path);
        io::Error::new(
            retry_err.kind(),
            format!(
                "rename {} -> {} failed (initial: {}, retry: {})",
                temp_path.display(),
                destination.display(),
                initial_err,
                retry_err
            ),
        )
    })
}

/// Path of the lock file guarding `target`.
pub fn lock_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".lock");
    target.with_file_name(name)
}

/// An exclusive lock file, removed when dropped.
#[derive(Debug)]
pub struct LockFile {
    path: PathBuf,
    file: Option<File>,
}

impl LockFile {
    /// Create the lock file, polling until `timeout` elapses if it exists.
    ///
    /// Returns `Ok(None)` when the lock is still held after `timeout`.
    pub fn acquire(path: &Path, timeout: Duration) -> io::Result<Option<LockFile>> {
        let deadline = Instant::now() + timeout;
        loop {
            match OpenOptions::new().write(true).create_new(true).open(path) {
                Ok(mut file) => {
                    let _ = writeln!(file, "{}", std::process::id());
                    return Ok(Some(LockFile {
                        path: path.to_path_buf(),
                        file: Some(file),
                    }));
                }
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                    if Instant::now() >= deadline {
                        return Ok(None);
                    }
                    sleep(Duration::from_millis(25));
                }
                Err(err) => return Err(err),
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for LockFile {
    fn drop(&mut self) {
        // Close before removing; Windows refuses to delete open files.
        drop(self.file.take());
        let _ = fs::remove_file(&self.path);
    }
}

fn sibling_path(target: &Path, extension: &str) -> io::Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid ledger filename: {}", target.display()),
            )
        })?;
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("system time error: {}", e)))?
        .as_nanos();
    Ok(target.with_file_name(format!(
        ".{}.{}.{}.{}",
        filename,
        std::process::id(),
        nanos,
        extension
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_atomic_creates_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("ledger.trdb");

        write_atomic(&dest, b"first").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "first");
    }

    #[test]
    fn test_write_atomic_replaces_and_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("ledger.trdb");
        fs::write(&dest, b"old").unwrap();

        write_atomic(&dest, b"new").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_write_atomic_failure_keeps_old_content() {
        let dir = tempdir().unwrap();
        // A directory in the destination's place cannot be replaced by a file.
        let dest = dir.path().join("ledger.trdb");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("keep"), b"x").unwrap();

        assert!(write_atomic(&dest, b"new").is_err());
        assert!(dest.join("keep").exists());
        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_rename_overwrites_existing() {
        let dir = tempdir().unwrap();
        let temp = dir.path().join("temp.txt");
        let dest = dir.path().join("dest.txt");
        fs::write(&dest, b"old").unwrap();
        fs::write(&temp, b"new").unwrap();

        rename_with_fallback(&temp, &dest).unwrap();

        assert!(!temp.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn test_lock_path_appends_suffix() {
        assert_eq!(
            lock_path(Path::new("/home/me/.trdb")),
            PathBuf::from("/home/me/.trdb.lock")
        );
    }

    #[test]
    fn test_lock_is_exclusive_until_dropped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.trdb.lock");

        let held = LockFile::acquire(&path, Duration::ZERO).unwrap().unwrap();
        assert!(path.exists());
        assert!(LockFile::acquire(&path, Duration::from_millis(60))
            .unwrap()
            .is_none());

        drop(held);
        assert!(!path.exists());
        assert!(LockFile::acquire(&path, Duration::ZERO).unwrap().is_some());
    }
}
