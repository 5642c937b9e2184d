//! Advisory exclusive lock on `DBPATH/.lock`, the conforming concurrency-hardening
//! extension described in the design notes. Acquired by `Database::open`/`create`
//! and released on `Drop`, so early returns via `?` never leak it.

use std::{
    fs,
    path::{Path, PathBuf},
};

use fs2::FileExt;

use crate::{err_at, Result};

const FILE_NAME: &str = ".lock";

/// Holds the open file descriptor for as long as the exclusive lock should be
/// held; dropping it releases the lock.
pub struct Lock {
    _file: fs::File,
    path: PathBuf,
}

impl Lock {
    /// Try to take the exclusive lock on `dbpath/.lock`, creating the sentinel
    /// file if needed. Returns `Error::Locked` if another live handle holds it.
    pub fn acquire(dbpath: &Path) -> Result<Lock> {
        let path = dbpath.join(FILE_NAME);
        let file = err_at!(
            IOError,
            fs::OpenOptions::new().create(true).write(true).open(&path),
            "opening {:?}",
            path
        )?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(Lock { _file: file, path }),
            Err(_) => err_at!(Locked, msg: "database at {:?} is already open", dbpath),
        }
    }
}

impl Drop for Lock {
    fn drop(&mut self) {
        // best-effort: nothing sensible to do but log if unlocking fails on close.
        if let Err(err) = FileExt::unlock(&self._file) {
            log::warn!("failed to release lock at {:?}: {}", self.path, err);
        }
    }
}

#[cfg(test)]
#[path = "lock_test.rs"]
mod lock_test;
