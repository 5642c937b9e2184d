//! Error type returned by every `framedb` operation, plus the `err_at!` macro used
//! throughout this crate to attach call-site context to a freshly constructed error.

use std::{fmt, io, result};

/// Result alias used across the crate and its binaries.
pub type Result<T> = result::Result<T, Error>;

/// Every failure mode exposed by the core storage/navigation API.
#[derive(Debug)]
pub enum Error {
    /// A node-path, dbpath, or index/history entry does not exist.
    NotFound(String),
    /// A node directory (or the database root) already exists.
    AlreadyExists(String),
    /// A node local identifier violates the naming invariant.
    InvalidName(String),
    /// Attempted `up`/navigation beyond `root`.
    AtRoot(String),
    /// Attempted to delete `root`.
    CannotDeleteRoot(String),
    /// On-disk state did not match the invariants this crate relies on.
    Corrupt(String),
    /// The database is held by another live handle.
    Locked(String),
    /// Wraps a `std::io::Error` encountered while touching the filesystem.
    IOError(String, io::Error),
    /// Any other condition that should not happen given the invariants above.
    Fatal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotFound(msg) => write!(f, "not-found: {}", msg),
            Error::AlreadyExists(msg) => write!(f, "already-exists: {}", msg),
            Error::InvalidName(msg) => write!(f, "invalid-name: {}", msg),
            Error::AtRoot(msg) => write!(f, "at-root: {}", msg),
            Error::CannotDeleteRoot(msg) => write!(f, "cannot-delete-root: {}", msg),
            Error::Corrupt(msg) => write!(f, "corrupt: {}", msg),
            Error::Locked(msg) => write!(f, "locked: {}", msg),
            Error::IOError(msg, err) => write!(f, "io-error: {} ({})", msg, err),
            Error::Fatal(msg) => write!(f, "fatal: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Build an `IoError` from a `std::io::Error`, tagging it with a short message.
    pub fn from_io(msg: impl Into<String>, err: io::Error) -> Error {
        Error::IOError(msg.into(), err)
    }
}

/// Construct an [`Error`] variant with a formatted message, the way the rest of
/// this codebase builds up context at the call-site instead of further down the
/// stack.
///
/// ```ignore
/// err_at!(NotFound, msg: "node {:?} missing", path)
/// ```
#[macro_export]
macro_rules! err_at {
    ($variant:ident, msg: $($arg:tt)*) => {
        Err($crate::Error::$variant(format!($($arg)*)))
    };
    ($variant:ident, $result:expr) => {
        match $result {
            Ok(val) => Ok(val),
            Err(err) => Err($crate::Error::from_io(stringify!($variant), err)),
        }
    };
    ($variant:ident, $result:expr, $($arg:tt)*) => {
        match $result {
            Ok(val) => Ok(val),
            Err(err) => Err($crate::Error::IOError(format!($($arg)*), err)),
        }
    };
}
