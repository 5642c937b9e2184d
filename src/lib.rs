//! `framedb` is a personal, filesystem-backed hierarchical note store.
//!
//! Notes ("frames") live in a tree of directories rooted at a node named
//! `root`. Each frame carries a free-form text `payload` and a small `info`
//! file (currently just `mtime`). A [`Database`] handle exposes the
//! navigation cursor and the operations that keep the tree, the flat
//! `index`, and the `history` log consistent with one another:
//!
//! ```no_run
//! use framedb::Database;
//!
//! let mut db = Database::create("/tmp/example.framedb")?;
//! db.push("todo", "buy milk")?;
//! println!("{}", db.payload_read()?);
//! # Ok::<(), framedb::Error>(())
//! ```
//!
//! This crate implements the storage engine and navigation model, not the
//! `frm` command-line front-end (which lives in `src/bin/frm` and is a thin
//! consumer of this API).

mod db;
mod error;
mod history;
mod index;
mod lock;
mod node;
mod search;
pub mod util;

pub use crate::db::{Database, Status};
pub use crate::error::{Error, Result};
pub use crate::search::MatchFlags;
