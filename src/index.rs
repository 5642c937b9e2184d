//! Flat, newline-delimited catalog of every non-root node-path in the database.
//! The index is a derivable hint, not the source of truth — the tree is
//! authoritative, so a stale or missing entry degrades gracefully (see
//! [`add`]/[`remove`]).

use std::path::Path;

use crate::util::files::{self, LineAction};
use crate::Result;

const FILE_NAME: &str = "index";

fn index_path(dbpath: &Path) -> std::path::PathBuf {
    dbpath.join(FILE_NAME)
}

/// Create an empty index file. Called once, by `Database::create`.
pub fn init(dbpath: &Path) -> Result<()> {
    files::write_concat(index_path(dbpath), &[])
}

/// Prepend `entry` (newest-first, matching `history`'s convention) to the index.
pub fn add(dbpath: &Path, entry: &str) -> Result<()> {
    let path = index_path(dbpath);
    let existing = files::read_whole_or_empty(&path)?;
    files::write_concat(&path, &[entry, "\n", &existing])
}

/// Remove every exact-match line naming `entry`. Absence of `entry` is not an
/// error — callers are expected to log a warning and continue, matching the
/// "index is a hint" design.
pub fn remove(dbpath: &Path, entry: &str) -> Result<bool> {
    let path = index_path(dbpath);
    let mut removed = false;
    files::atomic_replace_lines(&path, |line| {
        if line == entry {
            removed = true;
            LineAction::Drop
        } else {
            LineAction::Keep
        }
    })?;
    Ok(removed)
}

/// Read every entry, lexicographically sorted. Duplicates are preserved.
pub fn read(dbpath: &Path) -> Result<Vec<String>> {
    let text = files::read_whole_or_empty(index_path(dbpath))?;
    let mut entries: Vec<String> = text.lines().map(|s| s.to_string()).collect();
    entries.sort();
    Ok(entries)
}

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;
