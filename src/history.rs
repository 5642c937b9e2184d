//! Newest-first log of cursor positions. The head line is the current node at
//! the time the database is next opened.

use std::path::Path;

use crate::util::files;
use crate::Result;

const FILE_NAME: &str = "history";

fn history_path(dbpath: &Path) -> std::path::PathBuf {
    dbpath.join(FILE_NAME)
}

/// Prepend `node_path` to history. Never trimmed here — the file grows
/// unbounded; readers request a bound via [`read`].
pub fn append(dbpath: &Path, node_path: &str) -> Result<()> {
    let path = history_path(dbpath);
    let existing = files::read_whole_or_empty(&path)?;
    files::write_concat(&path, &[node_path, "\n", &existing])
}

/// Return the first `count` entries as a single newline-joined blob.
/// `count = None` returns the whole file. A missing file reads as empty.
pub fn read(dbpath: &Path, count: Option<usize>) -> Result<String> {
    let text = files::read_whole_or_empty(history_path(dbpath))?;
    match count {
        None => Ok(text),
        Some(count) => {
            let mut out = String::new();
            for line in text.lines().take(count) {
                out.push_str(line);
                out.push('\n');
            }
            Ok(out)
        }
    }
}

/// Return the head line (current node at the time this database was last
/// opened), or `None` if history is absent or empty.
pub fn head(dbpath: &Path) -> Result<Option<String>> {
    let text = files::read_whole_or_empty(history_path(dbpath))?;
    Ok(text.lines().next().map(|s| s.to_string()))
}

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;
