//! File I/O primitives shared by every on-disk structure in this crate: whole-file
//! reads, fragment-concatenating writes, and a rename-based atomic replace used by
//! index maintenance.

use std::{
    fs,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use crate::{err_at, Error, Result};

/// Read an entire file into a `String`. A missing file is reported as `NotFound`,
/// any other I/O failure as `IOError`.
pub fn read_whole<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            err_at!(NotFound, msg: "{:?}: {}", path, err)
        }
        Err(err) => err_at!(IOError, Err(err), "reading {:?}", path),
    }
}

/// Read `path` if present, otherwise return an empty string. Used by `history` and
/// `index`, both of which are legal to be absent on a fresh database.
pub fn read_whole_or_empty<P: AsRef<Path>>(path: P) -> Result<String> {
    match read_whole(path) {
        Ok(text) => Ok(text),
        Err(Error::NotFound(_)) => Ok(String::new()),
        Err(err) => Err(err),
    }
}

/// Truncate-create `path` and write the concatenation of `fragments`, in order.
/// Unlike a single `write!`, this never inserts separators the caller did not ask
/// for — callers supply their own `"\n"` fragments where one is wanted.
pub fn write_concat<P: AsRef<Path>>(path: P, fragments: &[&str]) -> Result<()> {
    let path = path.as_ref();
    let mut file = err_at!(IOError, fs::File::create(path), "creating {:?}", path)?;
    for fragment in fragments {
        err_at!(IOError, file.write_all(fragment.as_bytes()), "writing {:?}", path)?;
    }
    Ok(())
}

/// Line-filter outcome returned by the closure passed to [`atomic_replace_lines`].
pub enum LineAction {
    /// Write this line, unchanged, to the replacement file.
    Keep,
    /// Drop this line from the replacement file.
    Drop,
}

/// Read `path` line by line, pass each line (without its trailing newline) through
/// `filter`, and write survivors to a temp file in the same directory before
/// renaming it over `path`. A crash before the rename leaves `path` untouched; a
/// crash after is equivalent to a completed call.
pub fn atomic_replace_lines<P, F>(path: P, mut filter: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnMut(&str) -> LineAction,
{
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(dir) => dir,
        None => return err_at!(Fatal, msg: "{:?} has no parent directory", path),
    };

    let tmp_path = dir.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    {
        let infile = err_at!(IOError, fs::File::open(path), "opening {:?}", path)?;
        let mut outfile =
            err_at!(IOError, fs::File::create(&tmp_path), "creating {:?}", tmp_path)?;

        for line in BufReader::new(infile).lines() {
            let line = err_at!(IOError, line, "reading {:?}", path)?;
            if let LineAction::Keep = filter(&line) {
                err_at!(IOError, writeln!(outfile, "{}", line), "writing {:?}", tmp_path)?;
            }
        }
    }

    err_at!(IOError, fs::rename(&tmp_path, path), "renaming {:?} -> {:?}", tmp_path, path)
}

/// Create a directory, mode `0777` minus umask, failing if it already exists.
pub fn create_dir_new<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    err_at!(IOError, fs::create_dir(path), "creating directory {:?}", path)
}

/// Recursively remove `path` and everything under it.
pub fn remove_dir_recursive<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    err_at!(IOError, fs::remove_dir_all(path), "removing {:?}", path)
}

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;
