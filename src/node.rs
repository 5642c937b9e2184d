//! Node store: a node is a directory holding an `info` file (currently just
//! `mtime`) and a `payload` file, with child node directories nested inside.

use std::{
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use crate::{err_at, util::files, Error, Result};

/// Validate a node local identifier against invariant 5 of the data model: not
/// empty, first character not `.` or `/`, no embedded separator, no `..`.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return err_at!(InvalidName, msg: "identifier must not be empty");
    }
    if name == ".." {
        return err_at!(InvalidName, msg: "identifier must not be `..`");
    }
    let first = name.chars().next().unwrap();
    if first == '.' || first == '/' {
        return err_at!(InvalidName, msg: "identifier {:?} must not start with `.` or `/`", name);
    }
    if name.contains('/') || name.contains('\\') {
        return err_at!(InvalidName, msg: "identifier {:?} must not contain a path separator", name);
    }
    if name.chars().any(|c| c.is_control()) {
        return err_at!(InvalidName, msg: "identifier {:?} must not contain control characters", name);
    }
    Ok(())
}

fn now_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Create a node directory at `dir`, containing a fresh `info` (with `mtime: now`)
/// and `payload` (set to `message`, newline-terminated). `dir` must not already
/// exist. Best-effort cleanup of the directory is attempted on any failure past
/// directory creation.
pub fn create(dir: &Path, message: &str) -> Result<()> {
    if dir.exists() {
        return err_at!(AlreadyExists, msg: "{:?} already exists", dir);
    }

    files::create_dir_new(dir)?;

    let result = (|| -> Result<()> {
        write_info(dir, now_epoch_secs())?;
        files::write_concat(dir.join("payload"), &[message, "\n"])?;
        Ok(())
    })();

    if let Err(err) = result {
        // best-effort cleanup; report the original error regardless of outcome.
        let _ = std::fs::remove_dir_all(dir);
        return Err(err);
    }

    Ok(())
}

/// Recursively remove the node directory at `dir` and everything under it.
/// Refuses targets whose first path component looks like `.` or an absolute
/// path, mirroring the node-naming invariant.
pub fn remove_recursive(dir: &Path) -> Result<()> {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if name.is_empty() || name.starts_with('/') || name.starts_with('.') {
        return err_at!(InvalidName, msg: "refusing to remove {:?}", dir);
    }
    files::remove_dir_recursive(dir)
}

/// Read the `payload` file for the node at `dir`.
pub fn read_payload(dir: &Path) -> Result<String> {
    files::read_whole(dir.join("payload"))
}

/// Overwrite `payload` with `text` verbatim and bump `info.mtime` to now.
pub fn replace_payload(dir: &Path, text: &str) -> Result<()> {
    files::write_concat(dir.join("payload"), &[text])?;
    touch_mtime(dir)
}

/// Append `text` to the existing payload, separated by a single `\n`, and bump
/// `info.mtime` to now.
pub fn append_payload(dir: &Path, text: &str) -> Result<()> {
    let current = read_payload(dir)?;
    files::write_concat(dir.join("payload"), &[&current, "\n", text])?;
    touch_mtime(dir)
}

/// Read `info.mtime` (seconds since epoch) for the node at `dir`.
pub fn read_mtime(dir: &Path) -> Result<u64> {
    let info = files::read_whole(dir.join("info"))?;
    for line in info.lines() {
        if let Some(value) = line.strip_prefix("mtime:") {
            let value = value.trim();
            return value
                .parse::<u64>()
                .map_err(|_| Error::Corrupt(format!("unparsable mtime {:?} in {:?}", value, dir)));
        }
    }
    err_at!(Corrupt, msg: "no mtime key in {:?}/info", dir)
}

fn touch_mtime(dir: &Path) -> Result<()> {
    write_info(dir, now_epoch_secs())
}

fn write_info(dir: &Path, mtime: u64) -> Result<()> {
    files::write_concat(dir.join("info"), &["mtime: ", &mtime.to_string(), "\n"])
}

/// True if `dir` looks like a readable node: both `info` and `payload` exist.
pub fn is_valid_node(dir: &Path) -> bool {
    dir.join("info").is_file() && dir.join("payload").is_file()
}

/// Join a node-path (relative to `dbpath`) onto `dbpath` to get an absolute
/// directory.
pub fn resolve(dbpath: &Path, node_path: &str) -> PathBuf {
    dbpath.join(node_path)
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
