//! Database handle: the current-node cursor plus the navigation and mutation API
//! described in the component design. The cursor is modeled as an explicit value
//! on the handle rather than the process working directory, so no operation here
//! ever touches `std::env::set_current_dir`.

use chrono::{Local, TimeZone};

use std::path::{Path, PathBuf};

use crate::{err_at, history, index, lock::Lock, node, search, Error, Result};

const ROOT: &str = "root";
const PLACEHOLDER_PAYLOAD: &str = "ENTER YOUR NOTES HERE";

/// An open handle onto a frame database: the absolute `dbpath` plus the
/// current-node cursor. Dropping the handle releases the advisory lock, if one
/// was taken.
pub struct Database {
    dbpath: PathBuf,
    cursor: String,
    _lock: Option<Lock>,
}

impl Database {
    /// Create a new database at `dbpath`: the directory itself, the `root` node
    /// with a placeholder payload, an empty index, and a history whose only
    /// entry is `root`. Returns an open handle, same as `open` would.
    pub fn create<P: AsRef<Path>>(dbpath: P) -> Result<Database> {
        let dbpath = dbpath.as_ref().to_path_buf();
        if dbpath.exists() {
            return err_at!(AlreadyExists, msg: "database already exists at {:?}", dbpath);
        }

        crate::util::files::create_dir_new(&dbpath)?;
        node::create(&dbpath.join(ROOT), PLACEHOLDER_PAYLOAD)?;
        index::init(&dbpath)?;
        history::append(&dbpath, ROOT)?;

        Self::open(dbpath)
    }

    /// Open an existing database at `dbpath`. The cursor is the head line of
    /// `history`, falling back to `root` if history is absent or empty. The
    /// current node must exist on disk or this returns `Error::Corrupt`.
    pub fn open<P: AsRef<Path>>(dbpath: P) -> Result<Database> {
        let dbpath = dbpath.as_ref().to_path_buf();
        if !dbpath.is_dir() {
            return err_at!(NotFound, msg: "no database at {:?}", dbpath);
        }

        let lock = Lock::acquire(&dbpath)?;

        let cursor = history::head(&dbpath)?.unwrap_or_else(|| ROOT.to_string());
        if !node::is_valid_node(&node::resolve(&dbpath, &cursor)) {
            return err_at!(Corrupt, msg: "current node {:?} missing under {:?}", cursor, dbpath);
        }

        Ok(Database { dbpath, cursor, _lock: Some(lock) })
    }

    /// Like [`open`](Database::open), but does not take the advisory lock.
    /// Intended for tests that want several concurrent handles on the same
    /// on-disk database.
    pub fn open_without_lock<P: AsRef<Path>>(dbpath: P) -> Result<Database> {
        let dbpath = dbpath.as_ref().to_path_buf();
        if !dbpath.is_dir() {
            return err_at!(NotFound, msg: "no database at {:?}", dbpath);
        }
        let cursor = history::head(&dbpath)?.unwrap_or_else(|| ROOT.to_string());
        if !node::is_valid_node(&node::resolve(&dbpath, &cursor)) {
            return err_at!(Corrupt, msg: "current node {:?} missing under {:?}", cursor, dbpath);
        }
        Ok(Database { dbpath, cursor, _lock: None })
    }

    /// Close the handle, releasing the advisory lock (if held). Never fails.
    pub fn close(self) {
        // Dropping `self` releases `_lock`.
    }

    /// The node-path the next operation targets.
    pub fn current(&self) -> &str {
        &self.cursor
    }

    fn dir(&self) -> PathBuf {
        node::resolve(&self.dbpath, &self.cursor)
    }

    fn move_to(&mut self, node_path: String) -> Result<()> {
        history::append(&self.dbpath, &node_path)?;
        self.cursor = node_path;
        Ok(())
    }

    /// Create a child `name` under the current node, with payload `message`,
    /// move the cursor to it, and record it in history and the index. A
    /// `history::append` failure after the node directory is created is a hard
    /// failure; a failure to add the entry to `index` is only a warning.
    pub fn push(&mut self, name: &str, message: &str) -> Result<()> {
        node::validate_name(name)?;
        let child_dir = self.dir().join(name);
        node::create(&child_dir, message)?;

        let child_path = format!("{}/{}", self.cursor, name);

        // Mutation order follows frm_push: tree, then history (hard failure),
        // then index (warning only — it is a derivable hint, not a source of
        // truth).
        history::append(&self.dbpath, &child_path)?;

        if let Err(err) = index::add(&self.dbpath, &child_path) {
            log::warn!("push: failed to add {:?} to index: {}", child_path, err);
        }

        self.cursor = child_path;

        Ok(())
    }

    /// Move up one level, then recursively delete the node the cursor just left.
    pub fn pop(&mut self) -> Result<()> {
        let old_path = self.cursor.clone();
        self.up()?;
        self.delete(&old_path)
    }

    /// Move the cursor to the parent of the current node.
    pub fn up(&mut self) -> Result<()> {
        if self.cursor == ROOT {
            return err_at!(AtRoot, msg: "already at root");
        }
        let parent = match self.cursor.rsplit_once('/') {
            Some((parent, _)) => parent.to_string(),
            None => ROOT.to_string(),
        };
        self.move_to(parent)
    }

    /// Move the cursor to a child of the current node.
    pub fn down(&mut self, name: &str) -> Result<()> {
        let target_dir = self.dir().join(name);
        if !node::is_valid_node(&target_dir) {
            return err_at!(NotFound, msg: "no node {:?} under {:?}", name, self.cursor);
        }
        let target_path = format!("{}/{}", self.cursor, name);
        self.move_to(target_path)
    }

    /// Move the cursor to `node_path`, given relative to `dbpath`.
    pub fn switch(&mut self, node_path: &str) -> Result<()> {
        let target_dir = node::resolve(&self.dbpath, node_path);
        if !node::is_valid_node(&target_dir) {
            return err_at!(NotFound, msg: "no node at {:?}", node_path);
        }
        self.move_to(node_path.to_string())
    }

    /// Recursively delete the subtree rooted at `node_path`. If the cursor is
    /// inside the deleted subtree, it falls back to `root` (recorded in
    /// history). Failure to remove a non-present index entry is a warning, not
    /// a hard failure.
    pub fn delete(&mut self, node_path: &str) -> Result<()> {
        if node_path == ROOT {
            return err_at!(CannotDeleteRoot, msg: "cannot delete root");
        }
        let target_dir = node::resolve(&self.dbpath, node_path);
        if !target_dir.is_dir() {
            return err_at!(NotFound, msg: "no node at {:?}", node_path);
        }

        node::remove_recursive(&target_dir)?;

        if let Err(err) = index::remove(&self.dbpath, node_path) {
            log::warn!("delete: failed to remove {:?} from index: {}", node_path, err);
        }

        let cursor_is_under_deleted =
            self.cursor == node_path || self.cursor.starts_with(&format!("{}/", node_path));
        if cursor_is_under_deleted {
            self.move_to(ROOT.to_string())?;
        }

        Ok(())
    }

    /// The current node's payload text.
    pub fn payload_read(&self) -> Result<String> {
        node::read_payload(&self.dir())
    }

    /// Overwrite the current node's payload and bump `info.mtime`.
    pub fn payload_replace(&self, text: &str) -> Result<()> {
        node::replace_payload(&self.dir(), text)
    }

    /// Append to the current node's payload (separated by `\n`) and bump
    /// `info.mtime`.
    pub fn payload_append(&self, text: &str) -> Result<()> {
        node::append_payload(&self.dir(), text)
    }

    /// Current node-path, payload, and `mtime` formatted as local time.
    pub fn status(&self) -> Result<Status> {
        let dir = self.dir();
        let payload = node::read_payload(&dir)?;
        let mtime = node::read_mtime(&dir)?;
        let local_time = match Local.timestamp_opt(mtime as i64, 0) {
            chrono::LocalResult::Single(dt) => dt.to_string(),
            _ => return err_at!(Corrupt, msg: "unrepresentable mtime {} for {:?}", mtime, dir),
        };
        Ok(Status { current: self.cursor.clone(), payload, mtime, mtime_local: local_time })
    }

    /// Index entries whose node-path contains the current node-path as a
    /// substring (subtree listing).
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = index::read(&self.dbpath)?;
        Ok(search::filter(&entries, "", &self.cursor, search::MatchFlags::empty())
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    /// Index entries scoped to the current node-path that also match `sterm`.
    pub fn match_(&self, sterm: &str, flags: search::MatchFlags) -> Result<Vec<String>> {
        let entries = index::read(&self.dbpath)?;
        Ok(search::filter(&entries, sterm, &self.cursor, flags)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    /// Same as [`match_`](Database::match_), scoped to `root` instead of the
    /// current node.
    pub fn match_from_root(&self, sterm: &str, flags: search::MatchFlags) -> Result<Vec<String>> {
        let entries = index::read(&self.dbpath)?;
        Ok(search::filter(&entries, sterm, ROOT, flags)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    /// Newest-first history entries, as text. `count = None` returns every
    /// entry. Never fails; a missing history file reads as empty.
    pub fn history(&self, count: Option<usize>) -> Result<String> {
        history::read(&self.dbpath, count)
    }
}

/// Result of [`Database::status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub current: String,
    pub payload: String,
    pub mtime: u64,
    pub mtime_local: String,
}

#[cfg(test)]
#[path = "db_test.rs"]
mod db_test;
