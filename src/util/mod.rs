//! Small utilities shared by the core and the `frm` binary.

pub mod files;

/// Resolve the database path: explicit `--dbpath`, else `$FRAMEDB_PATH`, else
/// `$HOME/.framedb`.
pub fn resolve_dbpath(explicit: Option<std::ffi::OsString>) -> crate::Result<std::path::PathBuf> {
    use crate::err_at;

    if let Some(path) = explicit {
        return Ok(std::path::PathBuf::from(path));
    }
    if let Ok(path) = std::env::var("FRAMEDB_PATH") {
        return Ok(std::path::PathBuf::from(path));
    }
    match dirs::home_dir() {
        Some(home) => Ok(home.join(".framedb")),
        None => err_at!(Fatal, msg: "no --dbpath given and $HOME is not set"),
    }
}
