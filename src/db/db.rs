use anyhow::Result;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// A single short-lived connection to the task database.
///
/// Store operations open one of these, run their statement and drop it, so
/// no connection outlives the call that needed it.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens (creating if needed) the database file at `path`.
    pub fn open(path: &Path) -> Result<Db> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;

        Ok(Db { conn })
    }
}
