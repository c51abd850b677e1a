//! SQLite-backed key-value store.
//!
//! The persistence layer is deliberately opaque: string keys to
//! JSON-text-encoded values, the browser-local-storage shape the rest of
//! the crate is written against. Absence of a key means "no data".

use rusqlite::{params, Connection};

use super::data_dir;

/// SQLite database holding the key-value table.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/lifegrid/lifegrid.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let path = data_dir()?.join("lifegrid.db");
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, Box<dyn std::error::Error>> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Remove a key. Missing keys are a no-op.
    pub fn kv_delete(&self, key: &str) -> Result<(), rusqlite::Error> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    /// Purge every stored key. Used by logout.
    pub fn kv_clear(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute("DELETE FROM kv", [])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kv_store() {
        let db = Database::open_memory().unwrap();
        assert!(db.kv_get("test").unwrap().is_none());
        db.kv_set("test", "hello").unwrap();
        assert_eq!(db.kv_get("test").unwrap().unwrap(), "hello");
    }

    #[test]
    fn delete_missing_key_is_noop() {
        let db = Database::open_memory().unwrap();
        db.kv_delete("absent").unwrap();
        assert!(db.kv_get("absent").unwrap().is_none());
    }

    #[test]
    fn clear_removes_everything() {
        let db = Database::open_memory().unwrap();
        db.kv_set("a", "1").unwrap();
        db.kv_set("b", "2").unwrap();
        db.kv_clear().unwrap();
        assert!(db.kv_get("a").unwrap().is_none());
        assert!(db.kv_get("b").unwrap().is_none());
    }
}
