//! SQLite-backed word store.
//!
//! One table, one row per tracked word. The store owns a single connection
//! and is passed explicitly into every operation that needs it. Counters
//! only ever move up: the upsert either creates a row or increments
//! `added_count`, and nothing but an explicit delete removes a row.

use crate::error::Result;
use rusqlite::{params, Connection};
use std::path::Path;

const SCHEMA_SQL: &str = "
CREATE TABLE word (
    word TEXT PRIMARY KEY,
    zh_trans TEXT,
    added_count INTEGER,
    lookup_count INTEGER
);
";

/// One persisted word and its counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub word: String,
    /// Optional translation; never touched by the upsert.
    pub zh_trans: Option<String>,
    /// Times the word was explicitly re-added after creation.
    pub added_count: i64,
    /// Reserved counter; read but never written by any exposed operation.
    pub lookup_count: i64,
}

/// What the upsert did for a given word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new record was created.
    Created,
    /// The record existed; `added_count` was incremented.
    Incremented,
}

/// Handle to the word database.
pub struct WordStore {
    conn: Connection,
}

impl WordStore {
    /// Open (or create) the database file. Does not create the schema;
    /// that is the `init` action's job.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.apply_pragmas()?;
        Ok(store)
    }

    fn apply_pragmas(&self) -> Result<()> {
        self.conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        Ok(())
    }

    /// Create the `word` table. Fails if the schema already exists.
    pub fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA_SQL)?;
        Ok(())
    }

    fn count_word(&self, word: &str) -> Result<i64> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM word WHERE word = ?1",
            params![word],
            |row| row.get::<_, i64>(0),
        )?;
        Ok(count)
    }

    /// Add-or-increment upsert.
    ///
    /// A new record starts with `added_count = 0`, matching the historical
    /// behavior of the tool; only re-adds increment the counter. Existing
    /// translations are left alone.
    pub fn add_word(&self, word: &str) -> Result<AddOutcome> {
        if self.count_word(word)? == 0 {
            self.conn.execute(
                "INSERT INTO word (word, zh_trans, added_count, lookup_count)
                 VALUES (?1, NULL, 0, 0)",
                params![word],
            )?;
            Ok(AddOutcome::Created)
        } else {
            self.conn.execute(
                "UPDATE word SET added_count = added_count + 1 WHERE word = ?1",
                params![word],
            )?;
            Ok(AddOutcome::Incremented)
        }
    }

    /// Delete a word if present. Returns whether a row was removed;
    /// deleting an absent word is not an error.
    pub fn delete_word(&self, word: &str) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM word WHERE word = ?1", params![word])?;
        Ok(affected > 0)
    }

    /// All records in primary-key order.
    pub fn list_words(&self) -> Result<Vec<WordRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT word, zh_trans, added_count, lookup_count FROM word ORDER BY word",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(WordRecord {
                word: row.get(0)?,
                zh_trans: row.get(1)?,
                added_count: row.get::<_, Option<i64>>(2)?.unwrap_or(0),
                lookup_count: row.get::<_, Option<i64>>(3)?.unwrap_or(0),
            })
        })?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}
