//! Score store: the append-only high score table

use super::Result;
use log::debug;
use rusqlite::{Connection, params};
use std::fmt;

/// Number of entries shown on the high score table
pub const HIGH_SCORE_LIMIT: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    /// Name the player entered, stored unchanged
    pub name: String,
    /// Chances left when the word was completed
    pub score: i64,
}

impl ScoreEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.score)
    }
}

/// View of the `scores` table
#[derive(Debug, Clone, Copy)]
pub struct ScoreStore<'db> {
    conn: &'db Connection,
}

impl<'db> ScoreStore<'db> {
    pub(crate) const fn new(conn: &'db Connection) -> Self {
        Self { conn }
    }

    /// Create the `scores` table if it does not exist
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`](super::StoreError::Persistence) on
    /// any SQLite failure.
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn
            .execute_batch("CREATE TABLE IF NOT EXISTS scores (name TEXT, score INTEGER)")?;
        Ok(())
    }

    /// Append a score entry
    ///
    /// The connection runs in autocommit mode, so the entry is committed
    /// before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`](super::StoreError::Persistence) if
    /// the write fails.
    pub fn record(&self, name: &str, score: i64) -> Result<()> {
        self.conn.execute(
            "INSERT INTO scores (name, score) VALUES (?1, ?2)",
            params![name, score],
        )?;
        debug!("Recorded score {score} for {name:?}");
        Ok(())
    }

    /// Up to `limit` entries, highest score first
    ///
    /// Entries with equal scores keep the order they were recorded in. Rows
    /// edited outside the game with a `NULL` name or score read as an empty
    /// name or a score of zero.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`](super::StoreError::Persistence) if
    /// the read fails.
    pub fn top(&self, limit: usize) -> Result<Vec<ScoreEntry>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let mut stmt = self.conn.prepare(
            "
            SELECT name, score
            FROM scores
            ORDER BY score DESC, rowid ASC
            LIMIT ?1
            ",
        )?;

        let rows = stmt.query_map(params![limit], |row| {
            Ok(ScoreEntry {
                name: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
                score: row.get::<_, Option<i64>>(1)?.unwrap_or_default(),
            })
        })?;

        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }
}
