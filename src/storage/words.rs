//! Word store: the playable word collection

use super::{Result, StoreError};
use crate::core::Word;
use log::debug;
use rand::Rng;
use rusqlite::{Connection, params};

/// Read-only view of the `words` table
///
/// Words are provisioned outside the game; the store only ever reads them.
#[derive(Debug, Clone, Copy)]
pub struct WordStore<'db> {
    conn: &'db Connection,
}

impl<'db> WordStore<'db> {
    pub(crate) const fn new(conn: &'db Connection) -> Self {
        Self { conn }
    }

    /// Create the `words` table if it does not exist
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] on any SQLite failure.
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn
            .execute_batch("CREATE TABLE IF NOT EXISTS words (word TEXT)")?;
        Ok(())
    }

    /// Number of stored words
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] on any SQLite failure.
    pub fn count(&self) -> Result<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM words WHERE word IS NOT NULL",
            [],
            |row| row.get(0),
        )?;
        Ok(count.max(0) as u64)
    }

    /// Pick one stored word uniformly at random
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyStore`] when no words are stored, or
    /// [`StoreError::Persistence`] on any SQLite failure.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word> {
        let count = self.count()?;
        if count == 0 {
            return Err(StoreError::EmptyStore);
        }

        let offset = rng.random_range(0..count);
        let text: String = self.conn.query_row(
            "SELECT word FROM words WHERE word IS NOT NULL LIMIT 1 OFFSET ?1",
            params![offset as i64],
            |row| row.get(0),
        )?;
        debug!("Drew word #{offset} of {count}");

        Ok(Word::new(text))
    }

    #[cfg(test)]
    pub(crate) fn insert_all(&self, words: &[&str]) -> Result<()> {
        for word in words {
            self.conn
                .execute("INSERT INTO words (word) VALUES (?1)", params![word])?;
        }
        Ok(())
    }
}
