//! Durable storage for words and high scores
//!
//! Both collections live in one embedded SQLite file. A [`Database`] is the
//! single storage handle for the process: it is opened once, owned by the
//! menu loop and lent to the word and score stores for each operation.

mod scores;
mod words;

pub use scores::{HIGH_SCORE_LIMIT, ScoreEntry, ScoreStore};
pub use words::WordStore;

use log::{debug, info};
use rusqlite::Connection;
use std::path::Path;
use thiserror::Error;

/// Database file used when no path is configured
pub const DEFAULT_DATABASE: &str = "words.db";

/// Errors raised by the word and score stores
#[derive(Debug, Error)]
pub enum StoreError {
    /// A random word was requested but the word store holds none
    #[error("there are no words in the word store")]
    EmptyStore,

    /// Opening, reading or writing the database failed
    #[error("storage failure: {0}")]
    Persistence(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Process-wide handle to the game database
///
/// Dropping the handle closes the underlying connection, so storage is
/// released on every exit path. [`Database::close`] does the same but reports
/// failures.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (creating if absent) the database file at `path`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        info!("Opened database at {}", path.display());
        Ok(Self { conn })
    }

    /// Open a private in-memory database
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] if SQLite cannot allocate it.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        debug!("Opened in-memory database");
        Ok(Self { conn })
    }

    /// Ensure both the word and score collections exist
    ///
    /// Safe to call on every startup.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] if a table cannot be created.
    pub fn ensure_schema(&self) -> Result<()> {
        self.words().ensure_schema()?;
        self.scores().ensure_schema()?;
        Ok(())
    }

    /// View of the word collection
    #[must_use]
    pub const fn words(&self) -> WordStore<'_> {
        WordStore::new(&self.conn)
    }

    /// View of the score collection
    #[must_use]
    pub const fn scores(&self) -> ScoreStore<'_> {
        ScoreStore::new(&self.conn)
    }

    /// Close the database, reporting any failure to release it
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] if SQLite refuses to close.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| err)?;
        info!("Closed database");
        Ok(())
    }

    #[cfg(test)]
    pub(crate) const fn conn_for_tests(&self) -> &Connection {
        &self.conn
    }
}
