//! SQLite persistence layer.
//!
//! RULE: only the store talks to the database.
//! The graph never executes SQL; the store never bypasses the graph's
//! mutators when rebuilding it.

use crate::{error::BookResult, types::RowId};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

mod graph;
mod journal;
mod segment;

pub struct SalesStore {
    conn: Connection,
}

impl SalesStore {
    /// Open (or create) the sales book database at `path`.
    pub fn open(path: &str) -> BookResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode only for real files; :memory: ignores it.
        if let Err(e) = conn.execute_batch("PRAGMA journal_mode=WAL;") {
            log::debug!("WAL mode not enabled for {path}: {e}");
        }
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> BookResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> BookResult<()> {
        self.conn
            .execute_batch(include_str!("../../../migrations/001_sales_book.sql"))?;
        Ok(())
    }
}

/// One row of the "accounts in segment" query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentAccountRow {
    pub account_name: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone)]
struct SalesRepRow {
    id: RowId,
    first_name: String,
    last_name: String,
}

#[derive(Debug, Clone)]
struct AccountRow {
    id: RowId,
    sales_rep_id: Option<RowId>,
    name: String,
    parent_id: Option<RowId>,
}
