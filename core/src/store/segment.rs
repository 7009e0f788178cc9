use super::{SalesStore, SegmentAccountRow};
use crate::{error::BookResult, types::RowId};
use rusqlite::{params, OptionalExtension};

impl SalesStore {
    // ── Market segment queries ─────────────────────────────────

    pub fn market_segment_id(&self, name: &str) -> BookResult<Option<RowId>> {
        let id = self
            .conn
            .query_row(
                "SELECT id FROM market_segment WHERE name = ?1 ORDER BY id ASC LIMIT 1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(id)
    }

    /// Accounts in a segment together with their rep's name.
    /// Accounts without a rep are not returned.
    pub fn accounts_in_segment(&self, market_segment_id: RowId) -> BookResult<Vec<SegmentAccountRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT account.name, sales_rep.first_name, sales_rep.last_name
             FROM account
             JOIN sales_rep
               ON account.sales_rep_id = sales_rep.id
             JOIN market_segment_account
               ON account.id = market_segment_account.account_id
             WHERE market_segment_account.market_segment_id = ?1
             ORDER BY market_segment_account.id ASC",
        )?;
        let rows = stmt
            .query_map(params![market_segment_id], |row| {
                Ok(SegmentAccountRow {
                    account_name: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn membership_count(&self) -> BookResult<i64> {
        Ok(self.conn.query_row(
            "SELECT COUNT(*) FROM market_segment_account",
            [],
            |r| r.get(0),
        )?)
    }
}
