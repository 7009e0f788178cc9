use super::{AccountRow, SalesRepRow, SalesStore};
use crate::{
    config::BookConfig,
    error::{BookError, BookResult},
    graph::SalesGraph,
    types::{AccountId, MarketSegmentId, RowId, SalesRepId},
};
use rusqlite::params;
use std::collections::HashMap;

impl SalesStore {
    // ── Save ───────────────────────────────────────────────────

    /// Replace the stored graph with `graph`, in one transaction.
    ///
    /// Accounts are written parents-first so `parent_id` always points at
    /// an earlier row. Rep assignment is taken from the account side.
    pub fn save_graph(&mut self, graph: &SalesGraph) -> BookResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute_batch(
            "DELETE FROM market_segment_account;
             DELETE FROM account;
             DELETE FROM market_segment;
             DELETE FROM sales_rep;",
        )?;

        let mut rep_rows: HashMap<SalesRepId, RowId> = HashMap::new();
        let mut segment_rows: HashMap<MarketSegmentId, RowId> = HashMap::new();
        let mut account_rows: HashMap<AccountId, RowId> = HashMap::new();

        for (next, (id, rep)) in (1..).zip(graph.iter_sales_reps()) {
            tx.execute(
                "INSERT INTO sales_rep (id, first_name, last_name) VALUES (?1, ?2, ?3)",
                params![next, rep.first_name(), rep.last_name()],
            )?;
            rep_rows.insert(id, next);
        }

        for (next, (id, segment)) in (1..).zip(graph.iter_market_segments()) {
            tx.execute(
                "INSERT INTO market_segment (id, name) VALUES (?1, ?2)",
                params![next, segment.name()],
            )?;
            segment_rows.insert(id, next);
        }

        let mut ordered = Vec::new();
        for root in graph.roots() {
            ordered.extend(graph.walk(root)?.into_iter().map(|(_, id)| id));
        }
        for (next, id) in (1..).zip(ordered.iter().copied()) {
            let account = graph.account(id)?;
            let sales_rep_id = account.sales_rep().and_then(|r| rep_rows.get(&r).copied());
            let parent_id = account.parent().and_then(|p| account_rows.get(&p).copied());
            tx.execute(
                "INSERT INTO account (id, sales_rep_id, name, parent_id) VALUES (?1, ?2, ?3, ?4)",
                params![next, sales_rep_id, account.name(), parent_id],
            )?;
            account_rows.insert(id, next);
        }

        for id in &ordered {
            let account_id = account_rows[id];
            for segment in graph.account(*id)?.market_segments() {
                let segment_id = segment_rows.get(segment).copied().ok_or_else(|| {
                    BookError::CorruptStore(format!("segment {segment:?} missing from graph"))
                })?;
                tx.execute(
                    "INSERT INTO market_segment_account (market_segment_id, account_id)
                     VALUES (?1, ?2)",
                    params![segment_id, account_id],
                )?;
            }
        }

        tx.commit()?;
        log::info!(
            "saved graph: {} reps, {} segments, {} accounts",
            rep_rows.len(),
            segment_rows.len(),
            account_rows.len()
        );
        Ok(())
    }

    // ── Load ───────────────────────────────────────────────────

    /// Rebuild a graph from the store through the normal mutators.
    /// The returned graph starts with an empty journal.
    pub fn load_graph(&self, config: BookConfig) -> BookResult<SalesGraph> {
        let mut graph = SalesGraph::new(config);

        let mut reps: HashMap<RowId, SalesRepId> = HashMap::new();
        for row in self.sales_rep_rows()? {
            reps.insert(row.id, graph.create_sales_rep(row.first_name, row.last_name));
        }

        let mut segments: HashMap<RowId, MarketSegmentId> = HashMap::new();
        for (id, name) in self.market_segment_rows()? {
            segments.insert(id, graph.create_market_segment(name));
        }

        let mut accounts: HashMap<RowId, AccountId> = HashMap::new();
        for row in self.account_rows()? {
            let account = graph.create_account(row.name);
            if let Some(parent_id) = row.parent_id {
                let parent = accounts.get(&parent_id).copied().ok_or_else(|| {
                    BookError::CorruptStore(format!(
                        "account {} references later or missing parent {parent_id}",
                        row.id
                    ))
                })?;
                graph.add_child(parent, account)?;
            }
            if let Some(rep_id) = row.sales_rep_id {
                let rep = reps.get(&rep_id).copied().ok_or_else(|| {
                    BookError::CorruptStore(format!("account {} references rep {rep_id}", row.id))
                })?;
                graph.set_sales_rep(account, Some(rep))?;
            }
            accounts.insert(row.id, account);
        }

        let mut memberships: Vec<(AccountId, Vec<MarketSegmentId>)> = Vec::new();
        for (account_id, segment_id) in self.membership_rows()? {
            let account = accounts.get(&account_id).copied().ok_or_else(|| {
                BookError::CorruptStore(format!("membership references account {account_id}"))
            })?;
            let segment = segments.get(&segment_id).copied().ok_or_else(|| {
                BookError::CorruptStore(format!("membership references segment {segment_id}"))
            })?;
            match memberships.iter_mut().find(|(a, _)| *a == account) {
                Some((_, list)) => list.push(segment),
                None => memberships.push((account, vec![segment])),
            }
        }
        for (account, list) in memberships {
            graph.set_market_segments(account, &list)?;
        }

        graph.drain_events();
        log::info!(
            "loaded graph: {} reps, {} segments, {} accounts",
            reps.len(),
            segments.len(),
            accounts.len()
        );
        Ok(graph)
    }

    fn sales_rep_rows(&self) -> BookResult<Vec<SalesRepRow>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, first_name, last_name FROM sales_rep ORDER BY id ASC")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SalesRepRow {
                    id: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn market_segment_rows(&self) -> BookResult<Vec<(RowId, String)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM market_segment ORDER BY id ASC")?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn account_rows(&self) -> BookResult<Vec<AccountRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, sales_rep_id, name, parent_id FROM account ORDER BY id ASC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(AccountRow {
                    id: row.get(0)?,
                    sales_rep_id: row.get(1)?,
                    name: row.get(2)?,
                    parent_id: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn membership_rows(&self) -> BookResult<Vec<(RowId, RowId)>> {
        let mut stmt = self.conn.prepare(
            "SELECT account_id, market_segment_id FROM market_segment_account ORDER BY id ASC",
        )?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}
