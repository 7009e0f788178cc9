use super::SalesStore;
use crate::{
    error::{BookError, BookResult},
    event::RelationshipEvent,
};
use rusqlite::params;

impl SalesStore {
    // ── Relationship log ───────────────────────────────────────

    pub fn append_events(&mut self, events: &[RelationshipEvent]) -> BookResult<()> {
        let tx = self.conn.transaction()?;
        for event in events {
            tx.execute(
                "INSERT INTO relationship_log (event_type, payload) VALUES (?1, ?2)",
                params![event.event_type(), serde_json::to_string(event)?],
            )?;
        }
        tx.commit()?;
        log::debug!("appended {} relationship events", events.len());
        Ok(())
    }

    pub fn events(&self) -> BookResult<Vec<RelationshipEvent>> {
        let mut stmt = self
            .conn
            .prepare("SELECT payload FROM relationship_log ORDER BY id ASC")?;
        let payloads = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        payloads
            .iter()
            .map(|p| serde_json::from_str::<RelationshipEvent>(p).map_err(BookError::from))
            .collect()
    }

    pub fn event_count(&self, event_type: &str) -> BookResult<i64> {
        Ok(self.conn.query_row(
            "SELECT COUNT(*) FROM relationship_log WHERE event_type = ?1",
            params![event_type],
            |r| r.get(0),
        )?)
    }
}
