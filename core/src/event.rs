//! Relationship journal.
//!
//! Every change the graph makes to a link is recorded here, in order.
//! Events carry names rather than ids so they stay readable once persisted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RelationshipEvent {
    // ── Account ↔ MarketSegment ────────────────────
    SegmentLinked {
        account: String,
        segment: String,
    },
    SegmentUnlinked {
        account: String,
        segment: String,
    },
    /// The segment already holds a different account with this name.
    SegmentRefused {
        account: String,
        segment: String,
    },

    // ── Account ↔ SalesRep ─────────────────────────
    RepLinked {
        account: String,
        rep: String,
    },
    RepUnlinked {
        account: String,
        rep: String,
    },

    // ── Hierarchy ──────────────────────────────────
    ChildAttached {
        parent: String,
        child: String,
    },
}

impl RelationshipEvent {
    /// Stable name stored in the `event_type` column.
    pub fn event_type(&self) -> &'static str {
        match self {
            RelationshipEvent::SegmentLinked { .. }   => "segment_linked",
            RelationshipEvent::SegmentUnlinked { .. } => "segment_unlinked",
            RelationshipEvent::SegmentRefused { .. }  => "segment_refused",
            RelationshipEvent::RepLinked { .. }       => "rep_linked",
            RelationshipEvent::RepUnlinked { .. }     => "rep_unlinked",
            RelationshipEvent::ChildAttached { .. }   => "child_attached",
        }
    }
}
