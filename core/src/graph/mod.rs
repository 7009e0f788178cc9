//! The relationship graph.
//!
//! RULE: only `links.rs` writes relationship fields on both sides.
//! Every public mutator in this module tree goes through those primitives,
//! so a rep/segment/account pair is never left half-linked.

use crate::{
    config::{BookConfig, SegmentDedup},
    entity::{Account, MarketSegment, SalesRep},
    error::{BookError, BookResult},
    event::RelationshipEvent,
    types::{AccountId, MarketSegmentId, SalesRepId},
};
use generational_arena::Arena;

mod account;
mod links;
mod market_segment;
mod sales_rep;

pub use links::SegmentLink;

#[derive(Debug)]
pub struct SalesGraph {
    config: BookConfig,
    reps: Arena<SalesRep>,
    segments: Arena<MarketSegment>,
    accounts: Arena<Account>,
    journal: Vec<RelationshipEvent>,
}

impl Default for SalesGraph {
    fn default() -> Self {
        Self::new(BookConfig::default())
    }
}

impl SalesGraph {
    pub fn new(config: BookConfig) -> Self {
        Self {
            config,
            reps: Arena::new(),
            segments: Arena::new(),
            accounts: Arena::new(),
            journal: Vec::new(),
        }
    }

    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    // ── Construction ───────────────────────────────────────────

    pub fn create_sales_rep(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> SalesRepId {
        SalesRepId(self.reps.insert(SalesRep {
            first_name: first_name.into(),
            last_name: last_name.into(),
            accounts: Vec::new(),
        }))
    }

    pub fn create_market_segment(&mut self, name: impl Into<String>) -> MarketSegmentId {
        MarketSegmentId(self.segments.insert(MarketSegment {
            name: name.into(),
            accounts: Vec::new(),
        }))
    }

    /// Create an unattached (root) account with no rep and no segments.
    pub fn create_account(&mut self, name: impl Into<String>) -> AccountId {
        AccountId(self.accounts.insert(Account::new(name.into())))
    }

    // ── Lookup ─────────────────────────────────────────────────

    pub fn rep(&self, id: SalesRepId) -> BookResult<&SalesRep> {
        self.reps.get(id.0).ok_or(BookError::UnknownSalesRep(id))
    }

    pub fn segment(&self, id: MarketSegmentId) -> BookResult<&MarketSegment> {
        self.segments
            .get(id.0)
            .ok_or(BookError::UnknownMarketSegment(id))
    }

    pub fn account(&self, id: AccountId) -> BookResult<&Account> {
        self.accounts.get(id.0).ok_or(BookError::UnknownAccount(id))
    }

    pub(crate) fn rep_mut(&mut self, id: SalesRepId) -> BookResult<&mut SalesRep> {
        self.reps.get_mut(id.0).ok_or(BookError::UnknownSalesRep(id))
    }

    pub(crate) fn segment_mut(&mut self, id: MarketSegmentId) -> BookResult<&mut MarketSegment> {
        self.segments
            .get_mut(id.0)
            .ok_or(BookError::UnknownMarketSegment(id))
    }

    pub(crate) fn account_mut(&mut self, id: AccountId) -> BookResult<&mut Account> {
        self.accounts
            .get_mut(id.0)
            .ok_or(BookError::UnknownAccount(id))
    }

    /// First segment with this exact name, in creation order.
    pub fn find_market_segment(&self, name: &str) -> Option<MarketSegmentId> {
        self.segments
            .iter()
            .find(|(_, s)| s.name == name)
            .map(|(idx, _)| MarketSegmentId(idx))
    }

    pub fn iter_sales_reps(&self) -> impl Iterator<Item = (SalesRepId, &SalesRep)> + '_ {
        self.reps.iter().map(|(idx, r)| (SalesRepId(idx), r))
    }

    pub fn iter_market_segments(
        &self,
    ) -> impl Iterator<Item = (MarketSegmentId, &MarketSegment)> + '_ {
        self.segments.iter().map(|(idx, s)| (MarketSegmentId(idx), s))
    }

    pub fn iter_accounts(&self) -> impl Iterator<Item = (AccountId, &Account)> + '_ {
        self.accounts.iter().map(|(idx, a)| (AccountId(idx), a))
    }

    /// Accounts without a parent, in creation order.
    pub fn roots(&self) -> Vec<AccountId> {
        self.iter_accounts()
            .filter(|(_, a)| !a.is_child())
            .map(|(id, _)| id)
            .collect()
    }

    /// Whether two segments count as the same under the configured key.
    pub fn same_segment(&self, a: MarketSegmentId, b: MarketSegmentId) -> bool {
        if a == b {
            return true;
        }
        match self.config.segment_dedup {
            SegmentDedup::Identity => false,
            SegmentDedup::Name => match (self.segments.get(a.0), self.segments.get(b.0)) {
                (Some(x), Some(y)) => x.name == y.name,
                _ => false,
            },
        }
    }

    // ── Journal ────────────────────────────────────────────────

    pub fn events(&self) -> &[RelationshipEvent] {
        &self.journal
    }

    /// Hand the recorded events to the caller and clear the journal.
    pub fn drain_events(&mut self) -> Vec<RelationshipEvent> {
        std::mem::take(&mut self.journal)
    }

    pub(crate) fn record(&mut self, event: RelationshipEvent) {
        log::debug!("relationship: {event:?}");
        self.journal.push(event);
    }
}
