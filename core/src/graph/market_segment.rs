use super::{SalesGraph, SegmentLink};
use crate::{
    error::BookResult,
    types::{AccountId, MarketSegmentId},
};

impl SalesGraph {
    // ── MarketSegment ──────────────────────────────────────────

    /// Add `account` to `segment` unless a member with the same name is
    /// already there. Idempotent. The segment is also recorded on the
    /// account so both sides agree.
    pub fn add_account_to_segment(
        &mut self,
        segment: MarketSegmentId,
        account: AccountId,
    ) -> BookResult<SegmentLink> {
        self.link_segment(account, segment)
    }

    /// Fails with `AccountNotInSegment` if `account` is not a member.
    pub fn remove_account_from_segment(
        &mut self,
        segment: MarketSegmentId,
        account: AccountId,
    ) -> BookResult<()> {
        self.unlink_segment(account, segment)
    }

    pub fn accounts_in_segment(&self, segment: MarketSegmentId) -> BookResult<&[AccountId]> {
        Ok(self.segment(segment)?.accounts())
    }
}
