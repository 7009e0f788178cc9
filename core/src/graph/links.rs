//! Bidirectional link primitives.
//!
//! These are the only functions that touch both ends of a relationship.

use super::SalesGraph;
use crate::{
    config::RepReassignment,
    error::{BookError, BookResult},
    event::RelationshipEvent,
    types::{AccountId, MarketSegmentId, SalesRepId},
};

/// Outcome of asking a segment to take an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentLink {
    Linked,
    AlreadyMember,
    /// Another account with the same name already sits in the segment, or
    /// the account already holds a namesake segment under name dedup.
    Refused,
}

impl SalesGraph {
    pub(crate) fn link_segment(
        &mut self,
        account: AccountId,
        segment: MarketSegmentId,
    ) -> BookResult<SegmentLink> {
        let account_name = self.account(account)?.name.clone();
        let seg = self.segment(segment)?;
        let segment_name = seg.name.clone();

        // Segment membership is keyed by account name.
        let holder = seg.accounts.iter().copied().find(|&member| {
            self.accounts
                .get(member.0)
                .is_some_and(|a| a.name == account_name)
        });

        let namesake_held = self
            .account(account)?
            .market_segments
            .iter()
            .any(|&held| held != segment && self.same_segment(held, segment));

        if matches!(holder, Some(member) if member != account) || namesake_held {
            log::warn!("segment '{segment_name}' refused account '{account_name}'");
            self.record(RelationshipEvent::SegmentRefused {
                account: account_name,
                segment: segment_name,
            });
            return Ok(SegmentLink::Refused);
        }

        if holder.is_none() {
            self.segment_mut(segment)?.accounts.push(account);
        }
        let held = &mut self.account_mut(account)?.market_segments;
        if !held.contains(&segment) {
            held.push(segment);
        }

        if holder.is_some() {
            return Ok(SegmentLink::AlreadyMember);
        }
        self.record(RelationshipEvent::SegmentLinked {
            account: account_name,
            segment: segment_name,
        });
        Ok(SegmentLink::Linked)
    }

    pub(crate) fn unlink_segment(
        &mut self,
        account: AccountId,
        segment: MarketSegmentId,
    ) -> BookResult<()> {
        let account_name = self.account(account)?.name.clone();
        let seg = self.segment_mut(segment)?;
        let Some(pos) = seg.accounts.iter().position(|&a| a == account) else {
            return Err(BookError::AccountNotInSegment {
                account: account_name,
                segment: seg.name.clone(),
            });
        };
        seg.accounts.remove(pos);
        let segment_name = seg.name.clone();

        self.account_mut(account)?
            .market_segments
            .retain(|&s| s != segment);
        self.record(RelationshipEvent::SegmentUnlinked {
            account: account_name,
            segment: segment_name,
        });
        Ok(())
    }

    /// Append `account` to `rep` and point the account at the rep.
    /// No duplicate check on the rep side.
    pub(crate) fn link_rep(&mut self, account: AccountId, rep: SalesRepId) -> BookResult<()> {
        let account_name = self.account(account)?.name.clone();
        let rep_name = self.rep(rep)?.to_string();

        if self.config().rep_reassignment == RepReassignment::Transfer {
            if let Some(previous) = self.account(account)?.sales_rep {
                if previous != rep {
                    self.detach_from_rep(account, previous)?;
                }
            }
        }

        self.rep_mut(rep)?.accounts.push(account);
        self.account_mut(account)?.sales_rep = Some(rep);
        self.record(RelationshipEvent::RepLinked {
            account: account_name,
            rep: rep_name,
        });
        Ok(())
    }

    /// Remove the first entry for `account` from `rep`. The account's own
    /// field is cleared only if it still points at this rep.
    pub(crate) fn unlink_rep(&mut self, account: AccountId, rep: SalesRepId) -> BookResult<()> {
        if !self.rep(rep)?.accounts.contains(&account) {
            return Err(BookError::AccountNotAssigned {
                account: self.account(account)?.name.clone(),
                rep: self.rep(rep)?.to_string(),
            });
        }
        self.detach_from_rep(account, rep)
    }

    fn detach_from_rep(&mut self, account: AccountId, rep: SalesRepId) -> BookResult<()> {
        let account_name = self.account(account)?.name.clone();
        let r = self.rep_mut(rep)?;
        if let Some(pos) = r.accounts.iter().position(|&a| a == account) {
            r.accounts.remove(pos);
        }
        let rep_name = r.to_string();

        let acct = self.account_mut(account)?;
        if acct.sales_rep == Some(rep) {
            acct.sales_rep = None;
        }
        self.record(RelationshipEvent::RepUnlinked {
            account: account_name,
            rep: rep_name,
        });
        Ok(())
    }
}
