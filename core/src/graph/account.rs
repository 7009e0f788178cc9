use super::{SalesGraph, SegmentLink};
use crate::{
    error::{BookError, BookResult},
    event::RelationshipEvent,
    types::{AccountId, MarketSegmentId, SalesRepId},
};

impl SalesGraph {
    // ── Sales rep ──────────────────────────────────────────────

    pub fn sales_rep(&self, account: AccountId) -> BookResult<Option<SalesRepId>> {
        Ok(self.account(account)?.sales_rep)
    }

    /// Reassign the account's rep. The account leaves its current rep's
    /// list; `None` leaves it unassigned. Setting the current rep is a no-op.
    pub fn set_sales_rep(
        &mut self,
        account: AccountId,
        rep: Option<SalesRepId>,
    ) -> BookResult<()> {
        let current = self.account(account)?.sales_rep;
        if let Some(r) = rep {
            self.rep(r)?;
        }
        if current == rep {
            return Ok(());
        }
        if let Some(previous) = current {
            if self.rep(previous)?.accounts.contains(&account) {
                self.unlink_rep(account, previous)?;
            } else {
                self.account_mut(account)?.sales_rep = None;
            }
        }
        if let Some(r) = rep {
            self.link_rep(account, r)?;
        }
        Ok(())
    }

    // ── Market segments ────────────────────────────────────────

    /// Replace the account's segments with `segments`.
    ///
    /// Old memberships are detached first, then the input is attached in
    /// order. A segment that refuses the account is left out, and a segment
    /// matching one already attached under the configured dedup key is
    /// skipped. Refusal is decided before dedup, so under name dedup a
    /// refused segment does not shadow a later namesake that accepts.
    pub fn set_market_segments(
        &mut self,
        account: AccountId,
        segments: &[MarketSegmentId],
    ) -> BookResult<()> {
        self.account(account)?;
        for &s in segments {
            self.segment(s)?;
        }

        // Snapshot: unlinking shrinks the list we'd otherwise iterate.
        let previous = self.account(account)?.market_segments.clone();
        for segment in previous {
            self.unlink_segment(account, segment)?;
        }

        self.account_mut(account)?.market_segments.clear();
        for &segment in segments {
            let held = &self.account(account)?.market_segments;
            if held.iter().any(|&h| self.same_segment(h, segment)) {
                continue;
            }
            if self.link_segment(account, segment)? == SegmentLink::Refused {
                log::warn!(
                    "account '{}' left out of segment '{}'",
                    self.account(account)?.name,
                    self.segment(segment)?.name
                );
            }
        }
        Ok(())
    }

    // ── Hierarchy ──────────────────────────────────────────────

    /// Attach `child` under `parent`. A child is attached once and never
    /// re-parented.
    pub fn add_child(&mut self, parent: AccountId, child: AccountId) -> BookResult<()> {
        let parent_name = self.account(parent)?.name.clone();
        let child_acct = self.account(child)?;
        let child_name = child_acct.name.clone();

        if let Some(existing) = child_acct.parent {
            return Err(BookError::AlreadyAttached {
                child: child_name,
                parent: self.account(existing)?.name.clone(),
            });
        }
        if parent == child || self.ancestors(parent)?.contains(&child) {
            return Err(BookError::HierarchyCycle {
                child: child_name,
                parent: parent_name,
            });
        }

        self.account_mut(parent)?.children.push(child);
        self.account_mut(child)?.parent = Some(parent);
        self.record(RelationshipEvent::ChildAttached {
            parent: parent_name,
            child: child_name,
        });
        Ok(())
    }

    /// Create an account already attached to `parent`.
    ///
    /// Without an explicit rep the child takes the parent's current rep;
    /// with no segments it takes a copy of the parent's current segments.
    /// Defaults are resolved now; later changes to the parent do not flow
    /// down.
    ///
    /// Inherited segments must all take the child. If one already holds an
    /// account with the child's name, creation fails with `InheritedSegmentClash`
    /// and nothing is created.
    pub fn create_child_account(
        &mut self,
        parent: AccountId,
        name: impl Into<String>,
        sales_rep: Option<SalesRepId>,
        market_segments: &[MarketSegmentId],
    ) -> BookResult<AccountId> {
        let parent_acct = self.account(parent)?;
        let rep = sales_rep.or(parent_acct.sales_rep);
        let segments = if market_segments.is_empty() {
            parent_acct.market_segments.clone()
        } else {
            market_segments.to_vec()
        };
        if let Some(r) = rep {
            self.rep(r)?;
        }
        let name = name.into();
        for &s in &segments {
            let segment = self.segment(s)?;
            if !market_segments.is_empty() {
                continue;
            }
            let clash = segment.accounts.iter().any(|&member| {
                self.accounts.get(member.0).is_some_and(|a| a.name == name)
            });
            if clash {
                return Err(BookError::InheritedSegmentClash {
                    child: name,
                    segment: segment.name.clone(),
                });
            }
        }

        let child = self.create_account(name);
        self.add_child(parent, child)?;
        if let Some(r) = rep {
            self.link_rep(child, r)?;
        }
        self.set_market_segments(child, &segments)?;
        Ok(child)
    }

    /// Parent chain from the immediate parent up to the root.
    pub fn ancestors(&self, account: AccountId) -> BookResult<Vec<AccountId>> {
        let mut chain = Vec::new();
        let mut cursor = self.account(account)?.parent;
        while let Some(id) = cursor {
            chain.push(id);
            cursor = self.account(id)?.parent;
        }
        Ok(chain)
    }

    /// Pre-order walk of the subtree at `root`, with depth (root = 0).
    pub fn walk(&self, root: AccountId) -> BookResult<Vec<(usize, AccountId)>> {
        self.account(root)?;
        let mut out = Vec::new();
        let mut stack = vec![(0usize, root)];
        while let Some((depth, id)) = stack.pop() {
            out.push((depth, id));
            for &child in self.account(id)?.children.iter().rev() {
                stack.push((depth + 1, child));
            }
        }
        Ok(out)
    }
}
