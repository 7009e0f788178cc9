use super::SalesGraph;
use crate::{
    error::BookResult,
    types::{AccountId, SalesRepId},
};

impl SalesGraph {
    // ── SalesRep ───────────────────────────────────────────────

    /// Assign `account` to `rep`, setting the account's rep as well.
    ///
    /// Calling this twice for the same pair lists the account twice.
    /// Whether the account's previous rep keeps its entry depends on
    /// `BookConfig::rep_reassignment`.
    pub fn add_account_to_rep(&mut self, rep: SalesRepId, account: AccountId) -> BookResult<()> {
        self.link_rep(account, rep)
    }

    /// Fails with `AccountNotAssigned` if the rep does not list the account.
    pub fn remove_account_from_rep(
        &mut self,
        rep: SalesRepId,
        account: AccountId,
    ) -> BookResult<()> {
        self.unlink_rep(account, rep)
    }

    pub fn accounts_of_rep(&self, rep: SalesRepId) -> BookResult<&[AccountId]> {
        Ok(self.rep(rep)?.accounts())
    }
}
