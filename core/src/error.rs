use crate::types::{AccountId, MarketSegmentId, SalesRepId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Account {0:?} does not belong to this graph")]
    UnknownAccount(AccountId),

    #[error("Sales rep {0:?} does not belong to this graph")]
    UnknownSalesRep(SalesRepId),

    #[error("Market segment {0:?} does not belong to this graph")]
    UnknownMarketSegment(MarketSegmentId),

    #[error("Account '{account}' is not a member of market segment '{segment}'")]
    AccountNotInSegment { account: String, segment: String },

    #[error("Account '{account}' is not assigned to sales rep '{rep}'")]
    AccountNotAssigned { account: String, rep: String },

    #[error("Account '{child}' is already attached to parent '{parent}'")]
    AlreadyAttached { child: String, parent: String },

    #[error("Attaching '{child}' under '{parent}' would create a cycle")]
    HierarchyCycle { child: String, parent: String },

    #[error("Child '{child}' cannot inherit segment '{segment}': it already holds an account with that name")]
    InheritedSegmentClash { child: String, segment: String },

    #[error("Account '{account}' has no sales rep")]
    MissingSalesRep { account: String },

    #[error("Stored graph is inconsistent: {0}")]
    CorruptStore(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type BookResult<T> = Result<T, BookError>;
