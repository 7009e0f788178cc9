//! The three entity kinds. Fields are only writable through `SalesGraph`,
//! which keeps both ends of every relationship in step.

use crate::types::{AccountId, MarketSegmentId, SalesRepId};
use std::fmt;

#[derive(Debug, Clone)]
pub struct SalesRep {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) accounts: Vec<AccountId>,
}

impl SalesRep {
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Assigned accounts, in assignment order. May contain repeats.
    pub fn accounts(&self) -> &[AccountId] {
        &self.accounts
    }
}

impl fmt::Display for SalesRep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone)]
pub struct MarketSegment {
    pub(crate) name: String,
    pub(crate) accounts: Vec<AccountId>,
}

impl MarketSegment {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member accounts; no two share a name.
    pub fn accounts(&self) -> &[AccountId] {
        &self.accounts
    }
}

impl fmt::Display for MarketSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    pub(crate) name: String,
    pub(crate) sales_rep: Option<SalesRepId>,
    pub(crate) market_segments: Vec<MarketSegmentId>,
    pub(crate) children: Vec<AccountId>,
    pub(crate) parent: Option<AccountId>,
}

impl Account {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            sales_rep: None,
            market_segments: Vec::new(),
            children: Vec::new(),
            parent: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sales_rep(&self) -> Option<SalesRepId> {
        self.sales_rep
    }

    pub fn market_segments(&self) -> &[MarketSegmentId] {
        &self.market_segments
    }

    pub fn children(&self) -> &[AccountId] {
        &self.children
    }

    pub fn parent(&self) -> Option<AccountId> {
        self.parent
    }

    pub fn is_child(&self) -> bool {
        self.parent.is_some()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
