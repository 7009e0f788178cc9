//! Shared primitive types used across the sales book.
//!
//! Ids are handed out by a `SalesGraph` and are only meaningful for the
//! graph that issued them. Id equality is object identity.

use generational_arena::Index;

/// Stable handle for a sales representative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SalesRepId(pub(crate) Index);

/// Stable handle for a market segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarketSegmentId(pub(crate) Index);

/// Stable handle for an account (root or child).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub(crate) Index);

/// Primary key of a row in the persistence store.
pub type RowId = i64;
