//! Sales book core: sales reps, market segments and an account hierarchy,
//! kept mutually consistent by a single relationship graph.

pub mod config;
pub mod entity;
pub mod error;
pub mod event;
pub mod graph;
pub mod report;
pub mod store;
pub mod types;

pub use config::{BookConfig, RepReassignment, ReportConfig, SegmentDedup};
pub use error::{BookError, BookResult};
pub use graph::SalesGraph;
pub use types::{AccountId, MarketSegmentId, SalesRepId};
