//! Hierarchical account report.
//!
//! One line per account, pre-order, indented by depth:
//!
//! ```text
//! Account 1 (Sprokets, Widgets, Whoozits): David Kesler
//!     Child Account (Sprokets, Whoozits): David Kesler
//! ```

use crate::{
    error::{BookError, BookResult},
    graph::SalesGraph,
    types::AccountId,
};
use std::fmt::Write;

/// Render the subtree rooted at `root` using the graph's report settings.
pub fn render_tree(graph: &SalesGraph, root: AccountId) -> BookResult<String> {
    let indent = graph.config().report.indent;
    let mut out = String::new();
    for (depth, id) in graph.walk(root)? {
        let line = render_line(graph, id)?;
        writeln!(out, "{:width$}{line}", "", width = depth * indent)
            .map_err(|e| anyhow::anyhow!("report formatting failed: {e}"))?;
    }
    Ok(out)
}

/// Render every root account in creation order.
pub fn render_forest(graph: &SalesGraph) -> BookResult<String> {
    let mut out = String::new();
    for root in graph.roots() {
        out.push_str(&render_tree(graph, root)?);
    }
    Ok(out)
}

/// `"{name} ({segments}): {rep}"` for a single account.
pub fn render_line(graph: &SalesGraph, account: AccountId) -> BookResult<String> {
    let acct = graph.account(account)?;
    let segments = segment_names(graph, account)?;
    let rep = match acct.sales_rep() {
        Some(rep) => graph.rep(rep)?.to_string(),
        None if graph.config().report.require_sales_rep => {
            return Err(BookError::MissingSalesRep {
                account: acct.name().to_string(),
            });
        }
        None => graph.config().report.unassigned_label.clone(),
    };
    Ok(format!("{} ({segments}): {rep}", acct.name()))
}

/// Segment names joined by `", "`, in the account's order.
pub fn segment_names(graph: &SalesGraph, account: AccountId) -> BookResult<String> {
    let names = graph
        .account(account)?
        .market_segments()
        .iter()
        .map(|&s| graph.segment(s).map(|seg| seg.name()))
        .collect::<BookResult<Vec<_>>>()?;
    Ok(names.join(", "))
}
