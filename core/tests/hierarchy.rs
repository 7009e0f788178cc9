//! Account hierarchy: child defaults, attachment guards, traversal.

mod common;

use common::{assert_symmetric, init_logging, sample_book};
use salesbook_core::{BookConfig, BookError, SalesGraph};

/// A child with no explicit rep or segments takes the parent's.
#[test]
fn child_inherits_parent_defaults() {
    init_logging();
    let mut graph = SalesGraph::default();
    let rep = graph.create_sales_rep("David", "Kesler");
    let s1 = graph.create_market_segment("s1");
    let s2 = graph.create_market_segment("s2");
    let parent = graph.create_account("Parent");
    graph.set_market_segments(parent, &[s1, s2]).unwrap();
    graph.set_sales_rep(parent, Some(rep)).unwrap();

    let child = graph.create_child_account(parent, "X", None, &[]).unwrap();

    let child_acct = graph.account(child).unwrap();
    let parent_acct = graph.account(parent).unwrap();
    assert_eq!(child_acct.market_segments(), parent_acct.market_segments());
    assert_eq!(child_acct.sales_rep(), parent_acct.sales_rep());
    assert_eq!(child_acct.parent(), Some(parent));
    assert!(parent_acct.children().contains(&child));
    assert!(graph.accounts_of_rep(rep).unwrap().contains(&child));
    assert_symmetric(&graph);
}

/// Explicit rep and segments override the parent's.
#[test]
fn explicit_values_override_defaults() {
    let mut graph = SalesGraph::default();
    let david = graph.create_sales_rep("David", "Kesler");
    let bob = graph.create_sales_rep("Bob", "Arino");
    let s1 = graph.create_market_segment("s1");
    let s2 = graph.create_market_segment("s2");
    let parent = graph.create_account("Parent");
    graph.set_market_segments(parent, &[s1]).unwrap();
    graph.set_sales_rep(parent, Some(david)).unwrap();

    let child = graph
        .create_child_account(parent, "X", Some(bob), &[s2])
        .unwrap();

    assert_eq!(graph.sales_rep(child).unwrap(), Some(bob));
    assert_eq!(graph.account(child).unwrap().market_segments(), &[s2]);
}

/// Defaults are copied: later parent changes do not reach the child.
#[test]
fn parent_changes_do_not_flow_to_child() {
    let mut graph = SalesGraph::default();
    let s1 = graph.create_market_segment("s1");
    let s2 = graph.create_market_segment("s2");
    let parent = graph.create_account("Parent");
    graph.set_market_segments(parent, &[s1]).unwrap();
    let child = graph.create_child_account(parent, "X", None, &[]).unwrap();

    graph.set_market_segments(parent, &[s2]).unwrap();

    assert_eq!(graph.account(child).unwrap().market_segments(), &[s1]);
    assert!(graph.accounts_in_segment(s1).unwrap().contains(&child));
}

/// A child that already has a parent cannot be attached again.
#[test]
fn attached_child_cannot_be_reparented() {
    let mut graph = SalesGraph::default();
    let p1 = graph.create_account("P1");
    let p2 = graph.create_account("P2");
    let child = graph.create_child_account(p1, "C", None, &[]).unwrap();

    let err = graph.add_child(p2, child).unwrap_err();

    assert!(
        matches!(err, BookError::AlreadyAttached { ref parent, .. } if parent == "P1"),
        "unexpected error: {err}"
    );
    assert!(graph.account(p2).unwrap().children().is_empty());
}

/// An account cannot become its own ancestor.
#[test]
fn cycles_are_rejected() {
    let mut graph = SalesGraph::default();
    let root = graph.create_account("Root");
    let child = graph.create_child_account(root, "Child", None, &[]).unwrap();

    let err = graph.add_child(child, root).unwrap_err();
    assert!(matches!(err, BookError::HierarchyCycle { .. }), "unexpected error: {err}");

    let err = graph.add_child(root, root).unwrap_err();
    assert!(matches!(err, BookError::AlreadyAttached { .. } | BookError::HierarchyCycle { .. }));
}

/// Walk visits the sample tree in pre-order with depths.
#[test]
fn walk_is_preorder_with_depth() {
    let book = sample_book(BookConfig::default());

    let walked = book.graph.walk(book.account1).unwrap();

    assert_eq!(
        walked,
        vec![
            (0, book.account1),
            (1, book.child),
            (2, book.grandchild1),
            (2, book.grandchild2),
            (1, book.child2),
            (2, book.two_grandchild1),
            (2, book.two_grandchild2),
        ]
    );
    assert_eq!(
        book.graph.ancestors(book.two_grandchild2).unwrap(),
        vec![book.child2, book.account1]
    );
}

/// Sample tree keeps every link symmetric and reps registered.
#[test]
fn sample_book_is_consistent() {
    let book = sample_book(BookConfig::default());
    let graph = &book.graph;

    assert_symmetric(graph);
    assert_eq!(
        graph.roots(),
        vec![book.account1, book.account2, book.account3]
    );
    assert_eq!(graph.accounts_of_rep(book.bob).unwrap(), &[book.grandchild1]);
    assert_eq!(graph.accounts_of_rep(book.jane).unwrap(), &[book.two_grandchild1]);
    assert_eq!(graph.accounts_of_rep(book.david).unwrap().len(), 5);
    assert_eq!(graph.sales_rep(book.account2).unwrap(), None);
    assert_eq!(
        graph.account(book.account2).unwrap().market_segments(),
        &[book.whoozits]
    );
}

/// A second same-named child cannot inherit a segment its sibling already
/// occupies; creation fails and leaves the tree unchanged.
#[test]
fn namesake_sibling_cannot_inherit_occupied_segment() {
    let mut graph = SalesGraph::default();
    let widgets = graph.create_market_segment("Widgets");
    let parent = graph.create_account("Acme");
    graph.set_market_segments(parent, &[widgets]).unwrap();

    let first = graph.create_child_account(parent, "Branch", None, &[]).unwrap();
    assert_eq!(graph.account(first).unwrap().market_segments(), &[widgets]);

    let err = graph
        .create_child_account(parent, "Branch", None, &[])
        .unwrap_err();

    assert!(
        matches!(err, BookError::InheritedSegmentClash { ref child, ref segment }
            if child == "Branch" && segment == "Widgets"),
        "unexpected error: {err}"
    );
    assert_eq!(graph.account(parent).unwrap().children(), &[first]);
    assert_eq!(graph.iter_accounts().count(), 2);
    assert_symmetric(&graph);
}

/// A child named like its parent clashes with the parent's own membership.
#[test]
fn child_named_like_parent_cannot_inherit_segments() {
    let mut graph = SalesGraph::default();
    let rep = graph.create_sales_rep("David", "Kesler");
    let widgets = graph.create_market_segment("Widgets");
    let parent = graph.create_account("Acme");
    graph.set_market_segments(parent, &[widgets]).unwrap();
    graph.set_sales_rep(parent, Some(rep)).unwrap();

    let err = graph.create_child_account(parent, "Acme", None, &[]).unwrap_err();

    assert!(matches!(err, BookError::InheritedSegmentClash { .. }), "unexpected error: {err}");
    assert!(graph.account(parent).unwrap().children().is_empty());
    assert_eq!(graph.accounts_of_rep(rep).unwrap(), &[parent]);
}

/// Explicit segments skip the inheritance check and follow the normal
/// refusal rule instead.
#[test]
fn explicit_segments_follow_refusal_rule() {
    let mut graph = SalesGraph::default();
    let widgets = graph.create_market_segment("Widgets");
    let gadgets = graph.create_market_segment("Gadgets");
    let parent = graph.create_account("Acme");
    graph.set_market_segments(parent, &[widgets]).unwrap();

    let child = graph
        .create_child_account(parent, "Acme", None, &[widgets, gadgets])
        .unwrap();

    assert_eq!(graph.account(child).unwrap().market_segments(), &[gadgets]);
    assert_symmetric(&graph);
}
