//! Shared fixtures: the sample sales book used across the integration tests.
#![allow(dead_code)]

use salesbook_core::{AccountId, BookConfig, MarketSegmentId, SalesGraph, SalesRepId};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub struct SampleBook {
    pub graph: SalesGraph,
    pub david: SalesRepId,
    pub bob: SalesRepId,
    pub jane: SalesRepId,
    pub widgets: MarketSegmentId,
    pub sprokets: MarketSegmentId,
    pub whoozits: MarketSegmentId,
    pub account1: AccountId,
    pub account2: AccountId,
    pub account3: AccountId,
    pub child: AccountId,
    pub grandchild1: AccountId,
    pub grandchild2: AccountId,
    pub child2: AccountId,
    pub two_grandchild1: AccountId,
    pub two_grandchild2: AccountId,
}

/// Three reps, three segments and a three-level tree under "Account 1".
pub fn sample_book(config: BookConfig) -> SampleBook {
    let mut graph = SalesGraph::new(config);

    let david = graph.create_sales_rep("David", "Kesler");
    let bob = graph.create_sales_rep("Bob", "Arino");
    let jane = graph.create_sales_rep("Jane", "Dough");
    let widgets = graph.create_market_segment("Widgets");
    let sprokets = graph.create_market_segment("Sprokets");
    let whoozits = graph.create_market_segment("Whoozits");
    let account1 = graph.create_account("Account 1");
    let account2 = graph.create_account("Account 2");
    let account3 = graph.create_account("Account 3");

    graph
        .set_market_segments(account1, &[sprokets, widgets, whoozits])
        .unwrap();
    graph.set_sales_rep(account1, Some(david)).unwrap();
    graph.add_account_to_segment(whoozits, account2).unwrap();
    graph.add_account_to_segment(whoozits, account3).unwrap();

    let child = graph
        .create_child_account(account1, "Child Account", None, &[])
        .unwrap();
    graph.set_market_segments(child, &[sprokets, whoozits]).unwrap();
    let grandchild1 = graph
        .create_child_account(child, "Grandchild 1 Account", Some(bob), &[])
        .unwrap();
    let grandchild2 = graph
        .create_child_account(child, "Grandchild 2 Account", None, &[])
        .unwrap();
    graph.set_market_segments(grandchild1, &[widgets]).unwrap();

    let child2 = graph
        .create_child_account(account1, "Child Account 2", None, &[])
        .unwrap();
    let two_grandchild1 = graph
        .create_child_account(child2, "2 Grandchild 1 Account", Some(jane), &[])
        .unwrap();
    let two_grandchild2 = graph
        .create_child_account(child2, "2 Grandchild 2 Account", None, &[])
        .unwrap();
    graph
        .set_market_segments(two_grandchild2, &[whoozits])
        .unwrap();
    graph.set_market_segments(child2, &[sprokets]).unwrap();

    SampleBook {
        graph,
        david,
        bob,
        jane,
        widgets,
        sprokets,
        whoozits,
        account1,
        account2,
        account3,
        child,
        grandchild1,
        grandchild2,
        child2,
        two_grandchild1,
        two_grandchild2,
    }
}

pub const SAMPLE_REPORT: &str = "\
Account 1 (Sprokets, Widgets, Whoozits): David Kesler
    Child Account (Sprokets, Whoozits): David Kesler
        Grandchild 1 Account (Widgets): Bob Arino
        Grandchild 2 Account (Sprokets, Whoozits): David Kesler
    Child Account 2 (Sprokets): David Kesler
        2 Grandchild 1 Account (Sprokets, Widgets, Whoozits): Jane Dough
        2 Grandchild 2 Account (Whoozits): David Kesler
";

/// Names of the members of `segment`, in membership order.
pub fn member_names(graph: &SalesGraph, segment: MarketSegmentId) -> Vec<String> {
    graph
        .segment(segment)
        .unwrap()
        .accounts()
        .iter()
        .map(|&a| graph.account(a).unwrap().name().to_string())
        .collect()
}

/// Every account/segment pair agrees from both sides.
pub fn assert_symmetric(graph: &SalesGraph) {
    for (account_id, account) in graph.iter_accounts() {
        for &segment in account.market_segments() {
            assert!(
                graph.segment(segment).unwrap().accounts().contains(&account_id),
                "segment missing back-reference to '{}'",
                account.name()
            );
        }
    }
    for (segment_id, segment) in graph.iter_market_segments() {
        for &account in segment.accounts() {
            assert!(
                graph
                    .account(account)
                    .unwrap()
                    .market_segments()
                    .contains(&segment_id),
                "account missing back-reference to segment '{}'",
                segment.name()
            );
        }
    }
}
