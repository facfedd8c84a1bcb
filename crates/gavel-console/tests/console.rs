//! End-to-end command flows through the session layer, the same path the
//! REPL drives.

use gavel_console::{
    command::parse,
    session::{Reply, Session},
    source::default_sources,
};
use gavel_data::catalog::{client_catalog, management_catalog};

fn session() -> Session {
    Session::new(
        default_sources(),
        vec![management_catalog(), client_catalog()],
        5,
    )
}

fn run(session: &mut Session, line: &str) -> String {
    let command = parse(line)
        .expect("command should parse")
        .expect("line should not be blank");
    match session.apply(command) {
        Ok(Reply::Text(text)) => text,
        Ok(Reply::Quit) => panic!("unexpected quit"),
        Err(err) => panic!("command `{line}` failed: {err}"),
    }
}

#[test]
fn open_search_and_paginate_a_dataset() {
    let mut session = session();

    let text = run(&mut session, "open accounts");
    assert!(text.contains("Accounts"));
    assert!(text.contains("Acme Auctions"));
    assert!(text.contains("page 1 of 3"), "12 rows at size 5: {text}");

    let text = run(&mut session, "next");
    assert!(text.contains("page 2 of 3"));

    // A new search lands back on page 1.
    let text = run(&mut session, "search auction");
    assert!(text.contains("Showing 1 to"));
    assert!(text.contains("Acme Auctions"));
    assert!(!text.contains("Heritage House"));

    // Clearing the search restores the full set.
    let text = run(&mut session, "search");
    assert!(text.contains("of 12 results"));
}

#[test]
fn sort_toggles_direction_on_repeat() {
    let mut session = session();
    run(&mut session, "open items");

    let ascending = run(&mut session, "sort current_bid");
    let first_row = ascending.lines().nth(3).unwrap_or_default().to_string();
    assert!(
        first_row.contains("Signed Lithograph"),
        "cheapest bid first: {ascending}"
    );

    let descending = run(&mut session, "sort current_bid");
    let first_row = descending.lines().nth(3).unwrap_or_default().to_string();
    assert!(
        first_row.contains("Mustang"),
        "highest bid first after toggle: {descending}"
    );
}

#[test]
fn sorting_an_unknown_column_lists_candidates() {
    let mut session = session();
    run(&mut session, "open bids");

    let command = parse("sort bogus").unwrap().unwrap();
    let err = session.apply(command).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("bogus"));
    assert!(message.contains("amount"));
}

#[test]
fn glossary_filters_intersect_search_and_category() {
    let mut session = session();

    let text = run(&mut session, "glossary");
    assert!(text.contains("management glossary"));

    let text = run(&mut session, "search bid");
    assert!(text.contains("Bid"));

    let text = run(&mut session, "filter enum");
    assert!(text.contains("BidStatus"));
    assert!(!text.contains("BidsConnection"), "non-enum filtered: {text}");

    // Toggling the category off restores the search-only view.
    let text = run(&mut session, "filter enum");
    assert!(text.contains("BidsConnection"));
}

#[test]
fn glossary_type_detail_and_counts() {
    let mut session = session();
    run(&mut session, "glossary client");

    let text = run(&mut session, "type BiddingActivity");
    assert!(text.contains("[Subscription]"));
    assert!(text.contains("section: bidding"));

    let text = run(&mut session, "counts");
    assert!(text.contains("client API"));
    assert!(text.contains("Subscription"));
}

#[test]
fn export_emits_json_for_the_current_view() {
    let mut session = session();
    run(&mut session, "open webhooks");
    run(&mut session, "search bid_placed");

    let text = run(&mut session, "export");
    let json: serde_json::Value = serde_json::from_str(&text).expect("export should be JSON");
    assert_eq!(json["dataset"], "webhooks");
    assert_eq!(json["filtered"], 1);
    assert_eq!(json["rows"][0]["name"], "Bid Notifications");
}

#[test]
fn commands_without_an_open_dataset_are_rejected() {
    let mut session = session();
    let command = parse("next").unwrap().unwrap();
    assert!(session.apply(command).is_err());
}
