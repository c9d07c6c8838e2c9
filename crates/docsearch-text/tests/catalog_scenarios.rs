//! End-to-end matching over a realistic message catalog.

use docsearch_core::{Item, ItemType};
use docsearch_text::{Region, Segment, rank, segments};

fn catalog() -> Vec<Item> {
    vec![
        Item::new("Orders", "/applications/7f1c", ItemType::Application),
        Item::new("OrderAggregate", "/handlers/2a9e", ItemType::Aggregate),
        Item::new("OrderProjector", "/handlers/88b0", ItemType::Projection),
        Item::new("PlaceOrder", "/messages/orders.PlaceOrder", ItemType::Command)
            .with_docs("Places a new order."),
        Item::new("OrderPlaced", "/messages/orders.OrderPlaced", ItemType::Event),
        Item::new("PaymentTimeout", "/messages/payments.PaymentTimeout", ItemType::Timeout),
        Item::new("Shipping Process", "/handlers/c4d2", ItemType::Process),
    ]
}

fn ranked_names(query: &str) -> Vec<String> {
    let items = catalog();
    rank(query, &items)
        .into_iter()
        .map(|r| r.item.name.clone())
        .collect()
}

#[test]
fn shortest_prefix_match_wins() {
    let names = ranked_names("order");
    assert_eq!(names[0], "Orders");
    assert_eq!(names.len(), 5);
}

#[test]
fn full_name_query_matches_only_that_item() {
    assert_eq!(ranked_names("placeorder"), ["PlaceOrder"]);
}

#[test]
fn later_substring_beats_longer_prefix() {
    // PlaceOrder (10 + 5/10) ranks ahead of OrderPlaced (11 + 0).
    let names = ranked_names("order");
    let place = names.iter().position(|n| n == "PlaceOrder").unwrap();
    let placed = names.iter().position(|n| n == "OrderPlaced").unwrap();
    assert!(place < placed);
}

#[test]
fn spaces_in_names_and_queries() {
    // Greedy matching takes the second 'p' of "Shipping"; the shortcut then
    // finds "roc" as a literal.
    let items = catalog();
    let results = rank("ship proc", &items);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item.name, "Shipping Process");
    assert_eq!(
        segments(&results[0].item.name, &results[0].regions),
        [
            Segment::mark("Shipp"),
            Segment::plain("ing P"),
            Segment::mark("roc"),
            Segment::plain("ess"),
        ]
    );
}

#[test]
fn timeout_by_initials() {
    let items = catalog();
    let results = rank("pt", &items);
    let names: Vec<&str> = results.iter().map(|r| r.item.name.as_str()).collect();
    assert!(names.contains(&"PaymentTimeout"));
    let payment = results
        .iter()
        .find(|r| r.item.name == "PaymentTimeout")
        .unwrap();
    assert_eq!(payment.regions.first(), Some(&Region::new(0, 0)));
}

#[test]
fn nothing_matches_gibberish() {
    assert!(ranked_names("qqq").is_empty());
}
