use docsearch_core::{Item, ItemType};
use docsearch_text::rank;
use tracing_test::traced_test;

fn catalog() -> Vec<Item> {
    vec![
        Item::new("CreateOrder", "/a", ItemType::Command),
        Item::new("OrderCreated", "/b", ItemType::Event),
        Item::new("Shipment", "/c", ItemType::Aggregate),
    ]
}

#[test]
#[traced_test]
fn rank_logs_survivor_count() {
    let items = catalog();
    let results = rank("order", &items);
    assert_eq!(results.len(), 2);
    assert!(logs_contain("ranked catalog"));
    assert!(logs_contain("matched=2"));
}

#[test]
#[traced_test]
fn blank_query_logs_and_skips() {
    let items = catalog();
    assert!(rank("  ", &items).is_empty());
    assert!(logs_contain("blank query"));
}
