use luminet_core::{aggregate, aggregate_items, tokenize_content, Item, TagSet};

fn tags(values: &[&str]) -> TagSet {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn keywords_are_unioned_and_lowercased() {
    let items = vec![
        Item::new("1", "u1", "first").with_keywords(["Rust", "CLI"]),
        Item::new("2", "u1", "second").with_keywords(["rust", "Graphs"]),
    ];
    assert_eq!(aggregate_items(&items), tags(&["cli", "graphs", "rust"]));
}

#[test]
fn missing_keywords_fall_back_to_content_tokens() {
    let item = Item::new("1", "u1", "Building sustainable energy systems");
    assert_eq!(
        aggregate(&[&item]),
        tags(&["building", "sustainable", "energy", "systems"])
    );
}

#[test]
fn fallback_drops_tokens_of_three_chars_or_fewer() {
    let item = Item::new("1", "u1", "AI is fun");
    assert!(aggregate(&[&item]).is_empty());
    assert!(tokenize_content("four fun").contains("four"));
    assert!(!tokenize_content("four fun").contains("fun"));
}

#[test]
fn empty_keyword_list_also_falls_back() {
    let item = Item::new("1", "u1", "Community gardens").with_keywords(Vec::<String>::new());
    assert_eq!(aggregate(&[&item]), tags(&["community", "gardens"]));
}

#[test]
fn fallback_unions_content_of_every_item() {
    let items = vec![
        Item::new("1", "u1", "Ocean cleanup drones"),
        Item::new("2", "u1", "drones for farming"),
    ];
    assert_eq!(
        aggregate_items(&items),
        tags(&["cleanup", "drones", "farming", "ocean"])
    );
}

#[test]
fn no_items_yield_empty_set() {
    assert!(aggregate(&[]).is_empty());
}

#[test]
fn aggregation_does_not_mutate_items() {
    let items = vec![Item::new("1", "u1", "Mixed Case Content").with_keywords(["MiXeD"])];
    let before = items.clone();
    let _ = aggregate_items(&items);
    assert_eq!(items, before);
}
