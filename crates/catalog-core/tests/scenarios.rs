//! Catalog Scenario Tests
//!
//! Whole user flows through the public store API.

use catalog_core::{
    parse_seed, CatalogConfig, DialogCopy, DialogMode, DraftField, FoodItem, IdStrategy,
    ItemStore, SaveOutcome,
};
use pretty_assertions::assert_eq;

fn item(id: u32, name: &str, price: f64) -> FoodItem {
    FoodItem {
        id,
        name: name.to_string(),
        description: String::new(),
        price,
        img: String::new(),
    }
}

#[test]
fn test_add_burger_after_pizza() {
    let mut store = ItemStore::with_seed(vec![item(1, "Pizza", 10.0)], IdStrategy::LengthPlusOne);

    store.begin_add();
    assert_eq!(store.draft().id, 2);
    assert_eq!(store.mode(), Some(DialogMode::Add));

    store.update_draft_field(DraftField::Name, "Burger");
    store.update_draft_field(DraftField::Price, "5");
    assert_eq!(store.save(), SaveOutcome::Added(2));

    assert_eq!(store.items(), &[item(1, "Pizza", 10.0), item(2, "Burger", 5.0)]);
    assert!(!store.is_open());
}

#[test]
fn test_delete_then_add_reuses_neighbor_id() {
    let mut store = ItemStore::with_seed(
        vec![item(1, "Pizza", 10.0), item(2, "Sushi", 12.0)],
        IdStrategy::LengthPlusOne,
    );

    store.delete_item(1);
    assert_eq!(store.items(), &[item(2, "Sushi", 12.0)]);

    store.begin_add();
    assert_eq!(store.draft().id, 2);
}

#[test]
fn test_delete_then_add_with_monotonic_ids() {
    let mut store = ItemStore::with_seed(
        vec![item(1, "Pizza", 10.0), item(2, "Sushi", 12.0)],
        IdStrategy::Monotonic,
    );

    store.delete_item(1);
    store.begin_add();
    assert_eq!(store.draft().id, 3);
}

#[test]
fn test_edit_flow_uses_edit_copy() {
    let mut store = ItemStore::with_seed(
        vec![item(1, "Pizza", 10.0), item(2, "Sushi", 12.0)],
        IdStrategy::LengthPlusOne,
    );
    let sushi = store.items()[1].clone();

    store.begin_edit(&sushi);
    let copy = store.mode().map(DialogCopy::for_mode).expect("dialog open");
    assert_eq!(copy.title, "Edit Item");
    assert_eq!(copy.submit_label, "Save");

    store.update_draft_field(DraftField::Price, "abc");
    assert_eq!(store.save(), SaveOutcome::Replaced(2));
    assert_eq!(store.items(), &[item(1, "Pizza", 10.0), item(2, "Sushi", 0.0)]);
}

#[test]
fn test_bundled_assets_load() {
    let seed = parse_seed(include_str!("../../../assets/food_data.json")).expect("bundled seed");
    assert!(!seed.is_empty());

    let config = CatalogConfig::from_json(include_str!("../../../assets/config.json"))
        .expect("bundled config");
    let store = ItemStore::with_seed(seed, config.id_strategy);
    assert!(!store.has_duplicate_ids());
}

#[test]
fn test_edit_after_id_reuse_keeps_users_edit() {
    let mut store = ItemStore::with_seed(
        vec![item(1, "Pizza", 10.0), item(2, "Sushi", 12.0)],
        IdStrategy::LengthPlusOne,
    );

    store.delete_item(1);
    store.begin_add();
    store.update_draft_field(DraftField::Name, "Burger");
    store.update_draft_field(DraftField::Price, "5");
    store.save();

    let burger = store.items()[1].clone();
    store.begin_edit(&burger);
    store.update_draft_field(DraftField::Name, "Veggie Burger");
    store.save();

    assert_eq!(
        store.items(),
        &[item(2, "Veggie Burger", 5.0), item(2, "Veggie Burger", 5.0)]
    );
}
