//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Components never write the catalog directly; they go through the helpers below.

use leptos::prelude::*;
use reactive_stores::Store;
use catalog_core::{CatalogConfig, DialogMode, DraftField, FoodItem, ItemStore, SaveOutcome};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items, draft and dialog mode
    pub catalog: ItemStore,
    /// Heading above the grid
    pub title: String,
}

impl AppState {
    pub fn new(config: &CatalogConfig, seed: Vec<FoodItem>) -> Self {
        Self {
            catalog: ItemStore::with_seed(seed, config.id_strategy),
            title: config.title.clone(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Read Helpers
// ========================

/// Snapshot of the collection (tracked)
pub fn store_items(store: &AppStore) -> Vec<FoodItem> {
    store.catalog().read().items().to_vec()
}

/// Snapshot of the draft without subscribing
pub fn store_draft_untracked(store: &AppStore) -> FoodItem {
    store.catalog().read_untracked().draft().clone()
}

/// Current dialog mode, `None` when closed (tracked)
pub fn store_dialog_mode(store: &AppStore) -> Option<DialogMode> {
    store.catalog().read().mode()
}

pub fn store_title(store: &AppStore) -> String {
    store.title().read().clone()
}

// ========================
// Intent Helpers
// ========================

/// Open the dialog for a new item
pub fn store_begin_add(store: &AppStore) {
    store.catalog().write().begin_add();
}

/// Open the dialog on a copy of `item`
pub fn store_begin_edit(store: &AppStore, item: &FoodItem) {
    store.catalog().write().begin_edit(item);
}

/// Write raw input text into one draft field
pub fn store_update_draft_field(store: &AppStore, field: DraftField, value: &str) {
    store.catalog().write().update_draft_field(field, value);
}

/// Commit the draft and close the dialog
pub fn store_save(store: &AppStore) -> SaveOutcome {
    let outcome = store.catalog().write().save();
    log::info!("[STORE] save -> {:?}", outcome);
    outcome
}

/// Close the dialog without touching the collection
pub fn store_cancel(store: &AppStore) {
    store.catalog().write().cancel();
}

/// Remove an item from the store by ID
pub fn store_delete_item(store: &AppStore, item_id: u32) {
    let removed = store.catalog().write().delete_item(item_id);
    log::info!("[STORE] delete {} -> removed={}", item_id, removed);
}
