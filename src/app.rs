//! Food Catalog App
//!
//! Loads the embedded config and seed, provides the store, renders the list.

use leptos::prelude::*;
use reactive_stores::Store;

use catalog_core::{parse_seed, CatalogConfig, FoodItem};

use crate::components::FoodItemList;
use crate::store::AppState;

const CONFIG_JSON: &str = include_str!("../assets/config.json");
const SEED_JSON: &str = include_str!("../assets/food_data.json");

/// Embedded config, or defaults if it does not parse
pub fn load_config() -> CatalogConfig {
    CatalogConfig::from_json(CONFIG_JSON).unwrap_or_else(|e| {
        log::warn!("[APP] {}, using defaults", e);
        CatalogConfig::default()
    })
}

/// Embedded seed items, or an empty catalog if they do not parse
fn load_seed() -> Vec<FoodItem> {
    match parse_seed(SEED_JSON) {
        Ok(items) => items,
        Err(e) => {
            log::error!("[APP] {}", e);
            Vec::new()
        }
    }
}

#[component]
pub fn App(config: CatalogConfig) -> impl IntoView {
    let store = Store::new(AppState::new(&config, load_seed()));
    provide_context(store);

    view! {
        <main class="container">
            <FoodItemList />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_assets_parse() {
        assert!(CatalogConfig::from_json(CONFIG_JSON).is_ok());
        assert!(!load_seed().is_empty());
    }
}
