//! Seed Data Loading
//!
//! Parses the static JSON list the catalog starts from.

use std::collections::HashSet;

use crate::error::{CatalogError, CatalogResult};
use crate::model::FoodItem;

/// Parse a JSON array of food items, rejecting duplicate ids
pub fn parse_seed(json: &str) -> CatalogResult<Vec<FoodItem>> {
    let items: Vec<FoodItem> = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        if !seen.insert(item.id) {
            return Err(CatalogError::DuplicateId(item.id));
        }
    }
    log::debug!("parsed {} seed items", items.len());
    Ok(items)
}
