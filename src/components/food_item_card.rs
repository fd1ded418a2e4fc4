//! Food Item Card Component
//!
//! One catalog entry with edit and delete actions.

use leptos::prelude::*;

use catalog_core::{CardView, FoodItem};

/// Card for a single item
///
/// # Arguments
/// * `item` - The item to show
/// * `on_edit` - Called with a copy of the item when Edit is clicked
/// * `on_delete` - Called with the item id when Delete is clicked
#[component]
pub fn FoodItemCard(
    item: FoodItem,
    #[prop(into)] on_edit: Callback<FoodItem>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let card = CardView::from(&item);
    let id = card.id;

    view! {
        <div class="food-card">
            <img class="food-card-img" src=card.img alt=card.name.clone() />
            <div class="food-card-body">
                <h2 class="food-card-name">{card.name}</h2>
                <p class="food-card-description">{card.description}</p>
                <span class="food-card-price">{card.price_label}</span>
            </div>
            <div class="food-card-actions">
                <button class="edit-btn" on:click=move |_| on_edit.run(item.clone())>"Edit"</button>
                <button class="delete-btn" on:click=move |_| on_delete.run(id)>"Delete"</button>
            </div>
        </div>
    }
}
