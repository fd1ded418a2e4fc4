//! Food Item List Component
//!
//! Header, card grid and the add/edit dialog.

use leptos::prelude::*;

use catalog_core::FoodItem;

use crate::components::{FoodItemCard, ItemDialog};
use crate::store::{
    store_begin_add, store_begin_edit, store_delete_item, store_dialog_mode, store_items,
    store_title, use_app_store,
};

#[component]
pub fn FoodItemList() -> impl IntoView {
    let store = use_app_store();

    // Memos keep draft keystrokes from re-rendering the grid or remounting the dialog
    let items = Memo::new(move |_| store_items(&store));
    let dialog_mode = Memo::new(move |_| store_dialog_mode(&store));

    let on_edit = Callback::new(move |item: FoodItem| store_begin_edit(&store, &item));
    let on_delete = Callback::new(move |id: u32| store_delete_item(&store, id));

    view! {
        <div class="food-list">
            <div class="food-list-header">
                <h1>{move || store_title(&store)}</h1>
                <button class="add-btn" on:click=move |_| store_begin_add(&store)>
                    "Add New Item"
                </button>
            </div>

            <div class="food-grid">
                <For
                    each=move || items.get().into_iter().enumerate()
                    key=|(index, item)| {
                        // Index is part of the key: ids are not guaranteed unique after an add
                        (
                            *index,
                            item.id,
                            item.name.clone(),
                            item.description.clone(),
                            item.price.to_bits(),
                            item.img.clone(),
                        )
                    }
                    children=move |(_, item)| {
                        view! { <FoodItemCard item=item on_edit=on_edit on_delete=on_delete /> }
                    }
                />
            </div>

            <p class="item-count">{move || format!("{} items", items.with(|items| items.len()))}</p>

            {move || dialog_mode.get().map(|mode| view! { <ItemDialog mode=mode /> })}
        </div>
    }
}
