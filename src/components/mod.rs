//! UI Components
//!
//! Leptos components for the catalog page.

mod food_item_card;
mod draft_input;
mod item_dialog;
mod food_item_list;

pub use food_item_card::FoodItemCard;
pub use draft_input::DraftInput;
pub use item_dialog::ItemDialog;
pub use food_item_list::FoodItemList;
