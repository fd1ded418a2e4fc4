//! Food Catalog Core
//!
//! Layered like the rest of the app:
//! - model: food item entity and draft fields
//! - store: the in-memory CRUD state machine behind the list and the dialog
//! - seed / config: embedded startup data
//! - view: pure helpers the UI renders from

mod error;
mod model;
mod price;
mod id;
mod store;
mod seed;
mod config;
mod view;

pub use error::{CatalogError, CatalogResult};
pub use model::{FoodItem, DraftField};
pub use price::coerce_price;
pub use id::IdStrategy;
pub use store::{ItemStore, DialogMode, SaveOutcome};
pub use seed::parse_seed;
pub use config::CatalogConfig;
pub use view::{DialogCopy, CardView, format_price};
