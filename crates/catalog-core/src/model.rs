//! Food Item Entity
//!
//! One entry of the catalog. The same shape doubles as the dialog draft.

use serde::{Deserialize, Serialize};

/// A catalog entry (matches the seed schema)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FoodItem {
    /// Unique identifier
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Not validated; expected to be >= 0
    pub price: f64,
    /// Image URL or path
    pub img: String,
}

impl FoodItem {
    /// Create an empty item with the given id
    pub fn blank(id: u32) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}

/// Draft fields editable through the dialog form
///
/// The id is not listed: it is never user-editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Description,
    Price,
    Img,
}

impl DraftField {
    /// All fields, in form order
    pub const ALL: [DraftField; 4] = [
        DraftField::Name,
        DraftField::Description,
        DraftField::Price,
        DraftField::Img,
    ];

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Name => "Name",
            DraftField::Description => "Description",
            DraftField::Price => "Price",
            DraftField::Img => "Image URL",
        }
    }

    /// HTML input type for the field
    pub fn input_type(&self) -> &'static str {
        match self {
            DraftField::Price => "number",
            _ => "text",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Description => "description",
            DraftField::Price => "price",
            DraftField::Img => "img",
        }
    }
}
