//! View Helpers
//!
//! Pure functions from store state to display text.

use crate::model::FoodItem;
use crate::store::DialogMode;

/// Dialog title, prompt and submit label for a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogCopy {
    pub title: &'static str,
    pub prompt: &'static str,
    pub submit_label: &'static str,
}

impl DialogCopy {
    pub fn for_mode(mode: DialogMode) -> Self {
        match mode {
            DialogMode::Edit => Self {
                title: "Edit Item",
                prompt: "Edit the details of the item.",
                submit_label: "Save",
            },
            DialogMode::Add => Self {
                title: "Add New Item",
                prompt: "Enter the details of the new item.",
                submit_label: "Add",
            },
        }
    }
}

/// Display text for a price: whole numbers drop the fraction, others keep up to two decimals
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0}", price)
    } else {
        let text = format!("{:.2}", price);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Everything a card shows for one item
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price_label: String,
    pub img: String,
}

impl From<&FoodItem> for CardView {
    fn from(item: &FoodItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            price_label: format!("${}", format_price(item.price)),
            img: item.img.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_copy_by_mode() {
        let edit = DialogCopy::for_mode(DialogMode::Edit);
        assert_eq!(edit.title, "Edit Item");
        assert_eq!(edit.submit_label, "Save");
        let add = DialogCopy::for_mode(DialogMode::Add);
        assert_eq!(add.title, "Add New Item");
        assert_eq!(add.prompt, "Enter the details of the new item.");
        assert_eq!(add.submit_label, "Add");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(10.0), "10");
        assert_eq!(format_price(12.5), "12.5");
        assert_eq!(format_price(9.99), "9.99");
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(1.999), "2");
    }

    #[test]
    fn test_card_view() {
        let item = FoodItem {
            id: 3,
            name: "Salad".to_string(),
            description: "Green".to_string(),
            price: 7.5,
            img: "/img/salad.jpg".to_string(),
        };
        let card = CardView::from(&item);
        assert_eq!(card.price_label, "$7.5");
        assert_eq!(card.name, "Salad");
        assert_eq!(card.id, 3);
    }
}
