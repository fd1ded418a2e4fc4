//! Draft Input Component
//!
//! Labeled input bound to one draft field.

use leptos::prelude::*;

use catalog_core::DraftField;

use crate::store::{store_draft_untracked, store_update_draft_field, use_app_store};

/// Current display value of a draft field
fn draft_value(field: DraftField, draft: &catalog_core::FoodItem) -> String {
    match field {
        DraftField::Name => draft.name.clone(),
        DraftField::Description => draft.description.clone(),
        // Full value; rounding here would be written back on the next keystroke
        DraftField::Price => draft.price.to_string(),
        DraftField::Img => draft.img.clone(),
    }
}

/// Labeled text/number input for a draft field
///
/// The dialog is mounted fresh on every open, so the draft is read once here
/// and the input owns its text afterwards. With `autofocus` the input takes
/// focus on mount, so dialog key handlers (Escape) work right away.
#[component]
pub fn DraftInput(
    field: DraftField,
    #[prop(optional)] autofocus: bool,
) -> impl IntoView {
    let store = use_app_store();
    let input_id = format!("draft-{}", field.as_str());
    let initial = draft_value(field, &store_draft_untracked(&store));
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // The autofocus attribute is not honored on dynamically mounted inputs
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            if autofocus {
                let _ = input.focus();
            }
        }
    });

    view! {
        <div class="dialog-field">
            <label class="dialog-label" for=input_id.clone()>{field.label()}</label>
            <input
                id=input_id
                node_ref=input_ref
                type=field.input_type()
                class="dialog-input"
                autofocus=autofocus
                prop:value=initial
                on:input=move |ev| {
                    store_update_draft_field(&store, field, &event_target_value(&ev));
                }
            />
        </div>
    }
}
