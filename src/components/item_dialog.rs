//! Item Dialog Component
//!
//! Modal add/edit form over the draft.

use leptos::prelude::*;

use catalog_core::{DialogCopy, DialogMode, DraftField};

use crate::components::DraftInput;
use crate::store::{store_cancel, store_save, use_app_store};

/// Modal dialog for the open draft
///
/// Backdrop click and Escape behave like Cancel.
#[component]
pub fn ItemDialog(mode: DialogMode) -> impl IntoView {
    let store = use_app_store();
    let copy = DialogCopy::for_mode(mode);

    let cancel = move || store_cancel(&store);

    view! {
        <div
            class="dialog-backdrop"
            on:click=move |_| cancel()
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Escape" {
                    ev.prevent_default();
                    cancel();
                }
            }
        >
            <div
                class="dialog"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
            >
                <h2 class="dialog-title">{copy.title}</h2>
                <p class="dialog-prompt">{copy.prompt}</p>

                {DraftField::ALL.iter().map(|field| {
                    let autofocus = *field == DraftField::Name;
                    view! { <DraftInput field=*field autofocus=autofocus /> }
                }).collect_view()}

                <div class="dialog-actions">
                    <button class="cancel-btn" on:click=move |_| cancel()>"Cancel"</button>
                    <button class="save-btn" on:click=move |_| { store_save(&store); }>
                        {copy.submit_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
