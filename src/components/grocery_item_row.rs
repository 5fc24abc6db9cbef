//! Grocery Item Row Component
//!
//! One entry in the drawer, with checkbox, inline edit and remove.
//! The drawer owns which row is being edited and its draft, so the
//! editor survives the list re-rendering.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{Category, EditDraft, Entry, EntryId};

#[component]
pub fn GroceryItemRow(
    entry: Entry,
    editing: RwSignal<Option<EntryId>>,
    draft: RwSignal<EditDraft>,
) -> impl IntoView {
    let ctx = use_app_context();

    let completed = entry.completed;
    let row_id = StoredValue::new(entry.id.clone());
    let is_editing = move || editing.with(|id| row_id.with_value(|row| id.as_ref() == Some(row)));

    let toggle = move |_| {
        ctx.grocery.update(|list| {
            row_id.with_value(|id| list.toggle_completed(id));
        });
    };

    let remove = move |_| {
        ctx.grocery.update(|list| {
            row_id.with_value(|id| list.remove(id));
        });
    };

    let seed = StoredValue::new(EditDraft::from_entry(&entry));
    let start_edit = move |_| {
        draft.set(seed.get_value());
        editing.set(Some(row_id.get_value()));
    };

    let save = move |_| {
        // Keep the editor open until a name is given
        let Some(patch) = draft.with(EditDraft::to_patch) else {
            return;
        };
        ctx.grocery.update(|list| {
            row_id.with_value(|id| list.update(id, patch));
        });
        editing.set(None);
    };

    let name = entry.name.clone();
    let quantity = entry.quantity;

    view! {
        <li class=if completed { "g-item purchased" } else { "g-item" }>
            <div class="g-item-left">
                <input type="checkbox" prop:checked=completed on:change=toggle />
                <Show
                    when=is_editing
                    fallback=move || view! {
                        <span class="g-item-text">
                            <span class="g-name">{name.clone()}</span>
                            <span class="g-meta">{format!("Qty: {}", quantity)}</span>
                        </span>
                    }
                >
                    <div class="g-edit-grid">
                        <input
                            class="g-input"
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        />
                        <input
                            class="g-input"
                            inputmode="decimal"
                            prop:value=move || draft.with(|d| d.quantity.clone())
                            on:input=move |ev| draft.update(|d| d.quantity = event_target_value(&ev))
                        />
                        <select
                            class="g-input"
                            prop:value=move || draft.with(|d| d.category.clone())
                            on:change=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                        >
                            {Category::ALL.iter().map(|c| view! {
                                <option value=c.as_str()>{c.as_str()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                </Show>
            </div>

            <Show
                when=is_editing
                fallback=move || view! {
                    <div class="g-actions">
                        <button class="g-secondary-btn g-small-btn" type="button" on:click=start_edit>
                            "Edit"
                        </button>
                        <button class="g-danger-btn" type="button" on:click=remove>
                            "Remove"
                        </button>
                    </div>
                }
            >
                <div class="g-actions">
                    <button class="g-primary-btn g-small-btn" type="button" on:click=save>
                        "Save"
                    </button>
                    <button class="g-secondary-btn g-small-btn" type="button" on:click=move |_| editing.set(None)>
                        "Cancel"
                    </button>
                </div>
            </Show>
        </li>
    }
}
