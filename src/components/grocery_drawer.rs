//! Grocery Drawer Component
//!
//! Slide-over panel showing the grocery list grouped by aisle.

use leptos::prelude::*;

use crate::components::{ConfirmButton, GroceryAddForm, GroceryItemRow};
use crate::context::use_app_context;
use crate::grocery::CategoryGroup;
use crate::models::{EditDraft, EntryId};

#[component]
pub fn GroceryDrawer() -> impl IntoView {
    let ctx = use_app_context();
    let open = ctx.grocery_open;

    let groups = Memo::new(move |_| ctx.grocery.with(|list| list.grouped()));
    let counts = Memo::new(move |_| ctx.grocery.with(|list| list.counts()));
    let is_empty = Memo::new(move |_| ctx.grocery.with(|list| list.is_empty()));

    let editing = RwSignal::new(None::<EntryId>);
    let draft = RwSignal::new(EditDraft::default());

    let clear_purchased = move |_| {
        ctx.grocery.update(|list| {
            let removed = list.clear_completed();
            log::info!("cleared {} purchased grocery items", removed);
        });
    };

    let clear_all = Callback::new(move |_: ()| {
        ctx.grocery.update(|list| {
            list.clear_all();
        });
    });

    let render_group = move |group: CategoryGroup| {
        view! {
            <div class="g-category-block">
                <div class="g-category-title">{group.category.as_str()}</div>
                <ul class="g-list">
                    {group.entries.into_iter().map(|entry| view! {
                        <GroceryItemRow entry=entry editing=editing draft=draft />
                    }).collect_view()}
                </ul>
            </div>
        }
    };

    view! {
        <div
            class=move || if open.get() { "g-drawer-overlay open" } else { "g-drawer-overlay" }
            on:click=move |_| open.set(false)
        >
            <aside
                class=move || if open.get() { "g-drawer open" } else { "g-drawer" }
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="g-header">
                    <div>
                        <div class="g-title">"Grocery List"</div>
                        <div class="g-sub">
                            {move || {
                                let c = counts.get();
                                format!("{} to buy • {} purchased", c.active, c.completed)
                            }}
                        </div>
                    </div>
                    <button class="g-icon-btn" type="button" on:click=move |_| open.set(false)>"✕"</button>
                </div>

                <GroceryAddForm />

                <div class="g-section">
                    {move || groups.get()
                        .into_iter()
                        .filter(|group| !group.entries.is_empty())
                        .map(render_group)
                        .collect_view()}
                    <Show when=move || is_empty.get()>
                        <div class="g-empty">"No items yet."</div>
                    </Show>
                </div>

                <div class="g-footer">
                    <button class="g-secondary-btn" type="button" on:click=clear_purchased>
                        "Clear Purchased"
                    </button>
                    <ConfirmButton button_class="g-secondary-btn" label="Clear All" on_confirm=clear_all />
                </div>
            </aside>
        </div>
    }
}
