//! Grocery Add Form Component
//!
//! Name / quantity / category form at the top of the grocery drawer.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{parse_quantity, Category};

#[component]
pub fn GroceryAddForm() -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (quantity, set_quantity) = signal(String::from("1"));
    let (category, set_category) = signal(Category::Produce.as_str().to_string());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = name.get();
        let qty = parse_quantity(&quantity.get());
        let cat = category.get();
        ctx.grocery.update(|list| {
            list.add(&text, qty, &cat);
        });
        set_name.set(String::new());
        set_quantity.set(String::from("1"));
        set_category.set(Category::Produce.as_str().to_string());
    };

    view! {
        <form class="g-form" on:submit=add_item>
            <input
                class="g-input"
                type="text"
                placeholder="Add item (ex: eggs)"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                class="g-input g-qty"
                type="text"
                inputmode="decimal"
                placeholder="Qty"
                prop:value=move || quantity.get()
                on:input=move |ev| set_quantity.set(event_target_value(&ev))
            />
            <select
                class="g-input"
                prop:value=move || category.get()
                on:change=move |ev| set_category.set(event_target_value(&ev))
            >
                {Category::ALL.iter().map(|c| view! {
                    <option value=c.as_str()>{c.as_str()}</option>
                }).collect_view()}
            </select>
            <button class="g-primary-btn" type="submit">"Add"</button>
        </form>
    }
}
