//! Top Bar Component
//!
//! App title, grocery drawer toggle and sign-out.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_set_meals, store_set_user_email, store_user_email, use_app_store};

#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let active_count = Memo::new(move |_| ctx.grocery.with(|list| list.counts().active));

    let sign_out = move |_| {
        ctx.session().sign_out();
        store_set_user_email(&store, None);
        store_set_meals(&store, Vec::new());
    };

    view! {
        <header class="top-bar">
            <button
                class="grocery-toggle-btn"
                type="button"
                on:click=move |_| ctx.grocery_open.update(|open| *open = !*open)
            >
                {move || format!("Grocery ({})", active_count.get())}
            </button>

            <div class="top-title">"ChompSmart"</div>

            <Show when=move || store_user_email(&store).is_some()>
                <button class="logout-btn" type="button" on:click=sign_out>"Logout"</button>
            </Show>
        </header>
    }
}
