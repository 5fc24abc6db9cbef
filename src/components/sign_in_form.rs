//! Sign-In Form Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_set_user_email, use_app_store};

#[component]
pub fn SignInForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (email, set_email) = signal(String::new());

    let sign_in = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(stored) = ctx.session().sign_in(&email.get()) {
            log::info!("signed in as {}", stored);
            store_set_user_email(&store, Some(stored));
            set_email.set(String::new());
        }
    };

    view! {
        <form class="sign-in-form" on:submit=sign_in>
            <h2>"Welcome to ChompSmart"</h2>
            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <button type="submit" class="primary-btn">"Sign in"</button>
        </form>
    }
}
