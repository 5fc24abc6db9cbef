//! ChompSmart Frontend App
//!
//! Top bar, meal log (or sign-in) and the grocery drawer.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{GroceryDrawer, MealLogPage, SignInForm, TopBar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{store_user_email, AppState};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    log::info!("starting with backend {}", config.api_base_url);

    let reload_trigger = signal(0u32);
    let ctx = AppContext::new(config, reload_trigger);
    let store = Store::new(AppState::new(ctx.session().current_email()));

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    view! {
        <div class="app-shell">
            <TopBar />

            <main class="app-content">
                <Show
                    when=move || store_user_email(&store).is_some()
                    fallback=|| view! { <SignInForm /> }
                >
                    <MealLogPage />
                </Show>
            </main>

            <GroceryDrawer />
        </div>
    }
}
