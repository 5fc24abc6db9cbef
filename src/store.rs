//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::meal_log::{self, PendingRemoval};
use crate::models::Meal;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Meals logged today by the current user
    pub meals: Vec<Meal>,
    /// Signed-in user (None = show sign-in form)
    pub user_email: Option<String>,
}

impl AppState {
    pub fn new(user_email: Option<String>) -> Self {
        Self {
            user_email,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_meals(store: &AppStore) -> Vec<Meal> {
    store.meals().get()
}

pub fn store_user_email(store: &AppStore) -> Option<String> {
    store.user_email().get()
}

pub fn store_set_user_email(store: &AppStore, email: Option<String>) {
    store.user_email().set(email);
}

pub fn store_set_meals(store: &AppStore, meals: Vec<Meal>) {
    store.meals().set(meals);
}

pub fn store_add_meal(store: &AppStore, meal: Meal) {
    store.meals().write().push(meal);
}

/// Optimistically remove a meal; keep the result to roll back
pub fn store_take_meal(store: &AppStore, meal_id: i64) -> Option<PendingRemoval> {
    meal_log::take_meal(&mut store.meals().write(), meal_id)
}

pub fn store_restore_meal(store: &AppStore, pending: PendingRemoval) {
    meal_log::restore_meal(&mut store.meals().write(), pending);
}
