//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::grocery::GroceryList;
use crate::session::Session;
use crate::storage::BrowserStorage;

pub type BrowserGroceryList = GroceryList<BrowserStorage>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The grocery list, loaded once at startup
    pub grocery: RwSignal<BrowserGroceryList>,
    /// Whether the grocery drawer is open
    pub grocery_open: RwSignal<bool>,
    /// Trigger to reload meals from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload meals from backend - write
    set_reload_trigger: WriteSignal<u32>,
    config: StoredValue<AppConfig>,
    api: StoredValue<ApiClient>,
    session: StoredValue<Session<BrowserStorage>>,
}

impl AppContext {
    pub fn new(config: AppConfig, reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        let grocery = GroceryList::open(BrowserStorage, config.grocery_storage_key.clone());
        let session = Session::new(BrowserStorage, config.session_storage_key.clone());
        let api = ApiClient::new(config.api_base_url.clone());
        Self {
            grocery: RwSignal::new(grocery),
            grocery_open: RwSignal::new(false),
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config: StoredValue::new(config),
            api: StoredValue::new(api),
            session: StoredValue::new(session),
        }
    }

    /// Trigger a reload of meals
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn session(&self) -> Session<BrowserStorage> {
        self.session.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
