//! Application state.

use std::sync::Arc;

use handlebars::Handlebars;
use serde_json::json;
use todo_store::TodoStore;

use crate::config::Config;

/// Landing page template, rendered once at startup.
const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// Shared application state.
pub struct AppState<S: TodoStore> {
    /// Server configuration.
    pub config: Config,
    /// Todo store.
    pub store: S,
    /// Pre-rendered landing page.
    pub landing_page: String,
}

/// Type alias for shared state.
pub type SharedState<S> = Arc<AppState<S>>;

/// Creates shared state from config and store, rendering the landing page.
pub fn create_shared_state<S: TodoStore>(
    config: Config,
    store: S,
) -> anyhow::Result<SharedState<S>> {
    let landing_page = render_landing_page(store.backend())?;
    Ok(Arc::new(AppState {
        config,
        store,
        landing_page,
    }))
}

/// Renders the landing page with the storage backend label substituted.
fn render_landing_page(storage: &str) -> anyhow::Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_template_string("index", INDEX_TEMPLATE)?;
    Ok(handlebars.render("index", &json!({ "storage": storage }))?)
}
