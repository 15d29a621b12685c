//! ==============================================================================
//! lib.rs - Financial Dashboard Integration
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm dashboard consuming the cors-enabled finara api.
//!     shows api connection status and opens the html dashboards
//!     served by the api in new tabs.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - calls the api via fetch (gloo-net)
//!     - state, fetch cycle and render decision live in the shared crate
//!
//! configuration:
//!     API_BASE_URL and DASHBOARD_USER_ID are read at build time
//!     (e.g. `API_BASE_URL=https://api.example.com trunk build --release`).
//!     without them the app talks to http://localhost:8080.
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use shared::ApiConfig;
use wasm_bindgen::prelude::*;

mod api;
mod components;

use components::FinancialDashboard;

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(App);
}

fn api_config() -> ApiConfig {
    ApiConfig::from_overrides(option_env!("API_BASE_URL"), option_env!("DASHBOARD_USER_ID"))
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    let config = api_config();
    log::info!("api base url: {}", config.base_url());
    provide_context(config);

    view! {
        <Title text="Financial Dashboard" />
        <FinancialDashboard />
    }
}
