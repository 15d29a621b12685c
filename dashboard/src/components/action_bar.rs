//! Navigation buttons

use leptos::prelude::*;
use shared::{open_dashboard, open_user_dashboard, ApiConfig};

use crate::api::{BrowserNavigator, BrowserTransport};

const BUTTON_STYLE: &str =
    "padding: 10px 20px; color: white; border: none; border-radius: 5px; cursor: pointer;";

#[component]
pub fn ActionBar() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let user_id = config.demo_user_id().to_string();

    let open_main = {
        let config = config.clone();
        move |_| open_dashboard(&BrowserNavigator, &config)
    };

    let open_user = move |_| {
        let config = config.clone();
        let user_id = user_id.clone();
        leptos::task::spawn_local(async move {
            // failures are logged by the action, nothing to show here
            let _ = open_user_dashboard(&BrowserTransport, &BrowserNavigator, &config, &user_id)
                .await;
        });
    };

    view! {
        <div style="margin-bottom: 20px;">
            <button
                on:click=open_main
                style=format!("{} background-color: #4facfe; margin-right: 10px;", BUTTON_STYLE)
            >
                "Open Car Goal Dashboard"
            </button>
            <button
                on:click=open_user
                style=format!("{} background-color: #667eea;", BUTTON_STYLE)
            >
                "Open User Dashboard"
            </button>
        </div>
    }
}
