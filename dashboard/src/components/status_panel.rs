//! API connection status panel and endpoint list

use leptos::prelude::*;
use shared::StatusPanel;

#[component]
pub fn StatusPanelView(panel: StatusPanel) -> impl IntoView {
    let endpoint_count = panel.endpoint_count();

    view! {
        <div>
            <h2>"API Connection Status"</h2>
            <div style="background-color: #f0f9ff; padding: 15px; border-radius: 8px; margin-bottom: 20px;">
                <h3>"✅ CORS Enabled Successfully!"</h3>
                <p>"Service: " {panel.service}</p>
                <p>"Version: " {panel.version}</p>
                {panel.description.map(|d| view! { <p>{d}</p> })}
                {panel.health_status.map(|s| view! { <p>"Health: " {s}</p> })}
                {panel.user_count.map(|n| view! { <p>"Registered users: " {n}</p> })}
                <p>"Available Endpoints: " {endpoint_count}</p>
            </div>

            <h3>"Available Endpoints:"</h3>
            <ul>
                {panel
                    .endpoints
                    .into_iter()
                    .map(|entry| view! {
                        <li>
                            <strong>{entry.name} ":"</strong>
                            " "
                            {entry.description}
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
