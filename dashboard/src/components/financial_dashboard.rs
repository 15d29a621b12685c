//! ==============================================================================
//! financial_dashboard.rs - the dashboard component
//! ==============================================================================
//!
//! state is a single signal holding DashboardState. a fetch cycle runs once
//! on mount and again whenever "Refresh" is clicked; results of cycles that
//! outlive the component (or a newer cycle) are dropped by the Lifecycle.
//!
//! ==============================================================================

use leptos::prelude::*;
use shared::{
    run_fetch_cycle, ApiConfig, DashboardState, DashboardView, Lifecycle, LOADING_TEXT,
};

use super::{ActionBar, Header, StatusPanelView};
use crate::api::BrowserTransport;

#[component]
pub fn FinancialDashboard() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let state = RwSignal::new(DashboardState::default());
    let lifecycle = Lifecycle::new();

    {
        let lifecycle = lifecycle.clone();
        on_cleanup(move || lifecycle.unmount());
    }

    let refresh = move || {
        let config = config.clone();
        let lifecycle = lifecycle.clone();
        leptos::task::spawn_local(async move {
            run_fetch_cycle(&BrowserTransport, &config, &lifecycle, |event| {
                state.try_update(|s| s.apply(event));
            })
            .await;
        });
    };

    // fetch on mount
    let on_mount = refresh.clone();
    Effect::new(move || on_mount());

    move || match state.with(DashboardState::view) {
        DashboardView::Loading => view! { <div>{LOADING_TEXT}</div> }.into_any(),
        DashboardView::Failed { message } => view! { <div>"Error: " {message}</div> }.into_any(),
        DashboardView::Ready { status } => {
            let refresh = refresh.clone();
            view! {
                <div style="padding: 20px; font-family: Arial, sans-serif;">
                    <Header />
                    <ActionBar />
                    {status.map(|panel| view! {
                        <StatusPanelView panel=panel />
                        <button on:click=move |_| refresh()>"Refresh"</button>
                    })}
                </div>
            }
            .into_any()
        }
    }
}
