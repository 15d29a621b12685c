//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <h1>"🚗 Financial Dashboard Integration"</h1>
    }
}
