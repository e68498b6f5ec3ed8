use leptos::prelude::*;
use sensorboard_domain::layout::Link;

/// Top navigation bar with the brand link back to the dashboard.
#[component]
pub fn TopNav(brand: Link) -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-brand">
                <a href=brand.href class="navbar-item">{brand.label}</a>
            </div>
        </nav>
    }
}
