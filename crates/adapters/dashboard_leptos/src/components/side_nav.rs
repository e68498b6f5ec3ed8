//! Sidebar listing links to sections that have no route yet.

use leptos::prelude::*;
use sensorboard_domain::layout::Link;

#[component]
pub fn SideNav(
    /// Links in display order.
    links: Vec<Link>,
) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <ul>
                {links
                    .into_iter()
                    .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                    .collect_view()}
            </ul>
        </aside>
    }
}
