//! Components mounted inside the router: one reports the browser location,
//! the other renders whichever view the mount selected.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use sensorboard_domain::layout::DashboardLayout;
use sensorboard_domain::view::ViewId;

use crate::pages::{AppPage, Dashboard};

/// Copies the router's pathname into `location` whenever it changes.
///
/// The router handles link interception, `popstate` and history entries;
/// this only reports where it ended up.
#[component]
pub fn LocationBridge(location: RwSignal<String>) -> impl IntoView {
    let current = use_location();
    Effect::new(move |_| {
        let pathname = current.pathname.get();
        if location.get_untracked() != pathname {
            location.set(pathname);
        }
    });
}

/// Renders the active view, or nothing when the location resolved to no view.
#[component]
pub fn ViewOutlet(active: RwSignal<Option<ViewId>>, layout: DashboardLayout) -> impl IntoView {
    move || match active.get() {
        Some(ViewId::Dashboard) => view! { <Dashboard layout=layout.clone()/> }.into_any(),
        Some(ViewId::App) => view! { <AppPage/> }.into_any(),
        None => ().into_any(),
    }
}
