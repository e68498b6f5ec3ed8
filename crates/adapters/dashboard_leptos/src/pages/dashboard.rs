use leptos::prelude::*;
use sensorboard_domain::layout::DashboardLayout;

use crate::components::{SideNav, TopNav};

/// The dashboard shell: navbar, sidebar, and placeholder main content.
#[component]
pub fn Dashboard(layout: DashboardLayout) -> impl IntoView {
    let DashboardLayout {
        navbar,
        sidebar,
        main,
    } = layout;

    view! {
        <div class="dashboard-container">
            <TopNav brand=navbar.brand/>
            <SideNav links=sidebar.links/>
            <main class="main-content">
                <h1>{main.heading}</h1>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(layout: DashboardLayout) -> String {
        Owner::new().with(|| view! { <Dashboard layout=layout/> }.to_html())
    }

    #[test]
    fn should_render_navbar_with_brand_link_to_root() {
        let html = render(DashboardLayout::with_brand("Greenhouse"));
        assert!(html.contains(r#"<nav class="navbar""#), "{html}");
        assert!(html.contains(r#"href="/""#), "{html}");
        assert!(html.contains("Greenhouse"), "{html}");
    }

    #[test]
    fn should_render_sidebar_with_three_links_in_order() {
        let html = render(DashboardLayout::default());
        assert!(html.contains(r#"<aside class="sidebar""#), "{html}");
        let sensors = html.find(r#"href="/sensors""#).expect("sensors link");
        let alerts = html.find(r#"href="/alerts""#).expect("alerts link");
        let download = html.find(r#"href="/download""#).expect("download link");
        assert!(sensors < alerts && alerts < download, "{html}");
    }

    #[test]
    fn should_render_welcome_heading_in_main_content() {
        let html = render(DashboardLayout::default());
        assert!(html.contains(r#"<main class="main-content""#), "{html}");
        assert!(html.contains("Welcome to the Dashboard!"), "{html}");
    }
}
