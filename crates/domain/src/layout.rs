//! Dashboard layout — the three static regions of the Dashboard view, as data.
//!
//! Renderers (the Leptos adapter, test doubles) turn a [`DashboardLayout`]
//! into markup; the layout itself carries no behaviour.

/// Default label of the navbar brand link.
pub const DEFAULT_BRAND_LABEL: &str = "Your Logo";

/// Heading of the main content region.
pub const WELCOME_HEADING: &str = "Welcome to the Dashboard!";

/// An anchor with a visible label and an `href`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    #[must_use]
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Top navigation bar holding the brand link back to `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navbar {
    pub brand: Link,
}

/// Side navigation list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    pub links: Vec<Link>,
}

/// Main content region with placeholder text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainContent {
    pub heading: String,
}

/// The full Dashboard: navbar, sidebar, main content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardLayout {
    pub navbar: Navbar,
    pub sidebar: Sidebar,
    pub main: MainContent,
}

impl DashboardLayout {
    /// Build the dashboard with a custom brand label.
    ///
    /// The sidebar targets (`/sensors`, `/alerts`, `/download`) are not bound
    /// to any route and resolve to `NotFound`.
    #[must_use]
    pub fn with_brand(label: impl Into<String>) -> Self {
        Self {
            navbar: Navbar {
                brand: Link::new(label, "/"),
            },
            sidebar: Sidebar {
                links: vec![
                    Link::new("Sensors", "/sensors"),
                    Link::new("Alerts", "/alerts"),
                    Link::new("Download Data", "/download"),
                ],
            },
            main: MainContent {
                heading: WELCOME_HEADING.to_string(),
            },
        }
    }

    /// Every link in document order: navbar first, then sidebar.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        std::iter::once(&self.navbar.brand).chain(self.sidebar.links.iter())
    }
}

impl Default for DashboardLayout {
    fn default() -> Self {
        Self::with_brand(DEFAULT_BRAND_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::RouteTable;

    #[test]
    fn should_link_brand_back_to_root() {
        let layout = DashboardLayout::default();
        assert_eq!(layout.navbar.brand, Link::new("Your Logo", "/"));
    }

    #[test]
    fn should_list_three_sidebar_links_in_order() {
        let layout = DashboardLayout::default();
        let hrefs: Vec<&str> = layout.sidebar.links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, ["/sensors", "/alerts", "/download"]);
    }

    #[test]
    fn should_show_welcome_heading() {
        assert_eq!(DashboardLayout::default().main.heading, WELCOME_HEADING);
    }

    #[test]
    fn should_use_custom_brand_label() {
        let layout = DashboardLayout::with_brand("Greenhouse");
        assert_eq!(layout.navbar.brand.label, "Greenhouse");
        assert_eq!(layout.navbar.brand.href, "/");
    }

    #[test]
    fn should_point_sidebar_links_at_unbound_routes() {
        let table = RouteTable::standard();
        let layout = DashboardLayout::default();
        for link in &layout.sidebar.links {
            assert!(table.resolve(&link.href).is_not_found(), "{}", link.href);
        }
    }

    #[test]
    fn should_yield_navbar_link_before_sidebar_links() {
        let layout = DashboardLayout::default();
        let labels: Vec<&str> = layout.links().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["Your Logo", "Sensors", "Alerts", "Download Data"]);
    }
}
