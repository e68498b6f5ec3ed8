//! DOM rendering host: binds the view mount to a container element.

use leptos::mount::{UnmountHandle, mount_to};
use leptos::prelude::*;
use leptos::tachys::view::any_view::AnyViewState;
use leptos_router::components::Router;
use sensorboard_app::ports::{Host, RenderRoot};
use sensorboard_domain::layout::DashboardLayout;
use sensorboard_domain::view::ViewId;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::outlet::{LocationBridge, ViewOutlet};

/// Looks up attachment points in a browser [`Document`].
pub struct DomHost {
    document: Document,
    layout: DashboardLayout,
    location: RwSignal<String>,
}

impl DomHost {
    /// `location` receives the router's pathname on every navigation.
    pub fn new(document: Document, layout: DashboardLayout, location: RwSignal<String>) -> Self {
        Self {
            document,
            layout,
            location,
        }
    }
}

impl Host for DomHost {
    type Root = DomRoot;

    fn attach(&self, container_id: &str) -> Option<Self::Root> {
        let element = self
            .document
            .get_element_by_id(container_id)?
            .dyn_into::<HtmlElement>()
            .ok()?;

        let active = RwSignal::new(None::<ViewId>);
        let location = self.location;
        let layout = self.layout.clone();
        let mounted = mount_to(element, move || {
            view! {
                <Router>
                    <LocationBridge location=location/>
                    <ViewOutlet active=active layout=layout.clone()/>
                </Router>
            }
            .into_any()
        });

        Some(DomRoot {
            active,
            _mounted: mounted,
        })
    }
}

/// A container element with the router mounted once; switching views only
/// changes which view the outlet renders.
pub struct DomRoot {
    active: RwSignal<Option<ViewId>>,
    _mounted: UnmountHandle<AnyViewState>,
}

impl RenderRoot for DomRoot {
    fn render(&mut self, id: ViewId) {
        self.active.set(Some(id));
    }

    fn clear(&mut self) {
        self.active.set(None);
    }
}
