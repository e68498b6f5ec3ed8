//! # sensorboard-dashboard
//!
//! Leptos client-side adapter for the sensorboard scaffold.
//!
//! `leptos_router` owns the browser side of navigation: it intercepts
//! same-origin link clicks, pushes history entries and reacts to back/forward.
//! The pathname it reports is fed into [`sensorboard_app::shell::Shell`],
//! which resolves it against the route table and tells the view mount what
//! to render.
//!
//! ## Modules
//!
//! - [`config`] — inline JSON configuration read from the host page
//! - [`error`] — fatal startup errors
//! - `dom` — the [`Host`](sensorboard_app::ports::Host) bound to the document
//! - `outlet` — the components mounted inside the router
//! - `logging` — `tracing` output to the browser console

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use sensorboard_app::shell::Shell;
use sensorboard_domain::layout::DashboardLayout;
use sensorboard_domain::route::RouteTable;

mod components;
pub mod config;
mod dom;
pub mod error;
mod logging;
mod outlet;
mod pages;

use config::Config;
use dom::{DomHost, DomRoot};
use error::StartError;

/// A started dashboard. Keep it alive for as long as the page should react
/// to navigation: dropping it disposes the router and the location effect.
pub struct RunningDashboard {
    _owner: Owner,
    _shell: Rc<RefCell<Shell<DomRoot>>>,
}

/// Build the route table, mount the view resolved from the current URL into
/// the configured container, and follow the router's location from then on.
///
/// # Errors
///
/// Returns a [`StartError`] when the browser environment, the configuration,
/// or the attachment point is unusable. The page cannot render in that case.
pub fn start() -> Result<RunningDashboard, StartError> {
    let window = web_sys::window().ok_or(StartError::NoWindow)?;
    let document = window.document().ok_or(StartError::NoDocument)?;
    let config = Config::load(&document)?;
    logging::init(&config.logging.filter);

    let initial_path = window
        .location()
        .pathname()
        .map_err(|err| StartError::Browser(format!("{err:?}")))?;

    let owner = Owner::new();
    let shell = owner.with(|| -> Result<_, StartError> {
        let location = RwSignal::new(initial_path.clone());
        let host = DomHost::new(
            document,
            DashboardLayout::with_brand(config.brand.label.as_str()),
            location,
        );
        let shell = Shell::start(
            &host,
            &config.mount.container_id,
            RouteTable::standard(),
            &initial_path,
        )?;
        let shell = Rc::new(RefCell::new(shell));

        let follower = Rc::clone(&shell);
        Effect::new(move |_| {
            let path = location.get();
            follower.borrow_mut().follow(&path);
        });
        Ok(shell)
    })?;

    tracing::info!(
        container_id = %config.mount.container_id,
        path = %initial_path,
        "dashboard mounted"
    );
    Ok(RunningDashboard {
        _owner: owner,
        _shell: shell,
    })
}
