//! Navigation controller — resolves every navigation event against the route table.

use sensorboard_domain::route::{Resolution, RouteTable};

use crate::navigation::{Location, NavigationState, SubscriptionId};

/// Owns the immutable [`RouteTable`] and the [`NavigationState`] derived from it.
#[derive(Debug)]
pub struct Navigator {
    table: RouteTable,
    state: NavigationState,
}

impl Navigator {
    /// Build the controller and resolve the path the page was loaded at.
    #[must_use]
    pub fn new(table: RouteTable, initial_path: &str) -> Self {
        let resolution = table.resolve(initial_path);
        tracing::debug!(path = initial_path, ?resolution, "initial location");
        Self {
            state: NavigationState::new(initial_path, resolution),
            table,
        }
    }

    /// Handle one navigation event (history traversal or link activation).
    ///
    /// Updates the state and notifies every subscriber before returning.
    #[tracing::instrument(skip(self))]
    pub fn navigate(&mut self, path: &str) -> Resolution {
        let resolution = self.table.resolve(path);
        if resolution.is_not_found() {
            tracing::debug!("no route bound to path");
        } else {
            tracing::debug!(?resolution, "navigating");
        }
        self.state.update(path.to_string(), resolution);
        resolution
    }

    /// Navigate to an observed location, unless it is where we already are.
    ///
    /// Location sources report their current value on every change of any
    /// part of the URL; only a change of path counts as a navigation event.
    pub fn follow(&mut self, path: &str) -> Option<Resolution> {
        if self.state.current().path == path {
            tracing::trace!(path, "location unchanged");
            return None;
        }
        Some(self.navigate(path))
    }

    #[must_use]
    pub fn current(&self) -> &Location {
        self.state.current()
    }

    /// See [`NavigationState::subscribe`].
    pub fn subscribe(&mut self, callback: impl FnMut(&Location) + 'static) -> SubscriptionId {
        self.state.subscribe(callback)
    }

    /// See [`NavigationState::unsubscribe`].
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }
}
