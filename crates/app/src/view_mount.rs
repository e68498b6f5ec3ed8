//! View mount — the single owner of the rendered attachment point.

use sensorboard_domain::error::MountError;
use sensorboard_domain::route::Resolution;
use sensorboard_domain::view::ViewId;

use crate::ports::{Host, RenderRoot};

/// Renders whichever view the navigator reports as active into one root.
///
/// An unmatched path clears the root: there is no fallback view.
#[derive(Debug)]
pub struct ViewMount<R> {
    root: R,
    active: Option<ViewId>,
}

impl<R: RenderRoot> ViewMount<R> {
    /// Attach to the container `container_id` and render `initial`.
    ///
    /// # Errors
    ///
    /// Returns [`MountError::MissingContainer`] when the host has no such
    /// container. Nothing can be rendered in that case.
    pub fn mount<H>(host: &H, container_id: &str, initial: Resolution) -> Result<Self, MountError>
    where
        H: Host<Root = R>,
    {
        let root = host
            .attach(container_id)
            .ok_or_else(|| MountError::MissingContainer(container_id.to_string()))?;
        let mut mount = Self { root, active: None };
        mount.on_navigate(initial);
        Ok(mount)
    }

    /// Replace the rendered content to match `resolution`.
    ///
    /// Navigating to the view that is already rendered leaves it untouched.
    pub fn on_navigate(&mut self, resolution: Resolution) {
        match (self.active, resolution.view()) {
            (Some(active), Some(next)) if active == next => {
                tracing::trace!(view = %next, "view already rendered");
            }
            (_, Some(next)) => {
                tracing::debug!(view = %next, "rendering view");
                self.root.render(next);
                self.active = Some(next);
            }
            (Some(_), None) => {
                tracing::debug!("clearing view for unmatched path");
                self.root.clear();
                self.active = None;
            }
            (None, None) => {}
        }
    }

    /// The view currently rendered, `None` when the root is blank.
    #[must_use]
    pub fn active(&self) -> Option<ViewId> {
        self.active
    }
}
