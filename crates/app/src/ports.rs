//! Port definitions — the rendering boundary adapters implement.

use sensorboard_domain::view::ViewId;

/// The environment hosting the rendered output (a DOM document, a test double).
pub trait Host {
    /// Attachment point handed out by [`Host::attach`].
    type Root: RenderRoot;

    /// Look up the container with id `container_id` and bind a render root to it.
    ///
    /// Returns `None` when no such container exists.
    fn attach(&self, container_id: &str) -> Option<Self::Root>;
}

/// A single attachment point whose content is owned by one view mount.
pub trait RenderRoot {
    /// Replace whatever is rendered with `view`.
    fn render(&mut self, view: ViewId);

    /// Remove the rendered content, leaving the attachment point blank.
    fn clear(&mut self);
}

impl<T: RenderRoot + ?Sized> RenderRoot for Box<T> {
    fn render(&mut self, view: ViewId) {
        (**self).render(view);
    }

    fn clear(&mut self) {
        (**self).clear();
    }
}
