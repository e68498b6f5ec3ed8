//! Bootstrap wiring: route table → view mount → navigator.

use std::cell::RefCell;
use std::rc::Rc;

use sensorboard_domain::error::SensorboardError;
use sensorboard_domain::route::{Resolution, RouteTable};
use sensorboard_domain::view::ViewId;

use crate::navigation::Location;
use crate::navigator::Navigator;
use crate::ports::{Host, RenderRoot};
use crate::view_mount::ViewMount;

/// A running application: the navigator, with the view mount subscribed to it.
pub struct Shell<R> {
    navigator: Navigator,
    mount: Rc<RefCell<ViewMount<R>>>,
}

impl<R: RenderRoot + 'static> Shell<R> {
    /// Mount the view resolved from `initial_path` into `container_id` and
    /// hand rendering over to the navigator.
    ///
    /// # Errors
    ///
    /// Returns [`SensorboardError::Mount`] when the container does not exist.
    pub fn start<H>(
        host: &H,
        container_id: &str,
        table: RouteTable,
        initial_path: &str,
    ) -> Result<Self, SensorboardError>
    where
        H: Host<Root = R>,
    {
        let mut navigator = Navigator::new(table, initial_path);
        let mount = ViewMount::mount(host, container_id, navigator.current().resolution)?;
        let mount = Rc::new(RefCell::new(mount));

        let subscriber = Rc::clone(&mount);
        navigator.subscribe(move |location| {
            subscriber.borrow_mut().on_navigate(location.resolution);
        });

        tracing::info!(container_id, path = initial_path, "shell started");
        Ok(Self { navigator, mount })
    }

    /// Forward a navigation event to the navigator. The mount re-renders
    /// before this returns.
    pub fn navigate(&mut self, path: &str) -> Resolution {
        self.navigator.navigate(path)
    }

    /// Forward an observed location; see [`Navigator::follow`].
    pub fn follow(&mut self, path: &str) -> Option<Resolution> {
        self.navigator.follow(path)
    }

    #[must_use]
    pub fn current(&self) -> &Location {
        self.navigator.current()
    }

    /// The view currently rendered, `None` when the attachment point is blank.
    #[must_use]
    pub fn active_view(&self) -> Option<ViewId> {
        self.mount.borrow().active()
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }
}

#[cfg(test)]
mod tests {
    use sensorboard_domain::error::MountError;

    use super::*;
    use crate::testing::{Frame, RecordingHost};

    fn start(host: &RecordingHost, path: &str) -> Shell<crate::testing::RecordingRoot> {
        Shell::start(host, "root", RouteTable::standard(), path).unwrap()
    }

    #[test]
    fn should_render_dashboard_when_started_at_root() {
        let host = RecordingHost::with_container("root");
        let shell = start(&host, "/");
        assert_eq!(shell.active_view(), Some(ViewId::Dashboard));
        assert_eq!(host.frames(), [Frame::Rendered(ViewId::Dashboard)]);
    }

    #[test]
    fn should_fail_to_start_without_container() {
        let host = RecordingHost::default();
        let result = Shell::start(&host, "root", RouteTable::standard(), "/");
        assert!(matches!(
            result,
            Err(SensorboardError::Mount(MountError::MissingContainer(ref id))) if id == "root"
        ));
    }

    #[test]
    fn should_return_to_dashboard_from_app() {
        let host = RecordingHost::with_container("root");
        let mut shell = start(&host, "/app");

        shell.navigate("/");
        shell.navigate("/");

        assert_eq!(shell.active_view(), Some(ViewId::Dashboard));
        assert_eq!(
            host.frames(),
            [
                Frame::Rendered(ViewId::App),
                Frame::Rendered(ViewId::Dashboard)
            ]
        );
    }

    #[test]
    fn should_blank_on_sidebar_target() {
        let host = RecordingHost::with_container("root");
        let mut shell = start(&host, "/");

        assert_eq!(shell.navigate("/download"), Resolution::NotFound);

        assert_eq!(shell.active_view(), None);
        assert_eq!(shell.current().path, "/download");
    }

    #[test]
    fn should_not_rerender_when_same_location_is_reported_again() {
        let host = RecordingHost::with_container("root");
        let mut shell = start(&host, "/app");

        shell.follow("/app");
        shell.follow("/");
        shell.follow("/");

        assert_eq!(
            host.frames(),
            [
                Frame::Rendered(ViewId::App),
                Frame::Rendered(ViewId::Dashboard)
            ]
        );
    }

    #[test]
    fn should_let_extra_subscribers_observe_navigation() {
        let host = RecordingHost::with_container("root");
        let mut shell = start(&host, "/");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        shell
            .navigator_mut()
            .subscribe(move |loc| sink.borrow_mut().push(loc.path.clone()));

        shell.navigate("/app");

        assert_eq!(*seen.borrow(), ["/app"]);
        assert_eq!(shell.active_view(), Some(ViewId::App));
    }
}
