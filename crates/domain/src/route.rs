//! Route — a path → view binding, and the ordered table that resolves paths.

use std::collections::HashSet;

use crate::error::{RouteTableError, SensorboardError};
use crate::path::RoutePath;
use crate::view::ViewId;

/// An immutable binding of a path pattern to a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: RoutePath,
    pub view: ViewId,
}

impl Route {
    #[must_use]
    pub fn new(path: RoutePath, view: ViewId) -> Self {
        Self { path, view }
    }

    /// Whether this route matches `path` exactly.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.path.as_str() == path
    }
}

/// Outcome of resolving a path against a [`RouteTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Matched(ViewId),
    /// No route is bound to the path.
    NotFound,
}

impl Resolution {
    /// The matched view, if any.
    #[must_use]
    pub fn view(self) -> Option<ViewId> {
        match self {
            Self::Matched(view) => Some(view),
            Self::NotFound => None,
        }
    }

    #[must_use]
    pub fn is_not_found(self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Ordered, immutable set of routes with unique paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Create a builder for constructing a [`RouteTable`].
    #[must_use]
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// The table served by the dashboard: `/app` → App, `/` → Dashboard.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            routes: vec![
                Route::new(RoutePath::from_static("/app"), ViewId::App),
                Route::new(RoutePath::root(), ViewId::Dashboard),
            ],
        }
    }

    /// Resolve `path` to the view of the first route matching it exactly.
    ///
    /// Total over all strings: anything that is not a registered path,
    /// including strings that are not valid URL paths, is [`Resolution::NotFound`].
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution {
        self.routes
            .iter()
            .find(|route| route.matches(path))
            .map_or(Resolution::NotFound, |route| Resolution::Matched(route.view))
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Step-by-step builder for [`RouteTable`], preserving registration order.
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: Vec<(String, ViewId)>,
}

impl RouteTableBuilder {
    #[must_use]
    pub fn route(mut self, path: impl Into<String>, view: ViewId) -> Self {
        self.routes.push((path.into(), view));
        self
    }

    /// Consume the builder, validate every path, and return a [`RouteTable`].
    ///
    /// # Errors
    ///
    /// Returns [`SensorboardError::Validation`] if a path is not a valid URL
    /// path, and [`SensorboardError::RouteTable`] if a path is registered twice.
    pub fn build(self) -> Result<RouteTable, SensorboardError> {
        let mut seen = HashSet::with_capacity(self.routes.len());
        let mut routes = Vec::with_capacity(self.routes.len());
        for (path, view) in self.routes {
            let path = RoutePath::parse(path)?;
            if !seen.insert(path.clone()) {
                return Err(RouteTableError::DuplicatePath(path.to_string()).into());
            }
            routes.push(Route::new(path, view));
        }
        Ok(RouteTable { routes })
    }
}
