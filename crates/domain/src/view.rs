//! Identifiers for the top-level views a route can bind to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    /// Navbar, sidebar and placeholder main content.
    Dashboard,
    /// The application page, opaque to the router.
    App,
}

impl ViewId {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::App => "app",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
