//! Navigation state — the current path and view, with synchronous subscribers.

use std::fmt;

use sensorboard_domain::route::Resolution;

/// Snapshot of where the user currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub resolution: Resolution,
}

/// Handle returned by [`NavigationState::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&Location)>;

/// Holds the current [`Location`] and notifies subscribers on every update.
///
/// Only the owner (the [`Navigator`](crate::navigator::Navigator)) can move
/// the state; subscribers observe it through shared references.
pub struct NavigationState {
    current: Location,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl NavigationState {
    #[must_use]
    pub fn new(path: impl Into<String>, resolution: Resolution) -> Self {
        Self {
            current: Location {
                path: path.into(),
                resolution,
            },
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    #[must_use]
    pub fn current(&self) -> &Location {
        &self.current
    }

    /// Register `callback` to run after every accepted navigation event.
    ///
    /// Callbacks run synchronously, in subscription order. They are not
    /// called for the state that exists at subscription time.
    pub fn subscribe(&mut self, callback: impl FnMut(&Location) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Detach a subscriber. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub(crate) fn update(&mut self, path: String, resolution: Resolution) {
        self.current = Location { path, resolution };
        for (_, callback) in &mut self.subscribers {
            callback(&self.current);
        }
    }
}

impl fmt::Debug for NavigationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationState")
            .field("current", &self.current)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
