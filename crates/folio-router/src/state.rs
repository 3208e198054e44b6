//! Process-wide route state with explicit subscribe/unsubscribe lifecycle.
//!
//! Everything here runs on a single UI thread, so the state is shared through
//! `Rc<RefCell<_>>` rather than locks. Listeners are never called while the
//! state is borrowed, which lets a listener call [`RouteState::navigate`]
//! again from inside a notification.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::event::{reduce, NavigationEvent};
use crate::route::Route;
use crate::variant::PageVariant;

/// The externally visible location fragment (`#/path[#anchor]`)
///
/// Browser builds back this with `window.location.hash`; everything else uses
/// [`MemoryLocation`].
pub trait Location {
    /// Current fragment including its leading `#`, `None` when unset
    fn read(&self) -> Option<String>;

    /// Replace the fragment
    fn write(&self, fragment: &str);
}

/// In-process [`Location`], shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    fragment: Rc<RefCell<Option<String>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryLocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fragment(fragment: impl Into<String>) -> Self {
        let location = Self::new();
        *location.fragment.borrow_mut() = Some(fragment.into());
        location
    }

    /// Last written (or initial) fragment
    pub fn fragment(&self) -> Option<String> {
        self.fragment.borrow().clone()
    }

    /// How many times the fragment was written
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl Location for MemoryLocation {
    fn read(&self) -> Option<String> {
        self.fragment()
    }

    fn write(&self, fragment: &str) {
        *self.fragment.borrow_mut() = Some(fragment.to_string());
        self.writes.set(self.writes.get() + 1);
    }
}

/// Handle returned by [`RouteState::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn(&Route)>;

struct Inner {
    current: Route,
    /// Bumped on every distinct navigation; used to detect re-entrant writes
    generation: u64,
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
    shut_down: bool,
}

/// Owner of the current route
///
/// `navigate` is the single writer path. Clones share the same state.
#[derive(Clone)]
pub struct RouteState {
    inner: Rc<RefCell<Inner>>,
    location: Rc<dyn Location>,
}

impl RouteState {
    /// Creates the state, reading the initial route from the location
    ///
    /// A missing fragment starts on `/home`.
    pub fn new(location: impl Location + 'static) -> Self {
        let current = location
            .read()
            .map(|fragment| Route::from_fragment(&fragment))
            .unwrap_or_default();

        debug!(route = %current, "route state created");

        RouteState {
            inner: Rc::new(RefCell::new(Inner {
                current,
                generation: 0,
                next_id: 0,
                listeners: Vec::new(),
                shut_down: false,
            })),
            location: Rc::new(location),
        }
    }

    /// State backed by a fresh [`MemoryLocation`]
    pub fn in_memory() -> Self {
        Self::new(MemoryLocation::new())
    }

    pub fn current(&self) -> Route {
        self.inner.borrow().current.clone()
    }

    /// Page variant of the current route
    pub fn variant(&self) -> PageVariant {
        self.inner.borrow().current.variant()
    }

    /// Navigates to a `/path[#anchor]` route
    ///
    /// Never fails: the input is normalized first. The location fragment is
    /// updated and listeners are notified, unless the route is already
    /// current.
    pub fn navigate(&self, route: &str) {
        self.dispatch(NavigationEvent::navigate(route));
    }

    /// Applies a navigation event
    ///
    /// [`NavigationEvent::LocationChanged`] comes from the location itself, so
    /// the fragment is not written back.
    pub fn dispatch(&self, event: NavigationEvent) {
        let next = reduce(&self.current(), &event);
        let write_location = matches!(event, NavigationEvent::Navigate(_));
        self.apply(next, write_location);
    }

    /// Registers a listener, called once per distinct navigation
    ///
    /// Call order between listeners is unspecified.
    pub fn subscribe(&self, listener: impl Fn(&Route) + 'static) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;

        if inner.shut_down {
            warn!(?id, "subscribe after shutdown ignored");
        } else {
            inner.listeners.push((id, Rc::new(listener)));
        }
        id
    }

    /// Removes a listener. Idempotent; returns whether anything was removed.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(listener_id, _)| *listener_id != id);
        inner.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Tears the state down: every listener is dropped
    ///
    /// Navigation keeps updating the route afterwards but notifies nobody.
    pub fn shutdown(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.shut_down = true;
        let dropped = inner.listeners.len();
        inner.listeners.clear();
        debug!(dropped, "route state shut down");
    }

    fn apply(&self, next: Route, write_location: bool) {
        let (generation, listeners) = {
            let mut inner = self.inner.borrow_mut();
            if inner.current == next {
                trace!(route = %next, "navigation to current route skipped");
                return;
            }
            inner.current = next.clone();
            inner.generation += 1;
            (inner.generation, inner.listeners.clone())
        };

        debug!(route = %next, variant = %next.variant(), "navigated");

        if write_location {
            self.location.write(&next.to_fragment());
        }

        for (id, listener) in listeners {
            let (superseded, still_subscribed) = {
                let inner = self.inner.borrow();
                (
                    inner.generation != generation,
                    inner.listeners.iter().any(|(listener_id, _)| *listener_id == id),
                )
            };
            if superseded {
                // A listener navigated again; that pass already notified everyone
                trace!(route = %next, "notification superseded");
                break;
            }
            if still_subscribed {
                listener(&next);
            }
        }
    }
}

impl fmt::Debug for RouteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("RouteState")
            .field("current", &inner.current)
            .field("generation", &inner.generation)
            .field("listeners", &inner.listeners.len())
            .field("shut_down", &inner.shut_down)
            .finish()
    }
}
