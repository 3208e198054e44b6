//! Navigation events and the route reducer.

use crate::route::Route;

/// Something that asks the route to change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    /// Programmatic navigation or a link click, carrying a `/path[#anchor]` route
    Navigate(String),
    /// The location fragment changed underneath us (back/forward, edited URL)
    LocationChanged(String),
}

impl NavigationEvent {
    pub fn navigate(route: impl Into<String>) -> Self {
        NavigationEvent::Navigate(route.into())
    }

    pub fn location_changed(fragment: impl Into<String>) -> Self {
        NavigationEvent::LocationChanged(fragment.into())
    }
}

/// `(current, event) -> next`
///
/// The next route depends only on the event, so the latest event always
/// wins. `current` is part of the signature so callers can treat routing as
/// a fold over events.
///
/// ```
/// use folio_router::{reduce, NavigationEvent, Route};
///
/// let current = Route::home();
/// let next = reduce(&current, &NavigationEvent::navigate("/projects/project-b"));
/// assert_eq!(next.path(), "/projects/project-b");
///
/// let back = reduce(&next, &NavigationEvent::location_changed("#/home"));
/// assert_eq!(back, current);
/// ```
pub fn reduce(_current: &Route, event: &NavigationEvent) -> Route {
    match event {
        NavigationEvent::Navigate(route) => Route::parse(route),
        NavigationEvent::LocationChanged(fragment) => Route::from_fragment(fragment),
    }
}
