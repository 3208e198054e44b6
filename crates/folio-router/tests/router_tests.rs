//! Integration tests for folio-router
//!
//! Tests are organized by feature area:
//! - Route resolution (known paths, anchors, exact matching)
//! - Route state (navigation, listeners, re-entrancy)
//! - End-to-end navigation scenarios

use folio_router::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// ============================================================================
// Resolution
// ============================================================================

#[rstest]
#[case("", PageVariant::Home)]
#[case("/home", PageVariant::Home)]
#[case("home", PageVariant::Home)]
#[case("/projects/project-a", PageVariant::CaseStudyA)]
#[case("/projects/project-b", PageVariant::CaseStudyB)]
#[case("/projects/project-c", PageVariant::CaseStudyC)]
#[case("/", PageVariant::NotFound)]
#[case("/unknown", PageVariant::NotFound)]
#[case("/projects", PageVariant::NotFound)]
fn test_resolve_table(#[case] route: &str, #[case] expected: PageVariant) {
    assert_eq!(resolve(route), expected);
}

#[test]
fn test_resolve_strips_anchor() {
    assert_eq!(resolve("/home#projects"), resolve("/home"));
    assert_eq!(resolve("/home#projects"), PageVariant::Home);
    assert_eq!(resolve("/projects/project-b#results"), PageVariant::CaseStudyB);
}

#[test]
fn test_resolve_exact_match_only() {
    assert_eq!(resolve("/projects/project-a/extra"), PageVariant::NotFound);
    assert_eq!(resolve("/home/"), PageVariant::NotFound);
    assert_eq!(resolve("/homepage"), PageVariant::NotFound);
}

#[test]
fn test_resolve_anchor_only_routes_are_home() {
    assert_eq!(resolve("#cta"), PageVariant::Home);
    assert_eq!(resolve("#"), PageVariant::Home);
    assert_eq!(resolve("##"), PageVariant::Home);
}

// ============================================================================
// Route State
// ============================================================================

fn recording_listener(state: &RouteState) -> (ListenerId, Rc<RefCell<Vec<String>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let id = state.subscribe(move |route| sink.borrow_mut().push(route.to_string()));
    (id, seen)
}

#[test]
fn test_every_listener_notified_once() {
    let state = RouteState::in_memory();
    let (_, first) = recording_listener(&state);
    let (_, second) = recording_listener(&state);

    state.navigate("/projects/project-a");

    assert_eq!(*first.borrow(), vec!["/projects/project-a"]);
    assert_eq!(*second.borrow(), vec!["/projects/project-a"]);
}

#[test]
fn test_unsubscribe_is_idempotent() {
    let state = RouteState::in_memory();
    let (id, seen) = recording_listener(&state);

    assert!(state.unsubscribe(id));
    assert!(!state.unsubscribe(id));

    state.navigate("/projects/project-b");
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_anchor_change_is_a_navigation() {
    let state = RouteState::in_memory();
    let (_, seen) = recording_listener(&state);

    state.navigate("/home#projects");
    state.navigate("/home#cta");

    assert_eq!(*seen.borrow(), vec!["/home#projects", "/home#cta"]);
}

#[test]
fn test_reentrant_navigation_last_write_wins() {
    let state = RouteState::in_memory();

    // Redirect any unknown route back home from inside a listener
    let redirect_state = state.clone();
    state.subscribe(move |route| {
        if route.variant() == PageVariant::NotFound {
            redirect_state.navigate("/home#cta");
        }
    });
    let (_, seen) = recording_listener(&state);

    state.navigate("/does-not-exist");

    assert_eq!(state.current(), Route::parse("/home#cta"));
    // The trailing listener never sees the superseded route
    assert_eq!(*seen.borrow(), vec!["/home#cta"]);
}

#[test]
fn test_listener_unsubscribed_mid_notification_is_skipped() {
    let state = RouteState::in_memory();
    let victim_calls = Rc::new(Cell::new(0));
    let victim_id: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));

    let remover_state = state.clone();
    let remover_target = victim_id.clone();
    state.subscribe(move |_| {
        if let Some(id) = remover_target.get() {
            remover_state.unsubscribe(id);
        }
    });

    let counter = victim_calls.clone();
    victim_id.set(Some(state.subscribe(move |_| counter.set(counter.get() + 1))));

    state.navigate("/projects/project-a");

    assert_eq!(victim_calls.get(), 0);
    assert_eq!(state.listener_count(), 1);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_navigation_scenario() {
    let location = MemoryLocation::new();
    let state = RouteState::new(location.clone());

    state.navigate("/projects/project-b");
    assert_eq!(state.variant(), PageVariant::CaseStudyB);
    assert_eq!(location.fragment().as_deref(), Some("#/projects/project-b"));

    state.navigate("/unknown");
    assert_eq!(state.variant(), PageVariant::NotFound);

    state.navigate("/home#cta");
    assert_eq!(state.variant(), PageVariant::Home);
    assert_eq!(state.current().anchor(), Some("cta"));
}

#[test]
fn test_back_forward_via_location_events() {
    let location = MemoryLocation::new();
    let state = RouteState::new(location.clone());
    let (_, seen) = recording_listener(&state);

    state.navigate("/projects/project-a");
    state.navigate("/projects/project-c");
    // Browser goes back: the fragment changes first, then we are told
    state.dispatch(NavigationEvent::location_changed("#/projects/project-a"));

    assert_eq!(state.variant(), PageVariant::CaseStudyA);
    assert_eq!(
        *seen.borrow(),
        vec!["/projects/project-a", "/projects/project-c", "/projects/project-a"]
    );
    assert_eq!(location.write_count(), 2);
}

#[test]
fn test_echoed_location_event_is_ignored() {
    let location = MemoryLocation::new();
    let state = RouteState::new(location.clone());
    let (_, seen) = recording_listener(&state);

    state.navigate("/projects/project-b");
    // The browser fires hashchange for our own write
    let fragment = location.fragment().unwrap();
    state.dispatch(NavigationEvent::location_changed(fragment));

    assert_eq!(seen.borrow().len(), 1);
}
