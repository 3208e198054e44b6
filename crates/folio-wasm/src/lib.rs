//! Folio WASM
//!
//! Browser entry point. Binds the route state to `window.location.hash`,
//! re-renders the app root on every navigation and wires the in-page
//! interactions: the narrow-screen menu toggle, jump-to buttons and the
//! contact form.
//!
//! # Example (JavaScript)
//! ```javascript
//! import init, { mount, navigate } from './pkg/folio_wasm.js';
//!
//! await init();
//! mount('app', { site: { email: 'me@example.com' } });
//! navigate('/home#cta');
//! ```

use std::cell::RefCell;

use folio::render;
use folio::{
    mailto_link, scroll_to_anchor, validate_content, validate_site, AnchorScroller,
    PageAssembler, SiteConfig, SiteContent,
};
use folio_router::{Location, NavigationEvent, Route, RouteState};
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    console, Document, Element, Event, EventTarget, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Options object accepted by `mount`
#[derive(Deserialize, Debug, Default)]
pub struct MountOptions {
    #[serde(default)]
    pub site: SiteConfig,

    /// Replaces the built-in content when present
    #[serde(default)]
    pub content: Option<SiteContent>,
}

impl MountOptions {
    fn from_js(value: JsValue) -> Result<Self, JsValue> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse mount options: {}", e)))
    }
}

/// `window.location.hash` as the route state's location
struct HashLocation {
    location: web_sys::Location,
}

impl Location for HashLocation {
    fn read(&self) -> Option<String> {
        self.location.hash().ok().filter(|hash| !hash.is_empty())
    }

    fn write(&self, fragment: &str) {
        if let Err(err) = self.location.set_hash(fragment) {
            console::error_2(&JsValue::from_str("failed to update location hash"), &err);
        }
    }
}

/// Smooth-scrolls to elements of the live document
struct DomScroller {
    document: Document,
}

impl AnchorScroller for DomScroller {
    fn scroll_into_view(&self, anchor: &str) -> bool {
        let Some(element) = self.document.get_element_by_id(anchor) else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Projects the current route into the root element
struct Renderer {
    window: Window,
    document: Document,
    root: Element,
    site: SiteConfig,
    content: SiteContent,
}

impl Renderer {
    fn render(&self, route: &Route) {
        let page = PageAssembler::new(&self.content).assemble(route);
        self.root
            .set_inner_html(&render::app(&self.site, &page).into_string());

        // Scroll only once the new tree is in the document
        match &page.scroll {
            Some(request) => {
                let scroller = DomScroller {
                    document: self.document.clone(),
                };
                scroll_to_anchor(&scroller, &request.anchor);
            }
            None => self.window.scroll_to_with_x_and_y(0.0, 0.0),
        }
    }
}

/// DOM listener, removed from its target when dropped
struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

fn listen(
    target: &EventTarget,
    kind: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<Listener, JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    Ok(Listener {
        target: target.clone(),
        kind,
        closure,
    })
}

struct App {
    state: RouteState,
    _listeners: Vec<Listener>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Mount the site into the element with id `root_id`
///
/// Mounting again replaces the previous app.
#[wasm_bindgen]
pub fn mount(root_id: &str, options: JsValue) -> Result<(), JsValue> {
    let options = MountOptions::from_js(options)?;
    unmount();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let root = document
        .get_element_by_id(root_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", root_id)))?;

    let content = options.content.unwrap_or_else(SiteContent::builtin);
    let issues = validate_site(&options.site)
        .into_iter()
        .chain(validate_content(&content));
    for issue in issues {
        console::warn_1(&JsValue::from_str(&issue.to_string()));
    }

    let state = RouteState::new(HashLocation {
        location: window.location(),
    });

    let renderer = Renderer {
        window: window.clone(),
        document: document.clone(),
        root: root.clone(),
        site: options.site,
        content,
    };
    renderer.render(&state.current());
    state.subscribe(move |route| renderer.render(route));

    let mut listeners = Vec::new();

    // Back/forward and hand-edited URLs
    let hash_state = state.clone();
    let location = window.location();
    listeners.push(listen(&window, "hashchange", move |_event| {
        let fragment = location.hash().unwrap_or_default();
        hash_state.dispatch(NavigationEvent::location_changed(fragment));
    })?);

    let menu_root = root.clone();
    listeners.push(listen(&root, "click", move |event| {
        if closest(&event, "[data-menu-toggle]").is_some() {
            toggle_menu(&menu_root);
            return;
        }
        if closest(&event, ".mobile-menu a").is_some() {
            close_menu(&menu_root);
        }
        if let Some(anchor) = scroll_target(&event) {
            event.prevent_default();
            let scroller = DomScroller {
                document: document.clone(),
            };
            scroll_to_anchor(&scroller, &anchor);
        }
    })?);

    let submit_window = window.clone();
    listeners.push(listen(&root, "submit", move |event| {
        if let Some(href) = contact_mailto(&event) {
            event.prevent_default();
            if let Err(err) = submit_window.location().set_href(&href) {
                console::error_2(&JsValue::from_str("failed to open mail client"), &err);
            }
        }
    })?);

    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            state,
            _listeners: listeners,
        })
    });
    Ok(())
}

/// Tear down the mounted app: listeners are removed and the route state shut down
#[wasm_bindgen]
pub fn unmount() {
    if let Some(app) = APP.with(|app| app.borrow_mut().take()) {
        app.state.shutdown();
    }
}

/// Navigate the mounted app to a `/path[#anchor]` route
#[wasm_bindgen]
pub fn navigate(route: &str) -> Result<(), JsValue> {
    let state = APP
        .with(|app| app.borrow().as_ref().map(|app| app.state.clone()))
        .ok_or_else(|| JsValue::from_str("folio is not mounted"))?;
    state.navigate(route);
    Ok(())
}

/// Current route of the mounted app, e.g. `/home#cta`
#[wasm_bindgen(js_name = currentRoute)]
pub fn current_route() -> Option<String> {
    APP.with(|app| app.borrow().as_ref().map(|app| app.state.current().to_string()))
}

/// Nearest element matching `selector` from the event target upwards
fn closest(event: &Event, selector: &str) -> Option<Element> {
    let element = event.target()?.dyn_into::<Element>().ok()?;
    element.closest(selector).ok()?
}

/// Anchor of the `[data-scroll-to]` element an event came from
fn scroll_target(event: &Event) -> Option<String> {
    closest(event, "[data-scroll-to]")?.get_attribute("data-scroll-to")
}

/// Opens or closes the narrow-screen menu; returns whether it is now open
fn toggle_menu(root: &Element) -> bool {
    let Ok(Some(menu)) = root.query_selector(".mobile-menu") else {
        return false;
    };
    let open = menu.has_attribute("hidden");
    set_menu_open(root, &menu, open);
    open
}

fn close_menu(root: &Element) {
    if let Ok(Some(menu)) = root.query_selector(".mobile-menu") {
        set_menu_open(root, &menu, false);
    }
}

fn set_menu_open(root: &Element, menu: &Element, open: bool) {
    let result = if open {
        menu.remove_attribute("hidden")
    } else {
        menu.set_attribute("hidden", "")
    };
    if let Err(err) = result {
        console::error_2(&JsValue::from_str("failed to toggle menu"), &err);
    }

    if let Ok(Some(toggle)) = root.query_selector("[data-menu-toggle]") {
        let _ = toggle.set_attribute("aria-expanded", if open { "true" } else { "false" });
    }
}

/// mailto link for a submitted contact form
fn contact_mailto(event: &Event) -> Option<String> {
    let form = event.target()?.dyn_into::<HtmlFormElement>().ok()?;
    if form.id() != render::CONTACT_FORM_ID {
        return None;
    }

    let to = form.get_attribute("data-mailto")?;
    let name = form
        .query_selector("input[name=name]")
        .ok()??
        .dyn_into::<HtmlInputElement>()
        .ok()?
        .value();
    let message = form
        .query_selector("textarea[name=message]")
        .ok()??
        .dyn_into::<HtmlTextAreaElement>()
        .ok()?
        .value();

    Some(mailto_link(&to, &name, &message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_missing_options_use_defaults() {
        let options = MountOptions::from_js(JsValue::UNDEFINED).unwrap();
        assert_eq!(options.site, SiteConfig::default());
        assert!(options.content.is_none());
    }

    #[wasm_bindgen_test]
    fn test_menu_toggle_opens_and_closes() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        let site = SiteConfig::default();
        let content = SiteContent::builtin();
        let page = PageAssembler::new(&content).assemble(&Route::home());
        root.set_inner_html(&render::app(&site, &page).into_string());

        let menu = root.query_selector(".mobile-menu").unwrap().unwrap();
        let toggle = root.query_selector("[data-menu-toggle]").unwrap().unwrap();
        assert!(menu.has_attribute("hidden"));

        assert!(toggle_menu(&root));
        assert!(!menu.has_attribute("hidden"));
        assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));

        close_menu(&root);
        assert!(menu.has_attribute("hidden"));
        assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    }

    #[wasm_bindgen_test]
    fn test_navigate_requires_mount() {
        unmount();
        assert!(navigate("/home").is_err());
        assert!(current_route().is_none());
    }
}
