//! # Folio Router
//!
//! Hash-fragment routing for the folio site:
//! - Route normalization (`/path[#anchor]`, empty → `/home`)
//! - Exact-match resolution of a route to a [`PageVariant`]
//! - A pure `(route, event) -> route` reducer
//! - [`RouteState`], the single owner of the current route, with listeners
//!
//! ## Location Fragment Grammar
//!
//! `#/<path>[#<anchor>]`. The anchor never takes part in page resolution.
//!
//! | Path | Variant |
//! |---|---|
//! | *(empty)* or `/home` | `Home` |
//! | `/projects/project-a` | `CaseStudyA` |
//! | `/projects/project-b` | `CaseStudyB` |
//! | `/projects/project-c` | `CaseStudyC` |
//! | anything else | `NotFound` |
//!
//! ## Example
//!
//! ```
//! use folio_router::{MemoryLocation, PageVariant, RouteState};
//!
//! let state = RouteState::new(MemoryLocation::new());
//! state.navigate("/home#cta");
//!
//! assert_eq!(state.variant(), PageVariant::Home);
//! assert_eq!(state.current().anchor(), Some("cta"));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod event;
pub mod path;
mod route;
mod state;
mod variant;

pub use event::{reduce, NavigationEvent};
pub use path::{normalize_path, HOME_PATH};
pub use route::Route;
pub use state::{ListenerId, Location, MemoryLocation, RouteState};
pub use variant::{resolve, PageVariant};
