// Folio - hash-routed portfolio site
// Section composition, page assembly and Maud rendering on top of folio-router

pub mod assemble;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod render;
pub mod scroll;
pub mod section;
pub mod validate;

// Re-export the router so callers need a single dependency
pub use folio_router;
pub use folio_router::{resolve, NavigationEvent, PageVariant, Route, RouteState};

// Re-export Maud for callers embedding rendered pages
pub use maud::{Markup, PreEscaped};

// Re-export core types
pub use assemble::{AssembledPage, Fallback, NavAction, PageAssembler, PageTree, ScrollRequest};
pub use config::{Config, SiteConfig};
pub use contact::mailto_link;
pub use content::{CaseStudy, ContentSource, HomePage, ProjectCard, SiteContent};
pub use error::FolioError;
pub use scroll::{scroll_to_anchor, AnchorScroller, RecordingScroller};
pub use section::{
    compose, ComposedSection, ResolvedTone, SectionBody, SectionDefinition, SectionTone,
};
pub use validate::{validate_content, validate_site, ContentIssue};
