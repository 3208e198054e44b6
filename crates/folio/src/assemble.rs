// File: src/assemble.rs
// Purpose: Turn a route into the page tree that gets rendered

use std::fmt::Display;

use folio_router::{PageVariant, Route, HOME_PATH};
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::content::{CaseStudy, ContentSource, GlanceItem, Hero};
use crate::section::{compose, ComposedSection};

/// Scroll the renderer should perform once the page is on screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrollRequest {
    pub anchor: String,
}

/// A link-style action that navigates to a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavAction {
    pub label: String,
    pub route: String,
}

/// The block shown instead of a page that does not exist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fallback {
    pub title: String,
    pub message: String,
    /// The one and only way out: back to `/home`
    pub action: NavAction,
}

impl Default for Fallback {
    fn default() -> Self {
        Fallback {
            title: "Page not found".to_string(),
            message: "Use the navigation to go back.".to_string(),
            action: NavAction {
                label: "Back to home".to_string(),
                route: HOME_PATH.to_string(),
            },
        }
    }
}

/// Case study header fields, without the section list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseStudyHeader<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub meta: &'a [String],
    pub hero_image_hint: &'a str,
    pub at_a_glance: &'a [GlanceItem],
}

impl<'a> From<&'a CaseStudy> for CaseStudyHeader<'a> {
    fn from(study: &'a CaseStudy) -> Self {
        CaseStudyHeader {
            title: &study.title,
            subtitle: &study.subtitle,
            meta: &study.meta,
            hero_image_hint: &study.hero_image_hint,
            at_a_glance: &study.at_a_glance,
        }
    }
}

/// Renderable tree of one page, sections in their original order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum PageTree<'a> {
    Home {
        hero: &'a Hero,
        sections: Vec<ComposedSection<'a>>,
    },
    CaseStudy {
        header: CaseStudyHeader<'a>,
        sections: Vec<ComposedSection<'a>>,
    },
    NotFound(Fallback),
}

impl PageTree<'_> {
    pub fn sections(&self) -> &[ComposedSection<'_>] {
        match self {
            PageTree::Home { sections, .. } | PageTree::CaseStudy { sections, .. } => {
                sections.as_slice()
            }
            PageTree::NotFound(_) => &[],
        }
    }

    /// Anchor ids the page renders, in order
    pub fn anchors(&self) -> Vec<&str> {
        self.sections().iter().map(|s| s.anchor()).collect()
    }

    pub fn contains_anchor(&self, anchor: &str) -> bool {
        self.sections().iter().any(|s| s.anchor() == anchor)
    }
}

/// Output of one assembly pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssembledPage<'a> {
    #[serde(serialize_with = "as_display")]
    pub route: Route,
    #[serde(serialize_with = "as_display")]
    pub variant: PageVariant,
    pub tree: PageTree<'a>,
    /// Pending scroll, only ever set on the home page
    pub scroll: Option<ScrollRequest>,
}

fn as_display<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Combines route resolution, the content source and the section composer
#[derive(Debug)]
pub struct PageAssembler<'a, C: ?Sized> {
    content: &'a C,
}

impl<'a, C: ContentSource + ?Sized> PageAssembler<'a, C> {
    pub fn new(content: &'a C) -> Self {
        PageAssembler { content }
    }

    /// Builds the page for a route
    ///
    /// Recomputed on every call; nothing is cached. A case study without
    /// content degrades to the not-found fallback.
    pub fn assemble(&self, route: &Route) -> AssembledPage<'a> {
        let variant = route.variant();

        let tree = match variant {
            PageVariant::Home => {
                let home = self.content.home();
                PageTree::Home {
                    hero: &home.hero,
                    sections: compose(&home.sections),
                }
            }
            PageVariant::NotFound => PageTree::NotFound(Fallback::default()),
            case_study => match self.content.case_study(case_study) {
                Some(study) => PageTree::CaseStudy {
                    header: CaseStudyHeader::from(study),
                    sections: compose(&study.sections),
                },
                None => PageTree::NotFound(Fallback::default()),
            },
        };

        let scroll = match (variant, route.anchor()) {
            (PageVariant::Home, Some(anchor)) => Some(ScrollRequest {
                anchor: anchor.to_string(),
            }),
            _ => None,
        };

        debug!(
            route = %route,
            variant = %variant,
            sections = tree.sections().len(),
            scroll = ?scroll.as_ref().map(|s| s.anchor.as_str()),
            "assembled page"
        );

        AssembledPage {
            route: route.clone(),
            variant,
            tree,
            scroll,
        }
    }
}
