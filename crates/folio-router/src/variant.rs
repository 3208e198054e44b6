//! Page variants and the route resolver.

use std::fmt;

use crate::route::Route;

/// The page shown for a route. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageVariant {
    Home,
    CaseStudyA,
    CaseStudyB,
    CaseStudyC,
    NotFound,
}

/// Known-path table. Matching is exact string equality, never prefix based.
const KNOWN_PATHS: [(&str, PageVariant); 4] = [
    ("/home", PageVariant::Home),
    ("/projects/project-a", PageVariant::CaseStudyA),
    ("/projects/project-b", PageVariant::CaseStudyB),
    ("/projects/project-c", PageVariant::CaseStudyC),
];

impl PageVariant {
    /// Every variant that has a page of its own, in navigation order
    pub const ALL: [PageVariant; 4] = [
        PageVariant::Home,
        PageVariant::CaseStudyA,
        PageVariant::CaseStudyB,
        PageVariant::CaseStudyC,
    ];

    /// Looks up a normalized path (no anchor) in the known-path table
    ///
    /// ```
    /// use folio_router::PageVariant;
    ///
    /// assert_eq!(PageVariant::from_path("/projects/project-a"), PageVariant::CaseStudyA);
    /// assert_eq!(PageVariant::from_path("/projects/project-a/extra"), PageVariant::NotFound);
    /// ```
    pub fn from_path(path: &str) -> Self {
        KNOWN_PATHS
            .iter()
            .find_map(|(known, variant)| (*known == path).then_some(*variant))
            .unwrap_or(PageVariant::NotFound)
    }

    /// Canonical path of this page, `None` for [`PageVariant::NotFound`]
    pub fn path(self) -> Option<&'static str> {
        KNOWN_PATHS
            .iter()
            .find_map(|(path, variant)| (*variant == self).then_some(*path))
    }

    /// Whether this variant is one of the case study pages
    pub fn is_case_study(self) -> bool {
        matches!(
            self,
            PageVariant::CaseStudyA | PageVariant::CaseStudyB | PageVariant::CaseStudyC
        )
    }
}

impl fmt::Display for PageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageVariant::Home => "home",
            PageVariant::CaseStudyA => "case-study-a",
            PageVariant::CaseStudyB => "case-study-b",
            PageVariant::CaseStudyC => "case-study-c",
            PageVariant::NotFound => "not-found",
        };
        f.write_str(name)
    }
}

/// Resolves any route string to the page it shows
///
/// Pure and total: the anchor is stripped, an empty path means `/home`, and
/// anything outside the known-path table is [`PageVariant::NotFound`].
///
/// ```
/// use folio_router::{resolve, PageVariant};
///
/// assert_eq!(resolve("/home#projects"), PageVariant::Home);
/// assert_eq!(resolve(""), PageVariant::Home);
/// assert_eq!(resolve("/unknown"), PageVariant::NotFound);
/// ```
pub fn resolve(route: &str) -> PageVariant {
    Route::parse(route).variant()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_roundtrip_for_known_pages() {
        for variant in PageVariant::ALL {
            let path = variant.path().unwrap();
            assert_eq!(PageVariant::from_path(path), variant);
        }
        assert_eq!(PageVariant::NotFound.path(), None);
    }

    #[test]
    fn test_from_path_is_exact() {
        assert_eq!(PageVariant::from_path("/home/"), PageVariant::NotFound);
        assert_eq!(PageVariant::from_path("/HOME"), PageVariant::NotFound);
        assert_eq!(PageVariant::from_path("/projects"), PageVariant::NotFound);
        assert_eq!(PageVariant::from_path("/projects/project-"), PageVariant::NotFound);
    }

    #[test]
    fn test_is_case_study() {
        assert!(!PageVariant::Home.is_case_study());
        assert!(PageVariant::CaseStudyB.is_case_study());
        assert!(!PageVariant::NotFound.is_case_study());
    }

    #[test]
    fn test_display() {
        assert_eq!(PageVariant::CaseStudyC.to_string(), "case-study-c");
        assert_eq!(PageVariant::NotFound.to_string(), "not-found");
    }
}
