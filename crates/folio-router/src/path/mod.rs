/// Path utilities for route validation and normalization
///
/// All functions are **pure**: given same input, always produce same output with no side effects.
use std::borrow::Cow;

/// Path used when a route carries no path at all
pub const HOME_PATH: &str = "/home";

/// Validates if a path is already in canonical form
///
/// # Rules
///
/// - Must not be empty
/// - Must start with `/`
///
/// Nothing else is rewritten: `/home/` and `/home` are different paths, so
/// exact matching can never alias two routes.
///
/// # Examples
///
/// ```
/// use folio_router::path::is_canonical_path;
///
/// assert!(is_canonical_path("/home"));
/// assert!(is_canonical_path("/projects/project-a"));
/// assert!(is_canonical_path("/"));
///
/// assert!(!is_canonical_path(""));
/// assert!(!is_canonical_path("home"));
/// ```
pub fn is_canonical_path(path: &str) -> bool {
    path.starts_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when the input is already canonical (zero allocations).
///
/// - Empty path: `""` → `/home`
/// - Missing leading slash: `home` → `/home`
///
/// # Examples
///
/// ```
/// use folio_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/home"), Cow::Borrowed("/home")));
/// assert_eq!(normalize_path(""), "/home");
/// assert_eq!(normalize_path("projects/project-b"), "/projects/project-b");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if path.is_empty() {
        return Cow::Borrowed(HOME_PATH);
    }

    if is_canonical_path(path) {
        return Cow::Borrowed(path);
    }

    Cow::Owned(format!("/{}", path))
}

/// Splits a raw route at the first `#` into path and anchor
///
/// The anchor is `None` when there is no delimiter or nothing follows it.
/// Everything after the first delimiter belongs to the anchor, including
/// further `#` characters.
///
/// ```
/// use folio_router::path::split_anchor;
///
/// assert_eq!(split_anchor("/home#cta"), ("/home", Some("cta")));
/// assert_eq!(split_anchor("/home#"), ("/home", None));
/// assert_eq!(split_anchor("/home"), ("/home", None));
/// assert_eq!(split_anchor("/a#b#c"), ("/a", Some("b#c")));
/// ```
pub fn split_anchor(raw: &str) -> (&str, Option<&str>) {
    match raw.split_once('#') {
        Some((path, anchor)) if !anchor.is_empty() => (path, Some(anchor)),
        Some((path, _)) => (path, None),
        None => (raw, None),
    }
}
