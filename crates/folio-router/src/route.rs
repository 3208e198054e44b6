//! The normalized route value.

use std::fmt;

use crate::path::{normalize_path, split_anchor};
use crate::variant::PageVariant;

/// A normalized `/path[#anchor]` route
///
/// The path always starts with `/`. The anchor never takes part in page
/// resolution; it only names an in-page scroll target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    path: String,
    anchor: Option<String>,
}

impl Route {
    /// Parses a route such as `/home#cta`
    ///
    /// Never fails: an empty path becomes `/home` and a missing leading
    /// slash is added.
    ///
    /// ```
    /// use folio_router::Route;
    ///
    /// let route = Route::parse("/home#cta");
    /// assert_eq!(route.path(), "/home");
    /// assert_eq!(route.anchor(), Some("cta"));
    ///
    /// assert_eq!(Route::parse("").path(), "/home");
    /// assert_eq!(Route::parse("projects/project-a").path(), "/projects/project-a");
    /// ```
    pub fn parse(raw: &str) -> Self {
        let (path, anchor) = split_anchor(raw);
        Route {
            path: normalize_path(path).into_owned(),
            anchor: anchor.map(str::to_string),
        }
    }

    /// Parses a location fragment such as `#/home#cta`
    ///
    /// Exactly one leading `#` is removed before parsing.
    ///
    /// ```
    /// use folio_router::Route;
    ///
    /// let route = Route::from_fragment("#/projects/project-b");
    /// assert_eq!(route.path(), "/projects/project-b");
    /// assert_eq!(Route::from_fragment("").path(), "/home");
    /// ```
    pub fn from_fragment(fragment: &str) -> Self {
        Self::parse(fragment.strip_prefix('#').unwrap_or(fragment))
    }

    /// The home route, used when no location is known
    pub fn home() -> Self {
        Self::parse("")
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    /// The page this route shows
    pub fn variant(&self) -> PageVariant {
        PageVariant::from_path(&self.path)
    }

    /// Same path, different (or no) anchor
    pub fn with_anchor(mut self, anchor: Option<&str>) -> Self {
        self.anchor = anchor.filter(|a| !a.is_empty()).map(str::to_string);
        self
    }

    /// Location fragment form: `#/path[#anchor]`
    ///
    /// ```
    /// use folio_router::Route;
    ///
    /// assert_eq!(Route::parse("/home#cta").to_fragment(), "#/home#cta");
    /// ```
    pub fn to_fragment(&self) -> String {
        format!("#{}", self)
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::home()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.anchor {
            Some(anchor) => write!(f, "{}#{}", self.path, anchor),
            None => f.write_str(&self.path),
        }
    }
}

impl From<&str> for Route {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}
