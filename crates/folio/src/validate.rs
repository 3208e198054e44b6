// File: src/validate.rs
// Purpose: Content-authoring checks run before the site is served

use std::collections::HashMap;
use std::fmt;

use folio_router::{resolve, PageVariant};

use crate::config::SiteConfig;
use crate::content::ContentSource;
use crate::error::FolioError;
use crate::section::{SectionBody, SectionDefinition};

/// A content or configuration defect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentIssue {
    /// Two sections share an anchor; scroll targets become ambiguous
    DuplicateAnchor {
        page: String,
        anchor: String,
        first: usize,
        second: usize,
    },
    EmptyAnchor {
        page: String,
        index: usize,
    },
    /// Anchors are used as element ids and fragment suffixes
    MalformedAnchor {
        page: String,
        index: usize,
        anchor: String,
    },
    /// A link points at an anchor the page does not render
    MissingAnchor {
        page: String,
        anchor: String,
    },
    /// A project card links to a route that resolves to no page
    DeadProjectLink {
        page: String,
        route: String,
    },
    InvalidEmail(String),
    InsecureLink {
        name: &'static str,
        url: String,
    },
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentIssue::DuplicateAnchor { page, anchor, first, second } => write!(
                f,
                "{}: anchor '{}' used by sections {} and {}",
                page, anchor, first, second
            ),
            ContentIssue::EmptyAnchor { page, index } => {
                write!(f, "{}: section {} has an empty anchor", page, index)
            }
            ContentIssue::MalformedAnchor { page, index, anchor } => write!(
                f,
                "{}: section {} anchor '{}' contains whitespace or '#'",
                page, index, anchor
            ),
            ContentIssue::MissingAnchor { page, anchor } => {
                write!(f, "{}: nothing renders anchor '{}'", page, anchor)
            }
            ContentIssue::DeadProjectLink { page, route } => {
                write!(f, "{}: project link '{}' resolves to no page", page, route)
            }
            ContentIssue::InvalidEmail(email) => {
                write!(f, "site email '{}' should be a valid email", email)
            }
            ContentIssue::InsecureLink { name, url } => {
                write!(f, "site {} '{}' should start with https://", name, url)
            }
        }
    }
}

/// Checks one page's section list
pub fn validate_page(page: &str, sections: &[SectionDefinition]) -> Vec<ContentIssue> {
    let mut issues = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (index, section) in sections.iter().enumerate() {
        let anchor = section.anchor.as_str();

        if anchor.is_empty() {
            issues.push(ContentIssue::EmptyAnchor {
                page: page.to_string(),
                index,
            });
            continue;
        }

        if anchor.contains('#') || anchor.chars().any(char::is_whitespace) {
            issues.push(ContentIssue::MalformedAnchor {
                page: page.to_string(),
                index,
                anchor: anchor.to_string(),
            });
        }

        match seen.get(anchor) {
            Some(&first) => issues.push(ContentIssue::DuplicateAnchor {
                page: page.to_string(),
                anchor: anchor.to_string(),
                first,
                second: index,
            }),
            None => {
                seen.insert(anchor, index);
            }
        }

        if let SectionBody::Projects(cards) = &section.body {
            issues.extend(
                cards
                    .iter()
                    .filter(|card| resolve(&card.route) == PageVariant::NotFound)
                    .map(|card| ContentIssue::DeadProjectLink {
                        page: page.to_string(),
                        route: card.route.clone(),
                    }),
            );
        }
    }

    issues
}

/// Checks every page the content source provides
pub fn validate_content<C: ContentSource + ?Sized>(content: &C) -> Vec<ContentIssue> {
    let mut issues: Vec<ContentIssue> = PageVariant::ALL
        .iter()
        .filter_map(|&variant| {
            content
                .sections(variant)
                .map(|sections| validate_page(&variant.to_string(), sections))
        })
        .flatten()
        .collect();

    let home = content.home();
    let primary = home.hero.primary_action_anchor.as_str();
    if !home.sections.iter().any(|s| s.anchor == primary) {
        issues.push(ContentIssue::MissingAnchor {
            page: PageVariant::Home.to_string(),
            anchor: primary.to_string(),
        });
    }

    issues
}

/// Sanity checks on the site settings
pub fn validate_site(site: &SiteConfig) -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    if !site.email.contains('@') {
        issues.push(ContentIssue::InvalidEmail(site.email.clone()));
    }

    for (name, url) in [("LinkedIn URL", &site.linkedin_url), ("resume URL", &site.resume_url)] {
        if !url.starts_with("https://") {
            issues.push(ContentIssue::InsecureLink {
                name,
                url: url.clone(),
            });
        }
    }

    issues
}

/// Fails with every content issue found
pub fn ensure_valid<C: ContentSource + ?Sized>(content: &C) -> Result<(), FolioError> {
    let issues = validate_content(content);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(FolioError::InvalidContent { issues })
    }
}

/// Fails with every site configuration issue found
pub fn ensure_valid_site(site: &SiteConfig) -> Result<(), FolioError> {
    let issues = validate_site(site);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(FolioError::InvalidSite { issues })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ProjectCard, SiteContent};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_content_is_valid() {
        assert!(validate_content(&SiteContent::builtin()).is_empty());
        assert!(ensure_valid(&SiteContent::builtin()).is_ok());
    }

    #[test]
    fn test_duplicate_anchor_reported_with_positions() {
        let sections = vec![
            SectionDefinition::new("A", "results", "x"),
            SectionDefinition::new("B", "other", "x"),
            SectionDefinition::new("C", "results", "x"),
        ];
        assert_eq!(
            validate_page("case-study-a", &sections),
            vec![ContentIssue::DuplicateAnchor {
                page: "case-study-a".to_string(),
                anchor: "results".to_string(),
                first: 0,
                second: 2,
            }]
        );
    }

    #[test]
    fn test_empty_and_malformed_anchors() {
        let sections = vec![
            SectionDefinition::new("A", "", "x"),
            SectionDefinition::new("B", "two words", "x"),
            SectionDefinition::new("C", "a#b", "x"),
        ];
        let issues = validate_page("home", &sections);
        assert_eq!(issues.len(), 3);
        assert!(matches!(issues[0], ContentIssue::EmptyAnchor { index: 0, .. }));
        assert!(matches!(issues[1], ContentIssue::MalformedAnchor { index: 1, .. }));
    }

    #[test]
    fn test_dead_project_link() {
        let card = ProjectCard {
            title: "Gone".to_string(),
            blurb: String::new(),
            route: "/projects/project-z".to_string(),
            tags: vec![],
            accent: false,
        };
        let sections = vec![SectionDefinition::new(
            "Projects",
            "projects",
            SectionBody::Projects(vec![card]),
        )];

        let issues = validate_page("home", &sections);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].to_string(), "home: project link '/projects/project-z' resolves to no page");
    }

    #[test]
    fn test_missing_primary_anchor() {
        let mut site = SiteContent::builtin();
        site.home.hero.primary_action_anchor = "work".to_string();

        let err = ensure_valid(&site).unwrap_err();
        assert_eq!(err.issues().len(), 1);
        assert!(err.to_string().contains("nothing renders anchor 'work'"));
    }

    #[test]
    fn test_site_checks() {
        assert!(ensure_valid_site(&SiteConfig::default()).is_ok());

        let site = SiteConfig {
            email: "nobody".to_string(),
            linkedin_url: "http://linkedin.com/in/x".to_string(),
            ..SiteConfig::default()
        };
        let issues = validate_site(&site);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0], ContentIssue::InvalidEmail("nobody".to_string()));
    }
}
