// File: src/error.rs
// Purpose: Library error type

use crate::validate::ContentIssue;

/// Errors raised when content or site settings fail validation
///
/// Routing and composition never fail; only authoring mistakes end up here.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("content has {} issue(s): {}", .issues.len(), join(.issues))]
    InvalidContent { issues: Vec<ContentIssue> },

    #[error("site configuration has {} issue(s): {}", .issues.len(), join(.issues))]
    InvalidSite { issues: Vec<ContentIssue> },
}

impl FolioError {
    pub fn issues(&self) -> &[ContentIssue] {
        match self {
            FolioError::InvalidContent { issues } | FolioError::InvalidSite { issues } => issues,
        }
    }
}

fn join(issues: &[ContentIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
