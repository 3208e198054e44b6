// File: src/content/mod.rs
// Purpose: Page content supplied to the assembler (built in, or loaded from TOML)

mod builtin;

use anyhow::{Context, Result};
use folio_router::PageVariant;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::section::SectionDefinition;

/// Supplies the immutable section list of every page
pub trait ContentSource {
    fn home(&self) -> &HomePage;

    /// `None` for anything that is not a case study
    fn case_study(&self, variant: PageVariant) -> Option<&CaseStudy>;

    /// Ordered sections of a page, `None` for [`PageVariant::NotFound`]
    fn sections(&self, variant: PageVariant) -> Option<&[SectionDefinition]> {
        match variant {
            PageVariant::Home => Some(self.home().sections.as_slice()),
            other => self.case_study(other).map(|study| study.sections.as_slice()),
        }
    }
}

/// Card on the home page linking to a case study
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub title: String,
    pub blurb: String,
    /// Route of the case study, e.g. `/projects/project-a`
    pub route: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Use the secondary accent colour
    #[serde(default)]
    pub accent: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub headline: String,
    pub tagline: String,
    pub summary: String,
    /// Section the primary call to action scrolls to
    #[serde(default = "default_primary_anchor")]
    pub primary_action_anchor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomePage {
    pub hero: Hero,
    #[serde(default)]
    pub sections: Vec<SectionDefinition>,
}

/// Label/value row of the "At a glance" panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlanceItem {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub meta: Vec<String>,
    #[serde(default = "default_hero_image_hint")]
    pub hero_image_hint: String,
    #[serde(default)]
    pub at_a_glance: Vec<GlanceItem>,
    #[serde(default)]
    pub sections: Vec<SectionDefinition>,
}

/// All pages of the site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub home: HomePage,
    pub project_a: CaseStudy,
    pub project_b: CaseStudy,
    pub project_c: CaseStudy,
}

fn default_primary_anchor() -> String {
    "projects".to_string()
}

fn default_hero_image_hint() -> String {
    "Add a hero image (dashboard, flow, or product screenshot)".to_string()
}

impl SiteContent {
    /// The portfolio shipped with the binary
    pub fn builtin() -> Self {
        builtin::site()
    }

    /// Load content from a TOML file with the same shape as [`SiteContent`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file: {:?}", path))?;

        let site: SiteContent = toml::from_str(&content)
            .with_context(|| format!("Failed to parse content file: {:?}", path))?;

        tracing::debug!(?path, "loaded site content");
        Ok(site)
    }

    /// Built-in content unless a path is given
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }
}

impl ContentSource for SiteContent {
    fn home(&self) -> &HomePage {
        &self.home
    }

    fn case_study(&self, variant: PageVariant) -> Option<&CaseStudy> {
        match variant {
            PageVariant::CaseStudyA => Some(&self.project_a),
            PageVariant::CaseStudyB => Some(&self.project_b),
            PageVariant::CaseStudyC => Some(&self.project_c),
            PageVariant::Home | PageVariant::NotFound => None,
        }
    }
}
