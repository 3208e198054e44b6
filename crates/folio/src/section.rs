// File: src/section.rs
// Purpose: Section definitions and the position-derived section composer

use serde::{Deserialize, Serialize, Serializer};

use crate::content::ProjectCard;

/// Explicit tone override. Always wins over the index-derived tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionTone {
    SolidMauve,
    SolidCream,
}

impl SectionTone {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionTone::SolidMauve => "solid-mauve",
            SectionTone::SolidCream => "solid-cream",
        }
    }
}

/// Background tone a section ends up with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedTone {
    Neutral,
    TintA,
    TintB,
    Solid(SectionTone),
}

impl ResolvedTone {
    pub fn as_str(self) -> &'static str {
        match self {
            ResolvedTone::Neutral => "neutral",
            ResolvedTone::TintA => "tint-A",
            ResolvedTone::TintB => "tint-B",
            ResolvedTone::Solid(tone) => tone.as_str(),
        }
    }
}

impl Serialize for ResolvedTone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Section content. Opaque to the composer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionBody {
    Text(String),
    Projects(Vec<ProjectCard>),
    /// Slot for the mailto contact form
    Contact,
}

impl From<&str> for SectionBody {
    fn from(text: &str) -> Self {
        SectionBody::Text(text.to_string())
    }
}

impl From<String> for SectionBody {
    fn from(text: String) -> Self {
        SectionBody::Text(text)
    }
}

/// One content section of a page
///
/// `anchor` must be unique within its page: it is both the in-page scroll
/// target and the stable key of the composed output. The section's index is
/// its position in the page's list and is derived by [`compose`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionDefinition {
    pub title: String,
    pub anchor: String,
    pub body: SectionBody,
    #[serde(default)]
    pub with_image: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<SectionTone>,
    #[serde(default)]
    pub full_bleed: bool,
}

impl SectionDefinition {
    pub fn new(
        title: impl Into<String>,
        anchor: impl Into<String>,
        body: impl Into<SectionBody>,
    ) -> Self {
        SectionDefinition {
            title: title.into(),
            anchor: anchor.into(),
            body: body.into(),
            with_image: false,
            image_hint: None,
            tone: None,
            full_bleed: false,
        }
    }

    /// Adds an image placeholder next to the text
    pub fn with_image(mut self) -> Self {
        self.with_image = true;
        self
    }

    /// Adds an image placeholder with a hint of what belongs there
    pub fn with_image_hint(mut self, hint: impl Into<String>) -> Self {
        self.with_image = true;
        self.image_hint = Some(hint.into());
        self
    }

    pub fn with_tone(mut self, tone: SectionTone) -> Self {
        self.tone = Some(tone);
        self
    }

    /// Background spans the viewport instead of the content column
    pub fn full_bleed(mut self) -> Self {
        self.full_bleed = true;
        self
    }
}

/// A section plus its derived visual treatment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedSection<'a> {
    pub index: usize,
    #[serde(flatten)]
    pub section: &'a SectionDefinition,
    pub resolved_tone: ResolvedTone,
    pub use_split_layout: bool,
    pub has_top_divider: bool,
}

impl ComposedSection<'_> {
    pub fn anchor(&self) -> &str {
        &self.section.anchor
    }

    /// Carried through unchanged; it never feeds the other derived fields
    pub fn full_bleed(&self) -> bool {
        self.section.full_bleed
    }
}

/// Tone for a section: the explicit override, else a 3-cycle on the index
pub fn resolve_tone(index: usize, tone: Option<SectionTone>) -> ResolvedTone {
    match (tone, index % 3) {
        (Some(tone), _) => ResolvedTone::Solid(tone),
        (None, 0) => ResolvedTone::Neutral,
        (None, 1) => ResolvedTone::TintA,
        (None, _) => ResolvedTone::TintB,
    }
}

/// Image sections alternate between side-by-side (even) and stacked (odd)
pub fn use_split_layout(index: usize, with_image: bool) -> bool {
    with_image && index % 2 == 0
}

/// The first section sits under the page header and gets no divider
pub fn has_top_divider(index: usize) -> bool {
    index != 0
}

/// Derives every section's visual treatment from its position
///
/// Pure and order-preserving: one output per input, same order, and the
/// result depends on nothing but the input list. Full-bleed sections keep
/// their natural index.
pub fn compose(sections: &[SectionDefinition]) -> Vec<ComposedSection<'_>> {
    sections
        .iter()
        .enumerate()
        .map(|(index, section)| ComposedSection {
            index,
            section,
            resolved_tone: resolve_tone(index, section.tone),
            use_split_layout: use_split_layout(index, section.with_image),
            has_top_divider: has_top_divider(index),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn plain(count: usize) -> Vec<SectionDefinition> {
        (0..count)
            .map(|i| SectionDefinition::new(format!("Section {}", i), format!("s{}", i), "body"))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(compose(&[]).is_empty());
    }

    #[test]
    fn test_tone_cycle() {
        let sections = plain(6);
        let tones: Vec<&str> = compose(&sections)
            .iter()
            .map(|s| s.resolved_tone.as_str())
            .collect();
        assert_eq!(
            tones,
            vec!["neutral", "tint-A", "tint-B", "neutral", "tint-A", "tint-B"]
        );
    }

    #[rstest]
    #[case(0, SectionTone::SolidMauve)]
    #[case(1, SectionTone::SolidCream)]
    #[case(5, SectionTone::SolidMauve)]
    fn test_explicit_tone_wins(#[case] index: usize, #[case] tone: SectionTone) {
        assert_eq!(resolve_tone(index, Some(tone)), ResolvedTone::Solid(tone));
    }

    #[test]
    fn test_split_alternation() {
        let sections: Vec<_> = plain(4).into_iter().map(|s| s.with_image()).collect();
        let splits: Vec<bool> = compose(&sections).iter().map(|s| s.use_split_layout).collect();
        assert_eq!(splits, vec![true, false, true, false]);
    }

    #[test]
    fn test_no_image_never_splits() {
        let splits: Vec<bool> = compose(&plain(4)).iter().map(|s| s.use_split_layout).collect();
        assert_eq!(splits, vec![false; 4]);
    }

    #[test]
    fn test_divider_ignores_overrides() {
        let sections = vec![
            SectionDefinition::new("A", "a", "x")
                .with_tone(SectionTone::SolidMauve)
                .full_bleed(),
            SectionDefinition::new("B", "b", "x").full_bleed(),
            SectionDefinition::new("C", "c", "x").with_tone(SectionTone::SolidCream),
        ];
        let dividers: Vec<bool> = compose(&sections).iter().map(|s| s.has_top_divider).collect();
        assert_eq!(dividers, vec![false, true, true]);
    }

    #[test]
    fn test_full_bleed_keeps_natural_index() {
        let mut sections = plain(3);
        sections[1] = sections[1].clone().full_bleed().with_image();

        let composed = compose(&sections);
        assert_eq!(composed[1].index, 1);
        assert!(composed[1].full_bleed());
        assert_eq!(composed[1].resolved_tone, ResolvedTone::TintA);
        assert!(!composed[1].use_split_layout);
        assert!(composed[1].has_top_divider);
    }

    #[test]
    fn test_order_preserved_and_idempotent() {
        let sections = plain(5);
        let first = compose(&sections);
        let second = compose(&sections);

        assert_eq!(first.len(), sections.len());
        let anchors: Vec<&str> = first.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, vec!["s0", "s1", "s2", "s3", "s4"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_anchors_are_not_deduplicated() {
        let sections = vec![
            SectionDefinition::new("A", "same", "x"),
            SectionDefinition::new("B", "same", "y"),
        ];
        assert_eq!(compose(&sections).len(), 2);
    }

    #[test]
    fn test_deserialize_from_toml() {
        let section: SectionDefinition = toml::from_str(
            r#"
            title = "Results"
            anchor = "results"
            body = { text = "Conversion went up." }
            with_image = true
            tone = "solid-cream"
            "#,
        )
        .unwrap();

        assert_eq!(section.tone, Some(SectionTone::SolidCream));
        assert!(section.with_image);
        assert!(!section.full_bleed);
        assert_eq!(section.body, SectionBody::Text("Conversion went up.".to_string()));
    }
}
