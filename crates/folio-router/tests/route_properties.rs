//! Property tests: resolution is total over arbitrary strings.

use folio_router::{resolve, PageVariant, Route};
use proptest::prelude::*;

/// Known page paths mixed with arbitrary delimiter-free ones
fn path_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("/home".to_string()),
        Just("/projects/project-a".to_string()),
        Just("/projects/project-b".to_string()),
        Just("/projects/project-c".to_string()),
        "[a-z/-]{0,24}",
    ]
}

proptest! {
    #[test]
    fn resolve_is_total(raw in ".*") {
        let variant = resolve(&raw);
        prop_assert!(matches!(
            variant,
            PageVariant::Home
                | PageVariant::CaseStudyA
                | PageVariant::CaseStudyB
                | PageVariant::CaseStudyC
                | PageVariant::NotFound
        ));
    }

    #[test]
    fn parsed_path_always_starts_with_slash(raw in ".*") {
        prop_assert!(Route::parse(&raw).path().starts_with('/'));
        prop_assert!(Route::from_fragment(&raw).path().starts_with('/'));
    }

    #[test]
    fn anchor_never_changes_variant(path in path_strategy(), anchor in "[a-z0-9-]{1,12}") {
        let with_anchor = format!("{}#{}", path, anchor);
        prop_assert_eq!(resolve(&with_anchor), resolve(&path));
        let parsed = Route::parse(&with_anchor);
        prop_assert_eq!(parsed.anchor(), Some(anchor.as_str()));
    }

    #[test]
    fn fragment_roundtrip(raw in "[a-z/]{0,20}(#[a-z]{1,8})?") {
        let route = Route::parse(&raw);
        prop_assert_eq!(Route::from_fragment(&route.to_fragment()), route);
    }
}
