//! Property-based tests for path resolution.
//!
//! These run against `MockFileSystem`, so every generated tree is
//! case-sensitive regardless of the host.

use super::convention::PathConvention;
use super::fs::MockFileSystem;
use super::matching::is_match;
use super::normalize::{absolutize, resolve_segments};
use super::resolver::Resolver;
use super::types::{MatchKind, ResolveOptions};
use proptest::prelude::*;

const POSIX: PathConvention = PathConvention::Posix;

// Strategy for generating mixed-case path segments
fn segment_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_-]{0,11}"
}

fn segments_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 1..6)
}

fn absolute(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

fn nocase() -> ResolveOptions {
    ResolveOptions::new().with_nocase(true)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Matching is symmetric
    #[test]
    fn match_symmetric(a in "[A-Za-z0-9._-]{0,12}", b in "[A-Za-z0-9._-]{0,12}") {
        prop_assert_eq!(is_match(&a, &b), is_match(&b, &a));
    }

    // Any recasing of a name matches the original
    #[test]
    fn match_ignores_ascii_case(name in "[A-Za-z0-9._-]{1,12}", mask in prop::collection::vec(any::<bool>(), 12)) {
        let recased: String = name
            .chars()
            .zip(mask.iter().cycle())
            .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
            .collect();
        prop_assert!(is_match(&name, &recased));
    }

    // Normalization is idempotent
    #[test]
    fn normalization_idempotent(segments in prop::collection::vec("[a-z.]{1,3}", 0..8)) {
        let path = format!("/{}", segments.join("/"));
        let once = resolve_segments(&path, POSIX);
        let twice = resolve_segments(&once, POSIX);
        prop_assert_eq!(once, twice);
    }

    // Absolutized paths never keep "." or ".." segments
    #[test]
    fn absolutized_paths_have_no_dot_segments(segments in prop::collection::vec("[a-z.]{1,3}", 0..8)) {
        let path = segments.join("/");
        let absolute = absolutize(&path, "/cwd", POSIX);
        prop_assert!(absolute.starts_with('/'));
        for segment in POSIX.segments(&absolute) {
            prop_assert!(segment != "." && segment != "..");
        }
    }

    // Lowercasing a real path still finds it with nocase
    #[test]
    fn nocase_recovers_lowercased_path(segments in segments_strategy()) {
        let real = absolute(&segments);
        let fs = MockFileSystem::new(POSIX).with_file(&real);
        let resolver = Resolver::with_filesystem(fs, POSIX);

        let lowered = real.to_lowercase();
        let resolved = resolver.resolve(&lowered, &nocase());
        prop_assert_eq!(resolved.map(|r| r.into_string()), Some(real));
    }

    // Resolving a resolved path gives it back unchanged, as an exact match
    #[test]
    fn resolution_idempotent(segments in segments_strategy()) {
        let real = absolute(&segments);
        let fs = MockFileSystem::new(POSIX).with_file(&real);
        let resolver = Resolver::with_filesystem(fs, POSIX);

        if let Some(first) = resolver.resolve(&real.to_uppercase(), &nocase()) {
            let second = resolver.resolve(first.as_str(), &nocase()).unwrap();
            prop_assert_eq!(second.as_str(), first.as_str());
            prop_assert_eq!(second.kind(), MatchKind::Exact);
        }
    }

    // Without nocase only the exact path resolves
    #[test]
    fn exact_mode_rejects_recased_path(segments in segments_strategy()) {
        let real = absolute(&segments);
        let fs = MockFileSystem::new(POSIX).with_file(&real);
        let resolver = Resolver::with_filesystem(fs, POSIX);

        let upper = real.to_uppercase();
        let resolved = resolver.resolve(&upper, &ResolveOptions::default());
        prop_assert_eq!(resolved.is_some(), upper == real);
        prop_assert_eq!(resolver.filesystem().read_dir_calls(), 0);
    }
}
