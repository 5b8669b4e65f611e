//! Property-based tests for archive path normalization.

#![allow(clippy::unwrap_used)]

use dirarc_core::types::ArchivePath;
use dirarc_core::types::RootPrefix;
use dirarc_core::types::normalize;
use proptest::prelude::*;
use std::path::PathBuf;

fn segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z0-9_-]{1,12}", 1..6)
}

proptest! {
    /// Normalizing twice is the same as normalizing once.
    #[test]
    fn prop_normalize_idempotent(path in "[a-z/\\\\.]{0,40}", is_dir in any::<bool>()) {
        let once = normalize(&path, is_dir);
        prop_assert_eq!(normalize(&once, is_dir), once);
    }

    /// Normalized paths never contain a backslash.
    #[test]
    fn prop_normalize_removes_backslashes(path in "[a-z\\\\/]{0,40}", is_dir in any::<bool>()) {
        prop_assert!(!normalize(&path, is_dir).contains('\\'));
    }

    /// Directory paths gain exactly one trailing slash.
    #[test]
    fn prop_directory_has_trailing_slash(path in "[a-z]{1,10}(/[a-z]{1,10}){0,4}") {
        let normalized = normalize(&path, true);
        prop_assert!(normalized.ends_with('/'));
        prop_assert_eq!(normalized.len(), path.len() + 1);
    }

    /// File paths made of plain segments are left untouched.
    #[test]
    fn prop_file_path_unchanged(parts in segments()) {
        let path = parts.join("/");
        prop_assert_eq!(normalize(&path, false), path);
    }

    /// `a/b` and `a\b` prefixes place every node at the same archive path.
    #[test]
    fn prop_prefix_separator_equivalence(
        prefix in segments(),
        relative in segments(),
        is_dir in any::<bool>(),
    ) {
        let unix = RootPrefix::new(Some(&prefix.join("/")));
        let windows = RootPrefix::new(Some(&prefix.join("\\")));
        prop_assert_eq!(&unix, &windows);

        let rel: PathBuf = relative.iter().collect();
        let a = ArchivePath::for_node(&unix, &rel, is_dir).unwrap();
        let b = ArchivePath::for_node(&windows, &rel, is_dir).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Composition is prefix, then the relative path, joined by `/`.
    #[test]
    fn prop_prefix_composition(prefix in segments(), relative in segments()) {
        let root = RootPrefix::new(Some(&prefix.join("/")));
        let rel: PathBuf = relative.iter().collect();
        let path = ArchivePath::for_node(&root, &rel, false).unwrap();
        prop_assert_eq!(
            path.as_str(),
            format!("{}/{}", prefix.join("/"), relative.join("/"))
        );
    }
}
