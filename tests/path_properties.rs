//! Property tests for URL path normalization.

use proptest::prelude::*;

use showmock::mock::normalize;

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("..".to_string()),
        Just(".".to_string()),
        Just(String::new()),
        proptest::string::string_regex("[A-Za-z0-9._-]{1,8}").unwrap(),
    ]
}

fn url_path() -> impl Strategy<Value = String> {
    (any::<bool>(), proptest::collection::vec(segment(), 0..12)).prop_map(|(rooted, segments)| {
        let joined = segments.join("/");
        if rooted {
            format!("/{joined}")
        } else {
            joined
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: normalized paths never contain `..` and never start with `/`.
    #[test]
    fn property_normalize_stays_under_root(path in url_path()) {
        let normalized = normalize(&path);
        prop_assert!(!normalized.starts_with('/'));
        prop_assert!(normalized.split('/').all(|s| s != ".." && s != "."));
    }

    /// PROPERTY: normalization is idempotent.
    #[test]
    fn property_normalize_idempotent(path in url_path()) {
        let once = normalize(&path);
        prop_assert_eq!(normalize(&once), once);
    }

    /// PROPERTY: normalization never panics on arbitrary input.
    #[test]
    fn property_normalize_never_panics(s in "(?s).{0,256}") {
        let normalized = normalize(&s);
        prop_assert!(!normalized.starts_with('/'));
    }

    /// PROPERTY: prefixing any number of `../` changes nothing.
    #[test]
    fn property_leading_parents_are_discarded(path in url_path(), depth in 0usize..16) {
        let climbing = format!("{}{}", "../".repeat(depth), path.trim_start_matches('/'));
        prop_assert_eq!(normalize(&climbing), normalize(&path));
    }
}
