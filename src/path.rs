//! Dot-separated path lookup over a configuration tree.

use serde_json::Value;

/// Resolve a dot-separated `path` against `tree`.
///
/// Each segment must name a key in a mapping node; the walk descends into
/// the associated value. Reaching a scalar or sequence before the path is
/// exhausted yields `None`, and a missed segment is terminal: resolution
/// never recovers on a later segment.
///
/// Empty segments are unmatchable, so an empty path, a path of only dots,
/// and paths with leading/trailing/doubled dots all yield `None`. No
/// escaping is supported.
pub fn resolve<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = tree;
    for segment in path.split('.') {
        if segment.is_empty() {
            return None;
        }
        match current {
            Value::Object(map) => current = map.get(segment)?,
            _ => return None,
        }
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "environment": "production",
            "database": {
                "host": "mysql",
                "options": {"timeout": 30}
            },
            "servers": ["alpha", "beta"]
        })
    }

    #[test]
    fn test_top_level_scalar() {
        let tree = sample();
        assert_eq!(resolve(&tree, "environment"), Some(&json!("production")));
    }

    #[test]
    fn test_top_level_mapping_returned_whole() {
        let tree = sample();
        let database = resolve(&tree, "database").unwrap();
        assert!(database.is_object());
        assert_eq!(database["host"], json!("mysql"));
    }

    #[test]
    fn test_nested_lookup() {
        let tree = sample();
        assert_eq!(resolve(&tree, "database.host"), Some(&json!("mysql")));
        assert_eq!(
            resolve(&tree, "database.options.timeout"),
            Some(&json!(30))
        );
    }

    #[test]
    fn test_missing_key_is_absent() {
        let tree = sample();
        assert_eq!(resolve(&tree, "invalid.path"), None);
        assert_eq!(resolve(&tree, "database.port"), None);
    }

    #[test]
    fn test_miss_is_terminal() {
        // "nope" misses at the root; "host" must not match against the
        // still-current root mapping afterwards
        let tree = json!({"host": "top", "nested": {"host": "inner"}});
        assert_eq!(resolve(&tree, "nope.host"), None);
    }

    #[test]
    fn test_scalar_before_path_exhausted() {
        let tree = sample();
        assert_eq!(resolve(&tree, "environment.inner"), None);
    }

    #[test]
    fn test_sequence_is_not_traversable() {
        let tree = sample();
        assert_eq!(resolve(&tree, "servers.0"), None);
    }

    #[test]
    fn test_empty_and_degenerate_paths() {
        let tree = sample();
        for path in ["", " .", " . ", "!", ".", "\\.\\", "..", "database.", ".database."] {
            assert_eq!(resolve(&tree, path), None, "path {path:?}");
        }
    }

    #[test]
    fn test_empty_segment_never_matches_empty_key() {
        let tree = json!({"": "hidden"});
        assert_eq!(resolve(&tree, ""), None);
        assert_eq!(resolve(&tree, "."), None);
    }
}
