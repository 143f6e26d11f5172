//! Deep merge for configuration trees.
//!
//! Implements field-by-field merging where later values override earlier
//! values. Sequences are replaced entirely, not concatenated.

use serde_json::Value;

/// Deep merge two trees, with `overlay` taking precedence over `base`.
///
/// - Mappings are merged recursively: keys in overlay override keys in base
/// - Sequences, strings, numbers, booleans, and nulls replace the base value
///   entirely
///
/// # Example
/// ```
/// use serde_json::json;
/// use layercfg::merge::deep_merge;
///
/// let base = json!({
///     "server": { "port": 8080, "host": "localhost" },
///     "features": ["a", "b"]
/// });
/// let overlay = json!({
///     "server": { "port": 9000 },
///     "features": ["c"]
/// });
/// let result = deep_merge(base, overlay);
/// // Result: { "server": { "port": 9000, "host": "localhost" }, "features": ["c"] }
/// ```
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        // Both are mappings: merge recursively
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged_value = if let Some(base_value) = base_map.remove(&key) {
                    deep_merge(base_value, overlay_value)
                } else {
                    overlay_value
                };
                base_map.insert(key, merged_value);
            }
            Value::Object(base_map)
        }
        // Any other case: overlay replaces base entirely
        (_, overlay) => overlay,
    }
}

/// Merge trees in order on top of `seed`, with later trees taking precedence.
///
/// Equivalent to folding `deep_merge` over the sequence. An empty sequence
/// returns `seed` unchanged.
pub fn deep_merge_all(seed: Value, trees: impl IntoIterator<Item = Value>) -> Value {
    trees.into_iter().fold(seed, deep_merge)
}
