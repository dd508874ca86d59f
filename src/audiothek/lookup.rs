//! Ordered-fallback lookups over nested JSON.
//!
//! Upstream records are partially optional at every level. Each accessor
//! takes one or more JSON pointer paths, tries them in order, and yields the
//! first value that both exists and has the expected type. A missing link
//! anywhere along a path degrades to `None`.

use serde_json::Value;

/// Try each pointer path in order and return the first value `extract`
/// accepts.
pub fn try_get<'a, T>(
    value: &'a Value,
    paths: &[&str],
    extract: impl Fn(&'a Value) -> Option<T>,
) -> Option<T> {
    paths
        .iter()
        .filter_map(|path| value.pointer(path))
        .find_map(extract)
}

/// First string found at any of `paths`.
pub fn str_at<'a>(value: &'a Value, paths: &[&str]) -> Option<&'a str> {
    try_get(value, paths, Value::as_str)
}

/// First non-empty string found at any of `paths`, owned.
pub fn string_at(value: &Value, paths: &[&str]) -> Option<String> {
    try_get(value, paths, |v| v.as_str().filter(|s| !s.is_empty()))
        .map(str::to_string)
}

/// First unsigned integer found at any of `paths`.
pub fn u64_at(value: &Value, paths: &[&str]) -> Option<u64> {
    try_get(value, paths, Value::as_u64)
}

/// First array found at any of `paths`.
pub fn array_at<'a>(value: &'a Value, paths: &[&str]) -> Option<&'a Vec<Value>> {
    try_get(value, paths, Value::as_array)
}

/// First object found at any of `paths`.
pub fn object_at<'a>(value: &'a Value, paths: &[&str]) -> Option<&'a Value> {
    try_get(value, paths, |v| v.is_object().then_some(v))
}
