//! Key-path lookup over nested JSON objects.

use serde_json::Value;

use crate::error::MissingKey;

/// Follow `path` through `map` one key at a time.
///
/// Fails with the first key that is absent, or that is applied to a value
/// which is not an object. An empty path returns `map` itself.
pub fn access_nested_map<'a, S: AsRef<str>>(
    map: &'a Value,
    path: &[S],
) -> Result<&'a Value, MissingKey> {
    path.iter().try_fold(map, |current, key| {
        let key = key.as_ref();
        current
            .as_object()
            .and_then(|object| object.get(key))
            .ok_or_else(|| MissingKey::new(key))
    })
}
