use crate::common::{parse_index, Value};
use crate::config::CollectConfig;
use crate::path::FieldPath;

/// Resolves a path against an item.
///
/// Each segment looks up a record key, or an array position when the
/// segment is numeric. A segment that does not exist is a miss and the
/// whole resolution yields `None`; it never errors. The wildcard has no
/// special meaning here, see [`pluck_wildcard`](crate::path::pluck_wildcard).
pub fn resolve<'v>(item: &'v Value, path: &FieldPath<'_>) -> Option<&'v Value> {
    path.segments()
        .iter()
        .try_fold(item, |current, segment| step(current, segment))
}

/// Parses `path` with `config` and resolves it against `item`.
pub fn resolve_str<'v>(item: &'v Value, path: &str, config: &CollectConfig) -> Option<&'v Value> {
    resolve(item, &FieldPath::parse(path, config))
}

#[inline]
fn step<'v>(current: &'v Value, segment: &str) -> Option<&'v Value> {
    match current {
        Value::Record(record) => record.get_field(segment),
        Value::Array(array) => parse_index(segment).and_then(|i| array.get(i)),
        _ => None,
    }
}
