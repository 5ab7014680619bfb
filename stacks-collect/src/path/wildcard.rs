use crate::common::{loose_string, Value};
use crate::path::FieldPath;
use indexmap::IndexMap;
use itertools::{EitherOrBoth, Itertools};

/// A node reached while walking an item, with the segments leading to it.
struct PathNode<'v> {
    segments: Vec<String>,
    value: &'v Value,
}

/// Records every node of every item, depth first.
///
/// The item itself is recorded under its position, its children under
/// `<position>.<key>`, and so on down to the leaves.
fn collect_nodes<'v, I>(items: I) -> Vec<PathNode<'v>>
where
    I: IntoIterator<Item = &'v Value>,
{
    let mut nodes = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        let mut stack = vec![PathNode {
            segments: vec![index.to_string()],
            value: item,
        }];
        while let Some(node) = stack.pop() {
            let children: Vec<PathNode<'v>> = match node.value {
                Value::Record(record) => record
                    .iter()
                    .map(|(key, value)| PathNode {
                        segments: extend(&node.segments, key.clone()),
                        value,
                    })
                    .collect(),
                Value::Array(array) => array
                    .iter()
                    .enumerate()
                    .map(|(i, value)| PathNode {
                        segments: extend(&node.segments, i.to_string()),
                        value,
                    })
                    .collect(),
                _ => Vec::new(),
            };
            nodes.push(node);
            stack.extend(children.into_iter().rev());
        }
    }
    nodes
}

fn extend(parent: &[String], segment: String) -> Vec<String> {
    let mut segments = Vec::with_capacity(parent.len() + 1);
    segments.extend_from_slice(parent);
    segments.push(segment);
    segments
}

/// Whether a recorded node sits exactly at `path` below some item.
fn matches_path(node: &PathNode<'_>, path: &FieldPath<'_>) -> bool {
    // the leading segment is the item position, which always matches
    node.segments.len() == path.len() + 1
        && node.segments[1..]
            .iter()
            .zip(path.segments())
            .all(|(actual, expected)| path.is_wildcard_segment(expected) || actual == expected)
}

fn select<'v>(nodes: &[PathNode<'v>], path: &FieldPath<'_>) -> Vec<&'v Value> {
    nodes
        .iter()
        .filter(|node| matches_path(node, path))
        .map(|node| node.value)
        .collect()
}

/// Extracts every value addressed by a wildcard path across all items.
///
/// The wildcard fans out over every element or key at its depth, and only
/// nodes at exactly the depth of `path` are selected, so `a.*.b` never
/// picks up `a.0.x.b`. Values come back in traversal order; items lacking
/// the path contribute nothing.
///
/// ```rust
/// use stacks_collect::config::CollectConfig;
/// use stacks_collect::path::{pluck_wildcard, FieldPath};
/// use stacks_collect::val;
///
/// let items = vec![val!({ "a": [{ "b": 1 }, { "b": 2 }] })];
/// let config = CollectConfig::default();
/// let path = FieldPath::parse("a.*.b", &config);
/// assert_eq!(pluck_wildcard(&items, &path), vec![val!(1), val!(2)]);
/// ```
pub fn pluck_wildcard<'v, I>(items: I, path: &FieldPath<'_>) -> Vec<Value>
where
    I: IntoIterator<Item = &'v Value>,
{
    let nodes = collect_nodes(items);
    select(&nodes, path).into_iter().cloned().collect()
}

/// Extracts values and keys by wildcard paths and pairs them up.
///
/// Keys and values are matched independently, then zipped in order. A value
/// without a key is stored under `""`, a key without a value maps to
/// `Null`, and a repeated key keeps the last value.
pub fn pluck_wildcard_keyed<'v, I>(
    items: I,
    value_path: &FieldPath<'_>,
    key_path: &FieldPath<'_>,
) -> IndexMap<String, Value>
where
    I: IntoIterator<Item = &'v Value>,
{
    let nodes = collect_nodes(items);
    let values = select(&nodes, value_path);
    let keys = select(&nodes, key_path);

    let mut result = IndexMap::new();
    for pair in values.into_iter().zip_longest(keys) {
        let (value, key) = match pair {
            EitherOrBoth::Both(value, key) => (value.clone(), loose_string(key)),
            EitherOrBoth::Left(value) => (value.clone(), String::new()),
            EitherOrBoth::Right(key) => (Value::Null, loose_string(key)),
        };
        result.insert(key, value);
    }
    result
}
