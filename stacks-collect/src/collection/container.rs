use crate::collection::Items;
use crate::common::{Inspectable, ItemKey, Key, Record, Value};
use crate::config::CollectConfig;
use crate::errors::CollectResult;
use crate::path::{resolve, FieldPath};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt::Debug;

/// A dual-mode container of items: an ordered sequence or an
/// insertion-ordered keyed mapping.
///
/// # Purpose
/// `Collection` shapes in-memory data: filter it, transform it, group it,
/// aggregate it. Operations come in two families.
///
/// - **Pure** operations take `&self` and return a new collection (or a
///   scalar). The receiver is never modified, so `c.filter(f).map(g)`
///   leaves `c` as it was.
/// - **Mutators** (`push`, `pop`, `put`, `forget`, `transform`, ...) take
///   `&mut self`. The chainable ones return the same `&mut Self`.
///
/// # Modes
/// Whether a collection is a sequence or a keyed mapping is decided at
/// construction and carried through most operations. Keyed operations keep
/// keys (`filter`, `map`, `sort_by`, ...), while a few always produce a
/// sequence (`values`, `pluck`, `flatten`, ...). See [`Items`].
///
/// # Item requirements
/// Operations that only rearrange items work for any `T`. Operations that
/// look inside items (paths, predicates, numeric aggregates) require
/// `T: Inspectable`, which [`Value`], [`Record`], numbers and strings
/// implement.
///
/// # Usage
/// ```rust
/// use stacks_collect::{collect, val};
///
/// let orders = collect(vec![
///     val!({ "id": 1, "total": 30, "status": "paid" }),
///     val!({ "id": 2, "total": 12, "status": "open" }),
///     val!({ "id": 3, "total": 45, "status": "paid" }),
/// ]);
///
/// let paid = orders.where_eq("status", "paid");
/// assert_eq!(paid.count(), 2);
/// assert_eq!(paid.sum_by("total"), 75.0);
/// assert_eq!(orders.count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Collection<T> {
    pub(crate) items: Items<T>,
    pub(crate) config: CollectConfig,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Collection::new()
    }
}

impl<T> Collection<T> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Collection {
            items: Items::Sequence(Vec::new()),
            config: CollectConfig::default(),
        }
    }

    /// Creates an empty keyed mapping.
    pub fn new_keyed() -> Self {
        Collection {
            items: Items::Keyed(IndexMap::new()),
            config: CollectConfig::default(),
        }
    }

    pub fn from_items(items: Items<T>) -> Self {
        Collection {
            items,
            config: CollectConfig::default(),
        }
    }

    /// Wraps a single item as a one-element sequence.
    pub fn wrap(item: T) -> Self {
        Collection::from_items(Items::Sequence(vec![item]))
    }

    /// Creates a sequence from any iterable.
    pub fn make<I: IntoIterator<Item = T>>(items: I) -> Self {
        Collection::from_items(Items::Sequence(items.into_iter().collect()))
    }

    /// Replaces the configuration. Collections derived from this one
    /// inherit it.
    pub fn with_config(mut self, config: CollectConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &CollectConfig {
        &self.config
    }

    /// Builds a new collection sharing this collection's configuration.
    #[inline]
    pub(crate) fn derive<U>(&self, items: Items<U>) -> Collection<U> {
        Collection {
            items,
            config: self.config,
        }
    }

    #[inline]
    pub(crate) fn derive_seq<U>(&self, values: Vec<U>) -> Collection<U> {
        self.derive(Items::Sequence(values))
    }

    #[inline]
    pub(crate) fn derive_keyed<U>(&self, map: IndexMap<String, U>) -> Collection<U> {
        self.derive(Items::Keyed(map))
    }

    /// The backing storage.
    pub fn all(&self) -> &Items<T> {
        &self.items
    }

    pub fn into_items(self) -> Items<T> {
        self.items
    }

    /// Number of items in the active mode.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Number of items satisfying `predicate`.
    pub fn count_matching<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.items.values().filter(|item| predicate(item)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    pub fn contains_one_item(&self) -> bool {
        self.count() == 1
    }

    pub fn is_keyed(&self) -> bool {
        self.items.is_keyed()
    }

    pub fn is_sequence(&self) -> bool {
        self.items.is_sequence()
    }

    /// The keys as a sequence of strings. Positions are rendered in decimal.
    pub fn keys(&self) -> Collection<String> {
        let keys = self.items.entries().map(|(key, _)| key.to_name()).collect();
        self.derive_seq(keys)
    }

    /// The item under `key`, if any.
    ///
    /// On a sequence, numeric names address positions; on a keyed
    /// collection, positions address their decimal names.
    pub fn get<K: Into<ItemKey>>(&self, key: K) -> Option<&T> {
        self.items.get(&key.into())
    }

    /// The item under `key`, or `default` when absent.
    pub fn get_or<K: Into<ItemKey>>(&self, key: K, default: T) -> T
    where
        T: Clone,
    {
        self.get(key).cloned().unwrap_or(default)
    }

    pub fn has<K: Into<ItemKey>>(&self, key: K) -> bool {
        self.items.contains_key(&key.into())
    }

    /// Iterates over the items in order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.items.values()
    }

    /// Iterates over the items in order, with their keys.
    pub fn iter_keyed(&self) -> impl DoubleEndedIterator<Item = (Key<'_>, &T)> + ExactSizeIterator + '_ {
        self.items.entries()
    }

    /// Calls `f` with every item and its key.
    pub fn each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&T, Key<'_>),
    {
        for (key, item) in self.items.entries() {
            f(item, key);
        }
        self
    }

    /// Calls `f` with every item and its key until it returns `false`.
    pub fn each_while<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&T, Key<'_>) -> bool,
    {
        for (key, item) in self.items.entries() {
            if !f(item, key) {
                break;
            }
        }
        self
    }

    /// Logs the items at debug level.
    pub fn dump(&self) -> &Self
    where
        T: Debug,
    {
        log::debug!("{:?}", self.items);
        self
    }

    /// Copies the items into a vector, dropping keys.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.values().cloned().collect()
    }

    /// Alias of [`Collection::to_vec`].
    pub fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.to_vec()
    }

    /// Serializes to JSON: a sequence becomes an array and a keyed
    /// collection an object. Nested collections are unwrapped.
    pub fn to_json(&self) -> CollectResult<String>
    where
        T: Serialize,
    {
        serde_json::to_string(&self.items).map_err(|err| {
            log::error!("Failed to encode collection as JSON: {}", err);
            err.into()
        })
    }

    pub fn to_json_pretty(&self) -> CollectResult<String>
    where
        T: Serialize,
    {
        serde_json::to_string_pretty(&self.items).map_err(|err| {
            log::error!("Failed to encode collection as JSON: {}", err);
            err.into()
        })
    }

    /// Applies `f` to the whole collection and returns its result.
    pub fn pipe<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&Self) -> R,
    {
        f(self)
    }
}

impl<T: Inspectable> Collection<T> {
    /// The collection as a [`Value`]: an array for a sequence, a record for
    /// a keyed collection.
    pub fn to_value(&self) -> Value {
        match &self.items {
            Items::Sequence(values) => {
                Value::Array(values.iter().map(|v| v.inspect().into_owned()).collect())
            }
            Items::Keyed(map) => Value::Record(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.inspect().into_owned()))
                    .collect::<Record>(),
            ),
        }
    }

    /// Every item inspected as a value, in order.
    pub(crate) fn inspected(&self) -> Vec<Cow<'_, Value>> {
        self.items.values().map(Inspectable::inspect).collect()
    }

    /// Resolves `path` against every item. An empty path yields the item.
    pub(crate) fn resolve_all(&self, path: &str) -> Vec<Option<Value>> {
        let path = FieldPath::parse(path, &self.config);
        self.items
            .values()
            .map(|item| resolve(&item.inspect(), &path).cloned())
            .collect()
    }
}

impl<T: Inspectable> Inspectable for Collection<T> {
    fn inspect(&self) -> Cow<'_, Value> {
        Cow::Owned(self.to_value())
    }
}

impl<T: PartialEq> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Serialize> Serialize for Collection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<T> From<Items<T>> for Collection<T> {
    fn from(items: Items<T>) -> Self {
        Collection::from_items(items)
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(values: Vec<T>) -> Self {
        Collection::from_items(Items::Sequence(values))
    }
}

impl<T, const N: usize> From<[T; N]> for Collection<T> {
    fn from(values: [T; N]) -> Self {
        Collection::from_items(Items::Sequence(values.into()))
    }
}

impl<T> From<IndexMap<String, T>> for Collection<T> {
    fn from(map: IndexMap<String, T>) -> Self {
        Collection::from_items(Items::Keyed(map))
    }
}

impl<T: Clone> From<&Collection<T>> for Collection<T> {
    fn from(other: &Collection<T>) -> Self {
        other.clone()
    }
}

impl From<Value> for Collection<Value> {
    /// An array becomes a sequence, a record a keyed collection and any
    /// other value a one-element sequence.
    fn from(value: Value) -> Self {
        match value {
            Value::Array(values) => Collection::from(values),
            Value::Record(record) => Collection::from(record.into_map()),
            other => Collection::wrap(other),
        }
    }
}

impl From<Record> for Collection<Value> {
    fn from(record: Record) -> Self {
        Collection::from(record.into_map())
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Collection::make(iter)
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_sequence().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = Box<dyn Iterator<Item = &'a T> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.items.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{collect, val};
    use indexmap::indexmap;

    #[test]
    fn test_construction_modes() {
        assert!(Collection::<i32>::new().is_sequence());
        assert!(Collection::<i32>::new_keyed().is_keyed());
        assert_eq!(Collection::wrap(5).to_vec(), vec![5]);
        assert_eq!(Collection::make(1..=3).to_vec(), vec![1, 2, 3]);
        assert_eq!(Collection::from([1, 2]).count(), 2);
    }

    #[test]
    fn test_from_value() {
        assert!(Collection::from(val!([1, 2])).is_sequence());
        assert!(Collection::from(val!({ "a": 1 })).is_keyed());
        assert_eq!(Collection::from(val!("x")).to_vec(), vec![val!("x")]);
    }

    #[test]
    fn test_from_collection_copies() {
        let original = collect(vec![1, 2]);
        let mut copy = Collection::from(&original);
        copy.push(3);
        assert_eq!(original.count(), 2);
        assert_eq!(copy.count(), 3);
    }

    #[test]
    fn test_count_and_emptiness() {
        let c = collect(vec![1, 2, 3]);
        assert_eq!(c.count(), 3);
        assert_eq!(c.count_matching(|n| n % 2 == 1), 2);
        assert!(c.is_not_empty());
        assert!(!c.contains_one_item());
        assert!(Collection::<i32>::new().is_empty());
    }

    #[test]
    fn test_get_has_keys() {
        let keyed = collect(indexmap! { "a".to_string() => 1, "b".to_string() => 2 });
        assert_eq!(keyed.get("b"), Some(&2));
        assert_eq!(keyed.get_or("z", 0), 0);
        assert!(keyed.has("a"));
        assert!(!keyed.has(0usize));
        assert_eq!(keyed.keys().to_vec(), vec!["a", "b"]);

        let seq = collect(vec!["x", "y"]);
        assert_eq!(seq.get(1usize), Some(&"y"));
        assert_eq!(seq.get("0"), Some(&"x"));
        assert_eq!(seq.keys().to_vec(), vec!["0", "1"]);
    }

    #[test]
    fn test_get_rejects_non_canonical_positions() {
        let seq = collect(vec![10, 20]);
        assert_eq!(seq.get("01"), None);
        assert_eq!(seq.get("+1"), None);
        assert!(!seq.has("01"));
        assert_eq!(seq.get("1"), Some(&20));
    }

    #[test]
    fn test_each_and_each_while() {
        let c = collect(vec![1, 2, 3, 4]);
        let mut seen = Vec::new();
        c.each_while(|item, _| {
            seen.push(*item);
            *item < 2
        });
        assert_eq!(seen, vec![1, 2]);

        let mut keys = Vec::new();
        c.each(|_, key| keys.push(key.to_string()));
        assert_eq!(keys, vec!["0", "1", "2", "3"]);
    }

    #[test]
    fn test_to_json_nested_collections() {
        let nested = collect(vec![collect(vec![1, 2]), collect(vec![3])]);
        assert_eq!(nested.to_json().unwrap(), "[[1,2],[3]]");

        let keyed = collect(indexmap! { "a".to_string() => collect(vec![1]) });
        assert_eq!(keyed.to_json().unwrap(), r#"{"a":[1]}"#);
    }

    #[test]
    fn test_to_value() {
        let keyed = collect(indexmap! { "a".to_string() => 1 });
        assert_eq!(keyed.to_value(), val!({ "a": 1 }));
        assert_eq!(collect(vec![1, 2]).to_value(), val!([1, 2]));
    }

    #[test]
    fn test_iteration() {
        let c = collect(vec![1, 2, 3]);
        let doubled: Vec<i32> = (&c).into_iter().map(|n| n * 2).collect();
        assert_eq!(doubled, vec![2, 4, 6]);
        let owned: Vec<i32> = c.into_iter().collect();
        assert_eq!(owned, vec![1, 2, 3]);

        let gathered: Collection<i32> = (1..4).collect();
        assert_eq!(gathered.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_pipe() {
        let total = collect(vec![1, 2, 3]).pipe(|c| c.iter().sum::<i32>());
        assert_eq!(total, 6);
    }

    #[test]
    fn test_derived_collections_keep_config() {
        let config = CollectConfig::builder().separator('/').build().unwrap();
        let c = collect(vec![val!({ "a": { "b": 1 } })]).with_config(config);
        assert_eq!(c.keys().config().separator(), '/');
    }
}
