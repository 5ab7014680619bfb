use crate::collection::{group_key, Collection, Items};
use crate::common::{loose_string, Inspectable, Key, Record, Value};
use crate::errors::CollectResult;
use crate::path::{pluck_wildcard, pluck_wildcard_keyed, resolve, FieldPath};
use indexmap::IndexMap;

impl<T> Collection<T> {
    /// Applies `f` to every item. Keys are kept.
    pub fn map<U, F>(&self, mut f: F) -> Collection<U>
    where
        F: FnMut(&T) -> U,
    {
        self.derive(self.items.map_values(|item, _| f(item)))
    }

    /// Applies `f` to every item and its key. Keys are kept.
    pub fn map_with_key<U, F>(&self, f: F) -> Collection<U>
    where
        F: FnMut(&T, Key<'_>) -> U,
    {
        self.derive(self.items.map_values(f))
    }

    /// Converts every item with `U::from`.
    pub fn map_into<U>(&self) -> Collection<U>
    where
        T: Clone,
        U: From<T>,
    {
        self.map(|item| U::from(item.clone()))
    }

    /// Builds a keyed collection from the `(key, value)` pair `f` returns
    /// for each item. A repeated key keeps the last value.
    pub fn map_with_keys<K, U, F>(&self, mut f: F) -> Collection<U>
    where
        K: Into<String>,
        F: FnMut(&T, Key<'_>) -> (K, U),
    {
        let map = self
            .items
            .entries()
            .map(|(key, item)| {
                let (key, value) = f(item, key);
                (key.into(), value)
            })
            .collect();
        self.derive_keyed(map)
    }

    /// Groups the values of the `(key, value)` pairs `f` returns by key.
    pub fn map_to_groups<K, U, F>(&self, mut f: F) -> Collection<Vec<U>>
    where
        K: Into<String>,
        F: FnMut(&T, Key<'_>) -> (K, U),
    {
        let mut groups: IndexMap<String, Vec<U>> = IndexMap::new();
        for (key, item) in self.items.entries() {
            let (group, value) = f(item, key);
            groups.entry(group.into()).or_default().push(value);
        }
        self.derive_keyed(groups)
    }

    /// Alias of [`Collection::map_to_groups`].
    pub fn map_to_dictionary<K, U, F>(&self, f: F) -> Collection<Vec<U>>
    where
        K: Into<String>,
        F: FnMut(&T, Key<'_>) -> (K, U),
    {
        self.map_to_groups(f)
    }

    /// Maps every item to any number of items and concatenates them into a
    /// sequence.
    pub fn flat_map<U, I, F>(&self, mut f: F) -> Collection<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(&T, Key<'_>) -> I,
    {
        let values = self
            .items
            .entries()
            .flat_map(|(key, item)| f(item, key))
            .collect();
        self.derive_seq(values)
    }

    /// Calls `f` with the elements of every item, for items that are
    /// themselves lists.
    pub fn map_spread<U, R, F>(&self, mut f: F) -> Collection<R>
    where
        T: AsRef<[U]>,
        F: FnMut(&[U]) -> R,
    {
        self.map(|item| f(item.as_ref()))
    }

    pub fn each_spread<U, F>(&self, mut f: F) -> &Self
    where
        T: AsRef<[U]>,
        F: FnMut(&[U]),
    {
        for item in self.items.values() {
            f(item.as_ref());
        }
        self
    }

    /// The items in reverse order. A keyed collection keeps its keys.
    pub fn reverse(&self) -> Collection<T>
    where
        T: Clone,
    {
        let items = match &self.items {
            Items::Sequence(values) => Items::Sequence(values.iter().rev().cloned().collect()),
            Items::Keyed(map) => Items::Keyed(
                map.iter()
                    .rev()
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect(),
            ),
        };
        self.derive(items)
    }

    /// The items as a sequence, dropping keys.
    pub fn values(&self) -> Collection<T>
    where
        T: Clone,
    {
        self.derive_seq(self.to_vec())
    }

    /// Pads the collection with `value` up to `size` items. A negative size
    /// pads at the front. A keyed collection is filled under the lowest free
    /// integer keys.
    pub fn pad(&self, size: isize, value: T) -> Collection<T>
    where
        T: Clone,
    {
        let target = size.unsigned_abs();
        let missing = target.saturating_sub(self.count());
        if missing == 0 {
            return self.clone();
        }

        let items = match &self.items {
            Items::Sequence(values) => {
                let padding = std::iter::repeat(value).take(missing);
                let padded = if size < 0 {
                    padding.chain(values.iter().cloned()).collect()
                } else {
                    values.iter().cloned().chain(padding).collect()
                };
                Items::Sequence(padded)
            }
            Items::Keyed(map) => {
                let mut map = map.clone();
                let mut index = 0usize;
                let mut added = 0;
                while added < missing {
                    let key = index.to_string();
                    if !map.contains_key(&key) {
                        map.insert(key, value.clone());
                        added += 1;
                    }
                    index += 1;
                }
                Items::Keyed(map)
            }
        };
        self.derive(items)
    }

    /// Keys every item by the key `f` returns. A repeated key keeps the
    /// last item.
    pub fn key_by_fn<K, F>(&self, mut f: F) -> Collection<T>
    where
        T: Clone,
        K: Into<String>,
        F: FnMut(&T, Key<'_>) -> K,
    {
        let map = self
            .items
            .entries()
            .map(|(key, item)| (f(item, key).into(), item.clone()))
            .collect();
        self.derive_keyed(map)
    }
}

impl<T: Inspectable> Collection<T> {
    /// The value at `path` of every item, as a sequence.
    ///
    /// Without a wildcard every item contributes exactly one value, `Null`
    /// when the path does not resolve. With a wildcard segment the values
    /// at exactly that depth are collected across all items, and items
    /// lacking the path contribute nothing.
    ///
    /// ```rust
    /// use stacks_collect::{collect, val};
    ///
    /// let posts = collect(vec![
    ///     val!({ "title": "a", "tags": [{ "name": "x" }, { "name": "y" }] }),
    ///     val!({ "title": "b", "tags": [] }),
    /// ]);
    /// assert_eq!(posts.pluck("title").to_vec(), vec![val!("a"), val!("b")]);
    /// assert_eq!(posts.pluck("tags.*.name").to_vec(), vec![val!("x"), val!("y")]);
    /// ```
    pub fn pluck(&self, path: &str) -> Collection<Value> {
        let path = FieldPath::parse(path, &self.config);
        let inspected = self.inspected();
        let values = if path.has_wildcard() {
            pluck_wildcard(inspected.iter().map(|item| &**item), &path)
        } else {
            inspected
                .iter()
                .map(|item| resolve(item, &path).cloned().unwrap_or_default())
                .collect()
        };
        self.derive_seq(values)
    }

    /// The value at `value_path` of every item, keyed by the value at
    /// `key_path`. A repeated key keeps the last value; keys follow the
    /// grouping rule of [`Collection::group_by`].
    pub fn pluck_keyed(&self, value_path: &str, key_path: &str) -> Collection<Value> {
        let value_path = FieldPath::parse(value_path, &self.config);
        let key_path = FieldPath::parse(key_path, &self.config);
        let inspected = self.inspected();

        let map = if value_path.has_wildcard() || key_path.has_wildcard() {
            pluck_wildcard_keyed(inspected.iter().map(|item| &**item), &value_path, &key_path)
        } else {
            inspected
                .iter()
                .map(|item| {
                    let key = group_key(resolve(item, &key_path));
                    let value = resolve(item, &value_path).cloned().unwrap_or_default();
                    (key, value)
                })
                .collect()
        };
        self.derive_keyed(map)
    }

    /// Keys every item by its value at `path`. A repeated key keeps the last
    /// item; keys follow the grouping rule of [`Collection::group_by`].
    pub fn key_by(&self, path: &str) -> Collection<T>
    where
        T: Clone,
    {
        let path = FieldPath::parse(path, &self.config);
        self.key_by_fn(|item, _| group_key(resolve(&item.inspect(), &path)))
    }

    /// Swaps keys and values: every item's text becomes a key whose value is
    /// the item's original key.
    pub fn flip(&self) -> Collection<Value> {
        let map = self
            .items
            .entries()
            .map(|(key, item)| (loose_string(&item.inspect()), key.to_value()))
            .collect();
        self.derive_keyed(map)
    }
}

impl<U: Clone> Collection<Vec<U>> {
    /// Concatenates the item lists into a single sequence.
    pub fn collapse(&self) -> Collection<U> {
        self.derive_seq(self.items.values().flatten().cloned().collect())
    }
}

impl<U: Clone> Collection<Collection<U>> {
    /// Concatenates the inner collections into a single sequence.
    pub fn collapse(&self) -> Collection<U> {
        self.derive_seq(self.items.values().flat_map(|inner| inner.iter().cloned()).collect())
    }
}

impl Collection<Value> {
    /// Concatenates array items into a single sequence. Other items are
    /// kept as they are.
    pub fn collapse(&self) -> Collection<Value> {
        let values = self
            .items
            .values()
            .flat_map(|item| match item {
                Value::Array(values) => values.clone(),
                other => vec![other.clone()],
            })
            .collect();
        self.derive_seq(values)
    }

    /// Flattens nested arrays and records one level at a time, at most
    /// `depth` times (unbounded when `None`), into a sequence. Records
    /// contribute their values.
    ///
    /// ```rust
    /// use stacks_collect::{collect, val};
    ///
    /// let nested = collect(vec![val!(1), val!([2, [3, { "a": 4 }]])]);
    /// assert_eq!(nested.flatten(None).to_vec(), vec![val!(1), val!(2), val!(3), val!(4)]);
    /// assert_eq!(nested.flatten(Some(1)).count(), 3);
    /// ```
    pub fn flatten(&self, depth: Option<usize>) -> Collection<Value> {
        let mut values = self.to_vec();
        let mut remaining = depth;
        while remaining != Some(0) && values.iter().any(Value::is_nested) {
            values = values.into_iter().flat_map(unnest).collect();
            remaining = remaining.map(|d| d - 1);
        }
        self.derive_seq(values)
    }

    /// Expands dotted keys of a keyed collection into nested records. A
    /// sequence is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a key with an empty path segment.
    pub fn undot(&self) -> CollectResult<Collection<Value>> {
        let map = match &self.items {
            Items::Sequence(_) => return Ok(self.clone()),
            Items::Keyed(map) => map,
        };

        let separator = self.config.separator();
        let mut record = Record::with_capacity(map.len());
        for (key, value) in map {
            if key.contains(separator) {
                record.put_with_separator(key, separator, value.clone())?;
            } else {
                record.insert(key.as_str(), value.clone());
            }
        }
        Ok(self.derive_keyed(record.into_map()))
    }
}

fn unnest(value: Value) -> Vec<Value> {
    match value {
        Value::Array(values) => values,
        Value::Record(record) => record.into_map().into_values().collect(),
        other => vec![other],
    }
}
