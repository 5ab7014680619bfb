use crate::collection::{Collection, Items};
use crate::common::{Record, Value};
use crate::errors::CollectResult;
use indexmap::IndexMap;
use serde::Serialize;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

impl<T: Clone> Collection<T> {
    /// Merges `other` into a copy of this collection.
    ///
    /// Two sequences are concatenated. Otherwise both sides are taken as
    /// keyed (positions becoming `"0"`, `"1"`, ... keys) and `other` wins on
    /// a key collision.
    pub fn merge<C: Into<Collection<T>>>(&self, other: C) -> Collection<T> {
        let other = other.into();
        match (&self.items, other.items) {
            (Items::Sequence(left), Items::Sequence(right)) => {
                let mut values = left.clone();
                values.extend(right);
                self.derive_seq(values)
            }
            (left, right) => {
                let mut map = left.clone().into_keyed();
                map.extend(right.into_keyed());
                self.derive_keyed(map)
            }
        }
    }

    /// Overwrites items of a copy of this collection with the items of
    /// `other` stored under the same key or position. Items of `other` with
    /// a new key are appended.
    pub fn replace<C: Into<Collection<T>>>(&self, other: C) -> Collection<T> {
        let other = other.into();
        match (&self.items, other.items) {
            (Items::Sequence(left), Items::Sequence(right)) => {
                let mut values = left.clone();
                for (position, item) in right.into_iter().enumerate() {
                    match values.get_mut(position) {
                        Some(slot) => *slot = item,
                        None => values.push(item),
                    }
                }
                self.derive_seq(values)
            }
            (left, right) => {
                let mut map = left.clone().into_keyed();
                map.extend(right.into_keyed());
                self.derive_keyed(map)
            }
        }
    }

    /// Adds the items of `other` whose key is not present here. Existing
    /// items are never overwritten.
    pub fn union<C: Into<Collection<T>>>(&self, other: C) -> Collection<T> {
        let other = other.into();
        match (&self.items, other.items) {
            (Items::Sequence(left), Items::Sequence(right)) => {
                let mut values = left.clone();
                values.extend(right.into_iter().skip(left.len()));
                self.derive_seq(values)
            }
            (left, right) => {
                let mut map = left.clone().into_keyed();
                for (key, item) in right.into_keyed() {
                    map.entry(key).or_insert(item);
                }
                self.derive_keyed(map)
            }
        }
    }

    /// Keeps the items whose key is not present in `other`.
    pub fn diff_keys<U>(&self, other: &Collection<U>) -> Collection<T> {
        let keys = key_set(other);
        self.select_where(|_, key| !keys.contains(&key.to_name()))
    }

    /// Keeps the items whose key is present in `other`.
    pub fn intersect_by_keys<U>(&self, other: &Collection<U>) -> Collection<T> {
        let keys = key_set(other);
        self.select_where(|_, key| keys.contains(&key.to_name()))
    }

    /// Keeps the items for which `compare` finds no equal item in `others`.
    pub fn diff_using<F>(&self, others: &[T], mut compare: F) -> Collection<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.select_where(|item, _| {
            !others
                .iter()
                .any(|other| compare(item, other) == Ordering::Equal)
        })
    }

    /// Keeps the first item for every distinct value `f` returns.
    pub fn unique_by<K, F>(&self, mut f: F) -> Collection<T>
    where
        K: Into<Value>,
        F: FnMut(&T) -> K,
    {
        let mut seen = BTreeSet::new();
        self.select_where(|item, _| seen.insert(f(item).into()))
    }
}

fn key_set<U>(collection: &Collection<U>) -> HashSet<String> {
    collection
        .items
        .entries()
        .map(|(key, _)| key.to_name())
        .collect()
}

impl<T: PartialEq + Clone> Collection<T> {
    /// Keeps the items that do not occur in `others`.
    ///
    /// ```rust
    /// use stacks_collect::collect;
    ///
    /// let left = collect(vec![1, 2, 3, 4]);
    /// assert_eq!(left.diff(&[2, 4]).to_vec(), vec![1, 3]);
    /// assert_eq!(left.diff(&collect(vec![1])).count(), 3);
    /// ```
    pub fn diff<I, U>(&self, others: I) -> Collection<T>
    where
        I: IntoIterator<Item = U>,
        U: Borrow<T>,
    {
        let others: Vec<U> = others.into_iter().collect();
        self.select_where(|item, _| !others.iter().any(|other| other.borrow() == item))
    }

    /// Keeps the items whose key is missing from `other` or whose value
    /// differs from the value `other` stores under that key.
    pub fn diff_assoc(&self, other: &Collection<T>) -> Collection<T> {
        self.select_where(|item, key| other.items.get(&key.into_owned()) != Some(item))
    }

    /// Keeps the items that also occur in `others`.
    pub fn intersect<I, U>(&self, others: I) -> Collection<T>
    where
        I: IntoIterator<Item = U>,
        U: Borrow<T>,
    {
        let others: Vec<U> = others.into_iter().collect();
        self.select_where(|item, _| others.iter().any(|other| other.borrow() == item))
    }

    /// Keeps the first occurrence of every item, in order.
    pub fn unique(&self) -> Collection<T> {
        let mut kept: Vec<&T> = Vec::new();
        let mut positions = Vec::new();
        for (position, item) in self.items.values().enumerate() {
            if !kept.contains(&item) {
                kept.push(item);
                positions.push(position);
            }
        }
        self.select_positions(positions)
    }
}

impl<T: Serialize + Clone> Collection<T> {
    /// The items equal to an earlier item, keyed by the key they are stored
    /// under.
    ///
    /// Items are compared through their serialized form read back as a
    /// [`Value`], so numbers compare by value (`1` and `1.0` are equal)
    /// while `1` and `"1"` differ. Arrays and records compare structurally.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError` if an item cannot be serialized.
    pub fn duplicates(&self) -> CollectResult<Collection<T>> {
        let mut seen: Vec<Value> = Vec::new();
        let mut duplicates = IndexMap::new();
        for (key, item) in self.items.entries() {
            let value = serde_json::to_value(item).map(Value::from).map_err(|err| {
                log::error!("Failed to encode item {} for comparison: {}", key, err);
                err
            })?;
            if seen.contains(&value) {
                duplicates.insert(key.to_name(), item.clone());
            } else {
                seen.push(value);
            }
        }
        Ok(self.derive_keyed(duplicates))
    }
}

impl Collection<Value> {
    /// Merges `other` into a copy of this collection, recursing into
    /// records.
    ///
    /// Two sequences are concatenated. Under a shared key, equal values are
    /// kept once, two records merge recursively and any other pair is
    /// gathered into an array.
    pub fn merge_recursive(&self, other: &Collection<Value>) -> Collection<Value> {
        if let (Items::Sequence(_), Items::Sequence(_)) = (&self.items, &other.items) {
            return self.merge(other);
        }
        let mut map = self.items.clone().into_keyed();
        for (key, value) in other.items.clone().into_keyed() {
            match map.get_mut(&key) {
                Some(slot) => *slot = merge_values(slot.take(), value),
                None => {
                    map.insert(key, value);
                }
            }
        }
        self.derive_keyed(map)
    }

    /// Replaces items of a copy of this collection with those of `other`,
    /// recursing into records and arrays present on both sides.
    pub fn replace_recursive(&self, other: &Collection<Value>) -> Collection<Value> {
        match (&self.items, &other.items) {
            (Items::Sequence(left), Items::Sequence(right)) => {
                self.derive_seq(replace_array(left.clone(), right))
            }
            _ => {
                let left: Record = self.items.clone().into_keyed().into();
                let right: Record = other.items.clone().into_keyed().into();
                self.derive_keyed(replace_record(left, &right).into_map())
            }
        }
    }
}

fn merge_values(existing: Value, incoming: Value) -> Value {
    if existing == incoming {
        return existing;
    }
    match (existing, incoming) {
        (Value::Record(left), Value::Record(right)) => Value::Record(merge_records(left, right)),
        (existing, incoming) => {
            let mut values = match existing {
                Value::Array(values) => values,
                other => vec![other],
            };
            match incoming {
                Value::Array(more) => values.extend(more),
                other => values.push(other),
            }
            Value::Array(values)
        }
    }
}

fn merge_records(left: Record, right: Record) -> Record {
    let mut merged = left.into_map();
    for (key, value) in right {
        let value = match merged.get(&key).cloned() {
            Some(existing) => merge_values(existing, value),
            None => value,
        };
        merged.insert(key, value);
    }
    merged.into()
}

fn replace_value(existing: Option<Value>, incoming: &Value) -> Value {
    match (existing, incoming) {
        (Some(Value::Record(left)), Value::Record(right)) => Value::Record(replace_record(left, right)),
        (Some(Value::Array(left)), Value::Array(right)) => Value::Array(replace_array(left, right)),
        (_, incoming) => incoming.clone(),
    }
}

fn replace_record(left: Record, right: &Record) -> Record {
    let mut replaced = left.into_map();
    for (key, value) in right {
        let next = replace_value(replaced.get(key).cloned(), value);
        replaced.insert(key.clone(), next);
    }
    replaced.into()
}

fn replace_array(mut left: Vec<Value>, right: &[Value]) -> Vec<Value> {
    for (position, value) in right.iter().enumerate() {
        match left.get_mut(position) {
            Some(slot) => *slot = replace_value(Some(slot.take()), value),
            None => left.push(value.clone()),
        }
    }
    left
}
