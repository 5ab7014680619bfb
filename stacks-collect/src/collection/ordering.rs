use crate::collection::{Collection, Items};
use crate::common::{Inspectable, SortOrder, Value};
use crate::path::{resolve, FieldPath};
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;

/// Orders sort keys with nulls last in either direction.
fn compare_sort_keys(a: &Value, b: &Value, order: SortOrder) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => order.apply(a.cmp(b)),
    }
}

/// Orders keys numerically when both are integers, textually otherwise.
fn compare_keys(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

impl<T: Clone> Collection<T> {
    /// Reorders the items by comparing the entries at each position.
    /// Stable; keyed collections keep their keys.
    fn reorder<F>(&self, mut compare: F) -> Collection<T>
    where
        F: FnMut(usize, usize) -> Ordering,
    {
        let mut positions: Vec<usize> = (0..self.count()).collect();
        positions.sort_by(|a, b| compare(*a, *b));
        self.select_positions(positions)
    }

    /// Sorts with a comparator. Stable; keyed collections keep their keys.
    pub fn sort_with<F>(&self, mut compare: F) -> Collection<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let values: Vec<&T> = self.items.values().collect();
        self.reorder(|a, b| compare(values[a], values[b]))
    }

    /// Sorts by the keys the items are stored under. A sequence is already
    /// in key order.
    pub fn sort_keys_with_order(&self, order: SortOrder) -> Collection<T> {
        match &self.items {
            Items::Sequence(_) if order == SortOrder::Ascending => self.clone(),
            Items::Sequence(_) => self.reverse(),
            Items::Keyed(map) => {
                let keys: Vec<&String> = map.keys().collect();
                self.reorder(|a, b| order.apply(compare_keys(keys[a], keys[b])))
            }
        }
    }

    pub fn sort_keys(&self) -> Collection<T> {
        self.sort_keys_with_order(SortOrder::Ascending)
    }

    pub fn sort_keys_desc(&self) -> Collection<T> {
        self.sort_keys_with_order(SortOrder::Descending)
    }

    /// A random item, or `None` when empty.
    pub fn random(&self) -> Option<T> {
        self.random_with(&mut rand::thread_rng())
    }

    pub fn random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<T> {
        let values: Vec<&T> = self.items.values().collect();
        values.choose(rng).map(|item| (*item).clone())
    }

    /// Up to `count` distinct items in random order, as a sequence.
    pub fn random_many(&self, count: usize) -> Collection<T> {
        self.random_many_with(count, &mut rand::thread_rng())
    }

    pub fn random_many_with<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Collection<T> {
        let mut values = self.to_vec();
        values.shuffle(rng);
        values.truncate(count);
        self.derive_seq(values)
    }
}

impl<T: Ord + Clone> Collection<T> {
    pub fn sort_with_order(&self, order: SortOrder) -> Collection<T> {
        self.sort_with(|a, b| order.apply(a.cmp(b)))
    }

    /// Sorts the items in ascending order.
    ///
    /// ```rust
    /// use stacks_collect::collect;
    ///
    /// assert_eq!(collect(vec![3, 1, 2]).sort().to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn sort(&self) -> Collection<T> {
        self.sort_with_order(SortOrder::Ascending)
    }

    pub fn sort_desc(&self) -> Collection<T> {
        self.sort_with_order(SortOrder::Descending)
    }
}

impl<T: Inspectable + Clone> Collection<T> {
    /// Sorts by the value `f` returns for each item. `null` values sort
    /// last in both directions.
    pub fn sort_by_fn_with_order<K, F>(&self, mut f: F, order: SortOrder) -> Collection<T>
    where
        K: Into<Value>,
        F: FnMut(&T) -> K,
    {
        let keys: Vec<Value> = self.items.values().map(|item| f(item).into()).collect();
        self.reorder(|a, b| compare_sort_keys(&keys[a], &keys[b], order))
    }

    /// Sorts by the value at `path`. Misses and `null` values sort last in
    /// both directions.
    ///
    /// ```rust
    /// use stacks_collect::{collect, val};
    ///
    /// let people = collect(vec![val!({ "age": 30 }), val!({ "age": null }), val!({ "age": 20 })]);
    /// let ages = people.sort_by("age").pluck("age");
    /// assert_eq!(ages.to_vec(), vec![val!(20), val!(30), val!(null)]);
    /// ```
    pub fn sort_by_order(&self, path: &str, order: SortOrder) -> Collection<T> {
        let path = FieldPath::parse(path, &self.config);
        self.sort_by_fn_with_order(
            |item| resolve(&item.inspect(), &path).cloned().unwrap_or_default(),
            order,
        )
    }

    pub fn sort_by(&self, path: &str) -> Collection<T> {
        self.sort_by_order(path, SortOrder::Ascending)
    }

    pub fn sort_by_desc(&self, path: &str) -> Collection<T> {
        self.sort_by_order(path, SortOrder::Descending)
    }

    pub fn sort_by_fn<K, F>(&self, f: F) -> Collection<T>
    where
        K: Into<Value>,
        F: FnMut(&T) -> K,
    {
        self.sort_by_fn_with_order(f, SortOrder::Ascending)
    }

    pub fn sort_by_desc_fn<K, F>(&self, f: F) -> Collection<T>
    where
        K: Into<Value>,
        F: FnMut(&T) -> K,
    {
        self.sort_by_fn_with_order(f, SortOrder::Descending)
    }
}
