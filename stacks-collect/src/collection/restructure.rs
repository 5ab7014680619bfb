use crate::collection::{Collection, Items};
use crate::common::{loose_string, Inspectable, Key, Value};
use crate::path::{resolve, FieldPath};
use indexmap::IndexMap;
use itertools::{EitherOrBoth, Itertools};

/// Renders a grouping key.
///
/// A miss, `null`, `false`, `""` and `NaN` all group under `""`. Any other
/// value, zero included, groups under its text.
pub(crate) fn group_key(resolved: Option<&Value>) -> String {
    match resolved {
        None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
        Some(Value::F64(n)) if n.is_nan() => String::new(),
        Some(other) => loose_string(other),
    }
}

impl<T: Clone> Collection<T> {
    /// Splits the items into chunks of `size`. Every chunk but the last is
    /// full; keyed chunks keep their keys.
    ///
    /// ```rust
    /// use stacks_collect::collect;
    ///
    /// let chunks = collect(vec![1, 2, 3, 4, 5]).chunk(2);
    /// let sizes: Vec<usize> = chunks.iter().map(|c| c.count()).collect();
    /// assert_eq!(sizes, vec![2, 2, 1]);
    /// ```
    pub fn chunk(&self, size: usize) -> Collection<Collection<T>> {
        if size == 0 {
            log::warn!("chunk called with a size of zero, returning an empty collection");
            return self.derive_seq(Vec::new());
        }
        let chunks = match &self.items {
            Items::Sequence(values) => values
                .chunks(size)
                .map(|chunk| self.derive_seq(chunk.to_vec()))
                .collect(),
            Items::Keyed(map) => {
                let entries: Vec<(&String, &T)> = map.iter().collect();
                entries
                    .chunks(size)
                    .map(|chunk| {
                        self.derive_keyed(
                            chunk
                                .iter()
                                .map(|(key, value)| ((*key).clone(), (*value).clone()))
                                .collect(),
                        )
                    })
                    .collect()
            }
        };
        self.derive_seq(chunks)
    }

    /// Splits the items into `groups` groups.
    ///
    /// Every group but the last holds `round(count / groups)` items (or
    /// fewer once the items run out), and the last group takes whatever
    /// remains. The last group can therefore be larger, smaller or empty.
    ///
    /// At most `count + 1` groups are produced. Asking for more yields the
    /// same groups as asking for `count + 1`, all but the last of them
    /// holding at most one item.
    ///
    /// ```rust
    /// use stacks_collect::collect;
    ///
    /// let groups = collect(vec![1, 2, 3]).split(usize::MAX);
    /// assert_eq!(groups.count(), 4);
    /// assert_eq!(groups.last().map(|g| g.to_vec()), Some(vec![1, 2, 3]));
    /// ```
    pub fn split(&self, groups: usize) -> Collection<Collection<T>> {
        if groups == 0 {
            log::warn!("split called with zero groups, returning an empty collection");
            return self.derive_seq(Vec::new());
        }
        let values = self.to_vec();
        let size = (values.len() as f64 / groups as f64).round() as usize;
        let groups = groups.min(values.len() + 1);

        let mut rest = values.as_slice();
        let mut result = Vec::with_capacity(groups);
        for _ in 1..groups {
            let (head, tail) = rest.split_at(size.min(rest.len()));
            result.push(self.derive_seq(head.to_vec()));
            rest = tail;
        }
        result.push(self.derive_seq(rest.to_vec()));
        self.derive_seq(result)
    }

    /// Separates the items that satisfy `predicate` from those that do
    /// not. Both halves keep the receiver's mode and keys.
    pub fn partition<F>(&self, mut predicate: F) -> (Collection<T>, Collection<T>)
    where
        F: FnMut(&T) -> bool,
    {
        let mut pass = Vec::new();
        let mut fail = Vec::new();
        for (position, item) in self.items.values().enumerate() {
            if predicate(item) {
                pass.push(position);
            } else {
                fail.push(position);
            }
        }
        (self.select_positions(pass), self.select_positions(fail))
    }

    /// Groups items under the key `f` returns for them. Keys follow the
    /// same rule as [`Collection::group_by`].
    pub fn group_by_fn<K, F>(&self, mut f: F) -> Collection<Collection<T>>
    where
        K: Into<Value>,
        F: FnMut(&T, Key<'_>) -> K,
    {
        let mut groups: IndexMap<String, Vec<T>> = IndexMap::new();
        for (key, item) in self.items.entries() {
            let group = group_key(Some(&f(item, key).into()));
            groups.entry(group).or_default().push(item.clone());
        }
        let groups = groups
            .into_iter()
            .map(|(group, members)| (group, self.derive_seq(members)))
            .collect();
        self.derive_keyed(groups)
    }

    /// Counts items per key returned by `f`.
    pub fn count_by_fn<K, F>(&self, mut f: F) -> Collection<usize>
    where
        K: Into<String>,
        F: FnMut(&T) -> K,
    {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for item in self.items.values() {
            *counts.entry(f(item).into()).or_insert(0) += 1;
        }
        self.derive_keyed(counts)
    }

    /// The cartesian product of this collection and `others`, as rows in
    /// fixed order.
    ///
    /// ```rust
    /// use stacks_collect::collect;
    ///
    /// let rows = collect(vec![1, 2]).cross_join(&[&collect(vec![3, 4])]);
    /// assert_eq!(rows.to_vec(), vec![vec![1, 3], vec![1, 4], vec![2, 3], vec![2, 4]]);
    /// ```
    pub fn cross_join(&self, others: &[&Collection<T>]) -> Collection<Vec<T>> {
        let rows = std::iter::once(self)
            .chain(others.iter().copied())
            .fold(vec![Vec::new()], |rows: Vec<Vec<T>>, list| {
                rows.iter()
                    .flat_map(|row| {
                        list.iter().map(move |item| {
                            let mut next = row.clone();
                            next.push(item.clone());
                            next
                        })
                    })
                    .collect()
            });
        self.derive_seq(rows)
    }

    /// Pairs items by position. The shorter side is padded with `None`.
    pub fn zip<U: Clone>(&self, other: &Collection<U>) -> Collection<(Option<T>, Option<U>)> {
        let pairs = self
            .items
            .values()
            .zip_longest(other.iter())
            .map(|pair| match pair {
                EitherOrBoth::Both(left, right) => (Some(left.clone()), Some(right.clone())),
                EitherOrBoth::Left(left) => (Some(left.clone()), None),
                EitherOrBoth::Right(right) => (None, Some(right.clone())),
            })
            .collect();
        self.derive_seq(pairs)
    }

    /// Appends the given items after this collection's items. The result is
    /// a sequence.
    pub fn concat<I: IntoIterator<Item = T>>(&self, items: I) -> Collection<T> {
        let mut values = self.to_vec();
        values.extend(items);
        self.derive_seq(values)
    }
}

impl<T: Inspectable + Clone> Collection<T> {
    /// Groups items by their value at `path`.
    ///
    /// The result is keyed by group; each group is a sequence. A miss,
    /// `null`, `false`, `""` and `NaN` all group under `""`, while `0`
    /// groups under `"0"`.
    ///
    /// ```rust
    /// use stacks_collect::{collect, val};
    ///
    /// let people = collect(vec![
    ///     val!({ "name": "Ann", "team": "eng" }),
    ///     val!({ "name": "Bob", "team": "ops" }),
    ///     val!({ "name": "Cid", "team": "eng" }),
    /// ]);
    /// let teams = people.group_by("team");
    /// assert_eq!(teams.keys().to_vec(), vec!["eng", "ops"]);
    /// assert_eq!(teams.get("eng").map(|team| team.count()), Some(2));
    /// ```
    pub fn group_by(&self, path: &str) -> Collection<Collection<T>> {
        let path = FieldPath::parse(path, &self.config);
        self.group_by_fn(|item, _| {
            resolve(&item.inspect(), &path).cloned().unwrap_or_default()
        })
    }
}

impl<T: Inspectable> Collection<T> {
    /// Counts items by their text.
    pub fn count_by(&self) -> Collection<usize> {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for item in self.items.values() {
            *counts.entry(loose_string(&item.inspect())).or_insert(0) += 1;
        }
        self.derive_keyed(counts)
    }

    /// Uses the items as keys for `values`, matched by position. On a keyed
    /// collection the keys are used instead. Keys without a value are
    /// skipped.
    pub fn combine<U: Clone>(&self, values: &[U]) -> Collection<U> {
        let map = self
            .items
            .entries()
            .zip(values)
            .map(|((key, item), value)| {
                let key = match key {
                    Key::Index(_) => loose_string(&item.inspect()),
                    Key::Name(name) => name.to_string(),
                };
                (key, value.clone())
            })
            .collect();
        self.derive_keyed(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{collect, val};
    use indexmap::indexmap;

    #[test]
    fn test_group_key_rule() {
        assert_eq!(group_key(None), "");
        assert_eq!(group_key(Some(&Value::Null)), "");
        assert_eq!(group_key(Some(&val!(false))), "");
        assert_eq!(group_key(Some(&val!(""))), "");
        assert_eq!(group_key(Some(&Value::F64(f64::NAN))), "");
        assert_eq!(group_key(Some(&val!(0))), "0");
        assert_eq!(group_key(Some(&val!(true))), "true");
        assert_eq!(group_key(Some(&val!(2.0))), "2");
    }

    #[test]
    fn test_chunk_is_exhaustive() {
        let source: Vec<i32> = (1..=11).collect();
        for size in 1..=12 {
            let chunks = collect(source.clone()).chunk(size);
            let rebuilt: Vec<i32> = chunks.iter().flat_map(|c| c.to_vec()).collect();
            assert_eq!(rebuilt, source);
            let counts: Vec<usize> = chunks.iter().map(|c| c.count()).collect();
            assert!(counts[..counts.len() - 1].iter().all(|n| *n == size));
        }
    }

    #[test]
    fn test_chunk_keyed_keeps_keys() {
        let c = collect(indexmap! {
            "a".to_string() => 1,
            "b".to_string() => 2,
            "c".to_string() => 3,
        });
        let chunks = c.chunk(2);
        assert_eq!(chunks.count(), 2);
        assert_eq!(chunks.last().map(|c| c.keys().to_vec()), Some(vec!["c".to_string()]));
    }

    #[test]
    fn test_chunk_zero() {
        assert!(collect(vec![1, 2]).chunk(0).is_empty());
    }

    #[test]
    fn test_split_rounds_group_size() {
        let sizes = |len: i32, groups: usize| -> Vec<usize> {
            collect((0..len).collect::<Vec<i32>>())
                .split(groups)
                .iter()
                .map(|g| g.count())
                .collect()
        };
        assert_eq!(sizes(10, 3), vec![3, 3, 4]);
        assert_eq!(sizes(10, 4), vec![3, 3, 3, 1]);
        assert_eq!(sizes(6, 4), vec![2, 2, 2, 0]);
        assert_eq!(sizes(2, 3), vec![1, 1, 0]);
        assert!(collect(vec![1]).split(0).is_empty());
    }

    #[test]
    fn test_split_caps_group_count() {
        let c = collect(vec![1, 2, 3]);
        for groups in [4, 7, 1_000_000_000, usize::MAX] {
            let split = c.split(groups);
            assert!(split.count() <= 4, "groups {}", groups);
            let rebuilt: Vec<i32> = split.iter().flat_map(|g| g.to_vec()).collect();
            assert_eq!(rebuilt, vec![1, 2, 3]);
        }
        assert_eq!(c.split(usize::MAX).count(), 4);
        assert_eq!(Collection::<i32>::new().split(5).count(), 1);
    }

    #[test]
    fn test_partition() {
        let (even, odd) = collect(vec![1, 2, 3]).partition(|n| n % 2 == 0);
        assert_eq!(even.to_vec(), vec![2]);
        assert_eq!(odd.to_vec(), vec![1, 3]);

        let keyed = collect(indexmap! { "a".to_string() => 1, "b".to_string() => 2 });
        let (pass, fail) = keyed.partition(|n| *n > 1);
        assert!(pass.is_keyed() && fail.is_keyed());
        assert_eq!(pass.keys().to_vec(), vec!["b"]);
    }

    #[test]
    fn test_group_by_falsy_keys() {
        let c = collect(vec![
            val!({ "g": 0 }),
            val!({ "g": null }),
            val!({ "g": false }),
            val!({}),
            val!({ "g": "x" }),
        ]);
        let groups = c.group_by("g");
        assert_eq!(groups.keys().to_vec(), vec!["0", "", "x"]);
        assert_eq!(groups.get("").map(|g| g.count()), Some(3));
        assert!(groups.get("x").is_some_and(|g| g.is_sequence()));
    }

    #[test]
    fn test_group_by_fn() {
        let words = collect(vec!["apple", "avocado", "banana"]);
        let by_letter = words.group_by_fn(|w, _| w.chars().next().map(String::from));
        assert_eq!(by_letter.get("a").map(|g| g.to_vec()), Some(vec!["apple", "avocado"]));
    }

    #[test]
    fn test_count_by() {
        let counts = collect(vec![1, 2, 2, 3, 3, 3]).count_by();
        assert_eq!(counts.to_json().unwrap(), r#"{"1":1,"2":2,"3":3}"#);

        let by_parity = collect(vec![1, 2, 3]).count_by_fn(|n| if n % 2 == 0 { "even" } else { "odd" });
        assert_eq!(by_parity.get("odd"), Some(&2));
    }

    #[test]
    fn test_cross_join_sizes() {
        let a = collect(vec![1, 2]);
        let b = collect(vec![3, 4, 5]);
        let c = collect(vec![6, 7]);
        assert_eq!(a.cross_join(&[&b, &c]).count(), 12);
        assert_eq!(a.cross_join(&[]).to_vec(), vec![vec![1], vec![2]]);
        assert!(a.cross_join(&[&Collection::new()]).is_empty());
    }

    #[test]
    fn test_zip_pads_shorter_side() {
        let zipped = collect(vec![1, 2, 3]).zip(&collect(vec!["a"]));
        assert_eq!(
            zipped.to_vec(),
            vec![(Some(1), Some("a")), (Some(2), None), (Some(3), None)]
        );
    }

    #[test]
    fn test_combine() {
        let combined = collect(vec!["name", "age", "extra"]).combine(&[val!("Ann"), val!(31)]);
        assert_eq!(combined.keys().to_vec(), vec!["name", "age"]);
        assert_eq!(combined.get("age"), Some(&val!(31)));
    }

    #[test]
    fn test_concat() {
        let keyed = collect(indexmap! { "a".to_string() => 1 });
        let joined = keyed.concat(vec![2, 3]);
        assert!(joined.is_sequence());
        assert_eq!(joined.to_vec(), vec![1, 2, 3]);
    }
}
