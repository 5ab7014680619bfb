use crate::common::{parse_index, ItemKey, Key};
use indexmap::IndexMap;
use itertools::Either;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Backing storage of a collection: an ordered sequence or an
/// insertion-ordered keyed mapping, never both.
///
/// Every collection operation matches on the active variant. The two are
/// interconvertible with [`Items::into_sequence`] (drops keys) and
/// [`Items::into_keyed`] (positions become `"0"`, `"1"`, ... keys).
#[derive(Debug, Clone, PartialEq)]
pub enum Items<T> {
    Sequence(Vec<T>),
    Keyed(IndexMap<String, T>),
}

impl<T> Default for Items<T> {
    fn default() -> Self {
        Items::Sequence(Vec::new())
    }
}

impl<T> Items<T> {
    pub fn len(&self) -> usize {
        match self {
            Items::Sequence(values) => values.len(),
            Items::Keyed(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Items::Sequence(_))
    }

    pub fn is_keyed(&self) -> bool {
        matches!(self, Items::Keyed(_))
    }

    /// Values in order, without their keys.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        match self {
            Items::Sequence(values) => Either::Left(values.iter()),
            Items::Keyed(map) => Either::Right(map.values()),
        }
    }

    /// Values in order, each with the key it is stored under.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = (Key<'_>, &T)> + ExactSizeIterator + '_ {
        match self {
            Items::Sequence(values) => Either::Left(
                values
                    .iter()
                    .enumerate()
                    .map(|(index, value)| (Key::Index(index), value)),
            ),
            Items::Keyed(map) => {
                Either::Right(map.iter().map(|(key, value)| (Key::Name(key.as_str()), value)))
            }
        }
    }

    /// Consumes the storage into its values, dropping keys.
    pub fn into_sequence(self) -> Vec<T> {
        match self {
            Items::Sequence(values) => values,
            Items::Keyed(map) => map.into_values().collect(),
        }
    }

    /// Consumes the storage into a keyed mapping. Positions become keys.
    pub fn into_keyed(self) -> IndexMap<String, T> {
        match self {
            Items::Sequence(values) => values
                .into_iter()
                .enumerate()
                .map(|(index, value)| (index.to_string(), value))
                .collect(),
            Items::Keyed(map) => map,
        }
    }

    /// Consumes the storage into `(key, value)` pairs.
    pub fn into_entries(self) -> Vec<(ItemKey, T)> {
        match self {
            Items::Sequence(values) => values
                .into_iter()
                .enumerate()
                .map(|(index, value)| (ItemKey::Index(index), value))
                .collect(),
            Items::Keyed(map) => map
                .into_iter()
                .map(|(key, value)| (ItemKey::Name(key), value))
                .collect(),
        }
    }

    /// Switches a sequence to keyed storage in place.
    pub fn make_keyed(&mut self) {
        if let Items::Sequence(values) = self {
            let map = std::mem::take(values)
                .into_iter()
                .enumerate()
                .map(|(index, value)| (index.to_string(), value))
                .collect();
            *self = Items::Keyed(map);
        }
    }

    pub fn get(&self, key: &ItemKey) -> Option<&T> {
        match self {
            Items::Sequence(values) => key.as_index().and_then(|index| values.get(index)),
            Items::Keyed(map) => map.get(&key.to_name()),
        }
    }

    pub fn get_mut(&mut self, key: &ItemKey) -> Option<&mut T> {
        match self {
            Items::Sequence(values) => key.as_index().and_then(|index| values.get_mut(index)),
            Items::Keyed(map) => map.get_mut(&key.to_name()),
        }
    }

    pub fn contains_key(&self, key: &ItemKey) -> bool {
        self.get(key).is_some()
    }

    /// Removes the item under `key`, keeping the order of the rest.
    pub fn remove(&mut self, key: &ItemKey) -> Option<T> {
        match self {
            Items::Sequence(values) => match key.as_index() {
                Some(index) if index < values.len() => Some(values.remove(index)),
                _ => None,
            },
            Items::Keyed(map) => map.shift_remove(&key.to_name()),
        }
    }

    /// Rebuilds storage of the same mode from the items at `positions`.
    pub fn pick(&self, positions: impl IntoIterator<Item = usize>) -> Items<T>
    where
        T: Clone,
    {
        match self {
            Items::Sequence(values) => Items::Sequence(
                positions
                    .into_iter()
                    .filter_map(|p| values.get(p).cloned())
                    .collect(),
            ),
            Items::Keyed(map) => Items::Keyed(
                positions
                    .into_iter()
                    .filter_map(|p| map.get_index(p).map(|(k, v)| (k.clone(), v.clone())))
                    .collect(),
            ),
        }
    }

    /// Applies `f` to every value, keeping the mode and the keys.
    pub fn map_values<U, F>(&self, mut f: F) -> Items<U>
    where
        F: FnMut(&T, Key<'_>) -> U,
    {
        match self {
            Items::Sequence(values) => Items::Sequence(
                values
                    .iter()
                    .enumerate()
                    .map(|(index, value)| f(value, Key::Index(index)))
                    .collect(),
            ),
            Items::Keyed(map) => Items::Keyed(
                map.iter()
                    .map(|(key, value)| (key.clone(), f(value, Key::Name(key))))
                    .collect(),
            ),
        }
    }

    /// The smallest integer key greater than every integer key in use.
    pub(crate) fn next_index_key(&self) -> usize {
        match self {
            Items::Sequence(values) => values.len(),
            Items::Keyed(map) => Items::<T>::next_free_index(map.keys()),
        }
    }

    pub(crate) fn next_free_index<'k, K>(keys: K) -> usize
    where
        K: IntoIterator<Item = &'k String>,
    {
        keys.into_iter()
            .filter_map(|key| parse_index(key))
            .max()
            .map_or(0, |max| max + 1)
    }
}

impl<T: Serialize> Serialize for Items<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Items::Sequence(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
            Items::Keyed(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}
