use crate::common::{parse_index, Value};
use crate::config::CollectConfig;
use crate::errors::{CollectError, CollectResult, ErrorKind};
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};

/// An insertion-ordered, string keyed mapping of [`Value`]s.
///
/// `Record` is the nested structure items are made of. Keys keep the order
/// they were first inserted in; re-inserting an existing key replaces the
/// value in place.
///
/// Two records are equal when they hold the same keys with equal values,
/// regardless of key order.
///
/// # Path access
///
/// [`Record::get`] and [`Record::put`] accept separator delimited paths
/// (`"address.city"`), while [`Record::get_field`] and [`Record::insert`]
/// always treat the key literally.
///
/// ```rust
/// use stacks_collect::common::{Record, Value};
///
/// let mut record = Record::new();
/// record.put("address.city", "Paris").unwrap();
/// assert_eq!(record.get("address.city"), Some(&Value::from("Paris")));
/// ```
#[derive(Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Record {
    data: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Record {
            data: IndexMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Record {
            data: IndexMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inserts a value under a literal key, returning the previous value.
    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        self.data.insert(key.into(), value.into())
    }

    /// Stores a value at a path, creating intermediate records as needed.
    ///
    /// An intermediate that exists but is not a record is replaced by one.
    /// A path with an empty segment is rejected.
    pub fn put<V: Into<Value>>(&mut self, path: &str, value: V) -> CollectResult<()> {
        self.put_with_separator(path, CollectConfig::default().separator(), value)
    }

    pub(crate) fn put_with_separator<V: Into<Value>>(
        &mut self,
        path: &str,
        separator: char,
        value: V,
    ) -> CollectResult<()> {
        let segments: Vec<&str> = path.split(separator).collect();
        if segments.iter().any(|s| s.is_empty()) {
            log::error!("Invalid record path '{}'", path);
            return Err(CollectError::new(
                &format!("Invalid record path '{}'", path),
                ErrorKind::InvalidArgument,
            ));
        }

        let (last, parents) = match segments.split_last() {
            Some(split) => split,
            None => {
                return Err(CollectError::new(
                    "Record path cannot be empty",
                    ErrorKind::InvalidArgument,
                ))
            }
        };

        let mut current = self;
        for segment in parents {
            let slot = current
                .data
                .entry(segment.to_string())
                .or_insert_with(|| Value::Record(Record::new()));
            if !slot.is_record() {
                *slot = Value::Record(Record::new());
            }
            current = match slot {
                Value::Record(record) => record,
                _ => {
                    return Err(CollectError::new(
                        "Record path could not be created",
                        ErrorKind::InternalError,
                    ))
                }
            };
        }
        current.data.insert(last.to_string(), value.into());
        Ok(())
    }

    /// Looks up a value by path. Numeric segments index into arrays.
    pub fn get(&self, path: &str) -> Option<&Value> {
        if let Some(value) = self.data.get(path) {
            return Some(value);
        }
        let separator = CollectConfig::default().separator();
        let mut segments = path.split(separator);
        let first = segments.next()?;
        let mut current = self.data.get(first)?;
        for segment in segments {
            current = match current {
                Value::Record(record) => record.get_field(segment)?,
                Value::Array(array) => array.get(parse_index(segment)?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Looks up a value by its literal key.
    pub fn get_field(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Removes a key, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.data.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.data.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.data.iter()
    }

    /// Shallow, right-biased merge: keys of `other` overwrite keys of `self`.
    pub fn merge(&mut self, other: &Record) {
        for (key, value) in other.iter() {
            self.data.insert(key.clone(), value.clone());
        }
    }

    pub fn into_map(self) -> IndexMap<String, Value> {
        self.data
    }

    fn sorted_entries(&self) -> Vec<(&String, &Value)> {
        let mut entries: Vec<(&String, &Value)> = self.data.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl Debug for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let entries: Vec<String> = self
            .data
            .iter()
            .map(|(k, v)| format!("\"{}\": {:?}", k, v))
            .collect();
        write!(f, "{{{}}}", entries.join(", "))
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .data
                .iter()
                .all(|(k, v)| other.data.get(k).is_some_and(|o| o == v))
    }
}

impl Eq for Record {}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Record {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sorted_entries().cmp(&other.sorted_entries())
    }
}

impl From<IndexMap<String, Value>> for Record {
    fn from(data: IndexMap<String, Value>) -> Self {
        Record { data }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record {
            data: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Removes the quotes `stringify!` leaves around string literal keys.
#[doc(hidden)]
pub fn normalize_key(key: &str) -> String {
    key.trim_matches('"').to_string()
}

/// Creates a [`Record`] with JSON-like syntax.
///
/// Keys may be identifiers or string literals and are inserted literally.
///
/// ```rust
/// use stacks_collect::record;
///
/// let user = record! {
///     name: "Alice",
///     "address": { city: "Paris" },
///     tags: ["a", "b"],
/// };
/// assert_eq!(user.len(), 3);
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::common::Record::new()
    };

    ($($key:tt : $value:tt),* $(,)?) => {
        {
            let mut record = $crate::common::Record::new();
            $(
                record.insert($crate::common::normalize_key(stringify!($key)), $crate::val!($value));
            )*
            record
        }
    };
}
