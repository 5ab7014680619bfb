use crate::common::Value;
use std::fmt::{Display, Formatter};

/// The key an item is stored under, as handed to key-aware callbacks.
///
/// Sequence items are addressed by position, keyed items by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    Index(usize),
    Name(&'a str),
}

impl<'a> Key<'a> {
    pub fn into_owned(self) -> ItemKey {
        match self {
            Key::Index(i) => ItemKey::Index(i),
            Key::Name(name) => ItemKey::Name(name.to_string()),
        }
    }

    /// The key as a value: a number for positions, a string for names.
    pub fn to_value(self) -> Value {
        match self {
            Key::Index(i) => Value::from(i),
            Key::Name(name) => Value::from(name),
        }
    }

    /// The key as a keyed-mode name.
    pub fn to_name(self) -> String {
        match self {
            Key::Index(i) => i.to_string(),
            Key::Name(name) => name.to_string(),
        }
    }
}

impl Display for Key<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{}", i),
            Key::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Owned form of [`Key`].
///
/// Returned by `search` and accepted by the key based accessors. A name
/// looked up in a sequence is read as a position when it is numeric, and a
/// position looked up in a keyed collection is read as its decimal name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemKey {
    Index(usize),
    Name(String),
}

impl ItemKey {
    pub fn as_key(&self) -> Key<'_> {
        match self {
            ItemKey::Index(i) => Key::Index(*i),
            ItemKey::Name(name) => Key::Name(name),
        }
    }

    /// The position this key addresses in a sequence, if any.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            ItemKey::Index(i) => Some(*i),
            ItemKey::Name(name) => parse_index(name),
        }
    }

    /// The name this key addresses in a keyed collection.
    pub fn to_name(&self) -> String {
        self.as_key().to_name()
    }
}

/// Reads `text` as a position. Only canonical decimal text qualifies, so
/// `"+1"` and `"01"` are names rather than positions.
pub(crate) fn parse_index(text: &str) -> Option<usize> {
    let canonical = !text.is_empty()
        && text.bytes().all(|b| b.is_ascii_digit())
        && (text == "0" || !text.starts_with('0'));
    if canonical {
        text.parse().ok()
    } else {
        None
    }
}

impl Display for ItemKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

impl From<usize> for ItemKey {
    fn from(value: usize) -> Self {
        ItemKey::Index(value)
    }
}

impl From<i32> for ItemKey {
    fn from(value: i32) -> Self {
        match usize::try_from(value) {
            Ok(index) => ItemKey::Index(index),
            Err(_) => ItemKey::Name(value.to_string()),
        }
    }
}

impl From<&str> for ItemKey {
    fn from(value: &str) -> Self {
        ItemKey::Name(value.to_string())
    }
}

impl From<String> for ItemKey {
    fn from(value: String) -> Self {
        ItemKey::Name(value)
    }
}

impl From<Key<'_>> for ItemKey {
    fn from(value: Key<'_>) -> Self {
        value.into_owned()
    }
}
