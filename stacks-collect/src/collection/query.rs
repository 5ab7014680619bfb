use crate::collection::Collection;
use crate::common::{loose_equals, strict_equals, Inspectable, ItemKey, Key, Value};
use crate::errors::{CollectError, CollectResult, ErrorKind};
use crate::path::{resolve, FieldPath};

impl<T> Collection<T> {
    pub fn first(&self) -> Option<&T> {
        self.items.values().next()
    }

    /// The first item satisfying `predicate`.
    pub fn first_by<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T, Key<'_>) -> bool,
    {
        self.items
            .entries()
            .find(|(key, item)| predicate(item, *key))
            .map(|(_, item)| item)
    }

    pub fn first_or(&self, default: T) -> T
    where
        T: Clone,
    {
        self.first().cloned().unwrap_or(default)
    }

    /// The first item, or the result of `default` when empty.
    pub fn first_or_else<F>(&self, default: F) -> T
    where
        T: Clone,
        F: FnOnce() -> T,
    {
        self.first().cloned().unwrap_or_else(default)
    }

    /// The first item.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` when the collection is empty.
    pub fn first_or_fail(&self) -> CollectResult<&T> {
        self.first().ok_or_else(item_not_found)
    }

    /// The first item satisfying `predicate`.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` when no item matches.
    pub fn first_or_fail_by<F>(&self, predicate: F) -> CollectResult<&T>
    where
        F: FnMut(&T, Key<'_>) -> bool,
    {
        self.first_by(predicate).ok_or_else(item_not_found)
    }

    pub fn last(&self) -> Option<&T> {
        self.items.values().next_back()
    }

    /// The last item satisfying `predicate`.
    pub fn last_by<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T, Key<'_>) -> bool,
    {
        self.items
            .entries()
            .rev()
            .find(|(key, item)| predicate(item, *key))
            .map(|(_, item)| item)
    }

    pub fn last_or(&self, default: T) -> T
    where
        T: Clone,
    {
        self.last().cloned().unwrap_or(default)
    }

    pub fn last_or_else<F>(&self, default: F) -> T
    where
        T: Clone,
        F: FnOnce() -> T,
    {
        self.last().cloned().unwrap_or_else(default)
    }

    /// The only item of the collection.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` when empty and `MultipleItemsFound` when there
    /// is more than one item.
    pub fn sole(&self) -> CollectResult<&T> {
        self.sole_by(|_, _| true)
    }

    /// The only item satisfying `predicate`.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` when no item matches and `MultipleItemsFound`
    /// when more than one does.
    pub fn sole_by<F>(&self, mut predicate: F) -> CollectResult<&T>
    where
        F: FnMut(&T, Key<'_>) -> bool,
    {
        let mut matches = self
            .items
            .entries()
            .filter(|(key, item)| predicate(item, *key))
            .map(|(_, item)| item);

        let first = matches.next().ok_or_else(item_not_found)?;
        if matches.next().is_some() {
            log::error!("Expected a single item, found several");
            return Err(CollectError::new(
                "Multiple items found",
                ErrorKind::MultipleItemsFound,
            ));
        }
        Ok(first)
    }

    /// Whether any item satisfies `predicate`.
    pub fn contains_by<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T, Key<'_>) -> bool,
    {
        self.items.entries().any(|(key, item)| predicate(item, key))
    }

    pub fn doesnt_contain_by<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T, Key<'_>) -> bool,
    {
        !self.contains_by(predicate)
    }

    /// Whether every item satisfies `predicate`. True for an empty
    /// collection.
    pub fn every<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T, Key<'_>) -> bool,
    {
        self.items.entries().all(|(key, item)| predicate(item, key))
    }

    /// Whether at least one item satisfies `predicate`.
    pub fn some<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T, Key<'_>) -> bool,
    {
        self.contains_by(predicate)
    }

    /// The key of the first item satisfying `predicate`.
    pub fn search_by<F>(&self, mut predicate: F) -> Option<ItemKey>
    where
        F: FnMut(&T, Key<'_>) -> bool,
    {
        self.items
            .entries()
            .find(|(key, item)| predicate(item, *key))
            .map(|(key, _)| key.into_owned())
    }
}

impl<T: PartialEq> Collection<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.items.values().any(|candidate| candidate == item)
    }

    pub fn doesnt_contain(&self, item: &T) -> bool {
        !self.contains(item)
    }

    /// The key of the first item equal to `item`.
    pub fn search(&self, item: &T) -> Option<ItemKey> {
        self.search_by(|candidate, _| candidate == item)
    }
}

impl<T: Inspectable> Collection<T> {
    /// The first item whose value at `path` strictly equals `value`.
    pub fn first_where<V: Into<Value>>(&self, path: &str, value: V) -> Option<&T> {
        let value = value.into();
        let path = FieldPath::parse(path, &self.config);
        self.items
            .values()
            .find(|item| strict_equals(resolve(&item.inspect(), &path), &value))
    }

    /// Whether any item's value at `path` strictly equals `value`.
    pub fn contains_where<V: Into<Value>>(&self, path: &str, value: V) -> bool {
        self.first_where(path, value).is_some()
    }

    pub fn doesnt_contain_where<V: Into<Value>>(&self, path: &str, value: V) -> bool {
        !self.contains_where(path, value)
    }

    /// The key of the first item loosely equal to `value`, so that a
    /// string item `"1"` is found by `1`.
    pub fn search_loose<V: Into<Value>>(&self, value: V) -> Option<ItemKey> {
        let value = value.into();
        self.search_by(|item, _| loose_equals(Some(&*item.inspect()), &value))
    }
}

fn item_not_found() -> CollectError {
    log::error!("No item matched the query");
    CollectError::new("Item not found", ErrorKind::ItemNotFound)
}
