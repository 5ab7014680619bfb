use crate::collection::{Collection, Items};
use crate::common::{ItemKey, Key};
use indexmap::IndexMap;
use rand::seq::SliceRandom;
use rand::Rng;

/// In-place operations. Chainable ones return the receiver.
impl<T> Collection<T> {
    /// Appends an item. On a keyed collection the item is stored under the
    /// next free integer key.
    pub fn push(&mut self, item: T) -> &mut Self {
        let next_key = self.items.next_index_key();
        match &mut self.items {
            Items::Sequence(values) => values.push(item),
            Items::Keyed(map) => {
                map.insert(next_key.to_string(), item);
            }
        }
        self
    }

    /// Appends every item of `items`, in order.
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, items: I) -> &mut Self {
        for item in items {
            self.push(item);
        }
        self
    }

    /// Removes and returns the last item.
    pub fn pop(&mut self) -> Option<T> {
        match &mut self.items {
            Items::Sequence(values) => values.pop(),
            Items::Keyed(map) => map.pop().map(|(_, value)| value),
        }
    }

    /// Removes the last `count` items and returns them, in their original
    /// order and mode.
    pub fn pop_many(&mut self, count: usize) -> Collection<T> {
        let split_at = self.count().saturating_sub(count);
        let removed = match &mut self.items {
            Items::Sequence(values) => Items::Sequence(values.split_off(split_at)),
            Items::Keyed(map) => Items::Keyed(map.split_off(split_at)),
        };
        self.derive(removed)
    }

    /// Removes and returns the first item.
    pub fn shift(&mut self) -> Option<T> {
        match &mut self.items {
            Items::Sequence(values) if values.is_empty() => None,
            Items::Sequence(values) => Some(values.remove(0)),
            Items::Keyed(map) => map.shift_remove_index(0).map(|(_, value)| value),
        }
    }

    /// Removes the first `count` items and returns them, in their original
    /// order and mode.
    pub fn shift_many(&mut self, count: usize) -> Collection<T> {
        let count = count.min(self.count());
        let removed = match &mut self.items {
            Items::Sequence(values) => Items::Sequence(values.drain(..count).collect()),
            Items::Keyed(map) => Items::Keyed(map.drain(..count).collect()),
        };
        self.derive(removed)
    }

    /// Stores `item` under `key`.
    ///
    /// On a sequence, an existing position is overwritten and the position
    /// right after the end appends. Any other key turns the sequence into a
    /// keyed collection first.
    pub fn put<K: Into<ItemKey>>(&mut self, key: K, item: T) -> &mut Self {
        let key = key.into();
        if let Items::Sequence(values) = &mut self.items {
            match key.as_index() {
                Some(index) if index < values.len() => {
                    values[index] = item;
                    return self;
                }
                Some(index) if index == values.len() => {
                    values.push(item);
                    return self;
                }
                _ => self.items.make_keyed(),
            }
        }
        if let Items::Keyed(map) = &mut self.items {
            map.insert(key.to_name(), item);
        }
        self
    }

    /// Inserts an item at the front. On a keyed collection the item is
    /// stored under the next free integer key.
    pub fn prepend(&mut self, item: T) -> &mut Self {
        let next_key = self.items.next_index_key();
        match &mut self.items {
            Items::Sequence(values) => values.insert(0, item),
            Items::Keyed(map) => {
                map.shift_insert(0, next_key.to_string(), item);
            }
        }
        self
    }

    /// Inserts an item at the front under `key`, turning a sequence into a
    /// keyed collection. An existing entry under `key` is moved to the front.
    pub fn prepend_with_key<K: Into<String>>(&mut self, key: K, item: T) -> &mut Self {
        self.items.make_keyed();
        if let Items::Keyed(map) = &mut self.items {
            map.shift_insert(0, key.into(), item);
        }
        self
    }

    /// Removes the item under `key`, if any.
    pub fn forget<K: Into<ItemKey>>(&mut self, key: K) -> &mut Self {
        self.items.remove(&key.into());
        self
    }

    /// Removes and returns the item under `key`.
    pub fn pull<K: Into<ItemKey>>(&mut self, key: K) -> Option<T> {
        self.items.remove(&key.into())
    }

    /// Replaces every item with `f(item, key)`, keeping keys.
    pub fn transform<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(&T, Key<'_>) -> T,
    {
        self.items = self.items.map_values(f);
        self
    }

    /// Removes up to `limit` items starting at position `index` (all of
    /// them when `limit` is `None`), inserts `replacement` in their place
    /// and returns the removed items.
    ///
    /// On a keyed collection the replacements are stored under fresh
    /// integer keys.
    pub fn splice<I>(&mut self, index: usize, limit: Option<usize>, replacement: I) -> Collection<T>
    where
        I: IntoIterator<Item = T>,
    {
        let start = index.min(self.count());
        let end = match limit {
            Some(limit) => start.saturating_add(limit).min(self.count()),
            None => self.count(),
        };

        let removed = match &mut self.items {
            Items::Sequence(values) => {
                Items::Sequence(values.splice(start..end, replacement).collect())
            }
            Items::Keyed(map) => {
                let removed: IndexMap<String, T> = map.drain(start..end).collect();
                let mut next_key = Items::<T>::next_free_index(map.keys());
                for (offset, item) in replacement.into_iter().enumerate() {
                    map.shift_insert(start + offset, next_key.to_string(), item);
                    next_key += 1;
                }
                Items::Keyed(removed)
            }
        };
        self.derive(removed)
    }

    /// Shuffles the items with the thread-local generator. Keys are
    /// dropped.
    pub fn shuffle(&mut self) -> &mut Self {
        self.shuffle_with(&mut rand::thread_rng())
    }

    /// Shuffles the items with the given generator. Keys are dropped.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        let mut values = std::mem::take(&mut self.items).into_sequence();
        values.shuffle(rng);
        self.items = Items::Sequence(values);
        self
    }

    /// Appends `f(1)`, `f(2)`, ... `f(n)`.
    pub fn times<F>(&mut self, n: usize, mut f: F) -> &mut Self
    where
        F: FnMut(usize) -> T,
    {
        for iteration in 1..=n {
            self.push(f(iteration));
        }
        self
    }

    /// Calls `f` with the collection and returns it unchanged.
    pub fn tap<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&Self),
    {
        f(self);
        self
    }

    /// Calls `f` with the collection when `condition` holds.
    pub fn when<F>(&mut self, condition: bool, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        if condition {
            f(self);
        }
        self
    }

    /// Calls `f` when `condition` holds and `otherwise` when it does not.
    pub fn when_else<F, G>(&mut self, condition: bool, f: F, otherwise: G) -> &mut Self
    where
        F: FnOnce(&mut Self),
        G: FnOnce(&mut Self),
    {
        if condition {
            f(self);
        } else {
            otherwise(self);
        }
        self
    }

    /// Calls `f` with the collection unless `condition` holds.
    pub fn unless<F>(&mut self, condition: bool, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.when(!condition, f)
    }

    pub fn when_empty<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        let empty = self.is_empty();
        self.when(empty, f)
    }

    pub fn when_not_empty<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        let not_empty = self.is_not_empty();
        self.when(not_empty, f)
    }

    pub fn unless_empty<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.when_not_empty(f)
    }

    pub fn unless_not_empty<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.when_empty(f)
    }
}
