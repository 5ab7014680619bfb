use crate::collection::Collection;
use crate::common::{Inspectable, ItemKey, Key, Value};
use crate::errors::CollectResult;
use crate::filter::{
    BetweenFilter, BoolFilter, ComparisonFilter, Filter, FilterProvider, InFilter, Operator,
    TruthyFilter,
};
use std::collections::HashSet;

/// Selection operations. Every result keeps the receiver's mode, and a
/// keyed result keeps the original keys.
impl<T: Clone> Collection<T> {
    /// Keeps the items at `positions`.
    pub(crate) fn select_positions<I>(&self, positions: I) -> Collection<T>
    where
        I: IntoIterator<Item = usize>,
    {
        self.derive(self.items.pick(positions))
    }

    /// Keeps the items for which `keep` holds.
    pub(crate) fn select_where<F>(&self, mut keep: F) -> Collection<T>
    where
        F: FnMut(&T, Key<'_>) -> bool,
    {
        let positions: Vec<usize> = self
            .items
            .entries()
            .enumerate()
            .filter(|(_, (key, item))| keep(item, *key))
            .map(|(position, _)| position)
            .collect();
        self.select_positions(positions)
    }

    pub fn filter<F>(&self, mut predicate: F) -> Collection<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.select_where(|item, _| predicate(item))
    }

    pub fn filter_with_key<F>(&self, predicate: F) -> Collection<T>
    where
        F: FnMut(&T, Key<'_>) -> bool,
    {
        self.select_where(predicate)
    }

    /// The inverse of [`Collection::filter`].
    pub fn reject<F>(&self, mut predicate: F) -> Collection<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.select_where(|item, _| !predicate(item))
    }

    /// Drops the first `count` items.
    pub fn skip(&self, count: usize) -> Collection<T> {
        self.select_positions(count.min(self.count())..self.count())
    }

    /// Drops items until `predicate` first holds; that item and the rest are
    /// kept.
    pub fn skip_until<F>(&self, predicate: F) -> Collection<T>
    where
        F: FnMut(&T) -> bool,
    {
        let start = self.items.values().position(predicate).unwrap_or(self.count());
        self.skip(start)
    }

    /// Drops items while `predicate` holds.
    pub fn skip_while<F>(&self, mut predicate: F) -> Collection<T>
    where
        F: FnMut(&T) -> bool,
    {
        let start = self
            .items
            .values()
            .position(|item| !predicate(item))
            .unwrap_or(self.count());
        self.skip(start)
    }

    /// The first `count` items, or the last `-count` items when `count` is
    /// negative.
    pub fn take(&self, count: isize) -> Collection<T> {
        let len = self.count();
        let range = if count < 0 {
            len.saturating_sub(count.unsigned_abs())..len
        } else {
            0..count.unsigned_abs().min(len)
        };
        self.select_positions(range)
    }

    /// Keeps items until `predicate` first holds; that item is excluded.
    pub fn take_until<F>(&self, predicate: F) -> Collection<T>
    where
        F: FnMut(&T) -> bool,
    {
        let end = self.items.values().position(predicate).unwrap_or(self.count());
        self.select_positions(0..end)
    }

    /// Keeps items while `predicate` holds.
    pub fn take_while<F>(&self, mut predicate: F) -> Collection<T>
    where
        F: FnMut(&T) -> bool,
    {
        let end = self
            .items
            .values()
            .position(|item| !predicate(item))
            .unwrap_or(self.count());
        self.select_positions(0..end)
    }

    /// Up to `limit` items starting at `offset`. A negative offset counts
    /// from the end.
    pub fn slice(&self, offset: isize, limit: Option<usize>) -> Collection<T> {
        let len = self.count();
        let start = if offset < 0 {
            len.saturating_sub(offset.unsigned_abs())
        } else {
            offset.unsigned_abs().min(len)
        };
        let end = match limit {
            Some(limit) => start.saturating_add(limit).min(len),
            None => len,
        };
        self.select_positions(start..end)
    }

    /// Every `step`-th item, starting at position `offset`. The result is a
    /// sequence.
    pub fn nth(&self, step: usize, offset: usize) -> Collection<T> {
        if step == 0 {
            log::warn!("nth called with a step of zero, returning an empty collection");
            return self.derive_seq(Vec::new());
        }
        let values = self
            .items
            .values()
            .skip(offset)
            .step_by(step)
            .cloned()
            .collect();
        self.derive_seq(values)
    }

    /// The items of page `page` (1-based) with `per_page` items per page.
    /// Page zero is empty.
    pub fn for_page(&self, page: usize, per_page: usize) -> Collection<T> {
        if page == 0 {
            return self.select_positions(std::iter::empty());
        }
        let start = (page - 1).saturating_mul(per_page);
        self.slice(isize::try_from(start).unwrap_or(isize::MAX), Some(per_page))
    }

    /// Keeps the items stored under `keys`, in collection order.
    pub fn only<I, K>(&self, keys: I) -> Collection<T>
    where
        I: IntoIterator<Item = K>,
        K: Into<ItemKey>,
    {
        let wanted = key_names(keys);
        self.select_where(|_, key| wanted.contains(&key.to_name()))
    }

    /// Drops the items stored under `keys`.
    pub fn except<I, K>(&self, keys: I) -> Collection<T>
    where
        I: IntoIterator<Item = K>,
        K: Into<ItemKey>,
    {
        let unwanted = key_names(keys);
        self.select_where(|_, key| !unwanted.contains(&key.to_name()))
    }
}

fn key_names<I, K>(keys: I) -> HashSet<String>
where
    I: IntoIterator<Item = K>,
    K: Into<ItemKey>,
{
    keys.into_iter().map(|key| key.into().to_name()).collect()
}

/// The `where` family: selection by a [`Filter`] evaluated against each
/// item's [`Value`].
impl<T: Inspectable + Clone> Collection<T> {
    /// Keeps the items matching `filter`.
    ///
    /// ```rust
    /// use stacks_collect::filter::field;
    /// use stacks_collect::{collect, val};
    ///
    /// let stock = collect(vec![
    ///     val!({ "sku": "a", "qty": 0 }),
    ///     val!({ "sku": "b", "qty": 4 }),
    /// ]);
    /// let available = stock.where_by(&field("qty").gt(0));
    /// assert_eq!(available.count(), 1);
    /// ```
    pub fn where_by(&self, filter: &Filter) -> Collection<T> {
        let config = self.config;
        self.select_where(|item, key| filter.apply(&item.inspect(), key, &config))
    }

    fn where_provider<P: FilterProvider + 'static>(&self, provider: P) -> Collection<T> {
        self.where_by(&Filter::new(provider))
    }

    /// Keeps items that are truthy themselves.
    pub fn filter_truthy(&self) -> Collection<T> {
        self.select_where(|item, _| item.inspect().is_truthy())
    }

    /// Keeps items whose value at `path` is truthy.
    pub fn where_truthy(&self, path: &str) -> Collection<T> {
        self.where_provider(TruthyFilter::new(path.to_string()))
    }

    /// Keeps items whose value at `path` has the given truthiness.
    pub fn where_bool(&self, path: &str, expected: bool) -> Collection<T> {
        self.where_provider(BoolFilter::new(path.to_string(), expected))
    }

    /// Keeps items whose value at `path` strictly equals `value`.
    pub fn where_eq<V: Into<Value>>(&self, path: &str, value: V) -> Collection<T> {
        self.where_cmp(path, Operator::StrictEq, value)
    }

    pub fn where_cmp<V: Into<Value>>(&self, path: &str, operator: Operator, value: V) -> Collection<T> {
        self.where_provider(ComparisonFilter::new(path.to_string(), operator, value.into()))
    }

    /// Like [`Collection::where_cmp`] with the operator given as text, such
    /// as `">="` or `"<>"`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperator` for an unknown operator.
    pub fn where_op<V: Into<Value>>(&self, path: &str, operator: &str, value: V) -> CollectResult<Collection<T>> {
        let operator: Operator = operator.parse()?;
        Ok(self.where_cmp(path, operator, value))
    }

    /// Keeps items whose value at `path` is strictly equal to one of
    /// `values`.
    pub fn where_in<V: Into<Value>>(&self, path: &str, values: Vec<V>) -> Collection<T> {
        let values = values.into_iter().map(Into::into).collect();
        self.where_provider(InFilter::new(path.to_string(), values))
    }

    /// Drops items whose value at `path` is one of `values`. Items lacking
    /// the path are kept.
    pub fn where_not_in<V: Into<Value>>(&self, path: &str, values: Vec<V>) -> Collection<T> {
        let values = values.into_iter().map(Into::into).collect();
        self.where_provider(InFilter::not_in(path.to_string(), values))
    }

    /// Keeps items whose value at `path` lies in `low..=high`.
    pub fn where_between<L, H>(&self, path: &str, low: L, high: H) -> Collection<T>
    where
        L: Into<Value>,
        H: Into<Value>,
    {
        self.where_provider(BetweenFilter::new(path.to_string(), low.into(), high.into()))
    }

    /// Keeps items whose value at `path` lies outside `low..=high`.
    pub fn where_not_between<L, H>(&self, path: &str, low: L, high: H) -> Collection<T>
    where
        L: Into<Value>,
        H: Into<Value>,
    {
        self.where_provider(BetweenFilter::outside(path.to_string(), low.into(), high.into()))
    }

    /// Keeps items whose value at `path` is an explicit `null`.
    pub fn where_null(&self, path: &str) -> Collection<T> {
        self.where_cmp(path, Operator::StrictEq, Value::Null)
    }

    /// Drops items whose value at `path` is an explicit `null`. Items lacking
    /// the path are kept.
    pub fn where_not_null(&self, path: &str) -> Collection<T> {
        self.where_cmp(path, Operator::StrictNe, Value::Null)
    }
}
