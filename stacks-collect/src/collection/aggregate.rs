use crate::collection::Collection;
use crate::common::{loose_number, loose_string, round_significant, Inspectable, Key, Value};
use std::cmp::Ordering;

impl<T> Collection<T> {
    /// Folds the items, with their keys, into a single value.
    ///
    /// ```rust
    /// use stacks_collect::collect;
    ///
    /// let total = collect(vec![1, 2, 3]).reduce(10, |carry, item, _| carry + item);
    /// assert_eq!(total, 16);
    /// ```
    pub fn reduce<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &T, Key<'_>) -> A,
    {
        self.items
            .entries()
            .fold(init, |carry, (key, item)| f(carry, item, key))
    }

    /// Sums the numbers `f` returns for each item.
    pub fn sum_with<K, F>(&self, mut f: F) -> f64
    where
        K: Into<Value>,
        F: FnMut(&T) -> K,
    {
        self.total(self.items.values().map(|item| loose_number(&f(item).into())))
    }

    pub fn average_with<K, F>(&self, f: F) -> f64
    where
        K: Into<Value>,
        F: FnMut(&T) -> K,
    {
        self.sum_with(f) / self.count() as f64
    }

    fn total<I: Iterator<Item = f64>>(&self, numbers: I) -> f64 {
        let total = numbers.fold(0.0, |total, n| total + n);
        if total.is_nan() {
            log::warn!("Sum over non-numeric input is NaN");
        }
        round_significant(total, self.config.sum_precision())
    }
}

impl<T: Inspectable> Collection<T> {
    /// Sums the items, reading each through [`loose_number`].
    ///
    /// The total is rounded to the configured number of significant digits,
    /// so `0.1 + 0.2` sums to `0.3`. An item that does not read as a number
    /// makes the whole sum `NaN`.
    ///
    /// ```rust
    /// use stacks_collect::{collect, val};
    ///
    /// assert_eq!(collect(vec![val!(0.1), val!(0.2)]).sum(), 0.3);
    /// assert_eq!(collect(vec![val!(1), val!("2")]).sum(), 3.0);
    /// assert!(collect(vec![val!(1), val!("two")]).sum().is_nan());
    /// ```
    pub fn sum(&self) -> f64 {
        self.total(self.inspected().iter().map(|item| loose_number(item)))
    }

    /// Sums the values at `path`. A missing value makes the sum `NaN`.
    pub fn sum_by(&self, path: &str) -> f64 {
        self.total(
            self.resolve_all(path)
                .iter()
                .map(|value| value.as_ref().map_or(f64::NAN, loose_number)),
        )
    }

    /// The sum divided by the count; `NaN` when empty.
    pub fn average(&self) -> f64 {
        self.sum() / self.count() as f64
    }

    pub fn avg(&self) -> f64 {
        self.average()
    }

    pub fn average_by(&self, path: &str) -> f64 {
        self.sum_by(path) / self.count() as f64
    }

    /// The smallest numeric item. Items that do not read as numbers are
    /// skipped; `None` when nothing is numeric.
    pub fn min(&self) -> Option<f64> {
        extreme(self.numbers(None), Ordering::Less)
    }

    /// The smallest numeric value at `path`, skipping misses.
    pub fn min_by(&self, path: &str) -> Option<f64> {
        extreme(self.numbers(Some(path)), Ordering::Less)
    }

    pub fn max(&self) -> Option<f64> {
        extreme(self.numbers(None), Ordering::Greater)
    }

    pub fn max_by(&self, path: &str) -> Option<f64> {
        extreme(self.numbers(Some(path)), Ordering::Greater)
    }

    /// The median of the numeric items; `None` when nothing is numeric.
    ///
    /// ```rust
    /// use stacks_collect::collect;
    ///
    /// assert_eq!(collect(vec![5, 1, 3]).median(), Some(3.0));
    /// assert_eq!(collect(vec![4, 1, 3, 2]).median(), Some(2.5));
    /// ```
    pub fn median(&self) -> Option<f64> {
        median_of(self.numbers(None))
    }

    pub fn median_by(&self, path: &str) -> Option<f64> {
        median_of(self.numbers(Some(path)))
    }

    /// The most frequent items, in order of first occurrence. `None` when
    /// the collection is empty.
    pub fn mode(&self) -> Option<Vec<Value>> {
        mode_of(self.inspected().into_iter().map(|item| item.into_owned()))
    }

    /// The most frequent values at `path`. Misses count as `null`.
    pub fn mode_by(&self, path: &str) -> Option<Vec<Value>> {
        mode_of(
            self.resolve_all(path)
                .into_iter()
                .map(Option::unwrap_or_default),
        )
    }

    /// Joins the items' text with `glue`. `null` items render as empty
    /// text.
    ///
    /// ```rust
    /// use stacks_collect::{collect, val};
    ///
    /// let c = collect(vec![val!("a"), val!(null), val!(3)]);
    /// assert_eq!(c.implode(", "), "a, , 3");
    /// ```
    pub fn implode(&self, glue: &str) -> String {
        join_text(self.inspected().iter().map(|item| &**item), glue)
    }

    /// Joins the text of the values at `path` with `glue`.
    pub fn implode_by(&self, path: &str, glue: &str) -> String {
        let values: Vec<Value> = self
            .resolve_all(path)
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect();
        join_text(values.iter(), glue)
    }

    pub fn join(&self, glue: &str) -> String {
        self.implode(glue)
    }

    /// Joins with `glue`, using `final_glue` before the last item.
    ///
    /// ```rust
    /// use stacks_collect::collect;
    ///
    /// let c = collect(vec!["a", "b", "c"]);
    /// assert_eq!(c.join_with_final(", ", " and "), "a, b and c");
    /// ```
    pub fn join_with_final(&self, glue: &str, final_glue: &str) -> String {
        let inspected = self.inspected();
        match inspected.split_last() {
            None => String::new(),
            Some((last, [])) => text_of(last),
            Some((last, rest)) => format!(
                "{}{}{}",
                join_text(rest.iter().map(|item| &**item), glue),
                final_glue,
                text_of(last)
            ),
        }
    }

    fn numbers(&self, path: Option<&str>) -> Vec<f64> {
        let values: Vec<f64> = match path {
            None => self
                .inspected()
                .iter()
                .map(|item| loose_number(item))
                .collect(),
            Some(path) => self
                .resolve_all(path)
                .iter()
                .flatten()
                .map(loose_number)
                .collect(),
        };
        values.into_iter().filter(|n| !n.is_nan()).collect()
    }
}

fn extreme(numbers: Vec<f64>, wanted: Ordering) -> Option<f64> {
    numbers.into_iter().reduce(|best, next| {
        if next.total_cmp(&best) == wanted {
            next
        } else {
            best
        }
    })
}

fn median_of(mut numbers: Vec<f64>) -> Option<f64> {
    if numbers.is_empty() {
        return None;
    }
    numbers.sort_by(f64::total_cmp);
    let middle = numbers.len() / 2;
    if numbers.len() % 2 == 0 {
        Some((numbers[middle - 1] + numbers[middle]) / 2.0)
    } else {
        Some(numbers[middle])
    }
}

fn mode_of<I: Iterator<Item = Value>>(values: I) -> Option<Vec<Value>> {
    let mut counts: Vec<(Value, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }
    let highest = counts.iter().map(|(_, count)| *count).max()?;
    Some(
        counts
            .into_iter()
            .filter(|(_, count)| *count == highest)
            .map(|(value, _)| value)
            .collect(),
    )
}

fn text_of(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => loose_string(other),
    }
}

fn join_text<'v, I: Iterator<Item = &'v Value>>(values: I, glue: &str) -> String {
    values.map(text_of).collect::<Vec<String>>().join(glue)
}
