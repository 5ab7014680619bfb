use crate::common::{Key, Value};
use crate::config::CollectConfig;
use std::fmt::Display;
use std::ops::Deref;
use std::sync::Arc;

use super::{AllFilter, AndFilter, FnFilter, NotFilter, OrFilter};

/// Decides whether an item belongs in a filtered collection.
///
/// `apply` receives the item as a [`Value`], the key it is stored under
/// and the collection's configuration (for path parsing). Providers never
/// fail: a path that does not resolve simply does or does not match,
/// according to the provider's rule.
///
/// Implementations also render themselves for log output.
pub trait FilterProvider: Send + Sync + Display {
    fn apply(&self, item: &Value, key: Key<'_>, config: &CollectConfig) -> bool;
}

/// A shareable, composable predicate.
///
/// Built with the fluent [`field`](crate::filter::field) API or from a
/// closure with [`where_fn`], and combined with [`Filter::and`],
/// [`Filter::or`] and [`Filter::not`].
///
/// ```rust
/// use stacks_collect::filter::field;
///
/// let adults_in_paris = field("age").gte(18).and(field("city").eq("Paris"));
/// assert_eq!(adults_in_paris.to_string(), "((age >= 18) && (city === \"Paris\"))");
/// ```
#[derive(Clone)]
pub struct Filter {
    inner: Arc<dyn FilterProvider>,
}

impl Filter {
    pub fn new<T: FilterProvider + 'static>(inner: T) -> Self {
        Filter {
            inner: Arc::new(inner),
        }
    }

    /// Matches items that satisfy both `self` and `filter`.
    pub fn and(&self, filter: Filter) -> Self {
        Filter::new(AndFilter::new(vec![self.clone(), filter]))
    }

    /// Matches items that satisfy `self` or `filter`.
    pub fn or(&self, filter: Filter) -> Self {
        Filter::new(OrFilter::new(vec![self.clone(), filter]))
    }

    /// Matches items that do not satisfy `self`.
    pub fn not(&self) -> Self {
        Filter::new(NotFilter::new(self.clone()))
    }
}

impl Display for Filter {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl Deref for Filter {
    type Target = Arc<dyn FilterProvider>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Matches every item.
pub fn all() -> Filter {
    Filter::new(AllFilter)
}

/// Matches items satisfying every filter. An empty list matches everything.
pub fn and(filters: Vec<Filter>) -> Filter {
    Filter::new(AndFilter::new(filters))
}

/// Matches items satisfying at least one filter. An empty list matches nothing.
pub fn or(filters: Vec<Filter>) -> Filter {
    Filter::new(OrFilter::new(filters))
}

/// Matches items the given filter rejects.
pub fn not(filter: Filter) -> Filter {
    Filter::new(NotFilter::new(filter))
}

/// Wraps a predicate closure invoked with each item and its key.
///
/// ```rust
/// use stacks_collect::common::Key;
/// use stacks_collect::filter::where_fn;
///
/// let even_positions = where_fn(|_, key| matches!(key, Key::Index(i) if i % 2 == 0));
/// ```
pub fn where_fn<F>(predicate: F) -> Filter
where
    F: Fn(&Value, Key<'_>) -> bool + Send + Sync + 'static,
{
    Filter::new(FnFilter::new(predicate))
}
