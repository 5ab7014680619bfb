use std::fmt::Display;

use crate::common::{Key, Value};
use crate::config::CollectConfig;

use super::{Filter, FilterProvider};

/// Matches items satisfying every filter, evaluated in order with
/// short-circuiting.
pub(crate) struct AndFilter {
    filters: Vec<Filter>,
}

impl AndFilter {
    pub(crate) fn new(filters: Vec<Filter>) -> Self {
        AndFilter { filters }
    }
}

impl Display for AndFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.filters.iter().map(|filter| filter.to_string()).collect();
        write!(f, "({})", parts.join(" && "))
    }
}

impl FilterProvider for AndFilter {
    #[inline]
    fn apply(&self, item: &Value, key: Key<'_>, config: &CollectConfig) -> bool {
        self.filters.iter().all(|filter| filter.apply(item, key, config))
    }
}

/// Matches items satisfying at least one filter.
pub(crate) struct OrFilter {
    filters: Vec<Filter>,
}

impl OrFilter {
    pub(crate) fn new(filters: Vec<Filter>) -> Self {
        OrFilter { filters }
    }
}

impl Display for OrFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.filters.iter().map(|filter| filter.to_string()).collect();
        write!(f, "({})", parts.join(" || "))
    }
}

impl FilterProvider for OrFilter {
    #[inline]
    fn apply(&self, item: &Value, key: Key<'_>, config: &CollectConfig) -> bool {
        self.filters.iter().any(|filter| filter.apply(item, key, config))
    }
}

/// Inverts a filter.
pub(crate) struct NotFilter {
    filter: Filter,
}

impl NotFilter {
    pub(crate) fn new(filter: Filter) -> Self {
        NotFilter { filter }
    }
}

impl Display for NotFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "!{}", self.filter)
    }
}

impl FilterProvider for NotFilter {
    #[inline]
    fn apply(&self, item: &Value, key: Key<'_>, config: &CollectConfig) -> bool {
        !self.filter.apply(item, key, config)
    }
}
