use crate::common::Value;

use super::{
    BetweenFilter, BoolFilter, ComparisonFilter, Filter, InFilter, Operator, TruthyFilter,
};

/// Starts a filter on the value found at `path`.
///
/// ```rust
/// use stacks_collect::filter::field;
///
/// let cheap = field("price").lt(10);
/// let tagged = field("meta.tags.0").not_null();
/// let either = cheap.or(tagged);
/// ```
pub fn field(path: &str) -> FluentFilter {
    FluentFilter {
        field: path.to_string(),
    }
}

/// Builder returned by [`field`].
pub struct FluentFilter {
    field: String,
}

impl FluentFilter {
    /// Strictly equal (`===`).
    #[inline]
    pub fn eq<T: Into<Value>>(self, value: T) -> Filter {
        self.op(Operator::StrictEq, value)
    }

    /// Loosely equal (`==`): a string field also matches the value's text.
    #[inline]
    pub fn loose_eq<T: Into<Value>>(self, value: T) -> Filter {
        self.op(Operator::LooseEq, value)
    }

    /// Not strictly equal (`!==`). A miss is not equal to anything.
    #[inline]
    pub fn ne<T: Into<Value>>(self, value: T) -> Filter {
        self.op(Operator::StrictNe, value)
    }

    /// Not loosely equal (`!=`).
    #[inline]
    pub fn loose_ne<T: Into<Value>>(self, value: T) -> Filter {
        self.op(Operator::LooseNe, value)
    }

    #[inline]
    pub fn lt<T: Into<Value>>(self, value: T) -> Filter {
        self.op(Operator::Lt, value)
    }

    #[inline]
    pub fn lte<T: Into<Value>>(self, value: T) -> Filter {
        self.op(Operator::Lte, value)
    }

    #[inline]
    pub fn gt<T: Into<Value>>(self, value: T) -> Filter {
        self.op(Operator::Gt, value)
    }

    #[inline]
    pub fn gte<T: Into<Value>>(self, value: T) -> Filter {
        self.op(Operator::Gte, value)
    }

    /// Compares with an explicit operator.
    pub fn op<T: Into<Value>>(self, operator: Operator, value: T) -> Filter {
        Filter::new(ComparisonFilter::new(self.field, operator, value.into()))
    }

    /// The value exists and is truthy.
    pub fn truthy(self) -> Filter {
        Filter::new(TruthyFilter::new(self.field))
    }

    /// The value's truthiness equals `expected`; a miss counts as falsy.
    pub fn is(self, expected: bool) -> Filter {
        Filter::new(BoolFilter::new(self.field, expected))
    }

    /// Within the inclusive range `low..=high`.
    pub fn between<L: Into<Value>, H: Into<Value>>(self, low: L, high: H) -> Filter {
        Filter::new(BetweenFilter::new(self.field, low.into(), high.into()))
    }

    /// Strictly below `low` or strictly above `high`.
    pub fn not_between<L: Into<Value>, H: Into<Value>>(self, low: L, high: H) -> Filter {
        Filter::new(BetweenFilter::outside(self.field, low.into(), high.into()))
    }

    /// Strictly equal to one of `values`.
    pub fn in_list<T: Into<Value>>(self, values: Vec<T>) -> Filter {
        let values = values.into_iter().map(Into::into).collect();
        Filter::new(InFilter::new(self.field, values))
    }

    /// Missing, or not strictly equal to any of `values`.
    pub fn not_in_list<T: Into<Value>>(self, values: Vec<T>) -> Filter {
        let values = values.into_iter().map(Into::into).collect();
        Filter::new(InFilter::not_in(self.field, values))
    }

    /// Present and explicitly `null`.
    pub fn null(self) -> Filter {
        self.op(Operator::StrictEq, Value::Null)
    }

    /// Missing, or anything but `null`.
    pub fn not_null(self) -> Filter {
        self.op(Operator::StrictNe, Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Key;
    use crate::config::CollectConfig;
    use crate::val;

    fn matches(filter: &Filter, item: Value) -> bool {
        filter.apply(&item, Key::Index(0), &CollectConfig::default())
    }

    #[test]
    fn test_eq_is_strict() {
        let filter = field("n").eq(1);
        assert!(matches(&filter, val!({ "n": 1 })));
        assert!(matches(&filter, val!({ "n": 1.0 })));
        assert!(!matches(&filter, val!({ "n": "1" })));
    }

    #[test]
    fn test_loose_eq_matches_text() {
        let filter = field("n").loose_eq(1);
        assert!(matches(&filter, val!({ "n": 1 })));
        assert!(matches(&filter, val!({ "n": "1" })));
        assert!(!matches(&filter, val!({ "n": 2 })));
    }

    #[test]
    fn test_ne_variants() {
        assert!(matches(&field("n").ne(1), val!({ "n": "1" })));
        assert!(!matches(&field("n").loose_ne(1), val!({ "n": "1" })));
        assert!(matches(&field("n").ne(1), val!({})));
    }

    #[test]
    fn test_relational() {
        assert!(matches(&field("n").lt(2), val!({ "n": 1 })));
        assert!(matches(&field("n").lte(1), val!({ "n": 1 })));
        assert!(matches(&field("n").gt(0.5), val!({ "n": 1 })));
        assert!(!matches(&field("n").gte(1), val!({ "n": "5" })));
    }

    #[test]
    fn test_null_and_not_null() {
        assert!(matches(&field("n").null(), val!({ "n": null })));
        assert!(!matches(&field("n").null(), val!({})));
        assert!(matches(&field("n").not_null(), val!({})));
        assert!(!matches(&field("n").not_null(), val!({ "n": null })));
    }

    #[test]
    fn test_truthy_and_is() {
        assert!(matches(&field("on").truthy(), val!({ "on": "yes" })));
        assert!(matches(&field("on").is(false), val!({ "on": 0 })));
        assert!(!matches(&field("on").is(true), val!({ "on": 0 })));
    }

    #[test]
    fn test_lists_and_ranges() {
        assert!(matches(&field("n").in_list(vec![1, 2]), val!({ "n": 2 })));
        assert!(matches(&field("n").not_in_list(vec![1, 2]), val!({ "n": 3 })));
        assert!(matches(&field("n").between(1, 3), val!({ "n": 2.5 })));
        assert!(matches(&field("n").not_between(1, 3), val!({ "n": 4 })));
    }
}
