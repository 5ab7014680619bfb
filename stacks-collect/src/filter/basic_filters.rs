use std::fmt::Display;

use crate::common::{Key, Value};
use crate::config::CollectConfig;
use crate::path::resolve_str;

use super::{FilterProvider, Operator};

/// Resolves `field` on nested items; a scalar item stands for itself.
#[inline]
fn resolve_or_self<'v>(item: &'v Value, field: &str, config: &CollectConfig) -> Option<&'v Value> {
    if item.is_nested() {
        resolve_str(item, field, config)
    } else {
        Some(item)
    }
}

/// Matches every item.
pub(crate) struct AllFilter;

impl FilterProvider for AllFilter {
    fn apply(&self, _item: &Value, _key: Key<'_>, _config: &CollectConfig) -> bool {
        true
    }
}

impl Display for AllFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AllFilter")
    }
}

/// Matches items whose value at `field` is truthy. A miss is falsy.
pub struct TruthyFilter {
    field: String,
}

impl TruthyFilter {
    pub fn new(field: String) -> Self {
        TruthyFilter { field }
    }
}

impl FilterProvider for TruthyFilter {
    #[inline]
    fn apply(&self, item: &Value, _key: Key<'_>, config: &CollectConfig) -> bool {
        resolve_str(item, &self.field, config).is_some_and(Value::is_truthy)
    }
}

impl Display for TruthyFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.field)
    }
}

/// Matches items whose value at `field` has the requested truthiness.
pub struct BoolFilter {
    field: String,
    expected: bool,
}

impl BoolFilter {
    pub fn new(field: String, expected: bool) -> Self {
        BoolFilter { field, expected }
    }
}

impl FilterProvider for BoolFilter {
    #[inline]
    fn apply(&self, item: &Value, _key: Key<'_>, config: &CollectConfig) -> bool {
        let truthy = resolve_str(item, &self.field, config).is_some_and(Value::is_truthy);
        truthy == self.expected
    }
}

impl Display for BoolFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.expected {
            write!(f, "({})", self.field)
        } else {
            write!(f, "(!{})", self.field)
        }
    }
}

/// Compares the value at `field` with a fixed value.
pub struct ComparisonFilter {
    field: String,
    operator: Operator,
    value: Value,
}

impl ComparisonFilter {
    pub fn new(field: String, operator: Operator, value: Value) -> Self {
        ComparisonFilter {
            field,
            operator,
            value,
        }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }
}

impl FilterProvider for ComparisonFilter {
    #[inline]
    fn apply(&self, item: &Value, _key: Key<'_>, config: &CollectConfig) -> bool {
        let resolved = resolve_str(item, &self.field, config);
        self.operator.evaluate(resolved, &self.value)
    }
}

impl Display for ComparisonFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.field, self.operator, self.value)
    }
}

/// Matches values inside (or, negated, outside) an inclusive range.
///
/// Values that cannot be ordered against the bounds match neither form.
pub struct BetweenFilter {
    field: String,
    low: Value,
    high: Value,
    negated: bool,
}

impl BetweenFilter {
    pub fn new(field: String, low: Value, high: Value) -> Self {
        BetweenFilter {
            field,
            low,
            high,
            negated: false,
        }
    }

    pub fn outside(field: String, low: Value, high: Value) -> Self {
        BetweenFilter {
            field,
            low,
            high,
            negated: true,
        }
    }
}

impl FilterProvider for BetweenFilter {
    fn apply(&self, item: &Value, _key: Key<'_>, config: &CollectConfig) -> bool {
        let resolved = resolve_or_self(item, &self.field, config);
        if self.negated {
            Operator::Lt.evaluate(resolved, &self.low) || Operator::Gt.evaluate(resolved, &self.high)
        } else {
            Operator::Gte.evaluate(resolved, &self.low) && Operator::Lte.evaluate(resolved, &self.high)
        }
    }
}

impl Display for BetweenFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword = if self.negated { "not between" } else { "between" };
        write!(f, "({} {} {} and {})", self.field, keyword, self.low, self.high)
    }
}

/// Matches values that are (or, negated, are not) members of a list.
///
/// Membership is strict equality. A miss is never a member, so the negated
/// form keeps items lacking the field.
pub struct InFilter {
    field: String,
    values: Vec<Value>,
    negated: bool,
}

impl InFilter {
    pub fn new(field: String, values: Vec<Value>) -> Self {
        InFilter {
            field,
            values,
            negated: false,
        }
    }

    pub fn not_in(field: String, values: Vec<Value>) -> Self {
        InFilter {
            field,
            values,
            negated: true,
        }
    }
}

impl FilterProvider for InFilter {
    fn apply(&self, item: &Value, _key: Key<'_>, config: &CollectConfig) -> bool {
        let member = match resolve_or_self(item, &self.field, config) {
            Some(value) => self.values.contains(value),
            None => false,
        };
        member != self.negated
    }
}

impl Display for InFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword = if self.negated { "not in" } else { "in" };
        let values: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        write!(f, "({} {} [{}])", self.field, keyword, values.join(", "))
    }
}

type Predicate = dyn Fn(&Value, Key<'_>) -> bool + Send + Sync;

/// Delegates to a closure invoked with the item and its key.
pub struct FnFilter {
    predicate: Box<Predicate>,
}

impl FnFilter {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Value, Key<'_>) -> bool + Send + Sync + 'static,
    {
        FnFilter {
            predicate: Box::new(predicate),
        }
    }
}

impl FilterProvider for FnFilter {
    #[inline]
    fn apply(&self, item: &Value, key: Key<'_>, _config: &CollectConfig) -> bool {
        (self.predicate)(item, key)
    }
}

impl Display for FnFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(fn)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::val;

    fn apply(provider: &dyn FilterProvider, item: &Value) -> bool {
        provider.apply(item, Key::Index(0), &CollectConfig::default())
    }

    #[test]
    fn test_truthy_filter() {
        let filter = TruthyFilter::new("active".to_string());
        assert!(apply(&filter, &val!({ "active": 1 })));
        assert!(!apply(&filter, &val!({ "active": 0 })));
        assert!(!apply(&filter, &val!({ "other": true })));
    }

    #[test]
    fn test_bool_filter() {
        let falsy = BoolFilter::new("active".to_string(), false);
        assert!(apply(&falsy, &val!({ "active": "" })));
        assert!(apply(&falsy, &val!({})));
        assert!(!apply(&falsy, &val!({ "active": "yes" })));
        assert_eq!(falsy.to_string(), "(!active)");
    }

    #[test]
    fn test_comparison_filter_nested_path() {
        let filter = ComparisonFilter::new("user.age".to_string(), Operator::Gt, val!(30));
        assert!(apply(&filter, &val!({ "user": { "age": 40 } })));
        assert!(!apply(&filter, &val!({ "user": { "age": "40" } })));
        assert!(!apply(&filter, &val!({ "user": {} })));
        assert_eq!(filter.to_string(), "(user.age > 30)");
    }

    #[test]
    fn test_between_filter() {
        let inside = BetweenFilter::new("n".to_string(), val!(1), val!(3));
        assert!(apply(&inside, &val!({ "n": 1 })));
        assert!(apply(&inside, &val!({ "n": 3 })));
        assert!(!apply(&inside, &val!({ "n": 4 })));
        assert!(apply(&inside, &val!(2)));

        let outside = BetweenFilter::outside("n".to_string(), val!(1), val!(3));
        assert!(apply(&outside, &val!({ "n": 0 })));
        assert!(!apply(&outside, &val!({ "n": 2 })));
        assert!(!apply(&outside, &val!({})));
    }

    #[test]
    fn test_in_filter() {
        let filter = InFilter::new("c".to_string(), vec![val!("a"), val!("b")]);
        assert!(apply(&filter, &val!({ "c": "a" })));
        assert!(!apply(&filter, &val!({ "c": "z" })));
        assert!(!apply(&filter, &val!({})));
        assert!(apply(&filter, &val!("b")));

        let not_in = InFilter::not_in("c".to_string(), vec![val!("a")]);
        assert!(apply(&not_in, &val!({})));
        assert!(!apply(&not_in, &val!({ "c": "a" })));
        assert_eq!(not_in.to_string(), "(c not in [\"a\"])");
    }

    #[test]
    fn test_fn_filter() {
        let filter = FnFilter::new(|item, _| item.as_i64().is_some_and(|n| n > 1));
        assert!(apply(&filter, &val!(2)));
        assert!(!apply(&filter, &val!(1)));
    }
}
