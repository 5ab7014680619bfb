use crate::common::{loose_equals, strict_equals, Value};
use crate::errors::{CollectError, ErrorKind};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A comparison operator understood by `where_op` and [`ComparisonFilter`](crate::filter::ComparisonFilter).
///
/// | token        | operator    | rule                                                 |
/// |--------------|-------------|------------------------------------------------------|
/// | `==`         | `LooseEq`   | strictly equal, or a string equal to the value's text |
/// | `===`        | `StrictEq`  | strictly equal                                       |
/// | `!=` / `<>`  | `LooseNe`   | negation of `==`                                     |
/// | `!==`        | `StrictNe`  | negation of `===`                                    |
/// | `<` `<=` `>` `>=` | `Lt` ... | ordered comparison                                 |
///
/// Ordered comparisons only hold between two numbers, two strings or two
/// booleans. Any other pairing, a missing value or `NaN` is not comparable
/// and the comparison is false in every direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    LooseEq,
    StrictEq,
    LooseNe,
    StrictNe,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::LooseEq => "==",
            Operator::StrictEq => "===",
            Operator::LooseNe => "!=",
            Operator::StrictNe => "!==",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
        }
    }

    /// Compares a resolved value (`None` on a miss) against `expected`.
    pub fn evaluate(&self, resolved: Option<&Value>, expected: &Value) -> bool {
        match self {
            Operator::LooseEq => loose_equals(resolved, expected),
            Operator::StrictEq => strict_equals(resolved, expected),
            Operator::LooseNe => !loose_equals(resolved, expected),
            Operator::StrictNe => !strict_equals(resolved, expected),
            Operator::Lt => compare(resolved, expected, |o| o == Ordering::Less),
            Operator::Lte => compare(resolved, expected, |o| o != Ordering::Greater),
            Operator::Gt => compare(resolved, expected, |o| o == Ordering::Greater),
            Operator::Gte => compare(resolved, expected, |o| o != Ordering::Less),
        }
    }
}

#[inline]
fn compare(resolved: Option<&Value>, expected: &Value, accept: impl Fn(Ordering) -> bool) -> bool {
    resolved
        .and_then(|value| value.partial_compare(expected))
        .is_some_and(accept)
}

impl FromStr for Operator {
    type Err = CollectError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "==" => Ok(Operator::LooseEq),
            "===" => Ok(Operator::StrictEq),
            "!=" | "<>" => Ok(Operator::LooseNe),
            "!==" => Ok(Operator::StrictNe),
            "<" => Ok(Operator::Lt),
            "<=" => Ok(Operator::Lte),
            ">" => Ok(Operator::Gt),
            ">=" => Ok(Operator::Gte),
            _ => {
                log::error!("Unknown comparison operator '{}'", token);
                Err(CollectError::new(
                    &format!("Unknown comparison operator '{}'", token),
                    ErrorKind::InvalidOperator,
                ))
            }
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::val;

    #[test]
    fn test_parse_all_tokens() {
        let tokens = ["==", "===", "!=", "<>", "!==", "<", "<=", ">", ">="];
        for token in tokens {
            assert!(token.parse::<Operator>().is_ok(), "token {}", token);
        }
        assert_eq!("<>".parse::<Operator>().unwrap(), Operator::LooseNe);
    }

    #[test]
    fn test_parse_unknown_token() {
        let err = "=~".parse::<Operator>().unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidOperator);
    }

    #[test]
    fn test_loose_and_strict_equality() {
        assert!(Operator::LooseEq.evaluate(Some(&val!("1")), &val!(1)));
        assert!(!Operator::StrictEq.evaluate(Some(&val!("1")), &val!(1)));
        assert!(Operator::LooseNe.evaluate(Some(&val!(2)), &val!(1)));
        assert!(!Operator::LooseNe.evaluate(Some(&val!("1")), &val!(1)));
        assert!(Operator::StrictNe.evaluate(None, &val!(null)));
    }

    #[test]
    fn test_ordering_operators() {
        assert!(Operator::Lt.evaluate(Some(&val!(1)), &val!(2)));
        assert!(Operator::Lte.evaluate(Some(&val!(2)), &val!(2.0)));
        assert!(Operator::Gt.evaluate(Some(&val!("b")), &val!("a")));
        assert!(Operator::Gte.evaluate(Some(&val!(true)), &val!(false)));
    }

    #[test]
    fn test_incomparable_is_false_both_ways() {
        for op in [Operator::Lt, Operator::Lte, Operator::Gt, Operator::Gte] {
            assert!(!op.evaluate(Some(&val!("10")), &val!(5)));
            assert!(!op.evaluate(None, &val!(5)));
            assert!(!op.evaluate(Some(&val!(null)), &val!(0)));
            assert!(!op.evaluate(Some(&val!(f64::NAN)), &val!(0)));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Operator::StrictNe.to_string(), "!==");
    }
}
