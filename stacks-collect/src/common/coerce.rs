//! Loose coercions shared by the aggregates and the loose predicate operators.
//!
//! Collections compare with two notions of equality. Strict equality is
//! [`Value`]'s own `PartialEq`. Loose equality additionally lets a string
//! match any value that renders to the same text, so `"1"` loosely equals
//! `1` but `1` does not loosely equal `true`.

use crate::common::Value;

/// Reads a number out of a value the way the numeric aggregates do.
///
/// Numbers pass through. Strings are read from their longest numeric
/// prefix (`"12px"` is `12`, `" 3.5e2 "` is `350`); a string without one is
/// `NaN`. Arrays go through their text rendering, so `[7]` is `7`.
/// Everything else is `NaN`.
pub fn loose_number(value: &Value) -> f64 {
    match value {
        Value::I64(v) => *v as f64,
        Value::F64(v) => *v,
        Value::String(s) => parse_numeric_prefix(s),
        Value::Array(_) => parse_numeric_prefix(&loose_string(value)),
        _ => f64::NAN,
    }
}

fn parse_numeric_prefix(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let sign_len = end;

    if trimmed[end..].starts_with("Infinity") {
        return if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    // "5." and ".5" are valid prefixes but not valid Rust float literals
    let mut literal = String::with_capacity(end + 2);
    literal.push_str(&trimmed[..sign_len]);
    let body = &trimmed[sign_len..end];
    if body.starts_with('.') {
        literal.push('0');
    }
    literal.push_str(&body.replacen(".e", ".0e", 1).replacen(".E", ".0E", 1));
    if literal.ends_with('.') {
        literal.push('0');
    }
    literal.parse::<f64>().unwrap_or(f64::NAN)
}

/// Renders a value as text.
///
/// Integral numbers print without a fraction, `null` prints as `"null"`
/// at the top level and as an empty string inside arrays, arrays join their
/// elements with `,` and records print as `[object Object]`.
pub fn loose_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(v) => v.to_string(),
        Value::I64(v) => v.to_string(),
        Value::F64(v) => format_number(*v),
        Value::String(s) => s.clone(),
        Value::Array(values) => values
            .iter()
            .map(|v| match v {
                Value::Null => String::new(),
                other => loose_string(other),
            })
            .collect::<Vec<String>>()
            .join(","),
        Value::Record(_) => "[object Object]".to_string(),
    }
}

/// Formats a float with the shortest text that reads back to it.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e21 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Loose equality between a resolved value and an expected one.
///
/// The resolved value matches when it strictly equals `expected`, or when
/// it is a string equal to the text rendering of `expected`. The rule is
/// one-sided: a numeric field never matches a numeric string, so
/// `loose_equals(Some(&1), &"1")` is false. A missing value only loosely
/// equals `null`.
pub fn loose_equals(resolved: Option<&Value>, expected: &Value) -> bool {
    match resolved {
        None => expected.is_null(),
        Some(actual) if actual == expected => true,
        Some(Value::String(s)) => *s == loose_string(expected),
        Some(_) => false,
    }
}

/// Strict equality between a resolved value and an expected one.
///
/// A missing value never strictly equals anything.
pub fn strict_equals(resolved: Option<&Value>, expected: &Value) -> bool {
    resolved.is_some_and(|actual| actual == expected)
}

/// Rounds to `digits` significant digits.
pub fn round_significant(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || digits == 0 {
        return value;
    }
    format!("{:.*e}", digits - 1, value)
        .parse::<f64>()
        .unwrap_or(value)
}
