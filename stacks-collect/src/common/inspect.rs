use crate::common::{Record, Value};
use std::borrow::Cow;

/// Exposes an item as a structural [`Value`].
///
/// Every operation that resolves a path, compares with a predicate
/// operator, coerces to a number or renders to text requires its items to
/// be `Inspectable`. Operations that only move items around (`push`,
/// `chunk`, `reverse`, ...) have no such bound, so a collection of any `T`
/// supports them.
///
/// [`Value`] and [`Record`] borrow themselves; other types build a value on
/// demand.
///
/// ```rust
/// use stacks_collect::common::{Inspectable, Value};
///
/// assert_eq!(*42i64.inspect(), Value::I64(42));
/// assert_eq!(*"x".inspect(), Value::from("x"));
/// ```
pub trait Inspectable {
    fn inspect(&self) -> Cow<'_, Value>;
}

impl Inspectable for Value {
    fn inspect(&self) -> Cow<'_, Value> {
        Cow::Borrowed(self)
    }
}

impl Inspectable for Record {
    fn inspect(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::Record(self.clone()))
    }
}

macro_rules! impl_inspectable_by_into {
    ($($ty:ty),*) => {
        $(
            impl Inspectable for $ty {
                fn inspect(&self) -> Cow<'_, Value> {
                    Cow::Owned(Value::from(*self))
                }
            }
        )*
    };
}

impl_inspectable_by_into!(bool, i8, u8, i16, u16, i32, u32, i64, u64, isize, usize, f32, f64, char);

impl Inspectable for String {
    fn inspect(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::String(self.clone()))
    }
}

impl Inspectable for str {
    fn inspect(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::from(self))
    }
}

impl<T: Inspectable> Inspectable for Option<T> {
    fn inspect(&self) -> Cow<'_, Value> {
        match self {
            Some(value) => value.inspect(),
            None => Cow::Owned(Value::Null),
        }
    }
}

impl<T: Inspectable> Inspectable for Vec<T> {
    fn inspect(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::Array(
            self.iter().map(|v| v.inspect().into_owned()).collect(),
        ))
    }
}

impl<T: Inspectable + ?Sized> Inspectable for &T {
    fn inspect(&self) -> Cow<'_, Value> {
        (**self).inspect()
    }
}

impl<A: Inspectable, B: Inspectable> Inspectable for (A, B) {
    fn inspect(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::Array(vec![
            self.0.inspect().into_owned(),
            self.1.inspect().into_owned(),
        ]))
    }
}
