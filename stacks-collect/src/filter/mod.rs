//! Predicates for the `where` family of collection operations.
//!
//! A [`Filter`] decides, item by item, whether an item is kept. Filters are
//! built with the fluent API and combined with logical operators:
//!
//! - `field("age").gt(30)` - ordered comparison
//! - `field("name").eq("Alice")` - strict equality (`===`)
//! - `field("id").loose_eq(1)` - loose equality (`==`), also matches `"1"`
//! - `field("active").truthy()` - truthiness of the resolved value
//! - `field("age").gt(30).and(field("city").eq("Paris"))` - logical AND
//! - `where_fn(|item, key| ...)` - arbitrary closure
//!
//! Paths are resolved with the collection's separator, so `field("a.b")`
//! looks inside nested records and arrays. A path that does not resolve is
//! a miss; see [`Operator`] for how each operator treats one.
//!
//! ```rust
//! use stacks_collect::collect;
//! use stacks_collect::filter::field;
//! use stacks_collect::val;
//!
//! let people = collect(vec![
//!     val!({ "name": "Ann", "age": 31 }),
//!     val!({ "name": "Bob", "age": 25 }),
//! ]);
//! let names = people.where_by(&field("age").gt(30)).pluck("name");
//! assert_eq!(names.to_vec(), vec![val!("Ann")]);
//! ```

mod basic_filters;
mod filter;
mod fluent;
mod logical_filters;
mod operator;

pub use basic_filters::*;
pub use filter::*;
pub use fluent::*;
pub(crate) use logical_filters::*;
pub use operator::*;
