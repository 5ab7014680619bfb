//! The [`Collection`] container and its operations.
//!
//! Operations are grouped by family, each family in its own `impl` block:
//!
//! - mutators: `push`, `pop`, `put`, `forget`, `splice`, `shuffle`, ...
//! - queries: `first`, `last`, `sole`, `contains`, `search`, ...
//! - filters: `filter`, the `where_*` family, `skip`, `take`, `slice`, ...
//! - transforms: `map`, `pluck`, `flatten`, `key_by`, `undot`, ...
//! - ordering: `sort`, `sort_by`, `sort_keys`, `random`, ...
//! - restructuring: `chunk`, `split`, `partition`, `group_by`, `zip`, ...
//! - set algebra: `merge`, `union`, `diff`, `intersect`, `unique`, ...
//! - aggregates: `sum`, `average`, `median`, `mode`, `implode`, ...
//!
//! Everything except the mutators leaves the receiver untouched.

mod aggregate;
mod container;
mod filtering;
mod items;
mod macros;
mod mutate;
mod ordering;
mod query;
mod restructure;
mod set_ops;
mod transform;

pub use container::*;
pub use items::*;
pub use macros::*;
pub(crate) use restructure::group_key;
