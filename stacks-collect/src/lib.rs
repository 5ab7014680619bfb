//! # stacks_collect - Dual-Mode Collections
//!
//! An in-memory container that holds either an ordered sequence of items or
//! an insertion-ordered keyed mapping, with Laravel-style operations for
//! querying, reshaping and aggregating them.
//!
//! ## Key Features
//!
//! - **Dual mode**: one [`Collection`] type over a sequence or a keyed mapping
//! - **Paths**: dotted paths (`"user.address.city"`) and wildcard plucking
//!   (`"items.*.price"`) over nested records and arrays
//! - **Predicates**: the `where` family with `==`/`===`/`<`/... operators and
//!   composable [`filter::Filter`]s
//! - **Pure by default**: every operation except the mutators returns a new
//!   collection and leaves its receiver untouched
//! - **Generic items**: anything implementing [`common::Inspectable`] can be
//!   queried by path; any `T` can be moved, sliced and reordered
//!
//! ## Quick Start
//!
//! ```rust
//! use stacks_collect::{collect, val};
//!
//! let products = collect(vec![
//!     val!({ "name": "Desk", "price": 200, "category": "office" }),
//!     val!({ "name": "Chair", "price": 100, "category": "office" }),
//!     val!({ "name": "Lamp", "price": 40, "category": "home" }),
//! ]);
//!
//! let office = products.where_eq("category", "office");
//! assert_eq!(office.sum_by("price"), 300.0);
//!
//! let by_category = products.group_by("category");
//! assert_eq!(by_category.keys().to_vec(), vec!["office", "home"]);
//!
//! let cheapest = products.sort_by("price").first().cloned();
//! assert_eq!(cheapest, Some(val!({ "name": "Lamp", "price": 40, "category": "home" })));
//! ```
//!
//! ## Module Organization
//!
//! - [`collection`] - The container and every operation family
//! - [`common`] - The `Value` item model, records, keys and coercions
//! - [`config`] - Path separator, wildcard and sum precision
//! - [`errors`] - Error types and result definitions
//! - [`filter`] - Predicates for the `where` family
//! - [`path`] - Path parsing, resolution and wildcard plucking

pub mod collection;
pub mod common;
pub mod config;
pub mod errors;
pub mod filter;
pub mod path;

pub use collection::{Collection, Items, MacroRegistry};
pub use common::{Inspectable, ItemKey, Key, Record, SortOrder, Value};
pub use config::CollectConfig;
pub use errors::{CollectError, CollectResult, ErrorKind};

/// Wraps `input` in a [`Collection`] with the default configuration.
///
/// A `Vec` or array becomes a sequence and an `IndexMap<String, T>` a keyed
/// collection. A [`Value`] array, record or scalar becomes a sequence, a
/// keyed collection or a one-item sequence.
///
/// ```rust
/// use stacks_collect::{collect, val};
///
/// assert!(collect(vec![1, 2]).is_sequence());
/// assert!(collect(val!({ "a": 1 })).is_keyed());
/// assert_eq!(collect(val!(7)).count(), 1);
/// ```
pub fn collect<T, I: Into<Collection<T>>>(input: I) -> Collection<T> {
    input.into()
}

#[cfg(test)]
#[ctor::ctor]
fn init_test_logger() {
    colog::init();
}
