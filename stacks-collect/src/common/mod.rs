//! Item model shared by every collection operation.
//!
//! [`Value`] is the structural shape items are inspected as, [`Record`] its
//! keyed node and [`Inspectable`] the bridge from arbitrary item types.
//! The [`coerce`] functions hold the loose numeric and textual conversions
//! used by the aggregates and the loose predicate operators.

pub mod coerce;
mod inspect;
mod key;
mod record;
mod sort_order;
mod value;

pub use coerce::{loose_equals, loose_number, loose_string, round_significant, strict_equals};
pub use inspect::*;
pub use key::*;
pub use record::*;
pub use sort_order::*;
pub use value::*;
