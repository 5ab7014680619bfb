//! Path resolution over [`Value`](crate::common::Value) items.
//!
//! A path is a separator delimited string (`"user.address.city"`). Plain
//! resolution walks one segment at a time and yields `None` on a miss.
//! Paths containing the wildcard segment (`"items.*.price"`) are only
//! meaningful to [`pluck_wildcard`], which fans out across every element
//! at that depth and selects nodes at exactly the path's depth.

mod field_path;
mod resolver;
mod wildcard;

pub use field_path::*;
pub use resolver::*;
pub use wildcard::*;
