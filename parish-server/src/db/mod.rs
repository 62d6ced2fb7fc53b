//! Database access layer
//!
//! Every member mutation routes through [`members`] and, on success, the
//! caller triggers [`counts::recompute`] so ministry/department counts always
//! reflect the current member table.

pub mod categories;
pub mod contributions;
pub mod counts;
pub mod expenses;
pub mod members;
pub mod normalize;
pub mod users;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;
