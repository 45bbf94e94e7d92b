//! Generic helpers.
//!
//! - `nanoid`: short random identifiers (used to stamp events)
//! - `coalesce`: fallback and first-non-empty selection
//! - `slices`: map/filter/reduce/unique/any/all over slices
//! - `assert`: panic-on-condition checks

pub mod assert;
pub mod coalesce;
pub mod nanoid;
pub mod slices;

pub use nanoid::Id;
