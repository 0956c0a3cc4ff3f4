//! carelens-directory
//!
//! The directory ranking and comparison engine: typed parsing of raw
//! provider rows at the data-source boundary, national medians per metric,
//! median-relative performance banding, and the pure
//! filter/sort/paginate query layer.
//!
//! The loaded record collection is immutable for the session; every
//! derived view is a fresh computation over it.

pub mod banding;
pub mod compare;
pub mod error;
pub mod load;
pub mod query;
pub mod stats;
