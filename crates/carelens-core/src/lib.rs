//! carelens-core
//!
//! Pure domain types and storage key conventions. No I/O — this is the
//! shared vocabulary of the CareLens system.

pub mod keys;
pub mod models;
