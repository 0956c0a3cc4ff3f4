//! carelens-report
//!
//! Screening report assembly: opaque token generation, Tera rendering of
//! the narrative payload, and the write-once persistence-sink seam.

pub mod error;
pub mod render;
pub mod sink;
pub mod token;
