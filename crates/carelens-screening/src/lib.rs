//! carelens-screening
//!
//! The self-administered cognitive-decline screening questionnaire: the
//! fixed question set, the scoring engine, and the per-tier guidance
//! bundles. Pure data and arithmetic — no I/O.

pub mod error;
pub mod guidance;
pub mod questionnaire;
pub mod scoring;
