//! carelens-narrative
//!
//! The narrative text-generation boundary. The remote service is opaque:
//! a freeform prompt goes out, plain text comes back. Neither engine
//! depends on this boundary for its own result, so an empty or failed
//! response degrades to the static tier recommendation instead of
//! propagating.

pub mod error;
pub mod prompt;

use tracing::warn;

use crate::error::NarrativeError;

/// A client for the remote text-generation service.
pub trait NarrativeGenerator {
    fn generate(&self, prompt: &str) -> Result<String, NarrativeError>;
}

/// Run the generator, falling back to static text when the boundary
/// fails or returns nothing.
pub fn narrative_or_fallback(
    generator: &dyn NarrativeGenerator,
    prompt: &str,
    fallback: &str,
) -> String {
    match generator.generate(prompt) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!("narrative generation returned empty text, using fallback");
            fallback.to_string()
        }
        Err(e) => {
            warn!(error = %e, "narrative generation failed, using fallback");
            fallback.to_string()
        }
    }
}
