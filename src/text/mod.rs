//! Text enhancement for raw recognition output
//!
//! Deterministic normalization followed by a pluggable spelling-correction
//! pass. Enhancement never fails outward: internal failures are logged and
//! the pre-transformation text is returned instead.

pub mod normalize;
pub mod spelling;

pub use normalize::normalize;
pub use spelling::{correct_spelling, AcceptAll, Dictionary, DictionaryError, Lookup};

/// Clean up raw recognition output
///
/// Empty or all-whitespace input returns an empty string without running the
/// pipeline. Normalization is deterministic; spelling correction falls back
/// to the normalized text if the dictionary fails.
pub fn enhance(text: &str, dictionary: &dyn Dictionary) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let normalized = normalize(text);
    let corrected = correct_spelling(&normalized, dictionary);

    tracing::debug!(
        "Text enhanced: {} chars to {} chars",
        text.len(),
        corrected.len()
    );
    corrected
}
