use crate::config::EngineConfig;
use crate::engine::RecognitionEngine;
use crate::engines;
use crate::error::OcrError;
use crate::preprocessing::Pipeline;
use crate::text::{self, AcceptAll, Dictionary};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

/// Final result of one recognition request
#[derive(Debug, Clone, Serialize)]
pub struct OcrOutput {
    /// Recognition output after stripping non-printable characters
    pub original_text: String,
    /// Normalized and spell-corrected text
    pub enhanced_text: String,
    /// Confidence score in 0.0-1.0, if the engine reports one
    pub confidence: Option<f32>,
    pub processing_time_ms: u64,
}

/// Runs the full image-to-text sequence: preprocessing, recognition,
/// text enhancement
pub struct OcrProcessor {
    engine: Box<dyn RecognitionEngine>,
    dictionary: Box<dyn Dictionary>,
    config: EngineConfig,
    pipeline: Pipeline,
}

impl OcrProcessor {
    /// Create a processor with the default engine for this build
    pub fn new(config: EngineConfig) -> Result<Self, OcrError> {
        let engine = engines::default_engine(&config)?;
        Ok(Self::with_engine(engine, config))
    }

    /// Create a processor around an explicit engine
    pub fn with_engine(engine: Box<dyn RecognitionEngine>, config: EngineConfig) -> Self {
        Self {
            engine,
            dictionary: Box::new(AcceptAll),
            config,
            pipeline: Pipeline::new(),
        }
    }

    /// Swap in a real dictionary for the spelling pass
    pub fn with_dictionary(mut self, dictionary: Box<dyn Dictionary>) -> Self {
        self.dictionary = dictionary;
        self
    }

    /// Process encoded image bytes through the full pipeline
    pub fn process(&self, image_bytes: &[u8]) -> Result<OcrOutput, OcrError> {
        let start = Instant::now();

        let preprocessed = self.pipeline.process(image_bytes)?;
        tracing::debug!(
            "Preprocessing took {}ms across {} steps",
            preprocessed.total_time_ms,
            preprocessed.steps.len()
        );

        let recognition = self.engine.recognize(&preprocessed.bitmap, &self.config)?;
        let original_text = strip_nonprintable(&recognition.text).trim().to_string();
        tracing::debug!(
            "Engine '{}' extracted {} characters",
            self.engine.name(),
            original_text.len()
        );

        let enhanced_text = text::enhance(&original_text, self.dictionary.as_ref());

        Ok(OcrOutput {
            original_text,
            enhanced_text,
            confidence: recognition.confidence,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Read an image file and process it
    pub fn process_path(&self, path: &Path) -> Result<OcrOutput, OcrError> {
        let bytes = std::fs::read(path)?;
        self.process(&bytes)
    }
}

/// Remove non-printable characters from engine output
///
/// Control characters include the newlines Tesseract inserts between lines;
/// they are dropped here and whitespace handling is left to normalization.
fn strip_nonprintable(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_nonprintable_drops_control_characters() {
        assert_eq!(strip_nonprintable("ab\x00c\x07d"), "abcd");
        assert_eq!(strip_nonprintable("line1\nline2\r\n"), "line1line2");
    }

    #[test]
    fn test_strip_nonprintable_keeps_spaces() {
        assert_eq!(strip_nonprintable("a b c"), "a b c");
    }
}
