use crate::config::EngineConfig;
use crate::error::OcrError;
use image::GrayImage;

/// Raw recognition output, before any text cleanup
#[derive(Debug, Clone)]
pub struct Recognition {
    pub text: String,
    /// Confidence score in 0.0-1.0, if the engine reports one
    pub confidence: Option<f32>,
}

/// Trait that all recognition engines must implement
pub trait RecognitionEngine: Send + Sync {
    /// Returns the engine identifier (e.g., "tesseract")
    fn name(&self) -> &'static str;

    /// Recognize text in a preprocessed black/white bitmap
    fn recognize(
        &self,
        bitmap: &GrayImage,
        config: &EngineConfig,
    ) -> Result<Recognition, OcrError>;
}
