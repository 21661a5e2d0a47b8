//! Recognition engine implementations
//!
//! Engines are conditionally compiled based on feature flags. Without any
//! engine feature the library still builds; callers must then supply their
//! own [`RecognitionEngine`](crate::engine::RecognitionEngine).

#[cfg(feature = "engine-tesseract")]
pub mod tesseract;

use crate::config::EngineConfig;
use crate::engine::RecognitionEngine;
use crate::error::OcrError;

/// Build the default recognition engine for this build's feature set
#[cfg(feature = "engine-tesseract")]
pub fn default_engine(config: &EngineConfig) -> Result<Box<dyn RecognitionEngine>, OcrError> {
    tracing::info!("Initializing tesseract engine...");
    Ok(Box::new(tesseract::TesseractEngine::new(config)?))
}

/// Build the default recognition engine for this build's feature set
#[cfg(not(feature = "engine-tesseract"))]
pub fn default_engine(_config: &EngineConfig) -> Result<Box<dyn RecognitionEngine>, OcrError> {
    Err(OcrError::Initialization(
        "no recognition engine available, build with --features engine-tesseract".to_string(),
    ))
}
