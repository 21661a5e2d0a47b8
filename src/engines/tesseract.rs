//! Tesseract engine implementation
//!
//! Uses tesseract-static crate for static linking (no system dependencies).
//! Expects tessdata (training data) to be present; the directory is taken
//! from the engine configuration or the TESSDATA_PREFIX env var.

use crate::config::{EngineConfig, EngineMode};
use crate::engine::{Recognition, RecognitionEngine};
use crate::error::OcrError;
use image::GrayImage;
use tesseract_static::tesseract::{OcrEngineMode, Tesseract};

/// Tesseract recognition engine
pub struct TesseractEngine;

impl TesseractEngine {
    /// Create a new Tesseract-based recognition engine
    ///
    /// Validates that tessdata is accessible by doing a test initialization.
    pub fn new(config: &EngineConfig) -> Result<Self, OcrError> {
        let test_tess = Tesseract::new(config.tessdata_path.as_deref(), Some(&config.language))
            .map_err(|e| {
                OcrError::Initialization(format!("failed to initialize Tesseract: {}", e))
            })?;
        drop(test_tess);

        tracing::info!(
            "Tesseract engine initialized (tessdata: {:?}, language: {})",
            config.tessdata_path,
            config.language
        );

        Ok(Self)
    }
}

impl RecognitionEngine for TesseractEngine {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn recognize(
        &self,
        bitmap: &GrayImage,
        config: &EngineConfig,
    ) -> Result<Recognition, OcrError> {
        // Convert to RGB and encode as BMP in memory (BMP is always
        // supported by leptonica).
        let rgb = image::DynamicImage::ImageLuma8(bitmap.clone()).to_rgb8();
        let mut bmp_data = Vec::new();
        {
            let mut cursor = std::io::Cursor::new(&mut bmp_data);
            rgb.write_to(&mut cursor, image::ImageFormat::Bmp)
                .map_err(|e| OcrError::Recognition(format!("failed to convert to BMP: {}", e)))?;
        }

        tracing::debug!(
            "Recognizing bitmap: {}x{}, BMP size: {} bytes",
            bitmap.width(),
            bitmap.height(),
            bmp_data.len()
        );

        let mut tess = Tesseract::new_with_oem(
            config.tessdata_path.as_deref(),
            Some(&config.language),
            oem(config.engine_mode),
        )
        .map_err(|e| OcrError::Recognition(format!("failed to create Tesseract: {}", e)))?;

        tess = tess
            .set_variable(
                "tessedit_pageseg_mode",
                &config.page_seg_mode.value().to_string(),
            )
            .map_err(|e| {
                OcrError::Recognition(format!("failed to set page segmentation mode: {}", e))
            })?;

        tess = tess
            .set_image_from_mem(&bmp_data)
            .map_err(|e| OcrError::Recognition(format!("failed to set image: {}", e)))?;

        tess = tess
            .recognize()
            .map_err(|e| OcrError::Recognition(format!("failed to recognize text: {}", e)))?;

        let text = tess
            .get_text()
            .map_err(|e| OcrError::Recognition(format!("failed to get text: {}", e)))?;

        // mean_text_conf is on a 0-100 scale
        let confidence = tess.mean_text_conf() as f32 / 100.0;

        Ok(Recognition {
            text,
            confidence: Some(confidence),
        })
    }
}

fn oem(mode: EngineMode) -> OcrEngineMode {
    match mode {
        EngineMode::Legacy => OcrEngineMode::TesseractOnly,
        EngineMode::LstmOnly => OcrEngineMode::LstmOnly,
        EngineMode::Combined => OcrEngineMode::TesseractLstmCombined,
        EngineMode::Default => OcrEngineMode::Default,
    }
}
