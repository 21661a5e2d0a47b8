use crate::error::OcrError;
use image::GrayImage;
use serde::Serialize;
use std::time::Instant;

use super::steps;

/// Timing information for a single preprocessing step
#[derive(Debug, Clone, Serialize)]
pub struct StepTiming {
    pub name: String,
    pub time_ms: u64,
}

/// Result of preprocessing including timing stats
#[derive(Debug, Clone, Serialize)]
pub struct PreprocessResult {
    /// Binarized bitmap ready for recognition (not serialized)
    #[serde(skip)]
    pub bitmap: GrayImage,
    /// Total preprocessing time in milliseconds
    pub total_time_ms: u64,
    /// Individual step timings
    pub steps: Vec<StepTiming>,
}

/// Fixed preprocessing pipeline
///
/// Decode, grayscale, blur, adaptive threshold, morphological opening, then
/// one extra dilation to reconnect stroke fragments. The order is fixed:
/// blurring must precede thresholding so sensor noise does not binarize into
/// speckle, and opening must precede dilation so noise is stripped before
/// strokes are thickened.
pub struct Pipeline;

impl Pipeline {
    pub fn new() -> Self {
        Self
    }

    /// Decode the image bytes and run every step, producing a bitmap with
    /// only 0/255 values and the same dimensions as the input.
    pub fn process(&self, image_bytes: &[u8]) -> Result<PreprocessResult, OcrError> {
        let start = Instant::now();
        let mut timings = Vec::new();

        let decoded = image::load_from_memory(image_bytes)?;

        let img = self.run_step("grayscale", decoded, &mut timings, steps::grayscale::apply)?;
        let img = self.run_step("blur", img, &mut timings, steps::blur::apply)?;
        let img = self.run_step("threshold", img, &mut timings, steps::threshold::apply)?;
        let img = self.run_step("open", img, &mut timings, steps::morphology::open)?;
        let img = self.run_step("dilate", img, &mut timings, steps::morphology::dilate)?;

        let total_time_ms = start.elapsed().as_millis() as u64;
        tracing::debug!(
            "Preprocessing completed in {}ms for {}x{} image",
            total_time_ms,
            img.width(),
            img.height()
        );

        Ok(PreprocessResult {
            bitmap: img,
            total_time_ms,
            steps: timings,
        })
    }

    fn run_step<I, O, F>(
        &self,
        name: &'static str,
        img: I,
        timings: &mut Vec<StepTiming>,
        step_fn: F,
    ) -> Result<O, OcrError>
    where
        F: FnOnce(I) -> Result<O, OcrError>,
    {
        let step_start = Instant::now();
        let result = step_fn(img)?;
        timings.push(StepTiming {
            name: name.to_string(),
            time_ms: step_start.elapsed().as_millis() as u64,
        });
        Ok(result)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
