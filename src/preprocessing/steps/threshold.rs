use crate::error::OcrError;
use image::{GrayImage, Luma};

/// Adaptive threshold parameters
const WINDOW_SIZE: u32 = 21;
const OFFSET: f32 = 15.0;

/// Apply Gaussian-weighted adaptive thresholding with inverted output
///
/// For each pixel the threshold is the Gaussian-weighted mean of its
/// surrounding window minus a constant offset. Pixels at or below the
/// threshold become foreground (255), the rest background (0). Adaptive
/// (vs. global) thresholding handles the uneven lighting typical of
/// photographed handwriting.
pub fn apply(image: GrayImage) -> Result<GrayImage, OcrError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(OcrError::Preprocess {
            step: "threshold",
            reason: "image has zero area".to_string(),
        });
    }

    let weights = gaussian_weights(WINDOW_SIZE);
    let means = local_weighted_mean(&image, &weights);
    let binarized = GrayImage::from_fn(width, height, |x, y| {
        let mean = means[(y * width + x) as usize];
        let pixel = image.get_pixel(x, y).0[0] as f32;
        if pixel <= mean - OFFSET {
            Luma([255u8])
        } else {
            Luma([0u8])
        }
    });

    Ok(binarized)
}

/// Normalized 1-D Gaussian weights for an odd window, sigma derived from the
/// window size (0.3 * ((window - 1) * 0.5 - 1) + 0.8, i.e. 3.5 for 21)
fn gaussian_weights(window: u32) -> Vec<f32> {
    let sigma = 0.3 * ((window as f32 - 1.0) * 0.5 - 1.0) + 0.8;
    let half = (window / 2) as i32;

    let mut weights: Vec<f32> = (-half..=half)
        .map(|i| (-((i * i) as f32) / (2.0 * sigma * sigma)).exp())
        .collect();

    let sum: f32 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }
    weights
}

/// Gaussian-weighted window mean per pixel, computed as two separable
/// passes with replicated borders
fn local_weighted_mean(img: &GrayImage, weights: &[f32]) -> Vec<f32> {
    let (width, height) = img.dimensions();
    let half = (weights.len() / 2) as i32;

    let mut horizontal = vec![0.0f32; (width * height) as usize];
    for y in 0..height {
        for x in 0..width {
            let mut acc = 0.0;
            for (k, w) in weights.iter().enumerate() {
                let sx = (x as i32 + k as i32 - half).clamp(0, width as i32 - 1) as u32;
                acc += w * img.get_pixel(sx, y).0[0] as f32;
            }
            horizontal[(y * width + x) as usize] = acc;
        }
    }

    let mut means = vec![0.0f32; (width * height) as usize];
    for y in 0..height {
        for x in 0..width {
            let mut acc = 0.0;
            for (k, w) in weights.iter().enumerate() {
                let sy = (y as i32 + k as i32 - half).clamp(0, height as i32 - 1) as u32;
                acc += w * horizontal[(sy * width + x) as usize];
            }
            means[(y * width + x) as usize] = acc;
        }
    }

    means
}
