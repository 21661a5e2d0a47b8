use crate::error::OcrError;
use image::{DynamicImage, GrayImage};

/// Collapse color channels to single-channel luminance
/// This is the foundation for the rest of the pipeline
pub fn apply(image: DynamicImage) -> Result<GrayImage, OcrError> {
    Ok(image.to_luma8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_grayscale_converts_color() {
        let mut img = RgbImage::new(10, 10);
        img.put_pixel(0, 0, Rgb([255, 0, 0])); // Red
        img.put_pixel(1, 0, Rgb([0, 255, 0])); // Green
        img.put_pixel(2, 0, Rgb([0, 0, 255])); // Blue

        let gray = apply(DynamicImage::ImageRgb8(img)).unwrap();

        // All pixels should have some value (within tolerance)
        assert!(gray.get_pixel(0, 0).0[0] > 0);
        assert!(gray.get_pixel(1, 0).0[0] > 0);
        assert!(gray.get_pixel(2, 0).0[0] > 0);
    }

    #[test]
    fn test_grayscale_preserves_dimensions() {
        let img = RgbImage::new(100, 50);
        let gray = apply(DynamicImage::ImageRgb8(img)).unwrap();
        assert_eq!(gray.width(), 100);
        assert_eq!(gray.height(), 50);
    }

    #[test]
    fn test_grayscale_passes_through_luma_input() {
        let img = GrayImage::from_pixel(8, 8, image::Luma([77]));
        let gray = apply(DynamicImage::ImageLuma8(img)).unwrap();
        assert_eq!(gray.get_pixel(4, 4).0[0], 77);
    }
}
