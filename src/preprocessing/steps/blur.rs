use crate::error::OcrError;
use image::GrayImage;
use imageproc::filter::separable_filter;

/// Normalized 5-tap Gaussian kernel (binomial [1, 4, 6, 4, 1] / 16),
/// the standard 5x5 kernel at default spread when applied separably
const KERNEL: [f32; 5] = [
    1.0 / 16.0,
    4.0 / 16.0,
    6.0 / 16.0,
    4.0 / 16.0,
    1.0 / 16.0,
];

/// Apply a 5x5 Gaussian blur to suppress sensor/compression noise
/// before thresholding
pub fn apply(image: GrayImage) -> Result<GrayImage, OcrError> {
    Ok(separable_filter(&image, &KERNEL, &KERNEL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn test_blur_preserves_flat_regions() {
        let img = GrayImage::from_pixel(20, 20, Luma([128]));
        let result = apply(img).unwrap();

        // Kernel is normalized, so a flat image stays flat (within rounding)
        let center = result.get_pixel(10, 10).0[0];
        assert!((127..=129).contains(&center));
    }

    #[test]
    fn test_blur_spreads_isolated_spike() {
        let mut img = GrayImage::from_pixel(11, 11, Luma([0]));
        img.put_pixel(5, 5, Luma([255]));

        let result = apply(img).unwrap();

        // Energy leaks into neighbors and the spike itself is attenuated
        assert!(result.get_pixel(5, 5).0[0] < 255);
        assert!(result.get_pixel(4, 5).0[0] > 0);
        assert!(result.get_pixel(5, 4).0[0] > 0);
    }

    #[test]
    fn test_blur_preserves_dimensions() {
        let img = GrayImage::new(33, 17);
        let result = apply(img).unwrap();
        assert_eq!(result.dimensions(), (33, 17));
    }
}
