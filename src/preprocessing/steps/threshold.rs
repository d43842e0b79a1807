use crate::error::OcrError;
use image::{DynamicImage, GrayImage, Luma};

/// Pixels strictly brighter than this become white, everything else black
pub const DEFAULT_THRESHOLD: u8 = 150;

/// Hard, non-adaptive binarization
pub fn apply(image: DynamicImage, threshold: u8) -> Result<DynamicImage, OcrError> {
    let gray = image.into_luma8();
    let binarized = GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        if gray.get_pixel(x, y).0[0] > threshold {
            Luma([255u8])
        } else {
            Luma([0u8])
        }
    });
    Ok(DynamicImage::ImageLuma8(binarized))
}
