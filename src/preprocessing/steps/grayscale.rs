use crate::error::OcrError;
use image::{DynamicImage, GrayImage, Luma};

/// Convert image to grayscale using ITU-R 601-2 luma weights
/// (L = R * 299/1000 + G * 587/1000 + B * 114/1000). Alpha is ignored.
pub fn apply(image: DynamicImage) -> Result<DynamicImage, OcrError> {
    if let DynamicImage::ImageLuma8(_) = image {
        return Ok(image);
    }

    let rgb = image.to_rgb8();
    let gray = GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        Luma([luma(r, g, b)])
    });

    Ok(DynamicImage::ImageLuma8(gray))
}

/// 16-bit fixed point weights, rounded
fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}
