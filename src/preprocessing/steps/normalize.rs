use crate::error::OcrError;
use image::{DynamicImage, GrayImage, Luma};

/// Linear autocontrast: the darkest pixel maps to 0 and the lightest to 255
pub fn apply(image: DynamicImage) -> Result<DynamicImage, OcrError> {
    let gray = image.into_luma8();
    let (min_val, max_val) = find_min_max(&gray);

    // Avoid division by zero
    if max_val <= min_val {
        return Ok(DynamicImage::ImageLuma8(gray));
    }

    let range = (max_val - min_val) as u32;
    let mut lut = [0u8; 256];
    for (value, slot) in lut.iter_mut().enumerate().skip(min_val as usize) {
        *slot = ((value as u32 - min_val as u32) * 255 / range).min(255) as u8;
    }

    let normalized = GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        Luma([lut[gray.get_pixel(x, y).0[0] as usize]])
    });

    Ok(DynamicImage::ImageLuma8(normalized))
}

fn find_min_max(img: &GrayImage) -> (u8, u8) {
    let mut min = 255u8;
    let mut max = 0u8;

    for pixel in img.pixels() {
        let val = pixel.0[0];
        min = min.min(val);
        max = max.max(val);
    }

    (min, max)
}
