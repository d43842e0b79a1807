use crate::error::OcrError;
use image::{imageops::FilterType, DynamicImage, GenericImageView};

/// Fixed upscale factor applied in both axes
pub const SCALE_FACTOR: u32 = 2;

/// Upscale by exactly `SCALE_FACTOR` with Lanczos3 resampling
pub fn apply(image: DynamicImage) -> Result<DynamicImage, OcrError> {
    let (width, height) = image.dimensions();

    let new_width = width.checked_mul(SCALE_FACTOR);
    let new_height = height.checked_mul(SCALE_FACTOR);
    let (Some(new_width), Some(new_height)) = (new_width, new_height) else {
        return Err(OcrError::PreprocessingError(format!(
            "Image too large to upscale: {}x{}",
            width, height
        )));
    };

    // resize_exact: the aspect-preserving resize may round one axis
    Ok(image.resize_exact(new_width, new_height, FilterType::Lanczos3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn test_resize_doubles_both_axes() {
        for (w, h) in [(1, 1), (3, 7), (100, 40), (641, 359)] {
            let img = GrayImage::new(w, h);
            let result = apply(DynamicImage::ImageLuma8(img)).unwrap();
            assert_eq!(result.dimensions(), (w * 2, h * 2));
        }
    }

    #[test]
    fn test_resize_keeps_flat_regions_flat() {
        let img = GrayImage::from_pixel(8, 8, Luma([255]));
        let result = apply(DynamicImage::ImageLuma8(img)).unwrap().to_luma8();
        assert!(result.pixels().all(|p| p.0[0] >= 250));
    }
}
