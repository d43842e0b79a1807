use crate::error::OcrError;
use crate::image_source::RawImage;
use image::{DynamicImage, GrayImage};
use serde::Serialize;
use std::io::Cursor;
use std::time::Instant;

use super::steps;

/// Binarized, upscaled image ready for the OCR engine.
///
/// Only [`Pipeline::process`] produces one, so every pixel is 0 or 255 and
/// the dimensions are exactly `SCALE_FACTOR` times the source image.
#[derive(Debug, Clone)]
pub struct PreprocessedImage {
    image: GrayImage,
}

impl PreprocessedImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn as_gray(&self) -> &GrayImage {
        &self.image
    }

    /// Encode as PNG, the format handed to Tesseract
    pub fn to_png(&self) -> Result<Vec<u8>, OcrError> {
        let mut png = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
            .map_err(|e| OcrError::PreprocessingError(format!("Failed to encode PNG: {}", e)))?;
        Ok(png)
    }

    /// Encode as 24-bit BMP for in-memory handoff to leptonica
    pub fn to_bmp(&self) -> Result<Vec<u8>, OcrError> {
        let rgb = DynamicImage::ImageLuma8(self.image.clone()).to_rgb8();
        let mut bmp = Vec::new();
        rgb.write_to(&mut Cursor::new(&mut bmp), image::ImageFormat::Bmp)
            .map_err(|e| OcrError::PreprocessingError(format!("Failed to encode BMP: {}", e)))?;
        Ok(bmp)
    }
}

/// Timing information for a single preprocessing step
#[derive(Debug, Clone, Serialize)]
pub struct StepTiming {
    pub name: String,
    pub time_ms: u64,
}

/// Result of preprocessing including timing stats
#[derive(Debug, Clone)]
pub struct PreprocessingResult {
    pub image: PreprocessedImage,
    /// Total preprocessing time in milliseconds
    pub total_time_ms: u64,
    /// Individual step timings
    pub steps: Vec<StepTiming>,
}

/// The fixed preprocessing pipeline: grayscale, normalize, resize, threshold
#[derive(Debug, Clone, Copy)]
pub struct Pipeline {
    threshold: u8,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(steps::threshold::DEFAULT_THRESHOLD)
    }
}

impl Pipeline {
    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Process an image through every step in order
    pub fn process(&self, image: &RawImage) -> Result<PreprocessingResult, OcrError> {
        let start = Instant::now();
        let mut steps_timing = Vec::new();

        if image.width() == 0 || image.height() == 0 {
            return Err(OcrError::PreprocessingError(format!(
                "Empty image: {}x{}",
                image.width(),
                image.height()
            )));
        }

        let mut img = image.as_dynamic().clone();
        img = self.run_step("grayscale", img, &mut steps_timing, steps::grayscale::apply)?;
        img = self.run_step("normalize", img, &mut steps_timing, steps::normalize::apply)?;
        img = self.run_step("resize", img, &mut steps_timing, steps::resize::apply)?;
        let threshold = self.threshold;
        img = self.run_step("threshold", img, &mut steps_timing, |img| {
            steps::threshold::apply(img, threshold)
        })?;

        Ok(PreprocessingResult {
            image: PreprocessedImage {
                image: img.into_luma8(),
            },
            total_time_ms: start.elapsed().as_millis() as u64,
            steps: steps_timing,
        })
    }

    fn run_step<F>(
        &self,
        name: &str,
        img: DynamicImage,
        timings: &mut Vec<StepTiming>,
        step_fn: F,
    ) -> Result<DynamicImage, OcrError>
    where
        F: FnOnce(DynamicImage) -> Result<DynamicImage, OcrError>,
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
