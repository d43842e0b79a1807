//! Image preprocessing for digit OCR
//!
//! A fixed pipeline: grayscale, autocontrast, 2x Lanczos upscale and a hard
//! binarization threshold. Nothing adapts to the image content.

pub mod pipeline;
pub mod steps;

pub use pipeline::{Pipeline, PreprocessedImage, PreprocessingResult, StepTiming};
pub use steps::resize::SCALE_FACTOR;
pub use steps::threshold::DEFAULT_THRESHOLD;
