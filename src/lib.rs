//! Digit-only OCR for clipboard images
//!
//! An image is pulled from an [`image_source::ImageSource`], run through a
//! fixed [`preprocessing::Pipeline`], recognized by an
//! [`engine::OcrEngine`] restricted to `0-9`, and reduced to the digit runs
//! found in the engine output.

pub mod cli;
pub mod config;
pub mod digits;
pub mod engine;
pub mod engines;
pub mod error;
pub mod extractor;
pub mod image_source;
pub mod interactive;
pub mod preprocessing;
pub mod session;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use digits::NumericToken;
pub use error::OcrError;
pub use extractor::{DigitExtractor, DigitOutcome, Extraction};
