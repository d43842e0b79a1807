//! Leptess/Tesseract engine implementation
//!
//! Statically linked libtesseract via the tesseract-static crate, so no
//! Tesseract install is needed. Tessdata comes from the configured directory
//! or is downloaded once into the user cache.

use crate::config::Config;
use crate::engine::{OcrEngine, RecognitionOptions};
use crate::error::OcrError;
use crate::preprocessing::PreprocessedImage;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tesseract_static::tesseract::Tesseract;

/// Tesseract OCR Engine
pub struct LeptessEngine {
    /// Path to tessdata directory
    tessdata_path: String,
}

impl LeptessEngine {
    /// Create the engine, failing with `EngineNotAvailable` if Tesseract
    /// cannot be initialized for the configured language
    pub fn new(config: &Config) -> Result<Self, OcrError> {
        let tessdata_path = match &config.tessdata_path {
            Some(path) => path.clone(),
            None => ensure_tessdata_available(&config.language)?,
        };

        // Validate that tessdata is accessible by doing a test initialization
        let test_tess = Tesseract::new(Some(&tessdata_path), Some(&config.language)).map_err(|e| {
            OcrError::EngineNotAvailable(format!("Failed to initialize Tesseract: {}", e))
        })?;
        drop(test_tess);

        tracing::info!(
            "Leptess engine initialized (tessdata: {}, language: {})",
            tessdata_path,
            config.language
        );

        Ok(Self { tessdata_path })
    }
}

impl OcrEngine for LeptessEngine {
    fn name(&self) -> &'static str {
        "leptess"
    }

    fn description(&self) -> &'static str {
        "Statically linked Tesseract library"
    }

    fn recognize(
        &self,
        image: &PreprocessedImage,
        options: &RecognitionOptions,
    ) -> Result<String, OcrError> {
        // BMP is always supported by leptonica
        let bmp = image.to_bmp()?;

        tracing::debug!(
            "Processing image: {}x{}, BMP size: {} bytes",
            image.width(),
            image.height(),
            bmp.len()
        );

        // Tesseract handles are not Sync; one per call
        let mut tess = Tesseract::new(Some(&self.tessdata_path), Some(&options.language))
            .map_err(|e| OcrError::EngineNotAvailable(format!("Failed to create Tesseract: {}", e)))?;

        tess = tess
            .set_variable("tessedit_char_whitelist", &options.charset)
            .map_err(|e| OcrError::EngineFailure(format!("Failed to set whitelist: {}", e)))?;
        tess = tess
            .set_variable(
                "tessedit_pageseg_mode",
                &options.page_seg_mode.as_psm().to_string(),
            )
            .map_err(|e| OcrError::EngineFailure(format!("Failed to set page mode: {}", e)))?;

        tess = tess.set_image_from_mem(&bmp).map_err(|e| {
            OcrError::EngineFailure(format!(
                "Failed to set image ({}x{}): {}",
                image.width(),
                image.height(),
                e
            ))
        })?;

        tess = tess
            .recognize()
            .map_err(|e| OcrError::EngineFailure(format!("Failed to recognize text: {}", e)))?;

        tess.get_text()
            .map_err(|e| OcrError::EngineFailure(format!("Failed to get text: {}", e)))
    }
}

// ============================================================================
// Tessdata download helpers
// ============================================================================

/// Ensure tessdata is available, downloading if needed
fn ensure_tessdata_available(language: &str) -> Result<String, OcrError> {
    let cache_dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("clipdigits")
        .join("tessdata");

    std::fs::create_dir_all(&cache_dir).map_err(|e| {
        OcrError::EngineNotAvailable(format!("Failed to create tessdata directory: {}", e))
    })?;

    let traineddata_path = cache_dir.join(format!("{}.traineddata", language));

    if !traineddata_path.exists() {
        tracing::info!(
            "Downloading tessdata for '{}' (this may take a moment)...",
            language
        );
        download_file(&tessdata_url(language), &traineddata_path)?;
        tracing::info!("Downloaded tessdata to {:?}", traineddata_path);
    } else {
        tracing::info!("Using cached tessdata from {:?}", cache_dir);
    }

    // Tesseract expects the directory, not the file
    cache_dir
        .to_str()
        .map(|s| s.to_string())
        .ok_or_else(|| OcrError::EngineNotAvailable("Invalid tessdata path".to_string()))
}

/// tessdata_fast: small models, fine for digits
fn tessdata_url(language: &str) -> String {
    format!(
        "https://github.com/tesseract-ocr/tessdata_fast/raw/main/{}.traineddata",
        language
    )
}

fn download_file(url: &str, path: &Path) -> Result<(), OcrError> {
    let response = ureq::get(url).call().map_err(|e| {
        OcrError::EngineNotAvailable(format!("Failed to download tessdata: {}", e))
    })?;

    let buffer = response.into_body().read_to_vec().map_err(|e| {
        OcrError::EngineNotAvailable(format!("Failed to read tessdata response: {}", e))
    })?;

    // Write to a sibling file first so an interrupted download is not cached
    let partial = path.with_extension("partial");
    let mut file = File::create(&partial).map_err(|e| {
        OcrError::EngineNotAvailable(format!("Failed to create tessdata file: {}", e))
    })?;
    file.write_all(&buffer).map_err(|e| {
        OcrError::EngineNotAvailable(format!("Failed to write tessdata file: {}", e))
    })?;
    std::fs::rename(&partial, path).map_err(|e| {
        OcrError::EngineNotAvailable(format!("Failed to move tessdata into place: {}", e))
    })?;

    Ok(())
}
