use crate::error::OcrError;
use crate::preprocessing::PreprocessedImage;

/// Characters the engine may emit when reading numbers
pub const DIGIT_WHITELIST: &str = "0123456789";

/// Tesseract page segmentation modes used by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSegMode {
    /// Fully automatic page segmentation (psm 3)
    Auto,
    /// A single uniform block of text (psm 6)
    #[default]
    SingleBlock,
    /// A single text line (psm 7)
    SingleLine,
}

impl PageSegMode {
    pub fn as_psm(&self) -> u8 {
        match self {
            Self::Auto => 3,
            Self::SingleBlock => 6,
            Self::SingleLine => 7,
        }
    }
}

/// Tesseract OCR engine modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineMode {
    /// LSTM network only (oem 1)
    LstmOnly,
    /// Whatever the installed traineddata supports (oem 3)
    #[default]
    Default,
}

impl EngineMode {
    pub fn as_oem(&self) -> u8 {
        match self {
            Self::LstmOnly => 1,
            Self::Default => 3,
        }
    }
}

/// Parameters for a single recognition call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionOptions {
    pub language: String,
    /// Allowed output characters
    pub charset: String,
    pub page_seg_mode: PageSegMode,
    pub engine_mode: EngineMode,
}

impl RecognitionOptions {
    /// Digit-only recognition of a single text block
    pub fn digits(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            charset: DIGIT_WHITELIST.to_string(),
            page_seg_mode: PageSegMode::SingleBlock,
            engine_mode: EngineMode::Default,
        }
    }
}

impl Default for RecognitionOptions {
    fn default() -> Self {
        Self::digits("eng")
    }
}

/// Trait that all OCR engines must implement
pub trait OcrEngine: Send + Sync {
    /// Returns the engine identifier (e.g., "tesseract", "leptess")
    fn name(&self) -> &'static str;

    /// Returns a human-readable description of the engine
    fn description(&self) -> &'static str;

    /// Recognize text in a preprocessed image, returning the raw engine output.
    ///
    /// Fails with [`OcrError::EngineNotAvailable`] when the backend cannot be
    /// located and [`OcrError::EngineFailure`] for anything else.
    fn recognize(
        &self,
        image: &PreprocessedImage,
        options: &RecognitionOptions,
    ) -> Result<String, OcrError>;
}
