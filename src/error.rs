use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("No image available from the image source")]
    NoImageProvided,

    #[error("OCR engine not available: {0}")]
    EngineNotAvailable(String),

    #[error("OCR engine failed: {0}")]
    EngineFailure(String),

    #[error("Preprocessing failed: {0}")]
    PreprocessingError(String),

    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    #[error("Failed to load image: {0}")]
    ImageLoad(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl OcrError {
    /// Process exit code reported by the one-shot CLI for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            OcrError::NoImageProvided => 2,
            OcrError::EngineNotAvailable(_) => 3,
            _ => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_class() {
        assert_eq!(OcrError::NoImageProvided.exit_code(), 2);
        assert_eq!(OcrError::EngineNotAvailable("x".into()).exit_code(), 3);
        assert_eq!(OcrError::EngineFailure("x".into()).exit_code(), 4);
        assert_eq!(OcrError::ClipboardError("x".into()).exit_code(), 4);
        assert_eq!(OcrError::InvalidConfig("x".into()).exit_code(), 4);
        assert_eq!(OcrError::ImageLoad("x".into()).exit_code(), 4);
    }
}
