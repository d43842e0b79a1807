//! The digit extraction pipeline: image in, numeric tokens out

use crate::config::Config;
use crate::digits::{self, NumericToken};
use crate::engine::{OcrEngine, RecognitionOptions};
use crate::error::OcrError;
use crate::image_source::{ImageSource, RawImage};
use crate::preprocessing::{Pipeline, StepTiming};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// What a completed extraction found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "tokens", rename_all = "snake_case")]
pub enum DigitOutcome {
    /// At least one token, in engine emission order
    Found(Vec<NumericToken>),
    /// The engine ran but its output held no digits
    NoDigitsFound,
}

/// Result of one extraction
#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    pub outcome: DigitOutcome,
    pub raw_text: String,
    pub engine: &'static str,
    pub preprocessing_time_ms: u64,
    pub ocr_time_ms: u64,
    pub steps: Vec<StepTiming>,
}

impl Extraction {
    /// Extracted tokens; empty when no digits were found
    pub fn tokens(&self) -> &[NumericToken] {
        match &self.outcome {
            DigitOutcome::Found(tokens) => tokens,
            DigitOutcome::NoDigitsFound => &[],
        }
    }

    /// Tokens joined by single spaces
    pub fn text(&self) -> String {
        digits::join_tokens(self.tokens())
    }

    pub fn has_digits(&self) -> bool {
        matches!(self.outcome, DigitOutcome::Found(_))
    }
}

/// Runs preprocessing, OCR and token extraction with an injected engine
pub struct DigitExtractor {
    engine: Arc<dyn OcrEngine>,
    pipeline: Pipeline,
    options: RecognitionOptions,
}

impl DigitExtractor {
    pub fn new(engine: Arc<dyn OcrEngine>, config: &Config) -> Self {
        Self::with_options(
            engine,
            Pipeline::new(config.threshold),
            RecognitionOptions::digits(config.language.clone()),
        )
    }

    pub fn with_options(
        engine: Arc<dyn OcrEngine>,
        pipeline: Pipeline,
        options: RecognitionOptions,
    ) -> Self {
        Self {
            engine,
            pipeline,
            options,
        }
    }

    pub fn engine_name(&self) -> &'static str {
        self.engine.name()
    }

    /// Pull an image from `source` and extract its digits.
    ///
    /// An empty source yields [`OcrError::NoImageProvided`] without touching
    /// the engine.
    pub fn extract_digits(&self, source: &mut dyn ImageSource) -> Result<Extraction, OcrError> {
        let image = source.get_image()?.ok_or(OcrError::NoImageProvided)?;
        self.extract_from_image(image)
    }

    /// Extract digits from an image the caller already holds
    pub fn extract_from_image(&self, image: RawImage) -> Result<Extraction, OcrError> {
        let preprocessed = self.pipeline.process(&image)?;
        drop(image);

        tracing::debug!(
            width = preprocessed.image.width(),
            height = preprocessed.image.height(),
            time_ms = preprocessed.total_time_ms,
            "Preprocessed image"
        );

        let ocr_start = Instant::now();
        let raw_text = self.engine.recognize(&preprocessed.image, &self.options)?;
        let ocr_time_ms = ocr_start.elapsed().as_millis() as u64;

        tracing::debug!(engine = self.engine.name(), raw_text = %raw_text.trim(), "OCR output");

        let tokens = digits::extract_tokens(&raw_text);
        let outcome = if tokens.is_empty() {
            DigitOutcome::NoDigitsFound
        } else {
            DigitOutcome::Found(tokens)
        };

        Ok(Extraction {
            outcome,
            raw_text,
            engine: self.engine.name(),
            preprocessing_time_ms: preprocessed.total_time_ms,
            ocr_time_ms,
            steps: preprocessed.steps,
        })
    }
}
