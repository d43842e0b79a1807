//! Test doubles shared by the unit tests

use crate::engine::{OcrEngine, RecognitionOptions};
use crate::error::OcrError;
use crate::image_source::{ImageSource, RawImage, TextSink};
use crate::preprocessing::PreprocessedImage;
use image::{DynamicImage, Rgb, RgbImage};
use std::sync::Mutex;

pub fn blank_image(width: u32, height: u32) -> RawImage {
    RawImage::from(DynamicImage::ImageRgb8(RgbImage::from_pixel(
        width,
        height,
        Rgb([240, 240, 240]),
    )))
}

/// What the engine saw on its last call
#[derive(Debug, Clone)]
pub struct SeenCall {
    pub dimensions: (u32, u32),
    pub binary: bool,
    pub options: RecognitionOptions,
}

enum Script {
    Text(String),
    Fail(fn() -> OcrError),
}

/// Engine returning canned text (or a canned error) and recording calls
pub struct ScriptedEngine {
    script: Script,
    calls: Mutex<Vec<SeenCall>>,
}

impl ScriptedEngine {
    pub fn returning(text: &str) -> Self {
        Self {
            script: Script::Text(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: fn() -> OcrError) -> Self {
        Self {
            script: Script::Fail(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<SeenCall> {
        self.calls.lock().unwrap().last().cloned()
    }
}

impl OcrEngine for ScriptedEngine {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn description(&self) -> &'static str {
        "Returns canned text"
    }

    fn recognize(
        &self,
        image: &PreprocessedImage,
        options: &RecognitionOptions,
    ) -> Result<String, OcrError> {
        self.calls.lock().unwrap().push(SeenCall {
            dimensions: (image.width(), image.height()),
            binary: image.as_gray().pixels().all(|p| p.0[0] == 0 || p.0[0] == 255),
            options: options.clone(),
        });
        match &self.script {
            Script::Text(text) => Ok(text.clone()),
            Script::Fail(error) => Err(error()),
        }
    }
}

/// Source that always has the same image
pub struct StaticSource {
    image: RawImage,
}

impl StaticSource {
    pub fn new(image: RawImage) -> Self {
        Self { image }
    }
}

impl ImageSource for StaticSource {
    fn get_image(&mut self) -> Result<Option<RawImage>, OcrError> {
        Ok(Some(self.image.clone()))
    }
}

/// Source that never holds an image
pub struct EmptySource;

impl ImageSource for EmptySource {
    fn get_image(&mut self) -> Result<Option<RawImage>, OcrError> {
        Ok(None)
    }
}

/// Sink that remembers everything written to it
#[derive(Default)]
pub struct RecordingSink {
    pub written: Vec<String>,
}

impl TextSink for RecordingSink {
    fn put_text(&mut self, text: &str) -> Result<(), OcrError> {
        self.written.push(text.to_string());
        Ok(())
    }
}
