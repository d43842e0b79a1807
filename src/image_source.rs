//! Where images come from and where extracted text goes
//!
//! The system clipboard is the primary source and sink; image files are
//! supported as a source for scripting and tests.

use crate::error::OcrError;
use arboard::Clipboard;
use image::{DynamicImage, GenericImageView, RgbaImage};
use std::path::PathBuf;

/// A captured bitmap, owned by the extraction that received it
#[derive(Debug, Clone)]
pub struct RawImage(DynamicImage);

impl RawImage {
    /// Build from tightly packed RGBA8 bytes (the clipboard layout)
    pub fn from_rgba(width: u32, height: u32, bytes: Vec<u8>) -> Result<Self, OcrError> {
        let len = bytes.len();
        RgbaImage::from_raw(width, height, bytes)
            .map(|img| Self(DynamicImage::ImageRgba8(img)))
            .ok_or_else(|| {
                OcrError::ImageLoad(format!(
                    "{} bytes do not describe a {}x{} RGBA image",
                    len, width, height
                ))
            })
    }

    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.0.dimensions()
    }

    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.0
    }
}

impl From<DynamicImage> for RawImage {
    fn from(image: DynamicImage) -> Self {
        Self(image)
    }
}

/// Supplies images to the extractor. `Ok(None)` means nothing usable was there.
pub trait ImageSource {
    fn get_image(&mut self) -> Result<Option<RawImage>, OcrError>;

    /// Where the missing image was looked for, worded to follow
    /// "There is no image"
    fn location(&self) -> &'static str {
        "available"
    }
}

/// Receives the extracted text (the copy action)
pub trait TextSink {
    fn put_text(&mut self, text: &str) -> Result<(), OcrError>;
}

/// Reads images from the system clipboard
pub struct ClipboardSource {
    clipboard: Clipboard,
}

impl ClipboardSource {
    pub fn new() -> Result<Self, OcrError> {
        Ok(Self {
            clipboard: open_clipboard()?,
        })
    }
}

impl ImageSource for ClipboardSource {
    fn get_image(&mut self) -> Result<Option<RawImage>, OcrError> {
        match self.clipboard.get_image() {
            Ok(data) => {
                tracing::debug!(
                    width = data.width,
                    height = data.height,
                    "Read image from clipboard"
                );
                let width = u32::try_from(data.width)
                    .map_err(|_| OcrError::ImageLoad("Clipboard image too wide".to_string()))?;
                let height = u32::try_from(data.height)
                    .map_err(|_| OcrError::ImageLoad("Clipboard image too tall".to_string()))?;
                RawImage::from_rgba(width, height, data.bytes.into_owned()).map(Some)
            }
            // Text or nothing at all on the clipboard
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(OcrError::ClipboardError(e.to_string())),
        }
    }

    fn location(&self) -> &'static str {
        "on the clipboard"
    }
}

/// Writes text to the system clipboard.
///
/// On X11/Wayland the contents are served by this process, so keep the sink
/// alive for as long as the text should stay pasteable.
pub struct ClipboardSink {
    clipboard: Clipboard,
}

impl ClipboardSink {
    pub fn new() -> Result<Self, OcrError> {
        Ok(Self {
            clipboard: open_clipboard()?,
        })
    }
}

impl TextSink for ClipboardSink {
    fn put_text(&mut self, text: &str) -> Result<(), OcrError> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(|e| OcrError::ClipboardError(e.to_string()))?;
        tracing::debug!(chars = text.len(), "Copied text to clipboard");
        Ok(())
    }
}

fn open_clipboard() -> Result<Clipboard, OcrError> {
    Clipboard::new().map_err(|e| OcrError::ClipboardError(format!("Failed to open clipboard: {}", e)))
}

/// Reads an image file from disk on every request
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageSource for FileSource {
    fn get_image(&mut self) -> Result<Option<RawImage>, OcrError> {
        let img = image::open(&self.path).map_err(|e| {
            OcrError::ImageLoad(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(Some(RawImage(img)))
    }

    fn location(&self) -> &'static str {
        "in the image file"
    }
}
