//! Presentation state: paste, copy, clear and exit as explicit transitions
//!
//! A session is either idle or holding the result of the last paste.
//! Clearing and exiting go through a [`Confirm`] prompt.

use crate::error::OcrError;
use crate::extractor::{DigitExtractor, Extraction};
use crate::image_source::{ImageSource, TextSink};
use std::fmt;

/// Asks the user a yes/no question
pub trait Confirm {
    fn confirm(&mut self, title: &str, prompt: &str) -> bool;
}

#[derive(Debug, Clone, Default)]
pub enum SessionState {
    #[default]
    Idle,
    HasResult(Extraction),
}

/// One user-visible message per outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Extracted(String),
    NoDigits,
    /// Carries [`ImageSource::location`] of the empty source
    NoImage(&'static str),
    EngineMissing(String),
    Failed(String),
    Copied,
    NothingToCopy,
    Cleared,
    ClearCancelled,
    Exit,
    ExitCancelled,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::Extracted(_) => "Numbers",
            Notice::NoDigits => "No numbers",
            Notice::NoImage(_) => "Error",
            Notice::EngineMissing(_) => "Tesseract not found",
            Notice::Failed(_) => "Error",
            Notice::Copied => "Copied",
            Notice::NothingToCopy => "No text",
            Notice::Cleared | Notice::ClearCancelled => "New query",
            Notice::Exit | Notice::ExitCancelled => "Quit",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Notice::NoImage(_) | Notice::EngineMissing(_) | Notice::Failed(_)
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Extracted(text) => f.write_str(text),
            Notice::NoDigits => f.write_str(
                "OCR found no digits in the image. Try a sharper capture or adjust the threshold.",
            ),
            Notice::NoImage(location) => write!(f, "There is no image {}.", location),
            Notice::EngineMissing(detail) => {
                write!(f, "The Tesseract-OCR executable could not be located. {}", detail)
            }
            Notice::Failed(detail) => f.write_str(detail),
            Notice::Copied => f.write_str("Text copied to the clipboard."),
            Notice::NothingToCopy => f.write_str("There is no text to copy."),
            Notice::Cleared => f.write_str("Image and text cleared."),
            Notice::ClearCancelled => f.write_str("Kept the current result."),
            Notice::Exit => f.write_str("Goodbye."),
            Notice::ExitCancelled => f.write_str("Still running."),
        }
    }
}

pub struct Session {
    extractor: DigitExtractor,
    state: SessionState,
}

impl Session {
    pub fn new(extractor: DigitExtractor) -> Self {
        Self {
            extractor,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Text currently shown to the user, if any
    pub fn text(&self) -> Option<String> {
        match &self.state {
            SessionState::HasResult(extraction) if extraction.has_digits() => {
                Some(extraction.text())
            }
            _ => None,
        }
    }

    /// Grab an image and replace the current result. Failures leave the
    /// state untouched.
    pub fn paste(&mut self, source: &mut dyn ImageSource) -> Notice {
        match self.extractor.extract_digits(source) {
            Ok(extraction) => {
                let notice = if extraction.has_digits() {
                    Notice::Extracted(extraction.text())
                } else {
                    Notice::NoDigits
                };
                tracing::debug!(tokens = extraction.tokens().len(), "Session has result");
                self.state = SessionState::HasResult(extraction);
                notice
            }
            Err(OcrError::NoImageProvided) => Notice::NoImage(source.location()),
            Err(OcrError::EngineNotAvailable(detail)) => {
                tracing::error!("OCR engine not available: {}", detail);
                Notice::EngineMissing(detail)
            }
            Err(e) => {
                tracing::warn!("Extraction failed: {}", e);
                Notice::Failed(e.to_string())
            }
        }
    }

    pub fn copy(&mut self, sink: &mut dyn TextSink) -> Notice {
        let Some(text) = self.text() else {
            return Notice::NothingToCopy;
        };
        match sink.put_text(&text) {
            Ok(()) => Notice::Copied,
            Err(e) => Notice::Failed(e.to_string()),
        }
    }

    /// Return to idle once the user agrees to start over
    pub fn clear(&mut self, confirm: &mut dyn Confirm) -> Notice {
        if !confirm.confirm(
            "New query",
            "Start a new query? This clears the image and the text.",
        ) {
            return Notice::ClearCancelled;
        }
        self.state = SessionState::Idle;
        tracing::debug!("Session cleared");
        Notice::Cleared
    }

    pub fn exit(&mut self, confirm: &mut dyn Confirm) -> Notice {
        if confirm.confirm("Quit", "Quit the application?") {
            Notice::Exit
        } else {
            Notice::ExitCancelled
        }
    }
}
