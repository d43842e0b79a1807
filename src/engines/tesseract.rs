//! Tesseract executable engine
//!
//! Runs the `tesseract` binary once per image, passing a temporary PNG and
//! reading the recognized text from stdout.

use crate::config::Config;
use crate::engine::{OcrEngine, RecognitionOptions};
use crate::error::OcrError;
use crate::preprocessing::PreprocessedImage;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Tesseract OCR engine backed by an external executable
pub struct TesseractEngine {
    command: PathBuf,
}

impl TesseractEngine {
    pub fn new(config: &Config) -> Self {
        tracing::info!(
            "Tesseract engine configured (command: {})",
            config.tesseract_cmd.display()
        );
        Self::with_command(config.tesseract_cmd.clone())
    }

    pub fn with_command(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
        }
    }

    fn build_command(&self, input: &Path, options: &RecognitionOptions) -> Command {
        let mut cmd = Command::new(&self.command);
        cmd.arg(input)
            .arg("stdout")
            .args(["-l", &options.language])
            .args(["--oem", &options.engine_mode.as_oem().to_string()])
            .args(["--psm", &options.page_seg_mode.as_psm().to_string()])
            .args(["-c", &format!("tessedit_char_whitelist={}", options.charset)])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl OcrEngine for TesseractEngine {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn description(&self) -> &'static str {
        "Tesseract OCR executable run as a subprocess"
    }

    fn recognize(
        &self,
        image: &PreprocessedImage,
        options: &RecognitionOptions,
    ) -> Result<String, OcrError> {
        let png = image.to_png()?;

        let mut input = tempfile::Builder::new()
            .prefix("clipdigits-")
            .suffix(".png")
            .tempfile()
            .map_err(|e| OcrError::EngineFailure(format!("Failed to create temp file: {}", e)))?;
        input
            .write_all(&png)
            .and_then(|_| input.flush())
            .map_err(|e| OcrError::EngineFailure(format!("Failed to write temp image: {}", e)))?;

        tracing::debug!(
            "Running {} on {}x{} image",
            self.command.display(),
            image.width(),
            image.height()
        );

        let output = self
            .build_command(input.path(), options)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                    OcrError::EngineNotAvailable(format!(
                        "Tesseract executable not found at '{}' ({}). Install Tesseract-OCR or set --tesseract-cmd",
                        self.command.display(),
                        e
                    ))
                }
                _ => OcrError::EngineFailure(format!("Failed to run tesseract: {}", e)),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::EngineFailure(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_source::RawImage;
    use crate::preprocessing::Pipeline;
    use image::{DynamicImage, GrayImage, Luma};

    fn blank() -> PreprocessedImage {
        let raw = RawImage::from(DynamicImage::ImageLuma8(GrayImage::from_pixel(8, 8, Luma([255]))));
        Pipeline::default().process(&raw).unwrap().image
    }

    #[test]
    fn test_missing_executable_is_engine_not_available() {
        // Spawning forks; the shared scripts must not be open for writing then
        #[cfg(unix)]
        scripted::scripts();

        let dir = tempfile::tempdir().unwrap();
        let engine = TesseractEngine::with_command(dir.path().join("no-such-tesseract"));

        let err = engine
            .recognize(&blank(), &RecognitionOptions::default())
            .unwrap_err();

        assert!(matches!(err, OcrError::EngineNotAvailable(_)), "got {:?}", err);
    }

    #[test]
    fn test_command_line_restricts_charset() {
        let engine = TesseractEngine::with_command("tesseract");
        let cmd = engine.build_command(Path::new("in.png"), &RecognitionOptions::digits("por"));
        let args: Vec<String> = cmd
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        assert_eq!(
            args,
            [
                "in.png",
                "stdout",
                "-l",
                "por",
                "--oem",
                "3",
                "--psm",
                "6",
                "-c",
                "tessedit_char_whitelist=0123456789"
            ]
        );
    }

    #[cfg(unix)]
    mod scripted {
        use super::*;
        use std::os::unix::fs::PermissionsExt;
        use std::sync::OnceLock;

        pub(super) struct Scripts {
            _dir: tempfile::TempDir,
            total: PathBuf,
            failing: PathBuf,
            magic: PathBuf,
        }

        /// Written once. Every test that spawns a process calls this first.
        pub(super) fn scripts() -> &'static Scripts {
            static SCRIPTS: OnceLock<Scripts> = OnceLock::new();
            SCRIPTS.get_or_init(|| {
                let dir = tempfile::tempdir().unwrap();
                Scripts {
                    total: script(dir.path(), "total", "echo 'Total: 42 / 7'"),
                    failing: script(
                        dir.path(),
                        "failing",
                        "echo 'Failed loading language' >&2; exit 1",
                    ),
                    // First four bytes of the input file as hex
                    magic: script(dir.path(), "magic", "od -An -tx1 -N4 \"$1\" | tr -d ' \\n'"),
                    _dir: dir,
                }
            })
        }

        fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
            let path = dir.join(name);
            std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[test]
        fn test_returns_stdout_of_executable() {
            let engine = TesseractEngine::with_command(&scripts().total);

            let text = engine
                .recognize(&blank(), &RecognitionOptions::default())
                .unwrap();

            assert_eq!(text.trim(), "Total: 42 / 7");
        }

        #[test]
        fn test_non_zero_exit_is_engine_failure() {
            let engine = TesseractEngine::with_command(&scripts().failing);

            let err = engine
                .recognize(&blank(), &RecognitionOptions::default())
                .unwrap_err();

            match err {
                OcrError::EngineFailure(msg) => assert!(msg.contains("Failed loading language")),
                other => panic!("expected EngineFailure, got {:?}", other),
            }
        }

        #[test]
        fn test_input_file_is_png() {
            let engine = TesseractEngine::with_command(&scripts().magic);

            let text = engine
                .recognize(&blank(), &RecognitionOptions::default())
                .unwrap();

            assert_eq!(text, "89504e47");
        }
    }
}
