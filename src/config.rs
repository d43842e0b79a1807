use crate::cli::Args;
use crate::preprocessing::DEFAULT_THRESHOLD;
use std::path::{Path, PathBuf};

/// Directory holding a Tesseract install shipped next to the executable
const BUNDLED_TESSERACT_DIR: &str = "Tesseract-OCR";

#[cfg(windows)]
const TESSERACT_EXE: &str = "tesseract.exe";
#[cfg(not(windows))]
const TESSERACT_EXE: &str = "tesseract";

/// Extraction configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub engine: String,
    pub tesseract_cmd: PathBuf,
    pub language: String,
    pub threshold: u8,
    pub tessdata_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: "tesseract".to_string(),
            tesseract_cmd: PathBuf::from(TESSERACT_EXE),
            language: "eng".to_string(),
            threshold: DEFAULT_THRESHOLD,
            tessdata_path: None,
        }
    }
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        Self {
            engine: args.engine.clone(),
            tesseract_cmd: resolve_tesseract_cmd(args.tesseract_cmd.clone(), exe_dir.as_deref()),
            language: args.language.clone(),
            threshold: args.threshold,
            tessdata_path: args.tessdata_path.clone(),
        }
    }
}

/// Pick the tesseract executable: explicit setting, then a bundled copy
/// next to the executable, then a bare name resolved through PATH.
pub fn resolve_tesseract_cmd(explicit: Option<PathBuf>, exe_dir: Option<&Path>) -> PathBuf {
    if let Some(cmd) = explicit {
        return cmd;
    }

    if let Some(dir) = exe_dir {
        let bundled = dir.join(BUNDLED_TESSERACT_DIR).join(TESSERACT_EXE);
        if bundled.is_file() {
            tracing::debug!(path = %bundled.display(), "Using bundled tesseract");
            return bundled;
        }
    }

    PathBuf::from(TESSERACT_EXE)
}
