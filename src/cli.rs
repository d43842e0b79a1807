use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "clipdigits")]
#[command(about = "Extract the numbers from a clipboard image with digit-only OCR")]
#[command(version)]
pub struct Args {
    /// Read the image from a file instead of the clipboard
    #[arg(long, short = 'i')]
    pub image: Option<PathBuf>,

    /// OCR engine to use (e.g., "tesseract", "leptess")
    #[arg(long, env = "CLIPDIGITS_ENGINE", default_value = "tesseract")]
    pub engine: String,

    /// Path to the tesseract executable (bundled copy or PATH lookup if not set)
    #[arg(long, env = "TESSERACT_CMD")]
    pub tesseract_cmd: Option<PathBuf>,

    /// Language for OCR (e.g., "eng", "por")
    #[arg(long, env = "CLIPDIGITS_LANGUAGE", default_value = "eng")]
    pub language: String,

    /// Binarization threshold: pixels brighter than this become white
    #[arg(long, env = "CLIPDIGITS_THRESHOLD", default_value = "150")]
    pub threshold: u8,

    /// Path to tessdata directory (uses TESSDATA_PREFIX env var if not set)
    #[arg(long, env = "TESSDATA_PREFIX")]
    pub tessdata_path: Option<String>,

    /// Print a JSON report instead of plain numbers
    #[arg(long)]
    pub json: bool,

    /// Also copy the extracted numbers to the clipboard. On X11/Wayland the
    /// text is only served while clipdigits runs; prefer --interactive there.
    #[arg(long)]
    pub copy: bool,

    /// List the available OCR engines and exit
    #[arg(long)]
    pub list_engines: bool,

    /// Run an interactive paste/copy/clear session
    #[arg(long)]
    pub interactive: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,
}
