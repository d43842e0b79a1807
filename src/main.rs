use anyhow::Context;
use clap::Parser;
use clipdigits::cli::Args;
use clipdigits::engines::EngineRegistry;
use clipdigits::image_source::{ClipboardSink, ClipboardSource, FileSource, ImageSource, TextSink};
use clipdigits::session::Session;
use clipdigits::{interactive, Config, DigitExtractor, DigitOutcome, OcrError};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit code when the image held no digits
const EXIT_NO_DIGITS: u8 = 1;
/// Exit code for failures outside the pipeline
const EXIT_FAILURE: u8 = 4;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help and --version also arrive here
            return if e.use_stderr() {
                ExitCode::from(EXIT_FAILURE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Logs go to stderr; stdout carries only results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&args) {
        Ok(code) => code,
        Err(e) => ExitCode::from(report(&e)),
    }
}

/// Print the error and pick the exit code for its class
fn report(e: &anyhow::Error) -> u8 {
    match e.downcast_ref::<OcrError>() {
        Some(err @ OcrError::EngineNotAvailable(_)) => {
            eprintln!("{}", err);
            eprintln!("Install Tesseract-OCR or point --tesseract-cmd at the executable.");
            err.exit_code()
        }
        Some(err) => {
            eprintln!("Error: {}", err);
            err.exit_code()
        }
        None => {
            eprintln!("Error: {:#}", e);
            EXIT_FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let config = Config::from(args);

    tracing::info!("Starting clipdigits v{}", env!("CARGO_PKG_VERSION"));

    let registry = EngineRegistry::new(&config)?;
    if args.list_engines {
        for info in registry.info() {
            let marker = if info.name == registry.default_name() { "*" } else { " " };
            println!("{} {:<10} {}", marker, info.name, info.description);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let engine = registry.default().ok_or_else(|| {
        OcrError::InvalidConfig(format!("engine '{}' not registered", registry.default_name()))
    })?;
    tracing::info!("Using OCR engine '{}'", engine.name());

    let extractor = DigitExtractor::new(engine, &config);
    tracing::debug!(threshold = config.threshold, language = %config.language, "Extractor ready");

    let mut source: Box<dyn ImageSource> = match &args.image {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(ClipboardSource::new()?),
    };

    if args.interactive {
        let mut sink = ClipboardSink::new()?;
        let mut session = Session::new(extractor);
        let stdin = std::io::stdin();
        interactive::run(
            &mut session,
            source.as_mut(),
            &mut sink,
            stdin.lock(),
            std::io::stdout(),
        )
        .context("Interactive session failed")?;
        return Ok(ExitCode::SUCCESS);
    }

    run_once(args, &extractor, source.as_mut())
}

fn run_once(
    args: &Args,
    extractor: &DigitExtractor,
    source: &mut dyn ImageSource,
) -> anyhow::Result<ExitCode> {
    let extraction = match extractor.extract_digits(source) {
        Ok(extraction) => extraction,
        Err(e @ OcrError::NoImageProvided) => {
            eprintln!("There is no image {}.", source.location());
            return Ok(ExitCode::from(e.exit_code()));
        }
        Err(e) => return Err(e.into()),
    };

    if args.json {
        let json = serde_json::to_string_pretty(&extraction).context("Failed to serialize report")?;
        println!("{}", json);
    }

    match &extraction.outcome {
        DigitOutcome::Found(_) => {
            let text = extraction.text();
            if !args.json {
                println!("{}", text);
            }
            if args.copy {
                ClipboardSink::new()?.put_text(&text)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        DigitOutcome::NoDigitsFound => {
            eprintln!("OCR found no digits in the image. Try a sharper capture or adjust --threshold.");
            Ok(ExitCode::from(EXIT_NO_DIGITS))
        }
    }
}
