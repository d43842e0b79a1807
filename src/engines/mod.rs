//! OCR engine implementations
//!
//! The Tesseract executable engine is always available. The statically
//! linked engine is compiled in with the `engine-leptess` feature.

pub mod tesseract;

#[cfg(feature = "engine-leptess")]
pub mod leptess;

use crate::config::Config;
use crate::engine::OcrEngine;
use crate::error::OcrError;
use std::sync::Arc;

/// Information about an available engine
#[derive(Debug, Clone)]
pub struct EngineInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Registry of available OCR engines, built once at startup
pub struct EngineRegistry {
    engines: Vec<Arc<dyn OcrEngine>>,
    default_engine: String,
}

impl EngineRegistry {
    /// Create a registry with every compiled-in engine initialized.
    ///
    /// Only the configured engine may fail hard; others that cannot start are
    /// skipped.
    pub fn new(config: &Config) -> Result<Self, OcrError> {
        let mut engines: Vec<Arc<dyn OcrEngine>> = Vec::new();

        engines.push(Arc::new(tesseract::TesseractEngine::new(config)));

        #[cfg(feature = "engine-leptess")]
        {
            tracing::info!("Initializing leptess engine...");
            match leptess::LeptessEngine::new(config) {
                Ok(engine) => engines.push(Arc::new(engine)),
                Err(e) if config.engine == "leptess" => return Err(e),
                Err(e) => tracing::warn!("Leptess engine unavailable: {}", e),
            }
        }

        Self::with_engines(engines, &config.engine)
    }

    /// Build a registry from already constructed engines
    pub fn with_engines(
        engines: Vec<Arc<dyn OcrEngine>>,
        default_engine: &str,
    ) -> Result<Self, OcrError> {
        if !engines.iter().any(|e| e.name() == default_engine) {
            let available: Vec<_> = engines.iter().map(|e| e.name()).collect();
            return Err(OcrError::InvalidConfig(format!(
                "Unknown OCR engine '{}' (available: {})",
                default_engine,
                available.join(", ")
            )));
        }

        Ok(Self {
            engines,
            default_engine: default_engine.to_string(),
        })
    }

    /// Get an engine by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn OcrEngine>> {
        self.engines.iter().find(|e| e.name() == name).cloned()
    }

    /// Get the default engine
    pub fn default(&self) -> Option<Arc<dyn OcrEngine>> {
        self.get(&self.default_engine)
    }

    /// Get the default engine name
    pub fn default_name(&self) -> &str {
        &self.default_engine
    }

    /// Get info about all available engines
    pub fn info(&self) -> Vec<EngineInfo> {
        self.engines
            .iter()
            .map(|e| EngineInfo {
                name: e.name(),
                description: e.description(),
            })
            .collect()
    }
}
