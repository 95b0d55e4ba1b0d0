//! Ordered OCR fallback chain.

use crate::engine::{OcrEngine, TesseractEngine};
use crate::preprocess::{load_image, preprocess, write_temp_png};
use deck_core::{Result, TextRecognizer};
use std::path::Path;

/// Tries each engine in turn; the first success wins.
///
/// When every engine fails the transcript is empty rather than an error.
pub struct OcrChain {
    engines: Vec<Box<dyn OcrEngine>>,
    preprocess: bool,
}

impl OcrChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            engines: Vec::new(),
            preprocess: true,
        }
    }

    /// Tesseract with the primary language, then the fallback language.
    ///
    /// The fallback engine is skipped when it is empty or equal to the primary.
    pub fn tesseract(primary_lang: &str, fallback_lang: &str) -> Self {
        let mut chain = Self::new().with_engine(TesseractEngine::new(primary_lang));
        if !fallback_lang.is_empty() && fallback_lang != primary_lang {
            chain = chain.with_engine(TesseractEngine::new(fallback_lang));
        }
        chain
    }

    /// Append an engine to the end of the chain.
    pub fn with_engine(mut self, engine: impl OcrEngine + 'static) -> Self {
        self.engines.push(Box::new(engine));
        self
    }

    /// Enable or disable adaptive-threshold preprocessing (default: enabled).
    pub fn with_preprocess(mut self, preprocess: bool) -> Self {
        self.preprocess = preprocess;
        self
    }

    /// Names of the engines, in the order they are tried.
    pub fn engine_names(&self) -> Vec<String> {
        self.engines.iter().map(|e| e.name()).collect()
    }

    /// Run the engines on an image file that is ready for OCR.
    fn recognize_prepared(&self, image: &Path) -> String {
        for engine in &self.engines {
            match engine.recognize(image) {
                Ok(text) => {
                    log::debug!("{} recognized {} byte(s)", engine.name(), text.len());
                    return text;
                }
                Err(e) => log::warn!("{} failed, trying next engine: {}", engine.name(), e),
            }
        }

        log::warn!("All OCR engines failed for {}; using empty text", image.display());
        String::new()
    }
}

impl Default for OcrChain {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRecognizer for OcrChain {
    fn transcribe(&self, image: &Path) -> Result<String> {
        if !self.preprocess {
            return Ok(self.recognize_prepared(image));
        }

        let decoded = load_image(image)?;
        let prepared = write_temp_png(&preprocess(&decoded))?;
        Ok(self.recognize_prepared(prepared.path()))
    }
}
