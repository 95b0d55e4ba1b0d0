//! OCR engine interface and the Tesseract command-line backend.

use deck_core::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Trait that all OCR engines must implement.
pub trait OcrEngine: Send + Sync {
    /// Short identifier used in log messages, e.g. `tesseract:vie`.
    fn name(&self) -> String;

    /// Recognize the text in an image file.
    fn recognize(&self, image: &Path) -> Result<String>;
}

/// Runs the `tesseract` binary for one language.
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    binary: PathBuf,
    lang: String,
}

impl TesseractEngine {
    /// Create an engine using `tesseract` from `PATH`.
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            binary: PathBuf::from("tesseract"),
            lang: lang.into(),
        }
    }

    /// Use a specific tesseract executable.
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }
}

impl OcrEngine for TesseractEngine {
    fn name(&self) -> String {
        format!("tesseract:{}", self.lang)
    }

    fn recognize(&self, image: &Path) -> Result<String> {
        // tesseract <image> stdout -l <lang>
        let output = Command::new(&self.binary)
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.lang)
            .output()
            .map_err(|e| {
                Error::OcrError(format!("Failed to execute {}: {}", self.binary.display(), e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::OcrError(format!(
                "{} failed ({}): {}",
                self.name(),
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

    #[test]
    fn test_engine_name() {
        let engine = TesseractEngine::new("vie");
        assert_eq!(engine.name(), "tesseract:vie");
    }

    #[test]
    fn test_missing_binary_is_an_ocr_error() {
        let engine = TesseractEngine::new("eng").with_binary("/nonexistent/bin/tesseract");
        let err = engine.recognize(Path::new("image.png")).unwrap_err();

        assert!(matches!(err, Error::OcrError(ref msg) if msg.contains("Failed to execute")));
    }

    #[cfg(unix)]
    #[test]
    fn test_arguments_and_stdout_capture() {
        // `echo` prints its arguments, standing in for tesseract's stdout.
        let engine = TesseractEngine::new("vie").with_binary("echo");
        let text = engine.recognize(Path::new("de bai.jpg")).unwrap();

        assert_eq!(text, "de bai.jpg stdout -l vie\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_an_ocr_error() {
        let engine = TesseractEngine::new("xyz").with_binary("false");
        let err = engine.recognize(Path::new("image.png")).unwrap_err();

        assert!(matches!(err, Error::OcrError(ref msg) if msg.contains("tesseract:xyz failed")));
    }
}
