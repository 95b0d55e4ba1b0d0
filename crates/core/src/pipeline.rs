//! Image-to-slide pipeline and the collaborator interfaces it depends on.

use crate::error::Result;
use crate::extract::TitleExtractor;
use crate::normalize::TextNormalizer;
use crate::style::SlideStyle;
use crate::types::{Deck, SlideContent, TitlePolicy};
use std::path::Path;

/// Turns an image file into raw transcript text.
pub trait TextRecognizer {
    /// Recognize the text in `image`.
    fn transcribe(&self, image: &Path) -> Result<String>;
}

/// Writes a deck to a presentation file.
pub trait DeckRenderer {
    /// Render `deck` to `output`, replacing any existing file.
    fn render(&self, deck: &Deck, output: &Path) -> Result<()>;
}

impl<T: TextRecognizer + ?Sized> TextRecognizer for &T {
    fn transcribe(&self, image: &Path) -> Result<String> {
        (**self).transcribe(image)
    }
}

/// The file name of `path` with its final extension removed.
pub fn fallback_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Runs OCR, normalization and extraction for each input image in order.
#[derive(Debug)]
pub struct SlidePipeline<R> {
    recognizer: R,
    normalizer: TextNormalizer,
    extractor: TitleExtractor,
}

impl<R: TextRecognizer> SlidePipeline<R> {
    /// Create a pipeline around a text recognizer.
    pub fn new(recognizer: R, policy: TitlePolicy) -> Self {
        Self {
            recognizer,
            normalizer: TextNormalizer::new(),
            extractor: TitleExtractor::new(policy),
        }
    }

    /// Build the content for one image.
    ///
    /// Returns `None` if the file does not exist. Recognition failures
    /// degrade to an empty transcript.
    pub fn process(&self, image: &Path) -> Option<SlideContent> {
        if !image.exists() {
            log::warn!("File not found, skipping: {}", image.display());
            return None;
        }

        let transcript = match self.recognizer.transcribe(image) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("OCR failed for {}: {}", image.display(), e);
                String::new()
            }
        };

        let lines = self.normalizer.normalize_transcript(&transcript);
        log::debug!("{}: {} normalized line(s)", image.display(), lines.len());

        Some(self.extractor.extract(&lines, &fallback_title(image)))
    }

    /// Build slide content for every existing image, preserving input order.
    pub fn process_all<P: AsRef<Path>>(&self, images: &[P]) -> Vec<SlideContent> {
        images
            .iter()
            .filter_map(|image| self.process(image.as_ref()))
            .collect()
    }

    /// Build a deck with one slide per existing image.
    pub fn build_deck<P: AsRef<Path>>(&self, images: &[P], style: SlideStyle) -> Deck {
        let mut deck = Deck::new(style);
        for content in self.process_all(images) {
            deck.add_slide(content);
        }
        deck
    }
}
