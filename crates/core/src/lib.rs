//! Core domain types, OCR transcript normalization, and title/bullet
//! extraction for generating slide decks from images.

pub mod error;
pub mod extract;
pub mod normalize;
pub mod pipeline;
pub mod studymate;
pub mod style;
pub mod types;

pub use error::{Error, Result};
pub use extract::TitleExtractor;
pub use normalize::TextNormalizer;
pub use pipeline::{fallback_title, DeckRenderer, SlidePipeline, TextRecognizer};
pub use studymate::studymate_deck;
pub use style::{RgbColor, SlideSize, SlideStyle};
pub use types::{BulletItem, Deck, Slide, SlideContent, TitlePolicy};
