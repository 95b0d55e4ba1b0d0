//! OCR backend for slide generation.
//!
//! Images are optionally binarized, then handed to Tesseract with a
//! primary language and a fallback language.

pub mod chain;
pub mod engine;
pub mod preprocess;

pub use chain::OcrChain;
pub use engine::{OcrEngine, TesseractEngine};
pub use preprocess::{load_image, preprocess};
