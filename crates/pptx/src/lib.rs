//! PPTX (Office Open XML) writer backend for slide decks.
//!
//! Writes .pptx files, which are ZIP archives containing XML documents,
//! and reads their slide text back for verification.

mod parts;
pub mod reader;
mod slide;
pub mod writer;

pub use reader::{DeckText, PptxReader, SlideText};
pub use writer::PptxWriter;
