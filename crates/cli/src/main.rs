//! CLI tool for turning photos of slides into a PowerPoint deck.

use anyhow::{Context, Result};
use clap::Parser;
use deck_core::{
    Deck, DeckRenderer, RgbColor, SlidePipeline, SlideStyle, TextRecognizer, TitlePolicy,
};
use deck_ocr::OcrChain;
use deck_pptx::PptxWriter;
use std::path::PathBuf;

/// OCR images of slides and rebuild them as a PPTX presentation.
#[derive(Parser, Debug)]
#[command(name = "slides-from-images")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input images, one slide each, in order
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Output presentation path
    #[arg(short, long, default_value = "slides_from_images.pptx")]
    output: PathBuf,

    /// Primary OCR language
    #[arg(short, long, default_value = "vie")]
    lang: String,

    /// OCR language to retry with when the primary language fails
    #[arg(long, default_value = "eng")]
    fallback_lang: String,

    /// Skip grayscale and adaptive-threshold preprocessing
    #[arg(long)]
    no_preprocess: bool,

    /// Where slide titles come from (first-line or filename)
    #[arg(long, default_value = "first-line")]
    title_from: TitlePolicy,

    /// Font for titles and bullets
    #[arg(long, default_value = "DejaVu Sans")]
    font_name: String,

    /// Title font size in points
    #[arg(long, default_value = "40")]
    title_size: u32,

    /// Bullet font size in points
    #[arg(long, default_value = "24")]
    bullet_size: u32,

    /// Title color as a hex string, e.g. #1f77b4
    #[arg(long, default_value = "#1f77b4")]
    accent_color: String,

    /// Use 16:9 slides instead of 4:3
    #[arg(long)]
    wide: bool,

    /// Print the extracted slides as JSON
    #[arg(short, long)]
    print: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let recognizer =
        OcrChain::tesseract(&args.lang, &args.fallback_lang).with_preprocess(!args.no_preprocess);
    log::debug!("OCR engines: {:?}", recognizer.engine_names());

    run(&args, recognizer, &PptxWriter::new())?;

    println!("[ok] Saved presentation to: {}", args.output.display());
    Ok(())
}

/// Build the slide style from the command-line options.
fn slide_style(args: &Args) -> Result<SlideStyle> {
    let accent_color = RgbColor::from_hex(&args.accent_color)
        .with_context(|| format!("Invalid --accent-color '{}'", args.accent_color))?;

    Ok(SlideStyle {
        font_name: args.font_name.clone(),
        title_size: args.title_size,
        bullet_size: args.bullet_size,
        accent_color,
        widescreen: args.wide,
    })
}

/// Validate the style, OCR every image, and render the deck.
///
/// Style errors are returned before any image is recognized.
fn run<R, D>(args: &Args, recognizer: R, renderer: &D) -> Result<Deck>
where
    R: TextRecognizer,
    D: DeckRenderer,
{
    let style = slide_style(args)?;

    let pipeline = SlidePipeline::new(recognizer, args.title_from);
    let deck = pipeline.build_deck(&args.images, style);

    if args.verbose {
        eprintln!("Extracted {} of {} slide(s)", deck.len(), args.images.len());
    }

    if args.print {
        let json = serde_json::to_string_pretty(&deck.slides)
            .context("Failed to serialize extracted slides")?;
        println!("{}", json);
    }

    renderer
        .render(&deck, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(deck)
}
