//! Writes the StudyMate AI business-plan deck.

use anyhow::{Context, Result};
use clap::Parser;
use deck_core::{studymate_deck, DeckRenderer};
use deck_pptx::PptxWriter;
use std::path::PathBuf;

/// Generate the StudyMate AI presentation.
#[derive(Parser, Debug)]
#[command(name = "studymate-deck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output presentation path
    #[arg(short, long, default_value = "StudyMate_AI.pptx")]
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let deck = studymate_deck();
    PptxWriter::new()
        .render(&deck, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("[ok] Đã tạo: {}", args.output.display());
    Ok(())
}
