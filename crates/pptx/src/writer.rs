//! PPTX package writer.

use crate::parts;
use crate::slide::{escape_control_chars, slide_xml};
use deck_core::{Deck, DeckRenderer, Error, Result};
use quick_xml::escape::escape;
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Writer for PPTX (Office Open XML) presentations.
pub struct PptxWriter;

impl PptxWriter {
    /// Create a new PPTX writer.
    pub fn new() -> Self {
        Self
    }

    /// Write `deck` as a PPTX package into `sink`, returning the sink.
    pub fn write<W: Write + Seek>(&self, deck: &Deck, sink: W) -> Result<W> {
        let size = deck.style.slide_size();
        let count = deck.len();
        let title = deck.slides.first().map(|s| s.title.as_str()).unwrap_or_default();
        let title = escape_control_chars(title);

        let mut package = Package::new(sink);
        package.add("[Content_Types].xml", &parts::content_types_xml(count))?;
        package.add("_rels/.rels", &parts::root_rels_xml())?;
        package.add("docProps/core.xml", &parts::core_props_xml(&escape(&title)))?;
        package.add("docProps/app.xml", &parts::app_props_xml(count))?;
        package.add("ppt/presentation.xml", &parts::presentation_xml(count, size))?;
        package.add("ppt/_rels/presentation.xml.rels", &parts::presentation_rels_xml(count))?;
        package.add("ppt/presProps.xml", &parts::pres_props_xml())?;
        package.add("ppt/viewProps.xml", &parts::view_props_xml())?;
        package.add("ppt/tableStyles.xml", &parts::table_styles_xml())?;
        package.add("ppt/theme/theme1.xml", &parts::theme_xml())?;
        package.add("ppt/slideMasters/slideMaster1.xml", &parts::slide_master_xml(size))?;
        package.add("ppt/slideMasters/_rels/slideMaster1.xml.rels", &parts::master_rels_xml())?;
        package.add("ppt/slideLayouts/slideLayout1.xml", &parts::slide_layout_xml(size))?;
        package.add("ppt/slideLayouts/_rels/slideLayout1.xml.rels", &parts::layout_rels_xml())?;

        for (idx, slide) in deck.slides.iter().enumerate() {
            let number = idx + 1;
            log::debug!("Writing slide {}: {:?}", number, slide.title);
            package.add(&format!("ppt/slides/slide{number}.xml"), &slide_xml(slide, &deck.style)?)?;
            package.add(
                &format!("ppt/slides/_rels/slide{number}.xml.rels"),
                &parts::slide_rels_xml(),
            )?;
        }

        package.finish()
    }

    /// Write `deck` to a file at `path`, replacing any existing file.
    pub fn save(&self, deck: &Deck, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = self.write(deck, BufWriter::new(file))?;
        writer.flush()?;
        log::info!("Wrote {} slide(s) to {}", deck.len(), path.display());
        Ok(())
    }
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckRenderer for PptxWriter {
    fn render(&self, deck: &Deck, output: &Path) -> Result<()> {
        self.save(deck, output)
    }
}

/// A ZIP archive being filled with package parts.
struct Package<W: Write + Seek> {
    zip: ZipWriter<W>,
    options: FileOptions,
}

impl<W: Write + Seek> Package<W> {
    fn new(sink: W) -> Self {
        Self {
            zip: ZipWriter::new(sink),
            options: FileOptions::default().compression_method(CompressionMethod::Deflated),
        }
    }

    fn add(&mut self, name: &str, content: &str) -> Result<()> {
        self.zip
            .start_file(name, self.options)
            .map_err(|e| Error::ZipError(format!("Failed to start '{}': {}", name, e)))?;
        self.zip
            .write_all(content.as_bytes())
            .map_err(|e| Error::ZipError(format!("Failed to write '{}': {}", name, e)))?;
        Ok(())
    }

    fn finish(mut self) -> Result<W> {
        self.zip
            .finish()
            .map_err(|e| Error::ZipError(format!("Failed to finish archive: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::PptxReader;
    use deck_core::{studymate_deck, BulletItem, Slide, SlideSize, SlideStyle};
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    fn write_to_memory(deck: &Deck) -> Cursor<Vec<u8>> {
        let mut cursor = PptxWriter::new().write(deck, Cursor::new(Vec::new())).unwrap();
        cursor.set_position(0);
        cursor
    }

    fn sample_deck() -> Deck {
        let mut deck = Deck::new(SlideStyle::default());
        deck.add_slide(Slide::new("Hello", ["World"]));
        deck.add_slide(Slide::new("photo1", Vec::<String>::new()));
        deck.add_slide(Slide::new(
            "Plan",
            [BulletItem::from("Intro"), BulletItem::group("Steps", ["One", "Two"])],
        ));
        deck
    }

    #[test]
    fn test_package_contains_required_parts() {
        let mut archive = ZipArchive::new(write_to_memory(&sample_deck())).unwrap();

        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/core.xml",
            "docProps/app.xml",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/theme/theme1.xml",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide3.xml",
            "ppt/slides/_rels/slide3.xml.rels",
        ] {
            assert!(archive.by_name(part).is_ok(), "missing {part}");
        }
        assert!(archive.by_name("ppt/slides/slide4.xml").is_err());

        let mut app = String::new();
        archive.by_name("docProps/app.xml").unwrap().read_to_string(&mut app).unwrap();
        assert!(app.contains("<Slides>3</Slides>"));
    }

    #[test]
    fn test_round_trip_titles_and_bullets() {
        let text = PptxReader::new().read(write_to_memory(&sample_deck())).unwrap();

        assert_eq!(text.slide_size, Some(SlideSize::STANDARD));
        assert_eq!(text.slides.len(), 3);

        assert_eq!(text.slides[0].title, "Hello");
        assert_eq!(text.slides[0].paragraphs, vec![(0, "World".to_string())]);

        assert_eq!(text.slides[1].title, "photo1");
        assert_eq!(text.slides[1].paragraphs, vec![(0, String::new())]);

        assert_eq!(text.slides[2].title, "Plan");
        assert_eq!(
            text.slides[2].paragraphs,
            vec![
                (0, "Intro".to_string()),
                (0, "Steps".to_string()),
                (1, "One".to_string()),
                (1, "Two".to_string()),
            ]
        );
    }

    #[test]
    fn test_widescreen_slide_size() {
        let mut deck = sample_deck();
        deck.style.widescreen = true;

        let text = PptxReader::new().read(write_to_memory(&deck)).unwrap();
        assert_eq!(text.slide_size, Some(SlideSize::WIDESCREEN));
    }

    #[test]
    fn test_empty_deck_is_still_a_package() {
        let text = PptxReader::new()
            .read(write_to_memory(&Deck::default()))
            .unwrap();

        assert!(text.slides.is_empty());
        assert_eq!(text.slide_size, Some(SlideSize::STANDARD));
    }

    #[test]
    fn test_ten_or_more_slides_keep_order() {
        let mut deck = Deck::default();
        for n in 1..=12 {
            deck.add_slide(Slide::new(format!("Slide {n}"), [format!("Body {n}")]));
        }

        let text = PptxReader::new().read(write_to_memory(&deck)).unwrap();
        let titles: Vec<&str> = text.slides.iter().map(|s| s.title.as_str()).collect();
        let expected: Vec<String> = (1..=12).map(|n| format!("Slide {n}")).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn test_studymate_deck_round_trip() {
        let deck = studymate_deck();
        let text = PptxReader::new().read(write_to_memory(&deck)).unwrap();

        assert_eq!(text.slide_size, Some(SlideSize::WIDESCREEN));
        assert_eq!(text.slides.len(), 8);
        assert_eq!(text.slides[5].title, "5. Tiếp cận thị trường & marketing");
        assert_eq!(text.slides[5].paragraphs[0], (0, "Kênh phân phối:".to_string()));
        assert_eq!(
            text.slides[5].paragraphs[1],
            (1, "App Store, Google Play, website".to_string())
        );
    }

    #[test]
    fn test_render_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pptx");

        PptxWriter::new().render(&sample_deck(), &path).unwrap();

        let text = PptxReader::new().read(File::open(&path).unwrap()).unwrap();
        assert_eq!(text.slides.len(), 3);
    }

    #[test]
    fn test_core_properties_title_is_escaped() {
        let mut deck = Deck::default();
        deck.add_slide(Slide::new("R&D <2024>", Vec::<String>::new()));

        let mut archive = ZipArchive::new(write_to_memory(&deck)).unwrap();
        let mut core = String::new();
        archive.by_name("docProps/core.xml").unwrap().read_to_string(&mut core).unwrap();

        assert!(core.contains("<dc:title>R&amp;D &lt;2024&gt;</dc:title>"));
    }

    #[test]
    fn test_control_chars_are_encoded_in_every_part() {
        let mut deck = Deck::default();
        deck.add_slide(Slide::new("Tit\u{7}le", ["bul\u{1b}let"]));

        let mut cursor = write_to_memory(&deck);
        let mut archive = ZipArchive::new(&mut cursor).unwrap();
        for part in ["ppt/slides/slide1.xml", "docProps/core.xml"] {
            let mut xml = String::new();
            archive.by_name(part).unwrap().read_to_string(&mut xml).unwrap();
            assert!(
                !xml.chars().any(|c| c < ' ' && !matches!(c, '\t' | '\n' | '\r')),
                "raw control character in {part}"
            );
        }
        drop(archive);
        cursor.set_position(0);

        let text = PptxReader::new().read(cursor).unwrap();
        assert_eq!(text.slides[0].title, "Tit_x0007_le");
        assert_eq!(text.slides[0].paragraphs, vec![(0, "bul_x001B_let".to_string())]);
    }
}
