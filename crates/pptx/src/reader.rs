//! PPTX reader for decks written by [`crate::PptxWriter`].
//!
//! Loads each slide's title and body paragraphs back out of the package,
//! mainly to check what a rendered file actually contains.

use deck_core::{Error, Result, SlideSize};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::{Read, Seek};
use zip::ZipArchive;

/// Text recovered from one slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideText {
    /// Title placeholder text (paragraphs joined with `\n`).
    pub title: String,

    /// Body paragraphs as `(level, text)`, in document order.
    pub paragraphs: Vec<(u8, String)>,
}

/// A deck read back from a PPTX package.
#[derive(Debug, Clone, Default)]
pub struct DeckText {
    /// Slide size from `presentation.xml`, if present.
    pub slide_size: Option<SlideSize>,

    /// Slides in presentation order.
    pub slides: Vec<SlideText>,
}

/// Reader for PPTX packages.
pub struct PptxReader;

impl PptxReader {
    /// Create a new PPTX reader.
    pub fn new() -> Self {
        Self
    }

    /// Read slide text from a PPTX package.
    pub fn read<R: Read + Seek>(&self, reader: R) -> Result<DeckText> {
        let mut archive = ZipArchive::new(reader)
            .map_err(|e| Error::ZipError(format!("Failed to open ZIP: {}", e)))?;

        let presentation = self.read_file_from_archive(&mut archive, "ppt/presentation.xml")?;
        let slide_size = parse_slide_size(&presentation)?;

        let mut slides = Vec::new();
        for slide_path in self.get_slide_order(&mut archive)? {
            let content = self.read_file_from_archive(&mut archive, &slide_path)?;
            slides.push(parse_slide(&content)?);
        }

        Ok(DeckText { slide_size, slides })
    }

    /// Get the ordered list of slide paths from the presentation relationships.
    fn get_slide_order<R: Read + Seek>(&self, archive: &mut ZipArchive<R>) -> Result<Vec<String>> {
        let rels_content =
            self.read_file_from_archive(archive, "ppt/_rels/presentation.xml.rels")?;
        let mut slides: Vec<(String, Option<usize>)> = Vec::new();

        let mut reader = Reader::from_str(&rels_content);
        reader.trim_text(true);

        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if e.name().as_ref() == b"Relationship" =>
                {
                    let rel_type = attribute(e, b"Type").unwrap_or_default();
                    let target = attribute(e, b"Target").unwrap_or_default();
                    let id = attribute(e, b"Id").unwrap_or_default();

                    if rel_type.ends_with("/slide") {
                        let order_num =
                            extract_slide_number(&id).or_else(|| extract_slide_number(&target));
                        let full_path = match target.strip_prefix('/') {
                            Some(absolute) => absolute.to_string(),
                            None => format!("ppt/{}", target),
                        };
                        slides.push((full_path, order_num));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::XmlError(format!(
                        "Error parsing relationships: {}",
                        e
                    )));
                }
                _ => {}
            }
        }

        slides.sort_by(|a, b| match (a.1, b.1) {
            (Some(na), Some(nb)) => na.cmp(&nb),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.0.cmp(&b.0),
        });

        Ok(slides.into_iter().map(|(path, _)| path).collect())
    }

    /// Read a file from the ZIP archive.
    fn read_file_from_archive<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        path: &str,
    ) -> Result<String> {
        let mut file = archive
            .by_name(path)
            .map_err(|e| Error::ZipError(format!("File not found in archive '{}': {}", path, e)))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| Error::ZipError(format!("Failed to read '{}': {}", path, e)))?;

        Ok(content)
    }
}

impl Default for PptxReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Read `p:sldSz` from presentation.xml.
fn parse_slide_size(xml: &str) -> Result<Option<SlideSize>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                if local_name(e.name().as_ref()) == b"sldSz" =>
            {
                let width = attribute(e, b"cx").and_then(|v| v.parse().ok());
                let height = attribute(e, b"cy").and_then(|v| v.parse().ok());
                return Ok(width.zip(height).map(|(width, height)| SlideSize { width, height }));
            }
            Ok(Event::Eof) => return Ok(None),
            Err(e) => return Err(Error::XmlError(format!("Error parsing presentation: {}", e))),
            _ => {}
        }
    }
}

/// Placeholder role of the shape currently being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShapeRole {
    Title,
    Body,
}

/// Extract title and body paragraphs from slide XML.
fn parse_slide(xml: &str) -> Result<SlideText> {
    let mut reader = Reader::from_str(xml);

    let mut slide = SlideText::default();
    let mut role: Option<ShapeRole> = None;
    let mut title_lines: Vec<String> = Vec::new();
    let mut in_paragraph = false;
    let mut in_text = false;
    let mut level = 0u8;
    let mut current_text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match local_name(e.name().as_ref()) {
                b"sp" => role = Some(ShapeRole::Body),
                b"p" if role.is_some() => {
                    in_paragraph = true;
                    level = 0;
                    current_text.clear();
                }
                b"t" if in_paragraph => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match local_name(e.name().as_ref()) {
                b"ph" => {
                    let ph_type = attribute(e, b"type");
                    if matches!(ph_type.as_deref(), Some("title") | Some("ctrTitle")) {
                        role = Some(ShapeRole::Title);
                    }
                }
                b"pPr" if in_paragraph => {
                    if let Some(lvl) = attribute(e, b"lvl").and_then(|v| v.parse().ok()) {
                        level = lvl;
                    }
                }
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                if in_text {
                    let text = e
                        .unescape()
                        .map_err(|e| Error::XmlError(format!("Bad text in slide: {}", e)))?;
                    current_text.push_str(&text);
                }
            }
            Ok(Event::End(ref e)) => match local_name(e.name().as_ref()) {
                b"t" => in_text = false,
                b"p" if in_paragraph => {
                    in_paragraph = false;
                    let text = std::mem::take(&mut current_text);
                    match role {
                        Some(ShapeRole::Title) => title_lines.push(text),
                        Some(ShapeRole::Body) => slide.paragraphs.push((level, text)),
                        None => {}
                    }
                }
                b"sp" => role = None,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::XmlError(format!("Error parsing slide: {}", e)));
            }
            _ => {}
        }
    }

    slide.title = title_lines.join("\n");
    Ok(slide)
}

/// Unescaped value of the attribute named `key`.
fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| String::from_utf8_lossy(&attr.value).into_owned())
}

/// Extract the local name from a potentially namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}

/// Extract a slide number from a string like "rId2" or "slide3.xml".
fn extract_slide_number(s: &str) -> Option<usize> {
    let s = s.trim_end_matches(".xml").trim_end_matches(".rels");

    let digits: String = s.chars().rev().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let digits: String = digits.chars().rev().collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_slide_number() {
        assert_eq!(extract_slide_number("rId1"), Some(1));
        assert_eq!(extract_slide_number("rId12"), Some(12));
        assert_eq!(extract_slide_number("slide1.xml"), Some(1));
        assert_eq!(extract_slide_number("slide123.xml"), Some(123));
        assert_eq!(extract_slide_number("nodigits"), None);
    }

    #[test]
    fn test_local_name() {
        assert_eq!(local_name(b"p:sp"), b"sp");
        assert_eq!(local_name(b"a:t"), b"t");
        assert_eq!(local_name(b"sp"), b"sp");
    }

    #[test]
    fn test_parse_slide_title_and_levels() {
        let xml = concat!(
            r#"<p:sld xmlns:a="a" xmlns:p="p"><p:cSld><p:spTree>"#,
            r#"<p:sp><p:nvSpPr><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr>"#,
            r#"<p:txBody><a:p><a:pPr algn="l"/><a:r><a:t>Tiêu đề</a:t></a:r></a:p></p:txBody></p:sp>"#,
            r#"<p:sp><p:nvSpPr><p:nvPr><p:ph idx="1"/></p:nvPr></p:nvSpPr><p:txBody>"#,
            r#"<a:p><a:r><a:t>Parent &amp; co</a:t></a:r></a:p>"#,
            r#"<a:p><a:pPr lvl="1"/><a:r><a:t>Child </a:t></a:r><a:r><a:t>two</a:t></a:r></a:p>"#,
            r#"</p:txBody></p:sp></p:spTree></p:cSld></p:sld>"#,
        );
        let slide = parse_slide(xml).unwrap();

        assert_eq!(slide.title, "Tiêu đề");
        assert_eq!(
            slide.paragraphs,
            vec![(0, "Parent & co".to_string()), (1, "Child two".to_string())]
        );
    }

    #[test]
    fn test_parse_slide_size() {
        let xml = r#"<p:presentation xmlns:p="p"><p:sldSz cx="12188952" cy="6858000"/></p:presentation>"#;
        assert_eq!(parse_slide_size(xml).unwrap(), Some(SlideSize::WIDESCREEN));
        assert_eq!(parse_slide_size("<p:presentation/>").unwrap(), None);
    }
}
