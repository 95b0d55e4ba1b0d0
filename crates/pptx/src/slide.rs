//! Slide XML generation.

use crate::parts::{NS_A, NS_P, NS_R};
use deck_core::{BulletItem, Error, Result, RgbColor, Slide, SlideStyle};
use quick_xml::events::{BytesDecl, BytesText, Event};
use quick_xml::Writer;
use std::borrow::Cow;

type XmlWriter = Writer<Vec<u8>>;

pub(crate) fn xml_error(e: quick_xml::Error) -> Error {
    Error::XmlError(e.to_string())
}

/// Encode characters that XML 1.0 forbids as `_xHHHH_`, the form Office uses.
///
/// Tab, line feed and carriage return are allowed and kept as they are.
pub(crate) fn escape_control_chars(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_forbidden_in_xml) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        if is_forbidden_in_xml(c) {
            escaped.push_str(&format!("_x{:04X}_", c as u32));
        } else {
            escaped.push(c);
        }
    }
    Cow::Owned(escaped)
}

fn is_forbidden_in_xml(c: char) -> bool {
    matches!(
        c,
        '\0'..='\x08' | '\x0b' | '\x0c' | '\x0e'..='\x1f' | '\u{fffe}' | '\u{ffff}'
    )
}

/// One body paragraph: outline level (0 = bullet, 1 = sub-bullet) and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BodyParagraph<'a> {
    pub level: u8,
    pub text: &'a str,
}

/// Flatten body items into paragraphs, children directly after their parent.
pub(crate) fn body_paragraphs(items: &[BulletItem]) -> Vec<BodyParagraph<'_>> {
    let mut paragraphs = Vec::with_capacity(items.len());
    for item in items {
        paragraphs.push(BodyParagraph {
            level: 0,
            text: item.text(),
        });
        paragraphs.extend(item.children().iter().map(|child| BodyParagraph {
            level: 1,
            text: child,
        }));
    }
    paragraphs
}

/// Font settings for one run.
#[derive(Debug, Clone, Copy)]
struct RunFont<'a> {
    typeface: &'a str,
    size_pt: u32,
    color: Option<RgbColor>,
}

/// Which placeholder of the "Title and Content" layout a shape fills.
#[derive(Debug, Clone, Copy)]
enum Placeholder {
    Title,
    Body,
}

/// Generate `ppt/slides/slideN.xml` for one slide.
pub(crate) fn slide_xml(slide: &Slide, style: &SlideStyle) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    write_slide(&mut writer, slide, style).map_err(xml_error)?;
    String::from_utf8(writer.into_inner()).map_err(|e| Error::XmlError(e.to_string()))
}

fn write_slide(w: &mut XmlWriter, slide: &Slide, style: &SlideStyle) -> quick_xml::Result<()> {
    let title_font = RunFont {
        typeface: &style.font_name,
        size_pt: style.title_size,
        color: Some(style.accent_color),
    };
    let bullet_font = RunFont {
        typeface: &style.font_name,
        size_pt: style.bullet_size,
        color: None,
    };
    let paragraphs = body_paragraphs(&slide.items);

    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    w.create_element("p:sld")
        .with_attributes([("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)])
        .write_inner_content(|w| {
            w.create_element("p:cSld").write_inner_content(|w| {
                w.create_element("p:spTree").write_inner_content(|w| {
                    write_group_properties(w)?;
                    write_shape(w, 2, "Title 1", Placeholder::Title, |w| {
                        write_title_paragraph(w, &slide.title, title_font)
                    })?;
                    write_shape(w, 3, "Content Placeholder 2", Placeholder::Body, |w| {
                        write_body_paragraphs(w, &paragraphs, bullet_font)
                    })
                })?;
                Ok::<_, quick_xml::Error>(())
            })?;
            w.create_element("p:clrMapOvr").write_inner_content(|w| {
                w.create_element("a:masterClrMapping").write_empty()?;
                Ok::<_, quick_xml::Error>(())
            })?;
            Ok::<_, quick_xml::Error>(())
        })?;
    Ok(())
}

fn write_group_properties(w: &mut XmlWriter) -> quick_xml::Result<()> {
    w.create_element("p:nvGrpSpPr").write_inner_content(|w| {
        w.create_element("p:cNvPr")
            .with_attributes([("id", "1"), ("name", "")])
            .write_empty()?;
        w.create_element("p:cNvGrpSpPr").write_empty()?;
        w.create_element("p:nvPr").write_empty()?;
        Ok::<_, quick_xml::Error>(())
    })?;
    w.create_element("p:grpSpPr").write_empty()?;
    Ok(())
}

fn write_shape<F>(
    w: &mut XmlWriter,
    id: u32,
    name: &str,
    placeholder: Placeholder,
    paragraphs: F,
) -> quick_xml::Result<()>
where
    F: Fn(&mut XmlWriter) -> quick_xml::Result<()>,
{
    let id = id.to_string();
    w.create_element("p:sp").write_inner_content(|w| {
        w.create_element("p:nvSpPr").write_inner_content(|w| {
            w.create_element("p:cNvPr")
                .with_attributes([("id", id.as_str()), ("name", name)])
                .write_empty()?;
            w.create_element("p:cNvSpPr").write_inner_content(|w| {
                w.create_element("a:spLocks")
                    .with_attribute(("noGrp", "1"))
                    .write_empty()?;
                Ok::<_, quick_xml::Error>(())
            })?;
            w.create_element("p:nvPr").write_inner_content(|w| {
                let ph = w.create_element("p:ph");
                match placeholder {
                    Placeholder::Title => ph.with_attribute(("type", "title")).write_empty()?,
                    Placeholder::Body => ph.with_attribute(("idx", "1")).write_empty()?,
                };
                Ok::<_, quick_xml::Error>(())
            })?;
            Ok::<_, quick_xml::Error>(())
        })?;
        w.create_element("p:spPr").write_empty()?;
        w.create_element("p:txBody").write_inner_content(|w| {
            w.create_element("a:bodyPr").write_empty()?;
            w.create_element("a:lstStyle").write_empty()?;
            paragraphs(w)
        })?;
        Ok::<_, quick_xml::Error>(())
    })?;
    Ok(())
}

fn write_title_paragraph(w: &mut XmlWriter, title: &str, font: RunFont<'_>) -> quick_xml::Result<()> {
    w.create_element("a:p").write_inner_content(|w| {
        w.create_element("a:pPr")
            .with_attribute(("algn", "l"))
            .write_empty()?;
        // An empty title has no run to carry the font.
        if !title.is_empty() {
            write_run(w, title, font)?;
        }
        Ok::<_, quick_xml::Error>(())
    })?;
    Ok(())
}

fn write_body_paragraphs(
    w: &mut XmlWriter,
    paragraphs: &[BodyParagraph<'_>],
    font: RunFont<'_>,
) -> quick_xml::Result<()> {
    if paragraphs.is_empty() {
        w.create_element("a:p").write_inner_content(|w| write_run(w, "", font))?;
        return Ok(());
    }

    for paragraph in paragraphs {
        w.create_element("a:p").write_inner_content(|w| {
            if paragraph.level > 0 {
                let level = paragraph.level.to_string();
                w.create_element("a:pPr")
                    .with_attribute(("lvl", level.as_str()))
                    .write_empty()?;
            }
            write_run(w, paragraph.text, font)
        })?;
    }
    Ok(())
}

fn write_run(w: &mut XmlWriter, text: &str, font: RunFont<'_>) -> quick_xml::Result<()> {
    let size = font.size_pt.saturating_mul(100).to_string();
    w.create_element("a:r").write_inner_content(|w| {
        w.create_element("a:rPr")
            .with_attributes([("lang", "en-US"), ("sz", size.as_str()), ("dirty", "0")])
            .write_inner_content(|w| {
                if let Some(color) = font.color {
                    let hex = color.to_hex();
                    w.create_element("a:solidFill").write_inner_content(|w| {
                        w.create_element("a:srgbClr")
                            .with_attribute(("val", hex.as_str()))
                            .write_empty()?;
                        Ok::<_, quick_xml::Error>(())
                    })?;
                }
                w.create_element("a:latin")
                    .with_attribute(("typeface", font.typeface))
                    .write_empty()?;
                Ok::<_, quick_xml::Error>(())
            })?;
        w.create_element("a:t")
            .write_text_content(BytesText::new(&escape_control_chars(text)))?;
        Ok::<_, quick_xml::Error>(())
    })?;
    Ok(())
}
