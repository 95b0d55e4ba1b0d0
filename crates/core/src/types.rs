//! Domain types for representing slide content.

use crate::error::Error;
use crate::style::SlideStyle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a slide title is chosen from an OCR transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TitlePolicy {
    /// Use the first normalized line of the transcript.
    #[default]
    FirstLine,
    /// Use the image file name (without extension).
    Filename,
}

impl TitlePolicy {
    /// The command-line name of this policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstLine => "first-line",
            Self::Filename => "filename",
        }
    }
}

impl FromStr for TitlePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-line" => Ok(Self::FirstLine),
            "filename" => Ok(Self::Filename),
            other => Err(Error::InvalidTitlePolicy(other.to_string())),
        }
    }
}

impl fmt::Display for TitlePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The title and bullets derived from one transcript.
///
/// Bullets are pairwise distinct and never case-insensitively equal to the title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideContent {
    /// Slide title.
    pub title: String,

    /// Bullet lines in first-occurrence order.
    pub bullets: Vec<String>,
}

/// One entry in a slide body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BulletItem {
    /// A single top-level bullet.
    Line(String),
    /// A top-level bullet followed by indented sub-bullets.
    Group {
        text: String,
        children: Vec<String>,
    },
}

impl BulletItem {
    /// Create a group bullet from a parent line and its children.
    pub fn group<I, S>(text: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Group {
            text: text.into(),
            children: children.into_iter().map(Into::into).collect(),
        }
    }

    /// The top-level text of this item.
    pub fn text(&self) -> &str {
        match self {
            Self::Line(text) | Self::Group { text, .. } => text,
        }
    }

    /// Sub-bullets of this item (empty for a single line).
    pub fn children(&self) -> &[String] {
        match self {
            Self::Line(_) => &[],
            Self::Group { children, .. } => children.as_slice(),
        }
    }
}

impl From<&str> for BulletItem {
    fn from(text: &str) -> Self {
        Self::Line(text.to_string())
    }
}

impl From<String> for BulletItem {
    fn from(text: String) -> Self {
        Self::Line(text)
    }
}

/// A slide ready to be rendered: a title plus body items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Slide title.
    pub title: String,

    /// Body items in display order.
    pub items: Vec<BulletItem>,
}

impl Slide {
    /// Create a slide from a title and body items.
    pub fn new<I, B>(title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<BulletItem>,
    {
        Self {
            title: title.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<SlideContent> for Slide {
    fn from(content: SlideContent) -> Self {
        Self::new(content.title, content.bullets)
    }
}

/// An ordered list of slides plus the style used to render them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
    /// Fonts, sizes, colors and slide size.
    pub style: SlideStyle,

    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Create an empty deck with the given style.
    pub fn new(style: SlideStyle) -> Self {
        Self {
            style,
            slides: Vec::new(),
        }
    }

    /// Append a slide to the end of the deck.
    pub fn add_slide(&mut self, slide: impl Into<Slide>) {
        self.slides.push(slide.into());
    }

    /// Number of slides in the deck.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_policy_round_trip_names() {
        assert_eq!("first-line".parse::<TitlePolicy>().unwrap(), TitlePolicy::FirstLine);
        assert_eq!("filename".parse::<TitlePolicy>().unwrap(), TitlePolicy::Filename);
        assert_eq!(TitlePolicy::Filename.to_string(), "filename");
        assert_eq!(TitlePolicy::default(), TitlePolicy::FirstLine);
    }

    #[test]
    fn test_title_policy_rejects_unknown() {
        let err = "last-line".parse::<TitlePolicy>().unwrap_err();
        assert!(matches!(err, Error::InvalidTitlePolicy(ref s) if s == "last-line"));
    }

    #[test]
    fn test_slide_from_content() {
        let content = SlideContent {
            title: "Hello".to_string(),
            bullets: vec!["World".to_string()],
        };
        let slide = Slide::from(content);

        assert_eq!(slide.title, "Hello");
        assert_eq!(slide.items, vec![BulletItem::Line("World".to_string())]);
    }

    #[test]
    fn test_bullet_item_accessors() {
        let line = BulletItem::from("Only");
        assert_eq!(line.text(), "Only");
        assert!(line.children().is_empty());

        let group = BulletItem::group("Parent", ["A", "B"]);
        assert_eq!(group.text(), "Parent");
        assert_eq!(group.children(), ["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_deck_preserves_insertion_order() {
        let mut deck = Deck::default();
        assert!(deck.is_empty());

        deck.add_slide(Slide::new("One", Vec::<String>::new()));
        deck.add_slide(Slide::new("Two", ["x"]));

        assert_eq!(deck.len(), 2);
        assert_eq!(deck.slides[0].title, "One");
        assert_eq!(deck.slides[1].title, "Two");
    }
}
