//! Title and bullet extraction from normalized transcript lines.

use crate::types::{SlideContent, TitlePolicy};

/// Picks a slide title and a deduplicated bullet list from normalized lines.
#[derive(Debug, Clone, Default)]
pub struct TitleExtractor {
    policy: TitlePolicy,
}

impl TitleExtractor {
    /// Create an extractor using the given title policy.
    pub fn new(policy: TitlePolicy) -> Self {
        Self { policy }
    }

    /// Build the slide content for one transcript.
    ///
    /// `lines` must already be normalized. `fallback` (normally the image
    /// file stem) is used verbatim as the title under [`TitlePolicy::Filename`]
    /// or when there are no lines.
    ///
    /// Under the filename policy every line stays a bullet candidate,
    /// including a first line that reads like a heading.
    pub fn extract(&self, lines: &[String], fallback: &str) -> SlideContent {
        let first_line = matches!(self.policy, TitlePolicy::FirstLine);

        let title = match lines.first() {
            Some(first) if first_line => first.clone(),
            _ => fallback.to_string(),
        };

        let candidates = if first_line && lines.len() > 1 {
            &lines[1..]
        } else {
            lines
        };

        let title_key = title.to_lowercase();
        let mut bullets: Vec<String> = Vec::new();
        for candidate in candidates {
            if candidate.to_lowercase() == title_key {
                continue;
            }
            if !bullets.contains(candidate) {
                bullets.push(candidate.clone());
            }
        }

        log::debug!(
            "Extracted title {:?} with {} bullet(s) from {} line(s)",
            title,
            bullets.len(),
            lines.len()
        );

        SlideContent { title, bullets }
    }
}
