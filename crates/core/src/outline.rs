//! Plain-text deck outline.
//!
//! Renders each slide as a block of lines separated by a blank line, with
//! bold text wrapped in `**`.

use crate::types::{Deck, Slide};

/// Formatter for plain-text deck outlines.
#[derive(Debug, Clone)]
pub struct OutlineFormatter {
    /// Whether to print a `Slide N` header above each block.
    numbered: bool,
}

impl Default for OutlineFormatter {
    fn default() -> Self {
        Self { numbered: true }
    }
}

impl OutlineFormatter {
    /// Create a new formatter with slide headers enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the `Slide N` header lines.
    pub fn with_numbering(mut self, numbered: bool) -> Self {
        self.numbered = numbered;
        self
    }

    /// Format a whole deck.
    ///
    /// # Example output
    /// ```text
    /// Slide 1
    /// Q: 2+2?
    /// - 3
    /// - 4
    ///
    /// Slide 2
    /// Q: 2+2?
    /// - 3
    /// **- 4**
    /// ```
    pub fn format(&self, deck: &Deck) -> String {
        let blocks: Vec<String> = deck
            .slides
            .iter()
            .enumerate()
            .map(|(idx, slide)| self.format_slide(slide, idx + 1))
            .collect();

        blocks.join("\n\n")
    }

    /// Format and add a trailing newline to non-empty output.
    pub fn format_with_newline(&self, deck: &Deck) -> String {
        let formatted = self.format(deck);
        if formatted.is_empty() {
            formatted
        } else {
            format!("{}\n", formatted)
        }
    }

    fn format_slide(&self, slide: &Slide, number: usize) -> String {
        let mut lines = Vec::with_capacity(slide.elements.len() + 1);
        if self.numbered {
            lines.push(format!("Slide {}", number));
        }
        for element in &slide.elements {
            if element.bold {
                lines.push(format!("**{}**", element.text));
            } else {
                lines.push(element.text.clone());
            }
        }
        lines.join("\n")
    }
}
