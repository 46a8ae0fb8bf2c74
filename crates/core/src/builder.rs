//! Deck construction from question records.
//!
//! Every record yields two consecutive slides: the question with its options,
//! then a reveal slide where the correct option is bold.

use crate::types::{Deck, Record, Slide, TextElement};

/// Fixed presentation geometry. Lengths in EMU, font sizes in hundredths of a point.
pub mod layout {
    /// EMU per inch.
    pub const EMU_PER_INCH: i64 = 914_400;

    /// Slide width (10 in, 4:3).
    pub const SLIDE_WIDTH: i64 = 10 * EMU_PER_INCH;
    /// Slide height (7.5 in).
    pub const SLIDE_HEIGHT: i64 = 6_858_000;

    /// Left edge shared by every text box (1 in).
    pub const LEFT: i64 = EMU_PER_INCH;
    /// Width shared by every text box (8 in).
    pub const WIDTH: i64 = 8 * EMU_PER_INCH;

    /// Question box top (0.5 in).
    pub const QUESTION_TOP: i64 = 457_200;
    /// Question box height (1 in).
    pub const QUESTION_HEIGHT: i64 = EMU_PER_INCH;
    /// Question font size (24 pt).
    pub const QUESTION_FONT_SIZE: u32 = 2400;

    /// First option box top (1.5 in).
    pub const OPTION_TOP: i64 = 1_371_600;
    /// Vertical step between option boxes (0.6 in).
    pub const OPTION_STEP: i64 = 548_640;
    /// Option box height (0.5 in).
    pub const OPTION_HEIGHT: i64 = 457_200;
    /// Option font size (18 pt).
    pub const OPTION_FONT_SIZE: u32 = 1800;
}

/// Prefix for the question line.
pub const QUESTION_PREFIX: &str = "Q: ";

/// Prefix for each option line.
pub const OPTION_PREFIX: &str = "- ";

/// Builds quiz decks with the fixed layout.
#[derive(Debug, Clone, Default)]
pub struct DeckBuilder;

impl DeckBuilder {
    /// Create a new deck builder.
    pub fn new() -> Self {
        Self
    }

    /// Build a deck of `2 * records.len()` slides.
    pub fn build(&self, records: &[Record]) -> Deck {
        let mut deck = Deck::new(layout::SLIDE_WIDTH, layout::SLIDE_HEIGHT);

        for (idx, record) in records.iter().enumerate() {
            deck.add_slide(self.question_slide(record, false));
            deck.add_slide(self.question_slide(record, true));

            if !record.options.is_empty() && !record.options.iter().any(|opt| record.is_correct(opt)) {
                log::warn!(
                    "Question {} has no option matching correct answer {:?}; reveal slide has no bold option",
                    idx + 1,
                    record.correct
                );
            }
        }

        log::debug!(
            "Built {} slides from {} question(s)",
            deck.slide_count(),
            records.len()
        );

        deck
    }

    /// Lay out one slide for a record, bolding correct options when `reveal` is set.
    fn question_slide(&self, record: &Record, reveal: bool) -> Slide {
        let mut slide = Slide::new();

        slide.add_element(TextElement {
            text: format!("{}{}", QUESTION_PREFIX, record.question),
            left: layout::LEFT,
            top: layout::QUESTION_TOP,
            width: layout::WIDTH,
            height: layout::QUESTION_HEIGHT,
            font_size: layout::QUESTION_FONT_SIZE,
            bold: false,
        });

        let mut top = layout::OPTION_TOP;
        for option in &record.options {
            slide.add_element(TextElement {
                text: format!("{}{}", OPTION_PREFIX, option),
                left: layout::LEFT,
                top,
                width: layout::WIDTH,
                height: layout::OPTION_HEIGHT,
                font_size: layout::OPTION_FONT_SIZE,
                bold: reveal && record.is_correct(option),
            });
            top += layout::OPTION_STEP;
        }

        slide
    }
}
