//! Domain types for quiz tables and the slide decks built from them.

use serde::{Deserialize, Serialize};

/// A delimited table as produced by the tabular loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Column names in source order, verbatim.
    pub headers: Vec<String>,

    /// Rows in source order, each aligned with `headers`.
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create an empty table with the given headers.
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Index of the first column named exactly `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Value of `column` in row `row`, or `None` if the cell is missing.
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)
    }
}

/// One row of a [`Table`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cell values; `None` for blank or absent cells.
    pub cells: Vec<Option<String>>,
}

impl TableRow {
    /// Create a row from its cells.
    pub fn new(cells: Vec<Option<String>>) -> Self {
        Self { cells }
    }

    /// Cell at `idx`, treating out-of-range cells as missing.
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.cells.get(idx).and_then(|c| c.as_deref())
    }
}

/// One multiple-choice question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The question text.
    pub question: String,

    /// Text of the correct option, compared after trimming.
    pub correct: String,

    /// Non-missing options in column order.
    pub options: Vec<String>,
}

impl Record {
    /// Create a record.
    pub fn new(
        question: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            correct: correct.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `option` is the correct answer.
    pub fn is_correct(&self, option: &str) -> bool {
        option.trim() == self.correct.trim()
    }
}

/// A positioned text box on a slide.
///
/// Geometry is in EMU (914400 per inch), font size in hundredths of a point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextElement {
    pub text: String,
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
    pub font_size: u32,
    pub bold: bool,
}

/// A single slide: text elements in drawing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub elements: Vec<TextElement>,
}

impl Slide {
    /// Create an empty slide.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text element to this slide.
    pub fn add_element(&mut self, element: TextElement) {
        self.elements.push(element);
    }

    /// Elements rendered bold.
    pub fn bold_elements(&self) -> impl Iterator<Item = &TextElement> {
        self.elements.iter().filter(|e| e.bold)
    }

    /// Text of every element, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.elements.iter().map(|e| e.text.as_str()).collect()
    }
}

/// An ordered sequence of slides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Slide width in EMU.
    pub slide_width: i64,

    /// Slide height in EMU.
    pub slide_height: i64,

    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Create an empty deck with the given slide size.
    pub fn new(slide_width: i64, slide_height: i64) -> Self {
        Self {
            slide_width,
            slide_height,
            slides: Vec::new(),
        }
    }

    /// Add a slide to the deck.
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

/// The format of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputFormat {
    /// Comma-separated question table.
    Csv,
    /// Tab-separated question table.
    Tsv,
    /// An existing PPTX deck (for inspection).
    Pptx,
}

impl InputFormat {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "csv" | "txt" => Some(Self::Csv),
            "tsv" | "tab" => Some(Self::Tsv),
            "pptx" => Some(Self::Pptx),
            _ => None,
        }
    }

    /// Detect format from file magic bytes.
    ///
    /// Only zip containers are recognised; delimited text has no magic.
    pub fn from_magic(bytes: &[u8]) -> Option<Self> {
        // PPTX is a ZIP file (PK\x03\x04)
        if bytes.starts_with(&[0x50, 0x4B, 0x03, 0x04]) {
            return Some(Self::Pptx);
        }

        None
    }

    /// Whether this format holds a question table.
    pub fn is_tabular(&self) -> bool {
        matches!(self, Self::Csv | Self::Tsv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(InputFormat::from_extension("csv"), Some(InputFormat::Csv));
        assert_eq!(InputFormat::from_extension("CSV"), Some(InputFormat::Csv));
        assert_eq!(InputFormat::from_extension("tsv"), Some(InputFormat::Tsv));
        assert_eq!(InputFormat::from_extension("pptx"), Some(InputFormat::Pptx));
        assert_eq!(InputFormat::from_extension("xlsx"), None);
    }

    #[test]
    fn test_format_from_magic() {
        assert_eq!(
            InputFormat::from_magic(&[0x50, 0x4B, 0x03, 0x04, 0x14, 0x00]),
            Some(InputFormat::Pptx)
        );
        assert_eq!(InputFormat::from_magic(b"question,correct"), None);
        assert_eq!(InputFormat::from_magic(b"PK"), None);
    }

    #[test]
    fn test_table_value_lookup() {
        let mut table = Table::new(vec!["question".into(), "option1".into()]);
        table.add_row(TableRow::new(vec![Some("2+2?".into())]));

        assert_eq!(table.value(0, "question"), Some("2+2?"));
        assert_eq!(table.value(0, "option1"), None);
        assert_eq!(table.value(0, "missing"), None);
        assert_eq!(table.value(1, "question"), None);
    }

    #[test]
    fn test_record_is_correct_trims_both_sides() {
        let record = Record::new("2+2?", ["3", " 4", "5"], "4 ");
        assert!(record.is_correct(" 4"));
        assert!(record.is_correct("4"));
        assert!(!record.is_correct("3"));
    }

    #[test]
    fn test_record_is_correct_case_sensitive() {
        let record = Record::new("Capital of France?", ["paris", "Lyon"], "Paris");
        assert!(!record.is_correct("paris"));
    }
}
