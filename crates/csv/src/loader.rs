//! Delimited text loader implementation.

use csv::{ByteRecord, ReaderBuilder};
use quizdeck_core::{Error, Result, Table, TableRow};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Loader for comma- or tab-separated question tables.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    /// Field delimiter (default: comma).
    delimiter: u8,
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvLoader {
    /// Create a new loader with the comma delimiter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Create a loader whose delimiter suits the file extension.
    pub fn for_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "tsv" | "tab" => Self::new().with_delimiter(b'\t'),
            _ => Self::new(),
        }
    }

    /// The delimiter in use.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Load a table from a file.
    pub fn parse_file(&self, path: &Path) -> Result<Table> {
        let file = File::open(path)?;
        self.parse(BufReader::new(file))
    }

    /// Load a table from in-memory text.
    pub fn parse_str(&self, content: &str) -> Result<Table> {
        self.parse(content.as_bytes())
    }

    /// Load a table from a reader.
    ///
    /// The first record is the header row. Empty cells become `None`;
    /// rows shorter than the header are padded with `None`.
    pub fn parse<R: Read>(&self, reader: R) -> Result<Table> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .byte_headers()
            .map_err(|e| Error::CsvError(format!("Failed to read header row: {}", e)))?
            .iter()
            .map(|h| String::from_utf8_lossy(h).into_owned())
            .collect();

        if headers.is_empty() {
            return Err(Error::CsvError("Input has no header row".to_string()));
        }

        let mut table = Table::new(headers);
        let mut record = ByteRecord::new();
        let mut index = 0;

        loop {
            let more = reader.read_byte_record(&mut record).map_err(|e| {
                Error::CsvError(format!("Failed to parse row {}: {}", index + 1, e))
            })?;
            if !more {
                break;
            }

            table.add_row(self.row_from_record(index, &record, table.headers.len()));
            index += 1;
        }

        log::debug!(
            "Loaded {} row(s) with {} column(s)",
            table.rows.len(),
            table.headers.len()
        );

        Ok(table)
    }

    /// Convert a raw record into a row aligned with `width` columns.
    fn row_from_record(&self, index: usize, record: &ByteRecord, width: usize) -> TableRow {
        if record.len() > width {
            log::debug!(
                "Row {} has {} cells, dropping {} beyond the header",
                index + 1,
                record.len(),
                record.len() - width
            );
        }

        let cells = (0..width)
            .map(|idx| match record.get(idx) {
                Some(cell) if !cell.is_empty() => {
                    Some(String::from_utf8_lossy(cell).into_owned())
                }
                _ => None,
            })
            .collect();

        TableRow::new(cells)
    }
}
