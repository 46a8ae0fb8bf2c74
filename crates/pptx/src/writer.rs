//! PPTX file writer implementation.

use crate::package::{self, paths};
use crate::slide::slide_xml;
use quizdeck_core::{Deck, Error, Result};
use std::io::{Cursor, Seek, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Writer for PPTX (Office Open XML) files.
pub struct PptxWriter {
    options: FileOptions,
}

impl PptxWriter {
    /// Create a new PPTX writer.
    ///
    /// Entries are deflated and stamped with a fixed timestamp, so the same
    /// deck always serializes to the same bytes.
    pub fn new() -> Self {
        Self {
            options: FileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .last_modified_time(DateTime::default()),
        }
    }

    /// Serialize a deck into an in-memory .pptx file.
    pub fn write(&self, deck: &Deck) -> Result<Vec<u8>> {
        let cursor = self.write_to(deck, Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }

    /// Serialize a deck into `writer`, returning it once the archive is finished.
    pub fn write_to<W: Write + Seek>(&self, deck: &Deck, writer: W) -> Result<W> {
        let slide_count = deck.slide_count();
        let mut archive = ZipWriter::new(writer);

        self.add_part(&mut archive, paths::CONTENT_TYPES, &package::content_types_xml(slide_count)?)?;
        self.add_part(&mut archive, paths::ROOT_RELS, &package::root_rels_xml()?)?;
        self.add_part(&mut archive, paths::CORE_PROPS, package::CORE_PROPS_XML)?;
        self.add_part(&mut archive, paths::APP_PROPS, &package::app_props_xml(slide_count)?)?;

        self.add_part(
            &mut archive,
            paths::PRESENTATION,
            &package::presentation_xml(slide_count, deck.slide_width, deck.slide_height)?,
        )?;
        self.add_part(
            &mut archive,
            paths::PRESENTATION_RELS,
            &package::presentation_rels_xml(slide_count)?,
        )?;

        self.add_part(&mut archive, paths::SLIDE_MASTER, package::SLIDE_MASTER_XML)?;
        self.add_part(&mut archive, paths::SLIDE_MASTER_RELS, &package::slide_master_rels_xml()?)?;
        self.add_part(&mut archive, paths::SLIDE_LAYOUT, package::SLIDE_LAYOUT_XML)?;
        self.add_part(&mut archive, paths::SLIDE_LAYOUT_RELS, &package::slide_layout_rels_xml()?)?;
        self.add_part(&mut archive, paths::THEME, package::THEME_XML)?;
        self.add_part(&mut archive, paths::PRES_PROPS, package::PRES_PROPS_XML)?;
        self.add_part(&mut archive, paths::VIEW_PROPS, package::VIEW_PROPS_XML)?;
        self.add_part(&mut archive, paths::TABLE_STYLES, package::TABLE_STYLES_XML)?;

        let slide_rels = package::slide_rels_xml()?;
        for (idx, slide) in deck.slides.iter().enumerate() {
            let number = idx + 1;
            self.add_part(&mut archive, &paths::slide(number), &slide_xml(slide)?)?;
            self.add_part(&mut archive, &paths::slide_rels(number), &slide_rels)?;
        }

        let writer = archive
            .finish()
            .map_err(|e| Error::ZipError(format!("Failed to finish archive: {}", e)))?;

        log::debug!("Wrote PPTX package with {} slide(s)", slide_count);

        Ok(writer)
    }

    /// Add one part to the archive.
    fn add_part<W: Write + Seek>(
        &self,
        archive: &mut ZipWriter<W>,
        path: &str,
        content: &str,
    ) -> Result<()> {
        archive
            .start_file(path, self.options)
            .map_err(|e| Error::ZipError(format!("Failed to start '{}': {}", path, e)))?;
        archive
            .write_all(content.as_bytes())
            .map_err(|e| Error::ZipError(format!("Failed to write '{}': {}", path, e)))?;
        Ok(())
    }
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self::new()
    }
}
