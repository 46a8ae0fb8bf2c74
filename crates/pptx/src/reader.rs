//! PPTX file reader implementation.
//!
//! Reads the text boxes of a deck back into a [`Deck`], in presentation
//! order, keeping geometry, font size and bold state.

use crate::package::paths;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use quizdeck_core::{Deck, Error, Result, Slide, TextElement};
use std::collections::HashMap;
use std::io::{Read, Seek};
use zip::ZipArchive;

/// Font size assumed when a run carries no `sz` attribute (18 pt).
const DEFAULT_FONT_SIZE: u32 = 1800;

/// Reader for PPTX (Office Open XML) files.
pub struct PptxReader;

impl PptxReader {
    /// Create a new PPTX reader.
    pub fn new() -> Self {
        Self
    }

    /// Read a deck from a .pptx file.
    pub fn read<R: Read + Seek>(&self, reader: R) -> Result<Deck> {
        let mut archive = ZipArchive::new(reader)
            .map_err(|e| Error::ZipError(format!("Failed to open ZIP: {}", e)))?;

        let rels_content = self.read_file_from_archive(&mut archive, paths::PRESENTATION_RELS)?;
        let targets = self.parse_relationships(&rels_content)?;

        let presentation = self.read_file_from_archive(&mut archive, paths::PRESENTATION)?;
        let (slide_ids, width, height) = self.parse_presentation(&presentation)?;

        let mut deck = Deck::new(width, height);
        for rel_id in &slide_ids {
            let target = targets.get(rel_id).ok_or_else(|| {
                Error::CorruptedFile(format!("Slide relationship '{}' has no target", rel_id))
            })?;
            let slide_path = resolve_target(target);
            let content = self.read_file_from_archive(&mut archive, &slide_path)?;
            deck.add_slide(self.parse_slide(&content));
        }

        log::debug!("Read {} slide(s)", deck.slide_count());

        Ok(deck)
    }

    /// Map relationship ids to targets.
    fn parse_relationships(&self, xml_content: &str) -> Result<HashMap<String, String>> {
        let mut targets = HashMap::new();
        let mut reader = Reader::from_str(xml_content);
        reader.trim_text(true);

        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if local_name(e.name().as_ref()) == b"Relationship" =>
                {
                    let id = attribute(e, b"Id");
                    let target = attribute(e, b"Target");
                    if let (Some(id), Some(target)) = (id, target) {
                        targets.insert(id, target);
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

        Ok(targets)
    }

    /// Slide relationship ids in presentation order, plus the slide size.
    fn parse_presentation(&self, xml_content: &str) -> Result<(Vec<String>, i64, i64)> {
        let mut slide_ids = Vec::new();
        let mut width = 0;
        let mut height = 0;

        let mut reader = Reader::from_str(xml_content);
        reader.trim_text(true);

        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    match local_name(e.name().as_ref()) {
                        b"sldId" => {
                            if let Some(rel_id) = attribute(e, b"r:id") {
                                slide_ids.push(rel_id);
                            }
                        }
                        b"sldSz" => {
                            width = parse_attribute(e, b"cx").unwrap_or_default();
                            height = parse_attribute(e, b"cy").unwrap_or_default();
                        }
                        _ => {}
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::XmlError(format!(
                        "Error parsing presentation: {}",
                        e
                    )));
                }
                _ => {}
            }
        }

        Ok((slide_ids, width, height))
    }

    /// Extract the text boxes of one slide.
    fn parse_slide(&self, xml_content: &str) -> Slide {
        let mut slide = Slide::new();
        // Text is kept verbatim, including leading and trailing spaces.
        let mut reader = Reader::from_str(xml_content);

        let mut current_shape: Option<ShapeInfo> = None;
        let mut in_text_body = false;
        let mut in_text = false;
        let mut paragraphs = 0usize;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => match local_name(e.name().as_ref()) {
                    b"sp" => current_shape = Some(ShapeInfo::default()),
                    b"txBody" => in_text_body = true,
                    b"p" if in_text_body => {
                        if let Some(ref mut shape) = current_shape {
                            if paragraphs > 0 {
                                shape.text.push('\n');
                            }
                            shape.has_text = true;
                        }
                        paragraphs += 1;
                    }
                    b"t" if in_text_body => in_text = true,
                    b"br" if in_text_body => {
                        if let Some(ref mut shape) = current_shape {
                            shape.text.push('\n');
                        }
                    }
                    b"rPr" if in_text_body => {
                        self.apply_text_properties(&mut current_shape, e, PropertyLevel::Run)
                    }
                    b"defRPr" if in_text_body => {
                        self.apply_text_properties(&mut current_shape, e, PropertyLevel::Paragraph)
                    }
                    _ => {}
                },
                Ok(Event::Empty(ref e)) => match local_name(e.name().as_ref()) {
                    b"off" => {
                        if let Some(ref mut shape) = current_shape {
                            shape.left = parse_attribute(e, b"x").unwrap_or(shape.left);
                            shape.top = parse_attribute(e, b"y").unwrap_or(shape.top);
                        }
                    }
                    b"ext" => {
                        if let Some(ref mut shape) = current_shape {
                            shape.width = parse_attribute(e, b"cx").unwrap_or(shape.width);
                            shape.height = parse_attribute(e, b"cy").unwrap_or(shape.height);
                        }
                    }
                    b"br" if in_text_body => {
                        if let Some(ref mut shape) = current_shape {
                            shape.text.push('\n');
                        }
                    }
                    b"rPr" if in_text_body => {
                        self.apply_text_properties(&mut current_shape, e, PropertyLevel::Run)
                    }
                    b"defRPr" if in_text_body => {
                        self.apply_text_properties(&mut current_shape, e, PropertyLevel::Paragraph)
                    }
                    _ => {}
                },
                Ok(Event::Text(ref e)) => {
                    if in_text {
                        if let Some(ref mut shape) = current_shape {
                            let text = e.unescape().unwrap_or_default();
                            shape.text.push_str(&text);
                        }
                    }
                }
                Ok(Event::End(ref e)) => match local_name(e.name().as_ref()) {
                    b"sp" => {
                        if let Some(shape) = current_shape.take() {
                            if shape.has_text {
                                slide.add_element(shape.into_element());
                            }
                        }
                        in_text_body = false;
                        in_text = false;
                        paragraphs = 0;
                    }
                    b"txBody" => in_text_body = false,
                    b"t" => in_text = false,
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    log::warn!("XML parsing error in slide (stopping): {}", e);
                    break;
                }
                _ => {}
            }
        }

        slide
    }

    /// Record size and bold from the first `rPr` or `defRPr` of a shape.
    ///
    /// Run properties win over paragraph defaults when both are present.
    fn apply_text_properties(
        &self,
        shape: &mut Option<ShapeInfo>,
        e: &BytesStart<'_>,
        level: PropertyLevel,
    ) {
        let Some(shape) = shape else {
            return;
        };
        let props = match level {
            PropertyLevel::Run => &mut shape.run_props,
            PropertyLevel::Paragraph => &mut shape.paragraph_props,
        };
        if props.is_none() {
            *props = Some(TextProps {
                size: parse_attribute(e, b"sz"),
                bold: attribute(e, b"b").map(|b| b == "1" || b == "true"),
            });
        }
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

/// Where a text property element sits.
#[derive(Debug, Clone, Copy)]
enum PropertyLevel {
    /// `a:rPr` on a run.
    Run,
    /// `a:defRPr` paragraph default.
    Paragraph,
}

/// Size and bold as written on one property element.
#[derive(Debug, Default, Clone, Copy)]
struct TextProps {
    size: Option<u32>,
    bold: Option<bool>,
}

/// Information about a shape collected while scanning slide XML.
#[derive(Debug, Default)]
struct ShapeInfo {
    text: String,
    has_text: bool,
    left: i64,
    top: i64,
    width: i64,
    height: i64,
    run_props: Option<TextProps>,
    paragraph_props: Option<TextProps>,
}

impl ShapeInfo {
    fn into_element(self) -> TextElement {
        let run = self.run_props.unwrap_or_default();
        let paragraph = self.paragraph_props.unwrap_or_default();
        TextElement {
            text: self.text,
            left: self.left,
            top: self.top,
            width: self.width,
            height: self.height,
            font_size: run.size.or(paragraph.size).unwrap_or(DEFAULT_FONT_SIZE),
            bold: run.bold.or(paragraph.bold).unwrap_or(false),
        }
    }
}

/// Extract the local name from a potentially namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}

/// Value of the attribute with the exact qualified name `key`.
fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
}

fn parse_attribute<T: std::str::FromStr>(e: &BytesStart<'_>, key: &[u8]) -> Option<T> {
    attribute(e, key).and_then(|v| v.parse().ok())
}

/// Resolve a relationship target relative to `ppt/`.
fn resolve_target(target: &str) -> String {
    if let Some(stripped) = target.strip_prefix('/') {
        stripped.to_string()
    } else {
        format!("ppt/{}", target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PptxWriter;
    use quizdeck_core::{DeckBuilder, Record};
    use std::io::Cursor;

    fn round_trip(records: &[Record]) -> (Deck, Deck) {
        let built = DeckBuilder::new().build(records);
        let bytes = PptxWriter::new().write(&built).unwrap();
        let read = PptxReader::new().read(Cursor::new(bytes)).unwrap();
        (built, read)
    }

    #[test]
    fn test_round_trip_preserves_deck() {
        let (built, read) = round_trip(&[
            Record::new("2+2?", ["3", "4", "5"], "4"),
            Record::new("Tom & Jerry <cartoon>?", ["  padded", "\"quoted\""], "padded"),
            Record::new("No options", Vec::<String>::new(), ""),
        ]);
        assert_eq!(read, built);
    }

    #[test]
    fn test_round_trip_bolds_only_answer() {
        let (_, read) = round_trip(&[Record::new("2+2?", ["3", "4", "5"], "4 ")]);
        assert_eq!(read.slide_count(), 2);

        let bold: Vec<&str> = read.slides[1]
            .bold_elements()
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(bold, vec!["- 4"]);
        assert_eq!(read.slides[0].bold_elements().count(), 0);
    }

    #[test]
    fn test_round_trip_multiline_text() {
        let (built, read) = round_trip(&[Record::new("line one\nline two", ["a"], "a")]);
        assert_eq!(read.slides[0].elements[0].text, "Q: line one\nline two");
        assert_eq!(read, built);
    }

    #[test]
    fn test_generation_is_idempotent_in_content() {
        let records = vec![
            Record::new("2+2?", ["3", "4", "5"], "4"),
            Record::new("1+1?", ["2", "3"], "2"),
        ];
        let (_, first) = round_trip(&records);
        let (_, second) = round_trip(&records);
        assert_eq!(first, second);
    }

    #[test]
    fn test_not_a_zip() {
        let result = PptxReader::new().read(Cursor::new(b"question,correct\n".to_vec()));
        assert!(matches!(result, Err(Error::ZipError(_))));
    }

    #[test]
    fn test_parse_slide_multiple_paragraphs() {
        let xml = r#"<p:sld xmlns:p="p" xmlns:a="a"><p:cSld><p:spTree>
            <p:sp><p:spPr><a:xfrm><a:off x="10" y="20"/><a:ext cx="30" cy="40"/></a:xfrm></p:spPr>
            <p:txBody><a:bodyPr/><a:p><a:r><a:rPr sz="2000" b="1"/><a:t>one</a:t></a:r></a:p>
            <a:p><a:r><a:t>two</a:t></a:r></a:p></p:txBody></p:sp>
            <p:sp><p:spPr/></p:sp>
            </p:spTree></p:cSld></p:sld>"#;
        let slide = PptxReader::new().parse_slide(xml);

        assert_eq!(slide.elements.len(), 1);
        let element = &slide.elements[0];
        assert_eq!(element.text, "one\ntwo");
        assert_eq!((element.left, element.top), (10, 20));
        assert_eq!((element.width, element.height), (30, 40));
        assert_eq!(element.font_size, 2000);
        assert!(element.bold);
    }

    #[test]
    fn test_parse_slide_paragraph_default_properties() {
        // Size and bold set on the paragraph rather than the run.
        let xml = r#"<p:sld xmlns:p="p" xmlns:a="a"><p:cSld><p:spTree>
            <p:sp><p:spPr><a:xfrm><a:off x="1" y="2"/><a:ext cx="3" cy="4"/></a:xfrm></p:spPr>
            <p:txBody><a:bodyPr/><a:p><a:pPr><a:defRPr sz="1800" b="1"/></a:pPr>
            <a:r><a:t>- 4</a:t></a:r></a:p></p:txBody></p:sp>
            <p:sp><p:txBody><a:bodyPr/><a:p><a:pPr><a:defRPr sz="2400" b="1"/></a:pPr>
            <a:r><a:rPr b="0"/><a:t>- 5</a:t></a:r></a:p></p:txBody></p:sp>
            <p:sp><p:txBody><a:bodyPr/><a:p><a:r><a:t>- 6</a:t></a:r></a:p></p:txBody></p:sp>
            </p:spTree></p:cSld></p:sld>"#;
        let slide = PptxReader::new().parse_slide(xml);
        assert_eq!(slide.elements.len(), 3);

        let answer = &slide.elements[0];
        assert_eq!(answer.text, "- 4");
        assert_eq!(answer.font_size, 1800);
        assert!(answer.bold);

        let overridden = &slide.elements[1];
        assert_eq!(overridden.font_size, 2400);
        assert!(!overridden.bold);

        let plain = &slide.elements[2];
        assert_eq!(plain.font_size, DEFAULT_FONT_SIZE);
        assert!(!plain.bold);
    }

    #[test]
    fn test_resolve_target() {
        assert_eq!(resolve_target("slides/slide1.xml"), "ppt/slides/slide1.xml");
        assert_eq!(resolve_target("/ppt/slides/slide1.xml"), "ppt/slides/slide1.xml");
    }

    #[test]
    fn test_local_name() {
        assert_eq!(local_name(b"p:sp"), b"sp");
        assert_eq!(local_name(b"a:t"), b"t");
        assert_eq!(local_name(b"sp"), b"sp");
    }
}
