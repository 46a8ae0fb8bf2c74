//! Slide markup generation.

use crate::package::{NS_A, NS_P, NS_R, SP_TREE_HEADER};
use quick_xml::escape::escape;
use quizdeck_core::{Result, Slide, TextElement};
use std::fmt::Write as FmtWrite;

/// Generate `ppt/slides/slideN.xml` content for a slide.
pub fn slide_xml(slide: &Slide) -> Result<String> {
    let mut xml = String::with_capacity(1024 + slide.elements.len() * 640);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        NS_A, NS_R, NS_P
    )?;
    xml.push_str("<p:cSld><p:spTree>");
    xml.push_str(SP_TREE_HEADER);

    // Shape id 1 is the group shape itself.
    for (idx, element) in slide.elements.iter().enumerate() {
        write_text_box(&mut xml, idx as u32 + 2, element)?;
    }

    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sld>");

    Ok(xml)
}

/// Write one text box shape.
fn write_text_box(xml: &mut String, shape_id: u32, element: &TextElement) -> Result<()> {
    xml.push_str("<p:sp><p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="TextBox {}"/>"#,
        shape_id,
        shape_id - 1
    )?;
    xml.push_str(r#"<p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>"#);

    xml.push_str("<p:spPr><a:xfrm>");
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, element.left, element.top)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, element.width, element.height)?;
    xml.push_str("</a:xfrm>");
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/>"#);
    xml.push_str("</p:spPr>");

    xml.push_str("<p:txBody>");
    xml.push_str(r#"<a:bodyPr wrap="none"><a:spAutoFit/></a:bodyPr>"#);
    xml.push_str("<a:lstStyle/><a:p>");

    let run_props = run_properties(element)?;
    for (idx, line) in text_lines(&element.text).iter().enumerate() {
        if idx > 0 {
            write!(xml, "<a:br>{}</a:br>", run_props)?;
        }
        write!(
            xml,
            "<a:r>{}<a:t>{}</a:t></a:r>",
            run_props,
            escape(line)
        )?;
    }

    xml.push_str("</a:p></p:txBody>");
    xml.push_str("</p:sp>");

    Ok(())
}

/// Split text into the lines of one paragraph.
///
/// `\n`, `\r\n`, a lone `\r` and vertical tab all end a line. Characters
/// that XML 1.0 cannot carry are dropped; tab is kept.
fn text_lines(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .split(|c: char| matches!(c, '\n' | '\r' | '\u{0B}'))
        .map(|line| line.chars().filter(|&c| is_xml_char(c)).collect())
        .collect()
}

fn is_xml_char(c: char) -> bool {
    c == '\t' || (c >= ' ' && c != '\u{FFFE}' && c != '\u{FFFF}')
}

/// `a:rPr` element carrying the font size and bold flag.
fn run_properties(element: &TextElement) -> Result<String> {
    let mut props = String::with_capacity(48);
    write!(props, r#"<a:rPr lang="en-US" sz="{}""#, element.font_size)?;
    if element.bold {
        props.push_str(r#" b="1""#);
    }
    props.push_str(r#" dirty="0"/>"#);
    Ok(props)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(text: &str, bold: bool) -> TextElement {
        TextElement {
            text: text.to_string(),
            left: 914_400,
            top: 1_371_600,
            width: 7_315_200,
            height: 457_200,
            font_size: 1800,
            bold,
        }
    }

    #[test]
    fn test_text_box_geometry_and_size() {
        let mut slide = Slide::new();
        slide.add_element(element("- 4", false));
        let xml = slide_xml(&slide).unwrap();

        assert!(xml.contains(r#"<a:off x="914400" y="1371600"/>"#));
        assert!(xml.contains(r#"<a:ext cx="7315200" cy="457200"/>"#));
        assert!(xml.contains(r#"<a:rPr lang="en-US" sz="1800" dirty="0"/>"#));
        assert!(xml.contains("<a:t>- 4</a:t>"));
        assert!(xml.contains(r#"<p:cNvPr id="2" name="TextBox 1"/>"#));
    }

    #[test]
    fn test_bold_run() {
        let mut slide = Slide::new();
        slide.add_element(element("- 4", true));
        let xml = slide_xml(&slide).unwrap();
        assert!(xml.contains(r#"sz="1800" b="1""#));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut slide = Slide::new();
        slide.add_element(element("Q: is 1 < 2 & \"true\"?", false));
        let xml = slide_xml(&slide).unwrap();
        assert!(xml.contains("<a:t>Q: is 1 &lt; 2 &amp; &quot;true&quot;?</a:t>"));
    }

    #[test]
    fn test_newlines_become_breaks() {
        let mut slide = Slide::new();
        slide.add_element(element("first\r\nsecond", false));
        let xml = slide_xml(&slide).unwrap();
        assert!(xml.contains("<a:t>first</a:t></a:r><a:br>"));
        assert!(xml.contains("<a:t>second</a:t>"));
        assert!(!xml.contains('\r'));
    }

    #[test]
    fn test_vertical_tab_breaks_and_control_chars_dropped() {
        let mut slide = Slide::new();
        slide.add_element(element("a\u{0B}b\u{1}", false));
        slide.add_element(element("x\u{0C}\ry\tz", false));
        let xml = slide_xml(&slide).unwrap();

        assert!(xml.contains("<a:t>a</a:t></a:r><a:br>"));
        assert!(xml.contains("<a:t>b</a:t>"));
        assert!(xml.contains("<a:t>x</a:t></a:r><a:br>"));
        assert!(xml.contains("<a:t>y\tz</a:t>"));
        assert!(!xml.chars().any(|c| c < ' ' && c != '\t'));
    }

    #[test]
    fn test_text_lines() {
        assert_eq!(text_lines("one"), vec!["one"]);
        assert_eq!(text_lines("a\r\nb\rc\nd\u{0B}e"), vec!["a", "b", "c", "d", "e"]);
        assert_eq!(text_lines("\u{0}\u{1F}ok\u{FFFF}"), vec!["ok"]);
        assert_eq!(text_lines(""), vec![""]);
    }

    #[test]
    fn test_empty_slide_has_only_group() {
        let xml = slide_xml(&Slide::new()).unwrap();
        assert!(!xml.contains("<p:sp>"));
        assert!(xml.contains("<p:spTree>"));
    }
}
