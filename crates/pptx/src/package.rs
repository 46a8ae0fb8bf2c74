//! Package-level parts of a minimal PresentationML document.
//!
//! One slide master, one blank layout and one theme are shared by every
//! slide. The fixed parts are static markup; the parts that list slides are
//! generated.

use quizdeck_core::Result;
use std::fmt::Write as FmtWrite;

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

pub(crate) const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
pub(crate) const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub(crate) const NS_R: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Relationship type URIs.
pub mod rel_types {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const EXTENDED_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
    pub const SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
    pub const SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
    pub const SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
    pub const THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
    pub const PRES_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps";
    pub const VIEW_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/viewProps";
    pub const TABLE_STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/tableStyles";
}

/// Part names inside the archive.
pub mod paths {
    pub const CONTENT_TYPES: &str = "[Content_Types].xml";
    pub const ROOT_RELS: &str = "_rels/.rels";
    pub const CORE_PROPS: &str = "docProps/core.xml";
    pub const APP_PROPS: &str = "docProps/app.xml";
    pub const PRESENTATION: &str = "ppt/presentation.xml";
    pub const PRESENTATION_RELS: &str = "ppt/_rels/presentation.xml.rels";
    pub const SLIDE_MASTER: &str = "ppt/slideMasters/slideMaster1.xml";
    pub const SLIDE_MASTER_RELS: &str = "ppt/slideMasters/_rels/slideMaster1.xml.rels";
    pub const SLIDE_LAYOUT: &str = "ppt/slideLayouts/slideLayout1.xml";
    pub const SLIDE_LAYOUT_RELS: &str = "ppt/slideLayouts/_rels/slideLayout1.xml.rels";
    pub const THEME: &str = "ppt/theme/theme1.xml";
    pub const PRES_PROPS: &str = "ppt/presProps.xml";
    pub const VIEW_PROPS: &str = "ppt/viewProps.xml";
    pub const TABLE_STYLES: &str = "ppt/tableStyles.xml";

    /// Part name of the 1-based slide `number`.
    pub fn slide(number: usize) -> String {
        format!("ppt/slides/slide{}.xml", number)
    }

    /// Relationships part of the 1-based slide `number`.
    pub fn slide_rels(number: usize) -> String {
        format!("ppt/slides/_rels/slide{}.xml.rels", number)
    }
}

mod content_types {
    pub const PRESENTATION: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
    pub const SLIDE_MASTER: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
    pub const SLIDE_LAYOUT: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
    pub const SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
    pub const THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
    pub const PRES_PROPS: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presProps+xml";
    pub const VIEW_PROPS: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml";
    pub const TABLE_STYLES: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml";
    pub const CORE_PROPS: &str = "application/vnd.openxmlformats-package.core-properties+xml";
    pub const APP_PROPS: &str =
        "application/vnd.openxmlformats-officedocument.extended-properties+xml";
}

/// First slide id; lower values are reserved.
pub const FIRST_SLIDE_ID: usize = 256;

/// Relationship id of the 1-based slide `number` within presentation.xml.rels.
///
/// `rId1` is the slide master, slides follow.
pub fn slide_rel_id(number: usize) -> String {
    format!("rId{}", number + 1)
}

/// A single entry in a relationships part.
struct Relationship<'a> {
    id: String,
    rel_type: &'a str,
    target: String,
}

fn relationships_xml(rels: &[Relationship<'_>]) -> Result<String> {
    let mut xml = String::with_capacity(256 + rels.len() * 160);
    xml.push_str(XML_DECL);
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for rel in rels {
        write!(
            xml,
            r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
            rel.id, rel.rel_type, rel.target
        )?;
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

/// `[Content_Types].xml` for a deck of `slide_count` slides.
pub fn content_types_xml(slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(2048 + slide_count * 128);
    xml.push_str(XML_DECL);
    xml.push_str(
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    );
    xml.push_str(
        r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    );
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);

    let fixed = [
        (paths::PRESENTATION, content_types::PRESENTATION),
        (paths::SLIDE_MASTER, content_types::SLIDE_MASTER),
        (paths::SLIDE_LAYOUT, content_types::SLIDE_LAYOUT),
        (paths::THEME, content_types::THEME),
        (paths::PRES_PROPS, content_types::PRES_PROPS),
        (paths::VIEW_PROPS, content_types::VIEW_PROPS),
        (paths::TABLE_STYLES, content_types::TABLE_STYLES),
        (paths::CORE_PROPS, content_types::CORE_PROPS),
        (paths::APP_PROPS, content_types::APP_PROPS),
    ];
    for (path, content_type) in fixed {
        write!(
            xml,
            r#"<Override PartName="/{}" ContentType="{}"/>"#,
            path, content_type
        )?;
    }
    for number in 1..=slide_count {
        write!(
            xml,
            r#"<Override PartName="/{}" ContentType="{}"/>"#,
            paths::slide(number),
            content_types::SLIDE
        )?;
    }

    xml.push_str("</Types>");
    Ok(xml)
}

/// Package relationships (`_rels/.rels`).
pub fn root_rels_xml() -> Result<String> {
    relationships_xml(&[
        Relationship {
            id: "rId1".to_string(),
            rel_type: rel_types::OFFICE_DOCUMENT,
            target: paths::PRESENTATION.to_string(),
        },
        Relationship {
            id: "rId2".to_string(),
            rel_type: rel_types::CORE_PROPERTIES,
            target: paths::CORE_PROPS.to_string(),
        },
        Relationship {
            id: "rId3".to_string(),
            rel_type: rel_types::EXTENDED_PROPERTIES,
            target: paths::APP_PROPS.to_string(),
        },
    ])
}

/// `ppt/presentation.xml` listing `slide_count` slides.
pub fn presentation_xml(slide_count: usize, slide_width: i64, slide_height: i64) -> Result<String> {
    let mut xml = String::with_capacity(1024 + slide_count * 48);
    xml.push_str(XML_DECL);
    write!(
        xml,
        r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
        NS_A, NS_R, NS_P
    )?;

    xml.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#);

    if slide_count > 0 {
        xml.push_str("<p:sldIdLst>");
        for number in 1..=slide_count {
            write!(
                xml,
                r#"<p:sldId id="{}" r:id="{}"/>"#,
                FIRST_SLIDE_ID + number - 1,
                slide_rel_id(number)
            )?;
        }
        xml.push_str("</p:sldIdLst>");
    }

    write!(
        xml,
        r#"<p:sldSz cx="{}" cy="{}" type="screen4x3"/>"#,
        slide_width, slide_height
    )?;
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");

    Ok(xml)
}

/// `ppt/_rels/presentation.xml.rels` for `slide_count` slides.
pub fn presentation_rels_xml(slide_count: usize) -> Result<String> {
    let mut rels = Vec::with_capacity(slide_count + 5);
    rels.push(Relationship {
        id: "rId1".to_string(),
        rel_type: rel_types::SLIDE_MASTER,
        target: "slideMasters/slideMaster1.xml".to_string(),
    });
    for number in 1..=slide_count {
        rels.push(Relationship {
            id: slide_rel_id(number),
            rel_type: rel_types::SLIDE,
            target: format!("slides/slide{}.xml", number),
        });
    }

    let trailing = [
        (rel_types::THEME, "theme/theme1.xml"),
        (rel_types::PRES_PROPS, "presProps.xml"),
        (rel_types::VIEW_PROPS, "viewProps.xml"),
        (rel_types::TABLE_STYLES, "tableStyles.xml"),
    ];
    for (offset, (rel_type, target)) in trailing.into_iter().enumerate() {
        rels.push(Relationship {
            id: format!("rId{}", slide_count + 2 + offset),
            rel_type,
            target: target.to_string(),
        });
    }

    relationships_xml(&rels)
}

/// Relationships of a slide: only its layout.
pub fn slide_rels_xml() -> Result<String> {
    relationships_xml(&[Relationship {
        id: "rId1".to_string(),
        rel_type: rel_types::SLIDE_LAYOUT,
        target: "../slideLayouts/slideLayout1.xml".to_string(),
    }])
}

/// Relationships of the slide master: its layout and the theme.
pub fn slide_master_rels_xml() -> Result<String> {
    relationships_xml(&[
        Relationship {
            id: "rId1".to_string(),
            rel_type: rel_types::SLIDE_LAYOUT,
            target: "../slideLayouts/slideLayout1.xml".to_string(),
        },
        Relationship {
            id: "rId2".to_string(),
            rel_type: rel_types::THEME,
            target: "../theme/theme1.xml".to_string(),
        },
    ])
}

/// Relationships of the blank layout: its master.
pub fn slide_layout_rels_xml() -> Result<String> {
    relationships_xml(&[Relationship {
        id: "rId1".to_string(),
        rel_type: rel_types::SLIDE_MASTER,
        target: "../slideMasters/slideMaster1.xml".to_string(),
    }])
}

/// `docProps/app.xml`.
pub fn app_props_xml(slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECL);
    xml.push_str(
        r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
    );
    xml.push_str("<Application>quizdeck</Application>");
    write!(xml, "<Slides>{}</Slides>", slide_count)?;
    xml.push_str("</Properties>");
    Ok(xml)
}

/// `docProps/core.xml`. Carries no timestamps so output is reproducible.
pub const CORE_PROPS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
    r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
    r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
    r#"<dc:title>Multiple-choice questions</dc:title>"#,
    r#"<dc:creator>quizdeck</dc:creator>"#,
    r#"</cp:coreProperties>"#
);

pub const PRES_PROPS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<p:presentationPr xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"/>"#
);

pub const VIEW_PROPS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<p:viewPr xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
    r#"<p:gridSpacing cx="76200" cy="76200"/>"#,
    r#"</p:viewPr>"#
);

pub const TABLE_STYLES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<a:tblStyleLst xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"def="{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}"/>"#
);

/// Group shape header shared by the master, layout and slides.
pub(crate) const SP_TREE_HEADER: &str = concat!(
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#
);

pub const SLIDE_MASTER_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<p:sldMaster xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
    r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg><p:spTree>"#,
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
    r#"</p:spTree></p:cSld>"#,
    r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
    r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" "#,
    r#"hlink="hlink" folHlink="folHlink"/>"#,
    r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#,
    r#"<p:txStyles>"#,
    r#"<p:titleStyle><a:lvl1pPr algn="ctr"><a:defRPr sz="4400"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
    r#"<a:latin typeface="+mj-lt"/></a:defRPr></a:lvl1pPr></p:titleStyle>"#,
    r#"<p:bodyStyle><a:lvl1pPr><a:defRPr sz="3200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
    r#"<a:latin typeface="+mn-lt"/></a:defRPr></a:lvl1pPr></p:bodyStyle>"#,
    r#"<p:otherStyle><a:lvl1pPr><a:defRPr sz="1800"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
    r#"<a:latin typeface="+mn-lt"/></a:defRPr></a:lvl1pPr></p:otherStyle>"#,
    r#"</p:txStyles>"#,
    r#"</p:sldMaster>"#
);

pub const SLIDE_LAYOUT_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" type="blank" preserve="1">"#,
    r#"<p:cSld name="Blank"><p:spTree>"#,
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
    r#"</p:spTree></p:cSld>"#,
    r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#,
    r#"</p:sldLayout>"#
);

pub const THEME_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme">"#,
    r#"<a:themeElements>"#,
    r#"<a:clrScheme name="Office">"#,
    r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#,
    r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#,
    r#"<a:dk2><a:srgbClr val="1F497D"/></a:dk2>"#,
    r#"<a:lt2><a:srgbClr val="EEECE1"/></a:lt2>"#,
    r#"<a:accent1><a:srgbClr val="4F81BD"/></a:accent1>"#,
    r#"<a:accent2><a:srgbClr val="C0504D"/></a:accent2>"#,
    r#"<a:accent3><a:srgbClr val="9BBB59"/></a:accent3>"#,
    r#"<a:accent4><a:srgbClr val="8064A2"/></a:accent4>"#,
    r#"<a:accent5><a:srgbClr val="4BACC6"/></a:accent5>"#,
    r#"<a:accent6><a:srgbClr val="F79646"/></a:accent6>"#,
    r#"<a:hlink><a:srgbClr val="0000FF"/></a:hlink>"#,
    r#"<a:folHlink><a:srgbClr val="800080"/></a:folHlink>"#,
    r#"</a:clrScheme>"#,
    r#"<a:fontScheme name="Office">"#,
    r#"<a:majorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
    r#"<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
    r#"</a:fontScheme>"#,
    r#"<a:fmtScheme name="Office">"#,
    r#"<a:fillStyleLst>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"><a:tint val="50000"/></a:schemeClr></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"><a:shade val="80000"/></a:schemeClr></a:solidFill>"#,
    r#"</a:fillStyleLst>"#,
    r#"<a:lnStyleLst>"#,
    r#"<a:ln w="9525"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    r#"<a:ln w="25400"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    r#"<a:ln w="38100"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    r#"</a:lnStyleLst>"#,
    r#"<a:effectStyleLst>"#,
    r#"<a:effectStyle><a:effectLst/></a:effectStyle>"#,
    r#"<a:effectStyle><a:effectLst/></a:effectStyle>"#,
    r#"<a:effectStyle><a:effectLst/></a:effectStyle>"#,
    r#"</a:effectStyleLst>"#,
    r#"<a:bgFillStyleLst>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"><a:tint val="95000"/></a:schemeClr></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"><a:shade val="90000"/></a:schemeClr></a:solidFill>"#,
    r#"</a:bgFillStyleLst>"#,
    r#"</a:fmtScheme>"#,
    r#"</a:themeElements>"#,
    r#"<a:objectDefaults/><a:extraClrSchemeLst/>"#,
    r#"</a:theme>"#
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_rel_ids_follow_master() {
        assert_eq!(slide_rel_id(1), "rId2");
        assert_eq!(slide_rel_id(10), "rId11");
    }

    #[test]
    fn test_content_types_lists_every_slide() {
        let xml = content_types_xml(3).unwrap();
        assert!(xml.contains(r#"PartName="/ppt/slides/slide1.xml""#));
        assert!(xml.contains(r#"PartName="/ppt/slides/slide3.xml""#));
        assert!(!xml.contains("slide4.xml"));
        assert!(xml.contains(r#"PartName="/ppt/theme/theme1.xml""#));
    }

    #[test]
    fn test_presentation_xml_slide_ids() {
        let xml = presentation_xml(2, 9_144_000, 6_858_000).unwrap();
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000" type="screen4x3"/>"#));
    }

    #[test]
    fn test_presentation_xml_without_slides_omits_list() {
        let xml = presentation_xml(0, 9_144_000, 6_858_000).unwrap();
        assert!(!xml.contains("sldIdLst"));
    }

    #[test]
    fn test_presentation_rels_ids_are_unique() {
        let xml = presentation_rels_xml(2).unwrap();
        for id in ["rId1", "rId2", "rId3", "rId4", "rId5", "rId6", "rId7"] {
            assert_eq!(xml.matches(&format!(r#"Id="{}""#, id)).count(), 1, "{}", id);
        }
        assert!(xml.contains(r#"Target="slides/slide2.xml""#));
        assert!(xml.contains(r#"Id="rId4" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme""#));
    }

    #[test]
    fn test_sp_tree_header_matches_static_parts() {
        assert!(SLIDE_MASTER_XML.contains(SP_TREE_HEADER));
        assert!(SLIDE_LAYOUT_XML.contains(SP_TREE_HEADER));
    }
}
