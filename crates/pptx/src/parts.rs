//! Fixed package parts: content types, relationships, master, layout, theme.
//!
//! Only the parts that carry per-deck data (slide count, slide size, title)
//! take arguments; the rest are constant.

use deck_core::SlideSize;
use std::fmt::Write as FmtWrite;

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

pub(crate) const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub(crate) const NS_R: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub(crate) const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

const REL_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const CT_BASE: &str = "application/vnd.openxmlformats-officedocument";

/// Relationship ID of the first slide in `presentation.xml.rels`.
/// rId1..rId5 are the master, theme and the three property parts.
pub(crate) const FIRST_SLIDE_REL: usize = 6;

/// First `p:sldId/@id`; PowerPoint requires ids >= 256.
const FIRST_SLIDE_ID: usize = 256;

/// Title and body placeholder frames, scaled to the slide width.
struct Frames {
    margin: i64,
    width: i64,
}

impl Frames {
    const TITLE_Y: i64 = 274_638;
    const TITLE_CY: i64 = 1_143_000;
    const BODY_Y: i64 = 1_600_200;
    const BODY_CY: i64 = 4_525_963;

    fn for_size(size: SlideSize) -> Self {
        let margin = size.width / 20;
        Self {
            margin,
            width: size.width - 2 * margin,
        }
    }

    fn title_xfrm(&self) -> String {
        xfrm(self.margin, Self::TITLE_Y, self.width, Self::TITLE_CY)
    }

    fn body_xfrm(&self) -> String {
        xfrm(self.margin, Self::BODY_Y, self.width, Self::BODY_CY)
    }
}

fn xfrm(x: i64, y: i64, cx: i64, cy: i64) -> String {
    format!(r#"<a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm>"#)
}

fn relationships(rels: &[(String, &str, String)]) -> String {
    let mut xml = String::with_capacity(256 + rels.len() * 160);
    xml.push_str(XML_DECL);
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for (id, rel_type, target) in rels {
        let _ = write!(
            xml,
            r#"<Relationship Id="{id}" Type="{rel_type}" Target="{target}"/>"#
        );
    }
    xml.push_str("</Relationships>");
    xml
}

fn rel(id: usize, rel_type: &str, target: impl Into<String>) -> (String, &str, String) {
    (format!("rId{id}"), rel_type, target.into())
}

/// `[Content_Types].xml` for a deck with `slide_count` slides.
pub(crate) fn content_types_xml(slide_count: usize) -> String {
    let mut xml = String::with_capacity(2048 + slide_count * 160);
    xml.push_str(XML_DECL);
    xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
    xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);

    let overrides = [
        ("/ppt/presentation.xml", "presentationml.presentation.main+xml"),
        ("/ppt/slideMasters/slideMaster1.xml", "presentationml.slideMaster+xml"),
        ("/ppt/slideLayouts/slideLayout1.xml", "presentationml.slideLayout+xml"),
        ("/ppt/theme/theme1.xml", "theme+xml"),
        ("/ppt/presProps.xml", "presentationml.presProps+xml"),
        ("/ppt/viewProps.xml", "presentationml.viewProps+xml"),
        ("/ppt/tableStyles.xml", "presentationml.tableStyles+xml"),
        ("/docProps/app.xml", "extended-properties+xml"),
    ];
    for (part, kind) in overrides {
        let _ = write!(xml, r#"<Override PartName="{part}" ContentType="{CT_BASE}.{kind}"/>"#);
    }
    xml.push_str(r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#);

    for n in 1..=slide_count {
        let _ = write!(
            xml,
            r#"<Override PartName="/ppt/slides/slide{n}.xml" ContentType="{CT_BASE}.presentationml.slide+xml"/>"#
        );
    }

    xml.push_str("</Types>");
    xml
}

/// `_rels/.rels`.
pub(crate) fn root_rels_xml() -> String {
    relationships(&[
        rel(1, &format!("{REL_BASE}/officeDocument"), "ppt/presentation.xml"),
        rel(
            2,
            "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties",
            "docProps/core.xml",
        ),
        rel(3, &format!("{REL_BASE}/extended-properties"), "docProps/app.xml"),
    ])
}

/// `ppt/_rels/presentation.xml.rels`.
pub(crate) fn presentation_rels_xml(slide_count: usize) -> String {
    let types: Vec<String> = ["slideMaster", "theme", "presProps", "viewProps", "tableStyles", "slide"]
        .iter()
        .map(|t| format!("{REL_BASE}/{t}"))
        .collect();

    let mut rels = vec![
        rel(1, &types[0], "slideMasters/slideMaster1.xml"),
        rel(2, &types[1], "theme/theme1.xml"),
        rel(3, &types[2], "presProps.xml"),
        rel(4, &types[3], "viewProps.xml"),
        rel(5, &types[4], "tableStyles.xml"),
    ];
    for n in 1..=slide_count {
        rels.push(rel(FIRST_SLIDE_REL + n - 1, &types[5], format!("slides/slide{n}.xml")));
    }
    relationships(&rels)
}

/// `ppt/presentation.xml`.
pub(crate) fn presentation_xml(slide_count: usize, size: SlideSize) -> String {
    let mut xml = String::with_capacity(1024 + slide_count * 48);
    xml.push_str(XML_DECL);
    let _ = write!(
        xml,
        r#"<p:presentation xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}" saveSubsetFonts="1">"#
    );
    xml.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#);

    if slide_count > 0 {
        xml.push_str("<p:sldIdLst>");
        for i in 0..slide_count {
            let _ = write!(
                xml,
                r#"<p:sldId id="{}" r:id="rId{}"/>"#,
                FIRST_SLIDE_ID + i,
                FIRST_SLIDE_REL + i
            );
        }
        xml.push_str("</p:sldIdLst>");
    }

    let _ = write!(xml, r#"<p:sldSz cx="{}" cy="{}"/>"#, size.width, size.height);
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("<p:defaultTextStyle>");
    xml.push_str(r#"<a:defPPr><a:defRPr lang="en-US"/></a:defPPr>"#);
    xml.push_str("</p:defaultTextStyle>");
    xml.push_str("</p:presentation>");
    xml
}

/// `ppt/slides/_rels/slideN.xml.rels`.
pub(crate) fn slide_rels_xml() -> String {
    relationships(&[rel(
        1,
        &format!("{REL_BASE}/slideLayout"),
        "../slideLayouts/slideLayout1.xml",
    )])
}

/// `ppt/slideMasters/_rels/slideMaster1.xml.rels`.
pub(crate) fn master_rels_xml() -> String {
    relationships(&[
        rel(1, &format!("{REL_BASE}/slideLayout"), "../slideLayouts/slideLayout1.xml"),
        rel(2, &format!("{REL_BASE}/theme"), "../theme/theme1.xml"),
    ])
}

/// `ppt/slideLayouts/_rels/slideLayout1.xml.rels`.
pub(crate) fn layout_rels_xml() -> String {
    relationships(&[rel(
        1,
        &format!("{REL_BASE}/slideMaster"),
        "../slideMasters/slideMaster1.xml",
    )])
}

const GROUP_PROPERTIES: &str = concat!(
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
);

fn placeholder_shape(id: u32, name: &str, ph: &str, xfrm: &str) -> String {
    format!(
        concat!(
            r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{name}"/>"#,
            r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr>{ph}</p:nvPr></p:nvSpPr>"#,
            r#"<p:spPr>{xfrm}</p:spPr>"#,
            r#"<p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#,
        ),
        id = id,
        name = name,
        ph = ph,
        xfrm = xfrm,
    )
}

/// `ppt/slideMasters/slideMaster1.xml`.
pub(crate) fn slide_master_xml(size: SlideSize) -> String {
    let frames = Frames::for_size(size);
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECL);
    let _ = write!(xml, r#"<p:sldMaster xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}">"#);
    xml.push_str("<p:cSld>");
    xml.push_str(r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    xml.push_str("<p:spTree>");
    xml.push_str(GROUP_PROPERTIES);
    xml.push_str(&placeholder_shape(
        2,
        "Title Placeholder 1",
        r#"<p:ph type="title"/>"#,
        &frames.title_xfrm(),
    ));
    xml.push_str(&placeholder_shape(
        3,
        "Text Placeholder 2",
        r#"<p:ph type="body" idx="1"/>"#,
        &frames.body_xfrm(),
    ));
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str(concat!(
        r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
        r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" "#,
        r#"hlink="hlink" folHlink="folHlink"/>"#,
    ));
    xml.push_str(r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#);
    xml.push_str(TEXT_STYLES);
    xml.push_str("</p:sldMaster>");
    xml
}

const TEXT_STYLES: &str = concat!(
    "<p:txStyles>",
    "<p:titleStyle>",
    r#"<a:lvl1pPr algn="l" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
    r#"<a:spcBef><a:spcPct val="0"/></a:spcBef><a:buNone/>"#,
    r#"<a:defRPr sz="4400" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
    r#"<a:latin typeface="+mj-lt"/><a:ea typeface="+mj-ea"/><a:cs typeface="+mj-cs"/></a:defRPr>"#,
    "</a:lvl1pPr>",
    "</p:titleStyle>",
    "<p:bodyStyle>",
    r#"<a:lvl1pPr marL="342900" indent="-342900" algn="l" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
    r#"<a:spcBef><a:spcPct val="20000"/></a:spcBef><a:buFont typeface="Arial"/><a:buChar char="•"/>"#,
    r#"<a:defRPr sz="3200" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
    r#"<a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr>"#,
    "</a:lvl1pPr>",
    r#"<a:lvl2pPr marL="742950" indent="-285750" algn="l" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
    r#"<a:spcBef><a:spcPct val="20000"/></a:spcBef><a:buFont typeface="Arial"/><a:buChar char="–"/>"#,
    r#"<a:defRPr sz="2800" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
    r#"<a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr>"#,
    "</a:lvl2pPr>",
    "</p:bodyStyle>",
    "<p:otherStyle>",
    r#"<a:defPPr><a:defRPr lang="en-US"/></a:defPPr>"#,
    "</p:otherStyle>",
    "</p:txStyles>",
);

/// `ppt/slideLayouts/slideLayout1.xml` ("Title and Content").
pub(crate) fn slide_layout_xml(size: SlideSize) -> String {
    let frames = Frames::for_size(size);
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECL);
    let _ = write!(
        xml,
        r#"<p:sldLayout xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}" type="obj" preserve="1">"#
    );
    xml.push_str(r#"<p:cSld name="Title and Content"><p:spTree>"#);
    xml.push_str(GROUP_PROPERTIES);
    xml.push_str(&placeholder_shape(2, "Title 1", r#"<p:ph type="title"/>"#, &frames.title_xfrm()));
    xml.push_str(&placeholder_shape(
        3,
        "Content Placeholder 2",
        r#"<p:ph idx="1"/>"#,
        &frames.body_xfrm(),
    ));
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sldLayout>");
    xml
}

/// `ppt/presProps.xml`.
pub(crate) fn pres_props_xml() -> String {
    format!(r#"{XML_DECL}<p:presentationPr xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"/>"#)
}

/// `ppt/viewProps.xml`.
pub(crate) fn view_props_xml() -> String {
    format!(
        concat!(
            r#"{decl}<p:viewPr xmlns:a="{a}" xmlns:r="{r}" xmlns:p="{p}">"#,
            r#"<p:normalViewPr><p:restoredLeft sz="15620"/><p:restoredTop sz="94660"/></p:normalViewPr>"#,
            r#"<p:gridSpacing cx="76200" cy="76200"/></p:viewPr>"#,
        ),
        decl = XML_DECL,
        a = NS_A,
        r = NS_R,
        p = NS_P,
    )
}

/// `ppt/tableStyles.xml`.
pub(crate) fn table_styles_xml() -> String {
    format!(
        r#"{XML_DECL}<a:tblStyleLst xmlns:a="{NS_A}" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#
    )
}

/// `docProps/app.xml`.
pub(crate) fn app_props_xml(slide_count: usize) -> String {
    format!(
        concat!(
            r#"{decl}<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
            r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
            "<Application>{app}</Application><Slides>{slides}</Slides></Properties>",
        ),
        decl = XML_DECL,
        app = env!("CARGO_PKG_NAME"),
        slides = slide_count,
    )
}

/// `docProps/core.xml`. `title` must already be XML-escaped.
pub(crate) fn core_props_xml(escaped_title: &str) -> String {
    format!(
        concat!(
            r#"{decl}<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            "<dc:title>{title}</dc:title><dc:creator>{app}</dc:creator>",
            "</cp:coreProperties>",
        ),
        decl = XML_DECL,
        title = escaped_title,
        app = env!("CARGO_PKG_NAME"),
    )
}

/// `ppt/theme/theme1.xml`.
pub(crate) fn theme_xml() -> String {
    format!("{XML_DECL}{THEME}")
}

const THEME: &str = concat!(
    r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme">"#,
    "<a:themeElements>",
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
    "</a:clrScheme>",
    r#"<a:fontScheme name="Office">"#,
    r#"<a:majorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
    r#"<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
    "</a:fontScheme>",
    r#"<a:fmtScheme name="Office">"#,
    "<a:fillStyleLst>",
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"><a:tint val="50000"/></a:schemeClr></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"><a:shade val="80000"/></a:schemeClr></a:solidFill>"#,
    "</a:fillStyleLst>",
    "<a:lnStyleLst>",
    r#"<a:ln w="9525"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    r#"<a:ln w="25400"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    r#"<a:ln w="38100"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    "</a:lnStyleLst>",
    "<a:effectStyleLst>",
    "<a:effectStyle><a:effectLst/></a:effectStyle>",
    "<a:effectStyle><a:effectLst/></a:effectStyle>",
    "<a:effectStyle><a:effectLst/></a:effectStyle>",
    "</a:effectStyleLst>",
    "<a:bgFillStyleLst>",
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"><a:tint val="95000"/></a:schemeClr></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"><a:shade val="90000"/></a:schemeClr></a:solidFill>"#,
    "</a:bgFillStyleLst>",
    "</a:fmtScheme>",
    "</a:themeElements>",
    "<a:objectDefaults/><a:extraClrSchemeLst/>",
    "</a:theme>",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types_lists_every_slide() {
        let xml = content_types_xml(3);
        for n in 1..=3 {
            assert!(xml.contains(&format!("/ppt/slides/slide{n}.xml")));
        }
        assert!(!xml.contains("/ppt/slides/slide4.xml"));
        assert!(xml.contains("presentationml.presentation.main+xml"));
    }

    #[test]
    fn test_presentation_rels_number_slides_after_fixed_parts() {
        let xml = presentation_rels_xml(2);
        assert!(xml.contains(r#"Id="rId1""#));
        assert!(xml.contains(r#"Id="rId6" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide1.xml""#));
        assert!(xml.contains(r#"Id="rId7""#));
        assert!(!xml.contains(r#"Id="rId8""#));
    }

    #[test]
    fn test_presentation_xml_slide_ids_and_size() {
        let xml = presentation_xml(2, SlideSize::WIDESCREEN);
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId6"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId7"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12188952" cy="6858000"/>"#));
    }

    #[test]
    fn test_presentation_xml_without_slides_has_no_id_list() {
        let xml = presentation_xml(0, SlideSize::STANDARD);
        assert!(!xml.contains("<p:sldIdLst>"));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000"/>"#));
    }

    #[test]
    fn test_placeholder_frames_scale_with_width() {
        let standard = slide_layout_xml(SlideSize::STANDARD);
        assert!(standard.contains(r#"<a:off x="457200" y="274638"/><a:ext cx="8229600" cy="1143000"/>"#));

        let wide = slide_master_xml(SlideSize::WIDESCREEN);
        assert!(wide.contains(r#"<a:off x="609447" y="1600200"/>"#));
    }
}
