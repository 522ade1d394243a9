//! Minimal PresentationML writer
//!
//! Emits the smallest package PowerPoint and LibreOffice open without repair:
//! content types, package and presentation relationships, one theme, one slide
//! master with a single blank layout, and one part per slide. XML is written
//! straight into strings.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::deck::{Align, Deck, DeckSlide, Shape, TextStyle, VAlign, SLIDE_HEIGHT, SLIDE_WIDTH};
use super::DeckWriter;
use crate::error::Result;

const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const NS_PKG_REL: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

const REL_OFFICE_DOC: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_SLIDE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_THEME: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// First slide id PowerPoint accepts
const FIRST_SLIDE_ID: usize = 256;

/// Escape XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PptxWriter;

impl DeckWriter for PptxWriter {
    fn write_file(&self, deck: &Deck, path: &Path) -> Result<()> {
        let file = BufWriter::new(File::create(path)?);
        let mut out = self.write(deck, file)?;
        out.flush()?;
        Ok(())
    }
}

impl PptxWriter {
    /// Write the package into `writer` and hand it back once finished.
    pub fn write<W: Write + Seek>(&self, deck: &Deck, writer: W) -> Result<W> {
        let mut zip = ZipWriter::new(writer);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let mut put = |name: String, body: String| -> Result<()> {
            zip.start_file(name, options)?;
            zip.write_all(body.as_bytes())?;
            Ok(())
        };

        put("[Content_Types].xml".into(), content_types_xml(deck.len())?)?;
        put("_rels/.rels".into(), package_rels_xml())?;
        put("ppt/presentation.xml".into(), presentation_xml(deck.len())?)?;
        put(
            "ppt/_rels/presentation.xml.rels".into(),
            presentation_rels_xml(deck.len())?,
        )?;
        put("ppt/theme/theme1.xml".into(), theme_xml())?;
        put("ppt/slideMasters/slideMaster1.xml".into(), slide_master_xml())?;
        put(
            "ppt/slideMasters/_rels/slideMaster1.xml.rels".into(),
            single_rel_xml(&[
                ("rId1", REL_LAYOUT, "../slideLayouts/slideLayout1.xml"),
                ("rId2", REL_THEME, "../theme/theme1.xml"),
            ])?,
        )?;
        put("ppt/slideLayouts/slideLayout1.xml".into(), slide_layout_xml())?;
        put(
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels".into(),
            single_rel_xml(&[("rId1", REL_MASTER, "../slideMasters/slideMaster1.xml")])?,
        )?;

        for (idx, slide) in deck.slides.iter().enumerate() {
            let n = idx + 1;
            put(format!("ppt/slides/slide{n}.xml"), slide_xml(slide)?)?;
            put(
                format!("ppt/slides/_rels/slide{n}.xml.rels"),
                single_rel_xml(&[("rId1", REL_LAYOUT, "../slideLayouts/slideLayout1.xml")])?,
            )?;
        }

        Ok(zip.finish()?)
    }
}

fn content_types_xml(slides: usize) -> Result<String> {
    let mut xml = String::from(XML_DECL);
    xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
    xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>"#);
    for n in 1..=slides {
        write!(
            xml,
            r#"<Override PartName="/ppt/slides/slide{n}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#
        )?;
    }
    xml.push_str("</Types>");
    Ok(xml)
}

fn package_rels_xml() -> String {
    format!(
        r#"{XML_DECL}<Relationships xmlns="{NS_PKG_REL}"><Relationship Id="rId1" Type="{REL_OFFICE_DOC}" Target="ppt/presentation.xml"/></Relationships>"#
    )
}

fn single_rel_xml(rels: &[(&str, &str, &str)]) -> Result<String> {
    let mut xml = String::from(XML_DECL);
    write!(xml, r#"<Relationships xmlns="{NS_PKG_REL}">"#)?;
    for (id, kind, target) in rels {
        write!(xml, r#"<Relationship Id="{id}" Type="{kind}" Target="{target}"/>"#)?;
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

/// Presentation relationships: rId1 master, rId2 theme, rId3.. slides
fn presentation_rels_xml(slides: usize) -> Result<String> {
    let mut rels = vec![
        ("rId1".to_string(), REL_MASTER, "slideMasters/slideMaster1.xml".to_string()),
        ("rId2".to_string(), REL_THEME, "theme/theme1.xml".to_string()),
    ];
    for n in 1..=slides {
        rels.push((format!("rId{}", n + 2), REL_SLIDE, format!("slides/slide{n}.xml")));
    }
    let borrowed: Vec<(&str, &str, &str)> = rels
        .iter()
        .map(|(id, kind, target)| (id.as_str(), *kind, target.as_str()))
        .collect();
    single_rel_xml(&borrowed)
}

fn presentation_xml(slides: usize) -> Result<String> {
    let mut xml = String::from(XML_DECL);
    write!(
        xml,
        r#"<p:presentation xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}" saveSubsetFonts="1">"#
    )?;
    xml.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#);
    xml.push_str("<p:sldIdLst>");
    for n in 1..=slides {
        write!(
            xml,
            r#"<p:sldId id="{}" r:id="rId{}"/>"#,
            FIRST_SLIDE_ID + n - 1,
            n + 2
        )?;
    }
    xml.push_str("</p:sldIdLst>");
    write!(xml, r#"<p:sldSz cx="{SLIDE_WIDTH}" cy="{SLIDE_HEIGHT}"/>"#)?;
    write!(xml, r#"<p:notesSz cx="{SLIDE_HEIGHT}" cy="{SLIDE_WIDTH}"/>"#)?;
    xml.push_str("</p:presentation>");
    Ok(xml)
}

const EMPTY_SP_TREE: &str = r#"<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#;

fn slide_master_xml() -> String {
    format!(
        r#"{XML_DECL}<p:sldMaster xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"><p:cSld><p:bg><p:bgPr><a:solidFill><a:srgbClr val="0F172A"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>{EMPTY_SP_TREE}</p:spTree></p:cSld><p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/><p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst><p:txStyles><p:titleStyle/><p:bodyStyle/><p:otherStyle/></p:txStyles></p:sldMaster>"#
    )
}

fn slide_layout_xml() -> String {
    format!(
        r#"{XML_DECL}<p:sldLayout xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}" type="blank" preserve="1"><p:cSld name="Blank">{EMPTY_SP_TREE}</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"#
    )
}

fn theme_xml() -> String {
    let colors = [
        ("dk1", "000000"),
        ("lt1", "FFFFFF"),
        ("dk2", "0F172A"),
        ("lt2", "E0E7FF"),
        ("accent1", "6366F1"),
        ("accent2", "22C55E"),
        ("accent3", "A855F7"),
        ("accent4", "06B6D4"),
        ("accent5", "FBBF24"),
        ("accent6", "F43F5E"),
        ("hlink", "3B82F6"),
        ("folHlink", "8B5CF6"),
    ];
    let mut scheme = String::new();
    for (name, val) in colors {
        scheme.push_str(&format!(r#"<a:{name}><a:srgbClr val="{val}"/></a:{name}>"#));
    }
    let fill = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;
    let line = r#"<a:ln w="9525"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#;
    let effect = "<a:effectStyle><a:effectLst/></a:effectStyle>";
    format!(
        r#"{XML_DECL}<a:theme xmlns:a="{NS_A}" name="Seating"><a:themeElements><a:clrScheme name="Seating">{scheme}</a:clrScheme><a:fontScheme name="Seating"><a:majorFont><a:latin typeface="Arial"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont><a:minorFont><a:latin typeface="Arial"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont></a:fontScheme><a:fmtScheme name="Seating"><a:fillStyleLst>{fill}{fill}{fill}</a:fillStyleLst><a:lnStyleLst>{line}{line}{line}</a:lnStyleLst><a:effectStyleLst>{effect}{effect}{effect}</a:effectStyleLst><a:bgFillStyleLst>{fill}{fill}{fill}</a:bgFillStyleLst></a:fmtScheme></a:themeElements><a:objectDefaults/><a:extraClrSchemeLst/></a:theme>"#
    )
}

fn slide_xml(slide: &DeckSlide) -> Result<String> {
    let mut xml = String::from(XML_DECL);
    write!(xml, r#"<p:sld xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}">"#)?;
    xml.push_str("<p:cSld>");
    write!(
        xml,
        r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
        slide.background
    )?;
    xml.push_str(EMPTY_SP_TREE);

    // id 1 is the group itself
    for (idx, shape) in slide.shapes.iter().enumerate() {
        shape_xml(&mut xml, idx as u32 + 2, shape)?;
    }

    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sld>");
    Ok(xml)
}

fn shape_xml(xml: &mut String, id: u32, shape: &Shape) -> Result<()> {
    match shape {
        Shape::Text { text, frame, style } => {
            xml.push_str("<p:sp><p:nvSpPr>");
            write!(xml, r#"<p:cNvPr id="{id}" name="Text Box {id}"/>"#)?;
            xml.push_str(r#"<p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>"#);
            xml.push_str("<p:spPr><a:xfrm>");
            write!(xml, r#"<a:off x="{}" y="{}"/>"#, frame.x, frame.y)?;
            write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, frame.width, frame.height)?;
            xml.push_str(r#"</a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr>"#);

            let anchor = match style.valign {
                VAlign::Top => "t",
                VAlign::Middle => "ctr",
            };
            write!(xml, r#"<p:txBody><a:bodyPr wrap="square" rtlCol="0" anchor="{anchor}"/><a:lstStyle/>"#)?;
            for line in text.split('\n') {
                paragraph_xml(xml, line, style)?;
            }
            xml.push_str("</p:txBody></p:sp>");
        }
        Shape::Rect {
            frame,
            fill,
            fill_opacity,
            outline,
        } => {
            xml.push_str("<p:sp><p:nvSpPr>");
            write!(xml, r#"<p:cNvPr id="{id}" name="Rectangle {id}"/>"#)?;
            xml.push_str("<p:cNvSpPr/><p:nvPr/></p:nvSpPr>");
            xml.push_str("<p:spPr><a:xfrm>");
            write!(xml, r#"<a:off x="{}" y="{}"/>"#, frame.x, frame.y)?;
            write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, frame.width, frame.height)?;
            xml.push_str(r#"</a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);

            match fill_opacity {
                Some(opacity) if *opacity < 100 => write!(
                    xml,
                    r#"<a:solidFill><a:srgbClr val="{fill}"><a:alpha val="{}"/></a:srgbClr></a:solidFill>"#,
                    u32::from(*opacity) * 1000
                )?,
                _ => write!(xml, r#"<a:solidFill><a:srgbClr val="{fill}"/></a:solidFill>"#)?,
            }
            match outline {
                Some(outline) => write!(
                    xml,
                    r#"<a:ln w="{}"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
                    (outline.width_pt * 12_700.0).round() as i64,
                    outline.color
                )?,
                None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
            }
            xml.push_str("</p:spPr></p:sp>");
        }
    }
    Ok(())
}

fn paragraph_xml(xml: &mut String, line: &str, style: &TextStyle) -> Result<()> {
    xml.push_str("<a:p>");
    if style.align == Align::Center {
        xml.push_str(r#"<a:pPr algn="ctr"/>"#);
    }
    if line.is_empty() {
        run_properties(xml, "a:endParaRPr", style)?;
    } else {
        xml.push_str("<a:r>");
        run_properties(xml, "a:rPr", style)?;
        write!(xml, "<a:t>{}</a:t></a:r>", escape_xml(line))?;
    }
    xml.push_str("</a:p>");
    Ok(())
}

/// Character properties; fill must precede the latin font.
fn run_properties(xml: &mut String, tag: &str, style: &TextStyle) -> Result<()> {
    write!(
        xml,
        r#"<{tag} lang="en-US" sz="{}""#,
        (style.size * 100.0).round() as u32
    )?;
    if style.bold {
        xml.push_str(r#" b="1""#);
    }
    xml.push_str(r#" dirty="0">"#);
    write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, style.color)?;
    if let Some(font) = &style.font {
        write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(font))?;
    }
    write!(xml, "</{tag}>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::deck::{Frame, Section};

    #[test]
    fn test_text_is_escaped_and_split_into_paragraphs() {
        let mut slide = DeckSlide::new(Section::Demo, "000000");
        slide.add_text(
            "cout << x;\n\nreturn 'a';",
            Frame::inches(0.0, 0.0, 1.0, 1.0),
            TextStyle::new(10.0, "FFFFFF"),
        );
        let xml = slide_xml(&slide).unwrap();

        assert!(xml.contains("<a:t>cout &lt;&lt; x;</a:t>"));
        assert!(xml.contains("<a:t>return &apos;a&apos;;</a:t>"));
        assert_eq!(xml.matches("<a:p>").count(), 3);
        assert!(xml.contains("<a:endParaRPr"));
        assert!(xml.contains("</a:endParaRPr></a:p>"));
    }

    #[test]
    fn test_translucent_card() {
        let mut slide = DeckSlide::new(Section::Context, "000000");
        slide.add_card(Frame::inches(0.0, 0.0, 1.0, 1.0), "6366F1", 25, "6366F1", 2.0);
        let xml = slide_xml(&slide).unwrap();

        assert!(xml.contains(r#"<a:alpha val="25000"/>"#));
        assert!(xml.contains(r#"<a:ln w="25400">"#));
    }

    #[test]
    fn test_presentation_lists_every_slide() {
        let xml = presentation_xml(3).unwrap();
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldId id="258" r:id="rId5"/>"#));
        assert_eq!(xml.matches("<p:sldId ").count(), 3);
    }
}
