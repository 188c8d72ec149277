//! `Contents/header.xml`: the definition tables.

use super::xml::{content_namespaces, Attrs, XmlWriter};
use crate::error::Result;
use crate::model::{
    Border, BorderFill, Bullet, CharPr, Fill, Font, Header, LangValues, Language, Numbering, ParaHead,
    ParaPr, Style, TabPr, BORDER_FILL_ID_BASE, BULLET_ID_BASE, NUMBERING_ID_BASE,
};

/// OWPML schema version written into the header root.
pub const HEADER_VERSION: &str = "1.4";

/// Serialize the header of a document with `section_count` sections.
pub fn header_xml(header: &Header, section_count: usize) -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    let root = content_namespaces(Attrs::new())
        .add("version", HEADER_VERSION)
        .add("secCnt", section_count);
    xml.start("hh:head", root)?;

    let begin = &header.begin_numbers;
    xml.empty(
        "hh:beginNum",
        Attrs::new()
            .add("page", begin.page)
            .add("footnote", begin.footnote)
            .add("endnote", begin.endnote)
            .add("pic", begin.picture)
            .add("tbl", begin.table)
            .add("equation", begin.equation),
    )?;

    xml.start("hh:refList", Attrs::new())?;
    write_fontfaces(&mut xml, &header.fonts)?;
    write_list(&mut xml, "hh:borderFills", &header.border_fills, |xml, i, fill| {
        write_border_fill(xml, i as u32 + BORDER_FILL_ID_BASE, fill)
    })?;
    write_list(&mut xml, "hh:charProperties", &header.char_properties, |xml, i, pr| {
        write_char_pr(xml, i as u32, pr)
    })?;
    write_list(&mut xml, "hh:tabProperties", &header.tab_properties, |xml, i, pr| {
        write_tab_pr(xml, i as u32, pr)
    })?;
    write_list(&mut xml, "hh:numberings", &header.numberings, |xml, i, numbering| {
        write_numbering(xml, i as u32 + NUMBERING_ID_BASE, numbering)
    })?;
    write_list(&mut xml, "hh:bullets", &header.bullets, |xml, i, bullet| {
        write_bullet(xml, i as u32 + BULLET_ID_BASE, bullet)
    })?;
    write_list(&mut xml, "hh:paraProperties", &header.para_properties, |xml, i, pr| {
        write_para_pr(xml, i as u32, pr)
    })?;
    write_list(&mut xml, "hh:styles", &header.styles, |xml, i, style| {
        write_style(xml, i as u32, style)
    })?;
    xml.end("hh:refList")?;

    xml.start(
        "hh:compatibleDocument",
        Attrs::new().add("targetProgram", "HWP201X"),
    )?;
    xml.empty("hh:layoutCompatibility", Attrs::new())?;
    xml.end("hh:compatibleDocument")?;

    xml.end("hh:head")?;
    Ok(xml.finish())
}

/// `<name itemCnt=..>` wrapper; omitted when the list is empty.
fn write_list<T>(
    xml: &mut XmlWriter,
    name: &str,
    items: &[T],
    mut item: impl FnMut(&mut XmlWriter, usize, &T) -> Result<()>,
) -> Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    xml.start(name, Attrs::new().add("itemCnt", items.len()))?;
    for (i, value) in items.iter().enumerate() {
        item(xml, i, value)?;
    }
    xml.end(name)
}

fn write_fontfaces(xml: &mut XmlWriter, fonts: &LangValues<Vec<Font>>) -> Result<()> {
    xml.start("hh:fontfaces", Attrs::new().add("itemCnt", Language::ALL.len()))?;
    for (lang, faces) in fonts.iter() {
        xml.start(
            "hh:fontface",
            Attrs::new()
                .add("lang", lang.as_str())
                .add("fontCnt", faces.len()),
        )?;
        for (id, font) in faces.iter().enumerate() {
            let attrs = Attrs::new()
                .add("id", id)
                .add("face", &font.face)
                .add("type", font.kind.as_str())
                .flag("isEmbedded", false);
            match &font.substitute {
                Some(substitute) => {
                    xml.start("hh:font", attrs)?;
                    xml.empty(
                        "hh:substFont",
                        Attrs::new()
                            .add("face", &substitute.face)
                            .add("type", substitute.kind.as_str())
                            .flag("isEmbedded", false)
                            .add("binaryItemIDRef", ""),
                    )?;
                    xml.end("hh:font")?;
                }
                None => xml.empty("hh:font", attrs)?,
            }
        }
        xml.end("hh:fontface")?;
    }
    xml.end("hh:fontfaces")
}

fn border_attrs(border: &Border) -> Attrs {
    Attrs::new()
        .add("type", border.line)
        .add("width", border.width)
        .color("color", border.color)
}

fn write_border_fill(xml: &mut XmlWriter, id: u32, fill: &BorderFill) -> Result<()> {
    xml.start(
        "hh:borderFill",
        Attrs::new()
            .add("id", id)
            .flag("threeD", fill.three_d)
            .flag("shadow", fill.shadow)
            .add("centerLine", "NONE")
            .flag("breakCellSeparateLine", false),
    )?;
    let no_slash = || {
        Attrs::new()
            .add("type", "NONE")
            .flag("Crooked", false)
            .flag("isCounter", false)
    };
    xml.empty("hh:slash", no_slash())?;
    xml.empty("hh:backSlash", no_slash())?;
    xml.empty("hh:leftBorder", border_attrs(&fill.left))?;
    xml.empty("hh:rightBorder", border_attrs(&fill.right))?;
    xml.empty("hh:topBorder", border_attrs(&fill.top))?;
    xml.empty("hh:bottomBorder", border_attrs(&fill.bottom))?;
    xml.empty("hh:diagonal", border_attrs(&fill.diagonal))?;

    if let Some(brush) = &fill.fill {
        xml.start("hc:fillBrush", Attrs::new())?;
        match brush {
            Fill::Color {
                face,
                hatch_color,
                hatch,
            } => {
                let attrs = Attrs::new()
                    .color("faceColor", *face)
                    .color("hatchColor", *hatch_color)
                    .opt("hatchStyle", *hatch)
                    .add("alpha", 0);
                xml.empty("hc:winBrush", attrs)?;
            }
            Fill::Gradient {
                kind,
                angle,
                center_x,
                center_y,
                colors,
            } => {
                xml.start(
                    "hc:gradation",
                    Attrs::new()
                        .add("type", kind)
                        .add("angle", angle)
                        .add("centerX", center_x)
                        .add("centerY", center_y)
                        .add("step", 255)
                        .add("colorNum", colors.len())
                        .add("stepCenter", 50)
                        .add("alpha", 0),
                )?;
                for color in colors {
                    xml.empty("hc:color", Attrs::new().color("value", *color))?;
                }
                xml.end("hc:gradation")?;
            }
        }
        xml.end("hc:fillBrush")?;
    }
    xml.end("hh:borderFill")
}

fn lang_attrs<T: ToString + Clone>(values: &LangValues<T>) -> Attrs {
    values
        .iter()
        .fold(Attrs::new(), |attrs, (lang, value)| attrs.add(lang.attr(), value.clone()))
}

fn write_char_pr(xml: &mut XmlWriter, id: u32, pr: &CharPr) -> Result<()> {
    xml.start(
        "hh:charPr",
        Attrs::new()
            .add("id", id)
            .add("height", pr.height)
            .color("textColor", pr.text_color)
            .color("shadeColor", pr.shade_color)
            .flag("useFontSpace", false)
            .flag("useKerning", false)
            .add("symMark", "NONE")
            .add("borderFillIDRef", pr.border_fill_id.unwrap_or(0)),
    )?;
    xml.empty("hh:fontRef", lang_attrs(&pr.font_ref))?;
    xml.empty("hh:ratio", lang_attrs(&pr.ratio))?;
    xml.empty("hh:spacing", lang_attrs(&pr.spacing))?;
    xml.empty("hh:relSz", lang_attrs(&pr.rel_size))?;
    xml.empty("hh:offset", lang_attrs(&pr.offset))?;
    if pr.bold {
        xml.empty("hh:bold", Attrs::new())?;
    }
    if pr.italic {
        xml.empty("hh:italic", Attrs::new())?;
    }
    xml.empty(
        "hh:underline",
        Attrs::new()
            .add("type", pr.underline.kind)
            .add("shape", pr.underline.shape)
            .color("color", pr.underline.color),
    )?;
    xml.empty(
        "hh:strikeout",
        Attrs::new()
            .add("shape", pr.strikeout.shape)
            .color("color", pr.strikeout.color),
    )?;
    xml.empty("hh:outline", Attrs::new().add("type", pr.outline))?;
    xml.empty(
        "hh:shadow",
        Attrs::new()
            .add("type", pr.shadow.kind)
            .color("color", pr.shadow.color)
            .add("offsetX", pr.shadow.offset_x)
            .add("offsetY", pr.shadow.offset_y),
    )?;
    for (on, name) in [
        (pr.emboss, "hh:emboss"),
        (pr.engrave, "hh:engrave"),
        (pr.superscript, "hh:supscript"),
        (pr.subscript, "hh:subscript"),
    ] {
        if on {
            xml.empty(name, Attrs::new())?;
        }
    }
    xml.end("hh:charPr")
}

fn write_tab_pr(xml: &mut XmlWriter, id: u32, pr: &TabPr) -> Result<()> {
    let attrs = Attrs::new()
        .add("id", id)
        .flag("autoTabLeft", pr.auto_tab_left)
        .flag("autoTabRight", pr.auto_tab_right);
    if pr.items.is_empty() {
        return xml.empty("hh:tabPr", attrs);
    }
    xml.start("hh:tabPr", attrs)?;
    for item in &pr.items {
        xml.empty(
            "hh:tabItem",
            Attrs::new()
                .add("pos", item.position)
                .add("type", item.kind)
                .add("leader", item.leader),
        )?;
    }
    xml.end("hh:tabPr")
}

fn write_para_head(xml: &mut XmlWriter, head: &ParaHead) -> Result<()> {
    let attrs = Attrs::new()
        .add("start", head.start)
        .add("level", head.level)
        .add("align", head.align)
        .flag("useInstWidth", head.use_inst_width)
        .flag("autoIndent", head.auto_indent)
        .add("widthAdjust", head.width_adjust)
        .add(
            "textOffsetType",
            if head.text_offset_percent { "PERCENT" } else { "HWPUNIT" },
        )
        .add("textOffset", head.text_offset)
        .add("numFormat", head.num_format)
        .add("charPrIDRef", head.char_pr_id.unwrap_or(u32::MAX))
        .flag("checkable", head.checkable);
    xml.leaf("hh:paraHead", attrs, &head.text)
}

fn write_numbering(xml: &mut XmlWriter, id: u32, numbering: &Numbering) -> Result<()> {
    xml.start(
        "hh:numbering",
        Attrs::new().add("id", id).add("start", numbering.start),
    )?;
    for head in &numbering.levels {
        write_para_head(xml, head)?;
    }
    xml.end("hh:numbering")
}

fn write_bullet(xml: &mut XmlWriter, id: u32, bullet: &Bullet) -> Result<()> {
    xml.start(
        "hh:bullet",
        Attrs::new()
            .add("id", id)
            .add("char", bullet.char)
            .opt("checkedChar", bullet.checked_char)
            .flag("useImage", bullet.use_image),
    )?;
    write_para_head(xml, &bullet.head)?;
    xml.end("hh:bullet")
}

fn write_para_pr(xml: &mut XmlWriter, id: u32, pr: &ParaPr) -> Result<()> {
    xml.start(
        "hh:paraPr",
        Attrs::new()
            .add("id", id)
            .add("tabPrIDRef", pr.tab_pr_id)
            .add("condense", pr.condense)
            .flag("fontLineHeight", false)
            .flag("snapToGrid", pr.snap_to_grid)
            .flag("suppressLineNumbers", false)
            .flag("checked", false),
    )?;
    xml.empty(
        "hh:align",
        Attrs::new()
            .add("horizontal", pr.align)
            .add("vertical", pr.vertical_align),
    )?;
    xml.empty(
        "hh:heading",
        Attrs::new()
            .add("type", pr.heading.kind)
            .add("idRef", pr.heading.id_ref)
            .add("level", pr.heading.level),
    )?;
    xml.empty(
        "hh:breakSetting",
        Attrs::new()
            .add("breakLatinWord", pr.break_latin_word)
            .add("breakNonLatinWord", pr.break_non_latin_word)
            .flag("widowOrphan", pr.widow_orphan)
            .flag("keepWithNext", pr.keep_with_next)
            .flag("keepLines", pr.keep_lines)
            .flag("pageBreakBefore", pr.page_break_before)
            .add("lineWrap", "BREAK"),
    )?;
    xml.empty(
        "hh:autoSpacing",
        Attrs::new()
            .flag("eAsianEng", pr.auto_spacing_eng)
            .flag("eAsianNum", pr.auto_spacing_num),
    )?;

    let unit = |value: i32| Attrs::new().add("value", value).add("unit", "HWPUNIT");
    xml.start("hh:margin", Attrs::new())?;
    // sic: the schema spells the indent element "intent"
    xml.empty("hc:intent", unit(pr.margin.indent))?;
    xml.empty("hc:left", unit(pr.margin.left))?;
    xml.empty("hc:right", unit(pr.margin.right))?;
    xml.empty("hc:prev", unit(pr.margin.prev))?;
    xml.empty("hc:next", unit(pr.margin.next))?;
    xml.end("hh:margin")?;

    xml.empty(
        "hh:lineSpacing",
        Attrs::new()
            .add("type", pr.line_spacing.kind)
            .add("value", pr.line_spacing.value)
            .add("unit", "HWPUNIT"),
    )?;
    xml.empty(
        "hh:border",
        Attrs::new()
            .add("borderFillIDRef", pr.border.border_fill_id)
            .add("offsetLeft", pr.border.offset_left)
            .add("offsetRight", pr.border.offset_right)
            .add("offsetTop", pr.border.offset_top)
            .add("offsetBottom", pr.border.offset_bottom)
            .flag("connect", pr.border.connect)
            .flag("ignoreMargin", pr.border.ignore_margin),
    )?;
    xml.end("hh:paraPr")
}

fn write_style(xml: &mut XmlWriter, id: u32, style: &Style) -> Result<()> {
    xml.empty(
        "hh:style",
        Attrs::new()
            .add("id", id)
            .add("type", style.kind)
            .add("name", &style.name)
            .add("engName", &style.eng_name)
            .add("paraPrIDRef", style.para_pr_id)
            .add("charPrIDRef", style.char_pr_id)
            .add("nextStyleIDRef", style.next_style_id)
            .add("langID", style.lang_id)
            .flag("lockForm", style.lock_form),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, HorizontalAlign};

    fn render(header: &Header) -> String {
        String::from_utf8(header_xml(header, 1).unwrap()).unwrap()
    }

    #[test]
    fn test_ids_follow_their_base() {
        let header = Header {
            border_fills: vec![BorderFill::default()],
            char_properties: vec![CharPr::default()],
            ..Default::default()
        };
        let xml = render(&header);
        assert!(xml.contains("<hh:borderFill id=\"1\""));
        assert!(xml.contains("<hh:charPr id=\"0\""));
        assert!(!xml.contains("hh:numberings"));
    }

    #[test]
    fn test_fonts_per_language() {
        let mut header = Header::default();
        header.fonts.latin.push(Font::new("Arial"));
        let xml = render(&header);
        assert!(xml.contains("<hh:fontface lang=\"LATIN\" fontCnt=\"1\">"));
        assert!(xml.contains("face=\"Arial\""));
        assert!(xml.contains("<hh:fontface lang=\"HANGUL\" fontCnt=\"0\">"));
    }

    #[test]
    fn test_char_pr_flags_and_colors() {
        let pr = CharPr {
            bold: true,
            text_color: Color::Rgb(0xFF, 0, 0),
            ..Default::default()
        };
        let header = Header {
            char_properties: vec![pr],
            ..Default::default()
        };
        let xml = render(&header);
        assert!(xml.contains("textColor=\"#FF0000\""));
        assert!(xml.contains("shadeColor=\"none\""));
        assert!(xml.contains("<hh:bold/>"));
        assert!(!xml.contains("<hh:italic/>"));
    }

    #[test]
    fn test_para_pr_margin_block() {
        let pr = ParaPr {
            align: HorizontalAlign::Center,
            ..Default::default()
        };
        let header = Header {
            para_properties: vec![pr],
            ..Default::default()
        };
        let xml = render(&header);
        assert!(xml.contains("horizontal=\"CENTER\""));
        assert!(xml.contains("<hc:intent value=\"0\" unit=\"HWPUNIT\"/>"));
        assert!(xml.contains("<hh:lineSpacing type=\"PERCENT\" value=\"160\""));
    }
}
