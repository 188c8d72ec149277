//! `Contents/section{N}.xml`: paragraphs, runs and the objects they hold.

use super::xml::{content_namespaces, Attrs, XmlWriter};
use crate::error::Result;
use crate::model::{
    AutoNumber, CellSlot, ColumnProperties, Equation, FieldBegin, HeaderFooter, Margins, Note,
    ObjectCommon, Ole, PageNumber, Paragraph, Picture, Run, RunItem, Section, SectionProperties,
    Shape, ShapeKind, SubList, Table, TextSegment,
};

/// Serialize one section.
pub fn section_xml(section: &Section) -> Result<Vec<u8>> {
    let mut writer = SectionWriter {
        xml: XmlWriter::new()?,
        properties: &section.properties,
    };
    writer.xml.start("hs:sec", content_namespaces(Attrs::new()))?;
    writer.paragraphs(&section.paragraphs)?;
    writer.xml.end("hs:sec")?;
    Ok(writer.xml.finish())
}

fn margin_attrs(margins: &Margins) -> Attrs {
    Attrs::new()
        .add("left", margins.left)
        .add("right", margins.right)
        .add("top", margins.top)
        .add("bottom", margins.bottom)
}

fn char_attr(attrs: Attrs, key: &'static str, value: Option<char>) -> Attrs {
    attrs.add(key, value.map(String::from).unwrap_or_default())
}

struct SectionWriter<'a> {
    xml: XmlWriter,
    properties: &'a SectionProperties,
}

impl<'a> SectionWriter<'a> {
    fn paragraphs(&mut self, paragraphs: &[Paragraph]) -> Result<()> {
        for paragraph in paragraphs {
            self.paragraph(paragraph)?;
        }
        Ok(())
    }

    fn paragraph(&mut self, paragraph: &Paragraph) -> Result<()> {
        self.xml.start(
            "hp:p",
            Attrs::new()
                .add("id", paragraph.id)
                .add("paraPrIDRef", paragraph.para_pr_id)
                .add("styleIDRef", paragraph.style_id)
                .flag("pageBreak", paragraph.page_break)
                .flag("columnBreak", paragraph.column_break)
                .flag("merged", false),
        )?;
        for run in &paragraph.runs {
            self.run(run)?;
        }
        self.xml.end("hp:p")
    }

    fn run(&mut self, run: &Run) -> Result<()> {
        let attrs = Attrs::new().add("charPrIDRef", run.char_pr_id);
        if run.items.is_empty() {
            return self.xml.empty("hp:run", attrs);
        }
        self.xml.start("hp:run", attrs)?;
        for item in &run.items {
            self.item(item)?;
        }
        self.xml.end("hp:run")
    }

    fn item(&mut self, item: &RunItem) -> Result<()> {
        match item {
            RunItem::Text(segments) => self.text(segments),
            RunItem::SectionDefinition => self.section_properties(),
            RunItem::Columns(columns) => self.ctrl(|w| w.columns(columns)),
            RunItem::Table(table) => self.table(table),
            RunItem::Picture(picture) => self.picture(picture),
            RunItem::Shape(shape) => self.shape(shape),
            RunItem::Ole(ole) => self.ole(ole),
            RunItem::Equation(equation) => self.equation(equation),
            RunItem::Header(header) => self.ctrl(|w| w.header_footer("hp:header", header)),
            RunItem::Footer(footer) => self.ctrl(|w| w.header_footer("hp:footer", footer)),
            RunItem::Footnote(note) => self.ctrl(|w| w.note("hp:footNote", note)),
            RunItem::Endnote(note) => self.ctrl(|w| w.note("hp:endNote", note)),
            RunItem::FieldBegin(field) => self.ctrl(|w| w.field_begin(field)),
            RunItem::FieldEnd { begin_id } => self.ctrl(|w| {
                w.xml.empty(
                    "hp:fieldEnd",
                    Attrs::new().add("beginIDRef", begin_id).add("fieldid", begin_id),
                )
            }),
            RunItem::Bookmark { name } => {
                self.ctrl(|w| w.xml.empty("hp:bookmark", Attrs::new().add("name", name)))
            }
            RunItem::AutoNumber(number) => self.ctrl(|w| w.auto_number(number)),
            RunItem::PageNumber(number) => self.ctrl(|w| w.page_number(number)),
        }
    }

    /// Wrap control content in `<hp:ctrl>`.
    fn ctrl(&mut self, body: impl FnOnce(&mut Self) -> Result<()>) -> Result<()> {
        self.xml.start("hp:ctrl", Attrs::new())?;
        body(self)?;
        self.xml.end("hp:ctrl")
    }

    fn text(&mut self, segments: &[TextSegment]) -> Result<()> {
        if segments.is_empty() {
            return self.xml.empty("hp:t", Attrs::new());
        }
        self.xml.start("hp:t", Attrs::new())?;
        for segment in segments {
            match segment {
                TextSegment::Text(text) => self.xml.text(text)?,
                TextSegment::Tab => self.xml.empty("hp:tab", Attrs::new())?,
                TextSegment::LineBreak => self.xml.empty("hp:lineBreak", Attrs::new())?,
                TextSegment::Hyphen => self.xml.empty("hp:hyphen", Attrs::new())?,
                TextSegment::NbSpace => self.xml.empty("hp:nbSpace", Attrs::new())?,
                TextSegment::FwSpace => self.xml.empty("hp:fwSpace", Attrs::new())?,
            }
        }
        self.xml.end("hp:t")
    }

    fn section_properties(&mut self) -> Result<()> {
        let props = self.properties;
        self.xml.start(
            "hp:secPr",
            Attrs::new()
                .add("id", "")
                .add("textDirection", props.text_direction)
                .add("spaceColumns", props.space_columns)
                .add("tabStop", props.tab_stop)
                .add("tabStopUnit", "HWPUNIT")
                .add("outlineShapeIDRef", props.outline_numbering_id)
                .add("memoShapeIDRef", 0)
                .flag("textVerticalWidthHead", false)
                .add("masterPageCnt", 0),
        )?;
        self.xml.empty(
            "hp:grid",
            Attrs::new()
                .add("lineGrid", 0)
                .add("charGrid", 0)
                .flag("wonggojiFormat", false),
        )?;
        let start = &props.start_numbers;
        self.xml.empty(
            "hp:startNum",
            Attrs::new()
                .add("pageStartsOn", "BOTH")
                .add("page", start.page)
                .add("pic", start.picture)
                .add("tbl", start.table)
                .add("equation", start.equation),
        )?;
        self.xml.empty(
            "hp:visibility",
            Attrs::new()
                .flag("hideFirstHeader", props.hide_first_header)
                .flag("hideFirstFooter", props.hide_first_footer)
                .flag("hideFirstMasterPage", false)
                .add("border", "SHOW_ALL")
                .add("fill", "SHOW_ALL")
                .flag("hideFirstPageNum", props.hide_first_page_number)
                .flag("hideFirstEmptyLine", false)
                .flag("showLineNumber", false),
        )?;

        let page = &props.page;
        self.xml.start(
            "hp:pagePr",
            Attrs::new()
                // WIDELY is portrait in OWPML
                .add("landscape", if page.landscape { "NARROWLY" } else { "WIDELY" })
                .add("width", page.width)
                .add("height", page.height)
                .add("gutterType", page.gutter),
        )?;
        let margin = &page.margin;
        self.xml.empty(
            "hp:margin",
            Attrs::new()
                .add("header", margin.header)
                .add("footer", margin.footer)
                .add("gutter", margin.gutter)
                .add("left", margin.left)
                .add("right", margin.right)
                .add("top", margin.top)
                .add("bottom", margin.bottom),
        )?;
        self.xml.end("hp:pagePr")?;

        for fill in &props.page_border_fills {
            self.xml.start(
                "hp:pageBorderFill",
                Attrs::new()
                    .add("type", fill.kind)
                    .add("borderFillIDRef", fill.border_fill_id)
                    .add("textBorder", if fill.text_border { "CONTENT" } else { "PAPER" })
                    .flag("headerInside", fill.header_inside)
                    .flag("footerInside", fill.footer_inside)
                    .add("fillArea", "PAPER"),
            )?;
            self.xml.empty("hp:offset", margin_attrs(&fill.offset))?;
            self.xml.end("hp:pageBorderFill")?;
        }
        self.xml.end("hp:secPr")
    }

    fn columns(&mut self, columns: &ColumnProperties) -> Result<()> {
        let attrs = Attrs::new()
            .add("id", "")
            .add("type", columns.kind)
            .add("layout", columns.layout)
            .add("colCount", columns.count)
            .flag("sameSz", columns.same_size)
            .add("sameGap", columns.same_gap);
        let explicit = !columns.same_size && !columns.widths.is_empty();
        if columns.separator.is_none() && !explicit {
            return self.xml.empty("hp:colPr", attrs);
        }
        self.xml.start("hp:colPr", attrs)?;
        if let Some(line) = &columns.separator {
            self.xml.empty(
                "hp:colLine",
                Attrs::new()
                    .add("type", line.line)
                    .add("width", line.width)
                    .color("color", line.color),
            )?;
        }
        if explicit {
            for width in &columns.widths {
                self.xml.empty(
                    "hp:colSz",
                    Attrs::new().add("width", width.width).add("gap", width.gap),
                )?;
            }
        }
        self.xml.end("hp:colPr")
    }

    fn sub_list(&mut self, list: &SubList) -> Result<()> {
        self.xml.start(
            "hp:subList",
            Attrs::new()
                .add("id", "")
                .add("textDirection", "HORIZONTAL")
                .add("lineWrap", "BREAK")
                .add("vertAlign", list.vertical_align)
                .add("linkListIDRef", 0)
                .add("linkListNextIDRef", 0)
                .add("textWidth", 0)
                .add("textHeight", 0)
                .flag("hasTextRef", false)
                .flag("hasNumRef", false),
        )?;
        self.paragraphs(&list.paragraphs)?;
        self.xml.end("hp:subList")
    }

    fn object_attrs(common: &ObjectCommon, numbering: &str) -> Attrs {
        Attrs::new()
            .add("id", common.id)
            .add("zOrder", common.z_order)
            .add("numberingType", numbering)
            .add("textWrap", common.text_wrap)
            .add("textFlow", "BOTH_SIDES")
            .flag("lock", false)
            .add("dropcapstyle", "None")
    }

    /// `sz`, `pos` and `outMargin`, shared by every positioned object.
    fn placement(&mut self, common: &ObjectCommon) -> Result<()> {
        self.xml.empty(
            "hp:sz",
            Attrs::new()
                .add("width", common.width)
                .add("widthRelTo", "ABSOLUTE")
                .add("height", common.height)
                .add("heightRelTo", "ABSOLUTE")
                .flag("protect", false),
        )?;
        self.xml.empty(
            "hp:pos",
            Attrs::new()
                .flag("treatAsChar", common.treat_as_char)
                .flag("affectLSpacing", false)
                .flag("flowWithText", true)
                .flag("allowOverlap", false)
                .flag("holdAnchorAndSO", false)
                .add("vertRelTo", common.vert_rel_to)
                .add("horzRelTo", common.horz_rel_to)
                .add("vertAlign", "TOP")
                .add("horzAlign", "LEFT")
                .add("vertOffset", common.vert_offset)
                .add("horzOffset", common.horz_offset),
        )?;
        self.xml.empty("hp:outMargin", margin_attrs(&common.out_margin))
    }

    fn comment(&mut self, common: &ObjectCommon) -> Result<()> {
        if common.description.is_empty() {
            return Ok(());
        }
        self.xml.leaf("hp:shapeComment", Attrs::new(), &common.description)
    }

    /// Size and transform children of drawing objects.
    fn shape_geometry(&mut self, common: &ObjectCommon, org: (i32, i32)) -> Result<()> {
        self.xml.empty("hp:offset", Attrs::new().add("x", 0).add("y", 0))?;
        self.xml.empty(
            "hp:orgSz",
            Attrs::new().add("width", org.0).add("height", org.1),
        )?;
        self.xml.empty(
            "hp:curSz",
            Attrs::new().add("width", common.width).add("height", common.height),
        )?;
        self.xml.empty(
            "hp:flip",
            Attrs::new().flag("horizontal", false).flag("vertical", false),
        )?;
        self.xml.empty(
            "hp:rotationInfo",
            Attrs::new()
                .add("angle", 0)
                .add("centerX", common.width / 2)
                .add("centerY", common.height / 2)
                .flag("rotateimage", true),
        )
    }

    fn table(&mut self, table: &Table) -> Result<()> {
        self.xml.start(
            "hp:tbl",
            Self::object_attrs(&table.common, "TABLE")
                .add("pageBreak", "CELL")
                .flag("repeatHeader", table.repeat_header)
                .add("rowCnt", table.row_count)
                .add("colCnt", table.col_count)
                .add("cellSpacing", table.cell_spacing)
                .add("borderFillIDRef", table.border_fill_id)
                .flag("noAdjust", false),
        )?;
        self.placement(&table.common)?;
        self.xml.empty("hp:inMargin", margin_attrs(&table.in_margin))?;
        for row in &table.grid {
            self.xml.start("hp:tr", Attrs::new())?;
            for slot in row {
                // covered slots are implied by the anchor's span
                let CellSlot::Anchor(cell) = slot else {
                    continue;
                };
                self.xml.start(
                    "hp:tc",
                    Attrs::new()
                        .add("name", "")
                        .flag("header", cell.header)
                        .flag("hasMargin", cell.margin != Margins::default())
                        .flag("protect", false)
                        .flag("editable", false)
                        .flag("dirty", false)
                        .add("borderFillIDRef", cell.border_fill_id),
                )?;
                self.sub_list(&cell.content)?;
                self.xml.empty(
                    "hp:cellAddr",
                    Attrs::new().add("colAddr", cell.col).add("rowAddr", cell.row),
                )?;
                self.xml.empty(
                    "hp:cellSpan",
                    Attrs::new()
                        .add("colSpan", cell.col_span)
                        .add("rowSpan", cell.row_span),
                )?;
                self.xml.empty(
                    "hp:cellSz",
                    Attrs::new().add("width", cell.width).add("height", cell.height),
                )?;
                self.xml.empty("hp:cellMargin", margin_attrs(&cell.margin))?;
                self.xml.end("hp:tc")?;
            }
            self.xml.end("hp:tr")?;
        }
        self.xml.end("hp:tbl")
    }

    fn picture(&mut self, picture: &Picture) -> Result<()> {
        let common = &picture.common;
        self.xml.start(
            "hp:pic",
            Self::object_attrs(common, "PICTURE")
                .add("href", "")
                .add("groupLevel", 0)
                .add("instid", common.id)
                .flag("reverse", false),
        )?;
        self.shape_geometry(common, (picture.original_width, picture.original_height))?;
        self.xml.empty(
            "hp:imgClip",
            Attrs::new()
                .add("left", picture.crop.left)
                .add("right", picture.crop.right)
                .add("top", picture.crop.top)
                .add("bottom", picture.crop.bottom),
        )?;
        self.xml.empty(
            "hp:imgDim",
            Attrs::new()
                .add("dimwidth", picture.original_width)
                .add("dimheight", picture.original_height),
        )?;
        self.xml.empty(
            "hc:img",
            Attrs::new()
                .add("binaryItemIDRef", &picture.bin_item_id)
                .add("bright", picture.bright)
                .add("contrast", picture.contrast)
                .add("effect", picture.effect)
                .add("alpha", 0),
        )?;
        self.placement(common)?;
        self.comment(common)?;
        self.xml.end("hp:pic")
    }

    fn shape(&mut self, shape: &Shape) -> Result<()> {
        let common = &shape.common;
        let name = format!("hp:{}", shape.kind.element());
        let mut attrs = Self::object_attrs(common, "PICTURE")
            .add("href", "")
            .add("groupLevel", 0)
            .add("instid", common.id);
        attrs = match &shape.kind {
            ShapeKind::Rectangle { ratio } => attrs.add("ratio", ratio),
            ShapeKind::Ellipse => attrs
                .flag("intervalDirty", false)
                .flag("hasArcPr", false)
                .add("arcType", "NORMAL"),
            ShapeKind::Line { .. } => attrs.flag("isReverseHV", false),
        };
        self.xml.start(&name, attrs)?;
        self.shape_geometry(common, (common.width, common.height))?;
        self.xml.empty(
            "hp:lineShape",
            Attrs::new()
                .color("color", shape.line.color)
                .add("width", shape.line.width)
                .add("style", shape.line.style)
                .add("endCap", "FLAT")
                .add("headStyle", "NORMAL")
                .add("tailStyle", "NORMAL")
                .flag("headfill", true)
                .flag("tailfill", true)
                .add("headSz", "MEDIUM_MEDIUM")
                .add("tailSz", "MEDIUM_MEDIUM")
                .add("outlineStyle", "NORMAL")
                .add("alpha", 0),
        )?;
        if let Some(face) = shape.fill {
            self.xml.start("hc:fillBrush", Attrs::new())?;
            self.xml.empty(
                "hc:winBrush",
                Attrs::new()
                    .color("faceColor", face)
                    .add("hatchColor", "#000000")
                    .add("alpha", 0),
            )?;
            self.xml.end("hc:fillBrush")?;
        }
        if let Some(text) = &shape.text {
            self.xml.start(
                "hp:drawText",
                Attrs::new()
                    .add("lastWidth", common.width)
                    .add("name", "")
                    .flag("editable", false),
            )?;
            self.sub_list(text)?;
            self.xml.empty("hp:textMargin", margin_attrs(&Margins::uniform(283)))?;
            self.xml.end("hp:drawText")?;
        }

        let (w, h) = (common.width, common.height);
        match &shape.kind {
            ShapeKind::Rectangle { .. } => {
                for (pt, (x, y)) in [("hc:pt0", (0, 0)), ("hc:pt1", (w, 0)), ("hc:pt2", (w, h)), ("hc:pt3", (0, h))] {
                    self.xml.empty(pt, Attrs::new().add("x", x).add("y", y))?;
                }
            }
            ShapeKind::Ellipse => {
                self.xml.empty("hc:center", Attrs::new().add("x", w / 2).add("y", h / 2))?;
                self.xml.empty("hc:ax1", Attrs::new().add("x", w).add("y", h / 2))?;
                self.xml.empty("hc:ax2", Attrs::new().add("x", w / 2).add("y", 0))?;
            }
            ShapeKind::Line {
                start_x,
                start_y,
                end_x,
                end_y,
            } => {
                self.xml.empty("hc:startPt", Attrs::new().add("x", start_x).add("y", start_y))?;
                self.xml.empty("hc:endPt", Attrs::new().add("x", end_x).add("y", end_y))?;
            }
        }
        self.placement(common)?;
        self.comment(common)?;
        self.xml.end(&name)
    }

    fn ole(&mut self, ole: &Ole) -> Result<()> {
        let common = &ole.common;
        self.xml.start(
            "hp:ole",
            Self::object_attrs(common, "PICTURE")
                .add("href", "")
                .add("groupLevel", 0)
                .add("instid", common.id)
                .add("objectType", ole.object_type)
                .add("binaryItemIDRef", &ole.bin_item_id)
                .flag("hasMoniker", false)
                .add("drawAspect", "CONTENT")
                .add("eqBaseLine", 0),
        )?;
        self.shape_geometry(common, (common.width, common.height))?;
        self.xml.empty(
            "hc:extent",
            Attrs::new().add("x", ole.extent_x).add("y", ole.extent_y),
        )?;
        self.placement(common)?;
        self.comment(common)?;
        self.xml.end("hp:ole")
    }

    fn equation(&mut self, equation: &Equation) -> Result<()> {
        let common = &equation.common;
        self.xml.start(
            "hp:equation",
            Self::object_attrs(common, "EQUATION")
                .add("version", &equation.version)
                .add("baseLine", equation.baseline)
                .color("textColor", equation.text_color)
                .add("baseUnit", equation.base_unit)
                .add("lineMode", "CHAR")
                .add("font", &equation.font),
        )?;
        self.placement(common)?;
        self.comment(common)?;
        self.xml.leaf("hp:script", Attrs::new(), &equation.script)?;
        self.xml.end("hp:equation")
    }

    fn header_footer(&mut self, name: &str, header: &HeaderFooter) -> Result<()> {
        self.xml.start(
            name,
            Attrs::new()
                .add("id", header.id)
                .add("applyPageType", header.apply_page),
        )?;
        self.sub_list(&header.content)?;
        self.xml.end(name)
    }

    fn note(&mut self, name: &str, note: &Note) -> Result<()> {
        self.xml.start(
            name,
            Attrs::new().add("number", note.number).add("instId", note.inst_id),
        )?;
        self.sub_list(&note.content)?;
        self.xml.end(name)
    }

    fn field_begin(&mut self, field: &FieldBegin) -> Result<()> {
        self.xml.start(
            "hp:fieldBegin",
            Attrs::new()
                .add("id", field.id)
                .add("type", field.kind)
                .add("name", &field.name)
                .flag("editable", field.editable)
                .flag("dirty", field.dirty)
                .add("zorder", -1)
                .add("fieldid", field.id),
        )?;
        self.xml.start("hp:parameters", Attrs::new().add("cnt", 1).add("name", ""))?;
        self.xml.leaf(
            "hp:stringParam",
            Attrs::new().add("name", "Command"),
            &field.command,
        )?;
        self.xml.end("hp:parameters")?;
        self.xml.end("hp:fieldBegin")
    }

    fn auto_number(&mut self, number: &AutoNumber) -> Result<()> {
        self.xml.start(
            "hp:autoNum",
            Attrs::new().add("num", number.num).add("numType", number.kind),
        )?;
        let format = Attrs::new().add("type", number.format);
        let format = char_attr(format, "userChar", number.user_char);
        let format = char_attr(format, "prefixChar", number.prefix);
        let format = char_attr(format, "suffixChar", number.suffix).flag("supscript", false);
        self.xml.empty("hp:autoNumFormat", format)?;
        self.xml.end("hp:autoNum")
    }

    fn page_number(&mut self, number: &PageNumber) -> Result<()> {
        let attrs = Attrs::new()
            .add("pos", number.position)
            .add("formatType", number.format);
        self.xml
            .empty("hp:pageNum", char_attr(attrs, "sideChar", number.side_char))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, FieldKind};

    fn render(section: &Section) -> String {
        String::from_utf8(section_xml(section).unwrap()).unwrap()
    }

    #[test]
    fn test_text_segments_inline() {
        let mut run = Run::new(3);
        run.push_char('a');
        run.push_segment(TextSegment::Tab);
        run.push_char('<');
        let mut paragraph = Paragraph::new();
        paragraph.add_run(run);
        let mut section = Section::new();
        section.add_paragraph(paragraph);

        let xml = render(&section);
        assert!(xml.contains("<hp:run charPrIDRef=\"3\"><hp:t>a<hp:tab/>&lt;</hp:t></hp:run>"));
    }

    #[test]
    fn test_section_definition_uses_section_properties() {
        let mut section = Section::new();
        section.properties.page.landscape = true;
        let mut run = Run::new(0);
        run.items.push(RunItem::SectionDefinition);
        let mut paragraph = Paragraph::new();
        paragraph.add_run(run);
        section.add_paragraph(paragraph);

        let xml = render(&section);
        assert!(xml.contains("<hp:secPr "));
        assert!(xml.contains("landscape=\"NARROWLY\" width=\"59528\""));
    }

    #[test]
    fn test_covered_slots_are_not_written() {
        let mut anchor = Cell::empty(0, 0, 1);
        anchor.col_span = 2;
        let table = Table {
            common: ObjectCommon::default(),
            row_count: 1,
            col_count: 2,
            cell_spacing: 0,
            in_margin: Margins::default(),
            border_fill_id: 1,
            repeat_header: false,
            grid: vec![vec![
                CellSlot::Anchor(anchor),
                CellSlot::Covered {
                    anchor_row: 0,
                    anchor_col: 0,
                },
            ]],
        };
        let mut run = Run::new(0);
        run.items.push(RunItem::Table(Box::new(table)));
        let mut paragraph = Paragraph::new();
        paragraph.add_run(run);
        let mut section = Section::new();
        section.add_paragraph(paragraph);

        let xml = render(&section);
        assert_eq!(xml.matches("<hp:tc ").count(), 1);
        assert!(xml.contains("<hp:cellSpan colSpan=\"2\" rowSpan=\"1\"/>"));
    }

    #[test]
    fn test_field_pair_wrapped_in_ctrl() {
        let mut run = Run::new(0);
        run.items.push(RunItem::FieldBegin(FieldBegin {
            id: 7,
            kind: FieldKind::Hyperlink,
            name: String::new(),
            command: "https://example.com".to_string(),
            editable: false,
            dirty: false,
        }));
        run.items.push(RunItem::FieldEnd { begin_id: 7 });
        let mut paragraph = Paragraph::new();
        paragraph.add_run(run);
        let mut section = Section::new();
        section.add_paragraph(paragraph);

        let xml = render(&section);
        assert!(xml.contains("<hp:ctrl><hp:fieldBegin id=\"7\" type=\"HYPERLINK\""));
        assert!(xml.contains(">https://example.com</hp:stringParam>"));
        assert!(xml.contains("<hp:ctrl><hp:fieldEnd beginIDRef=\"7\""));
    }
}
