//! Drawing objects, notes, headers and numbering controls.

use super::enums;
use super::units::{color, margins};
use super::Translator;
use crate::diagnostics::{DiagnosticKind, Location, Step};
use crate::model::{
    AutoNumber, Crop, Equation, HeaderFooter, LineShape, Note, ObjectCommon, Ole, PageNumber,
    Picture, Shape, ShapeKind, SubList,
};
use crate::source::{
    SourceAutoNumber, SourceEquation, SourceHeaderFooter, SourceNote, SourceObjectCommon,
    SourceOle, SourcePageNumber, SourcePicture, SourceShape, SourceShapeKind,
};

impl<'a> Translator<'a> {
    pub(super) fn object_common(
        &mut self,
        source: &SourceObjectCommon,
        loc: &Location,
    ) -> ObjectCommon {
        let diags = &mut self.diagnostics;
        ObjectCommon {
            id: source.instance_id,
            z_order: source.z_order,
            width: source.width,
            height: source.height,
            treat_as_char: source.treat_as_char,
            text_wrap: enums::TEXT_WRAP.map(source.text_wrap, loc, diags),
            vert_rel_to: enums::VERT_REL.map(source.vert_rel_to, loc, diags),
            horz_rel_to: enums::HORZ_REL.map(source.horz_rel_to, loc, diags),
            vert_offset: source.vert_offset,
            horz_offset: source.horz_offset,
            out_margin: margins(source.out_margin),
            description: source.description.clone(),
        }
    }

    /// Look up the part of a bin-data id; a failed resource drops the object.
    fn bin_item(&mut self, bin_data_id: u16, what: &str, loc: &Location) -> Option<String> {
        let resources = self.ctx.resources;
        match resources.resolve(bin_data_id) {
            Ok(id) => Some(id.to_string()),
            Err(err) => {
                self.warn(
                    DiagnosticKind::ResourcePipeline,
                    loc,
                    format!("{}; {} omitted", err, what),
                );
                None
            }
        }
    }

    pub(super) fn picture(&mut self, source: &SourcePicture, loc: &Location) -> Option<Picture> {
        let bin_item_id = self.bin_item(source.bin_data_id, "picture", loc)?;
        self.stats.picture_count += 1;
        Some(Picture {
            common: self.object_common(&source.common, loc),
            bin_item_id,
            original_width: source.original_width,
            original_height: source.original_height,
            crop: Crop {
                left: source.crop.left,
                top: source.crop.top,
                right: source.crop.right,
                bottom: source.crop.bottom,
            },
            effect: enums::IMAGE_EFFECT.map(source.effect, loc, &mut self.diagnostics),
            bright: source.bright,
            contrast: source.contrast,
        })
    }

    pub(super) fn shape(&mut self, source: &SourceShape, loc: &Location) -> Option<Shape> {
        let kind = match &source.kind {
            SourceShapeKind::Rectangle { ratio } => ShapeKind::Rectangle { ratio: *ratio },
            SourceShapeKind::Ellipse => ShapeKind::Ellipse,
            SourceShapeKind::Line {
                start_x,
                start_y,
                end_x,
                end_y,
            } => ShapeKind::Line {
                start_x: *start_x,
                start_y: *start_y,
                end_x: *end_x,
                end_y: *end_y,
            },
            SourceShapeKind::Polygon { .. } | SourceShapeKind::Arc | SourceShapeKind::Curve => {
                self.warn(
                    DiagnosticKind::UnsupportedEntity,
                    loc,
                    "polygon, arc and curve shapes are not translated; shape omitted",
                );
                return None;
            }
        };

        self.stats.object_count += 1;
        let common = self.object_common(&source.common, loc);
        let line = LineShape {
            color: color(source.line_color),
            width: source.line_width,
            style: enums::BORDER_LINE.map(source.line_kind, loc, &mut self.diagnostics),
        };
        let text = match &source.text {
            Some(text_box) => {
                let text_loc = loc.push(Step::ShapeText);
                let vertical_align =
                    enums::CELL_VALIGN.map(text_box.vertical_align, &text_loc, &mut self.diagnostics);
                Some(SubList {
                    vertical_align,
                    paragraphs: self.sub_paragraphs(&text_box.paragraphs, &text_loc),
                })
            }
            None => None,
        };

        Some(Shape {
            common,
            kind,
            line,
            fill: source.fill_color.map(color),
            text,
        })
    }

    pub(super) fn ole(&mut self, source: &SourceOle, loc: &Location) -> Option<Ole> {
        let bin_item_id = self.bin_item(source.bin_data_id, "OLE object", loc)?;
        self.stats.object_count += 1;
        Some(Ole {
            common: self.object_common(&source.common, loc),
            bin_item_id,
            object_type: enums::OLE_TYPE.map(source.object_type, loc, &mut self.diagnostics),
            extent_x: source.extent_x,
            extent_y: source.extent_y,
        })
    }

    pub(super) fn equation(&mut self, source: &SourceEquation, loc: &Location) -> Equation {
        self.stats.object_count += 1;
        Equation {
            common: self.object_common(&source.common, loc),
            script: source.script.clone(),
            base_unit: source.base_unit,
            text_color: color(source.color),
            baseline: source.baseline as i32,
            version: source.version.clone(),
            font: source.font.clone(),
        }
    }

    pub(super) fn header_footer(
        &mut self,
        source: &SourceHeaderFooter,
        footer: bool,
        loc: &Location,
    ) -> HeaderFooter {
        let inner = loc.push(if footer { Step::Footer } else { Step::Header });
        HeaderFooter {
            id: source.instance_id,
            apply_page: enums::APPLY_PAGE.map(source.apply_page, loc, &mut self.diagnostics),
            content: SubList::new(self.sub_paragraphs(&source.paragraphs, &inner)),
        }
    }

    pub(super) fn note(&mut self, source: &SourceNote, endnote: bool, loc: &Location) -> Note {
        let inner = loc.push(if endnote { Step::Endnote } else { Step::Footnote });
        Note {
            number: source.number,
            inst_id: source.instance_id,
            content: SubList::new(self.sub_paragraphs(&source.paragraphs, &inner)),
        }
    }

    pub(super) fn auto_number(&mut self, source: &SourceAutoNumber, loc: &Location) -> AutoNumber {
        let diags = &mut self.diagnostics;
        AutoNumber {
            kind: enums::AUTONUM.map(source.kind, loc, diags),
            num: source.number,
            format: enums::number_format(source.format, loc, diags),
            user_char: source.user_char,
            prefix: source.prefix,
            suffix: source.suffix,
        }
    }

    pub(super) fn page_number(&mut self, source: &SourcePageNumber, loc: &Location) -> PageNumber {
        let diags = &mut self.diagnostics;
        PageNumber {
            position: enums::PAGE_NUM_POS.map(source.position, loc, diags),
            format: enums::number_format(source.format, loc, diags),
            side_char: source.side_char,
        }
    }
}
