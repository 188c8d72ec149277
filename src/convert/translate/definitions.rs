//! DocInfo definitions to header definitions.
//!
//! These functions are pure: nested references (fonts, border fills, char
//! shapes) are resolved by the caller and passed in as target ids, so the
//! returned value can be deduplicated by structural equality.

use super::enums;
use super::units::{color, half_units};
use crate::diagnostics::{DiagnosticKind, Diagnostics, Location};
use crate::model::{
    Border, BorderFill, Bullet, CharPr, Fill, Font, Heading, HeadingType, LangValues, LineSpacing,
    LineSpacingType, Numbering, ParaBorder, ParaHead, ParaMargin, ParaPr, Shadow, Strikeout,
    Style, SubstituteFont, TabItem, TabPr, Underline,
};
use crate::source::{
    CharShape, FaceName, ParaShape, SourceBorder, SourceBorderFill, SourceBullet, SourceFill,
    SourceNumbering, SourceParaHead, SourceStyle, TabDef,
};

/// Face used when a font reference cannot be resolved.
pub const DEFAULT_FACE: &str = "함초롬바탕";

/// Name of the substitute paragraph style.
pub const DEFAULT_STYLE_NAME: &str = "바탕글";

pub fn font(face: &FaceName) -> Font {
    Font {
        face: face.name.clone(),
        kind: enums::font_kind(face.kind),
        substitute: face.substitute.as_ref().map(|s| SubstituteFont {
            face: s.name.clone(),
            kind: enums::font_kind(s.kind),
        }),
    }
}

fn border(edge: &SourceBorder, loc: &Location, diags: &mut Diagnostics) -> Border {
    Border {
        line: enums::BORDER_LINE.map(edge.kind, loc, diags),
        width: enums::BORDER_WIDTH.map(edge.width, loc, diags),
        color: color(edge.color),
    }
}

pub fn border_fill(
    source: &SourceBorderFill,
    loc: &Location,
    diags: &mut Diagnostics,
) -> BorderFill {
    let fill = match &source.fill {
        None => None,
        Some(SourceFill::Color {
            background,
            pattern_color,
            pattern,
        }) => Some(Fill::Color {
            face: color(*background),
            hatch_color: color(*pattern_color),
            hatch: match pattern {
                0 => None,
                code => Some(enums::HATCH.map(*code, loc, diags)),
            },
        }),
        Some(SourceFill::Gradient {
            kind,
            angle,
            center_x,
            center_y,
            colors,
        }) => Some(Fill::Gradient {
            kind: enums::GRADIENT.map(*kind, loc, diags),
            angle: *angle as i32,
            center_x: *center_x as i32,
            center_y: *center_y as i32,
            colors: colors.iter().map(|c| color(*c)).collect(),
        }),
        Some(SourceFill::Image { bin_data_id }) => {
            diags.push(
                DiagnosticKind::UnsupportedEntity,
                loc.clone(),
                format!("image fill (bin data {}) dropped from border fill", bin_data_id),
            );
            None
        }
    };

    BorderFill {
        three_d: source.three_d,
        shadow: source.shadow,
        left: border(&source.left, loc, diags),
        right: border(&source.right, loc, diags),
        top: border(&source.top, loc, diags),
        bottom: border(&source.bottom, loc, diags),
        diagonal: border(&source.diagonal, loc, diags),
        fill,
    }
}

pub fn char_pr(
    shape: &CharShape,
    font_ref: LangValues<u32>,
    border_fill_id: Option<u32>,
    loc: &Location,
    diags: &mut Diagnostics,
) -> CharPr {
    CharPr {
        height: shape.base_size,
        text_color: color(shape.text_color),
        shade_color: color(shape.shade_color),
        border_fill_id,
        font_ref,
        ratio: shape.ratios.clone(),
        spacing: shape.spacings.clone(),
        rel_size: shape.rel_sizes.clone(),
        offset: shape.offsets.clone(),
        bold: shape.bold,
        italic: shape.italic,
        underline: Underline {
            kind: enums::UNDERLINE_KIND.map(shape.underline_kind, loc, diags),
            shape: enums::LINE_SHAPE.map(shape.underline_shape, loc, diags),
            color: color(shape.underline_color),
        },
        strikeout: if shape.strikeout {
            Strikeout {
                shape: enums::LINE_SHAPE.map(shape.strikeout_shape, loc, diags),
                color: color(shape.strikeout_color),
            }
        } else {
            Strikeout::default()
        },
        outline: enums::OUTLINE.map(shape.outline, loc, diags),
        shadow: Shadow {
            kind: enums::SHADOW.map(shape.shadow, loc, diags),
            color: color(shape.shadow_color),
            offset_x: shape.shadow_gap_x,
            offset_y: shape.shadow_gap_y,
        },
        emboss: shape.emboss,
        engrave: shape.engrave,
        superscript: shape.superscript,
        subscript: shape.subscript,
    }
}

pub fn tab_pr(def: &TabDef, loc: &Location, diags: &mut Diagnostics) -> TabPr {
    TabPr {
        auto_tab_left: def.auto_tab_left,
        auto_tab_right: def.auto_tab_right,
        items: def
            .items
            .iter()
            .map(|item| TabItem {
                position: item.position,
                kind: enums::TAB_KIND.map(item.kind, loc, diags),
                leader: enums::BORDER_LINE.map(item.fill_type, loc, diags),
            })
            .collect(),
    }
}

pub fn para_head(
    head: &SourceParaHead,
    level: u8,
    char_pr_id: Option<u32>,
    loc: &Location,
    diags: &mut Diagnostics,
) -> ParaHead {
    ParaHead {
        level,
        start: head.start,
        align: enums::HEAD_ALIGN.map(head.align, loc, diags),
        use_inst_width: head.use_inst_width,
        auto_indent: head.auto_indent,
        width_adjust: head.width_adjust as i32,
        text_offset_percent: head.text_offset_percent,
        text_offset: head.text_offset as i32,
        num_format: enums::number_format(head.number_format, loc, diags),
        char_pr_id,
        checkable: head.checkable,
        text: head.format.clone(),
    }
}

/// `level_char_prs[i]` is the resolved char pr of level `i`.
pub fn numbering(
    source: &SourceNumbering,
    level_char_prs: &[Option<u32>],
    loc: &Location,
    diags: &mut Diagnostics,
) -> Numbering {
    let levels = source
        .levels
        .iter()
        .enumerate()
        .map(|(i, head)| {
            let char_pr = level_char_prs.get(i).copied().flatten();
            para_head(head, (i + 1) as u8, char_pr, loc, diags)
        })
        .collect();
    Numbering {
        start: source.start,
        levels,
    }
}

pub fn bullet(
    source: &SourceBullet,
    char_pr_id: Option<u32>,
    loc: &Location,
    diags: &mut Diagnostics,
) -> Bullet {
    Bullet {
        char: source.char,
        checked_char: source.checked_char,
        use_image: source.image_bullet,
        head: para_head(&source.head, 0, char_pr_id, loc, diags),
    }
}

/// Target ids a paragraph shape depends on.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParaPrRefs {
    pub tab_pr_id: u32,
    pub heading_kind: HeadingType,
    /// Numbering or bullet id, 0 for none
    pub heading_id: u32,
    pub border_fill_id: u32,
}

pub fn heading_kind(shape: &ParaShape, loc: &Location, diags: &mut Diagnostics) -> HeadingType {
    enums::HEADING.map(shape.heading_type, loc, diags)
}

pub fn para_pr(
    shape: &ParaShape,
    refs: ParaPrRefs,
    loc: &Location,
    diags: &mut Diagnostics,
) -> ParaPr {
    let line_kind = enums::LINE_SPACING.map(shape.line_spacing_type, loc, diags);
    let line_value = match line_kind {
        LineSpacingType::Percent => shape.line_spacing,
        _ => half_units(shape.line_spacing),
    };

    ParaPr {
        align: enums::ALIGNMENT.map(shape.alignment, loc, diags),
        vertical_align: enums::VERTICAL_TEXT_ALIGN.map(shape.vertical_align, loc, diags),
        heading: Heading {
            kind: refs.heading_kind,
            id_ref: refs.heading_id,
            level: shape.heading_level,
        },
        tab_pr_id: refs.tab_pr_id,
        condense: shape.condense,
        snap_to_grid: shape.snap_to_grid,
        break_latin_word: enums::BREAK_LATIN.map(shape.break_latin_word, loc, diags),
        break_non_latin_word: enums::BREAK_NON_LATIN.map(shape.break_non_latin_word, loc, diags),
        widow_orphan: shape.widow_orphan,
        keep_with_next: shape.keep_with_next,
        keep_lines: shape.keep_lines,
        page_break_before: shape.page_break_before,
        auto_spacing_eng: shape.auto_spacing_eng,
        auto_spacing_num: shape.auto_spacing_num,
        margin: ParaMargin {
            indent: half_units(shape.indent),
            left: half_units(shape.left_margin),
            right: half_units(shape.right_margin),
            prev: half_units(shape.prev_spacing),
            next: half_units(shape.next_spacing),
        },
        line_spacing: LineSpacing {
            kind: line_kind,
            value: line_value,
        },
        border: ParaBorder {
            border_fill_id: refs.border_fill_id,
            offset_left: shape.border_offset_left as i32,
            offset_right: shape.border_offset_right as i32,
            offset_top: shape.border_offset_top as i32,
            offset_bottom: shape.border_offset_bottom as i32,
            connect: shape.connect_border,
            ignore_margin: shape.ignore_margin,
        },
    }
}

/// Style with its next-style link left at `next_style_id`; the caller
/// repoints it once every style has an id.
pub fn style(
    source: &SourceStyle,
    para_pr_id: u32,
    char_pr_id: u32,
    next_style_id: u32,
    loc: &Location,
    diags: &mut Diagnostics,
) -> Style {
    Style {
        kind: enums::STYLE_KIND.map(source.kind, loc, diags),
        name: source.name.clone(),
        eng_name: source.english_name.clone(),
        para_pr_id,
        char_pr_id,
        next_style_id,
        lang_id: source.lang_id,
        lock_form: source.lock_form,
    }
}

/// Paragraph style used for dangling style references.
pub fn default_style(para_pr_id: u32, char_pr_id: u32) -> Style {
    Style {
        name: DEFAULT_STYLE_NAME.to_string(),
        eng_name: "Normal".to_string(),
        para_pr_id,
        char_pr_id,
        lang_id: 1042,
        ..Default::default()
    }
}
