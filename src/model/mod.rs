//! Target document model.
//!
//! This module defines the format-neutral representation that the converter
//! produces and the writer serializes. Every cross reference in the tree is a
//! target-scoped id that resolves into the document's [`Header`] definition
//! tables or its [`BinItem`] list; nothing points back into the source model.

mod document;
mod enums;
mod header;
mod object;
mod paragraph;
mod resource;
mod section;
mod table;

pub use document::{Document, Metadata};
pub use enums::{
    ApplyPage, AutoNumKind, BorderWidth, BreakLatinWord, BreakNonLatinWord, ColumnKind,
    ColumnLayout, FieldKind, GradientKind, GutterType, HatchStyle, HeadAlign, HeadingType,
    HorizontalAlign, HorzRelTo, ImageEffect, LineSpacingType, LineType, NumberFormat, OleObjectType,
    OutlineType, PageBorderKind, PageNumPosition, ShadowType, StyleKind, TabKind, TextDirection,
    TextWrap, UnderlineType, VertRelTo, VerticalAlign, VerticalTextAlign,
};
pub use header::{
    BeginNumbers, Border, BorderFill, Bullet, CharPr, Color, Fill, Font, FontKind, Header,
    Heading, LangValues, Language, LineSpacing, Numbering, ParaBorder, ParaHead, ParaMargin,
    ParaPr, Shadow, Strikeout, Style, SubstituteFont, TabItem, TabPr, Underline,
    BORDER_FILL_ID_BASE, BULLET_ID_BASE, NUMBERING_ID_BASE,
};
pub use object::{
    AutoNumber, Crop, Equation, FieldBegin, HeaderFooter, LineShape, Note, ObjectCommon, Ole,
    PageNumber, Picture, Shape, ShapeKind,
};
pub use paragraph::{Paragraph, Run, RunItem, TextSegment};
pub use resource::{BinItem, ResourceKind};
pub use section::{
    ColumnProperties, ColumnWidth, Margins, PageBorderFill, PageMargin, PageProperties, Section,
    SectionProperties, StartNumbers,
};
pub use table::{Cell, CellSlot, SubList, Table};
