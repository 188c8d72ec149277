//! Table types.

use serde::{Deserialize, Serialize};

use super::enums::VerticalAlign;
use super::object::ObjectCommon;
use super::section::Margins;
use super::Paragraph;

/// A paragraph list nested inside another object (cell, note, header...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubList {
    pub vertical_align: VerticalAlign,
    pub paragraphs: Vec<Paragraph>,
}

impl SubList {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self {
            vertical_align: VerticalAlign::Top,
            paragraphs,
        }
    }

    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table laid out as a dense grid.
///
/// Every logical slot is present in `grid`: anchor cells carry the content
/// and span, and slots covered by a span point back at their anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub common: ObjectCommon,
    pub row_count: u16,
    pub col_count: u16,
    pub cell_spacing: i32,
    pub in_margin: Margins,
    pub border_fill_id: u32,
    pub repeat_header: bool,
    /// Rows of slots, `grid[row][col]`
    pub grid: Vec<Vec<CellSlot>>,
}

impl Table {
    /// Number of logical cell slots (rows x columns).
    pub fn slot_count(&self) -> usize {
        self.grid.iter().map(|row| row.len()).sum()
    }

    pub fn slot(&self, row: usize, col: usize) -> Option<&CellSlot> {
        self.grid.get(row).and_then(|r| r.get(col))
    }

    /// Anchor cells in row-major order.
    pub fn anchors(&self) -> impl Iterator<Item = &Cell> {
        self.grid.iter().flatten().filter_map(|slot| match slot {
            CellSlot::Anchor(cell) => Some(cell),
            CellSlot::Covered { .. } => None,
        })
    }

    /// Anchor cells of one row.
    pub fn row_anchors(&self, row: usize) -> impl Iterator<Item = &Cell> {
        self.grid
            .get(row)
            .into_iter()
            .flatten()
            .filter_map(|slot| match slot {
                CellSlot::Anchor(cell) => Some(cell),
                CellSlot::Covered { .. } => None,
            })
    }

    pub fn has_merged_cells(&self) -> bool {
        self.anchors().any(|c| c.is_merged())
    }

    pub fn plain_text(&self) -> String {
        self.grid
            .iter()
            .map(|row| {
                row.iter()
                    .filter_map(|slot| match slot {
                        CellSlot::Anchor(cell) => Some(cell.content.plain_text()),
                        CellSlot::Covered { .. } => None,
                    })
                    .collect::<Vec<_>>()
                    .join("\t")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One logical grid slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "slot", rename_all = "snake_case")]
pub enum CellSlot {
    Anchor(Cell),
    /// Slot covered by the span of the anchor at `(anchor_row, anchor_col)`
    Covered {
        anchor_row: u16,
        anchor_col: u16,
    },
}

impl CellSlot {
    pub fn is_anchor(&self) -> bool {
        matches!(self, CellSlot::Anchor(_))
    }
}

/// A table cell anchored at `(row, col)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub row: u16,
    pub col: u16,
    pub row_span: u16,
    pub col_span: u16,
    pub width: i32,
    pub height: i32,
    pub margin: Margins,
    pub border_fill_id: u32,
    pub header: bool,
    pub content: SubList,
}

impl Cell {
    /// Empty 1x1 cell at the given address.
    pub fn empty(row: u16, col: u16, border_fill_id: u32) -> Self {
        Self {
            row,
            col,
            row_span: 1,
            col_span: 1,
            width: 0,
            height: 0,
            margin: Margins::default(),
            border_fill_id,
            header: false,
            content: SubList::default(),
        }
    }

    pub fn is_merged(&self) -> bool {
        self.row_span > 1 || self.col_span > 1
    }
}
