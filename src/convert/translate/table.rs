//! Table merge translation.
//!
//! The source lists anchor cells only, each with an address and a span. The
//! target grid has one slot per row and column: the anchor slot holds the
//! cell, and every other slot the span covers points back at its anchor.

use super::enums;
use super::units::margins;
use super::Translator;
use crate::diagnostics::{DiagnosticKind, Location};
use crate::model::{Cell, CellSlot, SubList, Table};
use crate::source::{SourceCell, SourceTable};

/// Occupancy of one grid slot, as computed by [`layout_grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridSlot {
    /// Anchor slot of source cell `index`
    Anchor(usize),
    /// Covered by the span of source cell `index`
    Covered(usize),
    /// No cell covers this slot
    Empty,
}

/// Place every source cell on the declared grid.
///
/// Fails when the grid is empty, a span is not positive, a cell reaches
/// outside the grid, or two cells overlap.
pub fn layout_grid(table: &SourceTable) -> Result<Vec<Vec<GridSlot>>, String> {
    let rows = table.rows as i64;
    let cols = table.cols as i64;
    if rows == 0 || cols == 0 {
        return Err(format!("table declares a {}x{} grid", rows, cols));
    }

    let mut grid = vec![vec![GridSlot::Empty; cols as usize]; rows as usize];
    for (index, cell) in table.cells.iter().enumerate() {
        let (row, col) = (cell.row as i64, cell.col as i64);
        let (row_span, col_span) = (cell.row_span as i64, cell.col_span as i64);
        if row_span <= 0 || col_span <= 0 {
            return Err(format!(
                "cell {} at ({}, {}) has span {}x{}",
                index, row, col, row_span, col_span
            ));
        }
        if row < 0 || col < 0 || row + row_span > rows || col + col_span > cols {
            return Err(format!(
                "cell {} at ({}, {}) spanning {}x{} lies outside the {}x{} grid",
                index, row, col, row_span, col_span, rows, cols
            ));
        }
        for r in row..row + row_span {
            for c in col..col + col_span {
                let slot = &mut grid[r as usize][c as usize];
                if *slot != GridSlot::Empty {
                    return Err(format!(
                        "cell {} overlaps another cell at ({}, {})",
                        index, r, c
                    ));
                }
                *slot = if r == row && c == col {
                    GridSlot::Anchor(index)
                } else {
                    GridSlot::Covered(index)
                };
            }
        }
    }
    Ok(grid)
}

impl<'a> Translator<'a> {
    pub(super) fn table(&mut self, source: &SourceTable, loc: &Location) -> Table {
        self.stats.table_count += 1;
        let common = self.object_common(&source.common, loc);
        let border_fill_id = self.border_fill_ref(source.border_fill_id, loc);

        let mut table = Table {
            common,
            row_count: source.rows,
            col_count: source.cols,
            cell_spacing: source.cell_spacing as i32,
            in_margin: margins(source.in_margin),
            border_fill_id,
            repeat_header: source.repeat_header,
            grid: Vec::new(),
        };

        match layout_grid(source) {
            Ok(layout) => {
                table.grid = self.fill_grid(source, &layout, border_fill_id, loc);
            }
            Err(detail) => {
                self.warn(
                    DiagnosticKind::StructuralIntegrity,
                    loc,
                    format!("{}; table replaced by an empty placeholder", detail),
                );
                if table.row_count == 0 || table.col_count == 0 {
                    table.row_count = 1;
                    table.col_count = 1;
                }
                table.grid = (0..table.row_count)
                    .map(|r| {
                        (0..table.col_count)
                            .map(|c| CellSlot::Anchor(self.empty_cell(r, c, border_fill_id)))
                            .collect()
                    })
                    .collect();
            }
        }
        table
    }

    fn fill_grid(
        &mut self,
        source: &SourceTable,
        layout: &[Vec<GridSlot>],
        border_fill_id: u32,
        loc: &Location,
    ) -> Vec<Vec<CellSlot>> {
        let mut grid = Vec::with_capacity(layout.len());
        for (r, row) in layout.iter().enumerate() {
            let mut slots = Vec::with_capacity(row.len());
            for (c, slot) in row.iter().enumerate() {
                let slot = match *slot {
                    GridSlot::Anchor(index) => CellSlot::Anchor(self.cell(&source.cells[index], loc)),
                    GridSlot::Covered(index) => {
                        let anchor = &source.cells[index];
                        CellSlot::Covered {
                            anchor_row: anchor.row as u16,
                            anchor_col: anchor.col as u16,
                        }
                    }
                    GridSlot::Empty => {
                        self.warn(
                            DiagnosticKind::StructuralIntegrity,
                            &loc.cell(r, c),
                            "no cell covers this slot; filled with an empty cell",
                        );
                        CellSlot::Anchor(self.empty_cell(r as u16, c as u16, border_fill_id))
                    }
                };
                slots.push(slot);
            }
            grid.push(slots);
        }
        grid
    }

    fn cell(&mut self, source: &SourceCell, table_loc: &Location) -> Cell {
        let loc = table_loc.cell(source.row as usize, source.col as usize);
        let vertical_align = enums::CELL_VALIGN.map(source.vertical_align, &loc, &mut self.diagnostics);
        Cell {
            row: source.row as u16,
            col: source.col as u16,
            row_span: source.row_span as u16,
            col_span: source.col_span as u16,
            width: source.width,
            height: source.height,
            margin: margins(source.margin),
            border_fill_id: self.border_fill_ref(source.border_fill_id, &loc),
            header: source.header,
            content: SubList {
                vertical_align,
                paragraphs: self.sub_paragraphs(&source.paragraphs, &loc),
            },
        }
    }

    fn empty_cell(&self, row: u16, col: u16, border_fill_id: u32) -> Cell {
        let mut cell = Cell::empty(row, col, border_fill_id);
        cell.content = SubList::new(vec![self.empty_paragraph()]);
        cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: i32, col: i32, row_span: i32, col_span: i32) -> SourceCell {
        SourceCell {
            row,
            col,
            row_span,
            col_span,
            ..Default::default()
        }
    }

    fn table(rows: u16, cols: u16, cells: Vec<SourceCell>) -> SourceTable {
        SourceTable {
            rows,
            cols,
            cells,
            ..Default::default()
        }
    }

    #[test]
    fn test_colspan_covers_slot() {
        let source = table(2, 2, vec![cell(0, 0, 1, 2), cell(1, 0, 1, 1), cell(1, 1, 1, 1)]);
        let grid = layout_grid(&source).unwrap();
        assert_eq!(grid[0][0], GridSlot::Anchor(0));
        assert_eq!(grid[0][1], GridSlot::Covered(0));
        assert_eq!(grid[1][0], GridSlot::Anchor(1));
        assert_eq!(grid[1][1], GridSlot::Anchor(2));
    }

    #[test]
    fn test_gap_is_reported_as_empty() {
        let source = table(1, 2, vec![cell(0, 0, 1, 1)]);
        let grid = layout_grid(&source).unwrap();
        assert_eq!(grid[0][1], GridSlot::Empty);
    }

    #[test]
    fn test_invalid_layouts() {
        assert!(layout_grid(&table(0, 2, vec![])).is_err());
        assert!(layout_grid(&table(2, 2, vec![cell(0, 0, 0, 1)])).is_err());
        assert!(layout_grid(&table(2, 2, vec![cell(0, 1, 1, 2)])).is_err());
        assert!(layout_grid(&table(2, 2, vec![cell(-1, 0, 1, 1)])).is_err());
        assert!(layout_grid(&table(2, 2, vec![cell(0, 0, 2, 2), cell(1, 1, 1, 1)])).is_err());
    }
}
