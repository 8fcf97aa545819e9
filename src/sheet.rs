use std::fmt;

use serde::{Deserialize, Serialize};

use crate::layout::covers_all_categories;
use crate::{Cell, Result, SheetError};

/// One participant's bingo sheet of order `size`.
///
/// Cells are stored as a flat slice in row-major order: the cell at
/// position `(row, column)` is at index `row * size + column`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SheetData")]
pub struct Sheet {
    owner_number: u32,
    size: usize,
    cells: Vec<Cell>,
}

/// Unvalidated wire form of a [`Sheet`].
#[derive(Deserialize)]
struct SheetData {
    owner_number: u32,
    cells: Vec<Cell>,
}

impl TryFrom<SheetData> for Sheet {
    type Error = SheetError;

    fn try_from(data: SheetData) -> Result<Self> {
        Sheet::from_cells(data.owner_number, data.cells)
    }
}

impl Sheet {
    /// Assembles a sheet from row-major cells.
    ///
    /// The side length is derived from the cell count, which must be a
    /// non-zero perfect square. Numbers are not checked for uniqueness;
    /// duplicates surface later as [`SheetError::DuplicateMatch`] when
    /// marking.
    pub fn from_cells(owner_number: u32, cells: Vec<Cell>) -> Result<Self> {
        let len = cells.len();
        if len == 0 {
            return Err(SheetError::Empty);
        }
        let size = len.isqrt();
        if size * size != len {
            return Err(SheetError::NotSquare { len });
        }
        Ok(Self {
            owner_number,
            size,
            cells,
        })
    }

    /// Returns the participant number this sheet belongs to.
    pub fn owner_number(&self) -> u32 {
        self.owner_number
    }

    /// Returns the side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cells as a flat slice in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell at flat index `index`, if any.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Returns the cell at position `(r, c)`.
    ///
    /// # Panics
    /// Panics if `r >= size` or `c >= size`.
    pub fn get(&self, r: usize, c: usize) -> &Cell {
        assert!(r < self.size && c < self.size, "index out of bounds");
        &self.cells[r * self.size + c]
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Iterates over the columns, left to right.
    pub fn columns(&self) -> impl Iterator<Item = Vec<&Cell>> + '_ {
        (0..self.size).map(move |c| {
            (0..self.size)
                .map(|r| &self.cells[r * self.size + c])
                .collect()
        })
    }

    /// Flat index of the cell carrying the owner's number.
    pub fn owner_index(&self) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.number == self.owner_number)
    }

    /// Counts rows and columns that are missing at least one category.
    pub fn lacking_lines(&self) -> usize {
        let rows = self
            .rows()
            .filter(|row| !covers_all_categories(row.iter().map(|cell| cell.category)))
            .count();
        let columns = self
            .columns()
            .filter(|col| !covers_all_categories(col.iter().map(|cell| cell.category)))
            .count();
        rows + columns
    }

    /// Number of marked cells.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.marked).count()
    }
}

/// Compact dump: one row per line, each cell as category initial plus
/// two-digit number, e.g. `S09 C14`.
impl fmt::Display for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}{:02}", cell.category.initial(), cell.number)?;
            }
        }
        Ok(())
    }
}
