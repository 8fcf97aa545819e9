//! Error types for sheet construction and marking.

use crate::Category;

/// All errors that can occur while building, loading, or marking sheets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SheetError {
    /// A sheet needs at least one cell.
    #[error("sheet has no cells")]
    Empty,

    /// Sheets are square grids; the cell count must be a perfect square.
    #[error("cell count {len} is not a perfect square")]
    NotSquare { len: usize },

    /// Grid side length must be at least 1.
    #[error("grid size must be at least 1")]
    InvalidSize,

    /// The owner's number must be one of the numbers placed on the grid.
    #[error("owner number {owner} is outside 1..={max}")]
    OwnerOutOfRange { owner: u32, max: u32 },

    /// More than one cell in a sheet matched a (number, category) lookup.
    ///
    /// Generated sheets never contain duplicate numbers, so this points at
    /// corrupted sheet data upstream.
    #[error(
        "sheet {owner} has {count} cells with number {number} and category {category}"
    )]
    DuplicateMatch {
        owner: u32,
        number: u32,
        category: Category,
        count: usize,
    },

    /// A category name did not match any known label.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SheetError>;
