#![doc = include_str!("../README.md")]

mod builder;
mod category;
mod cell;
mod error;
mod layout;
mod marking;
mod sheet;
#[cfg(feature = "wasm")]
mod wasm;

pub use builder::{SheetBuilder, SheetParams, build_sheet};
pub use category::Category;
pub use cell::Cell;
pub use error::{Result, SheetError};
pub use layout::{
    LayoutParams, LayoutStrategy, covers_all_categories, generate_layout, score_layout,
};
pub use marking::mark_match;
pub use sheet::Sheet;
