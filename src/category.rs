use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SheetError;

/// The tag printed on a sheet cell, independent of its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Star,
    Circle,
    Box,
    Tri,
}

impl Category {
    /// Number of categories; the length of per-line tallies.
    pub const COUNT: usize = 4;

    /// Every category, in index order.
    pub const ALL: [Category; Self::COUNT] =
        [Category::Star, Category::Circle, Category::Box, Category::Tri];

    /// Stable index in `0..Category::COUNT`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Upper-case label, e.g. `STAR`.
    pub fn name(self) -> &'static str {
        match self {
            Category::Star => "STAR",
            Category::Circle => "CIRCLE",
            Category::Box => "BOX",
            Category::Tri => "TRI",
        }
    }

    /// First letter of the label, used by the compact sheet dump.
    pub fn initial(self) -> char {
        match self {
            Category::Star => 'S',
            Category::Circle => 'C',
            Category::Box => 'B',
            Category::Tri => 'T',
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SheetError::UnknownCategory(s.to_string()))
    }
}
