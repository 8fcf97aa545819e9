use serde::{Deserialize, Serialize};

use crate::Category;

/// One square of a bingo sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub category: Category,
    pub number: u32,
    #[serde(default)]
    pub marked: bool,
    #[serde(default)]
    pub shared_interests: Vec<String>,
}

impl Cell {
    /// Creates an unmarked cell with no shared interests.
    pub fn new(category: Category, number: u32) -> Self {
        Self {
            category,
            number,
            marked: false,
            shared_interests: Vec::new(),
        }
    }

    /// Returns a marked copy of this cell carrying `interests`.
    pub fn with_mark(&self, interests: &[String]) -> Self {
        Self {
            marked: true,
            shared_interests: interests.to_vec(),
            ..self.clone()
        }
    }

    /// True when this cell matches a `(number, category)` lookup.
    pub fn matches(&self, number: u32, category: Category) -> bool {
        self.number == number && self.category == category
    }
}
