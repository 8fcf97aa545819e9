use tracing::debug;

use crate::{Category, Result, Sheet, SheetError};

/// Marks the cells two participants share under `category`.
///
/// Sheet `a` must hold a cell with `b`'s owner number and `category`, and
/// sheet `b` must hold a cell with `a`'s owner number and `category`. Only
/// when both exist are both cells marked, each recording
/// `shared_interests`. Returns whether anything was marked.
///
/// # Errors
/// Returns [`SheetError::DuplicateMatch`] if either sheet has more than one
/// cell matching the lookup. Neither sheet is modified in that case.
pub fn mark_match(
    a: &mut Sheet,
    b: &mut Sheet,
    category: Category,
    shared_interests: &[String],
) -> Result<bool> {
    let in_a = find_match(a, b.owner_number(), category)?;
    let in_b = find_match(b, a.owner_number(), category)?;

    let (Some(i), Some(j)) = (in_a, in_b) else {
        debug!(
            a = a.owner_number(),
            b = b.owner_number(),
            %category,
            found_in_a = in_a.is_some(),
            found_in_b = in_b.is_some(),
            "no mutual match"
        );
        return Ok(false);
    };

    for (sheet, index) in [(a, i), (b, j)] {
        let cell = &mut sheet.cells_mut()[index];
        *cell = cell.with_mark(shared_interests);
    }
    debug!(%category, "marked mutual match");
    Ok(true)
}

/// Index of the only cell in `sheet` matching `(number, category)`.
fn find_match(sheet: &Sheet, number: u32, category: Category) -> Result<Option<usize>> {
    let mut hits = sheet
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.matches(number, category))
        .map(|(index, _)| index);

    let first = hits.next();
    let extra = hits.count();
    if extra > 0 {
        return Err(SheetError::DuplicateMatch {
            owner: sheet.owner_number(),
            number,
            category,
            count: extra + 1,
        });
    }
    Ok(first)
}
