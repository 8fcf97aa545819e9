//! Category layout generation.
//!
//! A layout assigns one [`Category`] to each of the `n * n` grid positions
//! (row-major) so that every row and column sees as many distinct categories
//! as possible, with counts kept close to each other. The default
//! [`LayoutStrategy::Weighted`] strategy places labels one at a time, trying a
//! number of random empty slots per label and keeping the slot that yields the
//! lowest distribution penalty.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::Category;

/// How category labels are distributed over the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStrategy {
    /// Greedy multi-trial placement scored by [`score_layout`].
    #[default]
    Weighted,
    /// Seed every category once per row along a random column permutation,
    /// then fill the rest with a shuffled multiset.
    Placing,
    /// Plain shuffle of the label multiset. Mostly useful as a baseline.
    Random,
}

/// Parameters for category layout generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub strategy: LayoutStrategy,
    /// Random slots tried per label by the weighted strategy.
    ///
    /// Slots are drawn with replacement, so the same slot may be scored more
    /// than once. Values below 1 are treated as 1.
    pub trials: usize,
    /// Penalty per category missing from a line.
    pub lacking_weight: u32,
    /// Penalty per unit of spread between the most and least frequent
    /// category present in a line.
    pub uneven_weight: u32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            strategy: LayoutStrategy::Weighted,
            trials: 40,
            lacking_weight: 10,
            uneven_weight: 1,
        }
    }
}

/// Generates a row-major category layout for an `n x n` grid.
///
/// Never fails: the result is a best-effort layout and may leave some lines
/// without every category. The output is deterministic given the same rng
/// state and parameters.
pub fn generate_layout<R: Rng + ?Sized>(
    n: usize,
    rng: &mut R,
    params: &LayoutParams,
) -> Vec<Category> {
    match params.strategy {
        LayoutStrategy::Weighted => place_weighted(n, rng, params),
        LayoutStrategy::Placing => place_seeded(n, rng),
        LayoutStrategy::Random => shuffled_labels(n * n, rng),
    }
}

/// Scores a (possibly partial) layout; lower is better.
///
/// Each row and column gets a penalty of
/// `missing_categories * lacking_weight + (max_count - min_count) * uneven_weight`,
/// where empty slots are not counted and the spread term only considers
/// categories present in the line. The sum is divided by the number of lines.
pub fn score_layout(slots: &[Option<Category>], n: usize, params: &LayoutParams) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let total: u32 = (0..n)
        .map(|i| {
            line_penalty(row(slots, n, i), params) + line_penalty(column(slots, n, i), params)
        })
        .sum();
    f64::from(total) / (2 * n) as f64
}

/// True if `line` contains every category at least once.
pub fn covers_all_categories<I: IntoIterator<Item = Category>>(line: I) -> bool {
    tally(line).iter().all(|&count| count > 0)
}

/// `count` labels cycling through [`Category::ALL`], shuffled.
fn shuffled_labels<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Category> {
    let mut labels: Vec<Category> = Category::ALL.iter().copied().cycle().take(count).collect();
    labels.shuffle(rng);
    labels
}

fn place_weighted<R: Rng + ?Sized>(
    n: usize,
    rng: &mut R,
    params: &LayoutParams,
) -> Vec<Category> {
    let len = n * n;
    let mut slots: Vec<Option<Category>> = vec![None; len];
    let mut empty: Vec<usize> = (0..len).collect();

    for category in shuffled_labels(len, rng) {
        // Only the row and column through a slot change when it is filled, so
        // comparing their penalty delta ranks trials the same as rescoring the
        // whole grid.
        let mut best: Option<(usize, i64)> = None;
        for _ in 0..params.trials.max(1) {
            let pick = rng.random_range(0..empty.len());
            let delta = placement_delta(&mut slots, n, empty[pick], category, params);
            if best.is_none_or(|(_, best_delta)| delta < best_delta) {
                best = Some((pick, delta));
            }
        }

        if let Some((pick, delta)) = best {
            let slot = empty.swap_remove(pick);
            slots[slot] = Some(category);
            trace!(%category, slot, delta, remaining = empty.len(), "placed category");
        }
    }

    slots.into_iter().flatten().collect()
}

/// Penalty change of the two lines through `slot` if `category` were placed
/// there. Leaves `slots` unchanged.
fn placement_delta(
    slots: &mut [Option<Category>],
    n: usize,
    slot: usize,
    category: Category,
    params: &LayoutParams,
) -> i64 {
    let (r, c) = (slot / n, slot % n);
    let before = lines_penalty(slots, n, r, c, params);
    slots[slot] = Some(category);
    let after = lines_penalty(slots, n, r, c, params);
    slots[slot] = None;
    i64::from(after) - i64::from(before)
}

fn lines_penalty(
    slots: &[Option<Category>],
    n: usize,
    r: usize,
    c: usize,
    params: &LayoutParams,
) -> u32 {
    line_penalty(row(slots, n, r), params) + line_penalty(column(slots, n, c), params)
}

fn place_seeded<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Category> {
    let mut slots: Vec<Option<Category>> = vec![None; n * n];

    for category in Category::ALL {
        let mut columns: Vec<usize> = (0..n).collect();
        columns.shuffle(rng);
        for (r, &planned) in columns.iter().enumerate() {
            let mut c = planned;
            if slots[r * n + c].is_some() {
                let free: Vec<usize> = (0..n)
                    .filter(|&cc| slots[r * n + cc].is_none())
                    .collect();
                match free.choose(rng) {
                    Some(&cc) => c = cc,
                    // Row is full; stop seeding this category.
                    None => break,
                }
            }
            slots[r * n + c] = Some(category);
        }
    }

    let open = slots.iter().filter(|slot| slot.is_none()).count();
    let mut filler = shuffled_labels(open, rng).into_iter();
    slots
        .into_iter()
        .filter_map(|slot| slot.or_else(|| filler.next()))
        .collect()
}

fn row(
    slots: &[Option<Category>],
    n: usize,
    r: usize,
) -> impl Iterator<Item = Option<Category>> + '_ {
    slots[r * n..(r + 1) * n].iter().copied()
}

fn column(
    slots: &[Option<Category>],
    n: usize,
    c: usize,
) -> impl Iterator<Item = Option<Category>> + '_ {
    slots.iter().skip(c).step_by(n).copied()
}

fn tally<I: IntoIterator<Item = Category>>(line: I) -> [usize; Category::COUNT] {
    let mut counts = [0usize; Category::COUNT];
    for category in line {
        counts[category.index()] += 1;
    }
    counts
}

fn line_penalty<I: Iterator<Item = Option<Category>>>(line: I, params: &LayoutParams) -> u32 {
    let counts = tally(line.flatten());
    let present = counts.iter().filter(|&&count| count > 0);
    let distinct = present.clone().count();
    let spread = match (present.clone().max(), present.min()) {
        (Some(max), Some(min)) => max - min,
        _ => 0,
    };
    (Category::COUNT - distinct) as u32 * params.lacking_weight
        + spread as u32 * params.uneven_weight
}
