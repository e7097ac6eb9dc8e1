//! Top-N and bottom-N slices of counted rollups
//!
//! Rollups stay complete; consumers ask for the head or the tail here.

/// A rollup row with a display label and a count to rank by
pub trait Ranked {
    /// Group key shown next to the count
    fn label(&self) -> &str;

    /// Value rows are ranked by
    fn count(&self) -> usize;
}

/// The `n` rows with the highest counts, highest first (ties by label)
pub fn top_n<T: Ranked>(rows: &[T], n: usize) -> Vec<&T> {
    let mut sorted: Vec<&T> = rows.iter().collect();
    sorted.sort_by(|a, b| b.count().cmp(&a.count()).then_with(|| a.label().cmp(b.label())));
    sorted.truncate(n);
    sorted
}

/// The `n` rows with the lowest counts, lowest first (ties by label).
///
/// This is the prefix of the rollup sorted ascending by count.
pub fn bottom_n<T: Ranked>(rows: &[T], n: usize) -> Vec<&T> {
    let mut sorted: Vec<&T> = rows.iter().collect();
    sorted.sort_by(|a, b| a.count().cmp(&b.count()).then_with(|| a.label().cmp(b.label())));
    sorted.truncate(n);
    sorted
}
