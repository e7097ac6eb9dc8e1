//! Product category popularity

use crate::accumulate::{group_fold, non_blank};
use crate::ranking::Ranked;
use ol_core::OrderLine;
use serde::Serialize;

/// Item count for one product category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRollup {
    pub category: String,
    /// Records in the category carrying a product id
    pub item_count: usize,
}

impl Ranked for CategoryRollup {
    fn label(&self) -> &str {
        &self.category
    }

    fn count(&self) -> usize {
        self.item_count
    }
}

/// Count items per product category.
///
/// Every record is one item; records are not deduplicated. Records without
/// a category are skipped, and only records with a product id add to the
/// count. All categories are returned, most popular first (ties by name);
/// slicing to a top or bottom N is left to [`crate::top_n`] and
/// [`crate::bottom_n`].
pub fn category_popularity<'a, I>(records: I) -> Vec<CategoryRollup>
where
    I: IntoIterator<Item = &'a OrderLine>,
{
    let groups = group_fold(
        records,
        |r| non_blank(r.product_category.as_deref()),
        |count: &mut usize, r| {
            if r.product_id.is_some() {
                *count += 1;
            }
        },
    );

    let mut rows: Vec<CategoryRollup> = groups
        .into_iter()
        .map(|(category, item_count)| CategoryRollup {
            category: category.to_string(),
            item_count,
        })
        .collect();
    // Stable sort keeps the name order from the grouping for equal counts.
    rows.sort_by(|a, b| b.item_count.cmp(&a.item_count));
    rows
}

#[cfg(test)]
#[path = "category_test.rs"]
mod tests;
