//! Ward ranking by event volume.

use super::{count_in_order, CategoryCount};
use crate::event::EventTable;

/// Count per ward, least busy first so a horizontal bar chart puts the
/// busiest ward on top.
pub fn ward_ranking(table: &EventTable) -> Vec<CategoryCount> {
    let mut counts = count_in_order(table.iter().map(|r| r.ward.as_str()));
    counts.sort_by_key(|c| c.count);
    counts
}
