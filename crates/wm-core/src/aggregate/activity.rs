//! Activity distribution: how often each action occurs.

use super::{count_in_order, CategoryCount};
use crate::event::EventTable;

/// Count per action label, most frequent first.
///
/// Equal counts keep the order in which the labels first appear.
pub fn activity_distribution(table: &EventTable) -> Vec<CategoryCount> {
    let mut counts = count_in_order(table.iter().map(|r| r.action.as_str()));
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::RawEvent;
    use chrono::NaiveDate;

    #[test]
    fn test_descending_with_stable_ties() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let table = EventTable::from_raw(
            ["退藥", "領藥", "領藥", "耗損", "退藥", "領藥"]
                .into_iter()
                .map(|a| RawEvent::new("P", ts, a, "5A"))
                .collect(),
        );
        let counts = activity_distribution(&table);
        let rows: Vec<(&str, usize)> = counts.iter().map(|c| (c.label.as_str(), c.count)).collect();
        assert_eq!(rows, vec![("領藥", 3), ("退藥", 2), ("耗損", 1)]);
    }
}
