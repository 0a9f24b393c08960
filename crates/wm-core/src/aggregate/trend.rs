//! Daily event counts.

use crate::event::EventTable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Event count per calendar date, oldest first.
pub fn daily_trend(table: &EventTable) -> Vec<DailyCount> {
    let mut by_date: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in table {
        *by_date.entry(record.date).or_default() += 1;
    }
    by_date
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::RawEvent;

    #[test]
    fn test_counts_per_date() {
        let at = |d, h| {
            NaiveDate::from_ymd_opt(2024, 3, d)
                .unwrap()
                .and_hms_opt(h, 0, 0)
                .unwrap()
        };
        let table = EventTable::from_raw(vec![
            RawEvent::new("P1", at(3, 8), "a", "5A"),
            RawEvent::new("P2", at(1, 8), "a", "5A"),
            RawEvent::new("P3", at(3, 23), "a", "5A"),
        ]);
        let trend = daily_trend(&table);
        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(trend[1].count, 2);
    }
}
