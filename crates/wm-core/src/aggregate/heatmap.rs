//! Usage heatmap by weekday and hour.

use crate::event::EventTable;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Row order of the heatmap.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Column count of the heatmap.
pub const HOURS: usize = 24;

/// Dense 7×24 count matrix. Row `i` is `WEEKDAYS[i]`, column `h` is hour `h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayHeatmap {
    pub cells: [[usize; HOURS]; 7],
}

impl Default for WeekdayHeatmap {
    fn default() -> Self {
        Self {
            cells: [[0; HOURS]; 7],
        }
    }
}

impl WeekdayHeatmap {
    pub fn get(&self, day: Weekday, hour: u32) -> usize {
        self.cells[day.num_days_from_monday() as usize]
            .get(hour as usize)
            .copied()
            .unwrap_or(0)
    }

    pub fn rows(&self) -> impl Iterator<Item = (Weekday, &[usize; HOURS])> {
        WEEKDAYS.iter().copied().zip(self.cells.iter())
    }

    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }
}

/// Count events per (weekday, hour). Absent cells stay 0.
pub fn weekday_heatmap(table: &EventTable) -> WeekdayHeatmap {
    let mut heatmap = WeekdayHeatmap::default();
    for record in table {
        let row = record.weekday.num_days_from_monday() as usize;
        if let Some(cell) = heatmap.cells[row].get_mut(record.hour as usize) {
            *cell += 1;
        }
    }
    heatmap
}
