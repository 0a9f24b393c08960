//! Aggregators over the event table.
//!
//! Every aggregator is a pure function of the shared, immutable
//! [`EventTable`] (and the [`CaseIndex`] built from it). Their outputs are
//! small tables consumed only by the renderer.
//!
//! | Aggregator | Key | Output |
//! |---|---|---|
//! | [`activity`] | action | count per action, descending |
//! | [`ward`] | ward | count per ward, ascending |
//! | [`duration`] | first ward of case | per-case minutes |
//! | [`trend`] | date | count per date |
//! | [`flow`] | (action, next action) | top transitions |
//! | [`heatmap`] | (weekday, hour) | dense 7×24 matrix |
//! | [`timeline`] | case | per-event intervals for a sample of cases |

pub mod activity;
pub mod duration;
pub mod flow;
pub mod heatmap;
pub mod timeline;
pub mod trend;
pub mod ward;

pub use activity::activity_distribution;
pub use duration::{duration_distribution, DurationDistribution, WardDurations};
pub use flow::{flow_network, FlowNetwork, Transition};
pub use heatmap::{weekday_heatmap, WeekdayHeatmap, HOURS, WEEKDAYS};
pub use timeline::{timeline_sample, Timeline, TimelineSpan};
pub use trend::{daily_trend, DailyCount};
pub use ward::ward_ranking;

use crate::cases::CaseIndex;
use crate::event::EventTable;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Minimum events for a case to contribute a duration sample.
pub const MIN_CASE_EVENTS: usize = 2;
/// Exclusive upper bound on case duration, in minutes.
pub const MAX_CASE_MINUTES: f64 = 1000.0;
/// Number of transitions kept in the flow network.
pub const TOP_TRANSITIONS: usize = 20;
/// Number of cases sampled for the timeline.
pub const TIMELINE_SAMPLE_CASES: usize = 20;
/// Length of the synthesized interval closing a case's final event.
pub const SYNTHETIC_FINAL_MINUTES: i64 = 1;

/// One `label → count` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Count occurrences, keeping labels in order of first appearance.
pub(crate) fn count_in_order<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<CategoryCount> {
    let mut position: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for label in labels {
        match position.get(label) {
            Some(&idx) => counts[idx].count += 1,
            None => {
                position.insert(label, counts.len());
                counts.push(CategoryCount {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    counts
}

/// The four headline numbers shown above the charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Total event records.
    pub total_events: usize,
    /// Distinct wards.
    pub ward_count: usize,
    /// Distinct actions.
    pub action_count: usize,
    /// Distinct cases.
    pub case_count: usize,
}

impl SummaryStats {
    pub fn compute(table: &EventTable, cases: &CaseIndex<'_>) -> Self {
        let wards: HashSet<&str> = table.iter().map(|r| r.ward.as_str()).collect();
        let actions: HashSet<&str> = table.iter().map(|r| r.action.as_str()).collect();
        Self {
            total_events: table.len(),
            ward_count: wards.len(),
            action_count: actions.len(),
            case_count: cases.len(),
        }
    }
}

/// All aggregate results for one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregates {
    pub summary: SummaryStats,
    pub activity: Vec<CategoryCount>,
    pub wards: Vec<CategoryCount>,
    pub durations: DurationDistribution,
    pub daily: Vec<DailyCount>,
    pub flow: FlowNetwork,
    pub heatmap: WeekdayHeatmap,
    pub timeline: Timeline,
}

impl Aggregates {
    /// Run every aggregator over `table`.
    pub fn compute(table: &EventTable, cases: &CaseIndex<'_>) -> Self {
        let aggregates = Self {
            summary: SummaryStats::compute(table, cases),
            activity: activity_distribution(table),
            wards: ward_ranking(table),
            durations: duration_distribution(cases),
            daily: daily_trend(table),
            flow: flow_network(cases),
            heatmap: weekday_heatmap(table),
            timeline: timeline_sample(cases),
        };

        debug!(
            actions = aggregates.activity.len(),
            wards = aggregates.wards.len(),
            duration_samples = aggregates.durations.sample_count(),
            days = aggregates.daily.len(),
            transitions = aggregates.flow.transitions.len(),
            timeline_spans = aggregates.timeline.spans.len(),
            "Aggregates computed"
        );

        aggregates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::RawEvent;
    use chrono::NaiveDate;

    #[test]
    fn test_count_in_order() {
        let counts = count_in_order(["b", "a", "b", "c", "a", "b"]);
        let labels: Vec<&str> = counts.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a", "c"]);
        assert_eq!(counts[0].count, 3);
    }

    #[test]
    fn test_summary_stats() {
        let at = |d, h| {
            NaiveDate::from_ymd_opt(2024, 3, d)
                .unwrap()
                .and_hms_opt(h, 0, 0)
                .unwrap()
        };
        let table = EventTable::from_raw(vec![
            RawEvent::new("P1", at(1, 8), "領藥", "5A"),
            RawEvent::new("P1", at(1, 9), "退藥", "5A"),
            RawEvent::new("P2", at(2, 8), "領藥", "6B"),
        ]);
        let cases = CaseIndex::build(&table);
        let summary = SummaryStats::compute(&table, &cases);
        assert_eq!(
            summary,
            SummaryStats {
                total_events: 3,
                ward_count: 2,
                action_count: 2,
                case_count: 2,
            }
        );
    }

    #[test]
    fn test_aggregates_on_empty_table() {
        let table = EventTable::default();
        let cases = CaseIndex::build(&table);
        let aggregates = Aggregates::compute(&table, &cases);
        assert_eq!(aggregates.summary, SummaryStats::default());
        assert!(aggregates.activity.is_empty());
        assert!(aggregates.durations.is_empty());
        assert!(aggregates.flow.is_empty());
        assert!(aggregates.timeline.is_empty());
        assert_eq!(aggregates.heatmap.total(), 0);
    }
}
