//! Activity timeline for a sample of cases.

use super::{SYNTHETIC_FINAL_MINUTES, TIMELINE_SAMPLE_CASES};
use crate::cases::CaseIndex;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One bar of the timeline: an event and the time until the next event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSpan {
    /// Display label of the case, e.g. `案例 3 (5678)`.
    pub case_label: String,
    /// Full case id.
    pub case_id: String,
    pub action: String,
    pub ward: String,
    pub start: NaiveDateTime,
    pub finish: NaiveDateTime,
}

impl TimelineSpan {
    pub fn duration(&self) -> Duration {
        self.finish - self.start
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Timeline {
    pub spans: Vec<TimelineSpan>,
    /// Number of cases represented.
    pub case_count: usize,
}

impl Timeline {
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// Label for the `position`-th (0-based) sampled case.
pub fn case_label(position: usize, patient_tag: &str) -> String {
    format!("案例 {} ({})", position + 1, patient_tag)
}

/// Intervals for the first [`TIMELINE_SAMPLE_CASES`] cases in order of first
/// appearance. Each event ends where the next one starts; the last event of
/// a case gets a synthetic [`SYNTHETIC_FINAL_MINUTES`]-minute interval.
pub fn timeline_sample(cases: &CaseIndex<'_>) -> Timeline {
    let mut spans = Vec::new();
    let mut case_count = 0;

    for (position, case) in cases.cases().take(TIMELINE_SAMPLE_CASES).enumerate() {
        if case.is_empty() {
            continue;
        }
        case_count += 1;

        let label = case_label(position, &case.id().patient_tag());
        let events = case.events();
        for (i, event) in events.iter().enumerate() {
            let finish = match events.get(i + 1) {
                Some(next) => next.timestamp,
                None => event.timestamp + Duration::minutes(SYNTHETIC_FINAL_MINUTES),
            };
            spans.push(TimelineSpan {
                case_label: label.clone(),
                case_id: case.id().to_string(),
                action: event.action.clone(),
                ward: event.ward.clone(),
                start: event.timestamp,
                finish,
            });
        }
    }

    Timeline { spans, case_count }
}
