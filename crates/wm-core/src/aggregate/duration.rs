//! Case duration distribution per ward.

use super::{MAX_CASE_MINUTES, MIN_CASE_EVENTS};
use crate::cases::{Case, CaseIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Duration samples of the cases that started on one ward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardDurations {
    pub ward: String,
    /// Elapsed minutes, one per qualifying case, in case order.
    pub minutes: Vec<f64>,
}

/// Per-ward case durations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DurationDistribution {
    /// Wards in order of their first qualifying case.
    pub wards: Vec<WardDurations>,
}

impl DurationDistribution {
    pub fn is_empty(&self) -> bool {
        self.wards.is_empty()
    }

    /// Total number of duration samples across wards.
    pub fn sample_count(&self) -> usize {
        self.wards.iter().map(|w| w.minutes.len()).sum()
    }

    /// Samples recorded for `ward`, or 0.
    pub fn count_for(&self, ward: &str) -> usize {
        self.wards
            .iter()
            .find(|w| w.ward == ward)
            .map_or(0, |w| w.minutes.len())
    }
}

/// Duration of `case` in minutes if it qualifies for the distribution:
/// at least [`MIN_CASE_EVENTS`] events and strictly between 0 and
/// [`MAX_CASE_MINUTES`].
pub fn qualifying_minutes(case: &Case<'_>) -> Option<f64> {
    if case.len() < MIN_CASE_EVENTS {
        return None;
    }
    let minutes = case.duration_minutes();
    (minutes > 0.0 && minutes < MAX_CASE_MINUTES).then_some(minutes)
}

/// Group qualifying case durations by the ward of each case's first event.
pub fn duration_distribution(cases: &CaseIndex<'_>) -> DurationDistribution {
    let mut position: HashMap<String, usize> = HashMap::new();
    let mut wards: Vec<WardDurations> = Vec::new();

    for case in cases.cases() {
        let Some(minutes) = qualifying_minutes(&case) else {
            continue;
        };
        let Some(first) = case.first() else {
            continue;
        };

        let idx = *position.entry(first.ward.clone()).or_insert_with(|| {
            wards.push(WardDurations {
                ward: first.ward.clone(),
                minutes: Vec::new(),
            });
            wards.len() - 1
        });
        wards[idx].minutes.push(minutes);
    }

    DurationDistribution { wards }
}
