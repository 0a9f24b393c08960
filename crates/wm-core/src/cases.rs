//! Case reconstruction.
//!
//! A case is every event of one patient on one calendar day. The index is
//! built once from the sorted table and then shared by every aggregator that
//! needs per-case sequences, so they all see the same grouping.

use crate::event::{CaseId, EventRecord, EventTable};
use std::collections::HashMap;

/// The ordered events of one case.
#[derive(Debug, Clone)]
pub struct Case<'a> {
    id: &'a CaseId,
    events: Vec<&'a EventRecord>,
}

impl<'a> Case<'a> {
    pub fn id(&self) -> &'a CaseId {
        self.id
    }

    /// Events ordered by timestamp ascending.
    pub fn events(&self) -> &[&'a EventRecord] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn first(&self) -> Option<&'a EventRecord> {
        self.events.first().copied()
    }

    pub fn last(&self) -> Option<&'a EventRecord> {
        self.events.last().copied()
    }

    /// Elapsed minutes between first and last event (fractional).
    pub fn duration_minutes(&self) -> f64 {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => {
                let delta = last.timestamp - first.timestamp;
                delta.num_milliseconds() as f64 / 60_000.0
            }
            _ => 0.0,
        }
    }

    /// Consecutive action pairs `(source, target)`.
    pub fn transitions(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.events
            .windows(2)
            .map(|pair| (pair[0].action.as_str(), pair[1].action.as_str()))
    }
}

/// Case id → ordered event list, over one event table.
#[derive(Debug, Clone)]
pub struct CaseIndex<'a> {
    table: &'a EventTable,
    /// Case ids in order of first appearance in the table.
    order: Vec<&'a CaseId>,
    members: HashMap<&'a CaseId, Vec<usize>>,
}

impl<'a> CaseIndex<'a> {
    /// Group the table's records by case id.
    pub fn build(table: &'a EventTable) -> Self {
        let mut order = Vec::new();
        let mut members: HashMap<&'a CaseId, Vec<usize>> = HashMap::new();

        for (idx, record) in table.iter().enumerate() {
            members
                .entry(&record.case_id)
                .or_insert_with(|| {
                    order.push(&record.case_id);
                    Vec::new()
                })
                .push(idx);
        }

        Self {
            table,
            order,
            members,
        }
    }

    /// Number of distinct cases.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Case ids in order of first appearance.
    pub fn ids(&self) -> &[&'a CaseId] {
        &self.order
    }

    /// The events of `id`, ordered by timestamp.
    pub fn case(&self, id: &CaseId) -> Option<Case<'a>> {
        let (key, indices) = self.members.get_key_value(id)?;
        let mut events: Vec<&'a EventRecord> = indices
            .iter()
            .filter_map(|&idx| self.table.get(idx))
            .collect();
        // The table is already sorted; stable re-sort keeps that guarantee
        // local to the case.
        events.sort_by_key(|r| r.timestamp);
        Some(Case { id: *key, events })
    }

    /// All cases in order of first appearance.
    pub fn cases(&self) -> impl Iterator<Item = Case<'a>> + '_ {
        self.order.iter().filter_map(move |id| self.case(id))
    }
}
