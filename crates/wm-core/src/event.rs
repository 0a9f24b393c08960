//! Event records and the sorted event table.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row as read from the workbook, before any derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    /// Medical record number.
    pub patient_id: String,
    /// Parsed record time.
    pub timestamp: NaiveDateTime,
    /// Action label (dispense, return, waste, ...).
    pub action: String,
    /// Ward label.
    pub ward: String,
}

impl RawEvent {
    pub fn new(
        patient_id: impl Into<String>,
        timestamp: NaiveDateTime,
        action: impl Into<String>,
        ward: impl Into<String>,
    ) -> Self {
        Self {
            patient_id: patient_id.into(),
            timestamp,
            action: action.into(),
            ward: ward.into(),
        }
    }
}

/// Identifier of one case: a patient on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CaseId {
    patient_id: String,
    date: NaiveDate,
}

impl CaseId {
    pub fn new(patient_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            patient_id: patient_id.into(),
            date,
        }
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Short patient tag used in chart labels: the last four characters of
    /// the case id's leading segment, i.e. the patient id up to its first `_`.
    pub fn patient_tag(&self) -> String {
        let lead = self.patient_id.split('_').next().unwrap_or_default();
        let chars: Vec<char> = lead.chars().collect();
        let start = chars.len().saturating_sub(4);
        chars[start..].iter().collect()
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.patient_id, self.date.format("%Y-%m-%d"))
    }
}

/// An event with its derived columns attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub patient_id: String,
    pub timestamp: NaiveDateTime,
    pub action: String,
    pub ward: String,
    /// Calendar date of `timestamp`.
    pub date: NaiveDate,
    /// `patient_id + "_" + date`.
    pub case_id: CaseId,
    /// Hour of day, 0..=23.
    pub hour: u32,
    pub weekday: Weekday,
}

impl EventRecord {
    /// Attach the derived columns to a raw event.
    pub fn derive(raw: RawEvent) -> Self {
        let date = raw.timestamp.date();
        let case_id = CaseId::new(raw.patient_id.clone(), date);
        Self {
            hour: raw.timestamp.hour(),
            weekday: raw.timestamp.weekday(),
            patient_id: raw.patient_id,
            timestamp: raw.timestamp,
            action: raw.action,
            ward: raw.ward,
            date,
            case_id,
        }
    }

    /// English weekday name, e.g. `Monday`.
    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }
}

/// English weekday name.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Immutable table of events, sorted ascending by timestamp.
///
/// Rows with equal timestamps keep their workbook order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTable {
    records: Vec<EventRecord>,
}

impl EventTable {
    /// Derive and sort a new table from raw events.
    pub fn from_raw(raw: Vec<RawEvent>) -> Self {
        let mut records: Vec<EventRecord> = raw.into_iter().map(EventRecord::derive).collect();
        records.sort_by_key(|r| r.timestamp);
        Self { records }
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EventRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&EventRecord> {
        self.records.get(index)
    }
}

impl<'a> IntoIterator for &'a EventTable {
    type Item = &'a EventRecord;
    type IntoIter = std::slice::Iter<'a, EventRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
