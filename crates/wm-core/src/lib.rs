//! Ward event log mining core.
//!
//! This crate turns an ADC ward event workbook into the aggregate tables the
//! dashboard renders:
//! - Workbook loading with mixed-format timestamp parsing
//! - The sorted, immutable event table with derived columns
//! - Case reconstruction (one patient, one calendar day)
//! - Seven independent aggregators plus headline statistics
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use wm_core::{load_workbook, Aggregates, CaseIndex};
//!
//! let table = load_workbook(Path::new("events.xlsx")).unwrap();
//! let cases = CaseIndex::build(&table);
//! let aggregates = Aggregates::compute(&table, &cases);
//! println!("{} cases", aggregates.summary.case_count);
//! ```

pub mod aggregate;
pub mod cases;
pub mod error;
pub mod event;
pub mod loader;
pub mod timestamp;

pub use aggregate::{Aggregates, CategoryCount, SummaryStats};
pub use cases::{Case, CaseIndex};
pub use error::{LoadError, Result};
pub use event::{CaseId, EventRecord, EventTable, RawEvent};
pub use loader::{load_workbook, parse_range};
pub use timestamp::{parse_timestamp, TimestampError};
