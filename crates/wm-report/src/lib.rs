//! HTML dashboard generator for ward event logs.
//!
//! Turns the [`wm_core::Aggregates`] of one workbook into a single
//! self-contained HTML page.
//!
//! # Features
//!
//! - **Single-file output**: one page, Plotly.js loaded once from a pinned CDN URL
//! - **Tabbed charts**: seven charts, one visible at a time, resized on reveal
//! - **Placeholders**: charts with no data show a message instead of an empty plot
//! - **Reproducible**: flow-network node colors come from a configurable seed
//!
//! # Charts
//!
//! - Pie: action type distribution
//! - Bar: ward activity ranking
//! - Heatmap: weekday × hour usage
//! - Trend: daily activity
//! - Sankey: top action transitions
//! - Violin: case processing time per ward
//! - Timeline: per-event intervals of sampled cases
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use wm_core::{load_workbook, Aggregates, CaseIndex};
//! use wm_report::{ReportConfig, ReportData, ReportGenerator};
//!
//! let table = load_workbook(Path::new("events.xlsx")).unwrap();
//! let cases = CaseIndex::build(&table);
//! let data = ReportData::new(Aggregates::compute(&table, &cases));
//! let html = ReportGenerator::new(ReportConfig::default()).generate(&data).unwrap();
//! ```

pub mod charts;
pub mod config;
pub mod error;
pub mod generator;

pub use charts::{build_charts, Chart, ChartKind, Figure};
pub use config::{CdnConfig, CdnLibrary, ReportConfig, ReportTheme};
pub use error::{ReportError, Result};
pub use generator::{ReportData, ReportGenerator};
