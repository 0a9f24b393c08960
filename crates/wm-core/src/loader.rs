//! Workbook loader.
//!
//! Reads the first worksheet of an ADC export, resolves the four contract
//! columns by header name and produces a sorted [`EventTable`].

use crate::error::{LoadError, Result};
use crate::event::{EventTable, RawEvent};
use crate::timestamp::{from_excel_serial, parse_timestamp, TimestampError, EXCEL_MAX_SERIAL};

use calamine::{open_workbook_auto, Data, ExcelDateTime, Range, Reader};
use chrono::NaiveDateTime;
use std::path::Path;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Medical record number column.
pub const PATIENT_ID_COLUMN: &str = "病歷號";
/// Record time column.
pub const TIMESTAMP_COLUMN: &str = "紀錄時間";
/// Action column.
pub const ACTION_COLUMN: &str = "動作";
/// Ward column.
pub const WARD_COLUMN: &str = "病房";

static EMPTY_CELL: Data = Data::Empty;

/// Errors raised while turning a worksheet range into events.
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("worksheet has no header row")]
    NoHeader,

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: {source}")]
    Timestamp {
        row: usize,
        #[source]
        source: TimestampError,
    },
}

/// Column positions of the contract columns within the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    patient_id: usize,
    timestamp: usize,
    action: usize,
    ward: usize,
}

impl ColumnMap {
    fn resolve(header: &[Data]) -> std::result::Result<Self, SheetError> {
        let names: Vec<String> = header.iter().map(cell_text).collect();
        let find = |column: &'static str| {
            names
                .iter()
                .position(|name| name == column)
                .ok_or(SheetError::MissingColumn(column))
        };
        Ok(Self {
            patient_id: find(PATIENT_ID_COLUMN)?,
            timestamp: find(TIMESTAMP_COLUMN)?,
            action: find(ACTION_COLUMN)?,
            ward: find(WARD_COLUMN)?,
        })
    }
}

/// Load the event table from a workbook on disk.
///
/// Returns [`LoadError::NotFound`] when `path` does not exist and
/// [`LoadError::LoadFailure`] for everything else that goes wrong.
pub fn load_workbook(path: &Path) -> Result<EventTable> {
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let started = Instant::now();
    info!(path = %path.display(), "Loading workbook");

    let mut workbook =
        open_workbook_auto(path).map_err(|e| LoadError::failure(path, e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoadError::failure(path, "workbook contains no worksheets"))?
        .map_err(|e| LoadError::failure(path, e.to_string()))?;

    let table = parse_range(&range).map_err(|e| LoadError::failure(path, e.to_string()))?;

    info!(
        records = table.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Workbook loaded"
    );
    Ok(table)
}

/// Turn a worksheet range (header row first) into a sorted event table.
pub fn parse_range(range: &Range<Data>) -> std::result::Result<EventTable, SheetError> {
    let mut rows = range.rows();
    let header = rows.next().ok_or(SheetError::NoHeader)?;
    let columns = ColumnMap::resolve(header)?;

    // 1-based worksheet row of the header, for error messages.
    let header_row = range.start().map(|(row, _)| row as usize + 1).unwrap_or(1);

    let mut events = Vec::new();
    let mut skipped = 0usize;

    for (offset, row) in rows.enumerate() {
        let row_number = header_row + offset + 1;
        let cell = |idx: usize| row.get(idx).unwrap_or(&EMPTY_CELL);

        let ts_cell = cell(columns.timestamp);
        if is_blank(ts_cell) {
            skipped += 1;
            continue;
        }

        let timestamp = cell_timestamp(ts_cell).map_err(|source| SheetError::Timestamp {
            row: row_number,
            source,
        })?;

        events.push(RawEvent::new(
            cell_text(cell(columns.patient_id)),
            timestamp,
            cell_text(cell(columns.action)),
            cell_text(cell(columns.ward)),
        ));
    }

    if skipped > 0 {
        warn!(skipped, "Skipped rows without a record time");
    }
    debug!(rows = events.len(), "Parsed worksheet rows");

    Ok(EventTable::from_raw(events))
}

fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Render a cell as text. Integral floats lose their `.0` so numeric ids
/// read the same as their text form.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        other => other.to_string().trim().to_string(),
    }
}

fn cell_timestamp(cell: &Data) -> std::result::Result<NaiveDateTime, TimestampError> {
    match cell {
        Data::DateTime(dt) => excel_datetime(dt),
        Data::Float(f) => from_excel_serial(*f),
        Data::Int(i) => from_excel_serial(*i as f64),
        Data::String(s) | Data::DateTimeIso(s) => parse_timestamp(s),
        Data::Empty => Err(TimestampError::Empty),
        other => parse_timestamp(&other.to_string()),
    }
}

/// Date-formatted cells carry the workbook's date system, so the 1904
/// offset is applied here rather than in [`from_excel_serial`].
fn excel_datetime(dt: &ExcelDateTime) -> std::result::Result<NaiveDateTime, TimestampError> {
    let serial = dt.as_f64();
    if !serial.is_finite() || !(0.0..=EXCEL_MAX_SERIAL).contains(&serial) {
        return Err(TimestampError::SerialOutOfRange(serial.to_string()));
    }
    dt.as_datetime()
        .ok_or_else(|| TimestampError::SerialOutOfRange(serial.to_string()))
}
