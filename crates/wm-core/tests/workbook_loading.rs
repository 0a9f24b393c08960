//! Loading real `.xlsx` packages from disk.

mod support;

use chrono::{NaiveDate, Weekday};
use support::xlsx::{text, Cell, Workbook};
use tempfile::TempDir;
use wm_core::{load_workbook, CaseIndex, LoadError};

fn header() -> Vec<Cell> {
    vec![text("序號"), text("病歷號"), text("紀錄時間"), text("動作"), text("病房")]
}

fn event(seq: f64, patient: &str, time: Cell, action: &str, ward: &str) -> Vec<Cell> {
    vec![Cell::Number(seq), text(patient), time, text(action), text(ward)]
}

#[test]
fn loads_date_formatted_cells() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("events.xlsx");
    Workbook::new()
        .row(header())
        .row(event(1.0, "A0001", Cell::DateTime(45352.5), "領藥", "5A"))
        .row(event(2.0, "A0001", Cell::DateTime(45352.375), "給藥", "5A"))
        .row(event(3.0, "B0002", text("2024/03/02 下午 02:15:00"), "退藥", "ICU"))
        .write(&path)
        .unwrap();

    let table = load_workbook(&path).unwrap();
    assert_eq!(table.len(), 3);

    let first = &table.records()[0];
    assert_eq!(first.action, "給藥");
    assert_eq!(first.hour, 9);
    assert_eq!(first.weekday, Weekday::Fri);
    assert_eq!(first.case_id.to_string(), "A0001_2024-03-01");

    let last = &table.records()[2];
    assert_eq!(last.hour, 14);
    assert_eq!(last.ward, "ICU");

    assert_eq!(CaseIndex::build(&table).len(), 2);
}

#[test]
fn applies_1904_date_system() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mac.xlsx");
    Workbook::new()
        .date1904(true)
        .row(header())
        .row(event(1.0, "A0001", Cell::DateTime(43890.5), "領藥", "5A"))
        .write(&path)
        .unwrap();

    let table = load_workbook(&path).unwrap();
    let record = &table.records()[0];
    assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert_eq!(record.hour, 12);
}

#[test]
fn numeric_patient_ids_read_as_text() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ids.xlsx");
    Workbook::new()
        .row(header())
        .row(vec![
            Cell::Number(1.0),
            Cell::Number(12345.0),
            Cell::DateTime(45352.5),
            text("領藥"),
            text("7B"),
        ])
        .write(&path)
        .unwrap();

    let table = load_workbook(&path).unwrap();
    assert_eq!(table.records()[0].patient_id, "12345");
}

#[test]
fn missing_column_is_load_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.xlsx");
    Workbook::new()
        .row(vec![text("病歷號"), text("紀錄時間"), text("動作")])
        .row(vec![text("A0001"), Cell::DateTime(45352.5), text("領藥")])
        .write(&path)
        .unwrap();

    match load_workbook(&path).unwrap_err() {
        LoadError::LoadFailure { reason, .. } => assert!(reason.contains("病房")),
        other => panic!("unexpected error: {other}"),
    }
}
