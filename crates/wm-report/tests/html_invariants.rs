//! Dashboard page invariant tests.
//!
//! These tests validate the generated HTML structure without requiring a browser:
//! - Seven tab buttons wired to seven panels, first one active
//! - Exactly one Plotly runtime script, pinned, with SRI when configured
//! - Tab handler re-measures the revealed plot
//! - Summary cards and placeholders

use chrono::{Duration, NaiveDate, NaiveDateTime};
use regex::Regex;
use wm_core::{Aggregates, CaseIndex, EventTable, RawEvent};
use wm_report::config::{CdnLibrary, ReportConfig, PLOTLY_PACKAGE};
use wm_report::generator::{ReportData, ReportGenerator};
use wm_report::ChartKind;

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn sample_table() -> EventTable {
    let mut raw = Vec::new();
    for patient in 0..600 {
        let pid = format!("A{patient:07}");
        let ward = ["5A", "6B", "ICU"][patient % 3];
        let start = at(1 + (patient % 5) as u32, 8 + (patient % 10) as u32, 0);
        raw.push(RawEvent::new(pid.clone(), start, "領藥", ward));
        raw.push(RawEvent::new(pid.clone(), start + Duration::minutes(15), "給藥", ward));
        if patient % 2 == 0 {
            raw.push(RawEvent::new(pid, start + Duration::minutes(40), "退藥", ward));
        }
    }
    EventTable::from_raw(raw)
}

fn data_for(table: &EventTable) -> ReportData {
    let cases = CaseIndex::build(table);
    ReportData::new(Aggregates::compute(table, &cases)).with_source("events.xlsx")
}

/// Markup checks below read attributes as written, so render unminified.
fn render(config: ReportConfig, table: &EventTable) -> String {
    ReportGenerator::new(config)
        .with_minify(false)
        .generate(&data_for(table))
        .unwrap()
}

fn render_minified(config: ReportConfig, table: &EventTable) -> String {
    ReportGenerator::new(config)
        .with_minify(true)
        .generate(&data_for(table))
        .unwrap()
}

// ============================================================================
// HTML Structure Tests
// ============================================================================

mod structure {
    use super::*;

    #[test]
    fn test_html_doctype_and_meta() {
        let html = render(ReportConfig::default(), &sample_table());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"charset="UTF-8""#));
        assert!(html.contains(r#"name="viewport""#));
        assert!(html.contains(r#"name="generator""#));
        assert!(html.contains(r#"lang="zh-TW""#));
    }

    #[test]
    fn test_seven_buttons_and_panels() {
        let html = render(ReportConfig::default(), &sample_table());

        let button = Regex::new(r#"<button class="tab-btn[^"]*" data-target="([a-z-]+)">"#).unwrap();
        let targets: Vec<&str> = button
            .captures_iter(&html)
            .map(|c| c.get(1).unwrap().as_str())
            .collect();
        let expected: Vec<&str> = ChartKind::ALL.iter().map(|k| k.dom_id()).collect();
        assert_eq!(targets, expected);

        let panel = Regex::new(r#"<div id="(chart-[a-z]+)" class="tab-content( active)?">"#).unwrap();
        let panels: Vec<(String, bool)> = panel
            .captures_iter(&html)
            .map(|c| (c[1].to_string(), c.get(2).is_some()))
            .collect();
        assert_eq!(panels.len(), 7);
        assert_eq!(
            panels.iter().map(|(id, _)| id.as_str()).collect::<Vec<_>>(),
            expected
        );
        assert_eq!(
            panels.iter().filter(|(_, active)| *active).count(),
            1,
            "exactly one panel visible on load"
        );
        assert!(panels[0].1, "first panel is the visible one");
    }

    #[test]
    fn test_every_panel_has_a_plot() {
        let html = render(ReportConfig::default(), &sample_table());
        assert_eq!(html.matches(r#"class="plotly-graph-div""#).count(), 7);
        assert_eq!(html.matches("Plotly.newPlot(").count(), 7);
    }

    #[test]
    fn test_summary_cards() {
        let table = sample_table();
        let html = render(ReportConfig::default(), &table);

        // 600 patients × 2 or 3 events
        assert!(html.contains(r#"<div class="stat-value">1,500</div><div class="stat-label">總記錄數</div>"#));
        assert!(html.contains(r#"<div class="stat-value">3</div><div class="stat-label">病房數</div>"#));
        assert!(html.contains(r#"<div class="stat-value">3</div><div class="stat-label">動作類型</div>"#));
        assert!(html.contains(r#"<div class="stat-value">600</div><div class="stat-label">案例數</div>"#));
    }
}

// ============================================================================
// Script Tests
// ============================================================================

mod scripts {
    use super::*;

    #[test]
    fn test_single_pinned_plotly_runtime() {
        let html = render(ReportConfig::default(), &sample_table());
        let runtime = Regex::new(r#"<script src="([^"]+)""#).unwrap();
        let sources: Vec<&str> = runtime
            .captures_iter(&html)
            .map(|c| c.get(1).unwrap().as_str())
            .collect();

        assert_eq!(sources.len(), 1, "Plotly must be loaded exactly once");
        assert!(sources[0].contains("plotly.js-dist-min@2.35.2"));
    }

    #[test]
    fn test_minified_page_keeps_runtime_and_tabs() {
        let html = render_minified(ReportConfig::default(), &sample_table());

        let runtime = Regex::new(r#"<script src="?([^" >]+)"?"#).unwrap();
        let sources: Vec<&str> = runtime
            .captures_iter(&html)
            .map(|c| c.get(1).unwrap().as_str())
            .collect();
        assert_eq!(sources.len(), 1);
        assert!(sources[0].contains("plotly.js-dist-min@2.35.2"));

        let button = Regex::new(r#"data-target="?(chart-[a-z]+)"?"#).unwrap();
        let targets: Vec<&str> = button
            .captures_iter(&html)
            .map(|c| c.get(1).unwrap().as_str())
            .collect();
        let expected: Vec<&str> = ChartKind::ALL.iter().map(|k| k.dom_id()).collect();
        assert_eq!(targets, expected);
    }

    #[test]
    fn test_sri_emitted_when_configured() {
        let mut config = ReportConfig::default();
        config.cdn_config.libraries.insert(
            PLOTLY_PACKAGE.to_string(),
            CdnLibrary::new("2.35.2")
                .with_path("plotly.min.js")
                .with_sri("sha384-test"),
        );
        let html = render(config, &sample_table());
        assert!(html.contains(r#"integrity="sha384-test" crossorigin="anonymous""#));
    }

    #[test]
    fn test_tab_handler_resizes_after_reveal() {
        let html = render(ReportConfig::default(), &sample_table());
        let handler = html
            .find("function activate(")
            .map(|start| &html[start..])
            .unwrap();
        let resize = handler.find("Plotly.Plots.resize").unwrap();
        let timeout = handler.find("setTimeout(").unwrap();
        assert!(timeout < resize);
        assert!(handler.contains("}, 10);"));
        assert!(html.contains("DOMContentLoaded"));
    }

    #[test]
    fn test_embedded_json_cannot_close_script() {
        let table = EventTable::from_raw(vec![
            RawEvent::new("P1", at(1, 8, 0), "</script><script>alert(1)", "5A"),
            RawEvent::new("P1", at(1, 8, 5), "給藥", "5A"),
        ]);
        let html = render(ReportConfig::default(), &table);
        assert!(!html.contains("</script><script>alert(1)"));
        assert!(html.contains(r#"<\/script><script>alert(1)"#));
    }
}

// ============================================================================
// Data Edge Cases
// ============================================================================

mod edge_cases {
    use super::*;

    #[test]
    fn test_zero_events_renders_placeholders() {
        let html = render(ReportConfig::default(), &EventTable::default());
        for kind in ChartKind::ALL {
            assert!(
                html.contains(kind.empty_message()),
                "missing placeholder for {}",
                kind.slug()
            );
        }
        assert!(html.contains(r#"<div class="stat-value">0</div><div class="stat-label">總記錄數</div>"#));
    }

    #[test]
    fn test_single_event_cases_have_no_duration_or_flow() {
        let table = EventTable::from_raw(vec![
            RawEvent::new("P1", at(1, 8, 0), "領藥", "5A"),
            RawEvent::new("P2", at(1, 9, 0), "領藥", "6B"),
        ]);
        let html = render(ReportConfig::default(), &table);
        assert!(html.contains(ChartKind::Violin.empty_message()));
        assert!(html.contains(ChartKind::Sankey.empty_message()));
        assert!(!html.contains(ChartKind::Pie.empty_message()));
        assert!(!html.contains(ChartKind::Timeline.empty_message()));
    }

    #[test]
    fn test_same_seed_same_page() {
        let table = sample_table();
        let cases = CaseIndex::build(&table);
        let data = ReportData::new(Aggregates::compute(&table, &cases));
        let generator = ReportGenerator::new(ReportConfig::new().with_color_seed(9));
        assert_eq!(
            generator.generate(&data).unwrap(),
            generator.generate(&data).unwrap()
        );
    }
}
