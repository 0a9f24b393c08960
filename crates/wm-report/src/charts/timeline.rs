//! Activity timeline for the sampled cases.
//!
//! Drawn the way Plotly draws a Gantt chart: horizontal bars on a date
//! axis, each bar's `base` at the span start and its length in
//! milliseconds. One trace per action so the legend colors by action.

use super::{title_block, ChartKind, Figure};
use chrono::NaiveDateTime;
use serde_json::{json, Value};
use std::collections::HashMap;
use wm_core::aggregate::{Timeline, TimelineSpan};

fn plotly_time(t: &NaiveDateTime) -> String {
    t.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

fn hover_time(t: &NaiveDateTime) -> String {
    t.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn timeline_chart(timeline: &Timeline) -> Figure {
    if timeline.is_empty() {
        return Figure::placeholder(ChartKind::Timeline);
    }

    // Group spans by action, keeping first-appearance order.
    let mut order: Vec<&str> = Vec::new();
    let mut by_action: HashMap<&str, Vec<&TimelineSpan>> = HashMap::new();
    for span in &timeline.spans {
        by_action
            .entry(span.action.as_str())
            .or_insert_with(|| {
                order.push(span.action.as_str());
                Vec::new()
            })
            .push(span);
    }

    let traces: Vec<Value> = order
        .iter()
        .map(|action| {
            let spans = &by_action[action];
            let base: Vec<String> = spans.iter().map(|s| plotly_time(&s.start)).collect();
            let lengths: Vec<i64> = spans.iter().map(|s| s.duration().num_milliseconds()).collect();
            let cases: Vec<&str> = spans.iter().map(|s| s.case_label.as_str()).collect();
            let custom: Vec<[String; 3]> = spans
                .iter()
                .map(|s| [s.ward.clone(), hover_time(&s.start), hover_time(&s.finish)])
                .collect();
            json!({
                "type": "bar",
                "orientation": "h",
                "name": action,
                "base": base,
                "x": lengths,
                "y": cases,
                "customdata": custom,
                "hovertemplate": "<b>%{y}</b><br>動作: %{fullData.name}<br>病房: %{customdata[0]}<br>開始: %{customdata[1]}<br>結束: %{customdata[2]}<extra></extra>",
            })
        })
        .collect();

    let mut case_order: Vec<&str> = Vec::new();
    for span in &timeline.spans {
        if case_order.last() != Some(&span.case_label.as_str()) {
            case_order.push(span.case_label.as_str());
        }
    }

    let layout = json!({
        "title": title_block(ChartKind::Timeline.title()),
        "height": ChartKind::Timeline.height(),
        "barmode": "overlay",
        "showlegend": true,
        "legend": { "title": { "text": "動作" } },
        "xaxis": { "title": { "text": "時間" }, "type": "date" },
        "yaxis": {
            "title": { "text": "案例" },
            "autorange": "reversed",
            "categoryorder": "array",
            "categoryarray": case_order,
        },
    });

    Figure::new(traces, layout)
}
