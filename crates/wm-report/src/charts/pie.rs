//! Action type distribution.

use super::{title_block, ChartKind, Figure};
use serde_json::json;
use wm_core::CategoryCount;

/// Donut chart of event counts per action.
pub fn pie_chart(activity: &[CategoryCount]) -> Figure {
    if activity.is_empty() {
        return Figure::placeholder(ChartKind::Pie);
    }

    let labels: Vec<&str> = activity.iter().map(|c| c.label.as_str()).collect();
    let values: Vec<usize> = activity.iter().map(|c| c.count).collect();

    let trace = json!({
        "type": "pie",
        "labels": labels,
        "values": values,
        "hole": 0.3,
        "textinfo": "label+percent",
        "hovertemplate": "<b>%{label}</b><br>數量: %{value}<br>佔比: %{percent}<extra></extra>",
    });
    let layout = json!({
        "title": title_block(ChartKind::Pie.title()),
        "height": ChartKind::Pie.height(),
        "legend": { "title": { "text": "動作類型" } },
    });

    Figure::new(vec![trace], layout)
}
