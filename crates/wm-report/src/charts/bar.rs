//! Ward activity ranking.

use super::{title_block, ChartKind, Figure};
use serde_json::json;
use wm_core::CategoryCount;

/// Horizontal bars, one per ward, in the ranking's ascending order so the
/// busiest ward ends up on top.
pub fn bar_chart(wards: &[CategoryCount]) -> Figure {
    if wards.is_empty() {
        return Figure::placeholder(ChartKind::Bar);
    }

    let names: Vec<&str> = wards.iter().map(|c| c.label.as_str()).collect();
    let counts: Vec<usize> = wards.iter().map(|c| c.count).collect();

    let trace = json!({
        "type": "bar",
        "orientation": "h",
        "x": counts,
        "y": names,
        "marker": { "color": counts, "colorscale": "Viridis" },
        "text": counts,
        "textposition": "outside",
        "hovertemplate": "<b>%{y}</b><br>活動數: %{x}<extra></extra>",
    });
    let layout = json!({
        "title": title_block(ChartKind::Bar.title()),
        "height": ChartKind::Bar.height(),
        "xaxis": { "title": { "text": "活動數量" } },
        "yaxis": { "title": { "text": "病房" }, "type": "category" },
    });

    Figure::new(vec![trace], layout)
}
