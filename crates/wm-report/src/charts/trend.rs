//! Daily activity trend.

use super::{title_block, ChartKind, Figure};
use serde_json::json;
use wm_core::aggregate::DailyCount;

pub fn trend_chart(daily: &[DailyCount]) -> Figure {
    if daily.is_empty() {
        return Figure::placeholder(ChartKind::Trend);
    }

    let dates: Vec<String> = daily
        .iter()
        .map(|d| d.date.format("%Y-%m-%d").to_string())
        .collect();
    let counts: Vec<usize> = daily.iter().map(|d| d.count).collect();

    let trace = json!({
        "type": "scatter",
        "mode": "lines+markers",
        "x": dates,
        "y": counts,
        "line": { "color": "royalblue", "width": 2 },
        "marker": { "size": 6 },
        "fill": "tozeroy",
        "fillcolor": "rgba(65, 105, 225, 0.2)",
        "hovertemplate": "日期: %{x}<br>活動數: %{y}<extra></extra>",
    });
    let layout = json!({
        "title": title_block(ChartKind::Trend.title()),
        "height": ChartKind::Trend.height(),
        "xaxis": { "title": { "text": "日期" }, "type": "date" },
        "yaxis": { "title": { "text": "活動數量" } },
        "hovermode": "x unified",
    });

    Figure::new(vec![trace], layout)
}
