//! Weekday × hour usage heatmap.

use super::{title_block, ChartKind, Figure};
use chrono::Weekday;
use serde_json::json;
use wm_core::aggregate::{WeekdayHeatmap, HOURS};

/// Row label for a weekday.
pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "星期一",
        Weekday::Tue => "星期二",
        Weekday::Wed => "星期三",
        Weekday::Thu => "星期四",
        Weekday::Fri => "星期五",
        Weekday::Sat => "星期六",
        Weekday::Sun => "星期日",
    }
}

pub fn heatmap_chart(heatmap: &WeekdayHeatmap) -> Figure {
    if heatmap.total() == 0 {
        return Figure::placeholder(ChartKind::Heatmap);
    }

    let hours: Vec<String> = (0..HOURS).map(|h| format!("{h:02}:00")).collect();
    let days: Vec<&str> = heatmap.rows().map(|(day, _)| weekday_label(day)).collect();
    let z: Vec<&[usize; HOURS]> = heatmap.rows().map(|(_, row)| row).collect();

    let trace = json!({
        "type": "heatmap",
        "z": z,
        "x": hours,
        "y": days,
        "colorscale": "YlOrRd",
        "colorbar": { "title": { "text": "活動數" } },
        "hovertemplate": "時段: %{x}<br>星期: %{y}<br>活動數: %{z}<extra></extra>",
    });
    let layout = json!({
        "title": title_block(ChartKind::Heatmap.title()),
        "height": ChartKind::Heatmap.height(),
        "font": { "size": 12 },
        "xaxis": { "title": { "text": "時段 (24小時制)" }, "tickmode": "linear", "dtick": 2 },
        "yaxis": { "title": { "text": "星期" } },
    });

    Figure::new(vec![trace], layout)
}
