//! Case processing time distribution per ward.

use super::{title_block, ChartKind, Figure};
use serde_json::json;
use wm_core::aggregate::DurationDistribution;

/// One violin per ward, with box and mean line.
pub fn violin_chart(durations: &DurationDistribution) -> Figure {
    if durations.is_empty() {
        return Figure::placeholder(ChartKind::Violin);
    }

    let traces = durations
        .wards
        .iter()
        .map(|w| {
            json!({
                "type": "violin",
                "name": w.ward,
                "y": w.minutes,
                "box": { "visible": true },
                "meanline": { "visible": true },
                "hovertemplate": "<b>%{fullData.name}</b><br>時間: %{y:.1f} 分鐘<extra></extra>",
            })
        })
        .collect();
    let layout = json!({
        "title": title_block(ChartKind::Violin.title()),
        "height": ChartKind::Violin.height(),
        "yaxis": { "title": { "text": "處理時間 (分鐘)" } },
        "showlegend": true,
    });

    Figure::new(traces, layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wm_core::aggregate::WardDurations;

    #[test]
    fn test_one_trace_per_ward() {
        let figure = violin_chart(&DurationDistribution {
            wards: vec![
                WardDurations { ward: "5A".into(), minutes: vec![12.5, 30.0] },
                WardDurations { ward: "ICU".into(), minutes: vec![4.0] },
            ],
        });
        assert_eq!(figure.data.len(), 2);
        assert_eq!(figure.data[1]["name"], "ICU");
        assert_eq!(figure.data[0]["box"]["visible"], true);
        assert_eq!(figure.data[0]["meanline"]["visible"], true);
    }

    #[test]
    fn test_no_samples_is_placeholder() {
        let figure = violin_chart(&DurationDistribution::default());
        assert!(figure.is_placeholder());
        assert_eq!(figure.layout["annotations"][0]["text"], "無資料產生處理時間分布圖");
    }
}
