//! Plotly figure specs for the seven dashboard charts.
//!
//! Every chart is a [`Figure`]: the `data` trace array and the `layout`
//! object Plotly.js expects, built with `serde_json`. The page loads the
//! Plotly runtime once; a chart fragment only carries its container and a
//! `Plotly.newPlot` call.

pub mod bar;
pub mod heatmap;
pub mod pie;
pub mod sankey;
pub mod timeline;
pub mod trend;
pub mod violin;

use crate::error::Result;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;
use wm_core::Aggregates;

/// Title font size shared by every chart.
const TITLE_FONT_SIZE: u32 = 20;

/// The dashboard charts, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Pie,
    Bar,
    Heatmap,
    Trend,
    Sankey,
    Violin,
    Timeline,
}

impl ChartKind {
    /// Every chart in tab order.
    pub const ALL: [ChartKind; 7] = [
        ChartKind::Pie,
        ChartKind::Bar,
        ChartKind::Heatmap,
        ChartKind::Trend,
        ChartKind::Sankey,
        ChartKind::Violin,
        ChartKind::Timeline,
    ];

    /// Short machine name, used in logs.
    pub fn slug(&self) -> &'static str {
        match self {
            ChartKind::Pie => "pie",
            ChartKind::Bar => "bar",
            ChartKind::Heatmap => "heatmap",
            ChartKind::Trend => "trend",
            ChartKind::Sankey => "sankey",
            ChartKind::Violin => "violin",
            ChartKind::Timeline => "timeline",
        }
    }

    /// DOM id of the tab panel holding this chart.
    pub fn dom_id(&self) -> &'static str {
        match self {
            ChartKind::Pie => "chart-pie",
            ChartKind::Bar => "chart-bar",
            ChartKind::Heatmap => "chart-heatmap",
            ChartKind::Trend => "chart-trend",
            ChartKind::Sankey => "chart-sankey",
            ChartKind::Violin => "chart-violin",
            ChartKind::Timeline => "chart-timeline",
        }
    }

    /// DOM id of the plot element inside the panel.
    pub fn plot_id(&self) -> String {
        format!("{}-plot", self.dom_id())
    }

    /// Tab button label.
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Pie => "動作類型分布",
            ChartKind::Bar => "病房活動量排名",
            ChartKind::Heatmap => "系統使用熱力圖",
            ChartKind::Trend => "每日活動趨勢",
            ChartKind::Sankey => "流程轉換網路",
            ChartKind::Violin => "案例處理時間",
            ChartKind::Timeline => "活動時間軸",
        }
    }

    /// Chart title drawn above the plot.
    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Pie => "動作類型分布",
            ChartKind::Bar => "病房活動量排名",
            ChartKind::Heatmap => "系統使用熱力圖 (按星期與時段)",
            ChartKind::Trend => "每日活動趨勢",
            ChartKind::Sankey => "ADC系統流程轉換網路圖 (Top 20)",
            ChartKind::Violin => "各病房案例處理時間分布",
            ChartKind::Timeline => "前20個案例的活動時間軸 (抽樣)",
        }
    }

    /// Message shown instead of the plot when there is nothing to draw.
    pub fn empty_message(&self) -> &'static str {
        match self {
            ChartKind::Pie => "無資料可產生動作類型分布圖",
            ChartKind::Bar => "無資料可產生病房活動量排名",
            ChartKind::Heatmap => "無資料可產生系統使用熱力圖",
            ChartKind::Trend => "無資料可產生每日活動趨勢圖",
            ChartKind::Sankey => "無資料可產生流程網路圖",
            ChartKind::Violin => "無資料產生處理時間分布圖",
            ChartKind::Timeline => "無資料可產生時間軸",
        }
    }

    /// Plot height in pixels.
    pub fn height(&self) -> u32 {
        match self {
            ChartKind::Violin => 600,
            ChartKind::Sankey | ChartKind::Timeline => 700,
            _ => 500,
        }
    }
}

/// A Plotly figure: trace array plus layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
    #[serde(skip)]
    placeholder: bool,
}

impl Figure {
    pub fn new(data: Vec<Value>, layout: Value) -> Self {
        Self {
            data,
            layout,
            placeholder: false,
        }
    }

    /// A no-data figure: no traces, hidden axes and a centered message.
    pub fn placeholder(kind: ChartKind) -> Self {
        let layout = json!({
            "title": title_block(kind.title()),
            "height": kind.height(),
            "xaxis": { "visible": false },
            "yaxis": { "visible": false },
            "annotations": [{
                "text": kind.empty_message(),
                "xref": "paper",
                "yref": "paper",
                "x": 0.5,
                "y": 0.5,
                "showarrow": false,
                "font": { "size": 16 },
            }],
        });
        Self {
            data: Vec::new(),
            layout,
            placeholder: true,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// Render the plot container and the script that draws into it.
    pub fn to_fragment(&self, plot_id: &str) -> Result<String> {
        let data = script_json(&serde_json::to_string(&self.data)?);
        let layout = script_json(&serde_json::to_string(&self.layout)?);
        let id = serde_json::to_string(plot_id)?;

        Ok(format!(
            r#"<div id="{plot_id}" class="plotly-graph-div" style="width:100%;"></div>
<script>Plotly.newPlot({id}, {data}, {layout}, {{"responsive": true}});</script>"#,
        ))
    }
}

/// One rendered chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub kind: ChartKind,
    pub figure: Figure,
}

/// Build all seven charts in tab order.
pub fn build_charts(aggregates: &Aggregates, color_seed: u64) -> Vec<Chart> {
    ChartKind::ALL
        .iter()
        .map(|&kind| {
            let figure = match kind {
                ChartKind::Pie => pie::pie_chart(&aggregates.activity),
                ChartKind::Bar => bar::bar_chart(&aggregates.wards),
                ChartKind::Heatmap => heatmap::heatmap_chart(&aggregates.heatmap),
                ChartKind::Trend => trend::trend_chart(&aggregates.daily),
                ChartKind::Sankey => sankey::sankey_chart(&aggregates.flow, color_seed),
                ChartKind::Violin => violin::violin_chart(&aggregates.durations),
                ChartKind::Timeline => timeline::timeline_chart(&aggregates.timeline),
            };
            info!(
                chart = kind.slug(),
                traces = figure.data.len(),
                placeholder = figure.is_placeholder(),
                "Chart built"
            );
            Chart { kind, figure }
        })
        .collect()
}

/// Bold chart title at the shared font size.
pub(crate) fn title_block(title: &str) -> Value {
    json!({
        "text": format!("<b>{title}</b>"),
        "font": { "size": TITLE_FONT_SIZE },
    })
}

/// Keep serialized JSON from closing the surrounding `<script>` element.
pub(crate) fn script_json(json: &str) -> String {
    json.replace("</", "<\\/")
}
