//! Dashboard page generator.

use crate::charts::{build_charts, Chart};
use crate::config::{ReportConfig, PLOTLY_PACKAGE};
use crate::error::{ReportError, Result};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use wm_core::Aggregates;

/// Title used when the configuration does not set one.
pub const DEFAULT_TITLE: &str = "ADC系統流程挖掘儀表板";
/// Subtitle used when the configuration does not set one.
pub const DEFAULT_SUBTITLE: &str = "互動式資料探索分析 - 完整版";

/// Everything the page shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportData {
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
    /// Generator version.
    pub generator_version: String,
    /// Input workbook name, shown in the footer.
    pub source: Option<String>,
    /// Aggregated event tables.
    pub aggregates: Aggregates,
}

impl ReportData {
    pub fn new(aggregates: Aggregates) -> Self {
        Self {
            generated_at: Utc::now(),
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
            source: None,
            aggregates,
        }
    }

    /// Record the input workbook name.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Dashboard generator.
pub struct ReportGenerator {
    config: ReportConfig,
    minify: bool,
}

impl ReportGenerator {
    /// Create a new report generator with configuration.
    ///
    /// Output is minified in release builds.
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            minify: !cfg!(debug_assertions),
        }
    }

    /// Override whether the page is minified.
    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    /// Create a generator with default configuration.
    pub fn default_config() -> Self {
        Self::new(ReportConfig::default())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Page title.
    pub fn title(&self) -> &str {
        self.config.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Page subtitle.
    pub fn subtitle(&self) -> &str {
        self.config.subtitle.as_deref().unwrap_or(DEFAULT_SUBTITLE)
    }

    /// Build every chart and assemble the page.
    pub fn generate(&self, data: &ReportData) -> Result<String> {
        debug!(seed = self.config.color_seed, "Building charts");
        let charts = build_charts(&data.aggregates, self.config.color_seed);
        let html = self.generate_html(data, &charts)?;

        let output = if !self.minify {
            html
        } else {
            let cfg = minify_html::Cfg {
                minify_js: true,
                minify_css: true,
                ..Default::default()
            };
            String::from_utf8(minify_html::minify(html.as_bytes(), &cfg)).unwrap_or(html)
        };

        info!(
            bytes = output.len(),
            charts = charts.len(),
            title = %self.title(),
            "Report generated"
        );

        Ok(output)
    }

    fn plotly_script(&self) -> Result<String> {
        let cdn = &self.config.cdn_config;
        let lib = cdn.plotly().ok_or_else(|| {
            ReportError::InvalidConfig(format!("no {} entry in cdn_config.libraries", PLOTLY_PACKAGE))
        })?;
        let src = lib.url(&cdn.base_url, PLOTLY_PACKAGE);

        Ok(match &lib.sri {
            Some(sri) => format!(
                r#"<script src="{}" integrity="{}" crossorigin="anonymous"></script>"#,
                html_escape(&src),
                html_escape(sri)
            ),
            None => format!(r#"<script src="{}"></script>"#, html_escape(&src)),
        })
    }

    fn generate_html(&self, data: &ReportData, charts: &[Chart]) -> Result<String> {
        let summary = &data.aggregates.summary;
        let footer_source = match &data.source {
            Some(source) => format!("<p>資料來源: {}</p>", html_escape(source)),
            None => String::new(),
        };

        Ok(format!(
            r##"<!DOCTYPE html>
<html lang="zh-TW" class="{theme_class}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="generator" content="ward-mining {version}">
    <meta name="robots" content="noindex, nofollow">
    {plotly_script}
    <style>
        :root {{
            --bg-primary: #f5f7fa;
            --bg-card: #ffffff;
            --bg-info: #e9ecef;
            --text-primary: #333333;
            --text-secondary: #6c757d;
            --border-color: #dee2e6;
            --accent-color: #3a7bd5;
            --tab-color: #3f51b5;
            --tab-active: #ff7f50;
        }}
        .dark {{
            --bg-primary: #111827;
            --bg-card: #1f2937;
            --bg-info: #273244;
            --text-primary: #f9fafb;
            --text-secondary: #9ca3af;
            --border-color: #374151;
            --accent-color: #60a5fa;
        }}
        @media (prefers-color-scheme: dark) {{
            :root:not(.light) {{
                --bg-primary: #111827;
                --bg-card: #1f2937;
                --bg-info: #273244;
                --text-primary: #f9fafb;
                --text-secondary: #9ca3af;
                --border-color: #374151;
                --accent-color: #60a5fa;
            }}
        }}
        body {{
            font-family: 'Microsoft JhengHei', 'Segoe UI', ui-sans-serif, system-ui, sans-serif;
            background-color: var(--bg-primary);
            color: var(--text-primary);
            padding: 20px;
            margin: 0;
        }}
        .container {{
            max-width: 1200px;
            margin: 0 auto;
        }}
        header {{
            background-color: var(--bg-card);
            padding: 40px;
            border-radius: 15px;
            box-shadow: 0 10px 30px rgba(0,0,0,0.1);
            text-align: center;
            margin-bottom: 30px;
        }}
        h1 {{
            color: var(--accent-color);
            font-size: 2.5em;
            margin-bottom: 10px;
        }}
        .subtitle {{
            color: var(--text-secondary);
            font-size: 1.2em;
        }}
        .info-box {{
            background-color: var(--bg-info);
            border: 1px solid var(--border-color);
            border-radius: 10px;
            padding: 25px;
            margin-bottom: 30px;
        }}
        .info-box h3 {{
            margin-top: 0;
            margin-bottom: 15px;
        }}
        .info-box ul {{
            padding-left: 20px;
            margin: 0;
            color: var(--text-secondary);
        }}
        .stats-grid {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 20px;
            margin: 30px 0;
        }}
        .stat-card {{
            background: linear-gradient(135deg, #3a7bd5 0%, #3a6073 100%);
            padding: 25px;
            border-radius: 10px;
            text-align: center;
            color: white;
        }}
        .stat-value {{
            font-size: 2.5em;
            font-weight: 700;
            margin-bottom: 10px;
        }}
        .stat-label {{
            font-size: 1.1em;
        }}
        .tabs {{
            display: flex;
            flex-wrap: wrap;
            gap: 10px;
            margin-bottom: 20px;
            padding-bottom: 20px;
            border-bottom: 2px solid var(--border-color);
        }}
        .tab-btn {{
            padding: 12px 20px;
            font-size: 1em;
            font-weight: 700;
            color: white;
            background-color: var(--tab-color);
            border: none;
            border-radius: 8px;
            cursor: pointer;
            transition: all 0.3s ease;
        }}
        .tab-btn:hover {{
            transform: translateY(-2px);
        }}
        .tab-btn.active {{
            background-color: var(--tab-active);
            box-shadow: 0 6px 20px rgba(255, 127, 80, 0.4);
        }}
        .tab-content {{
            display: none;
        }}
        .tab-content.active {{
            display: block;
        }}
        .chart-card {{
            background-color: var(--bg-card);
            padding: 30px;
            border-radius: 15px;
            box-shadow: 0 10px 30px rgba(0,0,0,0.1);
            overflow: hidden;
        }}
        footer {{
            text-align: center;
            color: var(--text-secondary);
            margin-top: 50px;
            padding: 20px;
        }}
        @media print {{
            .no-print {{ display: none !important; }}
            .tab-content {{ display: block; page-break-inside: avoid; }}
        }}
    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1>{title}</h1>
            <p class="subtitle">{subtitle}</p>
        </header>

        <div class="info-box no-print">
            <h3>💡 使用說明</h3>
            <ul>
                <li>點擊下方按鈕切換不同的互動式圖表。</li>
                <li><b>懸停與詳細資訊:</b> 滑鼠移到圖表上查看數據。</li>
                <li><b>縮放與平移:</b> 可以放大、縮小、拖曳圖表。</li>
                <li><b>篩選與隱藏:</b> 點擊圖例可以隱藏/顯示資料。</li>
                <li><b>匯出圖片:</b> 點擊圖表右上角的相機圖示可以下載圖表。</li>
            </ul>
        </div>

        <div class="stats-grid">
            {stat_cards}
        </div>

        <nav class="tabs no-print">
            {tab_buttons}
        </nav>

        <main>
            {tab_contents}
        </main>

        <footer>
            <p>Ward Mining Dashboard v{version} | 產生時間: {generated_at}</p>
            {footer_source}
        </footer>
    </div>

    <script>
        document.addEventListener('DOMContentLoaded', function() {{
            const buttons = document.querySelectorAll('.tab-btn');
            const panels = document.querySelectorAll('.tab-content');

            function activate(button) {{
                const panel = document.getElementById(button.dataset.target);
                buttons.forEach(btn => btn.classList.toggle('active', btn === button));
                panels.forEach(p => p.classList.toggle('active', p === panel));
                if (!panel) return;

                // Plots drawn while hidden have no size; re-measure once visible.
                setTimeout(function() {{
                    const plot = panel.querySelector('.plotly-graph-div');
                    if (!plot) return;
                    try {{
                        Plotly.Plots.resize(plot);
                    }} catch (e) {{
                        console.error('Plotly resize failed: ', e);
                    }}
                }}, 10);
            }}

            buttons.forEach(btn => btn.addEventListener('click', () => activate(btn)));
            if (buttons.length > 0) activate(buttons[0]);
        }});
    </script>
</body>
</html>"##,
            theme_class = self.config.theme.css_class(),
            title = html_escape(self.title()),
            subtitle = html_escape(self.subtitle()),
            version = html_escape(&data.generator_version),
            plotly_script = self.plotly_script()?,
            stat_cards = generate_stat_cards(
                summary.total_events,
                summary.ward_count,
                summary.action_count,
                summary.case_count
            ),
            tab_buttons = generate_tab_buttons(charts),
            tab_contents = generate_tab_contents(charts)?,
            generated_at = data.generated_at.format("%Y-%m-%d %H:%M UTC"),
            footer_source = footer_source,
        ))
    }
}

fn generate_stat_cards(total: usize, wards: usize, actions: usize, cases: usize) -> String {
    [
        (format_count(total), "總記錄數"),
        (wards.to_string(), "病房數"),
        (actions.to_string(), "動作類型"),
        (format_count(cases), "案例數"),
    ]
    .iter()
    .map(|(value, label)| {
        format!(
            r#"<div class="stat-card"><div class="stat-value">{value}</div><div class="stat-label">{label}</div></div>"#
        )
    })
    .collect::<Vec<_>>()
    .join("\n            ")
}

fn generate_tab_buttons(charts: &[Chart]) -> String {
    charts
        .iter()
        .enumerate()
        .map(|(i, chart)| {
            format!(
                r#"<button class="tab-btn{active}" data-target="{target}">{label}</button>"#,
                active = if i == 0 { " active" } else { "" },
                target = chart.kind.dom_id(),
                label = html_escape(chart.kind.label()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ")
}

fn generate_tab_contents(charts: &[Chart]) -> Result<String> {
    let mut contents = Vec::with_capacity(charts.len());
    for (i, chart) in charts.iter().enumerate() {
        let fragment = chart.figure.to_fragment(&chart.kind.plot_id())?;
        contents.push(format!(
            r#"<div id="{id}" class="tab-content{active}">
                <div class="chart-card">{fragment}</div>
            </div>"#,
            id = chart.kind.dom_id(),
            active = if i == 0 { " active" } else { "" },
        ));
    }
    Ok(contents.join("\n            "))
}

/// Format a count with `,` thousands separators.
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
