//! Action transition flow network.

use super::{title_block, ChartKind, Figure};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;
use std::collections::HashMap;
use wm_core::aggregate::FlowNetwork;

/// Random pastel-ish node colors, each channel in `100..255`.
///
/// The same seed and node count always give the same colors.
pub fn node_colors(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let r: u8 = rng.random_range(100..255);
            let g: u8 = rng.random_range(100..255);
            let b: u8 = rng.random_range(100..255);
            format!("#{r:02x}{g:02x}{b:02x}")
        })
        .collect()
}

pub fn sankey_chart(flow: &FlowNetwork, color_seed: u64) -> Figure {
    if flow.is_empty() {
        return Figure::placeholder(ChartKind::Sankey);
    }

    let nodes = flow.nodes();
    let index: HashMap<&str, usize> = nodes.iter().enumerate().map(|(i, n)| (*n, i)).collect();

    let sources: Vec<usize> = flow
        .transitions
        .iter()
        .map(|t| index[t.source.as_str()])
        .collect();
    let targets: Vec<usize> = flow
        .transitions
        .iter()
        .map(|t| index[t.target.as_str()])
        .collect();
    let values: Vec<usize> = flow.transitions.iter().map(|t| t.count).collect();

    let trace = json!({
        "type": "sankey",
        "node": {
            "pad": 20,
            "thickness": 30,
            "line": { "color": "black", "width": 1 },
            "label": nodes,
            "color": node_colors(nodes.len(), color_seed),
        },
        "link": {
            "source": sources,
            "target": targets,
            "value": values,
            "label": values,
            "color": "rgba(0,0,96,0.2)",
            "hovertemplate": "從 %{source.label} 到 %{target.label}: %{value} 次<extra></extra>",
        },
    });
    let layout = json!({
        "title": title_block(ChartKind::Sankey.title()),
        "height": ChartKind::Sankey.height(),
        "font": { "size": 14 },
    });

    Figure::new(vec![trace], layout)
}
