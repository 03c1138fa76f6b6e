//! ポジティブ度ゲージ

use serde_json::json;

use super::layout::{base_layout, DEFAULT_HEIGHT};
use super::{unit_interval, Figure};
use crate::theme::Theme;

/// 低・中・高ゾーンの境界
pub const GAUGE_ZONES: [(f64, f64); 3] = [(0.0, 0.33), (0.33, 0.66), (0.66, 1.0)];
/// 判定のしきい値
pub const GAUGE_THRESHOLD: f64 = 0.5;

/// `positive_score` がなければ0で描く
pub fn gauge_figure(theme: Theme, positive_score: Option<f64>) -> Figure {
    let palette = theme.palette();
    let value = positive_score.map(unit_interval).unwrap_or(0.0);

    let steps: Vec<_> = GAUGE_ZONES
        .iter()
        .zip(palette.gauge_zones)
        .map(|(&(low, high), color)| json!({ "range": [low, high], "color": color }))
        .collect();

    let trace = json!({
        "type": "indicator",
        "mode": "gauge+number",
        "value": value,
        "title": { "text": "Positivity Score", "font": { "color": palette.text } },
        "number": { "valueformat": ".1%", "font": { "size": 24, "color": palette.text } },
        "gauge": {
            "axis": {
                "range": [0, 1],
                "tickwidth": 1,
                "tickcolor": palette.gauge_tick,
                "tickfont": { "color": palette.text },
            },
            "bar": { "color": palette.gauge_bar },
            "bgcolor": palette.gauge_background,
            "borderwidth": 2,
            "bordercolor": palette.gauge_border,
            "steps": steps,
            "threshold": {
                "line": { "color": palette.threshold, "width": 4 },
                "thickness": 0.75,
                "value": GAUGE_THRESHOLD,
            },
        },
    });

    Figure {
        data: json!([trace]),
        layout: base_layout(theme, DEFAULT_HEIGHT),
    }
}
