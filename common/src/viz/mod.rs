//! 可視化（Plotlyの図）
//!
//! 各関数はテーマと入力データからPlotlyの `data` / `layout` を組み立てるだけで、
//! 描画はしない。配色は呼ぶたびにテーマから引き直す。

pub mod dashboard;
pub mod gauge;
pub mod layout;
pub mod pie;
pub mod word_cloud;

use rand::Rng;
use serde::Serialize;
use serde_json::Value;

use crate::theme::Theme;
use crate::types::AnalysisResult;

pub use dashboard::{distribution_figure, trend_dates, trend_figure, TREND_DAYS};
pub use gauge::gauge_figure;
pub use pie::{pie_figure, BucketCounts};
pub use word_cloud::{sized_words, word_cloud, PlacedWord, WordCloud, WORD_CLOUD_PLACEHOLDER};

/// 描画先の要素ID
pub const SENTIMENT_METER_ID: &str = "sentimentMeter";
pub const EMOTION_PIE_ID: &str = "emotionPieChart";
pub const WORD_CLOUD_ID: &str = "wordCloud";
pub const DISTRIBUTION_ID: &str = "sentimentDistribution";
pub const TRENDS_ID: &str = "sentimentTrends";

/// Plotly.newPlot に渡す1枚分
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Value,
    pub layout: Value,
}

impl Figure {
    /// `data` の最初のトレース
    pub fn trace(&self) -> &Value {
        &self.data[0]
    }
}

/// 解析画面の3つの図
#[derive(Debug, Clone, PartialEq)]
pub struct Visualizations {
    pub gauge: Figure,
    pub pie: Figure,
    pub word_cloud: WordCloud,
}

impl Visualizations {
    /// `None` なら空の状態（ゲージ0・全ゼロの円グラフ・プレースホルダー）
    pub fn build<R: Rng + ?Sized>(theme: Theme, analysis: Option<&AnalysisResult>, rng: &mut R) -> Self {
        let words = analysis.map(|a| a.word_sentiments.as_slice()).unwrap_or(&[]);
        Self {
            gauge: gauge_figure(theme, analysis.map(|a| a.positive_score)),
            pie: pie_figure(theme, words),
            word_cloud: word_cloud(theme, words, rng),
        }
    }

    pub fn empty<R: Rng + ?Sized>(theme: Theme, rng: &mut R) -> Self {
        Self::build(theme, None, rng)
    }
}

/// [0,1] に収める。数値でなければ0
pub(crate) fn unit_interval(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Sentiment, WordSentiment};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            sentiment: Sentiment::Positive,
            score: 0.92,
            positive_score: 0.92,
            word_sentiments: vec![WordSentiment {
                text: "love".to_string(),
                sentiment: Sentiment::Positive,
                score: 0.9,
            }],
        }
    }

    #[test]
    fn test_build_with_analysis() {
        let mut rng = SmallRng::seed_from_u64(7);
        let visuals = Visualizations::build(Theme::Light, Some(&sample()), &mut rng);

        assert_eq!(visuals.gauge.trace()["value"], 0.92);
        assert_eq!(visuals.pie.trace()["values"], serde_json::json!([1, 0, 0]));
        assert!(matches!(visuals.word_cloud, WordCloud::Chart { .. }));
    }

    #[test]
    fn test_empty_state() {
        let mut rng = SmallRng::seed_from_u64(7);
        let visuals = Visualizations::empty(Theme::Dark, &mut rng);

        assert_eq!(visuals.gauge.trace()["value"], 0.0);
        assert_eq!(visuals.pie.trace()["values"], serde_json::json!([0, 0, 0]));
        assert_eq!(visuals.word_cloud, WordCloud::Placeholder);
    }

    #[test]
    fn test_theme_switch_keeps_data() {
        let analysis = sample();
        let mut rng = SmallRng::seed_from_u64(1);
        let light = Visualizations::build(Theme::Light, Some(&analysis), &mut rng);
        let dark = Visualizations::build(Theme::Dark, Some(&analysis), &mut rng);

        assert_eq!(light.gauge.trace()["value"], dark.gauge.trace()["value"]);
        assert_eq!(light.pie.trace()["values"], dark.pie.trace()["values"]);
        assert_ne!(light.pie.trace()["marker"], dark.pie.trace()["marker"]);
        assert_ne!(light.gauge.layout["paper_bgcolor"], dark.gauge.layout["paper_bgcolor"]);

        match (&light.word_cloud, &dark.word_cloud) {
            (WordCloud::Chart { words: a, .. }, WordCloud::Chart { words: b, .. }) => {
                assert_eq!(a[0].text, b[0].text);
                assert_eq!(a[0].size, b[0].size);
                assert_ne!(a[0].color, b[0].color);
            }
            _ => panic!("word cloud should be a chart"),
        }
    }

    #[test]
    fn test_unit_interval() {
        assert_eq!(unit_interval(1.5), 1.0);
        assert_eq!(unit_interval(-0.1), 0.0);
        assert_eq!(unit_interval(f64::NAN), 0.0);
        assert_eq!(unit_interval(0.42), 0.42);
    }
}
