//! 図の描画
//!
//! 呼ぶたびに図を作り直す（テーマ切替でもデータは変えずに配色だけ変わる）。

use chrono::NaiveDate;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sentiment_common::viz::{
    distribution_figure, trend_figure, DISTRIBUTION_ID, EMOTION_PIE_ID, SENTIMENT_METER_ID,
    TRENDS_ID, WORD_CLOUD_ID, WORD_CLOUD_PLACEHOLDER,
};
use sentiment_common::{AnalysisResult, Figure, StatsSnapshot, Theme, Visualizations, WordCloud};

use crate::plotly;

/// 配置用の乱数。種は Math.random から取る
fn layout_rng() -> SmallRng {
    SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}

/// ブラウザのローカル日付
fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

fn draw(element_id: &str, figure: &Figure) {
    if let Err(e) = plotly::new_plot(element_id, figure) {
        log::error!("{}", e);
    }
}

/// ゲージ・円グラフ・ワードクラウドを描く。`None` なら空の状態
pub fn render_visualizations(theme: Theme, analysis: Option<&AnalysisResult>) {
    let visuals = Visualizations::build(theme, analysis, &mut layout_rng());

    draw(SENTIMENT_METER_ID, &visuals.gauge);
    draw(EMOTION_PIE_ID, &visuals.pie);
    match &visuals.word_cloud {
        WordCloud::Placeholder => {
            if let Err(e) = plotly::show_placeholder(WORD_CLOUD_ID, WORD_CLOUD_PLACEHOLDER) {
                log::error!("{}", e);
            }
        }
        WordCloud::Chart { figure, .. } => draw(WORD_CLOUD_ID, figure),
    }
}

/// ダッシュボードの分布と推移
pub fn render_dashboard(theme: Theme, stats: &StatsSnapshot) {
    draw(DISTRIBUTION_ID, &distribution_figure(theme, stats));
    draw(TRENDS_ID, &trend_figure(theme, stats, today(), &mut layout_rng()));
}
