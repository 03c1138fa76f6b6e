//! ダッシュボードの図（分布・7日間の推移）

use chrono::{Days, NaiveDate};
use rand::Rng;
use serde_json::json;

use super::layout::{base_layout, with_overrides, TALL_HEIGHT};
use super::Figure;
use crate::theme::Theme;
use crate::types::{Sentiment, StatsSnapshot};

/// 推移グラフの日数
pub const TREND_DAYS: u64 = 7;

/// 感情ごとの件数の棒グラフ
pub fn distribution_figure(theme: Theme, stats: &StatsSnapshot) -> Figure {
    let palette = theme.palette();
    let trace = json!({
        "type": "bar",
        "x": Sentiment::ALL.map(|s| s.label()),
        "y": Sentiment::ALL.map(|s| stats.count(s)),
        "marker": { "color": palette.sentiment_colors() },
    });

    let layout = with_overrides(
        base_layout(theme, TALL_HEIGHT),
        json!({
            "xaxis": { "title": "Sentiment" },
            "yaxis": { "title": "Count" },
        }),
    );

    Figure {
        data: json!([trace]),
        layout,
    }
}

/// 今日で終わる7日分のラベル（古い順、`Oct 16` 形式）
pub fn trend_dates(today: NaiveDate) -> Vec<String> {
    (0..TREND_DAYS)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|day| day.format("%b %-d").to_string())
        .collect()
}

/// 集計値に [0.7, 1.0) の係数を掛けた仮の日別値
///
/// 実際の日別履歴はサーバーにないので、形だけの推移になる。
/// 件数0は1として扱う。
pub fn synthetic_counts<R: Rng + ?Sized>(count: u64, days: usize, rng: &mut R) -> Vec<u64> {
    let base = count.max(1) as f64;
    (0..days)
        .map(|_| (base * (0.7 + rng.gen::<f64>() * 0.3)).floor() as u64)
        .collect()
}

/// 感情ごとの折れ線3本
pub fn trend_figure<R: Rng + ?Sized>(
    theme: Theme,
    stats: &StatsSnapshot,
    today: NaiveDate,
    rng: &mut R,
) -> Figure {
    let palette = theme.palette();
    let dates = trend_dates(today);

    let traces: Vec<_> = Sentiment::ALL
        .iter()
        .map(|&sentiment| {
            json!({
                "type": "scatter",
                "mode": "lines+markers",
                "name": sentiment.label(),
                "x": dates,
                "y": synthetic_counts(stats.count(sentiment), dates.len(), &mut *rng),
                "line": { "color": palette.sentiment(sentiment) },
            })
        })
        .collect();

    let layout = with_overrides(
        base_layout(theme, TALL_HEIGHT),
        json!({
            "xaxis": { "title": "Date" },
            "yaxis": { "title": "Count" },
            "legend": { "orientation": "h", "y": 1.1 },
        }),
    );

    Figure {
        data: json!(traces),
        layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn stats() -> StatsSnapshot {
        StatsSnapshot {
            total: 17,
            positive: 10,
            neutral: 0,
            negative: 7,
            recent: Vec::new(),
        }
    }

    #[test]
    fn test_distribution_heights() {
        let figure = distribution_figure(Theme::Light, &stats());
        assert_eq!(figure.trace()["y"], json!([10, 0, 7]));
        assert_eq!(figure.trace()["x"], json!(["Positive", "Neutral", "Negative"]));
        assert_eq!(figure.layout["yaxis"]["title"], "Count");
    }

    #[test]
    fn test_trend_dates_end_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let dates = trend_dates(today);
        assert_eq!(
            dates,
            vec!["Feb 25", "Feb 26", "Feb 27", "Feb 28", "Feb 29", "Mar 1", "Mar 2"]
        );
    }

    #[test]
    fn test_synthetic_counts_range() {
        let mut rng = SmallRng::seed_from_u64(11);
        let values = synthetic_counts(100, 7, &mut rng);
        assert_eq!(values.len(), 7);
        assert!(values.iter().all(|&v| (70..100).contains(&v)));

        // 0件は1として扱うので常に0
        let values = synthetic_counts(0, 7, &mut rng);
        assert!(values.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_trend_figure_series() {
        let mut rng = SmallRng::seed_from_u64(2);
        let today = NaiveDate::from_ymd_opt(2024, 10, 16).unwrap();
        let figure = trend_figure(Theme::Dark, &stats(), today, &mut rng);

        let traces = figure.data.as_array().unwrap();
        assert_eq!(traces.len(), 3);
        assert_eq!(traces[0]["name"], "Positive");
        assert_eq!(traces[2]["line"]["color"], "#f77");
        assert_eq!(traces[1]["x"][6], "Oct 16");
        assert_eq!(traces[1]["y"].as_array().unwrap().len(), 7);
        assert_eq!(figure.layout["legend"]["orientation"], "h");
    }
}
