//! ターミナル向けの表示
//!
//! 画面と同じ内容（要約・単語の内訳・統計・履歴）を文字列にする。

use sentiment_common::viz::{sized_words, BucketCounts, WORD_CLOUD_PLACEHOLDER};
use sentiment_common::{
    format_confidence, history_rows, AnalysisResult, BatchItem, HistoryEntry, ResultSummary, Sentiment,
    StatsSnapshot, EMPTY_HISTORY_MESSAGE,
};

use crate::batch::BatchTally;

const BAR_WIDTH: usize = 30;
const TEXT_WIDTH: usize = 40;

/// 色名を端末の色に変える
fn paint(color: &str, text: &str) -> String {
    let code = match color {
        "success" => "32",
        "warning" => "33",
        "danger" => "31",
        _ => return text.to_string(),
    };
    format!("\x1b[{}m{}\x1b[0m", code, text)
}

/// 確信度のバー（`score` は [0,1]）
pub fn confidence_bar(score: f64, color: &str) -> String {
    let filled = ((score.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
    paint(color, &bar)
}

/// 長い本文を切り詰める
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let head: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", head)
}

/// 1行ずつ改行を付けてつなぐ
fn lines(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

pub fn render_summary(result: &AnalysisResult) -> String {
    let summary = ResultSummary::from(result);
    lines(vec![
        format!("{} Sentiment: {}", summary.emoji, summary.label),
        confidence_bar(result.score, summary.bar_color),
        format!("Confidence: {}%", summary.confidence),
    ])
}

/// 円グラフの内訳とワードクラウドの単語
pub fn render_words(result: &AnalysisResult) -> String {
    let buckets = BucketCounts::from_words(&result.word_sentiments);
    let mut out = vec![format!(
        "Words: {} positive / {} neutral / {} negative",
        buckets.positive, buckets.neutral, buckets.negative
    )];

    let sized = sized_words(&result.word_sentiments);
    if sized.is_empty() {
        out.push(WORD_CLOUD_PLACEHOLDER.to_string());
    }
    out.extend(sized.into_iter().map(|(word, size)| {
        format!(
            "  {:<20} {:<8} {:>5} {:>4.0}px",
            truncate(&word.text, 20),
            word.sentiment.as_str(),
            format_confidence(word.score),
            size
        )
    }));
    lines(out)
}

pub fn render_stats(stats: &StatsSnapshot) -> String {
    let mut out = vec![format!("Total Analyses: {}", stats.total)];
    out.extend(Sentiment::ALL.into_iter().map(|sentiment| {
        let count = stats.count(sentiment);
        let share = if stats.total == 0 { 0.0 } else { count as f64 / stats.total as f64 };
        format!(
            "{:<9} {:>6}  {}",
            sentiment.label(),
            count,
            confidence_bar(share, sentiment.bar_color())
        )
    }));
    lines(out)
}

pub fn render_history(entries: &[HistoryEntry]) -> String {
    let rows = history_rows(entries);
    let mut out = vec![format!(
        "{:<w$} {:<9} {:>10}  {}",
        "Text",
        "Sentiment",
        "Confidence",
        "Time",
        w = TEXT_WIDTH
    )];
    if rows.is_empty() {
        out.push(EMPTY_HISTORY_MESSAGE.to_string());
    }
    out.extend(rows.into_iter().map(|row| {
        format!(
            "{:<w$} {:<9} {:>10}  {}",
            truncate(&row.text, TEXT_WIDTH),
            paint(row.badge_color, row.sentiment.as_str()),
            row.confidence,
            row.timestamp,
            w = TEXT_WIDTH
        )
    }));
    lines(out)
}

pub fn render_batch(items: &[BatchItem]) -> String {
    let mut out: Vec<String> = items
        .iter()
        .map(|item| {
            format!(
                "{} {:<w$} {:<9} {:>6}%",
                item.sentiment.emoji(),
                truncate(&item.text, TEXT_WIDTH),
                item.sentiment.label(),
                format_confidence(item.score),
                w = TEXT_WIDTH
            )
        })
        .collect();

    let tally = BatchTally::from_items(items);
    out.push(String::new());
    out.push(format!(
        "{} analysed: {} positive, {} neutral, {} negative",
        items.len(),
        tally.positive,
        tally.neutral,
        tally.negative
    ));
    lines(out)
}
