//! 履歴テーブルの行

use chrono::{DateTime, NaiveDateTime};

use crate::summary::format_confidence;
use crate::types::{HistoryEntry, Sentiment};

/// 履歴がないときの1行
pub const EMPTY_HISTORY_MESSAGE: &str = "No analysis history available";
/// 列数（本文・感情・確信度・日時）
pub const HISTORY_COLUMNS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub text: String,
    pub sentiment: Sentiment,
    pub badge_color: &'static str,
    /// `"92.0%"`
    pub confidence: String,
    pub timestamp: String,
}

impl From<&HistoryEntry> for HistoryRow {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            text: entry.text.clone(),
            sentiment: entry.sentiment,
            badge_color: entry.sentiment.bar_color(),
            confidence: format!("{}%", format_confidence(entry.score)),
            timestamp: format_timestamp(&entry.timestamp),
        }
    }
}

pub fn history_rows(entries: &[HistoryEntry]) -> Vec<HistoryRow> {
    entries.iter().map(HistoryRow::from).collect()
}

/// `M/D/YYYY, h:MM:SS AM` 形式にする
///
/// RFC 3339 と SQLite の `YYYY-MM-DD HH:MM:SS` を受け付け、
/// どちらでもなければそのまま返す。
pub fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(DISPLAY).to_string();
    }
    for pattern in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, pattern) {
            return parsed.format(DISPLAY).to_string();
        }
    }
    raw.to_string()
}
