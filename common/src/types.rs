//! 解析結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - AnalysisResult: `/analyze` の出力
//! - StatsSnapshot: `/stats` の出力（集計 + 最近の履歴）
//! - BatchItem: `/analyze-batch` の1件分

use serde::{Deserialize, Serialize};

/// 感情の分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// 表示順（グラフの並びもこの順）
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// 先頭大文字のラベル
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Sentiment::Positive => "😊",
            Sentiment::Neutral => "😐",
            Sentiment::Negative => "😞",
        }
    }

    /// プログレスバー・バッジの色名（Bootstrapのコンテキストクラス）
    pub fn bar_color(&self) -> &'static str {
        match self {
            Sentiment::Positive => "success",
            Sentiment::Negative => "danger",
            Sentiment::Neutral => "warning",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 単語ごとの感情
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordSentiment {
    pub text: String,
    pub sentiment: Sentiment,
    pub score: f64,
}

/// 文章全体の解析結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sentiment: Sentiment,

    /// 分類の確信度 [0,1]
    pub score: f64,

    /// ポジティブ度 [0,1]（ゲージ表示用）
    pub positive_score: f64,

    #[serde(default)]
    pub word_sentiments: Vec<WordSentiment>,
}

/// 履歴1件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub text: String,
    pub sentiment: Sentiment,
    pub score: f64,
    pub timestamp: String,
}

/// `/stats` のスナップショット
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsSnapshot {
    pub total: u64,
    pub positive: u64,
    pub neutral: u64,
    pub negative: u64,
    pub recent: Vec<HistoryEntry>,
}

impl StatsSnapshot {
    pub fn count(&self, sentiment: Sentiment) -> u64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }
}

/// `/analyze` リクエスト
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub text: &'a str,
}

/// `/analyze-batch` リクエスト
#[derive(Debug, Clone, Serialize)]
pub struct BatchRequest<'a> {
    pub texts: &'a [String],
}

/// バッチ解析の1件（単語単位の内訳は含まない）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchItem {
    pub text: String,
    pub sentiment: Sentiment,
    pub score: f64,
    pub positive_score: f64,
}

/// `/analyze-batch` レスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResponse {
    #[serde(default)]
    pub results: Vec<BatchItem>,
}
