//! 解析結果の表示内容

use crate::types::{AnalysisResult, Sentiment};

/// 入力が空のときの案内
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text for analysis.";

/// 確信度を百分率・小数1桁の文字列にする（`0.92` → `"92.0"`）
///
/// ちょうど半分は切り上げる（`0.1225` → `"12.3"`）。
pub fn format_confidence(score: f64) -> String {
    format!("{:.1}", (score * 1000.0).round() / 10.0)
}

/// 解析成功時の要約
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSummary {
    pub sentiment: Sentiment,
    pub emoji: &'static str,
    pub label: &'static str,
    /// `"92.0"` のような表示用文字列（%なし）
    pub confidence: String,
    pub bar_color: &'static str,
}

impl ResultSummary {
    /// プログレスバーの幅（%）
    pub fn bar_width(&self) -> String {
        format!("{}%", self.confidence)
    }
}

impl From<&AnalysisResult> for ResultSummary {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            sentiment: result.sentiment,
            emoji: result.sentiment.emoji(),
            label: result.sentiment.label(),
            confidence: format_confidence(result.score),
            bar_color: result.sentiment.bar_color(),
        }
    }
}

/// 結果欄に出すもの
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    /// 中立色の案内文
    Advisory(String),
    Summary(ResultSummary),
}

impl ResultView {
    pub fn advisory(message: impl Into<String>) -> Self {
        ResultView::Advisory(message.into())
    }

    /// 結果欄のクラス（`sentiment-result mt-3 positive` など）
    pub fn css_class(&self) -> String {
        let modifier = match self {
            ResultView::Advisory(_) => Sentiment::Neutral.as_str(),
            ResultView::Summary(summary) => summary.sentiment.as_str(),
        };
        format!("sentiment-result mt-3 {}", modifier)
    }
}
