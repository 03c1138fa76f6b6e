//! APIレスポンスパーサー
//!
//! サーバーは成功時にペイロードを、失敗時に `{ "error": "..." }` を返す。
//! HTTPステータスに関係なく本文で判定する。

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::{AnalysisResult, BatchResponse, StatsSnapshot};

/// 成功ペイロードまたはサーバーエラー
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Failure { error: String },
    Success(T),
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Result<T> {
        match self {
            ApiResponse::Failure { error } => Err(Error::Server(error)),
            ApiResponse::Success(value) => Ok(value),
        }
    }
}

/// 本文をパースし、`error` フィールドがあればサーバーエラーにする
pub fn parse_response<T: DeserializeOwned>(body: &str) -> Result<T> {
    let response: ApiResponse<T> = serde_json::from_str(body)?;
    response.into_result()
}

/// `/analyze` レスポンスをパース
pub fn parse_analyze_response(body: &str) -> Result<AnalysisResult> {
    parse_response(body)
}

/// `/stats` レスポンスをパース
pub fn parse_stats_response(body: &str) -> Result<StatsSnapshot> {
    parse_response(body)
}

/// `/analyze-batch` レスポンスをパース
pub fn parse_batch_response(body: &str) -> Result<BatchResponse> {
    parse_response(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sentiment;

    #[test]
    fn test_parse_analyze_success() {
        let body = r#"{"sentiment":"negative","score":0.81,"positive_score":0.02,"word_sentiments":[]}"#;
        let result = parse_analyze_response(body).unwrap();
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert!((result.score - 0.81).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_analyze_server_error() {
        let body = r#"{"error":"text too long"}"#;
        let err = parse_analyze_response(body).unwrap_err();
        assert!(matches!(err, Error::Server(ref m) if m == "text too long"));
    }

    #[test]
    fn test_parse_analyze_non_json() {
        let err = parse_analyze_response("<!doctype html><p>Bad Gateway</p>").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_parse_analyze_unexpected_shape() {
        let err = parse_analyze_response(r#"{"status":"ok"}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_parse_stats_with_recent() {
        let body = r#"{
            "total": 2, "positive": 1, "neutral": 0, "negative": 1,
            "recent": [
                {"text": "great", "sentiment": "positive", "score": 0.97, "timestamp": "2024-05-01 10:00:00"},
                {"text": "awful", "sentiment": "negative", "score": 0.88, "timestamp": "2024-05-01 09:00:00"}
            ]
        }"#;
        let stats = parse_stats_response(body).unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.recent.len(), 2);
        assert_eq!(stats.recent[1].sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_parse_stats_error() {
        let body = r#"{"error":"An error occurred while fetching statistics"}"#;
        assert!(parse_stats_response(body).unwrap_err().is_server());
    }

    #[test]
    fn test_parse_batch_response() {
        let body = r#"{"results":[{"text":"ok","sentiment":"neutral","score":0.6,"positive_score":0.3}]}"#;
        let batch = parse_batch_response(body).unwrap();
        assert_eq!(batch.results.len(), 1);
        assert_eq!(batch.results[0].sentiment, Sentiment::Neutral);
    }
}
