//! エラー型定義

use thiserror::Error;

/// 解析が失敗した時に表示する汎用メッセージ
pub const GENERIC_ANALYSIS_ERROR: &str = "An error occurred during analysis.";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// サーバーが `{ "error": ... }` を返した
    #[error("server error: {0}")]
    Server(String),

    /// ネットワーク・HTTPレベルの失敗
    #[error("transport error: {0}")]
    Transport(String),

    /// JSONでない、または想定外の形のレスポンス
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// サーバー側が報告したエラーかどうか
    pub fn is_server(&self) -> bool {
        matches!(self, Error::Server(_))
    }

    /// 利用者に見せる案内メッセージ
    ///
    /// サーバーのエラー文字列はそのまま見せ、それ以外は汎用メッセージにまとめる。
    pub fn advisory(&self) -> String {
        match self {
            Error::Server(message) => format!("Error: {}", message),
            _ => GENERIC_ANALYSIS_ERROR.to_string(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advisory_server_error_is_literal() {
        let error = Error::Server("text too long".to_string());
        assert_eq!(error.advisory(), "Error: text too long");
        assert!(error.is_server());
    }

    #[test]
    fn test_advisory_transport_error_is_generic() {
        let error = Error::Transport("connection refused".to_string());
        assert_eq!(error.advisory(), GENERIC_ANALYSIS_ERROR);
        assert!(!error.is_server());
    }

    #[test]
    fn test_advisory_json_error_is_generic() {
        let json_error = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
        assert_eq!(error.advisory(), GENERIC_ANALYSIS_ERROR);
    }

    #[test]
    fn test_error_display() {
        let error = Error::InvalidInput("batch too large".to_string());
        assert_eq!(format!("{}", error), "invalid input: batch too large");

        let error = Error::Transport("timeout".to_string());
        assert!(format!("{}", error).contains("timeout"));
    }
}
