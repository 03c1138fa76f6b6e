use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error(transparent)]
    Analysis(#[from] sentiment_common::Error),

    #[error("入力がありません: {0}")]
    EmptyInput(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("HTTPクライアントの初期化に失敗: {0}")]
    HttpClient(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl DashboardError {
    /// 元になった共通エラー（あれば）
    pub fn analysis(&self) -> Option<&sentiment_common::Error> {
        match self {
            DashboardError::Analysis(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
