//! 解析・統計取得の流れ
//!
//! WebとCLIのどちらも、ここを通してサーバーを呼ぶ。
//! 通信手段は `AnalysisBackend` の実装側（fetch / reqwest）が持つ。

use crate::error::{Error, Result};
use crate::summary::{ResultSummary, ResultView, EMPTY_INPUT_MESSAGE};
use crate::types::{AnalysisResult, BatchResponse, HistoryEntry, StatsSnapshot};

/// 解析サーバーへの窓口
#[allow(async_fn_in_trait)]
pub trait AnalysisBackend {
    /// `POST /analyze`
    async fn analyze(&self, text: &str) -> Result<AnalysisResult>;

    /// `GET /stats`
    async fn stats(&self) -> Result<StatsSnapshot>;

    /// `POST /analyze-batch`
    async fn analyze_batch(&self, _texts: &[String]) -> Result<BatchResponse> {
        Err(Error::InvalidInput("batch analysis is not supported by this backend".into()))
    }
}

/// 1回の解析の結末
///
/// `current` が `None` なら可視化は空の状態に戻す。
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub view: ResultView,
    pub current: Option<AnalysisResult>,
}

impl AnalysisOutcome {
    fn advisory(message: impl Into<String>) -> Self {
        Self {
            view: ResultView::advisory(message),
            current: None,
        }
    }
}

/// テキストを解析する
///
/// - 空白だけなら通信せずに案内を返す
/// - 通信中は `on_loading(true)`、終わればどの結末でも `on_loading(false)`
/// - サーバーには前後の空白を残したまま送る
pub async fn analyze_text<B, L>(backend: &B, text: &str, mut on_loading: L) -> AnalysisOutcome
where
    B: AnalysisBackend + ?Sized,
    L: FnMut(bool),
{
    if text.trim().is_empty() {
        return AnalysisOutcome::advisory(EMPTY_INPUT_MESSAGE);
    }

    on_loading(true);
    let response = backend.analyze(text).await;
    on_loading(false);

    match response {
        Ok(result) => {
            log::debug!("Analysis data: {:?}", result);
            AnalysisOutcome {
                view: ResultView::Summary(ResultSummary::from(&result)),
                current: Some(result),
            }
        }
        Err(err) => {
            if !err.is_server() {
                log::error!("Analysis error: {}", err);
            }
            AnalysisOutcome::advisory(err.advisory())
        }
    }
}

/// 統計を取得する。失敗はログだけ残して `None`
pub async fn load_stats<B: AnalysisBackend + ?Sized>(backend: &B) -> Option<StatsSnapshot> {
    match backend.stats().await {
        Ok(stats) => Some(stats),
        Err(err) => {
            log::error!("Stats error: {}", err);
            None
        }
    }
}

/// 最近の履歴を取得する。失敗はログだけ残して `None`
pub async fn load_history<B: AnalysisBackend + ?Sized>(backend: &B) -> Option<Vec<HistoryEntry>> {
    match backend.stats().await {
        Ok(stats) => Some(stats.recent),
        Err(err) => {
            log::error!("History error: {}", err);
            None
        }
    }
}

/// 画面のタブ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Analyze,
    Dashboard,
    History,
}

/// タブを開いた時の取得処理
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabFetch {
    Stats,
    History,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Analyze, Tab::Dashboard, Tab::History];

    /// `data-tab` の値
    pub fn key(&self) -> &'static str {
        match self {
            Tab::Analyze => "analyze",
            Tab::Dashboard => "dashboard",
            Tab::History => "history",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Analyze => "Analyze",
            Tab::Dashboard => "Dashboard",
            Tab::History => "History",
        }
    }

    /// タブ本体の要素ID
    pub fn pane_id(&self) -> String {
        format!("{}-tab", self.key())
    }

    pub fn fetch_on_activate(&self) -> Option<TabFetch> {
        match self {
            Tab::Analyze => None,
            Tab::Dashboard => Some(TabFetch::Stats),
            Tab::History => Some(TabFetch::History),
        }
    }
}
