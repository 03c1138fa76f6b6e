//! Sentiment Dashboard Common Library
//!
//! CLIとWeb(WASM)で共有される型・表示内容・解析の流れ

pub mod types;
pub mod error;
pub mod response;
pub mod theme;
pub mod debounce;
pub mod summary;
pub mod history;
pub mod session;
pub mod viz;

pub use types::{
    AnalysisResult, AnalyzeRequest, BatchItem, BatchRequest, BatchResponse, HistoryEntry,
    Sentiment, StatsSnapshot, WordSentiment,
};
pub use error::{Error, Result, GENERIC_ANALYSIS_ERROR};
pub use response::{parse_analyze_response, parse_batch_response, parse_stats_response};
pub use theme::{Palette, Theme, THEME_STORAGE_KEY};
pub use debounce::{Debouncer, LiveSubscription, Scheduler, LIVE_ANALYSIS_DELAY};
pub use summary::{format_confidence, ResultSummary, ResultView, EMPTY_INPUT_MESSAGE};
pub use history::{format_timestamp, history_rows, HistoryRow, EMPTY_HISTORY_MESSAGE};
pub use session::{
    analyze_text, load_history, load_stats, AnalysisBackend, AnalysisOutcome, Tab, TabFetch,
};
pub use viz::{Figure, Visualizations, WordCloud};

/// 1回のバッチ解析に渡せる最大件数
pub const MAX_BATCH_SIZE: usize = 50;
