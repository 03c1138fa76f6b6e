//! バッチ解析
//!
//! 1行1テキスト。空行は読み飛ばし、`MAX_BATCH_SIZE` 件ずつ送る。

use std::path::Path;

use sentiment_common::{AnalysisBackend, BatchItem, Sentiment, MAX_BATCH_SIZE};
use tracing::info;

use crate::error::{DashboardError, Result};

/// ファイルから解析対象の行を読む
pub fn read_texts(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(DashboardError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(split_texts(&content))
}

/// 空白だけの行を除いて1行ずつに分ける
pub fn split_texts(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// 上限ごとに分けて順に送る。結果は入力順
pub async fn analyze_all<B>(backend: &B, texts: &[String]) -> Result<Vec<BatchItem>>
where
    B: AnalysisBackend + ?Sized,
{
    if texts.is_empty() {
        return Err(DashboardError::EmptyInput("解析するテキストがありません".into()));
    }

    let chunks = texts.len().div_ceil(MAX_BATCH_SIZE);
    let mut results = Vec::with_capacity(texts.len());
    for (i, chunk) in texts.chunks(MAX_BATCH_SIZE).enumerate() {
        info!(chunk = i + 1, of = chunks, size = chunk.len(), "sending batch");
        let response = backend.analyze_batch(chunk).await?;
        results.extend(response.results);
    }
    Ok(results)
}

/// 感情ごとの件数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchTally {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl BatchTally {
    pub fn from_items(items: &[BatchItem]) -> Self {
        let mut tally = Self::default();
        for item in items {
            match item.sentiment {
                Sentiment::Positive => tally.positive += 1,
                Sentiment::Neutral => tally.neutral += 1,
                Sentiment::Negative => tally.negative += 1,
            }
        }
        tally
    }

    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }
}
