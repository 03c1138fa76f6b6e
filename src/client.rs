//! reqwest による解析サーバーとの通信
//!
//! Web版と同じく、HTTPステータスではなく本文で成否を判定する。

use std::time::Duration;

use sentiment_common::{
    parse_analyze_response, parse_batch_response, parse_stats_response, AnalysisBackend,
    AnalysisResult, AnalyzeRequest, BatchRequest, BatchResponse, Error, Result, StatsSnapshot,
    MAX_BATCH_SIZE,
};
use tracing::debug;

use crate::config::Config;
use crate::error::DashboardError;

const ANALYZE_PATH: &str = "/analyze";
const STATS_PATH: &str = "/stats";
const BATCH_PATH: &str = "/analyze-batch";

/// 指定したサーバーを呼ぶ
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(endpoint: &str, timeout: Duration) -> std::result::Result<Self, DashboardError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DashboardError::HttpClient(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> std::result::Result<Self, DashboardError> {
        Self::new(&config.resolved_endpoint(), config.timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    /// 送信して本文を返す。ステータスは記録するだけ
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String> {
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        debug!(%status, bytes = body.len(), "response received");
        Ok(body)
    }
}

fn transport(err: reqwest::Error) -> Error {
    Error::Transport(err.to_string())
}

impl AnalysisBackend for HttpBackend {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        let request = self
            .client
            .post(self.url(ANALYZE_PATH))
            .json(&AnalyzeRequest { text });
        parse_analyze_response(&self.send(request).await?)
    }

    async fn stats(&self) -> Result<StatsSnapshot> {
        let request = self.client.get(self.url(STATS_PATH));
        parse_stats_response(&self.send(request).await?)
    }

    async fn analyze_batch(&self, texts: &[String]) -> Result<BatchResponse> {
        if texts.is_empty() {
            return Err(Error::InvalidInput("no texts to analyze".into()));
        }
        if texts.len() > MAX_BATCH_SIZE {
            return Err(Error::InvalidInput(format!(
                "at most {} texts per batch, got {}",
                MAX_BATCH_SIZE,
                texts.len()
            )));
        }
        let request = self
            .client
            .post(self.url(BATCH_PATH))
            .json(&BatchRequest { texts });
        parse_batch_response(&self.send(request).await?)
    }
}
