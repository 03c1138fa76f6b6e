//! fetch による解析サーバーとの通信
//!
//! HTTPステータスは見ない。エラー時もサーバーは `{ "error": ... }` を返すので、
//! 本文のパースに判定を任せる。

use sentiment_common::{
    parse_analyze_response, parse_stats_response, AnalysisBackend, AnalysisResult,
    AnalyzeRequest, Error, Result, StatsSnapshot,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

const ANALYZE_PATH: &str = "/analyze";
const STATS_PATH: &str = "/stats";

/// ページと同じオリジンのサーバーを呼ぶ
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchBackend;

impl AnalysisBackend for FetchBackend {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        let body = serde_json::to_string(&AnalyzeRequest { text })?;
        let response = fetch_text("POST", ANALYZE_PATH, Some(&body)).await?;
        parse_analyze_response(&response)
    }

    async fn stats(&self) -> Result<StatsSnapshot> {
        let response = fetch_text("GET", STATS_PATH, None).await?;
        parse_stats_response(&response)
    }
}

fn transport(value: JsValue) -> Error {
    Error::Transport(format!("{:?}", value))
}

/// リクエストを送り、本文を文字列で返す
async fn fetch_text(method: &str, url: &str, body: Option<&str>) -> Result<String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::SameOrigin);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(transport)?;
    }

    let window = web_sys::window().ok_or_else(|| Error::Transport("window is unavailable".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let resp: Response = resp_value.dyn_into().map_err(transport)?;

    let text = JsFuture::from(resp.text().map_err(transport)?)
        .await
        .map_err(transport)?;
    text.as_string()
        .ok_or_else(|| Error::Transport("response body is not text".into()))
}
