use sentiment_common::{AnalysisBackend, Sentiment};
use sentiment_dashboard::client::HttpBackend;
use std::time::Duration;

#[tokio::test]
async fn live_analyze_and_stats() {
    let endpoint = match std::env::var("SENTIMENT_ENDPOINT") {
        Ok(endpoint) if !endpoint.trim().is_empty() => endpoint,
        _ => {
            eprintln!("SENTIMENT_ENDPOINT not set; skipping integration test");
            return;
        }
    };

    let backend = HttpBackend::new(&endpoint, Duration::from_secs(30)).expect("client");

    let result = backend
        .analyze("I absolutely love how fast this is")
        .await
        .expect("analyze failed");
    assert!(Sentiment::ALL.contains(&result.sentiment));
    assert!((0.0..=1.0).contains(&result.score));
    assert!((0.0..=1.0).contains(&result.positive_score));

    let stats = backend.stats().await.expect("stats failed");
    assert!(stats.total >= 1);
}
