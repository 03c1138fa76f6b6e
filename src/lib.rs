//! Sentiment Dashboard CLI
//!
//! 感情分析サーバー（`/analyze`・`/stats`・`/analyze-batch`）のターミナルクライアント

pub mod batch;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod progress;
pub mod report;
