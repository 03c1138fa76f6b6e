//! 解析サーバーAPI

mod client;

pub use client::FetchBackend;
