//! 設定ファイルのテスト

use sentiment_dashboard::config::Config;
use sentiment_dashboard::error::DashboardError;
use std::time::Duration;
use tempfile::tempdir;

/// ファイルがなければ既定値
#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.endpoint, "http://127.0.0.1:5000");
    assert_eq!(config.timeout(), Duration::from_secs(30));
}

/// 保存と読み込み（親ディレクトリも作る）
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_endpoint("https://sentiment.example.com/").unwrap();
    config.set_timeout(5).unwrap();
    config.save_to(&path).expect("設定保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.endpoint, "https://sentiment.example.com");
    assert_eq!(loaded.timeout_seconds, 5);
}

/// 欠けた項目は既定値で埋まる
#[test]
fn test_partial_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "timeout_seconds": 12 }"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.endpoint, "http://127.0.0.1:5000");
    assert_eq!(config.timeout_seconds, 12);
}

/// 壊れたファイルはエラー
#[test]
fn test_broken_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json").unwrap();

    assert!(matches!(Config::load_from(&path), Err(DashboardError::JsonParse(_))));
}

#[test]
fn test_rejects_invalid_values() {
    let mut config = Config::default();
    assert!(matches!(config.set_endpoint("ftp://host"), Err(DashboardError::Config(_))));
    assert!(matches!(config.set_timeout(0), Err(DashboardError::Config(_))));
    assert_eq!(config, Config::default());
}
