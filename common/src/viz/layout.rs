//! 共通レイアウト

use serde_json::{json, Value};

use crate::theme::Theme;

/// 通常の図の高さ
pub const DEFAULT_HEIGHT: u32 = 250;
/// ワードクラウド・ダッシュボードの図の高さ
pub const TALL_HEIGHT: u32 = 300;

/// テーマに合わせた背景・文字色・余白
pub fn base_layout(theme: Theme, height: u32) -> Value {
    let palette = theme.palette();
    json!({
        "paper_bgcolor": palette.background,
        "plot_bgcolor": palette.background,
        "font": { "color": palette.text },
        "margin": { "t": 30, "b": 0, "l": 30, "r": 30 },
        "height": height,
    })
}

/// `base` に `overrides` のトップレベルキーを上書きする
pub fn with_overrides(mut base: Value, overrides: Value) -> Value {
    if let (Some(target), Value::Object(extra)) = (base.as_object_mut(), overrides) {
        for (key, value) in extra {
            target.insert(key, value);
        }
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_layout_follows_theme() {
        let light = base_layout(Theme::Light, DEFAULT_HEIGHT);
        let dark = base_layout(Theme::Dark, DEFAULT_HEIGHT);
        assert_eq!(light["paper_bgcolor"], "#fff");
        assert_eq!(dark["paper_bgcolor"], "#222");
        assert_eq!(dark["font"]["color"], "#fff");
        assert_eq!(light["height"], 250);
    }

    #[test]
    fn test_with_overrides_replaces_keys() {
        let layout = with_overrides(
            base_layout(Theme::Light, DEFAULT_HEIGHT),
            json!({ "height": TALL_HEIGHT, "xaxis": { "title": "Date" } }),
        );
        assert_eq!(layout["height"], 300);
        assert_eq!(layout["xaxis"]["title"], "Date");
        assert_eq!(layout["plot_bgcolor"], "#fff");
    }
}
