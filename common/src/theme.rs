//! テーマ（ライト/ダーク）と配色

use serde::{Deserialize, Serialize};

use crate::types::Sentiment;

/// テーマ設定を保存するキー
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// 保存値から復元する。`"dark"` 以外はすべてライト扱い
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// `<body>` に付けるクラス
    pub fn body_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark-mode",
        }
    }

    /// 描画のたびに呼ぶ。キャッシュしない
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                text: "#000",
                background: "#fff",
                gauge_bar: "darkblue",
                gauge_background: "white",
                gauge_border: "gray",
                gauge_tick: "darkblue",
                gauge_zones: ["red", "yellow", "green"],
                threshold: "black",
                positive: "green",
                neutral: "#cc7700",
                negative: "red",
            },
            Theme::Dark => Palette {
                text: "#fff",
                background: "#222",
                gauge_bar: "#4f8",
                gauge_background: "#333",
                gauge_border: "#777",
                gauge_tick: "#aaa",
                gauge_zones: ["#a33", "#aa3", "#3a3"],
                threshold: "white",
                positive: "#7f7",
                neutral: "#ff7",
                negative: "#f77",
            },
        }
    }
}

/// テーマごとの色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: &'static str,
    pub background: &'static str,
    pub gauge_bar: &'static str,
    pub gauge_background: &'static str,
    pub gauge_border: &'static str,
    pub gauge_tick: &'static str,
    /// 低・中・高ゾーン
    pub gauge_zones: [&'static str; 3],
    pub threshold: &'static str,
    pub positive: &'static str,
    pub neutral: &'static str,
    pub negative: &'static str,
}

impl Palette {
    pub fn sentiment(&self, sentiment: Sentiment) -> &'static str {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    /// Positive, Neutral, Negative の順
    pub fn sentiment_colors(&self) -> [&'static str; 3] {
        Sentiment::ALL.map(|s| self.sentiment(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::from_stored(Some(Theme::Dark.as_str())), Theme::Dark);
    }

    #[test]
    fn test_palettes_differ() {
        let light = Theme::Light.palette();
        let dark = Theme::Dark.palette();
        assert_ne!(light.sentiment_colors(), dark.sentiment_colors());
        assert_ne!(light.gauge_zones, dark.gauge_zones);
        assert_eq!(light.sentiment_colors(), ["green", "#cc7700", "red"]);
        assert_eq!(dark.sentiment(Sentiment::Negative), "#f77");
    }
}
